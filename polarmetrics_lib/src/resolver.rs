//! Address → congressional district, via a civic lookup.

use std::sync::OnceLock;

use regex::Regex;

use polarmetrics_api::types::{CivicResponse, Office};

use crate::model::DistrictInfo;
use crate::normalize;
use crate::outcome::Outcome;
use crate::sources::CivicLookup;

/// Marker an office name must contain to count as a House seat. Case-sensitive.
pub const REPRESENTATIVE_MARKER: &str = "Representative";

fn division_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"state:([A-Za-z0-9]{2,4})/cd:(\d+)").expect("division pattern compiles")
    })
}

/// Resolve an address to a [`DistrictInfo`].
///
/// Never fails: an unavailable lookup or an empty answer yields a
/// `DistrictInfo` with no state, no district, and no raw data.
pub async fn resolve<C: CivicLookup>(address: &str, civic: &C) -> DistrictInfo {
    lookup_district(address, civic).await.unwrap_or_default()
}

/// Like [`resolve`], but keeps the tag saying why there is no data.
pub async fn lookup_district<C: CivicLookup>(address: &str, civic: &C) -> Outcome<DistrictInfo> {
    match civic.lookup(address).await {
        Err(e) => Outcome::Unavailable(e.to_string()),
        Ok(raw) => match normalize::civic_response(&raw) {
            Some(resp) => Outcome::Data(district_from_civic(&resp)),
            None => Outcome::Empty,
        },
    }
}

/// Extract state and district from a civic response.
///
/// Offices are scanned in order and every matching House office overwrites
/// the previous match, so the last one wins. The raw officials and offices
/// are attached whether or not anything matched.
pub fn district_from_civic(civic: &CivicResponse) -> DistrictInfo {
    let mut state = None;
    let mut district = None;
    for office in &civic.offices {
        if let Some((s, d)) = representative_division(office) {
            state = Some(s);
            district = Some(d);
        }
    }
    DistrictInfo {
        state,
        district,
        raw_representatives: civic.officials.clone(),
        raw_offices: civic.offices.clone(),
        normalized_input: civic.normalized_input.clone(),
    }
}

/// `(STATE, district)` for a House office with a `state:xx/cd:n` division, else `None`.
pub fn representative_division(office: &Office) -> Option<(String, u32)> {
    let name = office.name.as_deref()?;
    if !name.contains(REPRESENTATIVE_MARKER) {
        return None;
    }
    let caps = division_pattern().captures(office.division_id.as_deref()?)?;
    // districts too large for u32 are not real districts
    let district = caps[2].parse::<u32>().ok()?;
    Some((caps[1].to_uppercase(), district))
}
