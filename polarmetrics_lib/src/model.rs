//! Canonical records the pipeline stages work on.
//!
//! Upstream payloads disagree on field names and shapes; [`crate::normalize`]
//! maps them onto these types once, at the boundary, so the matching and
//! correlation code never has to guess.

use serde::{Deserialize, Serialize};

use polarmetrics_api::types::Chamber;
pub use polarmetrics_api::types::{NormalizedInput, Office, Official};

/// District resolved from a civic lookup, plus the raw officials and offices
/// the lookup returned.
///
/// `state` and `district` are `None` when no office matched, even if the raw
/// sequences are populated. `None` means unknown; it is never a stand-in for
/// an at-large seat (those resolve to district 0).
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DistrictInfo {
    /// Two-letter state code, upper-case.
    pub state: Option<String>,
    pub district: Option<u32>,
    pub raw_representatives: Vec<Official>,
    pub raw_offices: Vec<Office>,
    /// The address as the civic service normalized it. Display only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub normalized_input: Option<NormalizedInput>,
}

impl DistrictInfo {
    /// True when both the state and the district were extracted.
    pub fn is_resolved(&self) -> bool {
        self.state.is_some() && self.district.is_some()
    }
}

/// A legislator from a roster source.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LegislatorRecord {
    /// Cross-source identity key.
    pub bioguide_id: Option<String>,
    /// Two-letter code when the source's value could be mapped, otherwise as given.
    pub state: Option<String>,
    pub district: Option<u32>,
    pub party: Option<String>,
    pub party_name: Option<String>,
    pub name: Option<String>,
    pub direct_order_name: Option<String>,
    pub terms: Vec<Term>,
}

impl LegislatorRecord {
    pub fn display_name(&self) -> &str {
        self.name
            .as_deref()
            .or(self.direct_order_name.as_deref())
            .unwrap_or("Unknown")
    }

    pub fn display_party(&self) -> &str {
        self.party
            .as_deref()
            .or(self.party_name.as_deref())
            .unwrap_or("Unknown")
    }

    /// Chamber of the first listed term.
    pub fn chamber(&self) -> Option<&str> {
        self.terms.first().and_then(|t| t.chamber.as_deref())
    }

    /// True when the record's own district, or any of its terms' districts, equals `district`.
    pub fn serves_district(&self, district: u32) -> bool {
        self.district == Some(district) || self.terms.iter().any(|t| t.district == Some(district))
    }

    pub fn in_chamber(&self, chamber: Chamber) -> bool {
        self.chamber()
            .and_then(|c| c.parse::<Chamber>().ok())
            .is_some_and(|c| c == chamber)
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Term {
    pub chamber: Option<String>,
    pub state: Option<String>,
    pub district: Option<u32>,
    pub start_year: Option<i32>,
    pub end_year: Option<i32>,
}

/// A bill from the bills source.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Bill {
    pub number: Option<String>,
    pub title: Option<String>,
    pub congress: Option<u32>,
    /// e.g. `HR`, `S`, `HRES`.
    pub bill_type: Option<String>,
    pub sponsors: Vec<Sponsor>,
    pub cosponsors: Vec<Sponsor>,
    pub latest_action: Option<LatestAction>,
}

impl Bill {
    /// Identity keys of every sponsor and co-sponsor.
    pub fn participant_ids(&self) -> impl Iterator<Item = &str> {
        self.sponsors
            .iter()
            .chain(self.cosponsors.iter())
            .filter_map(|s| s.bioguide_id.as_deref())
    }

    pub fn involves(&self, bioguide_id: &str) -> bool {
        self.participant_ids().any(|id| id == bioguide_id)
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Sponsor {
    pub bioguide_id: Option<String>,
    pub full_name: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LatestAction {
    pub action_date: Option<String>,
    pub text: Option<String>,
}

/// A recorded roll-call vote.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Vote {
    pub congress: Option<u32>,
    pub chamber: Option<String>,
    pub session: Option<u32>,
    pub roll_call_number: Option<u32>,
    pub question: Option<String>,
    pub result: Option<String>,
    pub start_date: Option<String>,
    /// Measure voted on, e.g. `HR 9076`.
    pub legislation: Option<String>,
    pub url: Option<String>,
}
