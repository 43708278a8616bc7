//! District → the legislators who represent it.

use polarmetrics_api::types::Chamber;

use crate::model::LegislatorRecord;

/// Select the roster records representing `state` / `district`.
///
/// With no state there is nothing to match and the result is empty. Records
/// are first filtered by state (case-insensitive). When a district is given
/// and at least one state record serves it, only those are returned;
/// otherwise the whole state set is returned. Callers cannot tell the two
/// cases apart from the result.
pub fn match_representatives(
    state: Option<&str>,
    district: Option<u32>,
    roster: &[LegislatorRecord],
) -> Vec<LegislatorRecord> {
    let Some(state) = state else {
        return Vec::new();
    };

    let state_members: Vec<&LegislatorRecord> = roster
        .iter()
        .filter(|r| {
            r.state
                .as_deref()
                .is_some_and(|s| s.trim().eq_ignore_ascii_case(state.trim()))
        })
        .collect();

    if let Some(district) = district {
        let district_members: Vec<LegislatorRecord> = state_members
            .iter()
            .filter(|r| r.serves_district(district))
            .map(|r| (*r).clone())
            .collect();
        if !district_members.is_empty() {
            return district_members;
        }
    }

    state_members.into_iter().cloned().collect()
}

/// Keep only records whose first term is in `chamber`.
pub fn filter_by_chamber(records: Vec<LegislatorRecord>, chamber: Chamber) -> Vec<LegislatorRecord> {
    records.into_iter().filter(|r| r.in_chamber(chamber)).collect()
}
