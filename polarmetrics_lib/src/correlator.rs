//! Local representatives → bills they sponsored or co-sponsored.

use std::collections::HashSet;

use crate::model::{Bill, LegislatorRecord};

/// Collect, in upstream order, the bills involving any of `representatives`
/// as sponsor or co-sponsor, stopping once `limit` have been found.
///
/// Only the prefix of `bills` needed to reach `limit` is examined, so which
/// bills come back depends on upstream ordering. Representatives without a
/// bioguide id never match.
pub fn correlate(representatives: &[LegislatorRecord], bills: &[Bill], limit: usize) -> Vec<Bill> {
    let ids: HashSet<&str> = representatives
        .iter()
        .filter_map(|r| r.bioguide_id.as_deref())
        .collect();

    let mut local = Vec::new();
    if ids.is_empty() {
        return local;
    }
    for bill in bills {
        if local.len() >= limit {
            break;
        }
        if bill.participant_ids().any(|id| ids.contains(id)) {
            local.push(bill.clone());
        }
    }
    local
}
