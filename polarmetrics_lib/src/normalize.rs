//! Boundary adapters from raw upstream JSON to the canonical records in [`crate::model`].
//!
//! Each adapter runs once per payload. Field aliases (`bioguideId` /
//! `bioGuideId`, `partyName`, `directOrderName`), numeric-or-string
//! districts, and Congress.gov's `{"item": [...]}` list wrappers are all
//! resolved here.
//!
//! Adapters distinguish two failure modes. A payload with no list at all is
//! "no data" and yields an empty vector. A payload whose list key holds
//! something other than an array cannot be interpreted and yields
//! [`LocalityError::MalformedUpstream`].

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use polarmetrics_api::types::{CivicResponse, NormalizedInput, Office, Official};

use crate::error::LocalityError;
use crate::model::{Bill, LatestAction, LegislatorRecord, Sponsor, Term, Vote};
use crate::validation::state_code;

const ROSTER_KEYS: &[&str] = &["members", "legislators", "results"];
const BILL_KEYS: &[&str] = &["bills", "results", "objects"];
const VOTE_KEYS: &[&str] = &["houseRollCallVotes", "votes", "results"];

/// Decode a civic-lookup body. `None` means "no data": null, not an object,
/// or without any offices or officials.
///
/// Offices and officials are decoded one entry at a time. An office that
/// cannot be decoded is skipped; an official that cannot be decoded keeps its
/// slot as an empty record so `official_indices` still line up.
pub fn civic_response(raw: &Value) -> Option<CivicResponse> {
    let obj = raw.as_object()?;
    let resp = CivicResponse {
        normalized_input: obj
            .get("normalizedInput")
            .filter(|v| !v.is_null())
            .and_then(|v| decode_entry::<NormalizedInput>(v, "civic normalizedInput")),
        offices: civic_list(obj, "offices")
            .iter()
            .filter_map(|entry| decode_entry::<Office>(entry, "civic offices"))
            .collect(),
        officials: civic_list(obj, "officials")
            .iter()
            .map(|entry| decode_entry::<Official>(entry, "civic officials").unwrap_or_default())
            .collect(),
    };
    if resp.is_empty() {
        None
    } else {
        Some(resp)
    }
}

fn civic_list<'a>(obj: &'a Map<String, Value>, key: &str) -> &'a [Value] {
    match obj.get(key) {
        Some(Value::Array(list)) => list.as_slice(),
        None | Some(Value::Null) => &[],
        Some(other) => {
            tracing::warn!("Ignoring civic `{}`: {}, expected a list", key, json_kind(other));
            &[]
        }
    }
}

fn decode_entry<T: DeserializeOwned>(entry: &Value, source: &'static str) -> Option<T> {
    match serde_json::from_value::<T>(entry.clone()) {
        Ok(value) => Some(value),
        Err(e) => {
            tracing::warn!("Undecodable entry in {}: {}", source, e);
            None
        }
    }
}

/// Normalize a legislator roster (Congress.gov member list, a bare array, or a
/// ProPublica-style `results[0].members`).
pub fn legislators(raw: &Value) -> Result<Vec<LegislatorRecord>, LocalityError> {
    let entries = locate_list(raw, "member roster", ROSTER_KEYS)?;
    // ProPublica nests the member list one level down
    let entries = match entries.first().and_then(|e| e.get("members")) {
        Some(Value::Array(members)) if entries.len() == 1 => members.as_slice(),
        _ => entries,
    };
    Ok(objects(entries, "member roster")
        .map(legislator_record)
        .collect())
}

/// Normalize a bill roster, preserving upstream order.
pub fn bills(raw: &Value) -> Result<Vec<Bill>, LocalityError> {
    let entries = locate_list(raw, "bill roster", BILL_KEYS)?;
    Ok(objects(entries, "bill roster").map(bill_record).collect())
}

/// Normalize a recent-votes feed, preserving upstream order.
pub fn votes(raw: &Value) -> Result<Vec<Vote>, LocalityError> {
    let entries = locate_list(raw, "vote feed", VOTE_KEYS)?;
    Ok(objects(entries, "vote feed").map(vote_record).collect())
}

pub fn legislator_record(obj: &Map<String, Value>) -> LegislatorRecord {
    let name = str_field(obj, &["name"]).or_else(|| {
        // ProPublica splits the name
        match (str_field(obj, &["first_name"]), str_field(obj, &["last_name"])) {
            (Some(first), Some(last)) => Some(format!("{} {}", first, last)),
            _ => None,
        }
    });
    LegislatorRecord {
        bioguide_id: str_field(obj, &["bioguideId", "bioGuideId", "bioguide_id"]),
        state: str_field(obj, &["state", "stateCode"]).map(|s| canonical_state(&s)),
        district: obj.get("district").and_then(as_u32),
        party: str_field(obj, &["party"]),
        party_name: str_field(obj, &["partyName"]),
        name,
        direct_order_name: str_field(obj, &["directOrderName"]),
        terms: obj
            .get("terms")
            .map(items)
            .unwrap_or_default()
            .iter()
            .filter_map(Value::as_object)
            .map(term_record)
            .collect(),
    }
}

fn term_record(obj: &Map<String, Value>) -> Term {
    Term {
        chamber: str_field(obj, &["chamber"]),
        state: str_field(obj, &["stateCode", "state"]).map(|s| canonical_state(&s)),
        district: obj.get("district").and_then(as_u32),
        start_year: obj.get("startYear").and_then(as_i32),
        end_year: obj.get("endYear").and_then(as_i32),
    }
}

pub fn bill_record(obj: &Map<String, Value>) -> Bill {
    let sponsors = match obj.get("sponsors") {
        Some(value) => sponsor_list(value),
        // GovTrack and ProPublica carry a single sponsor object
        None => obj
            .get("sponsor")
            .and_then(Value::as_object)
            .map(|s| vec![sponsor_record(s)])
            .unwrap_or_default(),
    };
    Bill {
        number: str_field(obj, &["number", "billNumber", "bill_id"]),
        title: str_field(obj, &["title", "shortTitle"]),
        congress: obj.get("congress").and_then(as_u32),
        bill_type: str_field(obj, &["type", "billType"]),
        sponsors,
        cosponsors: obj.get("cosponsors").map(sponsor_list).unwrap_or_default(),
        latest_action: obj
            .get("latestAction")
            .and_then(Value::as_object)
            .map(|a| LatestAction {
                action_date: str_field(a, &["actionDate"]),
                text: str_field(a, &["text"]),
            }),
    }
}

fn sponsor_list(value: &Value) -> Vec<Sponsor> {
    items(value)
        .iter()
        .filter_map(Value::as_object)
        .map(sponsor_record)
        .collect()
}

fn sponsor_record(obj: &Map<String, Value>) -> Sponsor {
    Sponsor {
        bioguide_id: str_field(obj, &["bioguideId", "bioGuideId", "bioguide_id"]),
        full_name: str_field(obj, &["fullName", "name"]),
    }
}

pub fn vote_record(obj: &Map<String, Value>) -> Vote {
    let legislation = match (
        str_field(obj, &["legislationType"]),
        str_field(obj, &["legislationNumber"]),
    ) {
        (Some(kind), Some(number)) => Some(format!("{} {}", kind, number)),
        (None, Some(number)) => Some(number),
        _ => None,
    };
    Vote {
        congress: obj.get("congress").and_then(as_u32),
        chamber: str_field(obj, &["chamber"]).or_else(|| {
            obj.contains_key("rollCallNumber")
                .then(|| "House".to_string())
        }),
        session: obj.get("sessionNumber").and_then(as_u32),
        roll_call_number: obj
            .get("rollCallNumber")
            .or_else(|| obj.get("roll_call"))
            .and_then(as_u32),
        question: str_field(obj, &["voteQuestion", "question", "voteType"]),
        result: str_field(obj, &["result"]),
        start_date: str_field(obj, &["startDate", "date"]),
        legislation,
        url: str_field(obj, &["url"]),
    }
}

/// Map a state value to its two-letter code when recognizable; otherwise keep it trimmed.
fn canonical_state(raw: &str) -> String {
    state_code(raw).unwrap_or_else(|| raw.trim().to_string())
}

/// Find the record list in a payload: the payload itself if it is an array,
/// else the first of `keys` present and non-null.
fn locate_list<'a>(
    raw: &'a Value,
    source: &'static str,
    keys: &[&str],
) -> Result<&'a [Value], LocalityError> {
    match raw {
        Value::Array(list) => Ok(list.as_slice()),
        Value::Object(obj) => {
            let found = keys
                .iter()
                .find_map(|k| obj.get(*k).filter(|v| !v.is_null()).map(|v| (*k, v)));
            match found {
                None => Ok(&[]),
                Some((_, Value::Array(list))) => Ok(list.as_slice()),
                Some((key, Value::Object(wrapper))) => match wrapper.get("item") {
                    Some(Value::Array(list)) => Ok(list.as_slice()),
                    _ => Err(LocalityError::malformed(
                        source,
                        format!("`{}` is an object without an item list", key),
                    )),
                },
                Some((key, other)) => Err(LocalityError::malformed(
                    source,
                    format!("`{}` is {}, expected a list", key, json_kind(other)),
                )),
            }
        }
        Value::Null => Ok(&[]),
        other => Err(LocalityError::malformed(
            source,
            format!("top level is {}, expected an object or a list", json_kind(other)),
        )),
    }
}

/// Object entries of a list; anything else is skipped with a warning.
fn objects<'a>(
    entries: &'a [Value],
    source: &'static str,
) -> impl Iterator<Item = &'a Map<String, Value>> {
    entries.iter().filter_map(move |entry| match entry.as_object() {
        Some(obj) => Some(obj),
        None => {
            tracing::warn!("Skipping non-object entry in {}: {}", source, json_kind(entry));
            None
        }
    })
}

/// A list value, either bare or wrapped as `{"item": [...]}`.
fn items(value: &Value) -> &[Value] {
    match value {
        Value::Array(list) => list.as_slice(),
        Value::Object(obj) => match obj.get("item") {
            Some(Value::Array(list)) => list.as_slice(),
            _ => &[],
        },
        _ => &[],
    }
}

/// First non-blank string (or number, rendered) under any of `keys`.
fn str_field(obj: &Map<String, Value>, keys: &[&str]) -> Option<String> {
    keys.iter().find_map(|k| match obj.get(*k) {
        Some(Value::String(s)) if !s.trim().is_empty() => Some(s.trim().to_string()),
        Some(Value::Number(n)) => Some(n.to_string()),
        _ => None,
    })
}

/// Integer or numeric string.
fn as_u32(value: &Value) -> Option<u32> {
    match value {
        Value::Number(n) => n.as_u64().and_then(|n| u32::try_from(n).ok()),
        Value::String(s) => s.trim().parse::<u32>().ok(),
        _ => None,
    }
}

fn as_i32(value: &Value) -> Option<i32> {
    match value {
        Value::Number(n) => n.as_i64().and_then(|n| i32::try_from(n).ok()),
        Value::String(s) => s.trim().parse::<i32>().ok(),
        _ => None,
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a list",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn load_fixture(name: &str) -> Value {
        let text = match name {
            "members_tx.json" => include_str!("../../polarmetrics_api/tests/fixtures/members_tx.json"),
            "bills.json" => include_str!("../../polarmetrics_api/tests/fixtures/bills.json"),
            "house_votes.json" => include_str!("../../polarmetrics_api/tests/fixtures/house_votes.json"),
            "civic_representatives.json" => {
                include_str!("../../polarmetrics_api/tests/fixtures/civic_representatives.json")
            }
            other => panic!("unknown fixture {}", other),
        };
        serde_json::from_str(text).unwrap()
    }

    #[test]
    fn roster_from_congress_gov() {
        let records = legislators(&load_fixture("members_tx.json")).unwrap();
        assert_eq!(records.len(), 5);

        let roy = &records[0];
        assert_eq!(roy.bioguide_id.as_deref(), Some("R000614"));
        assert_eq!(roy.state.as_deref(), Some("TX"));
        assert_eq!(roy.district, Some(21));
        assert_eq!(roy.party_name.as_deref(), Some("Republican"));
        assert_eq!(roy.chamber(), Some("House of Representatives"));
        assert_eq!(roy.terms[0].start_year, Some(2019));
    }

    #[test]
    fn roster_alternate_casing_and_string_district() {
        let records = legislators(&load_fixture("members_tx.json")).unwrap();
        let fletcher = &records[2];
        assert_eq!(fletcher.bioguide_id.as_deref(), Some("F000468"));
        assert_eq!(fletcher.district, Some(7));
        assert_eq!(fletcher.name, None);
        assert_eq!(fletcher.display_name(), "Lizzie Fletcher");
    }

    #[test]
    fn roster_senators_have_no_district() {
        let records = legislators(&load_fixture("members_tx.json")).unwrap();
        assert_eq!(records[3].district, None);
        assert_eq!(records[4].chamber(), Some("Senate"));
    }

    #[test]
    fn roster_bare_array_with_term_list() {
        let raw = json!([
            {"bioguideId": "X1", "state": "tx", "terms": [{"chamber": "House of Representatives", "district": "21"}]},
            "not a record",
            {"bioguideId": "  ", "state": "Ohio"}
        ]);
        let records = legislators(&raw).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].state.as_deref(), Some("TX"));
        assert_eq!(records[0].district, None);
        assert_eq!(records[0].terms[0].district, Some(21));
        assert_eq!(records[1].bioguide_id, None);
        assert_eq!(records[1].state.as_deref(), Some("OH"));
    }

    #[test]
    fn roster_propublica_shape() {
        let raw = json!({
            "status": "OK",
            "results": [{
                "congress": "118",
                "chamber": "House",
                "members": [
                    {"id": "R000614", "bioguide_id": "R000614", "first_name": "Chip", "last_name": "Roy", "party": "R", "state": "TX", "district": "21"}
                ]
            }]
        });
        let records = legislators(&raw).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].bioguide_id.as_deref(), Some("R000614"));
        assert_eq!(records[0].name.as_deref(), Some("Chip Roy"));
        assert_eq!(records[0].district, Some(21));
    }

    #[test]
    fn roster_missing_list_is_empty() {
        assert!(legislators(&json!({"pagination": {"count": 0}})).unwrap().is_empty());
        assert!(legislators(&json!({"members": null})).unwrap().is_empty());
        assert!(legislators(&Value::Null).unwrap().is_empty());
    }

    #[test]
    fn roster_wrong_shape_is_malformed() {
        let err = legislators(&json!({"members": "unavailable"})).unwrap_err();
        assert!(matches!(err, LocalityError::MalformedUpstream { source: "member roster", .. }));
        assert!(err.to_string().contains("a string"));

        assert!(legislators(&json!(42)).is_err());
        assert!(legislators(&json!({"members": {"count": 3}})).is_err());
    }

    #[test]
    fn bills_from_congress_gov() {
        let bills = bills(&load_fixture("bills.json")).unwrap();
        assert_eq!(bills.len(), 4);
        assert_eq!(bills[0].number.as_deref(), Some("9076"));
        assert_eq!(bills[0].bill_type.as_deref(), Some("HR"));
        assert_eq!(bills[0].congress, Some(118));
        assert!(bills[0].involves("C001131"));
        assert_eq!(
            bills[1].latest_action.as_ref().and_then(|a| a.action_date.as_deref()),
            Some("2024-12-17")
        );
        assert_eq!(bills[3].title, None);
        assert!(bills[3].involves("R000614"));
    }

    #[test]
    fn bills_numeric_number_and_single_sponsor() {
        let raw = json!({"objects": [
            {"number": 1, "title": "A bill", "sponsor": {"bioguide_id": "X1"}, "cosponsors": {"item": [{"bioguideId": "X2"}]}}
        ]});
        let bills = bills(&raw).unwrap();
        assert_eq!(bills[0].number.as_deref(), Some("1"));
        assert!(bills[0].involves("X1"));
        assert!(bills[0].involves("X2"));
    }

    #[test]
    fn bills_cosponsor_count_object_means_none() {
        let raw = json!({"bills": [{"number": "5", "cosponsors": {"count": 12, "url": "https://example.com"}}]});
        let bills = bills(&raw).unwrap();
        assert!(bills[0].cosponsors.is_empty());
    }

    #[test]
    fn votes_from_house_feed() {
        let votes = votes(&load_fixture("house_votes.json")).unwrap();
        assert_eq!(votes.len(), 2);
        assert_eq!(votes[0].roll_call_number, Some(527));
        assert_eq!(votes[0].chamber.as_deref(), Some("House"));
        assert_eq!(votes[0].session, Some(2));
        assert_eq!(votes[0].legislation.as_deref(), Some("HR 9076"));
        assert_eq!(votes[0].question.as_deref(), Some("2/3 Yea-And-Nay"));
        assert_eq!(votes[1].legislation, None);
    }

    #[test]
    fn civic_no_data() {
        assert!(civic_response(&Value::Null).is_none());
        assert!(civic_response(&json!({"kind": "civicinfo#representativeInfoResponse"})).is_none());
        assert!(civic_response(&json!({"offices": "nope"})).is_none());
        assert!(civic_response(&json!([1, 2])).is_none());
    }

    #[test]
    fn civic_decodes_fixture() {
        let resp = civic_response(&load_fixture("civic_representatives.json")).unwrap();
        assert_eq!(resp.offices.len(), 4);
        assert_eq!(resp.officials[3].name.as_deref(), Some("Chip Roy"));
    }

    #[test]
    fn civic_null_official_field_keeps_district() {
        let resp = civic_response(&json!({
            "offices": [{
                "name": "U.S. Representative",
                "divisionId": "ocd-division/country:us/state:tx/cd:21",
                "officialIndices": [0]
            }],
            "officials": [{"name": "Chip Roy", "phones": null}]
        }))
        .unwrap();
        assert_eq!(resp.offices.len(), 1);
        assert_eq!(resp.officials[0].name.as_deref(), Some("Chip Roy"));

        let info = crate::resolver::district_from_civic(&resp);
        assert_eq!(info.state.as_deref(), Some("TX"));
        assert_eq!(info.district, Some(21));
    }

    #[test]
    fn civic_bad_entries_degrade_per_entry() {
        let resp = civic_response(&json!({
            "offices": [
                {"name": "Governor", "levels": "administrativeArea1"},
                {
                    "name": "U.S. Representative",
                    "divisionId": "ocd-division/country:us/state:tx/cd:21",
                    "officialIndices": [1]
                }
            ],
            "officials": [{"name": 42}, {"name": "Chip Roy"}]
        }))
        .unwrap();
        assert_eq!(resp.offices.len(), 1);
        assert_eq!(resp.offices[0].name.as_deref(), Some("U.S. Representative"));
        assert_eq!(resp.officials.len(), 2);
        assert_eq!(resp.officials[0], Official::default());
        assert_eq!(resp.officials[1].name.as_deref(), Some("Chip Roy"));
    }
}
