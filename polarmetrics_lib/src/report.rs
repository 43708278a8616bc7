//! The unified per-address report and its line rendering.

use chrono::{DateTime, Local, Utc};
use serde::Serialize;

use crate::model::{Bill, DistrictInfo, LegislatorRecord, Official, Vote};

/// At most this many bills are rendered; the report itself keeps them all.
pub const MAX_RENDERED_BILLS: usize = 5;

const UNKNOWN: &str = "Unknown";
const NO_TITLE: &str = "No title available";

/// Everything known about one address: where it is, who represents it, and
/// what they have been doing.
///
/// Built once by [`compile`] and never mutated afterwards. The summary counts
/// are derived from the sequences they describe, so there is no way to make
/// them disagree.
#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LocalPoliticalReport {
    location: Location,
    representatives: Representatives,
    legislation: Legislation,
    summary: Summary,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    pub address: String,
    pub state: Option<String>,
    pub district: Option<u32>,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Representatives {
    /// Officials exactly as the civic lookup returned them.
    pub from_civic: Vec<Official>,
    /// Roster records matched to the district.
    pub from_congress: Vec<LegislatorRecord>,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Legislation {
    pub local_bills: Vec<Bill>,
    pub recent_votes: Vec<Vote>,
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    pub total_local_reps: usize,
    pub total_local_bills: usize,
    pub last_updated: DateTime<Utc>,
}

impl LocalPoliticalReport {
    pub fn location(&self) -> &Location {
        &self.location
    }

    pub fn representatives(&self) -> &Representatives {
        &self.representatives
    }

    pub fn legislation(&self) -> &Legislation {
        &self.legislation
    }

    pub fn summary(&self) -> &Summary {
        &self.summary
    }
}

/// Merge the stage outputs into a report stamped with the current time.
pub fn compile(
    address: &str,
    district_info: DistrictInfo,
    local_reps: Vec<LegislatorRecord>,
    local_bills: Vec<Bill>,
    recent_votes: Vec<Vote>,
) -> LocalPoliticalReport {
    compile_at(
        address,
        district_info,
        local_reps,
        local_bills,
        recent_votes,
        Utc::now(),
    )
}

/// [`compile`] with an explicit timestamp.
pub fn compile_at(
    address: &str,
    district_info: DistrictInfo,
    local_reps: Vec<LegislatorRecord>,
    local_bills: Vec<Bill>,
    recent_votes: Vec<Vote>,
    last_updated: DateTime<Utc>,
) -> LocalPoliticalReport {
    let summary = Summary {
        total_local_reps: local_reps.len(),
        total_local_bills: local_bills.len(),
        last_updated,
    };
    LocalPoliticalReport {
        location: Location {
            address: address.to_string(),
            state: district_info.state,
            district: district_info.district,
        },
        representatives: Representatives {
            from_civic: district_info.raw_representatives,
            from_congress: local_reps,
        },
        legislation: Legislation {
            local_bills,
            recent_votes,
        },
        summary,
    }
}

/// `TX-21`, `DC-At Large`, `TX (district unknown)`, or `Unknown`.
pub fn district_label(state: Option<&str>, district: Option<u32>) -> String {
    match (state, district) {
        (Some(state), Some(0)) => format!("{}-At Large", state),
        (Some(state), Some(district)) => format!("{}-{}", state, district),
        (Some(state), None) => format!("{} (district unknown)", state),
        (None, _) => UNKNOWN.to_string(),
    }
}

/// `name (party) - chamber`, with fallbacks for every part.
pub fn representative_line(rep: &LegislatorRecord) -> String {
    format!(
        "{} ({}) - {}",
        rep.display_name(),
        rep.display_party(),
        rep.chamber().unwrap_or(UNKNOWN)
    )
}

/// `number: title`, with fallbacks for both parts.
pub fn bill_line(bill: &Bill) -> String {
    format!(
        "{}: {}",
        bill.number.as_deref().unwrap_or(UNKNOWN),
        bill.title.as_deref().unwrap_or(NO_TITLE)
    )
}

/// Flatten a report into display lines: a summary block, then one line per
/// representative, then up to [`MAX_RENDERED_BILLS`] bill lines.
pub fn render(report: &LocalPoliticalReport) -> Vec<String> {
    let location = report.location();
    let summary = report.summary();
    let mut lines = vec![
        format!("Location: {}", location.address),
        format!(
            "Congressional District: {}",
            district_label(location.state.as_deref(), location.district)
        ),
        format!("Local Representatives: {}", summary.total_local_reps),
        format!("Local Bills: {}", summary.total_local_bills),
        format!(
            "Data Updated: {}",
            summary
                .last_updated
                .with_timezone(&Local)
                .format("%Y-%m-%d %H:%M:%S")
        ),
    ];

    let reps = &report.representatives().from_congress;
    if !reps.is_empty() {
        lines.push("--- REPRESENTATIVES ---".to_string());
        lines.extend(reps.iter().map(representative_line));
    }

    let bills = &report.legislation().local_bills;
    if !bills.is_empty() {
        lines.push("--- LOCAL BILLS ---".to_string());
        lines.extend(bills.iter().take(MAX_RENDERED_BILLS).map(bill_line));
    }

    lines
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;
    use crate::model::Term;

    fn fixed_time() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 9, 20, 14, 30, 0).unwrap()
    }

    fn bill(number: &str, title: Option<&str>) -> Bill {
        Bill {
            number: Some(number.to_string()),
            title: title.map(str::to_string),
            ..Bill::default()
        }
    }

    fn roy() -> LegislatorRecord {
        LegislatorRecord {
            bioguide_id: Some("R000614".to_string()),
            state: Some("TX".to_string()),
            district: Some(21),
            party_name: Some("Republican".to_string()),
            name: Some("Roy, Chip".to_string()),
            terms: vec![Term {
                chamber: Some("House of Representatives".to_string()),
                ..Term::default()
            }],
            ..LegislatorRecord::default()
        }
    }

    fn tx21() -> DistrictInfo {
        DistrictInfo {
            state: Some("TX".to_string()),
            district: Some(21),
            raw_representatives: vec![Official {
                name: Some("Chip Roy".to_string()),
                ..Official::default()
            }],
            ..DistrictInfo::default()
        }
    }

    #[test]
    fn summary_counts_follow_sequences() {
        let report = compile_at(
            "Austin TX",
            tx21(),
            vec![roy()],
            vec![bill("8812", Some("A bill")), bill("6950", None)],
            vec![Vote::default()],
            fixed_time(),
        );
        assert_eq!(report.summary().total_local_reps, 1);
        assert_eq!(report.summary().total_local_bills, 2);
        assert_eq!(report.summary().last_updated, fixed_time());
        assert_eq!(report.location().state.as_deref(), Some("TX"));
        assert_eq!(report.representatives().from_civic.len(), 1);
        assert_eq!(report.legislation().recent_votes.len(), 1);
    }

    #[test]
    fn empty_report_counts_are_zero() {
        let report = compile("nowhere", DistrictInfo::default(), vec![], vec![], vec![]);
        assert_eq!(report.summary().total_local_reps, 0);
        assert_eq!(report.summary().total_local_bills, 0);
        assert_eq!(report.location().state, None);

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["summary"]["totalLocalReps"], 0);
        assert_eq!(json["summary"]["totalLocalBills"], 0);
        assert!(json["location"]["district"].is_null());
    }

    #[test]
    fn serializes_camel_case() {
        let report = compile_at("Austin TX", tx21(), vec![roy()], vec![], vec![], fixed_time());
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["representatives"]["fromCongress"][0]["bioguideId"], "R000614");
        assert!(json["representatives"]["fromCivic"].is_array());
        assert!(json["legislation"]["localBills"].is_array());
        assert_eq!(json["summary"]["lastUpdated"], "2024-09-20T14:30:00Z");
    }

    #[test]
    fn district_labels() {
        assert_eq!(district_label(Some("TX"), Some(21)), "TX-21");
        assert_eq!(district_label(Some("DC"), Some(0)), "DC-At Large");
        assert_eq!(district_label(Some("TX"), None), "TX (district unknown)");
        assert_eq!(district_label(None, Some(21)), "Unknown");
        assert_eq!(district_label(None, None), "Unknown");
    }

    #[test]
    fn render_full_report() {
        let report = compile_at(
            "Austin TX",
            tx21(),
            vec![roy()],
            vec![bill("8812", Some("Border Act"))],
            vec![],
            fixed_time(),
        );
        let lines = render(&report);
        assert_eq!(lines[0], "Location: Austin TX");
        assert_eq!(lines[1], "Congressional District: TX-21");
        assert_eq!(lines[2], "Local Representatives: 1");
        assert_eq!(lines[3], "Local Bills: 1");
        assert!(lines[4].starts_with("Data Updated: "));
        assert_eq!(lines[5], "--- REPRESENTATIVES ---");
        assert_eq!(lines[6], "Roy, Chip (Republican) - House of Representatives");
        assert_eq!(lines[7], "--- LOCAL BILLS ---");
        assert_eq!(lines[8], "8812: Border Act");
        assert_eq!(lines.len(), 9);
        assert!(lines.iter().all(|line| !line.is_empty()));
    }

    #[test]
    fn render_fallbacks_never_panic() {
        let report = compile(
            "x y z",
            DistrictInfo::default(),
            vec![LegislatorRecord::default()],
            vec![Bill::default()],
            vec![],
        );
        let lines = render(&report);
        assert!(lines.contains(&"Congressional District: Unknown".to_string()));
        assert!(lines.contains(&"Unknown (Unknown) - Unknown".to_string()));
        assert!(lines.contains(&"Unknown: No title available".to_string()));
    }

    #[test]
    fn render_caps_bill_lines() {
        let bills: Vec<Bill> = (1..=8).map(|n| bill(&format!("HR{}", n), None)).collect();
        let report = compile("Austin TX", tx21(), vec![roy()], bills, vec![]);
        let lines = render(&report);
        let bill_lines: Vec<&String> = lines.iter().filter(|l| l.starts_with("HR")).collect();
        assert_eq!(bill_lines.len(), MAX_RENDERED_BILLS);
        assert_eq!(bill_lines[0], "HR1: No title available");
        assert_eq!(report.summary().total_local_bills, 8);
    }

    #[test]
    fn render_omits_empty_sections() {
        let report = compile("Austin TX", tx21(), vec![], vec![], vec![]);
        let lines = render(&report);
        assert_eq!(lines.len(), 5);
    }
}
