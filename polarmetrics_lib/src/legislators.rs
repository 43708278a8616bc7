//! Legislator roster backed by the unitedstates/congress-legislators dataset.
//!
//! An alternative to the Congress.gov member list that needs no API key. The
//! dataset lists current members only, so the congress number is ignored.

use serde::Deserialize;
use serde_json::{json, Value};
use thiserror::Error;

use crate::error::LocalityError;
use crate::sources::LegislatorRoster;

#[derive(Error, Debug)]
pub enum LegislatorsError {
    #[error("Failed to download congress-legislators dataset: {0}")]
    Download(String),
    #[error("Failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yml::Error),
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),
}

/// A legislator from the congress-legislators dataset
#[derive(Deserialize, Debug, Clone)]
pub struct Legislator {
    pub id: LegislatorId,
    pub name: LegislatorName,
    /// Oldest first; the last entry is the current term.
    pub terms: Vec<Term>,
}

#[derive(Deserialize, Debug, Clone)]
pub struct LegislatorId {
    pub bioguide: String,
}

#[derive(Deserialize, Debug, Clone)]
pub struct LegislatorName {
    pub first: String,
    pub last: String,
    pub official_full: Option<String>,
}

#[derive(Deserialize, Debug, Clone)]
pub struct Term {
    /// `rep` or `sen`.
    #[serde(rename = "type")]
    pub term_type: String,
    pub start: String,
    pub end: Option<String>,
    pub state: String,
    /// House terms only; 0 for at-large seats.
    pub district: Option<u32>,
    pub party: Option<String>,
}

impl Legislator {
    pub fn current_term(&self) -> Option<&Term> {
        self.terms.last()
    }

    pub fn display_name(&self) -> String {
        self.name
            .official_full
            .clone()
            .unwrap_or_else(|| format!("{} {}", self.name.first, self.name.last))
    }
}

pub const CURRENT_LEGISLATORS_URL: &str =
    "https://raw.githubusercontent.com/unitedstates/congress-legislators/main/legislators-current.yaml";

/// The parsed current-legislators dataset.
#[derive(Debug, Clone, Default)]
pub struct LegislatorsDataset {
    legislators: Vec<Legislator>,
}

impl LegislatorsDataset {
    /// Download and parse the current legislators file.
    pub async fn download(client: &reqwest::Client) -> Result<Self, LegislatorsError> {
        Self::download_from(client, CURRENT_LEGISLATORS_URL).await
    }

    pub async fn download_from(client: &reqwest::Client, url: &str) -> Result<Self, LegislatorsError> {
        let response = client.get(url).send().await?;
        if !response.status().is_success() {
            return Err(LegislatorsError::Download(format!(
                "HTTP {} from {}",
                response.status(),
                url
            )));
        }
        let yaml_content = response.text().await?;
        let dataset = Self::from_yaml(&yaml_content)?;
        tracing::info!("Loaded {} legislators from {}", dataset.len(), url);
        Ok(dataset)
    }

    pub fn from_yaml(yaml: &str) -> Result<Self, LegislatorsError> {
        let legislators: Vec<Legislator> = serde_yml::from_str(yaml)?;
        Ok(Self { legislators })
    }

    pub fn len(&self) -> usize {
        self.legislators.len()
    }

    pub fn is_empty(&self) -> bool {
        self.legislators.is_empty()
    }

    pub fn legislators(&self) -> &[Legislator] {
        &self.legislators
    }

    /// The roster as a Congress.gov-shaped `{"members": [...]}` body, narrowed
    /// to `state` (case-insensitive) when given. Terms are listed most recent
    /// first. Legislators without any term are skipped.
    pub fn roster_json(&self, state: Option<&str>) -> Value {
        let members: Vec<Value> = self
            .legislators
            .iter()
            .filter_map(|legislator| {
                let current = legislator.current_term()?;
                if let Some(state) = state {
                    if !current.state.eq_ignore_ascii_case(state.trim()) {
                        return None;
                    }
                }
                let terms: Vec<Value> = legislator.terms.iter().rev().map(term_json).collect();
                Some(json!({
                    "bioguideId": legislator.id.bioguide,
                    "name": legislator.display_name(),
                    "state": current.state.to_uppercase(),
                    "district": if current.term_type == "rep" { current.district } else { None },
                    "partyName": current.party,
                    "terms": terms,
                }))
            })
            .collect();
        json!({ "members": members })
    }
}

fn term_json(term: &Term) -> Value {
    let chamber = match term.term_type.as_str() {
        "rep" => "House of Representatives",
        "sen" => "Senate",
        other => other,
    };
    json!({
        "chamber": chamber,
        "stateCode": term.state,
        "district": term.district,
        "startYear": year_of(&term.start),
        "endYear": term.end.as_deref().and_then(year_of),
    })
}

/// Year of an ISO `YYYY-MM-DD` date.
fn year_of(date: &str) -> Option<i32> {
    date.get(..4)?.parse().ok()
}

impl LegislatorRoster for LegislatorsDataset {
    async fn legislators(&self, _congress: u32, state: Option<&str>) -> Result<Value, LocalityError> {
        Ok(self.roster_json(state))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalize;

    const YAML: &str = r#"
- id:
    bioguide: R000614
    fec:
      - H8TX21307
  name:
    first: Chip
    last: Roy
    official_full: Chip Roy
  terms:
    - type: rep
      start: "2019-01-03"
      end: "2021-01-03"
      state: TX
      district: 21
      party: Republican
    - type: rep
      start: "2023-01-03"
      end: "2025-01-03"
      state: TX
      district: 21
      party: Republican
- id:
    bioguide: C001056
  name:
    first: John
    last: Cornyn
  terms:
    - type: sen
      start: "2021-01-03"
      end: "2027-01-03"
      state: TX
      party: Republican
- id:
    bioguide: N000147
  name:
    first: Eleanor
    last: Norton
    official_full: Eleanor Holmes Norton
  terms:
    - type: rep
      start: "2023-01-03"
      end: "2025-01-03"
      state: DC
      district: 0
      party: Democrat
- id:
    bioguide: Z000001
  name:
    first: No
    last: Terms
  terms: []
"#;

    #[test]
    fn test_parse_minimal_yaml() {
        let dataset = LegislatorsDataset::from_yaml(YAML).unwrap();
        assert_eq!(dataset.len(), 4);
        assert_eq!(dataset.legislators()[0].id.bioguide, "R000614");
        assert_eq!(dataset.legislators()[0].terms.len(), 2);
        assert_eq!(dataset.legislators()[1].terms[0].district, None);
    }

    #[test]
    fn test_parse_invalid_yaml() {
        assert!(matches!(
            LegislatorsDataset::from_yaml("- id: [unclosed"),
            Err(LegislatorsError::YamlParse(_))
        ));
    }

    #[test]
    fn test_roster_filters_by_state() {
        let dataset = LegislatorsDataset::from_yaml(YAML).unwrap();
        let roster = dataset.roster_json(Some("tx"));
        let members = roster["members"].as_array().unwrap();
        assert_eq!(members.len(), 2);
        assert_eq!(members[0]["name"], "Chip Roy");
        assert_eq!(members[0]["district"], 21);
        assert_eq!(members[1]["name"], "John Cornyn");
        assert!(members[1]["district"].is_null());
    }

    #[test]
    fn test_roster_skips_legislators_without_terms() {
        let dataset = LegislatorsDataset::from_yaml(YAML).unwrap();
        let roster = dataset.roster_json(None);
        assert_eq!(roster["members"].as_array().unwrap().len(), 3);
    }

    #[test]
    fn test_roster_normalizes_most_recent_term_first() {
        let dataset = LegislatorsDataset::from_yaml(YAML).unwrap();
        let records = normalize::legislators(&dataset.roster_json(Some("TX"))).unwrap();
        let roy = &records[0];
        assert_eq!(roy.bioguide_id.as_deref(), Some("R000614"));
        assert_eq!(roy.state.as_deref(), Some("TX"));
        assert_eq!(roy.party_name.as_deref(), Some("Republican"));
        assert_eq!(roy.terms[0].start_year, Some(2023));
        assert_eq!(roy.terms[0].end_year, Some(2025));
        assert_eq!(roy.chamber(), Some("House of Representatives"));
        assert_eq!(records[1].chamber(), Some("Senate"));
    }

    #[test]
    fn test_at_large_delegate_keeps_district_zero() {
        let dataset = LegislatorsDataset::from_yaml(YAML).unwrap();
        let records = normalize::legislators(&dataset.roster_json(Some("DC"))).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].district, Some(0));
    }

    #[test]
    fn test_year_of() {
        assert_eq!(year_of("2023-01-03"), Some(2023));
        assert_eq!(year_of("20"), None);
        assert_eq!(year_of("abcd-01-01"), None);
    }
}
