//! Response types for the civic-lookup `representatives` endpoint.

use serde::{Deserialize, Deserializer, Serialize};

/// Upstream sends `null` for some absent lists; treat it like a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Body of a civic-lookup response. Every section is optional upstream, so
/// each one defaults to empty.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CivicResponse {
    /// The address as the upstream understood it.
    #[serde(default)]
    pub normalized_input: Option<NormalizedInput>,

    /// Elected offices covering the address, in upstream order.
    #[serde(default, deserialize_with = "null_as_default")]
    pub offices: Vec<Office>,

    /// Officials holding those offices, referenced by `Office::official_indices`.
    #[serde(default, deserialize_with = "null_as_default")]
    pub officials: Vec<Official>,
}

impl CivicResponse {
    /// True when the response carries neither offices nor officials.
    pub fn is_empty(&self) -> bool {
        self.offices.is_empty() && self.officials.is_empty()
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct NormalizedInput {
    pub line1: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip: Option<String>,
}

/// An elected office, e.g. "U.S. House of Representatives TX-21".
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct Office {
    pub name: Option<String>,

    /// OCD division path, e.g. `ocd-division/country:us/state:tx/cd:21`.
    pub division_id: Option<String>,

    #[serde(deserialize_with = "null_as_default")]
    pub levels: Vec<String>,

    #[serde(deserialize_with = "null_as_default")]
    pub roles: Vec<String>,

    /// Positions in `CivicResponse::officials` of the people holding this office.
    #[serde(deserialize_with = "null_as_default")]
    pub official_indices: Vec<usize>,
}

/// A person holding an elected office.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct Official {
    pub name: Option<String>,
    pub party: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub phones: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub urls: Vec<String>,
}
