use url::Url;

use super::Query;

/// Query for the civic-lookup `representatives` endpoint: one address, plus
/// optional role/level filters.
#[derive(Clone, Debug)]
pub struct RepresentativeQuery {
    pub address: String,
    pub include_offices: bool,
    pub levels: Vec<String>,
    pub roles: Vec<String>,
}

impl RepresentativeQuery {
    pub fn new(address: &str) -> Self {
        Self {
            address: address.to_string(),
            include_offices: true,
            levels: Vec::new(),
            roles: Vec::new(),
        }
    }

    /// Restricts results to one government level (e.g. `country`).
    pub fn with_level(mut self, level: &str) -> Self {
        self.levels.push(level.to_string());
        self
    }

    /// Restricts results to one office role (e.g. `legislatorLowerBody`).
    pub fn with_role(mut self, role: &str) -> Self {
        self.roles.push(role.to_string());
        self
    }
}

impl Query for RepresentativeQuery {
    fn path(&self) -> String {
        "/representatives".to_string()
    }

    fn add_to_url(&self, url: &Url) -> Url {
        let mut url = url.clone();
        url.query_pairs_mut()
            .append_pair("address", &self.address)
            .append_pair("includeOffices", &self.include_offices.to_string());
        for level in self.levels.iter() {
            url.query_pairs_mut().append_pair("levels", level);
        }
        for role in self.roles.iter() {
            url.query_pairs_mut().append_pair("roles", role);
        }
        url
    }
}
