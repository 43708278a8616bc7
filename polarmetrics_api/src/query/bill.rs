use url::Url;

use super::{
    common::{PagedQuery, QueryCommon, SortDirection},
    Query,
};

/// Query for the Congress.gov bill list of one congress.
#[derive(Clone, Debug)]
pub struct BillQuery {
    pub common: QueryCommon,
    pub congress: u32,
    pub sort_direction: SortDirection,
}

impl BillQuery {
    pub fn new(congress: u32) -> Self {
        Self {
            common: QueryCommon::default(),
            congress,
            sort_direction: SortDirection::Desc,
        }
    }

    /// Bills are ordered by update date; descending (most recent first) by default.
    pub fn with_sort_direction(mut self, sort_direction: SortDirection) -> Self {
        self.sort_direction = sort_direction;
        self
    }
}

impl Query for BillQuery {
    fn path(&self) -> String {
        format!("/bill/{}", self.congress)
    }

    fn add_to_url(&self, url: &Url) -> Url {
        let mut url = self.common.add_to_url(url);
        url.query_pairs_mut()
            .append_pair("sort", &format!("updateDate {}", self.sort_direction));
        url
    }
}

impl PagedQuery for BillQuery {
    fn get_common(&mut self) -> &mut QueryCommon {
        &mut self.common
    }
}
