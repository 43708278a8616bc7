use url::Url;

use super::{
    common::{PagedQuery, QueryCommon},
    Query,
};

/// Query for the Congress.gov member list of one congress, optionally narrowed
/// to a state and district.
#[derive(Clone, Debug)]
pub struct MemberQuery {
    pub common: QueryCommon,
    pub congress: u32,
    pub state: Option<String>,
    pub district: Option<u32>,
    pub current_member: bool,
}

impl MemberQuery {
    pub fn new(congress: u32) -> Self {
        Self {
            common: QueryCommon::default(),
            congress,
            state: None,
            district: None,
            current_member: true,
        }
    }

    /// Narrows the roster to one state. The code is upper-cased.
    pub fn with_state(mut self, state: &str) -> Self {
        self.state = Some(state.trim().to_uppercase());
        self
    }

    /// Narrows the roster to one district. Ignored unless a state is also set.
    pub fn with_district(mut self, district: u32) -> Self {
        self.district = Some(district);
        self
    }

    /// Include members no longer serving (the API default is current members only).
    pub fn with_former_members(mut self) -> Self {
        self.current_member = false;
        self
    }
}

impl Query for MemberQuery {
    fn path(&self) -> String {
        match (&self.state, self.district) {
            (Some(state), Some(district)) => {
                format!("/member/congress/{}/{}/{}", self.congress, state, district)
            }
            (Some(state), None) => format!("/member/congress/{}/{}", self.congress, state),
            (None, _) => format!("/member/congress/{}", self.congress),
        }
    }

    fn add_to_url(&self, url: &Url) -> Url {
        let mut url = self.common.add_to_url(url);
        url.query_pairs_mut()
            .append_pair("currentMember", &self.current_member.to_string());
        url
    }
}

impl PagedQuery for MemberQuery {
    fn get_common(&mut self) -> &mut QueryCommon {
        &mut self.common
    }
}
