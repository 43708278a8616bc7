use url::Url;

use super::{
    common::{PagedQuery, QueryCommon},
    Query,
};

/// Query for House roll-call votes of one congress, optionally one session.
#[derive(Clone, Debug)]
pub struct VoteQuery {
    pub common: QueryCommon,
    pub congress: u32,
    pub session: Option<u8>,
}

impl VoteQuery {
    pub fn new(congress: u32) -> Self {
        Self {
            common: QueryCommon::default(),
            congress,
            session: None,
        }
    }

    pub fn with_session(mut self, session: u8) -> Self {
        self.session = Some(session);
        self
    }
}

impl Query for VoteQuery {
    fn path(&self) -> String {
        match self.session {
            Some(session) => format!("/house-vote/{}/{}", self.congress, session),
            None => format!("/house-vote/{}", self.congress),
        }
    }

    fn add_to_url(&self, url: &Url) -> Url {
        self.common.add_to_url(url)
    }
}

impl PagedQuery for VoteQuery {
    fn get_common(&mut self) -> &mut QueryCommon {
        &mut self.common
    }
}
