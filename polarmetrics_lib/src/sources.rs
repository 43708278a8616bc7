//! Upstream capabilities the pipeline consumes.
//!
//! Each trait hands back the raw upstream body; normalization happens in
//! [`crate::normalize`]. Production implementations wrap the API clients, and
//! tests substitute deterministic fakes.

use std::future::Future;

use serde_json::Value;

use polarmetrics_api::types::Chamber;
use polarmetrics_api::{
    BillQuery, CivicClient, CongressClient, MemberQuery, PagedQuery, RepresentativeQuery,
    VoteQuery, MAX_LIMIT,
};

use crate::error::LocalityError;

/// Address → officials and offices.
pub trait CivicLookup {
    fn lookup(&self, address: &str) -> impl Future<Output = Result<Value, LocalityError>> + Send;
}

/// Members of a congress, optionally narrowed to one state.
pub trait LegislatorRoster {
    fn legislators(
        &self,
        congress: u32,
        state: Option<&str>,
    ) -> impl Future<Output = Result<Value, LocalityError>> + Send;
}

/// Bills and recorded votes.
pub trait LegislationFeed {
    /// Most recently updated bills, newest first.
    fn bills(
        &self,
        congress: u32,
        limit: u32,
    ) -> impl Future<Output = Result<Value, LocalityError>> + Send;

    fn recent_votes(
        &self,
        congress: u32,
        chamber: Option<Chamber>,
        limit: u32,
    ) -> impl Future<Output = Result<Value, LocalityError>> + Send;
}

impl CivicLookup for CivicClient {
    async fn lookup(&self, address: &str) -> Result<Value, LocalityError> {
        let query = RepresentativeQuery::new(address);
        Ok(self.get_representatives(&query).await?)
    }
}

/// Civic source for commands that never resolve an address. Every lookup
/// fails as unsupported, so the civic stage reports `Unavailable`.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoCivicLookup;

impl CivicLookup for NoCivicLookup {
    async fn lookup(&self, _address: &str) -> Result<Value, LocalityError> {
        Err(polarmetrics_api::Error::Unsupported("no civic lookup configured".to_string()).into())
    }
}

impl LegislatorRoster for CongressClient {
    async fn legislators(&self, congress: u32, state: Option<&str>) -> Result<Value, LocalityError> {
        let mut query = MemberQuery::new(congress).with_limit(MAX_LIMIT);
        if let Some(state) = state {
            query = query.with_state(state);
        }
        Ok(self.get_members(&query).await?)
    }
}

impl LegislationFeed for CongressClient {
    async fn bills(&self, congress: u32, limit: u32) -> Result<Value, LocalityError> {
        let query = BillQuery::new(congress).with_limit(i64::from(limit));
        Ok(self.get_bills(&query).await?)
    }

    async fn recent_votes(
        &self,
        congress: u32,
        chamber: Option<Chamber>,
        limit: u32,
    ) -> Result<Value, LocalityError> {
        if chamber == Some(Chamber::Senate) {
            return Err(polarmetrics_api::Error::Unsupported(
                "Congress.gov publishes no Senate roll-call vote list".to_string(),
            )
            .into());
        }
        let query = VoteQuery::new(congress).with_limit(i64::from(limit));
        Ok(self.get_house_votes(&query).await?)
    }
}

impl<T: CivicLookup + Sync> CivicLookup for &T {
    fn lookup(&self, address: &str) -> impl Future<Output = Result<Value, LocalityError>> + Send {
        (**self).lookup(address)
    }
}

impl<T: LegislatorRoster + Sync> LegislatorRoster for &T {
    fn legislators(
        &self,
        congress: u32,
        state: Option<&str>,
    ) -> impl Future<Output = Result<Value, LocalityError>> + Send {
        (**self).legislators(congress, state)
    }
}

impl<T: LegislationFeed + Sync> LegislationFeed for &T {
    fn bills(
        &self,
        congress: u32,
        limit: u32,
    ) -> impl Future<Output = Result<Value, LocalityError>> + Send {
        (**self).bills(congress, limit)
    }

    fn recent_votes(
        &self,
        congress: u32,
        chamber: Option<Chamber>,
        limit: u32,
    ) -> impl Future<Output = Result<Value, LocalityError>> + Send {
        (**self).recent_votes(congress, chamber, limit)
    }
}
