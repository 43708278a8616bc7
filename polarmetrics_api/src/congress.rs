//! HTTP client for the Congress.gov v3 API: members, bills, and House roll-call votes.

use std::time::Duration;

use serde_json::Value;

use crate::{
    client::{Transport, DEFAULT_TIMEOUT},
    query::{BillQuery, MemberQuery, VoteQuery},
    Error,
};

/// Client for the Congress.gov v3 API.
///
/// Every method returns the response body as raw JSON. Field names and shapes
/// vary between endpoints, so normalization happens downstream.
pub struct CongressClient {
    transport: Transport,
}

impl CongressClient {
    pub const DEFAULT_BASE_URL: &'static str = "https://api.congress.gov/v3";

    /// Creates a client pointing at the production Congress.gov API.
    pub fn new(api_key: Option<String>) -> Result<Self, Error> {
        Self::with_config(Self::DEFAULT_BASE_URL, api_key, DEFAULT_TIMEOUT)
    }

    /// Creates a client with a custom base URL. Used for testing with wiremock.
    pub fn with_base_url(base_url: &str, api_key: Option<String>) -> Result<Self, Error> {
        Self::with_config(base_url, api_key, DEFAULT_TIMEOUT)
    }

    pub fn with_config(
        base_url: &str,
        api_key: Option<String>,
        timeout: Duration,
    ) -> Result<Self, Error> {
        if api_key.is_none() {
            tracing::warn!("No Congress.gov API key configured; requests will likely be rejected");
        }
        Ok(Self {
            transport: Transport::new(base_url, api_key, "api_key", timeout)?,
        })
    }

    pub fn has_api_key(&self) -> bool {
        self.transport.has_api_key()
    }

    pub fn base_url(&self) -> &str {
        self.transport.base_url()
    }

    /// Fetches the member roster for a congress, optionally one state or district.
    pub async fn get_members(&self, query: &MemberQuery) -> Result<Value, Error> {
        self.transport.get::<Value, MemberQuery>(query).await
    }

    /// Fetches the most recently updated bills of a congress.
    pub async fn get_bills(&self, query: &BillQuery) -> Result<Value, Error> {
        self.transport.get::<Value, BillQuery>(query).await
    }

    /// Fetches recent House roll-call votes. Congress.gov publishes no Senate vote list.
    pub async fn get_house_votes(&self, query: &VoteQuery) -> Result<Value, Error> {
        self.transport.get::<Value, VoteQuery>(query).await
    }
}
