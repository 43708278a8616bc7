//! HTTP client for the civic-lookup `representatives` endpoint.

use std::time::Duration;

use serde_json::Value;

use crate::{
    client::{Transport, DEFAULT_TIMEOUT},
    query::RepresentativeQuery,
    types::CivicResponse,
    Error,
};

/// Client for the Google Civic Information API.
///
/// Responses are returned as raw JSON; interpreting them is left to the caller.
pub struct CivicClient {
    transport: Transport,
}

impl CivicClient {
    pub const DEFAULT_BASE_URL: &'static str = "https://civicinfo.googleapis.com/civicinfo/v2";

    /// Creates a client pointing at the production civic API.
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
            tracing::warn!("No civic API key configured; requests will likely be rejected");
        }
        Ok(Self {
            transport: Transport::new(base_url, api_key, "key", timeout)?,
        })
    }

    pub fn has_api_key(&self) -> bool {
        self.transport.has_api_key()
    }

    pub fn base_url(&self) -> &str {
        self.transport.base_url()
    }

    /// Fetches officials and offices covering an address, as raw JSON.
    pub async fn get_representatives(&self, query: &RepresentativeQuery) -> Result<Value, Error> {
        self.transport.get::<Value, RepresentativeQuery>(query).await
    }

    /// Same request as [`get_representatives`](Self::get_representatives), decoded.
    pub async fn get_representatives_typed(
        &self,
        query: &RepresentativeQuery,
    ) -> Result<CivicResponse, Error> {
        self.transport
            .get::<CivicResponse, RepresentativeQuery>(query)
            .await
    }
}
