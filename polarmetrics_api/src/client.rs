//! Shared HTTP transport used by the civic and Congress.gov clients.

use std::time::Duration;

use serde::de::DeserializeOwned;
use url::Url;

use crate::{query::Query, Error};

/// Default per-request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

const USER_AGENT: &str = concat!("polarmetrics/", env!("CARGO_PKG_VERSION"));

/// One upstream host: a pooled `reqwest::Client`, a base URL, and the API key
/// with the name of the query parameter that carries it.
pub(crate) struct Transport {
    http: reqwest::Client,
    base_api_url: String,
    api_key: Option<String>,
    key_param: &'static str,
}

impl Transport {
    pub(crate) fn new(
        base_api_url: &str,
        api_key: Option<String>,
        key_param: &'static str,
        timeout: Duration,
    ) -> Result<Self, Error> {
        let http = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()
            .map_err(|e| {
                tracing::error!("Failed to build HTTP client: {}", e);
                Error::RequestFailed
            })?;
        Ok(Self {
            http,
            base_api_url: base_api_url.trim_end_matches('/').to_string(),
            api_key,
            key_param,
        })
    }

    pub(crate) fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    pub(crate) fn base_url(&self) -> &str {
        &self.base_api_url
    }

    fn get_url(&self, query: &impl Query) -> Result<Url, Error> {
        let url = Url::parse(format!("{}{}", &self.base_api_url, query.path()).as_str())
            .map_err(|e| {
                tracing::error!("Invalid URL constructed: {}", e);
                Error::RequestFailed
            })?;
        let mut url = query.add_to_url(&url);
        if let Some(key) = &self.api_key {
            url.query_pairs_mut().append_pair(self.key_param, key);
        }
        Ok(url)
    }

    pub(crate) async fn get<T, Q>(&self, query: &Q) -> Result<T, Error>
    where
        T: DeserializeOwned,
        Q: Query,
    {
        let url = self.get_url(query)?;
        let path = query.path();
        let resp = self
            .http
            .get(url)
            .header("accept", "application/json")
            .send()
            .await
            .map_err(|e| {
                // reqwest errors embed the URL, which carries the API key
                tracing::error!("Failed to get {}: {}", path, e.without_url());
                Error::RequestFailed
            })?;

        let status = resp.status();
        let body = resp.text().await.map_err(|e| {
            tracing::error!("Failed to read response body from {}: {}", path, e.without_url());
            Error::RequestFailed
        })?;

        if !status.is_success() {
            let snippet = truncate_body(&body);
            tracing::error!("Request to {} failed with status {}: {}", path, status, snippet);
            return Err(Error::HttpStatus {
                status: status.as_u16(),
                body: snippet,
            });
        }

        let parsed = serde_json::from_str::<T>(&body).map_err(|e| {
            let snippet = truncate_body(&body);
            tracing::error!("Failed to parse {}: {} | body: {}", path, e, snippet);
            Error::RequestFailed
        })?;

        Ok(parsed)
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 2000;
    if body.len() <= MAX {
        body.to_string()
    } else {
        let mut end = MAX;
        while !body.is_char_boundary(end) {
            end -= 1;
        }
        format!("{}...[truncated]", &body[..end])
    }
}
