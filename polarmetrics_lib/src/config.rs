//! Environment-driven configuration.

use std::time::Duration;

use polarmetrics_api::{CivicClient, CongressClient};

/// Settings read from the process environment (after `.env` is loaded).
///
/// Numeric values that are missing or do not parse fall back to their defaults.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub civic_api_key: Option<String>,
    pub congress_api_key: Option<String>,
    pub congress: u32,
    /// Bills fetched before correlation.
    pub bill_window: u32,
    pub local_bill_limit: usize,
    pub vote_limit: u32,
    pub timeout: Duration,
    pub civic_base_url: String,
    pub congress_base_url: String,
}

pub const DEFAULT_CONGRESS: u32 = 118;
pub const DEFAULT_BILL_WINDOW: u32 = 100;
pub const DEFAULT_LOCAL_BILL_LIMIT: usize = 10;
pub const DEFAULT_VOTE_LIMIT: u32 = 20;
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

impl Default for Config {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let parsed = |key: &str| lookup(key).and_then(|val| val.trim().parse::<u64>().ok());
        let non_empty = |key: &str| lookup(key).filter(|val| !val.trim().is_empty());

        Self {
            civic_api_key: non_empty("GOOGLE_CIVIC_API_KEY"),
            congress_api_key: non_empty("CONGRESS_API_KEY"),
            congress: parsed("POLARMETRICS_CONGRESS")
                .and_then(|v| u32::try_from(v).ok())
                .unwrap_or(DEFAULT_CONGRESS),
            bill_window: parsed("POLARMETRICS_BILL_WINDOW")
                .and_then(|v| u32::try_from(v).ok())
                .unwrap_or(DEFAULT_BILL_WINDOW),
            local_bill_limit: parsed("POLARMETRICS_LOCAL_BILL_LIMIT")
                .and_then(|v| usize::try_from(v).ok())
                .unwrap_or(DEFAULT_LOCAL_BILL_LIMIT),
            vote_limit: parsed("POLARMETRICS_VOTE_LIMIT")
                .and_then(|v| u32::try_from(v).ok())
                .unwrap_or(DEFAULT_VOTE_LIMIT),
            timeout: Duration::from_secs(
                parsed("POLARMETRICS_TIMEOUT_SECS").unwrap_or(DEFAULT_TIMEOUT_SECS),
            ),
            civic_base_url: non_empty("POLARMETRICS_CIVIC_BASE_URL")
                .unwrap_or_else(|| CivicClient::DEFAULT_BASE_URL.to_string()),
            congress_base_url: non_empty("POLARMETRICS_CONGRESS_BASE_URL")
                .unwrap_or_else(|| CongressClient::DEFAULT_BASE_URL.to_string()),
        }
    }

    pub fn civic_client(&self) -> Result<CivicClient, polarmetrics_api::Error> {
        CivicClient::with_config(&self.civic_base_url, self.civic_api_key.clone(), self.timeout)
    }

    pub fn congress_client(&self) -> Result<CongressClient, polarmetrics_api::Error> {
        CongressClient::with_config(
            &self.congress_base_url,
            self.congress_api_key.clone(),
            self.timeout,
        )
    }
}
