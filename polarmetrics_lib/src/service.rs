//! Orchestrates the pipeline over injected upstream sources.

use serde_json::Value;

use polarmetrics_api::types::Chamber;

use crate::config::{self, Config};
use crate::correlator::correlate;
use crate::error::LocalityError;
use crate::matcher::match_representatives;
use crate::model::{Bill, DistrictInfo, LegislatorRecord, Vote};
use crate::normalize;
use crate::outcome::Outcome;
use crate::report::{self, LocalPoliticalReport};
use crate::resolver;
use crate::sources::{CivicLookup, LegislationFeed, LegislatorRoster};
use crate::validation::validate_address;

/// Tunables for one pipeline run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PipelineSettings {
    pub congress: u32,
    /// Bills fetched from the feed before correlation.
    pub bill_window: u32,
    /// Most local bills kept in a report.
    pub local_bill_limit: usize,
    pub vote_limit: u32,
}

impl Default for PipelineSettings {
    fn default() -> Self {
        Self {
            congress: config::DEFAULT_CONGRESS,
            bill_window: config::DEFAULT_BILL_WINDOW,
            local_bill_limit: config::DEFAULT_LOCAL_BILL_LIMIT,
            vote_limit: config::DEFAULT_VOTE_LIMIT,
        }
    }
}

impl From<&Config> for PipelineSettings {
    fn from(config: &Config) -> Self {
        Self {
            congress: config.congress,
            bill_window: config.bill_window,
            local_bill_limit: config.local_bill_limit,
            vote_limit: config.vote_limit,
        }
    }
}

/// Runs the address → district → representatives → bills pipeline.
///
/// Upstream failures degrade the affected stage to empty data and are logged.
/// Only rejected input or an upstream payload of an uninterpretable shape
/// surfaces as an error.
pub struct LocalityService<C, R, L> {
    civic: C,
    roster: R,
    feed: L,
    settings: PipelineSettings,
}

impl<C, R, L> LocalityService<C, R, L>
where
    C: CivicLookup + Sync,
    R: LegislatorRoster + Sync,
    L: LegislationFeed + Sync,
{
    pub fn new(civic: C, roster: R, feed: L, settings: PipelineSettings) -> Self {
        Self {
            civic,
            roster,
            feed,
            settings,
        }
    }

    pub fn settings(&self) -> &PipelineSettings {
        &self.settings
    }

    /// Resolve an address to its district. Fails only on invalid input.
    pub async fn district_info(&self, address: &str) -> Result<Outcome<DistrictInfo>, LocalityError> {
        let address = validate_address(address)?;
        let outcome = resolver::lookup_district(&address, &self.civic).await;
        log_outcome("civic lookup", &outcome);
        Ok(outcome)
    }

    /// The roster for a state (or all states), normalized.
    pub async fn roster(&self, state: Option<&str>) -> Result<Outcome<Vec<LegislatorRecord>>, LocalityError> {
        let fetched = self.roster.legislators(self.settings.congress, state).await;
        let outcome = tag(fetched, normalize::legislators)?;
        log_count("legislator roster", &outcome);
        Ok(outcome)
    }

    /// Legislators representing `state` / `district`. No roster is fetched
    /// when the state is unknown.
    pub async fn local_representatives(
        &self,
        state: Option<&str>,
        district: Option<u32>,
    ) -> Result<Outcome<Vec<LegislatorRecord>>, LocalityError> {
        if state.is_none() {
            tracing::debug!("State unknown; skipping roster fetch");
            return Ok(Outcome::Empty);
        }
        let outcome = self.roster(state).await?;
        Ok(match outcome {
            Outcome::Data(roster) => {
                Outcome::from_vec(match_representatives(state, district, &roster))
            }
            other => other,
        })
    }

    /// The most recently updated bills, `bill_window` of them.
    pub async fn bill_roster(&self) -> Result<Outcome<Vec<Bill>>, LocalityError> {
        let fetched = self
            .feed
            .bills(self.settings.congress, self.settings.bill_window)
            .await;
        let outcome = tag(fetched, normalize::bills)?;
        log_count("bill roster", &outcome);
        Ok(outcome)
    }

    /// Bills sponsored or co-sponsored by `representatives`, at most `limit`.
    pub async fn local_bills(
        &self,
        representatives: &[LegislatorRecord],
        limit: usize,
    ) -> Result<Outcome<Vec<Bill>>, LocalityError> {
        if representatives.is_empty() {
            return Ok(Outcome::Empty);
        }
        Ok(correlate_outcome(self.bill_roster().await?, representatives, limit))
    }

    pub async fn recent_votes(
        &self,
        chamber: Option<Chamber>,
        limit: u32,
    ) -> Result<Outcome<Vec<Vote>>, LocalityError> {
        let fetched = self
            .feed
            .recent_votes(self.settings.congress, chamber, limit)
            .await;
        let outcome = tag(fetched, normalize::votes)?;
        log_count("recent votes", &outcome);
        Ok(outcome)
    }

    /// Build the full report for an address.
    ///
    /// The civic lookup, the bill roster and the votes feed are fetched
    /// concurrently; the legislator roster follows once the state is known.
    pub async fn get_local_political_data(
        &self,
        address: &str,
    ) -> Result<LocalPoliticalReport, LocalityError> {
        let address = validate_address(address)?;
        tracing::info!("Building local report for {}", address);

        let (civic, bills, votes) = tokio::join!(
            resolver::lookup_district(&address, &self.civic),
            self.feed
                .bills(self.settings.congress, self.settings.bill_window),
            self.feed
                .recent_votes(self.settings.congress, None, self.settings.vote_limit),
        );

        log_outcome("civic lookup", &civic);
        let district_info = civic.unwrap_or_default();
        if !district_info.is_resolved() {
            tracing::warn!("No congressional district found for {}", address);
        }

        let bills = tag(bills, normalize::bills)?;
        log_count("bill roster", &bills);
        let votes = tag(votes, normalize::votes)?;
        log_count("recent votes", &votes);

        let reps = self
            .local_representatives(district_info.state.as_deref(), district_info.district)
            .await?
            .unwrap_or_default();
        let local_bills =
            correlate_outcome(bills, &reps, self.settings.local_bill_limit).unwrap_or_default();

        tracing::info!(
            "Matched {} representatives and {} local bills",
            reps.len(),
            local_bills.len()
        );
        Ok(report::compile(
            &address,
            district_info,
            reps,
            local_bills,
            votes.unwrap_or_default(),
        ))
    }
}

/// Tag a fetch result: a failed fetch is `Unavailable`, a payload that
/// normalizes to nothing is `Empty`. Normalization errors propagate.
fn tag<T>(
    fetched: Result<Value, LocalityError>,
    normalize: impl FnOnce(&Value) -> Result<Vec<T>, LocalityError>,
) -> Result<Outcome<Vec<T>>, LocalityError> {
    match fetched {
        Err(e) => Ok(Outcome::Unavailable(e.to_string())),
        Ok(raw) => Ok(Outcome::from_vec(normalize(&raw)?)),
    }
}

fn correlate_outcome(
    bills: Outcome<Vec<Bill>>,
    representatives: &[LegislatorRecord],
    limit: usize,
) -> Outcome<Vec<Bill>> {
    match bills {
        Outcome::Data(bills) => Outcome::from_vec(correlate(representatives, &bills, limit)),
        other => other,
    }
}

fn log_outcome<T>(stage: &str, outcome: &Outcome<T>) {
    match outcome {
        Outcome::Unavailable(reason) => tracing::warn!("{} unavailable: {}", stage, reason),
        Outcome::Empty => tracing::debug!("{} returned no data", stage),
        Outcome::Data(_) => tracing::debug!("{} returned data", stage),
    }
}

fn log_count<T>(stage: &str, outcome: &Outcome<Vec<T>>) {
    match outcome {
        Outcome::Data(items) => tracing::debug!("{} returned {} records", stage, items.len()),
        _ => log_outcome(stage, outcome),
    }
}
