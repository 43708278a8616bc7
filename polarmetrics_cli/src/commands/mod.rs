//! CLI subcommand implementations.

pub mod analyze;
pub mod bills;
pub mod district;
pub mod health;
pub mod representatives;
pub mod votes;

use polarmetrics_lib::Outcome;

/// Report a degraded stage on stderr and hand back whatever data there is.
pub(crate) fn data_or_warn<T: Default>(stage: &str, outcome: Outcome<T>) -> T {
    match &outcome {
        Outcome::Unavailable(reason) => eprintln!("Warning: {} unavailable: {}", stage, reason),
        Outcome::Empty => eprintln!("No {} found", stage),
        Outcome::Data(_) => {}
    }
    outcome.unwrap_or_default()
}
