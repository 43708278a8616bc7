//! The `health` subcommand: local configuration check. Makes no requests.

use anyhow::Result;
use chrono::{DateTime, Utc};
use polarmetrics_lib::Config;
use serde::Serialize;

use crate::output::{print_json, OutputFormat};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Health {
    status: &'static str,
    timestamp: DateTime<Utc>,
    version: &'static str,
    civic_api_key: bool,
    congress_api_key: bool,
    civic_base_url: String,
    congress_base_url: String,
    congress: u32,
}

fn health(config: &Config) -> Health {
    let civic_api_key = config.civic_api_key.is_some();
    let congress_api_key = config.congress_api_key.is_some();
    Health {
        status: if civic_api_key && congress_api_key {
            "ok"
        } else {
            "degraded"
        },
        timestamp: Utc::now(),
        version: env!("CARGO_PKG_VERSION"),
        civic_api_key,
        congress_api_key,
        civic_base_url: config.civic_base_url.clone(),
        congress_base_url: config.congress_base_url.clone(),
        congress: config.congress,
    }
}

pub fn run(config: &Config, format: &OutputFormat) -> Result<()> {
    let health = health(config);
    match format {
        OutputFormat::Json => print_json(&health),
        _ => {
            let present = |yes: bool| if yes { "configured" } else { "missing" };
            println!("Status: {} (polarmetrics {})", health.status, health.version);
            println!("Checked: {}", health.timestamp.format("%Y-%m-%d %H:%M:%S UTC"));
            println!("Civic API key: {}", present(health.civic_api_key));
            println!("Congress.gov API key: {}", present(health.congress_api_key));
            println!("Civic endpoint: {}", health.civic_base_url);
            println!("Congress.gov endpoint: {}", health.congress_base_url);
            println!("Congress: {}", health.congress);
        }
    }
    Ok(())
}
