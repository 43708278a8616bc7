//! The `representatives` subcommand: legislators for a state or district.

use anyhow::{bail, Result};
use clap::Args;
use polarmetrics_lib::matcher::filter_by_chamber;
use polarmetrics_lib::validation;
use polarmetrics_lib::{
    Config, LegislatorsDataset, LocalityService, NoCivicLookup, PipelineSettings,
};

use super::data_or_warn;
use crate::output::{print_representatives, OutputFormat};

#[derive(Args)]
pub struct RepresentativesArgs {
    /// US state code or name (e.g. TX, Texas)
    #[arg(long)]
    pub state: String,

    /// Congressional district; 0 for at-large seats
    #[arg(long)]
    pub district: Option<u32>,

    /// Filter by chamber: house (h), senate (s)
    #[arg(long)]
    pub chamber: Option<String>,

    /// Roster source: congress-gov or legislators-dataset
    #[arg(long, default_value = "congress-gov")]
    pub source: String,
}

pub async fn run(args: &RepresentativesArgs, config: &Config, format: &OutputFormat) -> Result<()> {
    let state = validation::validate_state(&args.state)?;
    let district = args.district.map(validation::validate_district).transpose()?;
    let chamber = args
        .chamber
        .as_deref()
        .map(validation::validate_chamber)
        .transpose()?;

    let congress = config.congress_client()?;
    let settings = PipelineSettings::from(config);

    let outcome = match args.source.as_str() {
        "congress-gov" | "congress" => {
            LocalityService::new(NoCivicLookup, &congress, &congress, settings)
                .local_representatives(Some(&state), district)
                .await?
        }
        "legislators-dataset" | "dataset" => {
            let http = reqwest::Client::builder().timeout(config.timeout).build()?;
            let dataset = LegislatorsDataset::download(&http).await?;
            LocalityService::new(NoCivicLookup, &dataset, &congress, settings)
                .local_representatives(Some(&state), district)
                .await?
        }
        other => bail!(
            "unknown roster source '{}'. Valid values: congress-gov, legislators-dataset",
            other
        ),
    };

    let mut records = data_or_warn("representatives", outcome);
    if let Some(chamber) = chamber {
        records = filter_by_chamber(records, chamber);
    }
    print_representatives(&records, format)
}
