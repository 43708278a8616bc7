//! The `votes` subcommand: the recent roll-call vote feed.

use anyhow::Result;
use clap::Args;
use polarmetrics_lib::validation;
use polarmetrics_lib::{Config, LocalityService, NoCivicLookup, PipelineSettings};

use super::data_or_warn;
use crate::output::{print_votes, OutputFormat};

#[derive(Args)]
pub struct VotesArgs {
    /// Chamber: house (h) or senate (s). Only House votes are published.
    #[arg(long)]
    pub chamber: Option<String>,

    /// Most votes to list (defaults to POLARMETRICS_VOTE_LIMIT)
    #[arg(long)]
    pub limit: Option<u32>,
}

pub async fn run(args: &VotesArgs, config: &Config, format: &OutputFormat) -> Result<()> {
    let chamber = args
        .chamber
        .as_deref()
        .map(validation::validate_chamber)
        .transpose()?;
    let limit = args.limit.unwrap_or(config.vote_limit);

    let congress = config.congress_client()?;
    let service = LocalityService::new(NoCivicLookup, &congress, &congress, PipelineSettings::from(config));

    let votes = data_or_warn("votes", service.recent_votes(chamber, limit).await?);
    print_votes(&votes, format)
}
