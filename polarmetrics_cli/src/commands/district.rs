//! The `district` subcommand: address to congressional district.

use anyhow::Result;
use clap::Args;
use polarmetrics_lib::{Config, LocalityService, PipelineSettings};

use super::data_or_warn;
use crate::output::{print_district, OutputFormat};

#[derive(Args)]
pub struct DistrictArgs {
    /// Free-text street address
    pub address: String,
}

pub async fn run(args: &DistrictArgs, config: &Config, format: &OutputFormat) -> Result<()> {
    let civic = config.civic_client()?;
    let congress = config.congress_client()?;
    let service = LocalityService::new(&civic, &congress, &congress, PipelineSettings::from(config));

    let info = data_or_warn("civic data", service.district_info(&args.address).await?);
    print_district(&info, format)
}
