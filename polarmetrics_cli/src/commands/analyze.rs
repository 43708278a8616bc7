//! The `analyze` subcommand: the full local political report for an address.

use anyhow::Result;
use clap::Args;
use polarmetrics_lib::{Config, LocalityService, PipelineSettings};

use crate::output::{print_report, OutputFormat};

#[derive(Args)]
pub struct AnalyzeArgs {
    /// Free-text street address (e.g. "110 Congress Ave, Austin, TX")
    pub address: String,

    /// Most local bills to include (defaults to POLARMETRICS_LOCAL_BILL_LIMIT)
    #[arg(long)]
    pub bill_limit: Option<usize>,
}

pub async fn run(args: &AnalyzeArgs, config: &Config, format: &OutputFormat) -> Result<()> {
    let civic = config.civic_client()?;
    let congress = config.congress_client()?;

    let mut settings = PipelineSettings::from(config);
    if let Some(limit) = args.bill_limit {
        settings.local_bill_limit = limit;
    }
    let service = LocalityService::new(&civic, &congress, &congress, settings);

    let report = service.get_local_political_data(&args.address).await?;
    print_report(&report, format)
}
