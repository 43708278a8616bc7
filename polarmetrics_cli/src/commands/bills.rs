//! The `bills` subcommand: recent bills involving given legislators.

use anyhow::Result;
use clap::Args;
use polarmetrics_lib::validation;
use polarmetrics_lib::{Config, LegislatorRecord, LocalityService, NoCivicLookup, PipelineSettings};

use super::data_or_warn;
use crate::output::{print_bills, OutputFormat};

#[derive(Args)]
pub struct BillsArgs {
    /// Bioguide ID of a sponsor or co-sponsor (repeatable, e.g. R000614)
    #[arg(long = "bioguide-id", required = true)]
    pub bioguide_ids: Vec<String>,

    /// Most bills to list (defaults to POLARMETRICS_LOCAL_BILL_LIMIT)
    #[arg(long)]
    pub limit: Option<usize>,

    /// Recent bills scanned before filtering (defaults to POLARMETRICS_BILL_WINDOW)
    #[arg(long)]
    pub window: Option<u32>,
}

pub async fn run(args: &BillsArgs, config: &Config, format: &OutputFormat) -> Result<()> {
    let representatives = args
        .bioguide_ids
        .iter()
        .map(|id| -> Result<LegislatorRecord> {
            Ok(LegislatorRecord {
                bioguide_id: Some(validation::validate_bioguide_id(id)?),
                ..LegislatorRecord::default()
            })
        })
        .collect::<Result<Vec<_>>>()?;

    let mut settings = PipelineSettings::from(config);
    if let Some(window) = args.window {
        settings.bill_window = window;
    }
    let limit = args.limit.unwrap_or(settings.local_bill_limit);

    let congress = config.congress_client()?;
    let service = LocalityService::new(NoCivicLookup, &congress, &congress, settings);

    let bills = data_or_warn("bills", service.local_bills(&representatives, limit).await?);
    print_bills(&bills, format)
}
