mod commands;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use polarmetrics_lib::Config;

use crate::output::OutputFormat;

#[derive(Parser)]
#[command(name = "polarmetrics")]
#[command(about = "Look up the congressional district, representatives and local legislation for an address")]
struct Cli {
    /// Output format: table, json, csv, or markdown
    #[arg(long, default_value = "table", global = true)]
    output: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the full local political report for an address
    Analyze(commands::analyze::AnalyzeArgs),
    /// Resolve an address to its congressional district
    District(commands::district::DistrictArgs),
    /// List the legislators representing a state or district
    Representatives(commands::representatives::RepresentativesArgs),
    /// List recent bills sponsored or co-sponsored by given legislators
    Bills(commands::bills::BillsArgs),
    /// List recent roll-call votes
    Votes(commands::votes::VotesArgs),
    /// Show which upstream keys and endpoints are configured
    Health,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("polarmetrics=info".parse()?),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let format = OutputFormat::parse(&cli.output)?;
    let config = Config::from_env();

    match &cli.command {
        Commands::Analyze(args) => commands::analyze::run(args, &config, &format).await?,
        Commands::District(args) => commands::district::run(args, &config, &format).await?,
        Commands::Representatives(args) => {
            commands::representatives::run(args, &config, &format).await?
        }
        Commands::Bills(args) => commands::bills::run(args, &config, &format).await?,
        Commands::Votes(args) => commands::votes::run(args, &config, &format).await?,
        Commands::Health => commands::health::run(&config, &format)?,
    }

    Ok(())
}
