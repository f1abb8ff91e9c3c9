use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use tlecore::catalog::CatalogFetcher;
use tlecore::classify::RoundingPolicy;
use tlereport::report::inclination;
use tlereport::workflow::{InclinationRunner, ReportConfig};
use tlereport::{init_logging, repo};

const GROUP: &str = "iridium-next";

#[derive(Parser)]
#[command(author, version, about = "Iridium NEXT inclination distribution")]
struct Args {
    /// Load a report config from YAML
    #[arg(long)]
    config: Option<PathBuf>,
    /// Catalog group to analyse
    #[arg(long)]
    group: Option<String>,
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let args = Args::parse();
    let config = ReportConfig::from_args(args.config.as_deref(), args.group)?;
    repo::enter_git_root()?;

    let group = config.group_or(GROUP);
    let fetcher = CatalogFetcher::from_config(&config.to_catalog_config())
        .context("setting up catalog client")?;
    let records = fetcher.fetch_group(&group);
    if records.is_empty() {
        println!("Could not obtain {} satellite data.", group);
        return Ok(());
    }

    let runner = InclinationRunner::new(config.rounding_or(RoundingPolicy::nearest_integer()));
    let run = runner.execute(&records);

    let mut text = String::new();
    inclination::write_report(&mut text, &group, &run)?;
    print!("{}", text);
    Ok(())
}
