use anyhow::Context;
use clap::Parser;
use log::warn;
use std::path::PathBuf;
use tlecore::catalog::CatalogFetcher;
use tlecore::classify::RoundingPolicy;
use tlereport::render::{altitude::DEFAULT_OUTPUT, render_altitude_histograms};
use tlereport::report::altitude;
use tlereport::workflow::{AltitudeRunner, ReportConfig};
use tlereport::{init_logging, repo};

const GROUP: &str = "starlink";

#[derive(Parser)]
#[command(author, version, about = "Starlink altitude distribution by orbital plane")]
struct Args {
    /// Load a report config from YAML
    #[arg(long)]
    config: Option<PathBuf>,
    /// Catalog group to analyse
    #[arg(long)]
    group: Option<String>,
    /// Histogram image, relative to the repository root
    #[arg(long, default_value = DEFAULT_OUTPUT)]
    output: PathBuf,
    /// Print statistics only
    #[arg(long, default_value_t = false)]
    no_plot: bool,
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

    let runner = AltitudeRunner::new(config.rounding_or(RoundingPolicy::starlink_shells()));
    let run = runner.execute(&records);

    let mut text = String::new();
    altitude::write_summary(&mut text, &group, &run)?;
    altitude::write_ranges(&mut text, &run)?;
    print!("{}", text);

    if !args.no_plot {
        match render_altitude_histograms(&args.output, &run) {
            Ok(()) => println!("\nSaved histograms to {}", args.output.display()),
            Err(err) => warn!("unable to render histograms: {:#}", err),
        }
    }
    Ok(())
}
