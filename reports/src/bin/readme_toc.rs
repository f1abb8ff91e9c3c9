use anyhow::{bail, Context};
use clap::Parser;
use std::fs;
use std::path::Path;
use tlereport::toc::{self, DEFAULT_BASE_URL, DEFAULT_HEADER};
use tlereport::{init_logging, repo};

#[derive(Parser)]
#[command(author, version, about = "Regenerate README.md from the tracked NN.md articles")]
struct Args {
    /// Link prefix for article files
    #[arg(long, default_value = DEFAULT_BASE_URL)]
    base_url: String,
    /// First line of the generated README
    #[arg(long, default_value = DEFAULT_HEADER)]
    header: String,
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let args = Args::parse();
    let root = repo::enter_git_root()?;

    let articles = toc::select_articles(&repo::tracked_files()?);
    if articles.is_empty() {
        bail!("no NN.md files found in the git index");
    }
    println!(
        "Found {} tracked markdown files: {}",
        articles.len(),
        articles.join(", ")
    );

    let entries = toc::collect_entries(&root, &articles, &args.base_url);
    if entries.is_empty() {
        bail!("no titles extracted from markdown files");
    }

    let readme = toc::render_readme(&args.header, &entries);
    fs::write(Path::new("README.md"), readme).context("writing README.md")?;
    println!("README.md updated with {} entries", entries.len());
    Ok(())
}
