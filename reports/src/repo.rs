use anyhow::{bail, Context};
use log::debug;
use std::env;
use std::path::PathBuf;
use std::process::Command;

fn git(args: &[&str]) -> anyhow::Result<String> {
    let output = Command::new("git")
        .args(args)
        .output()
        .with_context(|| format!("running git {}", args.join(" ")))?;
    if !output.status.success() {
        bail!(
            "git {} failed: {}",
            args.join(" "),
            String::from_utf8_lossy(&output.stderr).trim()
        );
    }
    String::from_utf8(output.stdout).context("decoding git output")
}

/// Top level of the enclosing git checkout.
pub fn git_root() -> anyhow::Result<PathBuf> {
    let root = git(&["rev-parse", "--show-toplevel"])?;
    Ok(PathBuf::from(root.trim()))
}

/// Moves the process into the repository root so relative paths resolve there.
pub fn enter_git_root() -> anyhow::Result<PathBuf> {
    let root = git_root().context("finding repository root")?;
    env::set_current_dir(&root)
        .with_context(|| format!("changing directory to {}", root.display()))?;
    debug!("working directory {}", root.display());
    Ok(root)
}

/// Paths tracked in the index, relative to the working directory.
pub fn tracked_files() -> anyhow::Result<Vec<String>> {
    let listing = git(&["ls-files"])?;
    Ok(listing
        .lines()
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect())
}
