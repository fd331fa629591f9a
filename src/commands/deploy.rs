//! Deploy command - Copy custom cleaner files into the user profile

use anyhow::{Context, Result};
use owo_colors::OwoColorize;
use std::path::{Path, PathBuf};

use crate::bleachbit::cleaners;
use crate::config;

/// Execute the deploy-cleaners command
pub fn execute(source_dir: &Path, target_override: Option<&Path>) -> Result<()> {
    let target_dir: PathBuf = match target_override {
        Some(path) => path.to_path_buf(),
        None => config::cleaners_dir().context("Failed to determine cleaners directory")?,
    };

    println!("Source cleaners directory: {}", source_dir.display());
    println!("Target cleaners directory: {}", target_dir.display());
    println!();

    let report = cleaners::deploy_cleaners(source_dir, &target_dir)?;

    if report.copied.is_empty() && report.failed.is_empty() {
        println!("No .xml cleaner files found. Nothing to deploy.");
        return Ok(());
    }

    for name in &report.copied {
        println!("{} {}", "Copied:".green(), name);
    }
    for (name, error) in &report.failed {
        eprintln!("{} {}: {}", "Failed:".red(), name, error);
    }

    println!(
        "\nDeployed {} cleaner(s), {} failed",
        report.copied.len().to_string().green(),
        if report.failed.is_empty() {
            "0".to_string()
        } else {
            report.failed.len().to_string().red().to_string()
        }
    );
    println!("Restart BleachBit if it was running to see the changes.");

    Ok(())
}
