//! Backup command - Snapshot BleachBit settings into the backup store

use anyhow::{Context, Result};
use owo_colors::OwoColorize;

use crate::bleachbit::settings::SettingsManager;
use crate::config;

/// Execute the backup command
pub fn execute(name: Option<&str>) -> Result<()> {
    let config_dir = config::bleachbit_config_dir()
        .context("Failed to determine BleachBit configuration directory")?;
    let manager = SettingsManager::open(&config_dir)?;

    println!("Backing up settings from: {}", manager.config_dir().display());
    println!();

    for item in manager.tracked_entries() {
        if manager.config_dir().join(item).exists() {
            println!("{} {}", "Found:".green(), item);
        } else {
            println!("{} {} (skipped)", "Missing:".yellow(), item);
        }
    }
    println!();

    let backup_path = manager.create_backup(name)?;
    println!("{} {}", "Created:".green(), backup_path.display());

    Ok(())
}
