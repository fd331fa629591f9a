//! Export command - Copy the main settings file out of the config directory

use anyhow::{Context, Result};
use owo_colors::OwoColorize;
use std::path::Path;

use crate::bleachbit::settings::SettingsManager;
use crate::config;

/// Execute the export command
pub fn execute(destination: &Path) -> Result<()> {
    let config_dir = config::bleachbit_config_dir()
        .context("Failed to determine BleachBit configuration directory")?;
    let manager = SettingsManager::open(&config_dir)?;

    manager.export_checked_options(destination)?;

    println!("{} {}", "Exported:".green(), destination.display());

    Ok(())
}
