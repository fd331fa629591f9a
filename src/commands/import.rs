//! Import command - Copy a settings file over the main settings file

use anyhow::{Context, Result};
use owo_colors::OwoColorize;
use std::path::Path;

use crate::bleachbit::settings::{SettingsManager, PRE_IMPORT_BACKUP_NAME};
use crate::config;

/// Execute the import command
pub fn execute(source: &Path) -> Result<()> {
    let config_dir = config::bleachbit_config_dir()
        .context("Failed to determine BleachBit configuration directory")?;
    let manager = SettingsManager::open(&config_dir)?;

    manager.import_checked_options(source)?;

    println!("{} {}", "Imported:".green(), source.display());
    if manager.backup_dir().join(PRE_IMPORT_BACKUP_NAME).exists() {
        println!(
            "Previous settings were saved to the '{}' backup.",
            PRE_IMPORT_BACKUP_NAME
        );
    }

    Ok(())
}
