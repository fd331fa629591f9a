//! Restore command - Restore BleachBit settings from a named backup

use anyhow::{Context, Result};
use owo_colors::OwoColorize;

use crate::bleachbit::settings::{SettingsManager, PRE_RESTORE_BACKUP_NAME};
use crate::config;

/// Execute the restore command
pub fn execute(name: &str) -> Result<()> {
    let config_dir = config::bleachbit_config_dir()
        .context("Failed to determine BleachBit configuration directory")?;
    let manager = SettingsManager::open(&config_dir)?;

    println!("Restoring backup '{}'", name);
    println!(
        "Current settings are saved to '{}' first (overwritten on every restore).",
        PRE_RESTORE_BACKUP_NAME
    );
    println!();

    manager.restore_backup(name)?;

    println!("{}", "Restore complete!".green());
    println!("Restart BleachBit if it was running to pick up the changes.");

    Ok(())
}
