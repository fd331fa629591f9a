//! List command - Show all backups in the backup store

use anyhow::{Context, Result};
use chrono::DateTime;
use comfy_table::{presets::UTF8_FULL_CONDENSED, Cell, ContentArrangement, Table};

use super::utils;
use crate::bleachbit::settings::{BackupInfo, SettingsManager};
use crate::config;

/// Execute the list command and return formatted output
pub fn execute() -> Result<String> {
    let config_dir = config::bleachbit_config_dir()
        .context("Failed to determine BleachBit configuration directory")?;
    let manager = SettingsManager::open(&config_dir)?;

    let mut backups = manager.list_backups()?;

    // Sort by creation date (most recent first); the store itself returns
    // directory-enumeration order
    backups.sort_by(|a, b| parsed_date(b).cmp(&parsed_date(a)));

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec![
        Cell::new("Name"),
        Cell::new("Created"),
        Cell::new("Items"),
        Cell::new("Size"),
    ]);

    for backup in &backups {
        let created = parsed_date(backup)
            .map(|dt| dt.format("%Y-%m-%d %H:%M").to_string())
            .unwrap_or_else(|| backup.date.clone());

        let size = utils::calculate_dir_size(&manager.backup_dir().join(&backup.name))
            .map(utils::format_size)
            .unwrap_or_else(|_| "-".to_string());

        table.add_row(vec![
            Cell::new(&backup.name),
            Cell::new(created),
            Cell::new(backup.items.join(", ")),
            Cell::new(size),
        ]);
    }

    let mut output = table.to_string();
    output.push_str(&format!("\n\n{} backup(s) found", backups.len()));

    Ok(output)
}

/// Parse a backup's ISO-8601 date for sorting and display
fn parsed_date(backup: &BackupInfo) -> Option<DateTime<chrono::FixedOffset>> {
    DateTime::parse_from_rfc3339(&backup.date).ok()
}
