//! Settings backup manager
//!
//! Snapshots a fixed set of BleachBit configuration entries into a backup
//! store at `<config dir>/backups/<name>/`, and restores them back. Each
//! backup directory carries a `backup_metadata.json` record; a backup
//! without one is treated as invalid.

use chrono::Local;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use super::fsops;

/// Metadata record written into every backup directory
pub const METADATA_FILE: &str = "backup_metadata.json";

/// The main settings file handled by export/import
pub const MAIN_SETTINGS_FILE: &str = "bleachbit.ini";

/// Reserved name for the safety backup taken before a restore
pub const PRE_RESTORE_BACKUP_NAME: &str = "pre_restore_backup";

/// Reserved name for the safety backup taken before an import
pub const PRE_IMPORT_BACKUP_NAME: &str = "pre_import_backup";

/// Configuration entries the backup manager knows how to snapshot.
/// `cleaners` is a directory; the rest are regular files.
const TRACKED_ENTRIES: [&str; 4] = [
    "bleachbit.ini",
    "memory.json",
    "whitelist.json",
    "cleaners",
];

/// Errors produced by the settings backup manager
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("backup '{0}' not found")]
    BackupNotFound(String),

    #[error("invalid backup '{name}': {reason}")]
    InvalidBackup { name: String, reason: String },

    #[error("BleachBit settings file not found: {}", .0.display())]
    SettingsFileNotFound(PathBuf),

    #[error("import file not found: {}", .0.display())]
    ImportFileNotFound(PathBuf),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Copy(#[from] fs_extra::error::Error),

    #[error("failed to encode backup metadata: {0}")]
    Metadata(#[from] serde_json::Error),
}

/// Contents of `backup_metadata.json`
#[derive(Debug, Serialize, Deserialize)]
pub struct BackupMetadata {
    /// ISO-8601 timestamp of backup creation
    pub backup_date: String,
    /// Entry names the backup intended to track (not all necessarily
    /// existed at backup time)
    pub backup_items: Vec<String>,
}

/// A valid backup found in the backup store
#[derive(Debug)]
pub struct BackupInfo {
    /// Directory name of the backup
    pub name: String,
    /// ISO-8601 creation timestamp from the metadata record
    pub date: String,
    /// Tracked entry names recorded at backup time
    pub items: Vec<String>,
}

/// Manages point-in-time backups of the BleachBit configuration directory.
///
/// Single-threaded by design: concurrent operations against the same
/// backup store are undefined and must be serialized by the caller.
pub struct SettingsManager {
    config_dir: PathBuf,
    backup_dir: PathBuf,
    tracked_entries: Vec<String>,
}

impl SettingsManager {
    /// Open a manager rooted at `config_dir`, creating the backup store
    /// on first use.
    pub fn open(config_dir: impl Into<PathBuf>) -> Result<Self, SettingsError> {
        let config_dir = config_dir.into();
        let backup_dir = config_dir.join("backups");
        fs::create_dir_all(&backup_dir)?;

        Ok(Self {
            config_dir,
            backup_dir,
            tracked_entries: TRACKED_ENTRIES.iter().map(|s| s.to_string()).collect(),
        })
    }

    /// The configuration directory this manager snapshots
    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }

    /// The directory holding all backups
    pub fn backup_dir(&self) -> &Path {
        &self.backup_dir
    }

    /// Entry names this manager tracks, in snapshot order
    pub fn tracked_entries(&self) -> &[String] {
        &self.tracked_entries
    }

    /// Create a backup of the tracked configuration entries.
    ///
    /// Without a name, one is generated from the current timestamp
    /// (`backup_YYYYMMDD_HHMMSS`). A repeated create under the same name
    /// merges into the existing backup directory rather than failing.
    /// Tracked entries absent from the configuration directory are
    /// skipped; the metadata record still lists every tracked name.
    pub fn create_backup(&self, name: Option<&str>) -> Result<PathBuf, SettingsError> {
        let name = match name {
            Some(n) => n.to_string(),
            None => Local::now().format("backup_%Y%m%d_%H%M%S").to_string(),
        };

        let backup_path = self.backup_dir.join(&name);
        fs::create_dir_all(&backup_path)?;

        for item in &self.tracked_entries {
            let src = self.config_dir.join(item);
            if !src.exists() {
                continue;
            }

            let dst = backup_path.join(item);
            if src.is_dir() {
                fsops::copy_dir_merge(&src, &dst)?;
            } else {
                fsops::copy_file_preserving(&src, &dst)?;
            }
        }

        let metadata = BackupMetadata {
            backup_date: Local::now().to_rfc3339(),
            backup_items: self.tracked_entries.clone(),
        };
        let json = serde_json::to_string_pretty(&metadata)?;
        fs::write(backup_path.join(METADATA_FILE), json)?;

        Ok(backup_path)
    }

    /// Restore the tracked entries from the named backup.
    ///
    /// A safety backup is taken under [`PRE_RESTORE_BACKUP_NAME`] first
    /// (overwritten on repeated restores). Entries present in the backup
    /// replace their counterparts in the configuration directory; entries
    /// absent from the backup are left untouched. There is no rollback if
    /// a failure occurs partway through.
    pub fn restore_backup(&self, name: &str) -> Result<(), SettingsError> {
        let backup_path = self.backup_dir.join(name);
        if !backup_path.exists() {
            return Err(SettingsError::BackupNotFound(name.to_string()));
        }

        // Verify backup integrity before touching anything
        read_metadata(&backup_path).map_err(|reason| SettingsError::InvalidBackup {
            name: name.to_string(),
            reason,
        })?;

        self.create_backup(Some(PRE_RESTORE_BACKUP_NAME))?;

        for item in &self.tracked_entries {
            let src = backup_path.join(item);
            if !src.exists() {
                continue;
            }

            let dst = self.config_dir.join(item);
            if src.is_dir() {
                // Removal is best-effort: on failure, anything left behind
                // is overwritten by the merge copy below where possible.
                let _ = fs::remove_dir_all(&dst);
                fsops::copy_dir_merge(&src, &dst)?;
            } else {
                fsops::copy_file_preserving(&src, &dst)?;
            }
        }

        Ok(())
    }

    /// List every valid backup in the store.
    ///
    /// Subdirectories without a parseable metadata record are skipped.
    /// Order follows directory enumeration; callers wanting chronological
    /// order should sort by [`BackupInfo::date`].
    pub fn list_backups(&self) -> Result<Vec<BackupInfo>, SettingsError> {
        let mut backups = Vec::new();

        for entry in fs::read_dir(&self.backup_dir)?.flatten() {
            if !entry.file_type()?.is_dir() {
                continue;
            }

            let metadata = match read_metadata(&entry.path()) {
                Ok(m) => m,
                Err(_) => continue,
            };

            backups.push(BackupInfo {
                name: entry.file_name().to_string_lossy().to_string(),
                date: metadata.backup_date,
                items: metadata.backup_items,
            });
        }

        Ok(backups)
    }

    /// Export the main settings file verbatim to `destination`.
    pub fn export_checked_options(&self, destination: &Path) -> Result<(), SettingsError> {
        let settings_file = self.config_dir.join(MAIN_SETTINGS_FILE);
        if !settings_file.exists() {
            return Err(SettingsError::SettingsFileNotFound(settings_file));
        }

        fs::copy(&settings_file, destination)?;
        Ok(())
    }

    /// Import a settings file over the main settings file.
    ///
    /// When a settings file already exists, a safety backup is taken under
    /// [`PRE_IMPORT_BACKUP_NAME`] (overwritten on repeated imports).
    pub fn import_checked_options(&self, source: &Path) -> Result<(), SettingsError> {
        if !source.exists() {
            return Err(SettingsError::ImportFileNotFound(source.to_path_buf()));
        }

        let settings_file = self.config_dir.join(MAIN_SETTINGS_FILE);
        if settings_file.exists() {
            self.create_backup(Some(PRE_IMPORT_BACKUP_NAME))?;
        }

        fsops::copy_file_preserving(source, &settings_file)?;
        Ok(())
    }
}

/// Read and parse the metadata record of a backup directory, returning a
/// human-readable reason on failure.
fn read_metadata(backup_path: &Path) -> Result<BackupMetadata, String> {
    let metadata_path = backup_path.join(METADATA_FILE);
    if !metadata_path.exists() {
        return Err("missing metadata file".to_string());
    }

    let content = fs::read_to_string(&metadata_path).map_err(|e| e.to_string())?;
    serde_json::from_str(&content).map_err(|e| e.to_string())
}
