//! Platform-specific configuration and paths

use anyhow::{Context, Result};
use std::path::PathBuf;

/// Get the BleachBit configuration directory
/// - Windows: %APPDATA%/BleachBit/
/// - Linux/macOS: ~/.config/bleachbit/
pub fn bleachbit_config_dir() -> Result<PathBuf> {
    #[cfg(target_os = "windows")]
    {
        let appdata = dirs::config_dir().context("Could not determine AppData directory")?;
        Ok(appdata.join("BleachBit"))
    }

    #[cfg(not(target_os = "windows"))]
    {
        let home = dirs::home_dir().context("Could not determine home directory")?;
        Ok(home.join(".config").join("bleachbit"))
    }
}

/// Get the per-user cleaners directory.
///
/// Prefers `<config dir>/cleaners`; on Unix-like systems, falls back to the
/// legacy `~/.bleachbit/cleaners` location when only that one exists.
pub fn cleaners_dir() -> Result<PathBuf> {
    let primary = bleachbit_config_dir()?.join("cleaners");

    #[cfg(not(target_os = "windows"))]
    {
        if !primary.exists() {
            let home = dirs::home_dir().context("Could not determine home directory")?;
            let legacy = home.join(".bleachbit").join("cleaners");
            if legacy.exists() {
                return Ok(legacy);
            }
        }
    }

    Ok(primary)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths_exist() {
        // These should not panic
        let _ = bleachbit_config_dir();
        let _ = cleaners_dir();
    }

    #[test]
    fn test_cleaners_dir_file_name() {
        let cleaners = cleaners_dir().unwrap();
        assert_eq!(cleaners.file_name().unwrap(), "cleaners");
    }
}
