//! Update-fetch boundary
//!
//! The backup subsystem has no dependency on updates; this module only
//! defines the seam an update source (website scraper, CI poller, GUI)
//! plugs into. Fetching release pages, downloading installers, and running
//! them live entirely behind [`ReleaseSource`] implementations.

use anyhow::{bail, Result};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// Release channel to resolve an installer for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReleaseChannel {
    /// Published stable release
    Stable,
    /// Published beta release
    Beta,
    /// Latest CI build
    Unstable,
}

impl FromStr for ReleaseChannel {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "stable" => Ok(Self::Stable),
            "beta" => Ok(Self::Beta),
            "unstable" => Ok(Self::Unstable),
            other => bail!("unknown release channel '{}' (expected stable, beta, or unstable)", other),
        }
    }
}

impl fmt::Display for ReleaseChannel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Stable => write!(f, "stable"),
            Self::Beta => write!(f, "beta"),
            Self::Unstable => write!(f, "unstable"),
        }
    }
}

/// Explicit updater configuration, passed into each operation instead of
/// process-wide toggles so callers and tests stay independent.
#[derive(Debug, Clone)]
pub struct UpdaterConfig {
    /// Emit diagnostic detail while resolving
    pub debug: bool,
    /// Where downloaded installers should land
    pub download_dir: PathBuf,
}

impl Default for UpdaterConfig {
    fn default() -> Self {
        Self {
            debug: false,
            download_dir: PathBuf::from("downloads"),
        }
    }
}

/// Something that can resolve an installer URL for a release channel.
///
/// Returns `Ok(None)` when the channel currently has no build available.
pub trait ReleaseSource {
    fn installer_url(&self, channel: ReleaseChannel) -> Result<Option<String>>;
}

/// Resolve the installer URL for `channel`, erroring when the source has
/// no build for it.
pub fn resolve_installer_url(
    source: &dyn ReleaseSource,
    channel: ReleaseChannel,
    config: &UpdaterConfig,
) -> Result<String> {
    if config.debug {
        eprintln!("[debug] resolving {} installer", channel);
    }

    match source.installer_url(channel)? {
        Some(url) => {
            if config.debug {
                eprintln!("[debug] {} -> {}", channel, url);
            }
            Ok(url)
        }
        None => bail!("no {} build available for download", channel),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct StubSource;

    impl ReleaseSource for StubSource {
        fn installer_url(&self, channel: ReleaseChannel) -> Result<Option<String>> {
            Ok(match channel {
                ReleaseChannel::Stable => {
                    Some("https://download.bleachbit.org/BleachBit-4.6.0-setup.exe".to_string())
                }
                ReleaseChannel::Beta => None,
                ReleaseChannel::Unstable => None,
            })
        }
    }

    #[test]
    fn test_channel_from_str() {
        assert_eq!("stable".parse::<ReleaseChannel>().unwrap(), ReleaseChannel::Stable);
        assert_eq!("beta".parse::<ReleaseChannel>().unwrap(), ReleaseChannel::Beta);
        assert_eq!("unstable".parse::<ReleaseChannel>().unwrap(), ReleaseChannel::Unstable);
        assert!("nightly".parse::<ReleaseChannel>().is_err());
    }

    #[test]
    fn test_channel_display_round_trips() {
        for channel in [ReleaseChannel::Stable, ReleaseChannel::Beta, ReleaseChannel::Unstable] {
            assert_eq!(channel.to_string().parse::<ReleaseChannel>().unwrap(), channel);
        }
    }

    #[test]
    fn test_resolve_installer_url() {
        let config = UpdaterConfig::default();
        let url = resolve_installer_url(&StubSource, ReleaseChannel::Stable, &config).unwrap();
        assert!(url.ends_with("-setup.exe"));
    }

    #[test]
    fn test_resolve_missing_build_fails() {
        let config = UpdaterConfig::default();
        let err = resolve_installer_url(&StubSource, ReleaseChannel::Beta, &config).unwrap_err();
        assert!(err.to_string().contains("beta"));
    }
}
