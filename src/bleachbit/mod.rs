//! Core BleachBit configuration operations

pub mod cleaners;
pub mod fsops;
pub mod settings;
pub mod updater;

// Re-exports for library consumers
#[allow(unused_imports)]
pub use settings::{SettingsError, SettingsManager};
