//! CLI commands

pub mod backup;
pub mod deploy;
pub mod export;
pub mod import;
pub mod list;
pub mod restore;
pub mod utils;
