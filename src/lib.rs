//! bleachbit-helper library
//!
//! Core functionality for managing BleachBit configuration: settings
//! backups, cleaner deployment, and the update-source boundary.
//!
//! # Disclaimer
//!
//! This tool is not affiliated with or endorsed by the BleachBit project.
//! It manages locally stored configuration files on your machine for
//! personal use, backup, and data portability.

pub mod bleachbit;
pub mod config;
