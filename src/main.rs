//! bleachbit-helper: CLI for managing BleachBit settings and cleaners
//!
//! This tool is not affiliated with or endorsed by the BleachBit project.
//! It manages locally stored configuration on your machine for personal use.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod bleachbit;
mod commands;
mod config;

#[derive(Parser)]
#[command(name = "bleachbit-helper")]
#[command(about = "CLI helper for BleachBit settings backups and cleaners", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a backup of BleachBit settings
    Backup {
        /// Backup name (generated from the current timestamp if omitted)
        name: Option<String>,
    },

    /// Restore BleachBit settings from a named backup
    Restore {
        /// Name of the backup to restore
        name: String,
    },

    /// List all backups in the backup store
    List,

    /// Export the main settings file (bleachbit.ini)
    Export {
        /// Destination file
        destination: PathBuf,
    },

    /// Import a settings file over bleachbit.ini
    Import {
        /// Settings file to import
        source: PathBuf,
    },

    /// Deploy custom .xml cleaner files into the user profile
    DeployCleaners {
        /// Directory containing the cleaner files
        #[arg(default_value = "cleaners")]
        source_dir: PathBuf,

        /// Deploy into this directory instead of the default location
        #[arg(long)]
        target: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Backup { name } => {
            commands::backup::execute(name.as_deref())?;
        }

        Commands::Restore { name } => {
            commands::restore::execute(&name)?;
        }

        Commands::List => {
            let output = commands::list::execute()?;
            println!("{}", output);
        }

        Commands::Export { destination } => {
            commands::export::execute(&destination)?;
        }

        Commands::Import { source } => {
            commands::import::execute(&source)?;
        }

        Commands::DeployCleaners { source_dir, target } => {
            commands::deploy::execute(&source_dir, target.as_deref())?;
        }
    }

    Ok(())
}
