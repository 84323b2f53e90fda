//! CLI argument parsing using clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use super::defaults;

/// runlist-match: auction run list matcher
///
/// Downloads an auction run list, looks up the sale record of every
/// vehicle on it and copies the matched vehicles to the clipboard as a
/// spreadsheet-ready table.
#[derive(Debug, Parser)]
#[command(name = "runlist-match")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Keep only vehicles whose purchaser matches the configured name patterns
    #[arg(long)]
    pub filter: bool,

    /// Print a table to the console instead of copying to the clipboard
    #[arg(long)]
    pub console: bool,
}

/// Subcommands for runlist-match
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Generate a default configuration file
    Init {
        /// Output path for the configuration file
        #[arg(long, short, default_value = defaults::CONFIG_FILE)]
        output: PathBuf,
    },
}

impl Cli {
    /// Parses CLI arguments from the command line.
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Parses CLI arguments from an iterator (useful for testing).
    pub fn parse_from_iter<I, T>(iter: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        Self::parse_from(iter)
    }
}
