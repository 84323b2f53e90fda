//! Configuration layer for runlist-match.
//!
//! This module provides:
//! - CLI argument parsing ([`Cli`], [`Command`])
//! - TOML configuration file parsing ([`TomlConfig`])
//! - Validated configuration ([`ValidatedConfig`])
//! - Configuration file generation ([`write_default_config`])
//! - Default values ([`defaults`])
//!
//! # Sources
//!
//! Credentials, the auction target, the purchaser patterns and the table
//! layout come only from the TOML file. The CLI only switches behavior:
//!
//! - `--filter` enables purchaser filtering (the patterns are ignored
//!   without it)
//! - `--console` prints the generic grid instead of copying the layout
//!   table to the clipboard
//!
//! The file is `config.toml` in the working directory unless the
//! `RUNLIST_MATCH_CONFIG` environment variable names another path. A
//! leading `~` in that path and in `portal.download_dir` is expanded to
//! the home directory.
//!
//! # Lookup password
//!
//! The lookup service expects the SHA-256 hex digest of the password.
//! `lookup.password` is hashed during validation; `lookup.password_sha256`
//! is used as-is. Setting both is an error.

mod cli;
pub mod defaults;
mod error;
mod toml;
mod validated;

#[cfg(test)]
mod toml_tests;

pub use cli::{Cli, Command};
pub use error::{ConfigError, field};
pub use toml::{TomlConfig, default_config_template};
pub use validated::{
    LookupSettings, PortalSettings, ValidatedConfig, config_path, expand_tilde,
    write_default_config,
};
