//! Error types for configuration parsing and validation.

use std::path::PathBuf;

use thiserror::Error;

use crate::table::LayoutError;

/// Error type for configuration operations.
///
/// Covers errors from parsing, validation, and file operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read the configuration file.
    #[error("Failed to read config file '{}': {source}", path.display())]
    FileRead {
        /// Path to the config file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse the TOML configuration.
    #[error("Failed to parse TOML config: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// Failed to write configuration file (for init command).
    #[error("Failed to write config file '{}': {source}", path.display())]
    FileWrite {
        /// Path to the config file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Missing required field that must be provided by the config file.
    #[error("Missing required field: {field}. {hint}")]
    MissingRequired {
        /// Name of the missing field
        field: &'static str,
        /// Hint for how to provide the value
        hint: &'static str,
    },

    /// Both the plaintext and the pre-hashed lookup password are set.
    #[error("Set only one of lookup.password and lookup.password_sha256")]
    ConflictingPassword,

    /// Invalid URL provided.
    #[error("Invalid URL for {field} '{url}': {reason}")]
    InvalidUrl {
        /// Name of the field
        field: &'static str,
        /// The invalid URL string
        url: String,
        /// Reason for invalidity
        reason: String,
    },

    /// Invalid regex pattern for purchaser filtering.
    #[error("Invalid regex pattern for {field} '{pattern}': {source}")]
    InvalidRegex {
        /// Name of the field
        field: &'static str,
        /// The invalid pattern
        pattern: String,
        /// Underlying regex error
        #[source]
        source: regex::Error,
    },

    /// Invalid `[table.layout]` section.
    #[error("Invalid table layout: {0}")]
    InvalidLayout(#[from] LayoutError),
}

/// Well-known field names for configuration errors.
///
/// Use these constants for compile-time safety when matching field names.
pub mod field {
    /// Portal login name.
    pub const PORTAL_USERNAME: &str = "portal.username";
    /// Portal password.
    pub const PORTAL_PASSWORD: &str = "portal.password";
    /// Auction identifier.
    pub const PORTAL_AUCTION: &str = "portal.auction";
    /// Consignor identifier.
    pub const PORTAL_CONSIGNOR: &str = "portal.consignor";
    /// Portal base URL.
    pub const PORTAL_BASE_URL: &str = "portal.base_url";
    /// Lookup login name.
    pub const LOOKUP_USERNAME: &str = "lookup.username";
    /// Lookup password (either form).
    pub const LOOKUP_PASSWORD: &str = "lookup.password";
    /// Lookup endpoint.
    pub const LOOKUP_ENDPOINT: &str = "lookup.endpoint";
    /// Purchaser first-name pattern.
    pub const PURCHASER_FIRST_NAME: &str = "filter.purchaser.first_name";
    /// Purchaser last-name pattern.
    pub const PURCHASER_LAST_NAME: &str = "filter.purchaser.last_name";
}

impl ConfigError {
    /// Creates a `MissingRequired` error for a required field.
    #[must_use]
    pub const fn missing(field: &'static str, hint: &'static str) -> Self {
        Self::MissingRequired { field, hint }
    }
}
