//! TOML configuration file parsing.
//!
//! Defines the structure of the configuration file with serde.

use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;

use super::ConfigError;

/// Root configuration structure from TOML file.
///
/// Every field is optional here; [`ValidatedConfig`](super::ValidatedConfig)
/// decides what is required.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TomlConfig {
    /// Auction portal section
    #[serde(default)]
    pub portal: PortalSection,

    /// Vehicle detail lookup section
    #[serde(default)]
    pub lookup: LookupSection,

    /// Filter section
    #[serde(default)]
    pub filter: FilterSection,

    /// Output table section
    #[serde(default)]
    pub table: TableSection,
}

/// Auction portal section.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PortalSection {
    /// Login name
    pub username: Option<String>,

    /// Login password
    pub password: Option<String>,

    /// Auction identifier
    pub auction: Option<String>,

    /// Consignor identifier
    pub consignor: Option<String>,

    /// Portal base URL
    pub base_url: Option<String>,

    /// Directory the export is downloaded into
    pub download_dir: Option<String>,
}

/// Vehicle detail lookup section.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LookupSection {
    /// Login name
    pub username: Option<String>,

    /// Plaintext password, hashed before use
    pub password: Option<String>,

    /// SHA-256 hex digest of the password
    pub password_sha256: Option<String>,

    /// Lookup endpoint URL
    pub endpoint: Option<String>,
}

/// Filter section.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FilterSection {
    /// Purchaser name patterns
    #[serde(default)]
    pub purchaser: PurchaserSection,
}

/// Purchaser name patterns, applied with `--filter`.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PurchaserSection {
    /// Regex the first name must match at its start
    pub first_name: Option<String>,

    /// Regex the last name must match at its start
    pub last_name: Option<String>,
}

/// Output table section.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TableSection {
    /// `col<N>` to field name
    #[serde(default)]
    pub layout: BTreeMap<String, String>,
}

impl TomlConfig {
    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;

        Self::parse(&content)
    }

    /// Parses configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is invalid.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(ConfigError::from)
    }
}

/// Generates a default configuration file with comments.
#[must_use]
pub fn default_config_template() -> String {
    r#"# runlist-match configuration file

[portal]
# Auction portal login (required)
username = ""
password = ""

# Auction and consignor whose run list is downloaded (required)
auction = ""
consignor = ""

# Portal base URL (default: https://www.edgepipeline.com)
# base_url = "https://www.edgepipeline.com"

# Where the run list export is downloaded (default: current directory)
# download_dir = "."

[lookup]
# Vehicle detail service login (required)
username = ""

# Plaintext password, hashed with SHA-256 before it is sent
password = ""

# Or the SHA-256 hex digest directly (set only one of the two)
# password_sha256 = ""

# Lookup endpoint (default: https://shadowhelper.com/watcher/api.php)
# endpoint = "https://shadowhelper.com/watcher/api.php"

[filter.purchaser]
# Regexes matched at the start of the purchaser's names.
# Only applied when running with --filter.
# first_name = "^J"
# last_name = "Smith"

[table.layout]
# Clipboard table columns, numbered from 1. Unlisted columns stay empty.
# Fields: run_number, description, vin (last 6), sale_price, seller.
# Any other value is copied into every row as-is.
col1 = "run_number"
col2 = "description"
col3 = "vin"
col4 = "sale_price"
col5 = "seller"
"#
    .to_string()
}
