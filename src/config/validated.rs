//! Validated configuration after merging CLI and TOML sources.
//!
//! This module contains the final, validated configuration that is used
//! by the application. All validation is performed during construction.

use std::ffi::OsString;
use std::fmt;
use std::path::{Component, Path, PathBuf};

use url::Url;

use crate::credentials::Credentials;
use crate::matching::{NamePattern, PurchaserFilter};
use crate::output::OutputTarget;
use crate::runlist::AuctionTarget;
use crate::table::TableLayout;

use super::cli::Cli;
use super::defaults;
use super::error::{ConfigError, field};
use super::toml::{LookupSection, PortalSection, PurchaserSection, TomlConfig};

/// Everything needed to fetch the run list.
#[derive(Debug, Clone)]
pub struct PortalSettings {
    /// Portal base URL
    pub base_url: Url,

    /// Portal login
    pub credentials: Credentials,

    /// Auction and consignor
    pub target: AuctionTarget,

    /// Directory the export is downloaded into
    pub download_dir: PathBuf,
}

/// Everything needed to query vehicle details.
#[derive(Debug, Clone)]
pub struct LookupSettings {
    /// Lookup endpoint
    pub endpoint: Url,

    /// Lookup login; the password is already the SHA-256 hex digest
    pub credentials: Credentials,
}

/// Fully validated configuration ready for use by the application.
///
/// # Construction
///
/// Use [`ValidatedConfig::from_raw`] to create from CLI args and a parsed
/// TOML config, or [`ValidatedConfig::load`] to locate and read the file.
#[derive(Debug)]
pub struct ValidatedConfig {
    /// Run list source settings
    pub portal: PortalSettings,

    /// Detail lookup settings
    pub lookup: LookupSettings,

    /// Purchaser name patterns
    pub purchaser_filter: PurchaserFilter,

    /// Clipboard table layout
    pub layout: TableLayout,

    /// Whether purchaser filtering is applied (`--filter`)
    pub filter_enabled: bool,

    /// Where the table goes (`--console`)
    pub output: OutputTarget,
}

impl fmt::Display for ValidatedConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Config {{ portal: {} as {}, auction: {}, download_dir: {}, lookup: {} as {}, \
             filtering: {} ({} patterns), layout: {} columns, output: {} }}",
            self.portal.base_url,
            self.portal.credentials,
            self.portal.target,
            self.portal.download_dir.display(),
            self.lookup.endpoint,
            self.lookup.credentials,
            self.filter_enabled,
            self.purchaser_filter.len(),
            self.layout.width(),
            self.output,
        )
    }
}

impl ValidatedConfig {
    /// Creates a validated configuration from CLI arguments and the TOML config.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - A required field is missing or blank
    /// - A URL is invalid
    /// - A purchaser pattern is not a valid regex
    /// - The table layout has a malformed or duplicate key
    /// - Both lookup password forms are set
    pub fn from_raw(cli: &Cli, toml: &TomlConfig) -> Result<Self, ConfigError> {
        let portal = Self::resolve_portal(&toml.portal)?;
        let lookup = Self::resolve_lookup(&toml.lookup)?;
        let purchaser_filter = Self::build_purchaser_filter(&toml.filter.purchaser)?;

        let layout = TableLayout::from_entries(
            toml.table
                .layout
                .iter()
                .map(|(key, value)| (key.as_str(), value.as_str())),
        )?;

        Ok(Self {
            portal,
            lookup,
            purchaser_filter,
            layout,
            filter_enabled: cli.filter,
            output: OutputTarget::from_console_flag(cli.console),
        })
    }

    /// Locates, reads and validates the configuration file.
    ///
    /// The path comes from [`config_path`] with the process environment.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The config file cannot be read or parsed
    /// - The configuration is invalid
    pub fn load(cli: &Cli) -> Result<Self, ConfigError> {
        Self::load_from(cli, &config_path(std::env::var_os(defaults::CONFIG_ENV)))
    }

    /// Reads and validates the configuration file at `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, or if the
    /// configuration is invalid.
    pub fn load_from(cli: &Cli, path: &Path) -> Result<Self, ConfigError> {
        tracing::debug!("Loading configuration from {}", path.display());

        let toml = TomlConfig::load(path)?;
        Self::from_raw(cli, &toml)
    }

    fn resolve_portal(portal: &PortalSection) -> Result<PortalSettings, ConfigError> {
        let username = required(
            portal.username.as_deref(),
            field::PORTAL_USERNAME,
            "Set portal.username in config file",
        )?;
        let password = required(
            portal.password.as_deref(),
            field::PORTAL_PASSWORD,
            "Set portal.password in config file",
        )?;
        let auction = required(
            portal.auction.as_deref(),
            field::PORTAL_AUCTION,
            "Set portal.auction in config file",
        )?;
        let consignor = required(
            portal.consignor.as_deref(),
            field::PORTAL_CONSIGNOR,
            "Set portal.consignor in config file",
        )?;

        let base_url = parse_url(
            field::PORTAL_BASE_URL,
            portal.base_url.as_deref().unwrap_or(defaults::PORTAL_BASE_URL),
        )?;

        let download_dir = expand_tilde(Path::new(
            portal
                .download_dir
                .as_deref()
                .unwrap_or(defaults::DOWNLOAD_DIR),
        ));

        Ok(PortalSettings {
            base_url,
            credentials: Credentials::new(username, password),
            target: AuctionTarget::new(auction, consignor),
            download_dir,
        })
    }

    fn resolve_lookup(lookup: &LookupSection) -> Result<LookupSettings, ConfigError> {
        let username = required(
            lookup.username.as_deref(),
            field::LOOKUP_USERNAME,
            "Set lookup.username in config file",
        )?;

        let plaintext = non_blank(lookup.password.as_deref());
        let hashed = non_blank(lookup.password_sha256.as_deref());
        let credentials = match (plaintext, hashed) {
            (Some(_), Some(_)) => return Err(ConfigError::ConflictingPassword),
            (Some(password), None) => Credentials::with_hashed_password(username, password),
            (None, Some(digest)) => Credentials::new(username, digest.trim().to_ascii_lowercase()),
            (None, None) => {
                return Err(ConfigError::missing(
                    field::LOOKUP_PASSWORD,
                    "Set lookup.password or lookup.password_sha256 in config file",
                ));
            }
        };

        let endpoint = parse_url(
            field::LOOKUP_ENDPOINT,
            lookup.endpoint.as_deref().unwrap_or(defaults::LOOKUP_ENDPOINT),
        )?;

        Ok(LookupSettings {
            endpoint,
            credentials,
        })
    }

    fn build_purchaser_filter(
        purchaser: &PurchaserSection,
    ) -> Result<PurchaserFilter, ConfigError> {
        let mut filter = PurchaserFilter::new();

        if let Some(pattern) = non_blank(purchaser.first_name.as_deref()) {
            filter = filter.with_first_name(compile(field::PURCHASER_FIRST_NAME, pattern)?);
        }

        if let Some(pattern) = non_blank(purchaser.last_name.as_deref()) {
            filter = filter.with_last_name(compile(field::PURCHASER_LAST_NAME, pattern)?);
        }

        Ok(filter)
    }
}

/// Resolves the configuration file path.
///
/// `env_override` is the value of `RUNLIST_MATCH_CONFIG`, if set. A leading
/// `~` is expanded.
#[must_use]
pub fn config_path(env_override: Option<OsString>) -> PathBuf {
    let path = env_override
        .filter(|value| !value.is_empty())
        .map_or_else(|| PathBuf::from(defaults::CONFIG_FILE), PathBuf::from);
    expand_tilde(&path)
}

/// Replaces a leading `~` component with the home directory.
///
/// Paths without one, or with no known home directory, are returned unchanged.
#[must_use]
pub fn expand_tilde(path: &Path) -> PathBuf {
    let mut components = path.components();
    match components.next() {
        Some(Component::Normal(first)) if first == "~" => {
            let Some(home) = dirs::home_dir() else {
                return path.to_path_buf();
            };
            let rest = components.as_path();
            if rest.as_os_str().is_empty() {
                home
            } else {
                home.join(rest)
            }
        }
        _ => path.to_path_buf(),
    }
}

/// Writes the default configuration template to a file.
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn write_default_config(path: &Path) -> Result<(), ConfigError> {
    let template = super::toml::default_config_template();
    std::fs::write(path, template).map_err(|e| ConfigError::FileWrite {
        path: path.to_path_buf(),
        source: e,
    })
}

// Helper functions

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

fn required<'a>(
    value: Option<&'a str>,
    field: &'static str,
    hint: &'static str,
) -> Result<&'a str, ConfigError> {
    non_blank(value).ok_or_else(|| ConfigError::missing(field, hint))
}

fn parse_url(field: &'static str, url: &str) -> Result<Url, ConfigError> {
    Url::parse(url).map_err(|e| ConfigError::InvalidUrl {
        field,
        url: url.to_string(),
        reason: e.to_string(),
    })
}

fn compile(field: &'static str, pattern: &str) -> Result<NamePattern, ConfigError> {
    NamePattern::new(pattern).map_err(|e| ConfigError::InvalidRegex {
        field,
        pattern: pattern.to_string(),
        source: e,
    })
}
