//! Default values for configuration options.

/// Configuration file looked up in the working directory.
pub const CONFIG_FILE: &str = "config.toml";

/// Environment variable that overrides the configuration file path.
pub const CONFIG_ENV: &str = "RUNLIST_MATCH_CONFIG";

/// Auction portal base URL.
pub const PORTAL_BASE_URL: &str = "https://www.edgepipeline.com";

/// Vehicle detail lookup endpoint.
pub const LOOKUP_ENDPOINT: &str = "https://shadowhelper.com/watcher/api.php";

/// Directory the run list export is downloaded into.
pub const DOWNLOAD_DIR: &str = ".";
