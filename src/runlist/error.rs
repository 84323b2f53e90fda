//! Error types for run list acquisition.

use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

use crate::transport::HttpError;

/// Error type for run list acquisition.
///
/// Every variant is fatal to the run.
#[derive(Debug, Error)]
pub enum RunListError {
    /// The portal did not accept the login within the bounded wait.
    #[error("Unable to log into the portal: {0}")]
    Authentication(String),

    /// The portal base URL cannot carry a path.
    #[error("Invalid portal URL '{0}'")]
    InvalidBaseUrl(String),

    /// A portal request could not be completed.
    #[error("Portal request failed: {0}")]
    Http(#[from] HttpError),

    /// The export request was answered with a non-success status.
    #[error("Run list export request returned {status}")]
    ExportStatus {
        /// Status returned by the portal
        status: http::StatusCode,
    },

    /// The export artifact never appeared.
    #[error(
        "Run list export did not appear at '{}' within {}ms",
        path.display(),
        timeout.as_millis()
    )]
    ArtifactTimeout {
        /// Expected artifact path
        path: PathBuf,
        /// How long we waited
        timeout: Duration,
    },

    /// Reading, writing or deleting the artifact failed.
    #[error("Failed to access '{}': {source}", path.display())]
    Io {
        /// Path being accessed
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The artifact is not valid CSV.
    #[error("Failed to parse run list export: {0}")]
    Csv(#[from] csv::Error),

    /// A data row is too short for the fixed column contract.
    #[error("Run list row {row} has no column {column}")]
    MissingColumn {
        /// 1-based data row, header excluded
        row: usize,
        /// 0-based column index
        column: usize,
    },
}

impl RunListError {
    pub(crate) fn io(path: &std::path::Path, source: std::io::Error) -> Self {
        Self::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}
