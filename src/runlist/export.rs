//! The run list export artifact: naming, waiting and parsing.
//!
//! Column positions and poll timing are part of the portal's export
//! contract and must not be tuned.

use std::io::Read;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::time::Sleeper;
use crate::vehicle::VehicleRecord;

use super::RunListError;

/// Interval between checks for the artifact.
pub const POLL_INTERVAL: Duration = Duration::from_millis(250);

/// How long to wait for the artifact before giving up.
pub const ARTIFACT_TIMEOUT: Duration = Duration::from_millis(10_000);

/// Column holding the run number (0-based).
pub const RUN_NUMBER_COLUMN: usize = 1;

/// Column holding the VIN (0-based).
pub const VIN_COLUMN: usize = 14;

/// File name the portal gives the export for `auction`.
#[must_use]
pub fn artifact_name(auction: &str) -> String {
    format!("edgepipeline_presale_{auction}.csv")
}

/// Full artifact path for `auction` inside `download_dir`.
#[must_use]
pub fn artifact_path(download_dir: &Path, auction: &str) -> PathBuf {
    download_dir.join(artifact_name(auction))
}

/// Waits until `path` exists, checking every `poll_interval`.
///
/// Elapsed time is counted in poll intervals, so the wait gives up after
/// the first check past `timeout`.
///
/// # Errors
///
/// Returns [`RunListError::ArtifactTimeout`] if the file does not appear,
/// or [`RunListError::Io`] if its existence cannot be checked.
pub async fn wait_for_artifact<S: Sleeper>(
    path: &Path,
    sleeper: &S,
    poll_interval: Duration,
    timeout: Duration,
) -> Result<(), RunListError> {
    let mut waited = Duration::ZERO;

    loop {
        let exists = tokio::fs::try_exists(path)
            .await
            .map_err(|e| RunListError::io(path, e))?;
        if exists {
            tracing::debug!("Export appeared after {}ms", waited.as_millis());
            return Ok(());
        }
        if waited > timeout {
            return Err(RunListError::ArtifactTimeout {
                path: path.to_path_buf(),
                timeout,
            });
        }

        sleeper.sleep(poll_interval).await;
        waited += poll_interval;
    }
}

/// Parses the export into partial records, one per data row.
///
/// The first row is a header and is skipped. Rows may have any number of
/// columns as long as the run number and VIN columns are present. Invalid
/// UTF-8 in the two used columns is replaced, elsewhere it is ignored.
///
/// # Errors
///
/// Returns [`RunListError::Csv`] for malformed CSV and
/// [`RunListError::MissingColumn`] for a row that is too short.
pub fn parse_export<R: Read>(reader: R) -> Result<Vec<VehicleRecord>, RunListError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    // Free-text columns may not be UTF-8; only the two used cells are decoded.
    let mut records = Vec::new();
    for (i, row) in reader.byte_records().enumerate() {
        let row = row?;
        let cell = |column: usize| {
            row.get(column)
                .map(String::from_utf8_lossy)
                .ok_or(RunListError::MissingColumn { row: i + 1, column })
        };
        records.push(VehicleRecord::from_run_list(
            cell(RUN_NUMBER_COLUMN)?,
            cell(VIN_COLUMN)?,
        ));
    }

    Ok(records)
}
