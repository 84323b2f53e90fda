//! Run list acquisition from the auction portal.
//!
//! This module provides:
//! - The portal session abstraction ([`PortalSession`]) and its HTTP
//!   implementation ([`HttpPortalSession`])
//! - The export artifact contract ([`export`])
//! - The source that ties them together ([`RunListSource`])
//!
//! # Flow
//!
//! 1. Log in once
//! 2. Request the presale export, which lands at a deterministic path
//! 3. Wait for the artifact (250 ms polls, 10 s limit)
//! 4. Parse it into partial [`VehicleRecord`]s and delete it
//! 5. Close the session, whatever happened in steps 1-4

mod error;
pub mod export;
mod session;

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;

use std::fmt;
use std::path::{Path, PathBuf};

pub use error::RunListError;
pub use session::{HttpPortalSession, LOGIN_TIMEOUT, PortalSession};

use crate::credentials::Credentials;
use crate::time::{Sleeper, TokioSleeper};
use crate::vehicle::VehicleRecord;

use export::{ARTIFACT_TIMEOUT, POLL_INTERVAL, artifact_path, parse_export, wait_for_artifact};

/// The auction and consignor whose run list is wanted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuctionTarget {
    /// Auction identifier; also names the export file
    pub auction: String,
    /// Consignor identifier
    pub consignor: String,
}

impl AuctionTarget {
    #[must_use]
    pub fn new(auction: impl Into<String>, consignor: impl Into<String>) -> Self {
        Self {
            auction: auction.into(),
            consignor: consignor.into(),
        }
    }
}

impl fmt::Display for AuctionTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (consignor {})", self.auction, self.consignor)
    }
}

/// Produces the run list for one auction target.
///
/// Owns the portal session; [`RunListSource::fetch`] consumes the source
/// and always closes the session before returning.
///
/// # Type Parameters
///
/// - `S`: The portal session
/// - `Z`: The sleeper used while polling for the export (defaults to [`TokioSleeper`])
#[derive(Debug)]
pub struct RunListSource<S, Z = TokioSleeper> {
    session: S,
    sleeper: Z,
    target: AuctionTarget,
    download_dir: PathBuf,
}

impl<S> RunListSource<S, TokioSleeper> {
    /// Creates a source that stores the export in `download_dir`.
    #[must_use]
    pub fn new(session: S, target: AuctionTarget, download_dir: impl Into<PathBuf>) -> Self {
        Self {
            session,
            sleeper: TokioSleeper,
            target,
            download_dir: download_dir.into(),
        }
    }
}

impl<S, Z> RunListSource<S, Z> {
    /// Sets a custom sleeper for the artifact poll.
    #[must_use]
    pub fn with_sleeper<Z2>(self, sleeper: Z2) -> RunListSource<S, Z2> {
        RunListSource {
            session: self.session,
            sleeper,
            target: self.target,
            download_dir: self.download_dir,
        }
    }

    /// Returns the auction target.
    #[must_use]
    pub const fn target(&self) -> &AuctionTarget {
        &self.target
    }

    /// Returns where the export artifact will be written.
    #[must_use]
    pub fn artifact_path(&self) -> PathBuf {
        artifact_path(&self.download_dir, &self.target.auction)
    }
}

impl<S: PortalSession, Z: Sleeper> RunListSource<S, Z> {
    /// Logs in, downloads and parses the run list, then closes the session.
    ///
    /// # Errors
    ///
    /// Returns [`RunListError`] if login fails, the export does not appear in
    /// time, or it cannot be parsed. The session is closed in every case.
    pub async fn fetch(self, credentials: &Credentials) -> Result<Vec<VehicleRecord>, RunListError> {
        let path = self.artifact_path();
        let Self {
            session,
            sleeper,
            target,
            ..
        } = self;

        let result = scrape(&session, &sleeper, &target, &path, credentials).await;
        session.close().await;
        result
    }
}

async fn scrape<S: PortalSession, Z: Sleeper>(
    session: &S,
    sleeper: &Z,
    target: &AuctionTarget,
    path: &Path,
    credentials: &Credentials,
) -> Result<Vec<VehicleRecord>, RunListError> {
    session.login(credentials).await?;
    tracing::debug!("Logged into the portal");

    remove_stale_artifact(path).await?;
    session.request_export(target, path).await?;
    wait_for_artifact(path, sleeper, POLL_INTERVAL, ARTIFACT_TIMEOUT).await?;

    let content = tokio::fs::read(path)
        .await
        .map_err(|e| RunListError::io(path, e))?;
    let records = parse_export(content.as_slice())?;

    tokio::fs::remove_file(path)
        .await
        .map_err(|e| RunListError::io(path, e))?;

    Ok(records)
}

/// Deletes an artifact left behind by an earlier failed run, so the poll
/// cannot pick up stale data.
async fn remove_stale_artifact(path: &Path) -> Result<(), RunListError> {
    match tokio::fs::remove_file(path).await {
        Ok(()) => {
            tracing::warn!("Removed stale export {}", path.display());
            Ok(())
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(RunListError::io(path, e)),
    }
}
