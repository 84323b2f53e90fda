//! Application execution logic.
//!
//! Wires the run list source, the matching engine and the output target
//! together and runs them once, start to finish.

use thiserror::Error;

use runlist_match::config::ValidatedConfig;
use runlist_match::credentials::Credentials;
use runlist_match::lookup::{DetailLookup, HttpDetailLookup, LookupError};
use runlist_match::matching::MatchingEngine;
use runlist_match::output::{OutputError, OutputTarget};
use runlist_match::runlist::{HttpPortalSession, PortalSession, RunListError, RunListSource};
use runlist_match::table::{TableLayout, render_grid};
use runlist_match::time::Sleeper;
use runlist_match::transport::{HttpError, ReqwestClient};
use runlist_match::vehicle::VehicleRecord;

#[cfg(test)]
#[path = "run_tests.rs"]
mod tests;

/// Error type for runtime execution failures.
#[derive(Debug, Error)]
pub enum RunError {
    /// Failed to build the portal HTTP client.
    #[error("Failed to create HTTP client: {0}")]
    Client(#[source] HttpError),

    /// Failed to obtain the run list.
    #[error(transparent)]
    RunList(#[from] RunListError),

    /// A detail lookup failed; no partial results are kept.
    #[error("Vehicle lookup failed: {0}")]
    Lookup(#[from] LookupError),

    /// The table could not be delivered.
    #[error(transparent)]
    Output(#[from] OutputError),
}

/// Runs the whole pipeline once.
///
/// This function:
/// 1. Logs into the portal and downloads the run list
/// 2. Looks up every VIN, one at a time, and merges the matches
/// 3. Renders the matches for the configured output target and delivers them
///
/// # Errors
///
/// Returns an error if any stage fails. Every failure is fatal.
#[cfg(not(tarpaulin_include))]
pub async fn execute(config: ValidatedConfig) -> Result<(), RunError> {
    let ValidatedConfig {
        portal,
        lookup,
        purchaser_filter,
        layout,
        filter_enabled,
        output,
    } = config;

    let portal_client = ReqwestClient::with_cookie_store().map_err(RunError::Client)?;
    let session = HttpPortalSession::new(portal_client, portal.base_url);
    let source = RunListSource::new(session, portal.target, portal.download_dir);

    let detail_lookup =
        HttpDetailLookup::new(ReqwestClient::new(), lookup.endpoint, lookup.credentials);
    tracing::debug!("Looking up sale records at {}", detail_lookup.endpoint());

    let engine = MatchingEngine::new(detail_lookup)
        .with_filter(purchaser_filter)
        .with_filtering(filter_enabled);

    if engine.is_filtering() {
        tracing::info!("Purchaser filtering enabled");
    }

    let matches = collect_matches(source, &portal.credentials, &engine).await?;

    tracing::info!("Sending {} vehicles to the {output}", matches.len());
    output.emit(&render(&matches, output, &layout))?;

    Ok(())
}

/// Fetches the run list and joins it against the detail lookup.
async fn collect_matches<S, Z, L>(
    source: RunListSource<S, Z>,
    credentials: &Credentials,
    engine: &MatchingEngine<L>,
) -> Result<Vec<VehicleRecord>, RunError>
where
    S: PortalSession,
    Z: Sleeper,
    L: DetailLookup,
{
    tracing::info!("Pulling run list for {}", source.target());
    let run_list = source.fetch(credentials).await?;
    tracing::info!(
        "Scraped {} vehicles from the run list, looking up sale records",
        run_list.len()
    );

    let matches = engine.run(run_list).await?;
    tracing::info!("{} vehicles found in the run list", matches.len());

    Ok(matches)
}

/// Renders `records` the way `output` expects them.
fn render(records: &[VehicleRecord], output: OutputTarget, layout: &TableLayout) -> String {
    match output {
        OutputTarget::Clipboard => layout.render(records),
        OutputTarget::Console => render_grid(records),
    }
}
