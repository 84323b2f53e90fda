//! Error types for detail lookups.

use thiserror::Error;

use crate::transport::HttpError;

/// Error type for a single VIN lookup.
///
/// Any of these aborts the matching pass; only an `error` object in the
/// response is treated as a normal "not found" outcome.
#[derive(Debug, Error)]
pub enum LookupError {
    /// The request could not be completed.
    #[error("Lookup request for VIN {vin} failed: {source}")]
    Http {
        /// VIN being looked up
        vin: String,
        /// Underlying transport error
        #[source]
        source: HttpError,
    },

    /// The response body was not a JSON object.
    #[error("Lookup response is not a JSON object: {0}")]
    InvalidJson(#[source] serde_json::Error),

    /// The response was JSON but did not have the expected shape.
    #[error("Lookup response has unexpected shape: {0}")]
    MalformedResponse(#[source] serde_json::Error),
}
