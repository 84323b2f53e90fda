//! Per-VIN detail lookup against the sale-records service.
//!
//! This module provides:
//! - The lookup abstraction the matching stage depends on ([`DetailLookup`])
//! - The typed lookup result ([`LookupOutcome`], [`DetailRecord`])
//! - The HTTP implementation ([`HttpDetailLookup`])
//!
//! # Wire contract
//!
//! One GET per VIN with `vin`, `user` and `pass` query parameters. A JSON
//! object carrying an `error` key means the VIN is unknown; anything else
//! must have the shape of [`DetailRecord`].
//!
//! The service expects the password in the query string. That leaks it to
//! proxies and server logs, but it is the only scheme the backend accepts.

mod client;
mod detail;
mod error;

#[cfg(test)]
mod client_tests;
#[cfg(test)]
mod detail_tests;

use std::future::Future;

pub use client::{HttpDetailLookup, redact_password};
pub use detail::{DetailRecord, Party, SaleInfo, VehicleInfo, parse_response};
pub use error::LookupError;

/// Result of looking up one VIN.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupOutcome {
    /// The service knows the VIN.
    Found(DetailRecord),
    /// The service answered with an `error` object.
    NotFound,
}

impl LookupOutcome {
    /// Returns the detail record, or `None` for [`LookupOutcome::NotFound`].
    #[must_use]
    pub fn into_found(self) -> Option<DetailRecord> {
        match self {
            Self::Found(detail) => Some(detail),
            Self::NotFound => None,
        }
    }
}

/// Source of detail records keyed by VIN.
///
/// Implementations perform exactly one request per call and do not retry.
pub trait DetailLookup: Send + Sync {
    /// Looks up a single VIN.
    ///
    /// # Errors
    ///
    /// Returns [`LookupError`] if the request fails or the response is malformed.
    /// An unknown VIN is not an error; it yields [`LookupOutcome::NotFound`].
    fn lookup(&self, vin: &str) -> impl Future<Output = Result<LookupOutcome, LookupError>> + Send;
}
