//! HTTP-backed detail lookup.

use url::Url;

use crate::credentials::Credentials;
use crate::transport::{HttpClient, HttpRequest};

use super::{DetailLookup, LookupError, LookupOutcome, parse_response};

/// Detail lookup that queries the sale-records service over HTTP.
///
/// # Example
///
/// ```
/// use runlist_match::credentials::Credentials;
/// use runlist_match::lookup::HttpDetailLookup;
/// use runlist_match::transport::ReqwestClient;
/// use url::Url;
///
/// let lookup = HttpDetailLookup::new(
///     ReqwestClient::new(),
///     Url::parse("https://shadowhelper.com/watcher/api.php").unwrap(),
///     Credentials::with_hashed_password("dealer", "secret"),
/// );
/// let url = lookup.vehicle_url("1HGCM82633A004352");
/// assert!(url.as_str().contains("vin=1HGCM82633A004352"));
/// ```
#[derive(Debug)]
pub struct HttpDetailLookup<H> {
    client: H,
    endpoint: Url,
    credentials: Credentials,
}

impl<H> HttpDetailLookup<H> {
    /// Creates a lookup against `endpoint` authenticating with `credentials`.
    ///
    /// The credentials are sent as-is; hash the password beforehand if the
    /// service expects a digest.
    #[must_use]
    pub const fn new(client: H, endpoint: Url, credentials: Credentials) -> Self {
        Self {
            client,
            endpoint,
            credentials,
        }
    }

    /// Returns the configured endpoint.
    #[must_use]
    pub const fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Builds the request URL for `vin`, credentials included.
    #[must_use]
    pub fn vehicle_url(&self, vin: &str) -> Url {
        let mut url = self.endpoint.clone();
        url.query_pairs_mut()
            .append_pair("vin", vin)
            .append_pair("user", self.credentials.username())
            .append_pair("pass", self.credentials.password());
        url
    }
}

/// Returns `url` with the `pass` query parameter masked, for logging.
#[must_use]
pub fn redact_password(url: &Url) -> Url {
    let pairs: Vec<(String, String)> = url
        .query_pairs()
        .map(|(k, v)| {
            let v = if k == "pass" { "***".into() } else { v };
            (k.into_owned(), v.into_owned())
        })
        .collect();

    let mut redacted = url.clone();
    redacted.query_pairs_mut().clear().extend_pairs(pairs);
    redacted
}

impl<H: HttpClient> DetailLookup for HttpDetailLookup<H> {
    async fn lookup(&self, vin: &str) -> Result<LookupOutcome, LookupError> {
        let url = self.vehicle_url(vin);
        tracing::debug!("GET {}", redact_password(&url));

        let response = self
            .client
            .request(HttpRequest::get(url))
            .await
            .map_err(|source| LookupError::Http {
                vin: vin.to_string(),
                source,
            })?;

        parse_response(&response.body)
    }
}
