//! Portal session handling.

use std::future::Future;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;
use std::time::Duration;

use scraper::{Html, Selector};
use url::Url;

use crate::credentials::Credentials;
use crate::transport::{HttpClient, HttpRequest};

use super::{AuctionTarget, RunListError};

/// Upper bound on the whole login exchange.
pub const LOGIN_TIMEOUT: Duration = Duration::from_secs(5);

/// Title fragment of the page the portal shows after a successful login.
const DASHBOARD_TITLE: &str = "Dashboard";

static USERNAME_FIELD: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("#username").expect("static selector is valid"));

static PAGE_TITLE: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("title").expect("static selector is valid"));

/// An authenticated conversation with the auction portal.
///
/// A session is owned by the run list source for the duration of the
/// scraping phase and released with [`PortalSession::close`] afterwards.
pub trait PortalSession: Send + Sync {
    /// Submits `credentials` once.
    ///
    /// # Errors
    ///
    /// Returns [`RunListError::Authentication`] if the portal does not show
    /// its dashboard afterwards.
    fn login(
        &self,
        credentials: &Credentials,
    ) -> impl Future<Output = Result<(), RunListError>> + Send;

    /// Requests the presale export for `target` and stores it at `destination`.
    ///
    /// The file must appear at `destination` complete or not at all.
    ///
    /// # Errors
    ///
    /// Returns an error if the export cannot be requested or written.
    fn request_export(
        &self,
        target: &AuctionTarget,
        destination: &Path,
    ) -> impl Future<Output = Result<(), RunListError>> + Send;

    /// Ends the session.
    fn close(self) -> impl Future<Output = ()> + Send;
}

/// Portal session over HTTP.
///
/// Relies on the client to keep the session cookie between requests; use
/// [`ReqwestClient::with_cookie_store`](crate::transport::ReqwestClient::with_cookie_store).
#[derive(Debug)]
pub struct HttpPortalSession<H> {
    client: H,
    base_url: Url,
    login_timeout: Duration,
}

impl<H> HttpPortalSession<H> {
    /// Creates a session against the portal at `base_url`.
    #[must_use]
    pub const fn new(client: H, base_url: Url) -> Self {
        Self {
            client,
            base_url,
            login_timeout: LOGIN_TIMEOUT,
        }
    }

    /// Overrides the login wait.
    #[must_use]
    pub const fn with_login_timeout(mut self, timeout: Duration) -> Self {
        self.login_timeout = timeout;
        self
    }

    /// Returns the portal base URL.
    #[must_use]
    pub const fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// URL of the login form.
    ///
    /// # Errors
    ///
    /// Returns [`RunListError::InvalidBaseUrl`] if the base URL cannot carry a path.
    pub fn login_url(&self) -> Result<Url, RunListError> {
        self.portal_url(&["components", "login"])
    }

    /// URL of the presale CSV export for `target`.
    ///
    /// # Errors
    ///
    /// Returns [`RunListError::InvalidBaseUrl`] if the base URL cannot carry a path.
    pub fn export_url(&self, target: &AuctionTarget) -> Result<Url, RunListError> {
        let mut url = self.portal_url(&[
            "components",
            "report",
            "presale",
            "csv",
            target.auction.as_str(),
        ])?;
        url.query_pairs_mut()
            .append_pair("consignor", &target.consignor);
        Ok(url)
    }

    fn portal_url(&self, segments: &[&str]) -> Result<Url, RunListError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| RunListError::InvalidBaseUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }
}

impl<H: HttpClient> HttpPortalSession<H> {
    async fn submit_login(&self, credentials: &Credentials) -> Result<(), RunListError> {
        let url = self.login_url()?;

        let form_page = self.client.request(HttpRequest::get(url.clone())).await?;
        let has_form = form_page.body_text().is_some_and(has_login_form);
        if !has_form {
            return Err(RunListError::Authentication(
                "login form not found".to_string(),
            ));
        }

        let request = HttpRequest::form(
            url,
            [
                ("username", credentials.username()),
                ("password", credentials.password()),
                ("button_action", "login"),
            ],
        );
        let landing = self.client.request(request).await?;

        let title = landing.body_text().and_then(page_title).unwrap_or_default();

        if title.contains(DASHBOARD_TITLE) {
            Ok(())
        } else {
            Err(RunListError::Authentication(format!(
                "landed on '{title}' instead of the dashboard"
            )))
        }
    }
}

impl<H: HttpClient> PortalSession for HttpPortalSession<H> {
    async fn login(&self, credentials: &Credentials) -> Result<(), RunListError> {
        tracing::debug!("Logging into {} as {}", self.base_url, credentials.username());

        tokio::time::timeout(self.login_timeout, self.submit_login(credentials))
            .await
            .map_err(|_| {
                RunListError::Authentication(format!(
                    "no response within {}s",
                    self.login_timeout.as_secs()
                ))
            })?
    }

    async fn request_export(
        &self,
        target: &AuctionTarget,
        destination: &Path,
    ) -> Result<(), RunListError> {
        let url = self.export_url(target)?;
        tracing::debug!("GET {url}");

        let response = self.client.request(HttpRequest::get(url)).await?;
        if !response.is_success() {
            return Err(RunListError::ExportStatus {
                status: response.status,
            });
        }

        write_atomically(destination, &response.body).await
    }

    async fn close(self) {
        tracing::debug!("Closing portal session");
    }
}

/// Returns true if the page has an element with id `username`.
pub(super) fn has_login_form(html: &str) -> bool {
    Html::parse_document(html)
        .select(&USERNAME_FIELD)
        .next()
        .is_some()
}

/// Returns the trimmed text of the first `<title>` element.
pub(super) fn page_title(html: &str) -> Option<String> {
    Html::parse_document(html)
        .select(&PAGE_TITLE)
        .next()
        .map(|title| title.text().collect::<String>().trim().to_string())
}

/// Writes `content` to `path` through a sibling `.part` file and a rename.
async fn write_atomically(path: &Path, content: &[u8]) -> Result<(), RunListError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| RunListError::io(parent, e))?;
        }
    }

    // Append rather than replace the extension: export.csv -> export.csv.part
    let temp_path = PathBuf::from(format!("{}.part", path.display()));

    tokio::fs::write(&temp_path, content)
        .await
        .map_err(|e| RunListError::io(&temp_path, e))?;
    tokio::fs::rename(&temp_path, path)
        .await
        .map_err(|e| RunListError::io(path, e))
}
