//! Tests for `HttpDetailLookup`.

use std::sync::{Arc, Mutex};

use url::Url;

use super::*;
use crate::credentials::Credentials;
use crate::transport::{HttpClient, HttpError, HttpRequest, HttpResponse};

/// Mock HTTP client that replays scripted responses and records requests.
#[derive(Debug)]
struct MockClient {
    responses: Mutex<Vec<Result<HttpResponse, HttpError>>>,
    requests: Mutex<Vec<HttpRequest>>,
}

impl MockClient {
    fn new(responses: Vec<Result<HttpResponse, HttpError>>) -> Self {
        Self {
            responses: Mutex::new(responses),
            requests: Mutex::new(Vec::new()),
        }
    }

    fn captured_requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().unwrap().clone()
    }
}

impl HttpClient for MockClient {
    async fn request(&self, req: HttpRequest) -> Result<HttpResponse, HttpError> {
        self.requests.lock().unwrap().push(req);
        self.responses.lock().unwrap().remove(0)
    }
}

impl HttpClient for Arc<MockClient> {
    async fn request(&self, req: HttpRequest) -> Result<HttpResponse, HttpError> {
        (**self).request(req).await
    }
}

fn endpoint() -> Url {
    Url::parse("https://shadowhelper.com/watcher/api.php").unwrap()
}

fn lookup_with(responses: Vec<Result<HttpResponse, HttpError>>) -> HttpDetailLookup<MockClient> {
    HttpDetailLookup::new(
        MockClient::new(responses),
        endpoint(),
        Credentials::new("dealer", "c0ffee"),
    )
}

fn shared_lookup(
    responses: Vec<Result<HttpResponse, HttpError>>,
) -> (Arc<MockClient>, HttpDetailLookup<Arc<MockClient>>) {
    let client = Arc::new(MockClient::new(responses));
    let lookup = HttpDetailLookup::new(
        Arc::clone(&client),
        endpoint(),
        Credentials::new("dealer", "c0ffee"),
    );
    (client, lookup)
}

mod url_building {
    use super::*;

    #[test]
    fn vehicle_url_embeds_vin_user_and_pass() {
        let lookup = lookup_with(vec![]);
        let url = lookup.vehicle_url("1HGCM82633A004352");

        assert_eq!(
            url.as_str(),
            "https://shadowhelper.com/watcher/api.php?vin=1HGCM82633A004352&user=dealer&pass=c0ffee"
        );
    }

    #[test]
    fn vehicle_url_encodes_reserved_characters() {
        let lookup = HttpDetailLookup::new(
            MockClient::new(vec![]),
            endpoint(),
            Credentials::new("a&b", "p=q"),
        );
        let url = lookup.vehicle_url("VIN");

        assert!(url.as_str().ends_with("user=a%26b&pass=p%3Dq"));
    }

    #[test]
    fn redact_password_masks_only_pass() {
        let lookup = lookup_with(vec![]);
        let redacted = redact_password(&lookup.vehicle_url("VIN"));

        assert!(redacted.as_str().contains("vin=VIN"));
        assert!(redacted.as_str().contains("user=dealer"));
        assert!(!redacted.as_str().contains("c0ffee"));
    }
}

mod lookup_requests {
    use super::*;

    #[tokio::test]
    async fn sends_one_get_per_vin() {
        let (client, lookup) = shared_lookup(vec![Ok(HttpResponse::ok(r#"{"error": "none"}"#))]);

        lookup.lookup("1HGCM82633A004352").await.unwrap();

        let requests = client.captured_requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].method, http::Method::GET);
        assert_eq!(
            requests[0].url.query(),
            Some("vin=1HGCM82633A004352&user=dealer&pass=c0ffee")
        );
    }

    #[tokio::test]
    async fn error_object_is_not_found() {
        let lookup = lookup_with(vec![Ok(HttpResponse::ok(r#"{"error": "none"}"#))]);

        let outcome = lookup.lookup("VIN").await.unwrap();

        assert_eq!(outcome, LookupOutcome::NotFound);
    }

    #[tokio::test]
    async fn http_status_is_ignored_when_body_is_valid() {
        let response = HttpResponse::new(
            http::StatusCode::NOT_FOUND,
            http::HeaderMap::new(),
            br#"{"vehicle_info": {}, "vehicle_sales": {}, "vehicle_seller": {}}"#.to_vec(),
        );
        let lookup = lookup_with(vec![Ok(response)]);

        let outcome = lookup.lookup("VIN").await.unwrap();

        assert!(matches!(outcome, LookupOutcome::Found(_)));
    }

    #[tokio::test]
    async fn transport_error_propagates_with_vin() {
        let lookup = lookup_with(vec![Err(HttpError::Timeout)]);

        let err = lookup.lookup("1HGCM82633A004352").await.unwrap_err();

        assert!(matches!(err, LookupError::Http { ref vin, .. } if vin == "1HGCM82633A004352"));
        assert!(err.to_string().contains("1HGCM82633A004352"));
    }
}
