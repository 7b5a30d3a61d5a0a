//! Local stand-ins for App Distribution, the OAuth token endpoint and a webhook.

#![allow(dead_code)]

use axum::Router;
use axum::extract::{Path, State};
use axum::http::{HeaderMap, StatusCode};
use axum::routing::{get, post};
use firebase_release_notify::HttpConfig;
use serde_json::{Value, json};
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

/// Token every stub endpoint accepts
pub const TEST_TOKEN: &str = "test-token";

#[derive(Clone)]
struct Shared {
    listings: Arc<HashMap<String, (u16, String)>>,
    webhook_status: u16,
    posted: Arc<Mutex<Vec<Value>>>,
    listing_calls: Arc<AtomicUsize>,
}

/// Running stub server
pub struct StubServer {
    pub base_url: String,
    posted: Arc<Mutex<Vec<Value>>>,
    listing_calls: Arc<AtomicUsize>,
}

/// Builder for the canned responses
#[derive(Default)]
pub struct StubBuilder {
    listings: HashMap<String, (u16, String)>,
    webhook_status: Option<u16>,
}

impl StubBuilder {
    /// Serve `releases` for `app_id`
    pub fn releases(mut self, app_id: &str, releases: Value) -> Self {
        let body = json!({ "releases": releases }).to_string();
        self.listings.insert(app_id.to_string(), (200, body));
        self
    }

    /// Serve a raw body with a status for `app_id`
    pub fn raw(mut self, app_id: &str, status: u16, body: &str) -> Self {
        self.listings
            .insert(app_id.to_string(), (status, body.to_string()));
        self
    }

    /// Status the webhook answers with
    pub fn webhook_status(mut self, status: u16) -> Self {
        self.webhook_status = Some(status);
        self
    }

    /// Bind to an ephemeral port and serve in the background
    pub async fn start(self) -> StubServer {
        let shared = Shared {
            listings: Arc::new(self.listings),
            webhook_status: self.webhook_status.unwrap_or(200),
            posted: Arc::new(Mutex::new(Vec::new())),
            listing_calls: Arc::new(AtomicUsize::new(0)),
        };

        let router = Router::new()
            .route("/v1/projects/{project}/apps/{app_id}/releases", get(releases))
            .route("/token", post(token))
            .route("/webhook", post(webhook))
            .with_state(shared.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });

        StubServer {
            base_url: format!("http://{addr}"),
            posted: shared.posted,
            listing_calls: shared.listing_calls,
        }
    }
}

async fn releases(
    State(shared): State<Shared>,
    Path((_project, app_id)): Path<(String, String)>,
    headers: HeaderMap,
) -> (StatusCode, String) {
    shared.listing_calls.fetch_add(1, Ordering::SeqCst);

    let authorized = headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v == format!("Bearer {TEST_TOKEN}"));
    if !authorized {
        return (StatusCode::UNAUTHORIZED, r#"{"error":"unauthenticated"}"#.to_string());
    }

    match shared.listings.get(&app_id) {
        Some((status, body)) => (StatusCode::from_u16(*status).unwrap(), body.clone()),
        None => (StatusCode::NOT_FOUND, r#"{"error":"app not found"}"#.to_string()),
    }
}

async fn token(body: String) -> (StatusCode, String) {
    let form: HashMap<String, String> = url::form_urlencoded::parse(body.as_bytes())
        .into_owned()
        .collect();

    let granted = match form.get("grant_type").map(String::as_str) {
        Some("refresh_token") => form.get("refresh_token").is_some_and(|t| t == "1//refresh"),
        Some(JWT_BEARER_GRANT) => form.get("assertion").is_some_and(|a| assertion_is_valid(a)),
        _ => false,
    };

    if granted {
        let response = json!({
            "access_token": TEST_TOKEN,
            "expires_in": 3599,
            "token_type": "Bearer"
        });
        (StatusCode::OK, response.to_string())
    } else {
        (StatusCode::BAD_REQUEST, r#"{"error":"invalid_grant"}"#.to_string())
    }
}

/// Grant type of a service account assertion exchange
pub const JWT_BEARER_GRANT: &str = "urn:ietf:params:oauth:grant-type:jwt-bearer";

/// Service account email the stub trusts
pub const SERVICE_ACCOUNT_EMAIL: &str = "ci@demo.iam.gserviceaccount.com";

/// Private half of the key the stub verifies assertions with
pub const SERVICE_ACCOUNT_KEY: &str = include_str!("../fixtures/service_account_key.pem");

const SERVICE_ACCOUNT_PUB: &str = include_str!("../fixtures/service_account_pub.pem");

#[derive(serde::Deserialize)]
struct AssertionClaims {
    iss: String,
    scope: String,
}

fn assertion_is_valid(assertion: &str) -> bool {
    let Ok(key) = jsonwebtoken::DecodingKey::from_rsa_pem(SERVICE_ACCOUNT_PUB.as_bytes()) else {
        return false;
    };
    let mut validation = jsonwebtoken::Validation::new(jsonwebtoken::Algorithm::RS256);
    validation.validate_aud = false;

    jsonwebtoken::decode::<AssertionClaims>(assertion, &key, &validation).is_ok_and(|data| {
        data.claims.iss == SERVICE_ACCOUNT_EMAIL
            && data.claims.scope == "https://www.googleapis.com/auth/cloud-platform"
    })
}

/// `service_account` key file contents signed with the fixture key
pub fn service_account_json(token_uri: Option<&str>) -> String {
    let mut key = json!({
        "type": "service_account",
        "project_id": "demo",
        "private_key_id": "key-1",
        "private_key": SERVICE_ACCOUNT_KEY,
        "client_email": SERVICE_ACCOUNT_EMAIL,
    });
    if let Some(uri) = token_uri {
        key["token_uri"] = json!(uri);
    }
    key.to_string()
}

async fn webhook(State(shared): State<Shared>, axum::Json(body): axum::Json<Value>) -> StatusCode {
    shared.posted.lock().unwrap().push(body);
    StatusCode::from_u16(shared.webhook_status).unwrap()
}

impl StubServer {
    /// Start configuring a stub
    pub fn builder() -> StubBuilder {
        StubBuilder::default()
    }

    /// App Distribution REST root
    pub fn endpoint(&self) -> String {
        format!("{}/v1", self.base_url)
    }

    /// Token endpoint URL
    pub fn token_endpoint(&self) -> String {
        format!("{}/token", self.base_url)
    }

    /// Webhook URL
    pub fn webhook(&self) -> String {
        format!("{}/webhook", self.base_url)
    }

    /// HTTP config pointed at this stub
    pub fn http_config(&self) -> HttpConfig {
        HttpConfig::default()
            .with_distribution_endpoint(self.endpoint())
            .with_token_endpoint(self.token_endpoint())
    }

    /// Bodies received by the webhook
    pub fn posted(&self) -> Vec<Value> {
        self.posted.lock().unwrap().clone()
    }

    /// Number of listing requests served
    pub fn listing_calls(&self) -> usize {
        self.listing_calls.load(Ordering::SeqCst)
    }
}

/// Release JSON as the service returns it
pub fn release_json(tag: &str, display: &str, build: &str, notes: Option<&str>) -> Value {
    let mut release = json!({
        "name": format!("projects/123/apps/{tag}/releases/r{build}"),
        "displayVersion": display,
        "buildVersion": build,
        "createTime": "2024-05-01T10:00:00Z",
        "binaryDownloadUri": format!("https://dl.example.com/{tag}/{build}"),
        "testingUri": format!("https://install.example.com/{tag}/{build}"),
        "firebaseConsoleUri": format!("https://console.example.com/{tag}/{build}")
    });
    if let Some(text) = notes {
        release["releaseNotes"] = json!({ "text": text });
    }
    release
}
