//! Error types for release lookup and notification delivery.
//!
//! Every failure carries an actionable message; the binary prints recovery
//! suggestions for the kinds a user can fix.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for firebase_release_notify operations
pub type Result<T> = std::result::Result<T, NotifyError>;

/// Main error type for all firebase_release_notify operations
#[derive(Error, Debug)]
pub enum NotifyError {
    /// Missing or malformed user input, reported before any network call
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Credential resolution or token acquisition failure
    #[error("Authentication error: {0}")]
    Auth(#[from] AuthError),

    /// Distribution service returned an error or an unreadable body
    #[error("Upstream error: {0}")]
    Upstream(#[from] UpstreamError),

    /// Webhook POST failed
    #[error("Delivery error: {0}")]
    Delivery(#[from] DeliveryError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic errors from anyhow
    #[error("{0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Neither platform app id was supplied
    #[error("At least one of --android-app-id or --ios-app-id is required")]
    NoAppId,

    /// Missing required argument
    #[error("Missing required argument: {argument}")]
    MissingArgument {
        /// Argument name
        argument: String,
    },

    /// URL could not be parsed or uses an unsupported scheme
    #[error("Invalid {what} URL '{url}': {reason}")]
    InvalidUrl {
        /// Which URL was rejected
        what: String,
        /// The rejected value
        url: String,
        /// Reason for the error
        reason: String,
    },

    /// HTTP client could not be built
    #[error("Failed to build HTTP client: {reason}")]
    HttpClient {
        /// Reason for the error
        reason: String,
    },
}

/// Authentication errors
#[derive(Error, Debug)]
pub enum AuthError {
    /// No access token, key file argument or ambient credential variable
    #[error(
        "No credentials available. Pass --credentials, --access-token or set GOOGLE_APPLICATION_CREDENTIALS"
    )]
    NoCredentials,

    /// Key file could not be read
    #[error("Failed to read credentials file {path}: {source}")]
    ReadKeyFile {
        /// Path to the key file
        path: PathBuf,
        /// Underlying IO error
        #[source]
        source: std::io::Error,
    },

    /// Key file is not valid JSON or lacks required fields
    #[error("Invalid credentials file {path}: {reason}")]
    InvalidKeyFile {
        /// Path to the key file
        path: PathBuf,
        /// Reason for the error
        reason: String,
    },

    /// Key file `type` is neither service_account nor authorized_user
    #[error("Unsupported credential type '{kind}' in {path}")]
    UnsupportedCredentialType {
        /// Value of the `type` field
        kind: String,
        /// Path to the key file
        path: PathBuf,
    },

    /// Signing the service account assertion failed
    #[error("Failed to sign service account assertion: {reason}")]
    Signing {
        /// Reason for the error
        reason: String,
    },

    /// Token endpoint rejected the grant or could not be reached
    #[error("Token request failed: {reason}")]
    TokenRequest {
        /// Reason for the error
        reason: String,
    },
}

/// Distribution service errors
#[derive(Error, Debug)]
pub enum UpstreamError {
    /// Request never produced a response
    #[error("Request to {url} failed: {reason}")]
    Transport {
        /// Requested URL
        url: String,
        /// Reason for the error
        reason: String,
    },

    /// Non-2xx response
    #[error("{url} returned HTTP {status}: {body}")]
    Status {
        /// Requested URL
        url: String,
        /// HTTP status code
        status: u16,
        /// Truncated response body
        body: String,
    },

    /// Response body did not match the release listing shape
    #[error("Malformed release listing from {url}: {reason}")]
    MalformedBody {
        /// Requested URL
        url: String,
        /// Reason for the error
        reason: String,
    },
}

/// Webhook delivery errors
#[derive(Error, Debug)]
pub enum DeliveryError {
    /// POST never produced a response
    #[error("Webhook request failed: {reason}")]
    Transport {
        /// Reason for the error
        reason: String,
    },

    /// Webhook answered with a non-2xx status
    #[error("Webhook returned HTTP {status}: {body}")]
    Status {
        /// HTTP status code
        status: u16,
        /// Truncated response body
        body: String,
    },
}

impl NotifyError {
    /// Get actionable recovery suggestions for this error
    pub fn recovery_suggestions(&self) -> Vec<String> {
        match self {
            NotifyError::Config(ConfigError::NoAppId) => vec![
                "Pass --android-app-id, --ios-app-id, or both".to_string(),
                "App ids look like 1:1234567890:android:0a1b2c3d4e5f".to_string(),
            ],
            NotifyError::Auth(AuthError::NoCredentials) => vec![
                "Export GOOGLE_APPLICATION_CREDENTIALS=/path/to/service-account.json".to_string(),
                "Or pass a short-lived token with --access-token".to_string(),
            ],
            NotifyError::Auth(AuthError::UnsupportedCredentialType { .. }) => vec![
                "Use a service_account or authorized_user key file".to_string(),
            ],
            NotifyError::Upstream(UpstreamError::Status { status: 401 | 403, .. }) => vec![
                "Grant the service account the Firebase App Distribution Admin role".to_string(),
                "Check that --project is the project number, not the project id".to_string(),
            ],
            NotifyError::Upstream(UpstreamError::Status { status: 404, .. }) => vec![
                "Verify the app id belongs to the given project".to_string(),
            ],
            NotifyError::Delivery(DeliveryError::Status { .. }) => vec![
                "Verify the webhook URL is still active".to_string(),
                "Re-run with --dry-run to inspect the payload".to_string(),
            ],
            _ => vec!["Check the error message above for specific details".to_string()],
        }
    }

    /// Process exit code for this error
    pub fn exit_code(&self) -> i32 {
        1
    }
}

/// Truncate a response body for inclusion in an error message.
pub(crate) fn body_excerpt(body: &str) -> String {
    const LIMIT: usize = 512;
    let trimmed = body.trim();
    match trimmed.char_indices().nth(LIMIT) {
        Some((idx, _)) => format!("{}…", &trimmed[..idx]),
        None => trimmed.to_string(),
    }
}
