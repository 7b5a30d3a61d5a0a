//! Firebase App Distribution integration

mod auth;
mod client;
mod release;
mod select;
mod version_code;

pub use auth::{
    AMBIENT_CREDENTIALS_VAR, AuthorizedUserKey, CLOUD_PLATFORM_SCOPE, CredentialSource, KeyFile,
    ServiceAccountKey, TokenProvider, sign_assertion,
};
pub use client::DistributionClient;
pub use release::{Release, ReleaseListing, ReleaseNotes};
pub use select::{Selection, biggest, latest};
pub use version_code::{DEFAULT_INITIAL_VERSION, next_from_biggest, next_version_code};
