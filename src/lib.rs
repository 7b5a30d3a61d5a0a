//! # Firebase Release Notify
//!
//! Release lookup and chat notifications for Firebase App Distribution.
//!
//! This crate reads release listings for an Android and/or iOS app, derives
//! the next build number for automated version bumps, and republishes the
//! latest release as a Slack workflow payload or a Google Chat card.
//!
//! ## Features
//!
//! - **Build numbering**: highest published build + 1, never failing a pipeline
//! - **Concurrent lookup**: both platforms fetched at once and joined
//! - **Two payload formats**: flat Slack variables or a `cardsV2` Chat card
//! - **Google auth**: service account and authorized user key files, or a raw token
//!
//! ## Usage
//!
//! ```bash
//! firebase_release_notify next-version-code --project 123 --app-id 1:123:android:abc
//! firebase_release_notify notify-google-chat --project 123 --ios-app-id 1:123:ios:def ...
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]
#![warn(rust_2018_idioms)]

// Core modules
pub mod cli;
pub mod error;
pub mod firebase;
pub mod notify;

// Re-export main types for public API
pub use cli::{Args, HttpConfig};
pub use error::{AuthError, ConfigError, DeliveryError, NotifyError, Result, UpstreamError};
pub use firebase::{CredentialSource, DistributionClient, Release, Selection};
pub use notify::{
    ChatPayload, NotificationContext, PayloadFormat, ReleaseData, ReleaseSet, SlackPayload,
    VersionSummary,
};
