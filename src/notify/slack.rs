//! Flat key/value payload for Slack workflow webhooks.

use super::data::{Platform, ReleaseData};
use crate::firebase::Release;
use serde::Serialize;

/// Slack workflow variables.
///
/// Every key is always present; missing URLs are empty strings because
/// workflow steps fail on undefined variables.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[allow(missing_docs)]
pub struct SlackPayload {
    pub version_name: String,
    pub version_code: String,
    pub branch: String,
    pub environment: String,
    pub release_note: String,
    pub download_android_url: String,
    pub download_ios_url: String,
    pub install_android_url: String,
    pub install_ios_url: String,
    pub firebase_android_url: String,
    pub firebase_ios_url: String,
    pub commit: String,
    pub build_user: String,
}

fn url_of(data: &ReleaseData, platform: Platform, field: fn(&Release) -> Option<&String>) -> String {
    data.releases
        .get(platform)
        .and_then(field)
        .cloned()
        .unwrap_or_default()
}

fn download(release: &Release) -> Option<&String> {
    release.binary_download_uri.as_ref()
}

fn install(release: &Release) -> Option<&String> {
    release.testing_uri.as_ref()
}

fn console(release: &Release) -> Option<&String> {
    release.firebase_console_uri.as_ref()
}

/// Build the Slack payload.
pub fn build_slack_payload(data: &ReleaseData) -> SlackPayload {
    SlackPayload {
        version_name: data.summary.version_name.clone(),
        version_code: data.summary.version_code.clone(),
        branch: data.branch.clone(),
        environment: data.environment.clone(),
        release_note: data.release_note.clone(),
        download_android_url: url_of(data, Platform::Android, download),
        download_ios_url: url_of(data, Platform::Ios, download),
        install_android_url: url_of(data, Platform::Android, install),
        install_ios_url: url_of(data, Platform::Ios, install),
        firebase_android_url: url_of(data, Platform::Android, console),
        firebase_ios_url: url_of(data, Platform::Ios, console),
        commit: data.commit.clone(),
        build_user: data.build_user.clone(),
    }
}
