//! Release data shared by both payload builders.

use crate::firebase::{DistributionClient, Release};
use crate::error::Result;

/// Placeholder for a version nobody reported
pub const NOT_AVAILABLE: &str = "N/A";

/// Mobile platform variant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Platform {
    /// Android
    Android,
    /// iOS
    Ios,
}

impl Platform {
    /// Human-readable label used on buttons
    pub fn label(self) -> &'static str {
        match self {
            Platform::Android => "Android",
            Platform::Ios => "iOS",
        }
    }
}

/// Caller-supplied metadata for one notification run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NotificationContext {
    /// Source branch
    pub branch: String,
    /// Deployment environment
    pub environment: String,
    /// Webhook receiving the payload
    pub webhook: String,
    /// Commit identifier
    pub commit: String,
    /// Who triggered the build
    pub build_user: String,
    /// Comma-separated mention list
    pub mentions: Option<String>,
}

/// At most one selected release per platform
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReleaseSet {
    /// Android release, if requested and found
    pub android: Option<Release>,
    /// iOS release, if requested and found
    pub ios: Option<Release>,
}

impl ReleaseSet {
    /// Release for one platform
    pub fn get(&self, platform: Platform) -> Option<&Release> {
        match platform {
            Platform::Android => self.android.as_ref(),
            Platform::Ios => self.ios.as_ref(),
        }
    }

    /// Fetch the latest release of each requested platform concurrently.
    ///
    /// Waits for both fetches to settle before reporting; an unrequested
    /// platform is an immediate "no release". The Android error wins when
    /// both fail.
    pub async fn fetch_latest(
        client: &DistributionClient,
        project: &str,
        android_app_id: Option<&str>,
        ios_app_id: Option<&str>,
    ) -> Result<Self> {
        let (android, ios) = tokio::join!(
            fetch_optional(client, project, android_app_id),
            fetch_optional(client, project, ios_app_id)
        );

        Ok(Self {
            android: android?,
            ios: ios?,
        })
    }
}

async fn fetch_optional(
    client: &DistributionClient,
    project: &str,
    app_id: Option<&str>,
) -> Result<Option<Release>> {
    match app_id {
        Some(app_id) => client.latest_release(project, app_id).await,
        None => Ok(None),
    }
}

/// Version reported for the run, Android first
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionSummary {
    /// Display version
    pub version_name: String,
    /// Build version
    pub version_code: String,
}

impl VersionSummary {
    /// Prefer Android, then iOS, then [`NOT_AVAILABLE`].
    pub fn from_releases(releases: &ReleaseSet) -> Self {
        let android = releases.android.as_ref();
        let ios = releases.ios.as_ref();

        let version_name = android
            .and_then(Release::display_version)
            .or_else(|| ios.and_then(Release::display_version))
            .unwrap_or(NOT_AVAILABLE);
        let version_code = android
            .and_then(Release::build_version)
            .or_else(|| ios.and_then(Release::build_version))
            .unwrap_or(NOT_AVAILABLE);

        Self {
            version_name: version_name.to_string(),
            version_code: version_code.to_string(),
        }
    }
}

/// Everything a payload builder needs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseData {
    /// Selected releases
    pub releases: ReleaseSet,
    /// Unified version
    pub summary: VersionSummary,
    /// Android notes, else iOS notes, else empty
    pub release_note: String,
    /// Source branch
    pub branch: String,
    /// Deployment environment
    pub environment: String,
    /// Commit identifier
    pub commit: String,
    /// Who triggered the build
    pub build_user: String,
    /// Comma-separated mention list
    pub mentions: Option<String>,
}

/// Combine the selected releases with the run context.
pub fn assemble_release_data(context: &NotificationContext, releases: ReleaseSet) -> ReleaseData {
    let summary = VersionSummary::from_releases(&releases);
    let release_note = releases
        .android
        .as_ref()
        .and_then(Release::notes)
        .or_else(|| releases.ios.as_ref().and_then(Release::notes))
        .unwrap_or_default()
        .to_string();

    ReleaseData {
        releases,
        summary,
        release_note,
        branch: context.branch.clone(),
        environment: context.environment.clone(),
        commit: context.commit.clone(),
        build_user: context.build_user.clone(),
        mentions: context.mentions.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::firebase::ReleaseNotes;

    fn release(display: Option<&str>, build: Option<&str>, notes: Option<&str>) -> Release {
        Release {
            display_version: display.map(str::to_string),
            build_version: build.map(str::to_string),
            release_notes: notes.map(|text| ReleaseNotes {
                text: Some(text.to_string()),
            }),
            ..Default::default()
        }
    }

    fn context() -> NotificationContext {
        NotificationContext {
            branch: "main".to_string(),
            environment: "staging".to_string(),
            webhook: "https://hooks.example.com/x".to_string(),
            commit: "a1b2c3d".to_string(),
            build_user: "ci-bot".to_string(),
            mentions: Some("alice".to_string()),
        }
    }

    #[test]
    fn test_android_only() {
        let releases = ReleaseSet {
            android: Some(release(Some("1.2.0"), Some("42"), None)),
            ios: None,
        };
        let data = assemble_release_data(&context(), releases);
        assert_eq!(data.summary.version_name, "1.2.0");
        assert_eq!(data.summary.version_code, "42");
        assert_eq!(data.release_note, "");
        assert_eq!(data.branch, "main");
        assert_eq!(data.mentions.as_deref(), Some("alice"));
    }

    #[test]
    fn test_android_preferred_over_ios() {
        let releases = ReleaseSet {
            android: Some(release(Some("2.0.0"), Some("200"), Some("android notes"))),
            ios: Some(release(Some("9.9.9"), Some("999"), Some("ios notes"))),
        };
        let data = assemble_release_data(&context(), releases);
        assert_eq!(data.summary.version_name, "2.0.0");
        assert_eq!(data.summary.version_code, "200");
        assert_eq!(data.release_note, "android notes");
    }

    #[test]
    fn test_falls_back_field_by_field() {
        let releases = ReleaseSet {
            android: Some(release(None, Some("7"), Some(""))),
            ios: Some(release(Some("3.1.0"), Some("31"), Some("ios notes"))),
        };
        let data = assemble_release_data(&context(), releases);
        assert_eq!(data.summary.version_name, "3.1.0");
        assert_eq!(data.summary.version_code, "7");
        assert_eq!(data.release_note, "ios notes");
    }

    #[test]
    fn test_nothing_found() {
        let data = assemble_release_data(&context(), ReleaseSet::default());
        assert_eq!(data.summary.version_name, NOT_AVAILABLE);
        assert_eq!(data.summary.version_code, NOT_AVAILABLE);
        assert_eq!(data.release_note, "");
    }

    #[test]
    fn test_release_set_lookup() {
        let releases = ReleaseSet {
            android: None,
            ios: Some(release(Some("1.0"), None, None)),
        };
        assert!(releases.get(Platform::Android).is_none());
        assert!(releases.get(Platform::Ios).is_some());
        assert_eq!(Platform::Ios.label(), "iOS");
    }
}
