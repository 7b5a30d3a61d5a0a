//! Release records as returned by the App Distribution releases listing.

use serde::{Deserialize, Serialize};

/// A single published build of an app.
///
/// All fields are optional: the service omits what it doesn't know, and
/// malformed entries are tolerated rather than rejected.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Release {
    /// Resource name, `projects/{p}/apps/{a}/releases/{id}`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Human-readable version, e.g. `1.2.0`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_version: Option<String>,
    /// Integer build number encoded as a string
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub build_version: Option<String>,
    /// Release notes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub release_notes: Option<ReleaseNotes>,
    /// Direct binary download link
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub binary_download_uri: Option<String>,
    /// Tester install link
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub testing_uri: Option<String>,
    /// Firebase console page for this release
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub firebase_console_uri: Option<String>,
    /// RFC 3339 creation timestamp
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub create_time: Option<String>,
}

/// Release notes attached to a release.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReleaseNotes {
    /// Free-form notes text
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

/// Body of `GET .../releases`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReleaseListing {
    /// Releases in service order, most recent first
    #[serde(default)]
    pub releases: Vec<Release>,
}

impl Release {
    /// Build number parsed as a base-10 integer.
    ///
    /// `None` when `buildVersion` is absent or not a non-negative integer.
    /// Values past `u64::MAX` saturate.
    pub fn build_number(&self) -> Option<u64> {
        self.build_digits()
            .map(|digits| match digits {
                "" => 0,
                _ => digits.parse::<u64>().unwrap_or(u64::MAX),
            })
    }

    /// Decimal digits of the build version without leading zeros.
    ///
    /// Zero is the empty string. Comparing `(len, digits)` pairs orders builds
    /// numerically at any length.
    pub fn build_digits(&self) -> Option<&str> {
        let raw = self.build_version.as_deref()?.trim();
        if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        Some(raw.trim_start_matches('0'))
    }

    /// Display version, treating an empty string as absent.
    pub fn display_version(&self) -> Option<&str> {
        non_empty(self.display_version.as_deref())
    }

    /// Raw build version string, treating an empty string as absent.
    pub fn build_version(&self) -> Option<&str> {
        non_empty(self.build_version.as_deref())
    }

    /// Release notes text, treating an empty string as absent.
    pub fn notes(&self) -> Option<&str> {
        non_empty(
            self.release_notes
                .as_ref()
                .and_then(|notes| notes.text.as_deref()),
        )
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}
