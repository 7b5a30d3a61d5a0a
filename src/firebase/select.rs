//! Release selection over a fetched listing.

use super::release::Release;

/// Which release a call site wants out of a listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    /// First entry in service order
    Latest,
    /// Entry with the highest build number
    Biggest,
}

impl Selection {
    /// Apply this selection to a listing.
    pub fn select(self, releases: &[Release]) -> Option<&Release> {
        match self {
            Selection::Latest => latest(releases),
            Selection::Biggest => biggest(releases),
        }
    }
}

/// The most recent release, trusting the service's ordering.
pub fn latest(releases: &[Release]) -> Option<&Release> {
    releases.first()
}

/// The release with the highest build number.
///
/// Unparsable or missing build versions count as 0. Only a strictly greater
/// build replaces the running maximum, so ties keep the first occurrence and a
/// listing with nothing above 0 yields `None`. Builds compare by their digits,
/// so no length limit applies.
pub fn biggest(releases: &[Release]) -> Option<&Release> {
    let mut max_build = (0, "");
    let mut biggest = None;

    for release in releases {
        let digits = release.build_digits().unwrap_or("");
        let build = (digits.len(), digits);
        if build > max_build {
            max_build = build;
            biggest = Some(release);
        }
    }

    biggest
}
