//! Next build number derivation for automated version bumps.
//!
//! Failures never propagate out of this module: a CI build-numbering step
//! must get a number even when the distribution service is unreachable, so
//! every error collapses to the configured initial version.

use super::client::DistributionClient;
use super::release::Release;

/// Initial version code when no release exists
pub const DEFAULT_INITIAL_VERSION: u64 = 1;

/// Build number following `biggest`, or `initial_version` if there is none.
pub fn next_from_biggest(biggest: Option<&Release>, initial_version: u64) -> u64 {
    biggest
        .and_then(Release::build_number)
        .map(|build| build.saturating_add(1))
        .unwrap_or(initial_version)
}

/// Derive the next version code for an app.
///
/// Any fetch, auth or parse failure is logged and masked behind
/// `initial_version`.
pub async fn next_version_code(
    client: &DistributionClient,
    project: &str,
    app_id: &str,
    initial_version: u64,
) -> u64 {
    match client.biggest_release(project, app_id).await {
        Ok(biggest) => next_from_biggest(biggest.as_ref(), initial_version),
        Err(e) => {
            log::warn!(
                "Falling back to initial version {} for {}: {}",
                initial_version,
                app_id,
                e
            );
            initial_version
        }
    }
}
