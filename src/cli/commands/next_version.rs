//! Next version code command implementation.
//!
//! Prints exactly one integer on stdout. Lookup failures are logged and
//! replaced by the initial version; the exit code is always 0.

use crate::cli::{ProjectArgs, RuntimeConfig};
use crate::firebase::{DistributionClient, next_version_code};

/// Execute next-version-code command
pub(super) async fn execute_next_version_code(
    common: &ProjectArgs,
    app_id: &str,
    initial_version: u64,
    config: &RuntimeConfig,
) {
    let client = common
        .credential_source()
        .and_then(|credentials| DistributionClient::new(&config.http, credentials));

    let version_code = match client {
        Ok(client) => next_version_code(&client, &common.project, app_id, initial_version).await,
        Err(e) => {
            log::warn!(
                "Falling back to initial version {}: {}",
                initial_version,
                e
            );
            initial_version
        }
    };

    println!("{}", version_code);
}
