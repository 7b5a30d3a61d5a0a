//! Latest release command implementation.

use anyhow::Context;

use crate::cli::{ProjectArgs, RuntimeConfig};
use crate::error::Result;
use crate::firebase::DistributionClient;

/// Execute latest-release command; prints `null` when the app has no releases
pub(super) async fn execute_latest_release(
    common: &ProjectArgs,
    app_id: &str,
    config: &RuntimeConfig,
) -> Result<()> {
    let client = DistributionClient::new(&config.http, common.credential_source()?)?;
    let latest = client.latest_release(&common.project, app_id).await?;

    let json = serde_json::to_string_pretty(&latest)
        .with_context(|| format!("Failed to render latest release of {}", app_id))?;
    println!("{}", json);
    Ok(())
}
