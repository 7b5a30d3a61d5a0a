//! Notification command implementation.
//!
//! Fetch both platforms, assemble, build the chosen payload, then POST it.
//! Nothing is sent unless every step before delivery succeeded.

use anyhow::Context;

use crate::cli::{NotifyArgs, RuntimeConfig};
use crate::error::Result;
use crate::firebase::DistributionClient;
use crate::notify::{PayloadFormat, ReleaseSet, assemble_release_data, deliver};

/// Execute notify-slack / notify-google-chat
pub(super) async fn execute_notify(
    args: &NotifyArgs,
    format: PayloadFormat,
    config: &RuntimeConfig,
) -> Result<()> {
    let context = args.context();
    let client = DistributionClient::new(&config.http, args.common.credential_source()?)?;

    let releases = ReleaseSet::fetch_latest(
        &client,
        &args.common.project,
        args.android_app_id(),
        args.ios_app_id(),
    )
    .await?;

    let data = assemble_release_data(&context, releases);
    log::info!(
        "Release {} ({}) on {}/{}",
        data.summary.version_name,
        data.summary.version_code,
        data.branch,
        data.environment
    );

    let payload = format.build(&data)?;

    if args.dry_run {
        let rendered = serde_json::to_string_pretty(&payload)
            .with_context(|| format!("Failed to render {} payload", format.name()))?;
        println!("{}", rendered);
        return Ok(());
    }

    config.info_println(&format!(
        "Posting {} payload for {} ({})",
        format.name(),
        data.summary.version_name,
        data.summary.version_code
    ));
    let http = config.http.build_client()?;
    deliver(&http, &context.webhook, &payload).await?;

    config.success_println(&format!("{} payload sent successfully", format.name()));
    Ok(())
}
