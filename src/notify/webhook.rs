//! Webhook delivery.

use crate::error::{DeliveryError, Result, body_excerpt};
use serde::Serialize;

/// POST `payload` as JSON to `webhook`.
///
/// No retries; a transport error or non-2xx status fails the run.
pub async fn deliver<P: Serialize + ?Sized>(
    http: &reqwest::Client,
    webhook: &str,
    payload: &P,
) -> Result<()> {
    let response = http
        .post(webhook)
        .json(payload)
        .send()
        .await
        .map_err(|e| DeliveryError::Transport {
            reason: e.to_string(),
        })?;

    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(DeliveryError::Status {
            status: status.as_u16(),
            body: body_excerpt(&body),
        }
        .into());
    }

    log::info!("Webhook accepted payload (HTTP {})", status.as_u16());
    Ok(())
}
