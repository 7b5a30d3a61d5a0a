//! App Distribution REST client.

use super::auth::{CredentialSource, TokenProvider};
use super::release::{Release, ReleaseListing};
use super::select::Selection;
use crate::cli::HttpConfig;
use crate::error::{Result, UpstreamError, body_excerpt};
use tokio::sync::OnceCell;

/// Reads release listings for apps in a Firebase project
#[derive(Debug)]
pub struct DistributionClient {
    http: reqwest::Client,
    endpoint: String,
    tokens: TokenProvider,
    /// One token per client; concurrent fetches share the first exchange
    token: OnceCell<String>,
}

impl DistributionClient {
    /// Create a client authenticated from `credentials`
    pub fn new(config: &HttpConfig, credentials: CredentialSource) -> Result<Self> {
        config.validate()?;
        let http = config.build_client()?;
        let tokens = TokenProvider::new(credentials, http.clone(), config);

        Ok(Self {
            http,
            endpoint: config.distribution_endpoint.clone(),
            tokens,
            token: OnceCell::new(),
        })
    }

    /// URL of the releases listing for one app
    pub fn releases_url(&self, project: &str, app_id: &str) -> String {
        format!("{}/projects/{}/apps/{}/releases", self.endpoint, project, app_id)
    }

    async fn bearer_token(&self) -> Result<&str> {
        let token = self
            .token
            .get_or_try_init(|| self.tokens.access_token())
            .await?;
        Ok(token.as_str())
    }

    /// Fetch all releases for an app, in service order
    pub async fn list_releases(&self, project: &str, app_id: &str) -> Result<Vec<Release>> {
        let token = self.bearer_token().await?;
        let url = self.releases_url(project, app_id);
        log::debug!("GET {}", url);

        let response = self
            .http
            .get(&url)
            .bearer_auth(token)
            .send()
            .await
            .map_err(|e| UpstreamError::Transport {
                url: url.clone(),
                reason: e.to_string(),
            })?;

        let status = response.status();
        let body = response.text().await.map_err(|e| UpstreamError::Transport {
            url: url.clone(),
            reason: e.to_string(),
        })?;

        if !status.is_success() {
            return Err(UpstreamError::Status {
                url,
                status: status.as_u16(),
                body: body_excerpt(&body),
            }
            .into());
        }

        let listing: ReleaseListing =
            serde_json::from_str(&body).map_err(|e| UpstreamError::MalformedBody {
                url: url.clone(),
                reason: e.to_string(),
            })?;

        log::info!("Fetched {} release(s) for {}", listing.releases.len(), app_id);
        Ok(listing.releases)
    }

    /// Fetch an app's releases and pick one
    pub async fn select_release(
        &self,
        project: &str,
        app_id: &str,
        selection: Selection,
    ) -> Result<Option<Release>> {
        let releases = self.list_releases(project, app_id).await?;
        let picked = selection.select(&releases).cloned();

        match &picked {
            Some(release) => log::debug!(
                "{:?} release for {}: build {} ({})",
                selection,
                app_id,
                release.build_version().unwrap_or("-"),
                release.display_version().unwrap_or("-"),
            ),
            None => log::debug!("{:?} release for {}: none", selection, app_id),
        }

        Ok(picked)
    }

    /// Most recent release of an app
    pub async fn latest_release(&self, project: &str, app_id: &str) -> Result<Option<Release>> {
        self.select_release(project, app_id, Selection::Latest).await
    }

    /// Release with the highest build number
    pub async fn biggest_release(&self, project: &str, app_id: &str) -> Result<Option<Release>> {
        self.select_release(project, app_id, Selection::Biggest).await
    }
}
