//! Command line argument parsing and validation.
//!
//! One subcommand per CI step: version numbering, release lookup, and the two
//! notification formats.

use crate::cli::http_config::{HttpConfig, validate_http_url};
use crate::error::{ConfigError, Result};
use crate::firebase::DEFAULT_INITIAL_VERSION;
use crate::notify::NotificationContext;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Firebase App Distribution release helper for CI pipelines
#[derive(Parser, Debug)]
#[command(
    name = "firebase_release_notify",
    version,
    about = "Firebase App Distribution release helper for CI pipelines",
    long_about = "Look up Firebase App Distribution releases, derive the next build number,
and announce new builds on Slack or Google Chat.

Usage:
  firebase_release_notify next-version-code --project 123 --app-id 1:123:android:abc
  firebase_release_notify notify-slack --project 123 --android-app-id 1:123:android:abc \\
      --branch main --environment staging --webhook https://hooks.slack.com/... \\
      --commit $SHA --build_user $USER"
)]
pub struct Args {
    /// Suppress status output (payloads and version codes are still printed)
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Command to run
    #[command(subcommand)]
    pub command: Command,
}

/// Project and credential options shared by every command
#[derive(clap::Args, Debug, Clone)]
pub struct ProjectArgs {
    /// Google Cloud project number
    #[arg(long)]
    pub project: String,

    /// Path to a service account or authorized user JSON key
    #[arg(long, env = "GOOGLE_APPLICATION_CREDENTIALS")]
    pub credentials: Option<PathBuf>,

    /// Pre-minted OAuth access token; skips key file exchange
    #[arg(long, env = "FIREBASE_ACCESS_TOKEN", hide_env_values = true)]
    pub access_token: Option<String>,
}

/// Options for the notification commands
#[derive(clap::Args, Debug, Clone)]
pub struct NotifyArgs {
    #[command(flatten)]
    #[allow(missing_docs)]
    pub common: ProjectArgs,

    /// Android app id (1:xxx:android:xxx)
    #[arg(long)]
    pub android_app_id: Option<String>,

    /// iOS app id (1:xxx:ios:xxx)
    #[arg(long)]
    pub ios_app_id: Option<String>,

    /// Source branch
    #[arg(long)]
    pub branch: String,

    /// Deployment environment
    #[arg(long)]
    pub environment: String,

    /// Webhook URL receiving the payload
    #[arg(long)]
    pub webhook: String,

    /// Commit identifier
    #[arg(long)]
    pub commit: String,

    /// Who triggered the build
    #[arg(long = "build_user", alias = "build-user")]
    pub build_user: String,

    /// Comma-separated Chat user ids to mention; `all` mentions everyone
    #[arg(long)]
    pub mentions: Option<String>,

    /// Print the payload instead of posting it
    #[arg(long)]
    pub dry_run: bool,
}

/// Available commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Print the next build number (highest build + 1, or the initial version)
    NextVersionCode {
        #[command(flatten)]
        #[allow(missing_docs)]
        common: ProjectArgs,

        /// Firebase app id (1:xxx:android:xxx or 1:xxx:ios:xxx)
        #[arg(long = "app-id")]
        app_id: String,

        /// Version code to use when no release exists or the lookup fails
        #[arg(long, default_value_t = DEFAULT_INITIAL_VERSION)]
        initial_version: u64,
    },

    /// Print the most recent release as JSON
    LatestRelease {
        #[command(flatten)]
        #[allow(missing_docs)]
        common: ProjectArgs,

        /// Firebase app id
        #[arg(long = "app-id")]
        app_id: String,
    },

    /// Post release variables to a Slack workflow webhook
    NotifySlack(NotifyArgs),

    /// Post a release card to a Google Chat webhook
    NotifyGoogleChat(NotifyArgs),
}

impl Command {
    /// Subcommand name for messages
    pub fn name(&self) -> &'static str {
        match self {
            Command::NextVersionCode { .. } => "next-version-code",
            Command::LatestRelease { .. } => "latest-release",
            Command::NotifySlack(_) => "notify-slack",
            Command::NotifyGoogleChat(_) => "notify-google-chat",
        }
    }

    /// Project options of this command
    pub fn project_args(&self) -> &ProjectArgs {
        match self {
            Command::NextVersionCode { common, .. } | Command::LatestRelease { common, .. } => {
                common
            }
            Command::NotifySlack(args) | Command::NotifyGoogleChat(args) => &args.common,
        }
    }
}

impl Args {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Validate arguments for consistency.
    ///
    /// Runs before any network activity.
    pub fn validate(&self) -> Result<()> {
        if self.command.project_args().project.trim().is_empty() {
            return Err(ConfigError::MissingArgument {
                argument: "--project".to_string(),
            }
            .into());
        }

        match &self.command {
            Command::NextVersionCode { app_id, .. } | Command::LatestRelease { app_id, .. } => {
                if app_id.trim().is_empty() {
                    return Err(ConfigError::MissingArgument {
                        argument: "--app-id".to_string(),
                    }
                    .into());
                }
            }
            Command::NotifySlack(args) | Command::NotifyGoogleChat(args) => args.validate()?,
        }

        Ok(())
    }
}

impl ProjectArgs {
    /// Resolve the credential source for this invocation
    pub fn credential_source(&self) -> Result<crate::firebase::CredentialSource> {
        crate::firebase::CredentialSource::resolve(
            self.access_token.as_deref(),
            self.credentials.as_deref(),
        )
    }
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

impl NotifyArgs {
    /// Android app id, if one was given
    pub fn android_app_id(&self) -> Option<&str> {
        non_blank(&self.android_app_id)
    }

    /// iOS app id, if one was given
    pub fn ios_app_id(&self) -> Option<&str> {
        non_blank(&self.ios_app_id)
    }

    /// Check platform ids and the webhook URL
    pub fn validate(&self) -> Result<()> {
        if self.android_app_id().is_none() && self.ios_app_id().is_none() {
            return Err(ConfigError::NoAppId.into());
        }
        if !self.dry_run {
            validate_http_url("webhook", &self.webhook)?;
        }
        Ok(())
    }

    /// Notification context carried into the payload
    pub fn context(&self) -> NotificationContext {
        NotificationContext {
            branch: self.branch.clone(),
            environment: self.environment.clone(),
            webhook: self.webhook.clone(),
            commit: self.commit.clone(),
            build_user: self.build_user.clone(),
            mentions: self.mentions.clone(),
        }
    }
}

/// Configuration derived from command line arguments
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    /// Output manager for colored terminal output
    output: super::OutputManager,
    /// Outbound HTTP settings
    pub http: HttpConfig,
}

impl RuntimeConfig {
    /// Create runtime configuration
    pub fn new(quiet: bool, http: HttpConfig) -> Self {
        Self {
            output: super::OutputManager::new(quiet),
            http,
        }
    }

    /// Print info message
    pub fn info_println(&self, message: &str) {
        self.output.info(message);
    }

    /// Print error message (always shown)
    pub fn error_println(&self, message: &str) {
        self.output.error(message);
    }

    /// Print success message
    pub fn success_println(&self, message: &str) {
        self.output.success(message);
    }

    /// Print recovery suggestions to stderr
    pub fn suggestions(&self, suggestions: &[String]) {
        self.output.suggestions(suggestions);
    }
}

impl From<&Args> for RuntimeConfig {
    fn from(args: &Args) -> Self {
        Self::new(args.quiet, HttpConfig::from_env())
    }
}
