//! Command line interface for firebase_release_notify.
//!
//! Parses arguments, validates them before any network activity, and
//! dispatches to the command implementations.

mod args;
pub mod commands;
mod http_config;
mod output;

pub use args::{Args, Command, NotifyArgs, ProjectArgs, RuntimeConfig};
pub use commands::execute_command;
pub use http_config::{
    DEFAULT_DISTRIBUTION_ENDPOINT, DEFAULT_TOKEN_ENDPOINT, HttpConfig, validate_http_url,
};
pub use output::OutputManager;

use crate::error::Result;

/// Main CLI entry point
pub async fn run() -> Result<i32> {
    let args = Args::parse_args();
    execute_command(args).await
}
