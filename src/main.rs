//! firebase_release_notify - Firebase App Distribution release helper for CI.
//!
//! Derives build numbers from published releases and announces new builds on
//! Slack or Google Chat.

use firebase_release_notify::cli;
use firebase_release_notify::cli::OutputManager;
use std::process;

#[tokio::main]
async fn main() {
    env_logger::init();

    match cli::run().await {
        Ok(exit_code) => {
            process::exit(exit_code);
        }
        Err(e) => {
            // Never quiet for fatal errors
            let output = OutputManager::new(false);
            output.error(&format!("Fatal error: {e}"));
            output.suggestions(&e.recovery_suggestions());

            process::exit(e.exit_code());
        }
    }
}
