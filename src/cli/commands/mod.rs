//! Command execution functions.
//!
//! Each command reports its own outcome; this module turns failures into a
//! diagnostic and a non-zero exit code.

mod latest;
mod next_version;
mod notify;

use crate::cli::{Args, Command, RuntimeConfig};
use crate::error::{NotifyError, Result};
use crate::notify::PayloadFormat;

use latest::execute_latest_release;
use next_version::execute_next_version_code;
use notify::execute_notify;

/// Execute the main command based on parsed arguments
pub async fn execute_command(args: Args) -> Result<i32> {
    let config = RuntimeConfig::from(&args);

    if let Err(validation_error) = args.validate() {
        report_failure(&config, &validation_error, &validation_error.to_string());
        return Ok(validation_error.exit_code());
    }

    match &args.command {
        Command::NextVersionCode {
            common,
            app_id,
            initial_version,
        } => {
            // Never fails: prints a number and exits 0 even on lookup errors
            execute_next_version_code(common, app_id, *initial_version, &config).await;
            Ok(0)
        }
        Command::LatestRelease { common, app_id } => {
            match execute_latest_release(common, app_id, &config).await {
                Ok(()) => Ok(0),
                Err(e) => {
                    report_failure(
                        &config,
                        &e,
                        &format!("Command '{}' failed: {}", args.command.name(), e),
                    );
                    Ok(e.exit_code())
                }
            }
        }
        Command::NotifySlack(notify_args) | Command::NotifyGoogleChat(notify_args) => {
            let format = match &args.command {
                Command::NotifySlack(_) => PayloadFormat::Slack,
                _ => PayloadFormat::GoogleChat,
            };

            match execute_notify(notify_args, format, &config).await {
                Ok(()) => Ok(0),
                Err(e) => {
                    log::error!("{} notification failed: {}", format.name(), e);
                    report_failure(
                        &config,
                        &e,
                        &format!("Failed to send {} payload: {}", format.name(), e),
                    );
                    Ok(e.exit_code())
                }
            }
        }
    }
}

fn report_failure(config: &RuntimeConfig, error: &NotifyError, message: &str) {
    config.error_println(message);
    config.suggestions(&error.recovery_suggestions());
}
