//! mpdecimate-trim
//!
//! Trims static and duplicate segments out of a video using ffmpeg's
//! mpdecimate filter.
//!
//! # Usage
//!
//! ```bash
//! mpdecimate-trim trim --skip 3 --keep lecture.mp4
//! mpdecimate-trim trim --vaapi /dev/dri/renderD128 --vaapi-decimate -- lecture.mp4
//! mpdecimate-trim plan decimate.stderr.log --json
//! ```
//!
//! Exit codes: 0 on success, 2 when the run was skipped for having too few
//! segments, 3 when ffmpeg failed, 1 for any other error.

use std::process::ExitCode;

use clap::Parser;
use tracing::{error, info};

use mpdecimate_trim::app::DefaultAppContainer;
use mpdecimate_trim::cli::{commands, Cli};
use mpdecimate_trim::error::{TrimError, EXIT_SKIPPED};
use mpdecimate_trim::utils::logging::init_logging;
use mpdecimate_trim::RunOutcome;

/// Main entry point for the mpdecimate-trim CLI application
#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    // Parse command line arguments
    let cli = Cli::parse();

    // Initialize logging
    init_logging(&cli.logging_config());

    info!("Starting mpdecimate-trim");

    let container = DefaultAppContainer::new();
    match commands::run(&container, cli).await {
        Ok(RunOutcome::Proceed { interval_count }) => {
            info!(interval_count, "mpdecimate-trim completed successfully");
            ExitCode::SUCCESS
        }
        Ok(RunOutcome::SkipInsufficientSegments {
            interval_count,
            threshold,
        }) => {
            info!(interval_count, threshold, "Skipped, not enough segments");
            ExitCode::from(EXIT_SKIPPED)
        }
        Err(err) => {
            error!("{:#}", err);
            let code = err
                .downcast_ref::<TrimError>()
                .map(TrimError::exit_code)
                .unwrap_or(1);
            ExitCode::from(code)
        }
    }
}
