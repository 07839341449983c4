//! Phase timing helpers

use std::time::{Duration, Instant};

use tracing::info;

use crate::domain::model::Phase;

/// Format a duration as `HH:MM:SS`, dropping sub-second precision
pub fn format_elapsed(elapsed: Duration) -> String {
    let total_seconds = elapsed.as_secs();
    let hours = total_seconds / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;
    format!("{:02}:{:02}:{:02}", hours, minutes, seconds)
}

/// Logs how long a phase took when finished
#[derive(Debug)]
pub struct PhaseTimer {
    phase: Phase,
    started: Instant,
}

impl PhaseTimer {
    pub fn start(phase: Phase) -> Self {
        Self {
            phase,
            started: Instant::now(),
        }
    }

    /// Log and return the elapsed time
    pub fn finish(self) -> Duration {
        let elapsed = self.started.elapsed();
        info!(
            phase = %self.phase,
            "The {} phase took {}",
            self.phase,
            format_elapsed(elapsed)
        );
        elapsed
    }
}
