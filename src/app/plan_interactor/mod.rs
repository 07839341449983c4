// Plan interactor - Interprets a decimation log into a filter program

use std::path::PathBuf;
use std::sync::Arc;

use serde::Serialize;
use tracing::{info, warn};

use crate::domain::model::*;
use crate::error::{TrimError, TrimResult};
use crate::graph::FilterGraphProgram;
use crate::interpreter;
use crate::ports::*;

/// Request to plan from an existing log
#[derive(Debug, Clone)]
pub struct PlanRequest {
    pub log_path: PathBuf,
    pub strategy: ParseStrategy,
    pub rules: IntervalRules,
    /// Minimum number of segments worth re-encoding
    pub skip: Option<usize>,
    /// Drop audio even when the log shows an audio stream
    pub no_audio: bool,
}

/// Intervals, outcome and program derived from one log
#[derive(Debug, Clone, Serialize)]
pub struct TrimPlan {
    pub summary: LogSummary,
    pub with_audio: bool,
    pub outcome: RunOutcome,
    /// `None` when the run is skipped
    #[serde(skip)]
    pub program: Option<FilterGraphProgram>,
}

impl TrimPlan {
    /// Apply the skip threshold and synthesize the program.
    ///
    /// Zero intervals without a skip threshold is an error: there is nothing
    /// to retain.
    pub fn from_summary(summary: LogSummary, skip: Option<usize>, no_audio: bool) -> TrimResult<Self> {
        let with_audio = summary.has_audio && !no_audio;
        let outcome = RunOutcome::evaluate(summary.interval_count(), skip);

        if let RunOutcome::SkipInsufficientSegments { threshold, .. } = outcome {
            warn!("Less than {} parts detected, avoiding re-encode", threshold);
            return Ok(Self {
                summary,
                with_audio,
                outcome,
                program: None,
            });
        }

        if summary.intervals.is_empty() {
            return Err(TrimError::NothingToKeep);
        }

        let program = FilterGraphProgram::synthesize(&summary.intervals, with_audio)?;
        Ok(Self {
            summary,
            with_audio,
            outcome,
            program: Some(program),
        })
    }

    /// Program text, as written to the filter script
    pub fn script(&self) -> Option<String> {
        self.program.as_ref().map(|program| program.to_string())
    }
}

/// Interactor for the plan use case
pub struct PlanInteractor {
    fs_port: Arc<dyn FsPort>,
}

impl PlanInteractor {
    /// Create new plan interactor with injected ports
    pub fn new(fs_port: Arc<dyn FsPort>) -> Self {
        Self { fs_port }
    }

    /// Interpret the log and build the plan
    pub async fn execute(&self, request: PlanRequest) -> TrimResult<TrimPlan> {
        if !self.fs_port.file_exists(&request.log_path).await? {
            return Err(TrimError::InputFileNotFound {
                path: request.log_path.display().to_string(),
            });
        }

        let summary = interpreter::interpret_file(&request.log_path, request.strategy, request.rules)?;
        let plan = TrimPlan::from_summary(summary, request.skip, request.no_audio)?;

        info!(outcome = ?plan.outcome, with_audio = plan.with_audio, "Plan ready");
        Ok(plan)
    }
}
