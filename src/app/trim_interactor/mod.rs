// Trim interactor - Orchestrates decimate, filter creation and transcode

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::{error, info, warn};

use crate::app::plan_interactor::TrimPlan;
use crate::config::TrimConfig;
use crate::domain::model::*;
use crate::engine::HardwarePlan;
use crate::error::{TrimError, TrimResult};
use crate::interpreter;
use crate::ports::*;
use crate::utils::{trimmed_output_path, PhaseTimer};

/// Prefix of the per-run working directory
pub const WORK_DIR_PREFIX: &str = "mpdecimate_trim.";
/// File name of the generated filter script
pub const FILTER_FILE_NAME: &str = "mpdecimate_filter";

/// Trim request
#[derive(Debug, Clone)]
pub struct TrimRequest {
    pub input: PathBuf,
    /// Keep the source file after a successful run
    pub keep_source: bool,
    /// Minimum number of segments worth re-encoding
    pub skip: Option<usize>,
    /// Keep every artifact and let ffmpeg log at debug level
    pub debug: bool,
    /// Write the output into the working directory
    pub output_to_cwd: bool,
    /// Drop audio even when present
    pub no_audio: bool,
    pub hardware: HardwarePlan,
    pub config: TrimConfig,
}

/// Trim response
#[derive(Debug, Clone, PartialEq)]
pub struct TrimResponse {
    pub outcome: RunOutcome,
    /// Trimmed file, set when the transcode ran
    pub output: Option<PathBuf>,
    /// Working directory, set when it was left on disk
    pub work_dir: Option<PathBuf>,
}

/// Interactor for the trim use case
pub struct TrimInteractor {
    execute_port: Arc<dyn ExecutePort>,
    fs_port: Arc<dyn FsPort>,
}

impl TrimInteractor {
    /// Create new trim interactor with injected ports
    pub fn new(execute_port: Arc<dyn ExecutePort>, fs_port: Arc<dyn FsPort>) -> Self {
        Self {
            execute_port,
            fs_port,
        }
    }

    /// Execute the whole pipeline
    pub async fn execute(&self, request: TrimRequest) -> TrimResult<TrimResponse> {
        if !self.fs_port.file_exists(&request.input).await? {
            return Err(TrimError::InputFileNotFound {
                path: request.input.display().to_string(),
            });
        }

        let work_dir = self.fs_port.create_work_dir(WORK_DIR_PREFIX).await?;
        info!(work_dir = %work_dir.display(), "Created working directory");

        let decimate_log = self.decimate(&request, &work_dir).await?;

        let plan = self.create_filter(&request, &decimate_log)?;
        // No program means the run was skipped
        let program = match plan.program.as_ref() {
            Some(program) => program,
            None => {
                let work_dir = self.cleanup_work_dir(&request, work_dir).await?;
                return Ok(TrimResponse {
                    outcome: plan.outcome,
                    output: None,
                    work_dir,
                });
            }
        };

        let filter_path = work_dir.join(FILTER_FILE_NAME);
        info!("Filter definition: {}", filter_path.display());
        self.fs_port
            .write_file(&filter_path, &program.to_string())
            .await?;

        let output = trimmed_output_path(&request.input, request.output_to_cwd);
        self.transcode(&request, &work_dir, &filter_path, &program.output_maps(), &output)
            .await?;

        if request.debug {
            info!("Debug enabled, not removing anything");
            return Ok(TrimResponse {
                outcome: plan.outcome,
                output: Some(output),
                work_dir: Some(work_dir),
            });
        }

        if !request.keep_source {
            info!("Removing the original file at {}", request.input.display());
            self.fs_port.delete_file(&request.input).await?;
        }

        let work_dir = self.cleanup_work_dir(&request, work_dir).await?;
        Ok(TrimResponse {
            outcome: plan.outcome,
            output: Some(output),
            work_dir,
        })
    }

    /// Run the decimation filter, returning the captured log
    async fn decimate(&self, request: &TrimRequest, work_dir: &Path) -> TrimResult<PathBuf> {
        let timer = PhaseTimer::start(Phase::Decimate);

        let mut args = request.hardware.decimate_args();
        args.extend([
            "-i".to_string(),
            request.input.display().to_string(),
            "-vf".to_string(),
            request.config.decimate.filter.clone(),
            "-loglevel".to_string(),
            "debug".to_string(),
            "-f".to_string(),
            "null".to_string(),
            "-".to_string(),
        ]);

        let invocation =
            FfmpegInvocation::new(Phase::Decimate, request.config.ffmpeg.clone(), args, work_dir);
        self.run_checked(&invocation).await?;

        timer.finish();
        Ok(invocation.stderr_log)
    }

    /// Interpret the decimation log and decide whether to proceed
    fn create_filter(&self, request: &TrimRequest, decimate_log: &Path) -> TrimResult<TrimPlan> {
        let timer = PhaseTimer::start(Phase::FilterCreation);
        info!("The {} phase is starting", Phase::FilterCreation);

        let summary = interpreter::interpret_file(
            decimate_log,
            request.config.decimate.strategy,
            request.config.intervals,
        )?;
        let plan = TrimPlan::from_summary(summary, request.skip, request.no_audio)?;

        timer.finish();
        Ok(plan)
    }

    /// Re-encode the input through the filter script
    async fn transcode(
        &self,
        request: &TrimRequest,
        work_dir: &Path,
        filter_path: &Path,
        output_maps: &[String],
        output: &Path,
    ) -> TrimResult<()> {
        let timer = PhaseTimer::start(Phase::Transcode);

        let mut args = request.hardware.transcode_args();
        args.extend([
            "-i".to_string(),
            request.input.display().to_string(),
            "-filter_complex_script".to_string(),
            filter_path.display().to_string(),
        ]);
        args.extend(output_maps.iter().cloned());
        args.extend(request.config.encoder.codec_args(&request.hardware.transcode));
        if request.debug {
            args.extend(["-loglevel".to_string(), "debug".to_string()]);
        }
        args.push(output.display().to_string());

        let invocation =
            FfmpegInvocation::new(Phase::Transcode, request.config.ffmpeg.clone(), args, work_dir);
        self.run_checked(&invocation).await?;

        timer.finish();
        info!(output = %output.display(), "Trimmed video written");
        Ok(())
    }

    async fn run_checked(&self, invocation: &FfmpegInvocation) -> TrimResult<()> {
        let report = self.execute_port.run(invocation).await?;
        if report.success() {
            return Ok(());
        }

        error!(
            "The {} phase failed with code {:?}, see {} for details",
            invocation.phase,
            report.exit_code,
            invocation.stderr_log.display()
        );
        Err(TrimError::ExternalToolFailure {
            phase: invocation.phase,
            exit_code: report.exit_code,
        })
    }

    /// Remove the working directory unless debugging; returns it when kept
    async fn cleanup_work_dir(
        &self,
        request: &TrimRequest,
        work_dir: PathBuf,
    ) -> TrimResult<Option<PathBuf>> {
        if request.debug {
            return Ok(Some(work_dir));
        }
        if let Err(e) = self.fs_port.delete_directory(&work_dir).await {
            warn!("Failed to remove working directory: {}", e);
            return Ok(Some(work_dir));
        }
        Ok(None)
    }
}
