//! FFmpeg execution adapter
//!
//! Runs the ffmpeg executable as a child process with its output redirected
//! to the invocation's log files.

use std::fs::File;
use std::process::Stdio;

use async_trait::async_trait;
use tokio::process::Command;
use tracing::{debug, info};

use crate::domain::errors::*;
use crate::ports::*;

/// FFmpeg-based execution adapter
#[derive(Debug, Default)]
pub struct FFmpegAdapter;

impl FFmpegAdapter {
    /// Create new FFmpeg adapter
    pub fn new() -> Self {
        Self
    }

    fn create_log(path: &std::path::Path) -> Result<File, DomainError> {
        File::create(path).map_err(|e| {
            DomainError::FsFail(format!("Failed to create log {}: {}", path.display(), e))
        })
    }
}

#[async_trait]
impl ExecutePort for FFmpegAdapter {
    async fn run(&self, invocation: &FfmpegInvocation) -> Result<ProcessReport, DomainError> {
        info!(
            "The {} phase is starting with command `{}`",
            invocation.phase,
            invocation.command_line()
        );
        info!("Standard output capture: {}", invocation.stdout_log.display());
        info!("Standard error capture: {}", invocation.stderr_log.display());

        let stdout = Self::create_log(&invocation.stdout_log)?;
        let stderr = Self::create_log(&invocation.stderr_log)?;

        let status = Command::new(&invocation.program)
            .args(&invocation.args)
            .stdin(Stdio::null())
            .stdout(Stdio::from(stdout))
            .stderr(Stdio::from(stderr))
            .status()
            .await
            .map_err(|e| {
                DomainError::ProcessFail(format!("Failed to run {}: {}", invocation.program, e))
            })?;

        let report = ProcessReport { exit_code: status.code() };
        debug!(phase = %invocation.phase, exit_code = ?report.exit_code, "ffmpeg exited");

        Ok(report)
    }
}
