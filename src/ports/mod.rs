// Ports - Interface definitions (contracts)

use std::path::{Path, PathBuf};

use async_trait::async_trait;

use crate::config::TrimConfig;
use crate::domain::errors::*;
use crate::domain::model::Phase;

/// One external ffmpeg invocation
#[derive(Debug, Clone, PartialEq)]
pub struct FfmpegInvocation {
    pub phase: Phase,
    /// Executable to run
    pub program: String,
    pub args: Vec<String>,
    /// Where standard output is captured
    pub stdout_log: PathBuf,
    /// Where standard error is captured
    pub stderr_log: PathBuf,
}

impl FfmpegInvocation {
    /// Build an invocation whose output is captured as `<phase>.stdout.log`
    /// and `<phase>.stderr.log` inside `work_dir`
    pub fn new(phase: Phase, program: impl Into<String>, args: Vec<String>, work_dir: &Path) -> Self {
        Self {
            phase,
            program: program.into(),
            args,
            stdout_log: work_dir.join(format!("{}.stdout.log", phase.slug())),
            stderr_log: work_dir.join(format!("{}.stderr.log", phase.slug())),
        }
    }

    /// Command line with spaces escaped, for logs
    pub fn command_line(&self) -> String {
        std::iter::once(&self.program)
            .chain(self.args.iter())
            .map(|arg| arg.replace(' ', "\\ "))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Result of a finished process
#[derive(Debug, Clone, PartialEq)]
pub struct ProcessReport {
    /// `None` when the process was terminated by a signal
    pub exit_code: Option<i32>,
}

impl ProcessReport {
    pub fn success(&self) -> bool {
        self.exit_code == Some(0)
    }
}

/// Port for running the external transcoder
#[async_trait]
pub trait ExecutePort: Send + Sync {
    /// Run to completion, without timeout, capturing output to the invocation's logs
    async fn run(&self, invocation: &FfmpegInvocation) -> Result<ProcessReport, DomainError>;
}

/// Port for file system operations
#[async_trait]
pub trait FsPort: Send + Sync {
    /// Check if file exists
    async fn file_exists(&self, file_path: &Path) -> Result<bool, DomainError>;

    /// Create a fresh working directory that outlives the call
    async fn create_work_dir(&self, prefix: &str) -> Result<PathBuf, DomainError>;

    /// Write a whole file
    async fn write_file(&self, file_path: &Path, contents: &str) -> Result<(), DomainError>;

    /// Delete file
    async fn delete_file(&self, file_path: &Path) -> Result<(), DomainError>;

    /// Delete directory recursively
    async fn delete_directory(&self, dir_path: &Path) -> Result<(), DomainError>;
}

/// Port for configuration management
#[async_trait]
pub trait ConfigPort: Send + Sync {
    /// Load configuration from `file_path`, or from the default locations when
    /// `None`; falls back to defaults when no file exists
    async fn load_config(&self, file_path: Option<&Path>) -> Result<TrimConfig, DomainError>;
}
