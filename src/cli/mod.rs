//! CLI module for mpdecimate-trim
//!
//! This module handles command-line argument parsing and command execution.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::CONFIG_ENV;
use crate::utils::logging::{LogFormat, LogLevel, LoggingConfig};

pub mod args;
pub mod commands;

/// mpdecimate-trim
///
/// Trims static and duplicate segments out of a video by running ffmpeg's
/// mpdecimate filter, turning its debug log into keep-intervals and
/// re-encoding only those intervals.
#[derive(Parser, Debug)]
#[command(name = "mpdecimate-trim")]
#[command(about = "Trim video(+audio) clip, based on output from mpdecimate filter")]
#[command(version)]
#[command(long_about = None)]
pub struct Cli {
    /// Logging level (RUST_LOG takes precedence)
    #[arg(long, value_enum, default_value_t = LogLevel::Info, global = true, env = "MPDECIMATE_TRIM_LOG_LEVEL")]
    pub log_level: LogLevel,

    /// Log output format
    #[arg(long, value_enum, default_value_t = LogFormat::Pretty, global = true)]
    pub log_format: LogFormat,

    /// Configuration file (default: ./mpdecimate_trim.toml when present)
    #[arg(long, global = true, env = CONFIG_ENV)]
    pub config: Option<PathBuf>,

    /// The command to execute
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    pub fn logging_config(&self) -> LoggingConfig {
        LoggingConfig {
            level: self.log_level,
            format: self.log_format,
        }
    }
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Decimate, trim and re-encode a video file
    Trim(args::TrimArgs),
    /// Interpret an existing decimation log and print the filter script
    Plan(args::PlanArgs),
}
