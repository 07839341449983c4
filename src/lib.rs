//! mpdecimate-trim library
//!
//! Trims static and duplicate segments out of a video. ffmpeg's `mpdecimate`
//! filter is run at debug log level, its log is interpreted into the time
//! ranges worth keeping, and a trim/concat filter script re-encodes just
//! those ranges.

pub mod adapters;
pub mod app;
pub mod cli;
pub mod config;
pub mod domain;
pub mod engine;
pub mod error;
pub mod graph;
pub mod interpreter;
pub mod ports;
pub mod utils;

// Re-export commonly used types
pub use domain::errors::DomainError;
pub use domain::model::{
    DropCountEvent, Interval, IntervalRules, LogSummary, ParseStrategy, Phase, RunOutcome, Verdict,
    VerdictEvent,
};
pub use error::{TrimError, TrimResult};
pub use graph::FilterGraphProgram;
pub use interpreter::{interpreter_for, LogInterpreter};
