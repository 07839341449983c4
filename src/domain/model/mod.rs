// Domain models - Core types and data structures

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::errors::DomainError;

/// Per-frame decision printed by the decimation filter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    Keep,
    Drop,
}

impl FromStr for Verdict {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "keep" => Ok(Verdict::Keep),
            "drop" => Ok(Verdict::Drop),
            other => Err(DomainError::BadArgs(format!("Unknown verdict: {}", other))),
        }
    }
}

/// `keep|drop pts:N pts_time:T drop_count:N`, one per frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VerdictEvent {
    pub verdict: Verdict,
    pub pts_time: f64,
}

/// `drop_count:N ... pts_time:T`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DropCountEvent {
    /// `-1` starts a run, `1` extends it
    pub drop_count: i64,
    pub pts_time: f64,
}

/// Half-open `[start, end)` range of the source to retain, in seconds.
///
/// `end == None` retains everything up to the end of the stream; only the last
/// interval of a sequence may be open.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Interval {
    pub start: f64,
    pub end: Option<f64>,
}

impl Interval {
    /// Interval closed at `end`
    pub fn closed(start: f64, end: f64) -> Self {
        Self { start, end: Some(end) }
    }

    /// Interval running to the end of the stream
    pub fn open(start: f64) -> Self {
        Self { start, end: None }
    }

    pub fn is_open(&self) -> bool {
        self.end.is_none()
    }

    /// Length in seconds, `None` when open-ended
    pub fn duration(&self) -> Option<f64> {
        self.end.map(|end| end - self.start)
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.end {
            Some(end) => write!(f, "{:.3}-{:.3}", self.start, end),
            None => write!(f, "{:.3}-end", self.start),
        }
    }
}

/// Result of interpreting a decimation log
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct LogSummary {
    pub intervals: Vec<Interval>,
    /// Both an audio input and an audio output stream summary were seen
    pub has_audio: bool,
}

impl LogSummary {
    pub fn interval_count(&self) -> usize {
        self.intervals.len()
    }
}

/// Log dialect of the decimation filter
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ParseStrategy {
    /// Explicit `keep`/`drop` verdict per frame
    #[default]
    KeepDrop,
    /// `drop_count` annotations, grouped into runs
    DropCount,
}

impl ParseStrategy {
    /// Parse strategy from string
    pub fn parse(s: &str) -> Result<Self, DomainError> {
        match s.to_lowercase().as_str() {
            "keep-drop" | "keep_drop" | "keepdrop" => Ok(ParseStrategy::KeepDrop),
            "drop-count" | "drop_count" | "dropcount" => Ok(ParseStrategy::DropCount),
            _ => Err(DomainError::BadArgs(format!(
                "Invalid parse strategy: {}. Valid strategies: keep-drop, drop-count",
                s
            ))),
        }
    }
}

impl fmt::Display for ParseStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseStrategy::KeepDrop => write!(f, "keep-drop"),
            ParseStrategy::DropCount => write!(f, "drop-count"),
        }
    }
}

/// Thresholds applied while reconciling intervals
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IntervalRules {
    /// Closed intervals no longer than this many seconds are discarded
    pub min_duration: f64,
    /// Drop runs starting less than this many seconds after the previous one are merged
    pub merge_distance: f64,
}

impl Default for IntervalRules {
    fn default() -> Self {
        Self {
            min_duration: 1.0,
            merge_distance: 10.0,
        }
    }
}

/// Pipeline phase, attached to logs and failures
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Phase {
    Decimate,
    FilterCreation,
    Transcode,
}

impl Phase {
    /// File-name friendly name, used for captured process output
    pub fn slug(&self) -> &'static str {
        match self {
            Phase::Decimate => "decimate",
            Phase::FilterCreation => "filter_creation",
            Phase::Transcode => "transcode",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Phase::Decimate => write!(f, "decimate"),
            Phase::FilterCreation => write!(f, "filter creation"),
            Phase::Transcode => write!(f, "transcode"),
        }
    }
}

/// Outcome of a run that did not fail
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum RunOutcome {
    /// The program was synthesized (and, for a full run, transcoded)
    Proceed { interval_count: usize },
    /// Fewer segments than the caller's threshold; nothing was re-encoded
    SkipInsufficientSegments { interval_count: usize, threshold: usize },
}

impl RunOutcome {
    /// Decide whether `interval_count` segments are worth re-encoding
    pub fn evaluate(interval_count: usize, skip: Option<usize>) -> Self {
        match skip {
            Some(threshold) if interval_count < threshold => RunOutcome::SkipInsufficientSegments {
                interval_count,
                threshold,
            },
            _ => RunOutcome::Proceed { interval_count },
        }
    }

    pub fn is_skip(&self) -> bool {
        matches!(self, RunOutcome::SkipInsufficientSegments { .. })
    }
}

#[cfg(test)]
mod tests;
