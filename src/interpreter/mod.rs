//! Decimation log interpreter
//!
//! Turns the verbose debug output of a frame-decimation filter into an ordered
//! list of intervals to retain. Two log dialects are understood, selected with
//! [`ParseStrategy`]:
//!
//! - [`KeepDropInterpreter`] toggles on explicit per-frame `keep`/`drop` verdicts.
//! - [`DropCountInterpreter`] groups `drop_count` annotations into runs, merges
//!   runs closer than the merge distance and discards short results.
//!
//! Unrelated or malformed lines are skipped; interpretation never fails.

use std::path::Path;

use tracing::{debug, info};

use crate::domain::errors::DomainError;
use crate::domain::model::{IntervalRules, LogSummary, ParseStrategy};

pub mod drop_count;
pub mod keep_drop;
pub mod patterns;

pub use drop_count::DropCountInterpreter;
pub use keep_drop::KeepDropInterpreter;

/// Converts decimation log lines into keep-intervals
pub trait LogInterpreter: Send + Sync {
    /// Interpret the full log, lines in their original order
    fn interpret<'a>(&self, lines: &mut dyn Iterator<Item = &'a str>) -> LogSummary;

    /// Interpret a whole log held in memory
    fn interpret_text(&self, text: &str) -> LogSummary {
        self.interpret(&mut text.lines())
    }
}

/// Build the interpreter for a log dialect
pub fn interpreter_for(strategy: ParseStrategy, rules: IntervalRules) -> Box<dyn LogInterpreter> {
    match strategy {
        ParseStrategy::KeepDrop => Box::new(KeepDropInterpreter::new()),
        ParseStrategy::DropCount => Box::new(DropCountInterpreter::new(rules)),
    }
}

/// Read a captured log file and interpret it.
///
/// Invalid UTF-8 is replaced rather than rejected, ffmpeg echoes metadata verbatim.
pub fn interpret_file(
    path: &Path,
    strategy: ParseStrategy,
    rules: IntervalRules,
) -> Result<LogSummary, DomainError> {
    let bytes = std::fs::read(path).map_err(|e| {
        DomainError::FsFail(format!("Failed to read log {}: {}", path.display(), e))
    })?;
    let text = String::from_utf8_lossy(&bytes);

    let summary = interpreter_for(strategy, rules).interpret_text(&text);

    info!(
        log = %path.display(),
        %strategy,
        intervals = summary.interval_count(),
        has_audio = summary.has_audio,
        "Interpreted decimation log"
    );
    for interval in &summary.intervals {
        debug!("Keeping times {}", interval);
    }

    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::Interval;
    use std::io::Write;

    #[test]
    fn test_interpreter_for_selects_dialect() {
        let log = "keep pts:0 pts_time:0.0 drop_count:-1\ndrop pts:5 pts_time:5.0 drop_count:1\n";

        let keep_drop = interpreter_for(ParseStrategy::KeepDrop, IntervalRules::default());
        assert_eq!(keep_drop.interpret_text(log).intervals, vec![Interval::closed(0.0, 5.0)]);

        // The same text carries no drop_count-before-pts_time lines
        let drop_count = interpreter_for(ParseStrategy::DropCount, IntervalRules::default());
        assert!(drop_count.interpret_text(log).intervals.is_empty());
    }

    #[test]
    fn test_interpret_file_tolerates_invalid_utf8() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"title : \xff\xfe broken\n").unwrap();
        file.write_all(b"[mpdecimate] keep pts:0 pts_time:0.0 drop_count:-1\n").unwrap();
        file.flush().unwrap();

        let summary =
            interpret_file(file.path(), ParseStrategy::KeepDrop, IntervalRules::default()).unwrap();
        assert_eq!(summary.intervals, vec![Interval::open(0.0)]);
        assert!(!summary.has_audio);
    }

    #[test]
    fn test_interpret_file_missing() {
        let result = interpret_file(
            Path::new("/nonexistent/decimate.stderr.log"),
            ParseStrategy::KeepDrop,
            IntervalRules::default(),
        );
        assert!(matches!(result, Err(DomainError::FsFail(_))));
    }
}
