//! Line patterns recognised in ffmpeg's debug output

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use crate::domain::model::{DropCountEvent, Verdict, VerdictEvent};

/// `[Parsed_mpdecimate_0 @ 0x...] keep pts:1024 pts_time:0.0333 drop_count:-1`
static VERDICT_LINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?:^|\s)(keep|drop)(?:\s+pts:(\S+))?\s+pts_time:(\S+)(?:\s+drop_count:(\S+))?")
        .expect("verdict pattern is valid")
});

/// Any line carrying `drop_count:N` followed later by `pts_time:T`
static DROP_COUNT_LINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"drop_count:(\S+).*?pts_time:(\S+)").expect("drop count pattern is valid")
});

/// `Input stream #0:1 (audio): 430 packets read (6934 bytes); 430 frames decoded (440320 samples);`
static AUDIO_INPUT_LINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^\s*Input stream #\d+:\d+ \(audio\): \d+ packets read \(\d+ bytes\); \d+ frames decoded(?: \(\d+ samples\))?;\s*$",
    )
    .expect("audio input pattern is valid")
});

/// `Output stream #0:1 (audio): 430 frames encoded (440320 samples); 430 packets muxed (1720 bytes);`
static AUDIO_OUTPUT_LINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^\s*Output stream #\d+:\d+ \(audio\): \d+ frames encoded(?: \(\d+ samples\))?; \d+ packets muxed \(\d+ bytes\);\s*$",
    )
    .expect("audio output pattern is valid")
});

/// Parse a timestamp field, rejecting `NOPTS` and non-finite values
fn parse_pts_time(raw: &str, line: &str) -> Option<f64> {
    match raw.parse::<f64>() {
        Ok(value) if value.is_finite() => Some(value),
        _ => {
            debug!(field = "pts_time", value = raw, line, "Skipping malformed log line");
            None
        }
    }
}

/// Match a `keep`/`drop` line.
///
/// `None` when the line is unrelated or one of its fields does not parse.
pub fn parse_verdict_line(line: &str) -> Option<VerdictEvent> {
    let caps = VERDICT_LINE.captures(line)?;
    let verdict: Verdict = caps.get(1)?.as_str().parse().ok()?;
    let pts_time = parse_pts_time(caps.get(3)?.as_str(), line)?;
    Some(VerdictEvent { verdict, pts_time })
}

/// Match a `drop_count` line
pub fn parse_drop_count_line(line: &str) -> Option<DropCountEvent> {
    let caps = DROP_COUNT_LINE.captures(line)?;
    let raw_count = caps.get(1)?.as_str();
    let drop_count = match raw_count.parse::<i64>() {
        Ok(count) => count,
        Err(_) => {
            debug!(field = "drop_count", value = raw_count, line, "Skipping malformed log line");
            return None;
        }
    };
    let pts_time = parse_pts_time(caps.get(2)?.as_str(), line)?;
    Some(DropCountEvent {
        drop_count,
        pts_time,
    })
}

/// Tracks the two audio stream summaries ffmpeg prints at debug level
#[derive(Debug, Default, Clone, Copy)]
pub struct AudioDetector {
    input_seen: bool,
    output_seen: bool,
}

impl AudioDetector {
    /// Inspect a line that was not a decimation event
    pub fn observe(&mut self, line: &str) {
        if !self.input_seen && AUDIO_INPUT_LINE.is_match(line) {
            self.input_seen = true;
        }
        if !self.output_seen && AUDIO_OUTPUT_LINE.is_match(line) {
            self.output_seen = true;
        }
    }

    pub fn has_audio(&self) -> bool {
        self.input_seen && self.output_seen
    }
}
