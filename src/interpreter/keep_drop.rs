//! Interpreter for explicit `keep`/`drop` verdict lines

use crate::domain::model::{Interval, LogSummary, Verdict};
use crate::interpreter::patterns::{parse_verdict_line, AudioDetector};
use crate::interpreter::LogInterpreter;

/// Opens an interval on the first `keep` after a drop and closes it on the
/// next `drop`. Repeated verdicts do not change state and no interval is
/// filtered, however short.
#[derive(Debug, Default, Clone)]
pub struct KeepDropInterpreter;

impl KeepDropInterpreter {
    pub fn new() -> Self {
        Self
    }
}

#[derive(Debug)]
struct Toggle {
    dropping: bool,
    intervals: Vec<Interval>,
}

impl Toggle {
    fn new() -> Self {
        Self {
            dropping: true,
            intervals: Vec::new(),
        }
    }

    fn apply(&mut self, verdict: Verdict, pts_time: f64) {
        match (verdict, self.dropping) {
            (Verdict::Keep, true) => {
                self.intervals.push(Interval::open(pts_time));
                self.dropping = false;
            }
            (Verdict::Drop, false) => {
                if let Some(current) = self.intervals.last_mut() {
                    current.end = Some(pts_time);
                }
                self.dropping = true;
            }
            _ => {}
        }
    }
}

impl LogInterpreter for KeepDropInterpreter {
    fn interpret<'a>(&self, lines: &mut dyn Iterator<Item = &'a str>) -> LogSummary {
        let mut toggle = Toggle::new();
        let mut audio = AudioDetector::default();

        for line in lines {
            match parse_verdict_line(line) {
                Some(event) => toggle.apply(event.verdict, event.pts_time),
                None => audio.observe(line),
            }
        }

        LogSummary {
            intervals: toggle.intervals,
            has_audio: audio.has_audio(),
        }
    }
}
