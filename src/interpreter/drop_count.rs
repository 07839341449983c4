//! Interpreter for `drop_count` annotated lines
//!
//! `drop_count:-1` starts a new run, `drop_count:1` extends the current one.
//! The finished runs are handed on as the intervals to retain: with the
//! filter thresholds this dialect is used with, the runs line up with the
//! ranges worth keeping.

use tracing::trace;

use crate::domain::model::{Interval, IntervalRules, LogSummary};
use crate::domain::rules::{IntervalFilter, RunMerger};
use crate::interpreter::patterns::{parse_drop_count_line, AudioDetector};
use crate::interpreter::LogInterpreter;

const RUN_START: i64 = -1;
const RUN_STEP: i64 = 1;

/// Groups drop-count annotations into runs
#[derive(Debug, Default, Clone)]
pub struct DropCountInterpreter {
    rules: IntervalRules,
}

impl DropCountInterpreter {
    pub fn new(rules: IntervalRules) -> Self {
        Self { rules }
    }

    fn apply(&self, runs: &mut Vec<Interval>, drop_count: i64, pts_time: f64) {
        match drop_count {
            RUN_START => {
                if let Some(previous) = runs.last_mut() {
                    if RunMerger::continues(previous, pts_time, &self.rules) {
                        trace!(pts_time, "Merging drop run into previous one");
                        previous.end = Some(pts_time);
                        return;
                    }
                    // Only the final run may stay open
                    if previous.end.is_none() {
                        previous.end = Some(previous.start);
                    }
                }
                runs.push(Interval::open(pts_time));
            }
            RUN_STEP => {
                if let Some(current) = runs.last_mut() {
                    current.end = Some(pts_time);
                }
            }
            _ => {}
        }
    }
}

impl LogInterpreter for DropCountInterpreter {
    fn interpret<'a>(&self, lines: &mut dyn Iterator<Item = &'a str>) -> LogSummary {
        let mut runs: Vec<Interval> = Vec::new();
        let mut audio = AudioDetector::default();

        for line in lines {
            match parse_drop_count_line(line) {
                Some(event) => self.apply(&mut runs, event.drop_count, event.pts_time),
                None => audio.observe(line),
            }
        }

        LogSummary {
            intervals: IntervalFilter::retain_significant(runs, &self.rules),
            has_audio: audio.has_audio(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(drop_count: i64, pts_time: f64) -> String {
        format!("[vdecimate] drop_count:{} pts_time:{}", drop_count, pts_time)
    }

    fn run(events: &[(i64, f64)]) -> Vec<Interval> {
        let text = events
            .iter()
            .map(|(count, pts)| line(*count, *pts))
            .collect::<Vec<_>>()
            .join("\n");
        DropCountInterpreter::default().interpret_text(&text).intervals
    }

    #[test]
    fn test_close_runs_are_merged() {
        let intervals = run(&[(-1, 2.0), (1, 3.5), (-1, 11.0)]);
        assert_eq!(intervals, vec![Interval::closed(2.0, 11.0)]);
    }

    #[test]
    fn test_unterminated_runs_merge_within_distance() {
        let intervals = run(&[(-1, 0.0), (-1, 9.99)]);
        assert_eq!(intervals, vec![Interval::closed(0.0, 9.99)]);
    }

    #[test]
    fn test_distant_runs_stay_separate() {
        let intervals = run(&[(-1, 0.0), (1, 5.0), (-1, 15.0), (1, 20.0)]);
        assert_eq!(
            intervals,
            vec![Interval::closed(0.0, 5.0), Interval::closed(15.0, 20.0)]
        );
    }

    #[test]
    fn test_trailing_run_without_end_is_open() {
        let intervals = run(&[(-1, 0.0), (1, 4.0), (-1, 30.0)]);
        assert_eq!(intervals, vec![Interval::closed(0.0, 4.0), Interval::open(30.0)]);
    }

    #[test]
    fn test_step_overwrites_existing_end() {
        let intervals = run(&[(-1, 0.0), (1, 2.0), (1, 3.0), (1, 6.5)]);
        assert_eq!(intervals, vec![Interval::closed(0.0, 6.5)]);
    }

    #[test]
    fn test_short_runs_are_discarded() {
        let intervals = run(&[(-1, 0.0), (1, 1.0), (-1, 20.0), (1, 20.5), (-1, 40.0), (1, 42.0)]);
        assert_eq!(intervals, vec![Interval::closed(40.0, 42.0)]);
    }

    #[test]
    fn test_dangling_run_is_closed_and_discarded() {
        let intervals = run(&[(-1, 0.0), (-1, 25.0), (1, 30.0)]);
        assert_eq!(intervals, vec![Interval::closed(25.0, 30.0)]);
    }

    #[test]
    fn test_steps_before_any_run_are_ignored() {
        let intervals = run(&[(1, 0.5), (1, 0.7), (0, 1.0), (-1, 3.0), (1, 8.0)]);
        assert_eq!(intervals, vec![Interval::closed(3.0, 8.0)]);
    }

    #[test]
    fn test_custom_rules() {
        let interpreter = DropCountInterpreter::new(IntervalRules {
            min_duration: 0.1,
            merge_distance: 1.0,
        });
        let text = [line(-1, 0.0), line(1, 0.5), line(-1, 2.0), line(1, 2.5)].join("\n");
        assert_eq!(
            interpreter.interpret_text(&text).intervals,
            vec![Interval::closed(0.0, 0.5), Interval::closed(2.0, 2.5)]
        );
    }

    #[test]
    fn test_audio_summaries_are_detected() {
        let audio_in = "  Input stream #0:1 (audio): 430 packets read (6934 bytes); 430 frames decoded (440320 samples); ";
        let audio_out = "  Output stream #0:1 (audio): 430 frames encoded (440320 samples); 430 packets muxed (1720 bytes); ";
        let runs = [line(-1, 2.0), line(1, 3.5), line(-1, 11.0)];

        let both = [runs.join("\n"), audio_in.to_string(), audio_out.to_string()].join("\n");
        let summary = DropCountInterpreter::default().interpret_text(&both);
        assert!(summary.has_audio);
        assert_eq!(summary.intervals, vec![Interval::closed(2.0, 11.0)]);

        let input_only = [runs.join("\n"), audio_in.to_string()].join("\n");
        assert!(!DropCountInterpreter::default().interpret_text(&input_only).has_audio);

        let output_only = [audio_out.to_string(), runs.join("\n")].join("\n");
        assert!(!DropCountInterpreter::default().interpret_text(&output_only).has_audio);
    }

    #[test]
    fn test_empty_log_yields_no_intervals() {
        let summary = DropCountInterpreter::default().interpret_text("");
        assert!(summary.intervals.is_empty());
        let summary = DropCountInterpreter::default().interpret_text("frame=1\nno drops here\n");
        assert!(summary.intervals.is_empty());
    }
}
