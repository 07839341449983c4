// Domain rules - Interval reconciliation policies

use crate::domain::model::*;

/// Business rules for discarding insignificant intervals
pub struct IntervalFilter;

impl IntervalFilter {
    /// Keep open-ended intervals and closed ones longer than `rules.min_duration`
    pub fn retain_significant(intervals: Vec<Interval>, rules: &IntervalRules) -> Vec<Interval> {
        intervals
            .into_iter()
            .filter(|interval| Self::is_significant(interval, rules))
            .collect()
    }

    /// Check a single interval against the duration threshold
    pub fn is_significant(interval: &Interval, rules: &IntervalRules) -> bool {
        match interval.duration() {
            Some(duration) => duration > rules.min_duration,
            None => true,
        }
    }
}

/// Business rules for merging neighbouring drop runs
pub struct RunMerger;

impl RunMerger {
    /// A run beginning at `pts_time` continues the previous run when it starts
    /// less than `merge_distance` seconds after the previous run's last timestamp.
    pub fn continues(previous: &Interval, pts_time: f64, rules: &IntervalRules) -> bool {
        let last_seen = previous.end.unwrap_or(previous.start);
        pts_time - last_seen < rules.merge_distance
    }
}

#[cfg(test)]
mod tests;
