// Unit tests for business rules

use super::*;

#[test]
fn test_short_intervals_are_dropped() {
    let rules = IntervalRules::default();
    let intervals = vec![
        Interval::closed(0.0, 1.0),
        Interval::closed(2.0, 2.5),
        Interval::closed(5.0, 6.01),
        Interval::open(30.0),
    ];

    let kept = IntervalFilter::retain_significant(intervals, &rules);
    assert_eq!(kept, vec![Interval::closed(5.0, 6.01), Interval::open(30.0)]);
}

#[test]
fn test_open_interval_always_significant() {
    let rules = IntervalRules {
        min_duration: 1000.0,
        ..IntervalRules::default()
    };
    assert!(IntervalFilter::is_significant(&Interval::open(999.0), &rules));
}

#[test]
fn test_custom_min_duration() {
    let rules = IntervalRules {
        min_duration: 0.0,
        ..IntervalRules::default()
    };
    assert!(IntervalFilter::is_significant(&Interval::closed(1.0, 1.2), &rules));
    assert!(!IntervalFilter::is_significant(&Interval::closed(1.0, 1.0), &rules));
}

#[test]
fn test_run_merge_distance() {
    let rules = IntervalRules::default();
    let run = Interval::closed(2.0, 3.5);
    assert!(RunMerger::continues(&run, 11.0, &rules));
    assert!(!RunMerger::continues(&run, 13.5, &rules));
}

#[test]
fn test_run_merge_uses_start_when_unterminated() {
    let rules = IntervalRules::default();
    let run = Interval::open(2.0);
    assert!(RunMerger::continues(&run, 11.9, &rules));
    assert!(!RunMerger::continues(&run, 12.0, &rules));
}
