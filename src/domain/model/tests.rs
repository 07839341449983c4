// Unit tests for domain models

use super::*;

#[test]
fn test_interval_duration() {
    assert_eq!(Interval::closed(2.0, 11.0).duration(), Some(9.0));
    assert_eq!(Interval::open(12.0).duration(), None);
    assert!(Interval::open(12.0).is_open());
    assert!(!Interval::closed(0.0, 5.0).is_open());
}

#[test]
fn test_interval_display() {
    assert_eq!(Interval::closed(0.0, 5.5).to_string(), "0.000-5.500");
    assert_eq!(Interval::open(12.0).to_string(), "12.000-end");
}

#[test]
fn test_verdict_from_str() {
    assert_eq!("keep".parse::<Verdict>().unwrap(), Verdict::Keep);
    assert_eq!("drop".parse::<Verdict>().unwrap(), Verdict::Drop);
    assert!("maybe".parse::<Verdict>().is_err());
}

#[test]
fn test_parse_strategy_parsing() {
    assert_eq!(ParseStrategy::parse("keep-drop").unwrap(), ParseStrategy::KeepDrop);
    assert_eq!(ParseStrategy::parse("DROP_COUNT").unwrap(), ParseStrategy::DropCount);
    assert!(ParseStrategy::parse("vdecimate").is_err());
    assert_eq!(ParseStrategy::default(), ParseStrategy::KeepDrop);
    assert_eq!(ParseStrategy::DropCount.to_string(), "drop-count");
}

#[test]
fn test_interval_rules_defaults() {
    let rules = IntervalRules::default();
    assert_eq!(rules.min_duration, 1.0);
    assert_eq!(rules.merge_distance, 10.0);
}

#[test]
fn test_phase_names() {
    assert_eq!(Phase::FilterCreation.to_string(), "filter creation");
    assert_eq!(Phase::FilterCreation.slug(), "filter_creation");
    assert_eq!(Phase::Decimate.slug(), "decimate");
}

#[test]
fn test_outcome_skip_threshold() {
    assert_eq!(
        RunOutcome::evaluate(2, Some(3)),
        RunOutcome::SkipInsufficientSegments {
            interval_count: 2,
            threshold: 3
        }
    );
    assert_eq!(
        RunOutcome::evaluate(3, Some(3)),
        RunOutcome::Proceed { interval_count: 3 }
    );
    assert_eq!(RunOutcome::evaluate(0, None), RunOutcome::Proceed { interval_count: 0 });
    assert!(RunOutcome::evaluate(0, Some(1)).is_skip());
}
