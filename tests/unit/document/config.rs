use super::*;

#[test]
fn defaults_match_documented_values() {
    let c = PlanConfig::default();
    assert_eq!(c.group_duration_ms, 5000);
    assert_eq!(c.individual_duration_ms, 500);
    assert_eq!(c.stroke_fill_ratio, 0.75);
    assert_eq!(c.leading_margin_ms, 1000);
    assert_eq!(c.trailing_margin_ms, 1000);
    assert_eq!(c.min_total_duration_ms, 3000);
    assert_eq!(c.narration_pause_ms, 500);
    assert_eq!(c.speed_factor_bounds, (0.5, 2.0));
    assert!(c.validate().is_ok());
}

#[test]
fn empty_json_object_gives_defaults() {
    let c: PlanConfig = serde_json::from_str("{}").unwrap();
    assert_eq!(c.group_duration_ms, PlanConfig::default().group_duration_ms);
    assert_eq!(c.speed_factor_bounds, (0.5, 2.0));
}

#[test]
fn zero_durations_fail_validation() {
    let c = PlanConfig {
        group_duration_ms: 0,
        ..PlanConfig::default()
    };
    assert!(c.validate().is_err());

    let c = PlanConfig {
        individual_duration_ms: 0,
        ..PlanConfig::default()
    };
    assert!(c.validate().is_err());
}

#[test]
fn stroke_fill_ratio_must_be_in_unit_range() {
    for bad in [0.0, -0.5, 1.5, f64::NAN, f64::INFINITY] {
        let c = PlanConfig {
            stroke_fill_ratio: bad,
            ..PlanConfig::default()
        };
        assert!(c.validate().is_err(), "ratio {bad} should fail");
    }

    let c = PlanConfig {
        stroke_fill_ratio: 1.0,
        ..PlanConfig::default()
    };
    assert!(c.validate().is_ok());
}

#[test]
fn speed_bounds_must_be_ordered_and_positive() {
    for bad in [(2.0, 0.5), (0.0, 1.0), (-1.0, 1.0), (f64::NAN, 1.0)] {
        let c = PlanConfig {
            speed_factor_bounds: bad,
            ..PlanConfig::default()
        };
        assert!(c.validate().is_err(), "bounds {bad:?} should fail");
    }
}

#[test]
fn zero_margins_are_legal() {
    let c = PlanConfig {
        leading_margin_ms: 0,
        trailing_margin_ms: 0,
        min_total_duration_ms: 0,
        narration_pause_ms: 0,
        ..PlanConfig::default()
    };
    assert!(c.validate().is_ok());
}
