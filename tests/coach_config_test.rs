// ABOUTME: Integration tests for coach configuration defaults, validation, and env overrides
// ABOUTME: Environment-mutating tests are serialized with serial_test
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use std::env;

use form_coach::config::{CoachConfig, ConfigError, FormThresholds, PhaseThresholds};
use form_coach::logging::{LogFormat, LoggingConfig};
use serial_test::serial;

const OVERRIDES: [&str; 8] = [
    "FORM_COACH_SMOOTHING_PROCESS_NOISE",
    "FORM_COACH_SMOOTHING_MEASUREMENT_NOISE",
    "FORM_COACH_SQUAT_DEPTH_ANGLE",
    "FORM_COACH_PUSH_UP_DEPTH_ANGLE",
    "FORM_COACH_LUNGE_BOTTOM_ANGLE",
    "FORM_COACH_PLANK_MIN_HOLD_SECONDS",
    "FORM_COACH_MINOR_ANGLE_DEVIATION",
    "FORM_COACH_MAJOR_ANGLE_DEVIATION",
];

fn clear_overrides() {
    for var in OVERRIDES {
        env::remove_var(var);
    }
}

// === Defaults ===

#[test]
fn test_defaults() {
    let config = CoachConfig::default();
    assert!((config.smoothing.process_noise - 0.01).abs() < f64::EPSILON);
    assert!((config.smoothing.measurement_noise - 0.1).abs() < f64::EPSILON);
    assert!((config.phase.squat_standing_angle - 160.0).abs() < f64::EPSILON);
    assert!((config.phase.squat_depth_angle - 90.0).abs() < f64::EPSILON);
    assert!((config.phase.lunge_bottom_angle - 100.0).abs() < f64::EPSILON);
    assert!((config.phase.lunge_returning_angle - 130.0).abs() < f64::EPSILON);
    assert!((config.phase.plank_min_hold_seconds - 10.0).abs() < f64::EPSILON);
    assert!((config.form.minor_angle_deviation - 10.0).abs() < f64::EPSILON);
    assert!((config.form.major_angle_deviation - 20.0).abs() < f64::EPSILON);
    assert!(config.validate().is_ok());
}

#[test]
fn test_partial_json_uses_defaults() {
    let config: CoachConfig =
        serde_json::from_str(r#"{"smoothing": {"process_noise": 0.05, "measurement_noise": 0.2}}"#)
            .unwrap();
    assert!((config.smoothing.process_noise - 0.05).abs() < f64::EPSILON);
    assert_eq!(config.phase, PhaseThresholds::default());
    assert_eq!(config.form, FormThresholds::default());
}

// === Validation ===

#[test]
fn test_non_positive_noise_is_rejected() {
    let mut config = CoachConfig::default();
    config.smoothing.process_noise = 0.0;
    assert!(matches!(
        config.validate(),
        Err(ConfigError::ValueOutOfRange(_))
    ));

    let mut config = CoachConfig::default();
    config.smoothing.measurement_noise = -1.0;
    assert!(config.validate().is_err());
}

#[test]
fn test_threshold_order_is_enforced() {
    let mut config = CoachConfig::default();
    config.phase.squat_depth_angle = 170.0;
    assert!(matches!(config.validate(), Err(ConfigError::InvalidRange(_))));

    let mut config = CoachConfig::default();
    config.phase.lunge_returning_angle = 90.0;
    assert!(matches!(config.validate(), Err(ConfigError::InvalidRange(_))));

    let mut config = CoachConfig::default();
    config.phase.plank_band_low = 210.0;
    assert!(matches!(config.validate(), Err(ConfigError::InvalidRange(_))));

    let mut config = CoachConfig::default();
    config.form.minor_angle_deviation = 25.0;
    assert!(matches!(config.validate(), Err(ConfigError::InvalidRange(_))));
}

#[test]
fn test_hold_time_and_margins_must_be_sane() {
    let mut config = CoachConfig::default();
    config.phase.plank_min_hold_seconds = 0.0;
    assert!(config.validate().is_err());

    let mut config = CoachConfig::default();
    config.form.plank_hip_margin = -0.01;
    assert!(config.validate().is_err());
}

#[test]
fn test_nan_thresholds_are_rejected() {
    let mut config = CoachConfig::default();
    config.phase.squat_depth_angle = f64::NAN;
    assert!(matches!(
        config.validate(),
        Err(ConfigError::ValueOutOfRange(_))
    ));

    let mut config = CoachConfig::default();
    config.form.minor_angle_deviation = f64::NAN;
    assert!(config.validate().is_err());

    let mut config = CoachConfig::default();
    config.phase.plank_band_high = f64::INFINITY;
    assert!(config.validate().is_err());

    let mut config = CoachConfig::default();
    config.form.plank_hip_margin = f64::NAN;
    assert!(config.validate().is_err());
}

// === Environment overrides ===

#[test]
#[serial]
fn test_load_without_overrides() {
    clear_overrides();
    assert_eq!(CoachConfig::load().unwrap(), CoachConfig::default());
}

#[test]
#[serial]
fn test_env_overrides_apply() {
    clear_overrides();
    env::set_var("FORM_COACH_SMOOTHING_PROCESS_NOISE", "0.02");
    env::set_var("FORM_COACH_PLANK_MIN_HOLD_SECONDS", "30");
    env::set_var("FORM_COACH_SQUAT_DEPTH_ANGLE", "100");

    let config = CoachConfig::load().unwrap();
    clear_overrides();

    assert!((config.smoothing.process_noise - 0.02).abs() < f64::EPSILON);
    assert!((config.phase.plank_min_hold_seconds - 30.0).abs() < f64::EPSILON);
    assert!((config.phase.squat_depth_angle - 100.0).abs() < f64::EPSILON);
}

#[test]
#[serial]
fn test_unparseable_override_is_rejected() {
    clear_overrides();
    env::set_var("FORM_COACH_MINOR_ANGLE_DEVIATION", "ten");
    let result = CoachConfig::load();
    clear_overrides();

    assert!(matches!(result, Err(ConfigError::Parse(_))));
}

#[test]
#[serial]
fn test_override_failing_validation_is_rejected() {
    clear_overrides();
    env::set_var("FORM_COACH_MAJOR_ANGLE_DEVIATION", "5");
    let result = CoachConfig::load();
    clear_overrides();

    assert!(matches!(result, Err(ConfigError::InvalidRange(_))));
}

#[test]
#[serial]
fn test_nan_override_is_rejected() {
    clear_overrides();
    env::set_var("FORM_COACH_SQUAT_DEPTH_ANGLE", "NaN");
    let result = CoachConfig::load();
    clear_overrides();

    assert!(matches!(result, Err(ConfigError::ValueOutOfRange(_))));

    env::set_var("FORM_COACH_MINOR_ANGLE_DEVIATION", "NaN");
    let result = CoachConfig::load();
    clear_overrides();

    assert!(result.is_err());
}

#[cfg(unix)]
#[test]
#[serial]
fn test_non_unicode_override_is_rejected() {
    use std::ffi::OsStr;
    use std::os::unix::ffi::OsStrExt;

    clear_overrides();
    env::set_var(
        "FORM_COACH_PLANK_MIN_HOLD_SECONDS",
        OsStr::from_bytes(&[0x66, 0x6f, 0x80]),
    );
    let result = CoachConfig::load();
    clear_overrides();

    assert!(matches!(result, Err(ConfigError::EnvVar(_))));
}

// === Logging configuration ===

#[test]
#[serial]
fn test_logging_config_from_env() {
    env::remove_var("SERVICE_NAME");
    env::set_var("LOG_FORMAT", "json");
    env::set_var("RUST_LOG", "debug");
    let config = LoggingConfig::from_env();
    env::remove_var("LOG_FORMAT");
    env::remove_var("RUST_LOG");

    assert_eq!(config.format, LogFormat::Json);
    assert_eq!(config.level, "debug");
    assert_eq!(config.service_name, "form-coach");

    let defaults = LoggingConfig::from_env();
    assert_eq!(defaults.format, LogFormat::Pretty);
    assert_eq!(defaults.level, "info");
}
