//! Configuration loading and validation tests

use neck_motion_tracker::{
    config::{Config, TrackerConfig, EXAMPLE_CONFIG},
    constants::{DEPTH_BIAS, SAMPLE_WINDOW_FRAMES, STARTUP_GATE_FRAMES},
    skeleton::TrackingMode,
    tracker::NeckMotionTracker,
    Error,
};
use std::io::Write;

#[test]
fn test_round_trip_through_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("tracker.yaml");

    let mut config = Config::default();
    config.tracker.window_frames = 5;
    config.session.tracking_mode = TrackingMode::Seated;
    config.to_file(&path).unwrap();

    let loaded = Config::from_file(&path).unwrap();
    assert_eq!(loaded, config);
}

#[test]
fn test_partial_file_uses_defaults() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "tracker:\n  depth_tolerance: 12\nsession:\n  realtime: true").unwrap();

    let config = Config::from_file(file.path()).unwrap();
    assert_eq!(config.tracker.depth_tolerance, 12);
    assert_eq!(config.tracker.window_frames, SAMPLE_WINDOW_FRAMES);
    assert_eq!(config.tracker.startup_frames, STARTUP_GATE_FRAMES);
    assert_eq!(config.tracker.depth_bias, DEPTH_BIAS);
    assert!(config.session.realtime);
    assert_eq!(config.session.target_fps, 30);
    assert!(config.validate().is_ok());
}

#[test]
fn test_example_config_is_valid() {
    let config: Config = serde_yaml::from_str(EXAMPLE_CONFIG).unwrap();
    assert!(config.validate().is_ok());
}

#[test]
fn test_missing_file() {
    let result = Config::from_file("does/not/exist.yaml");
    assert!(matches!(result, Err(Error::IoError(_))));
}

#[test]
fn test_malformed_yaml() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "tracker: [not, a, map]").unwrap();

    match Config::from_file(file.path()) {
        Err(Error::ConfigError(msg)) => assert!(msg.contains("Failed to parse config")),
        other => panic!("Expected ConfigError, got {other:?}"),
    }
}

#[test]
fn test_depth_bias_out_of_range() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "tracker:\n  depth_bias: {}", i32::MAX).unwrap();

    let config = Config::from_file(file.path()).unwrap();
    match config.validate() {
        Err(Error::ConfigError(msg)) => assert!(msg.contains("Depth bias")),
        other => panic!("Expected ConfigError, got {other:?}"),
    }
    assert!(matches!(
        NeckMotionTracker::with_config(config.tracker),
        Err(Error::ConfigError(_))
    ));
}

#[test]
fn test_extreme_thresholds_rejected() {
    for config in [
        TrackerConfig {
            depth_bias: i32::MIN,
            ..TrackerConfig::default()
        },
        TrackerConfig {
            turn_threshold: i32::MIN,
            ..TrackerConfig::default()
        },
        TrackerConfig {
            calibration_max_xy: i32::MIN,
            ..TrackerConfig::default()
        },
        TrackerConfig {
            left_progress_max: i32::MAX,
            ..TrackerConfig::default()
        },
    ] {
        assert!(matches!(config.validate(), Err(Error::ConfigError(_))), "{config:?}");
    }
}

#[test]
fn test_validation_errors() {
    let mut config = Config::default();
    config.session.target_fps = 0;
    assert!(config.validate().is_err());

    let config = Config {
        tracker: TrackerConfig {
            depth_tolerance: -1,
            ..TrackerConfig::default()
        },
        ..Config::default()
    };
    match config.validate() {
        Err(Error::ConfigError(msg)) => assert!(msg.contains("Depth tolerance")),
        other => panic!("Expected ConfigError, got {other:?}"),
    }

    let config = TrackerConfig {
        calibration_max_xy: 25,
        ..TrackerConfig::default()
    };
    assert!(config.validate().is_err());
}
