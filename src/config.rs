//! Configuration management for the neck motion tracker

use crate::constants::{
    CALIBRATION_MAX_XY, DEPTH_BIAS, DEPTH_TOLERANCE, FPS, HALF_TURN_DEGREES, LEFT_PROGRESS_MAX, RIGHT_PROGRESS_MIN,
    SAMPLE_WINDOW_FRAMES, STARTUP_GATE_FRAMES, TURN_THRESHOLD,
};
use crate::skeleton::TrackingMode;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Application configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Gesture thresholds
    pub tracker: TrackerConfig,

    /// Frame pump settings
    pub session: SessionConfig,
}

/// Thresholds of the neck turn state machine, in degrees unless noted
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrackerConfig {
    /// Frames skipped after start or repeat
    pub startup_frames: u32,

    /// Frames per sample window
    pub window_frames: u32,

    /// Calibration requires the XY difference below this value
    pub calibration_max_xy: i32,

    /// Depth difference above this value rejects the motion
    pub depth_tolerance: i32,

    /// XY difference completing a turn
    pub turn_threshold: i32,

    /// Exclusive lower bound of the right turn progress band
    pub right_progress_min: i32,

    /// Exclusive upper bound of the left turn progress band
    pub left_progress_max: i32,

    /// Bias added to the current ZY angle
    pub depth_bias: i32,
}

/// Session (frame pump) configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Sensor tracking mode at startup
    pub tracking_mode: TrackingMode,

    /// Frame cadence used when pacing in real time
    pub target_fps: u32,

    /// Sleep between frames to match `target_fps`
    pub realtime: bool,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            startup_frames: STARTUP_GATE_FRAMES,
            window_frames: SAMPLE_WINDOW_FRAMES,
            calibration_max_xy: CALIBRATION_MAX_XY,
            depth_tolerance: DEPTH_TOLERANCE,
            turn_threshold: TURN_THRESHOLD,
            right_progress_min: RIGHT_PROGRESS_MIN,
            left_progress_max: LEFT_PROGRESS_MAX,
            depth_bias: DEPTH_BIAS,
        }
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            tracking_mode: TrackingMode::Default,
            target_fps: FPS,
            realtime: false,
        }
    }
}

impl TrackerConfig {
    /// Validate threshold consistency
    pub fn validate(&self) -> Result<()> {
        if self.window_frames == 0 {
            return Err(Error::ConfigError("Window size must be greater than 0".to_string()));
        }
        let angles = [
            ("Calibration bound", self.calibration_max_xy),
            ("Depth tolerance", self.depth_tolerance),
            ("Turn threshold", self.turn_threshold),
            ("Right progress bound", self.right_progress_min),
            ("Left progress bound", self.left_progress_max),
            ("Depth bias", self.depth_bias),
        ];
        for (name, value) in angles {
            if !(-HALF_TURN_DEGREES..=HALF_TURN_DEGREES).contains(&value) {
                return Err(Error::ConfigError(format!(
                    "{name} ({value}) must be within -{HALF_TURN_DEGREES}..={HALF_TURN_DEGREES} degrees"
                )));
            }
        }
        if self.depth_tolerance < 0 {
            return Err(Error::ConfigError("Depth tolerance must not be negative".to_string()));
        }
        if self.turn_threshold <= self.right_progress_min {
            return Err(Error::ConfigError(format!(
                "Turn threshold ({}) must exceed the right progress bound ({})",
                self.turn_threshold, self.right_progress_min
            )));
        }
        if self.calibration_max_xy >= self.turn_threshold {
            return Err(Error::ConfigError(format!(
                "Calibration bound ({}) must be below the turn threshold ({})",
                self.calibration_max_xy, self.turn_threshold
            )));
        }
        if self.left_progress_max <= -self.turn_threshold {
            return Err(Error::ConfigError(format!(
                "Left progress bound ({}) must exceed -{}",
                self.left_progress_max, self.turn_threshold
            )));
        }

        Ok(())
    }
}

impl Config {
    /// Load configuration from a YAML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| Error::IoError(e.to_string()))?;

        serde_yaml::from_str(&content).map_err(|e| Error::ConfigError(format!("Failed to parse config: {}", e)))
    }

    /// Save configuration to a YAML file
    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = serde_yaml::to_string(self)
            .map_err(|e| Error::ConfigError(format!("Failed to serialize config: {}", e)))?;

        std::fs::write(path, content).map_err(|e| Error::IoError(e.to_string()))?;

        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        self.tracker.validate()?;

        if self.session.target_fps == 0 {
            return Err(Error::ConfigError("Target FPS must be greater than 0".to_string()));
        }

        Ok(())
    }
}

/// Example configuration file content
pub const EXAMPLE_CONFIG: &str = r#"# Neck Motion Tracker Configuration

# Gesture thresholds (degrees unless noted)
tracker:
  startup_frames: 30
  window_frames: 10
  calibration_max_xy: 2
  depth_tolerance: 15
  turn_threshold: 25
  right_progress_min: 3
  left_progress_max: 22
  depth_bias: 10

# Frame pump
session:
  tracking_mode: "default"
  target_fps: 30
  realtime: false
"#;
