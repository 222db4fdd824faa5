//! Constants used throughout the tracker.
//!
//! The thresholds are empirically tuned against depth sensor noise. Changing
//! them needs re-validation against recorded sessions.

/// Nominal sensor frame rate
pub const FPS: u32 = 30;

/// Frames to skip after start or repeat before evaluating the gesture
pub const STARTUP_GATE_FRAMES: u32 = FPS;

/// Frames per sample window; angles are computed once per window
pub const SAMPLE_WINDOW_FRAMES: u32 = 10;

/// Inclination reported for a vertical line (undefined slope)
pub const VERTICAL_INCLINATION: i32 = 90;

/// Half turn, used to fold negative inclinations into [0, 180)
pub const HALF_TURN_DEGREES: i32 = 180;

/// Calibration requires the XY difference to stay below this value
pub const CALIBRATION_MAX_XY: i32 = 2;

/// Maximum tolerated depth (ZY) difference before the motion is rejected
pub const DEPTH_TOLERANCE: i32 = 15;

/// XY difference that completes a turn in either direction
pub const TURN_THRESHOLD: i32 = 25;

/// Lower bound (exclusive) of the in-progress band while turning right
pub const RIGHT_PROGRESS_MIN: i32 = 3;

/// Upper bound (exclusive) of the in-progress band while turning left
pub const LEFT_PROGRESS_MAX: i32 = 22;

/// Fixed bias added to the current ZY angle to correct depth sensor skew
pub const DEPTH_BIAS: i32 = 10;
