//! Neck turn exercise recognition.
//!
//! [`NeckMotionTracker`] consumes one head/chest pair per tracked frame and
//! classifies the motion into phases: idle, turning right, turning left and
//! completed. Per-frame jitter is suppressed by sampling the angles once per
//! window of frames and holding them for the rest of the window.
//!
//! The XY difference is positive while the head turns right of the neutral
//! pose and negative while it turns left. Leaning forward or backward moves
//! the ZY difference away from zero; past the depth tolerance the exercise is
//! rejected and the user has to start over.

use crate::angle::{inclination_xy, inclination_zy};
use crate::config::TrackerConfig;
use crate::skeleton::Point3D;
use crate::Result;
use log::{info, trace};
use serde::Serialize;
use std::fmt;

/// Discrete state of the exercise
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    /// Waiting for the user to hold the neutral pose
    #[default]
    AwaitingReady,
    /// Baseline latched; only ever passed through on the way to `TurningRight`
    CalibratingReady,
    TurningRight,
    TurningLeft,
    Completed,
    /// Depth violation; only ever passed through on the way back to `AwaitingReady`
    Invalid,
}

impl Phase {
    /// Whether the user is mid-exercise
    #[must_use]
    pub const fn is_in_motion(self) -> bool {
        matches!(self, Self::TurningRight | Self::TurningLeft)
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::AwaitingReady => "awaiting ready",
            Self::CalibratingReady => "calibrating",
            Self::TurningRight => "turning right",
            Self::TurningLeft => "turning left",
            Self::Completed => "completed",
            Self::Invalid => "invalid",
        };
        f.write_str(name)
    }
}

/// Feedback shown on the head bone
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Feedback {
    /// Not yet calibrated
    #[default]
    Idle,
    /// Calibrated, or a turn was reached
    Ready,
    InProgress,
    /// Motion rejected
    Error,
    Success,
}

/// Named color hint for a display sink
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FeedbackColor {
    Red,
    Aqua,
    Blue,
    Green,
}

impl Feedback {
    /// Color used to draw the head bone
    #[must_use]
    pub const fn color(self) -> FeedbackColor {
        match self {
            Self::Idle | Self::Error => FeedbackColor::Red,
            Self::Ready => FeedbackColor::Aqua,
            Self::InProgress => FeedbackColor::Blue,
            Self::Success => FeedbackColor::Green,
        }
    }
}

/// Angle differences of the current window
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Telemetry {
    /// Baseline minus current frontal inclination
    pub angle_difference_xy: i32,
    /// Absolute depth deviation from the biased baseline
    pub angle_difference_z: i32,
}

impl Telemetry {
    /// Text for an on-screen label
    #[must_use]
    pub fn display_text(&self) -> String {
        format!("XY: {}°  Z: {}°", self.angle_difference_xy, self.angle_difference_z)
    }
}

/// Visibility of the user prompts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Prompts {
    /// Startup gate still counting
    pub please_wait: bool,
    /// Motion rejected; offer to repeat
    pub repeat: bool,
    /// Exercise completed
    pub done: bool,
}

/// A phase change produced by one update
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Transition {
    /// Phase before the update
    pub from: Phase,
    /// Transient phase entered and left within the same update
    pub through: Option<Phase>,
    /// Phase after the update
    pub to: Phase,
}

/// Everything a display sink needs for one frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FeedbackSignal {
    /// Phase after the update
    pub phase: Phase,
    /// Feedback kind
    pub feedback: Feedback,
    /// Color hint for the head bone
    pub color: FeedbackColor,
    /// Present only while turning
    pub telemetry: Option<Telemetry>,
    /// Prompt visibility
    pub prompts: Prompts,
    /// Present only on the update that changed the phase
    pub transition: Option<Transition>,
}

/// Mutable state owned by the tracker
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackerState {
    pub phase: Phase,
    /// Frontal baseline, latched when leaving `AwaitingReady`
    pub baseline_angle_xy: i32,
    /// Depth baseline, latched when leaving `AwaitingReady`
    pub baseline_angle_zy: i32,
    /// Position within the current sample window
    pub sample_counter: u32,
    /// Frontal inclination of the last window sample
    pub last_angle_xy: i32,
    /// Depth inclination of the last window sample
    pub last_angle_zy: i32,
    /// Frames elapsed in the startup gate
    pub initial_wait_counter: u32,
    /// Startup gate passed
    pub ready: bool,
    pub angle_difference_xy: i32,
    pub angle_difference_z: i32,
    pub feedback: Feedback,
    pub prompts: Prompts,
}

impl Default for TrackerState {
    fn default() -> Self {
        Self {
            phase: Phase::AwaitingReady,
            baseline_angle_xy: 0,
            baseline_angle_zy: 0,
            sample_counter: 0,
            last_angle_xy: 0,
            last_angle_zy: 0,
            initial_wait_counter: 0,
            ready: false,
            angle_difference_xy: 0,
            angle_difference_z: 0,
            feedback: Feedback::Idle,
            prompts: Prompts {
                please_wait: true,
                ..Prompts::default()
            },
        }
    }
}

/// Frame-driven neck turn state machine
#[derive(Debug, Clone)]
pub struct NeckMotionTracker {
    config: TrackerConfig,
    state: TrackerState,
}

impl Default for NeckMotionTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl NeckMotionTracker {
    /// Create a tracker with the default thresholds
    #[must_use]
    pub fn new() -> Self {
        Self {
            config: TrackerConfig::default(),
            state: TrackerState::default(),
        }
    }

    /// Create a tracker with configured thresholds
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the thresholds are inconsistent
    pub fn with_config(config: TrackerConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            state: TrackerState::default(),
        })
    }

    /// Thresholds in use
    #[must_use]
    pub fn config(&self) -> &TrackerConfig {
        &self.config
    }

    /// Read-only view of the state
    #[must_use]
    pub fn state(&self) -> &TrackerState {
        &self.state
    }

    /// Current phase
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.state.phase
    }

    /// Whether the exercise finished; further frames are ignored until `repeat`
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.state.phase == Phase::Completed
    }

    /// Current signal, without a transition
    #[must_use]
    pub fn signal(&self) -> FeedbackSignal {
        self.signal_with(None)
    }

    /// Feed one tracked frame
    pub fn update(&mut self, head: &Point3D, chest: &Point3D) -> FeedbackSignal {
        if self.is_complete() {
            return self.signal();
        }

        if !self.state.ready {
            self.state.initial_wait_counter += 1;
            if self.state.initial_wait_counter >= self.config.startup_frames {
                self.state.ready = true;
                self.state.prompts.please_wait = false;
                info!("Startup gate open after {} frames", self.state.initial_wait_counter);
            }
            return self.signal();
        }

        let refresh = self.state.sample_counter == 0;
        self.state.sample_counter = (self.state.sample_counter + 1) % self.config.window_frames;
        if !refresh {
            return self.signal();
        }

        self.sample_angles(head, chest);
        let transition = self.evaluate();
        self.signal_with(transition)
    }

    /// Restart the exercise, re-arming the startup gate
    pub fn repeat(&mut self) {
        info!("Exercise reset from {}", self.state.phase);
        self.state.sample_counter = 0;
        self.state.phase = Phase::AwaitingReady;
        self.state.initial_wait_counter = 0;
        self.state.ready = false;
        self.state.feedback = Feedback::Idle;
        self.state.prompts = Prompts {
            please_wait: true,
            repeat: false,
            done: false,
        };
    }

    /// Compute the window's angle sample and differences
    fn sample_angles(&mut self, head: &Point3D, chest: &Point3D) {
        // The chest against itself is a vertical line; it is the stability
        // probe every window compares against until the baseline is latched.
        let probe_xy = inclination_xy(chest, chest);
        let probe_zy = inclination_zy(chest, chest);

        let state = &mut self.state;
        if state.phase == Phase::AwaitingReady {
            state.baseline_angle_xy = probe_xy;
            state.baseline_angle_zy = probe_zy;
        }

        state.last_angle_xy = inclination_xy(chest, head);
        state.last_angle_zy = inclination_zy(chest, head);
        state.angle_difference_xy = state.baseline_angle_xy - state.last_angle_xy;
        state.angle_difference_z = (state.baseline_angle_zy - (state.last_angle_zy + self.config.depth_bias)).abs();

        trace!(
            "Window sample: xy={} zy={} diff_xy={} diff_z={}",
            state.last_angle_xy,
            state.last_angle_zy,
            state.angle_difference_xy,
            state.angle_difference_z
        );
    }

    /// Apply the transition table to the current window sample
    fn evaluate(&mut self) -> Option<Transition> {
        let cfg = &self.config;
        let dxy = self.state.angle_difference_xy;
        let dz = self.state.angle_difference_z;
        let from = self.state.phase;

        match from {
            Phase::AwaitingReady if dxy < cfg.calibration_max_xy && dz <= cfg.depth_tolerance => {
                self.state.phase = Phase::TurningRight;
                self.state.feedback = Feedback::Ready;
                self.state.prompts.repeat = false;
                Some(self.transition(from, Some(Phase::CalibratingReady)))
            }
            Phase::TurningRight | Phase::TurningLeft if dz > cfg.depth_tolerance => {
                self.state.phase = Phase::AwaitingReady;
                self.state.feedback = Feedback::Error;
                self.state.prompts.repeat = true;
                Some(self.transition(from, Some(Phase::Invalid)))
            }
            Phase::TurningRight if dxy >= cfg.turn_threshold => {
                self.state.phase = Phase::TurningLeft;
                self.state.feedback = Feedback::Ready;
                Some(self.transition(from, None))
            }
            Phase::TurningRight if dxy > cfg.right_progress_min => {
                self.state.feedback = Feedback::InProgress;
                None
            }
            Phase::TurningLeft if dxy <= -cfg.turn_threshold => {
                self.state.phase = Phase::Completed;
                self.state.feedback = Feedback::Success;
                self.state.prompts.done = true;
                Some(self.transition(from, None))
            }
            Phase::TurningLeft if dxy < cfg.left_progress_max => {
                self.state.feedback = Feedback::InProgress;
                None
            }
            _ => None,
        }
    }

    fn transition(&self, from: Phase, through: Option<Phase>) -> Transition {
        let to = self.state.phase;
        info!(
            "Phase {} -> {} (diff_xy={} diff_z={})",
            from, to, self.state.angle_difference_xy, self.state.angle_difference_z
        );
        Transition { from, through, to }
    }

    fn signal_with(&self, transition: Option<Transition>) -> FeedbackSignal {
        let state = &self.state;
        let telemetry = state.phase.is_in_motion().then_some(Telemetry {
            angle_difference_xy: state.angle_difference_xy,
            angle_difference_z: state.angle_difference_z,
        });

        FeedbackSignal {
            phase: state.phase,
            feedback: state.feedback,
            color: state.feedback.color(),
            telemetry,
            prompts: state.prompts,
            transition,
        }
    }
}
