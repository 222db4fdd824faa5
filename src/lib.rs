//! Neck turn exercise recognition over skeletal tracking data.
//!
//! This library classifies a stream of head and chest joint positions from a
//! depth sensor into the phases of a neck left-right turn exercise:
//! - Line inclination between two joints in integer degrees
//! - A frame-driven state machine with startup gating and windowed sampling
//! - A session pump that filters untracked skeletons and forwards feedback
//!
//! The pipeline consists of:
//! 1. A frame source delivering skeleton frames (e.g. a JSON-lines recording)
//! 2. Extraction of the head and shoulder-center joints of a tracked skeleton
//! 3. Gesture evaluation once per 10-frame window
//! 4. A display sink presenting phase, color hint, telemetry and prompts
//!
//! # Examples
//!
//! ## Inclination
//!
//! ```
//! use neck_motion_tracker::angle::inclination_degrees;
//!
//! assert_eq!(inclination_degrees(0.0, 0.0, 1.0, 1.0), 45);
//! // Vertical lines saturate
//! assert_eq!(inclination_degrees(0.5, 0.0, 0.5, 1.0), 90);
//! ```
//!
//! ## Driving the tracker
//!
//! ```
//! use neck_motion_tracker::{skeleton::Point3D, tracker::{NeckMotionTracker, Phase}};
//!
//! let mut tracker = NeckMotionTracker::new();
//! let chest = Point3D::new(0.0, 0.3, 2.0);
//! let head = Point3D::new(0.0, 0.55, 2.05);
//!
//! // The first 30 frames only open the startup gate
//! for _ in 0..30 {
//!     let signal = tracker.update(&head, &chest);
//!     assert_eq!(signal.phase, Phase::AwaitingReady);
//! }
//!
//! let signal = tracker.update(&head, &chest);
//! println!("{} ({:?})", signal.phase, signal.color);
//!
//! // User pressed "repeat"
//! tracker.repeat();
//! assert_eq!(tracker.phase(), Phase::AwaitingReady);
//! ```
//!
//! ## Replaying a recording
//!
//! ```no_run
//! use neck_motion_tracker::{
//!     config::SessionConfig,
//!     session::Session,
//!     sink::LogSink,
//!     source::ReplaySource,
//!     tracker::NeckMotionTracker,
//! };
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let source = ReplaySource::open("demos/neck_turn.jsonl")?;
//! let (mut session, handle) = Session::new(source, LogSink::new(), NeckMotionTracker::new(), SessionConfig::default());
//!
//! // Any thread may request a repeat; it is applied before the next frame
//! handle.repeat()?;
//!
//! let summary = session.run()?;
//! println!("Completed {} times", summary.completions);
//! # Ok(())
//! # }
//! ```

/// Line inclination between two joints
pub mod angle;

/// Neck turn state machine
pub mod tracker;

/// Skeletal tracking data model
pub mod skeleton;

/// Frame sources (in-memory and recorded)
pub mod source;

/// Display sinks for tracker feedback
pub mod sink;

/// Frame pump and user controls
pub mod session;

/// Error types and result handling
pub mod error;

/// Constants used throughout the crate
pub mod constants;

/// Configuration management
pub mod config;

pub use error::{Error, Result};
