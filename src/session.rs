//! Frame pump driving the tracker.
//!
//! The session owns the tracker. User actions arrive from other threads
//! through a [`SessionHandle`] and are applied between frames, so the tracker
//! state is never shared.

use crate::config::SessionConfig;
use crate::sink::FeedbackSink;
use crate::skeleton::TrackingMode;
use crate::source::FrameSource;
use crate::tracker::{NeckMotionTracker, Phase};
use crate::{Error, Result};
use log::{debug, info};
use std::sync::mpsc::{self, Receiver, Sender, TryRecvError};
use std::time::{Duration, Instant};

/// User action forwarded to the session loop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    /// Restart the exercise
    Repeat,
    /// Change the sensor tracking mode
    SetTrackingMode(TrackingMode),
    /// End the session after the current frame
    Stop,
}

/// Cloneable sender of user actions
#[derive(Debug, Clone)]
pub struct SessionHandle {
    tx: Sender<Control>,
}

impl SessionHandle {
    /// Restart the exercise before the next frame
    ///
    /// # Errors
    ///
    /// Returns [`Error::SessionClosed`] if the session has been dropped
    pub fn repeat(&self) -> Result<()> {
        self.send(Control::Repeat)
    }

    /// Switch the source's tracking mode before the next frame
    ///
    /// # Errors
    ///
    /// Returns [`Error::SessionClosed`] if the session has been dropped
    pub fn set_tracking_mode(&self, mode: TrackingMode) -> Result<()> {
        self.send(Control::SetTrackingMode(mode))
    }

    /// End the run after the current frame
    ///
    /// # Errors
    ///
    /// Returns [`Error::SessionClosed`] if the session has been dropped
    pub fn stop(&self) -> Result<()> {
        self.send(Control::Stop)
    }

    fn send(&self, control: Control) -> Result<()> {
        self.tx.send(control).map_err(|_| Error::SessionClosed)
    }
}

/// Counters collected over a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SessionSummary {
    /// Frames pulled from the source
    pub frames: u64,
    /// Frames with a tracked skeleton
    pub tracked_frames: u64,
    /// Exercises completed
    pub completions: u32,
    /// Depth violations
    pub rejections: u32,
    /// Tracker phase when the run ended
    pub final_phase: Phase,
}

/// Owns a source, a sink and the tracker
pub struct Session<S: FrameSource, K: FeedbackSink> {
    source: S,
    sink: K,
    tracker: NeckMotionTracker,
    config: SessionConfig,
    controls: Receiver<Control>,
}

impl<S: FrameSource, K: FeedbackSink> Session<S, K> {
    /// Create a session and the handle used to control it
    pub fn new(source: S, sink: K, tracker: NeckMotionTracker, config: SessionConfig) -> (Self, SessionHandle) {
        let (tx, controls) = mpsc::channel();
        let session = Self {
            source,
            sink,
            tracker,
            config,
            controls,
        };
        (session, SessionHandle { tx })
    }

    /// The tracker driven by this session
    #[must_use]
    pub fn tracker(&self) -> &NeckMotionTracker {
        &self.tracker
    }

    /// Recover the sink, e.g. to inspect collected signals
    pub fn into_sink(self) -> K {
        self.sink
    }

    /// Pump frames until the source ends or a stop is requested
    pub fn run(&mut self) -> Result<SessionSummary> {
        info!("Session started in {:?} mode", self.config.tracking_mode);
        self.source.set_tracking_mode(self.config.tracking_mode)?;

        let frame_interval = self.frame_interval();
        let mut summary = SessionSummary::default();

        loop {
            let frame_start = Instant::now();
            if !self.apply_controls()? {
                info!("Stop requested");
                break;
            }

            let Some(frame) = self.source.next_frame()? else {
                debug!("End of frame stream");
                break;
            };
            summary.frames += 1;

            if let Some(pair) = frame.first_tracked() {
                summary.tracked_frames += 1;
                let signal = self.tracker.update(&pair.head, &pair.chest);
                if let Some(transition) = signal.transition {
                    match transition.to {
                        Phase::Completed => summary.completions += 1,
                        Phase::AwaitingReady if transition.through == Some(Phase::Invalid) => {
                            summary.rejections += 1;
                        }
                        _ => {}
                    }
                }
                self.sink.present(&signal)?;
            }

            if let Some(interval) = frame_interval {
                if let Some(remaining) = interval.checked_sub(frame_start.elapsed()) {
                    std::thread::sleep(remaining);
                }
            }
        }

        summary.final_phase = self.tracker.phase();
        info!(
            "Session ended: {} frames, {} tracked, {} completed, {} rejected",
            summary.frames, summary.tracked_frames, summary.completions, summary.rejections
        );
        Ok(summary)
    }

    /// Apply pending controls; returns false once a stop was requested
    fn apply_controls(&mut self) -> Result<bool> {
        loop {
            match self.controls.try_recv() {
                Ok(Control::Repeat) => self.tracker.repeat(),
                Ok(Control::SetTrackingMode(mode)) => {
                    info!("Tracking mode changed to {:?}", mode);
                    self.config.tracking_mode = mode;
                    self.source.set_tracking_mode(mode)?;
                }
                Ok(Control::Stop) => return Ok(false),
                // All handles dropped: keep pumping frames
                Err(TryRecvError::Empty | TryRecvError::Disconnected) => return Ok(true),
            }
        }
    }

    fn frame_interval(&self) -> Option<Duration> {
        (self.config.realtime && self.config.target_fps > 0)
            .then(|| Duration::from_secs_f64(1.0 / f64::from(self.config.target_fps)))
    }
}
