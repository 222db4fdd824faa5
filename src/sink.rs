//! Display sinks consuming tracker feedback.

use crate::tracker::FeedbackSignal;
use crate::Result;
use log::{debug, info, warn};
use std::io::Write;

/// Trait for anything presenting feedback to the user
pub trait FeedbackSink {
    /// Present the signal of one tracked frame
    fn present(&mut self, signal: &FeedbackSignal) -> Result<()>;
}

/// Collects every signal
impl FeedbackSink for Vec<FeedbackSignal> {
    fn present(&mut self, signal: &FeedbackSignal) -> Result<()> {
        self.push(*signal);
        Ok(())
    }
}

/// Logs phase and feedback changes
#[derive(Debug, Default)]
pub struct LogSink {
    last: Option<FeedbackSignal>,
}

impl LogSink {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl FeedbackSink for LogSink {
    fn present(&mut self, signal: &FeedbackSignal) -> Result<()> {
        let previous = self.last.replace(*signal);

        if let Some(transition) = signal.transition {
            info!("{} -> {}", transition.from, transition.to);
        }

        let changed = previous.is_none_or(|p| p.feedback != signal.feedback || p.prompts != signal.prompts);
        if changed {
            info!("Feedback {:?} ({:?})", signal.feedback, signal.color);
            if signal.prompts.please_wait {
                info!("Please wait...");
            }
            if signal.prompts.repeat {
                warn!("Motion rejected, press repeat to try again");
            }
            if signal.prompts.done {
                info!("Exercise completed");
            }
        }

        if let Some(telemetry) = signal.telemetry {
            debug!("{}", telemetry.display_text());
        }

        Ok(())
    }
}

/// Writes each signal as one JSON line
pub struct JsonLinesSink<W: Write> {
    writer: W,
}

impl<W: Write> JsonLinesSink<W> {
    /// Wrap a writer, e.g. stdout or a file
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Recover the writer
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> FeedbackSink for JsonLinesSink<W> {
    fn present(&mut self, signal: &FeedbackSignal) -> Result<()> {
        serde_json::to_writer(&mut self.writer, signal)?;
        self.writer.write_all(b"\n")?;
        Ok(())
    }
}
