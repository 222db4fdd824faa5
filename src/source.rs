//! Frame sources feeding the session.
//!
//! A recording is a JSON-lines file with one [`SkeletonFrame`] per line.

use crate::skeleton::{SkeletonFrame, TrackingMode};
use crate::{Error, Result};
use log::debug;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Trait for anything delivering skeleton frames in arrival order
pub trait FrameSource {
    /// Next frame, or `None` at end of stream
    fn next_frame(&mut self) -> Result<Option<SkeletonFrame>>;

    /// Switch between full-body and seated tracking
    fn set_tracking_mode(&mut self, _mode: TrackingMode) -> Result<()> {
        Ok(())
    }
}

/// In-memory source, mostly for tests
pub struct MemorySource {
    frames: std::vec::IntoIter<SkeletonFrame>,
    mode: TrackingMode,
}

impl MemorySource {
    /// Serve the frames in order
    #[must_use]
    pub fn new(frames: Vec<SkeletonFrame>) -> Self {
        Self {
            frames: frames.into_iter(),
            mode: TrackingMode::Default,
        }
    }
}

impl FrameSource for MemorySource {
    fn next_frame(&mut self) -> Result<Option<SkeletonFrame>> {
        Ok(self.frames.next().map(|frame| restrict_frame(frame, self.mode)))
    }

    fn set_tracking_mode(&mut self, mode: TrackingMode) -> Result<()> {
        self.mode = mode;
        Ok(())
    }
}

/// Replays recorded frames from JSON lines
pub struct ReplaySource<R> {
    reader: R,
    line: usize,
    buffer: String,
    mode: TrackingMode,
}

impl ReplaySource<BufReader<File>> {
    /// Open a recording file
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        debug!("Opening recording {}", path.display());
        let file = File::open(path)?;
        Ok(Self::from_reader(BufReader::new(file)))
    }
}

impl<R: BufRead> ReplaySource<R> {
    /// Replay from any buffered reader
    pub fn from_reader(reader: R) -> Self {
        Self {
            reader,
            line: 0,
            buffer: String::new(),
            mode: TrackingMode::Default,
        }
    }

    /// Lines consumed so far
    #[must_use]
    pub fn line(&self) -> usize {
        self.line
    }
}

impl<R: BufRead> FrameSource for ReplaySource<R> {
    fn next_frame(&mut self) -> Result<Option<SkeletonFrame>> {
        loop {
            self.buffer.clear();
            if self.reader.read_line(&mut self.buffer)? == 0 {
                return Ok(None);
            }
            self.line += 1;

            let text = self.buffer.trim();
            if text.is_empty() {
                continue;
            }

            let frame: SkeletonFrame = serde_json::from_str(text).map_err(|e| Error::Replay {
                line: self.line,
                message: e.to_string(),
            })?;
            return Ok(Some(restrict_frame(frame, self.mode)));
        }
    }

    fn set_tracking_mode(&mut self, mode: TrackingMode) -> Result<()> {
        debug!("Replay tracking mode set to {:?}", mode);
        self.mode = mode;
        Ok(())
    }
}

fn restrict_frame(mut frame: SkeletonFrame, mode: TrackingMode) -> SkeletonFrame {
    for skeleton in &mut frame.skeletons {
        skeleton.restrict_to(mode);
    }
    frame
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    const RECORDING: &str = r#"{"timestamp_ms":0,"skeletons":[]}

{"timestamp_ms":33,"skeletons":[{"tracking_state":"tracked","joints":[{"joint_type":"head","position":{"x":0.0,"y":0.5,"z":2.0},"tracking_state":"tracked"},{"joint_type":"knee_left","position":{"x":0.0,"y":-0.5,"z":2.0},"tracking_state":"tracked"}]}]}
"#;

    #[test]
    fn test_replay_skips_blank_lines() {
        let mut source = ReplaySource::from_reader(Cursor::new(RECORDING));
        let first = source.next_frame().unwrap().unwrap();
        assert_eq!(first.timestamp_ms, 0);
        let second = source.next_frame().unwrap().unwrap();
        assert_eq!(second.timestamp_ms, 33);
        assert_eq!(source.line(), 3);
        assert!(source.next_frame().unwrap().is_none());
    }

    #[test]
    fn test_replay_reports_bad_line() {
        let mut source = ReplaySource::from_reader(Cursor::new("{\"timestamp_ms\":0}\nnot json\n"));
        assert!(source.next_frame().unwrap().is_some());
        match source.next_frame() {
            Err(Error::Replay { line, .. }) => assert_eq!(line, 2),
            other => panic!("Expected replay error, got {other:?}"),
        }
    }

    #[test]
    fn test_replay_seated_mode() {
        let mut source = ReplaySource::from_reader(Cursor::new(RECORDING));
        source.set_tracking_mode(TrackingMode::Seated).unwrap();
        source.next_frame().unwrap();
        let frame = source.next_frame().unwrap().unwrap();
        assert_eq!(frame.skeletons[0].joints.len(), 1);
    }

    #[test]
    fn test_memory_source() {
        let mut source = MemorySource::new(vec![SkeletonFrame::default(); 2]);
        assert!(source.next_frame().unwrap().is_some());
        assert!(source.next_frame().unwrap().is_some());
        assert!(source.next_frame().unwrap().is_none());
    }
}
