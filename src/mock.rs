//! Mock collaborators for host-side testing and development.
//!
//! `MockPanel` records every composite call so tests can assert on the
//! exact render sequence; `MockRadio` plays back scripted frames with a
//! configurable number of quiet polls first.

use std::collections::VecDeque;

use crate::error::{Error, Result};
use crate::radio::receiver::FrameSource;
use crate::radio::RadioFrame;
use crate::ui::composite::Composite;

/// One recorded composite call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PanelOp {
    AddText {
        text: String,
        origin: (u32, u32),
        id: String,
    },
    AddImage {
        path: String,
        origin: (u32, u32),
        size: (u32, u32),
        id: String,
    },
    WriteAll,
    RemoveText {
        id: String,
    },
    RemoveImage {
        id: String,
    },
    Clear,
}

/// Display collaborator that records calls instead of driving hardware.
#[derive(Default)]
pub struct MockPanel {
    /// Every call serviced so far, in order.
    pub ops: Vec<PanelOp>,
    /// Fail the next flush with a display fault.
    pub fail_write: bool,
}

impl MockPanel {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Composite for MockPanel {
    fn add_text(&mut self, text: &str, origin: (u32, u32), id: &str) -> Result<()> {
        self.ops.push(PanelOp::AddText {
            text: text.to_owned(),
            origin,
            id: id.to_owned(),
        });
        Ok(())
    }

    fn add_image(
        &mut self,
        path: &str,
        origin: (u32, u32),
        size: (u32, u32),
        id: &str,
    ) -> Result<()> {
        self.ops.push(PanelOp::AddImage {
            path: path.to_owned(),
            origin,
            size,
            id: id.to_owned(),
        });
        Ok(())
    }

    fn write_all(&mut self) -> Result<()> {
        self.ops.push(PanelOp::WriteAll);
        if self.fail_write {
            return Err(Error::Display);
        }
        Ok(())
    }

    fn remove_text(&mut self, id: &str) -> Result<()> {
        self.ops.push(PanelOp::RemoveText { id: id.to_owned() });
        Ok(())
    }

    fn remove_image(&mut self, id: &str) -> Result<()> {
        self.ops.push(PanelOp::RemoveImage { id: id.to_owned() });
        Ok(())
    }

    fn clear(&mut self) -> Result<()> {
        self.ops.push(PanelOp::Clear);
        Ok(())
    }
}

/// Frame source that plays back a scripted queue.
#[derive(Default)]
pub struct MockRadio {
    queue: VecDeque<RadioFrame>,
    quiet_polls: u32,
    /// Fail every read with a transceiver fault.
    pub fail_reads: bool,
    /// Number of `frame_ready` calls observed.
    pub polls: u32,
}

impl MockRadio {
    pub fn new() -> Self {
        Self::default()
    }

    /// Report "no data" for the first `polls` availability checks.
    pub fn ready_after(mut self, polls: u32) -> Self {
        self.quiet_polls = polls;
        self
    }

    /// Append a frame to the playback queue.
    ///
    /// Panics if `bytes` exceeds the hardware payload cap; mis-scripted
    /// tests should fail loudly.
    pub fn queue_frame(&mut self, bytes: &[u8]) {
        let frame = RadioFrame::from_slice(bytes).expect("frame fits payload cap");
        self.queue.push_back(frame);
    }
}

impl FrameSource for MockRadio {
    fn frame_ready(&mut self) -> Result<bool> {
        self.polls += 1;
        if self.quiet_polls > 0 {
            self.quiet_polls -= 1;
            return Ok(false);
        }
        Ok(!self.queue.is_empty())
    }

    fn read_frame(&mut self) -> Result<RadioFrame> {
        if self.fail_reads {
            return Err(Error::Radio);
        }
        self.queue.pop_front().ok_or(Error::Radio)
    }
}
