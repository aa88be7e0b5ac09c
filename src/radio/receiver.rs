//! Receive loop core: the transceiver seam and frame classification.
//!
//! The loop shape is poll, sleep, repeat - a fixed 10 ms delay with no
//! backoff and no upper bound on the wait. If nothing ever transmits,
//! `recv_event` blocks forever; termination is the operator's job.

use std::thread;

use crate::config::RADIO_POLL_INTERVAL;
use crate::error::Result;
use crate::radio::decode::decode_frame;
use crate::radio::{DecodedMessage, RadioFrame};

/// Placeholder emitted when the transceiver flags data but the frame is
/// empty.
pub const EMPTY_FRAME_PLACEHOLDER: &str = "...";

/// Radio collaborator seam: availability polling plus a dynamic-length
/// frame read.
pub trait FrameSource {
    /// Non-blocking "data available" check on the reception pipe.
    fn frame_ready(&mut self) -> Result<bool>;

    /// Read the next frame. The length is whatever the hardware reports
    /// as the dynamic payload size, up to the 32-byte cap.
    fn read_frame(&mut self) -> Result<RadioFrame>;
}

/// One classified receive event.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RxEvent {
    /// The transceiver flagged data but the payload was empty.
    Empty,
    /// A frame, with its raw bytes and their printable-ASCII decoding.
    Message {
        raw: RadioFrame,
        text: DecodedMessage,
    },
}

impl RxEvent {
    /// Classify a freshly read frame.
    pub fn from_frame(raw: RadioFrame) -> Self {
        if raw.is_empty() {
            return RxEvent::Empty;
        }
        let text = decode_frame(&raw);
        RxEvent::Message { raw, text }
    }
}

/// Block until the source reports a frame, then read and classify it.
///
/// Polls at [`RADIO_POLL_INTERVAL`]; transport faults propagate
/// immediately and end the loop.
pub fn recv_event(source: &mut impl FrameSource) -> Result<RxEvent> {
    while !source.frame_ready()? {
        thread::sleep(RADIO_POLL_INTERVAL);
    }
    let frame = source.read_frame()?;
    Ok(RxEvent::from_frame(frame))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::mock::MockRadio;

    fn frame(bytes: &[u8]) -> RadioFrame {
        RadioFrame::from_slice(bytes).unwrap()
    }

    #[test]
    fn empty_frame_classifies_as_empty() {
        assert_eq!(RxEvent::from_frame(frame(&[])), RxEvent::Empty);
    }

    #[test]
    fn unprintable_frame_is_a_message_with_empty_text() {
        // A frame of pure padding is still a message, not silence; its
        // decoding just happens to be empty.
        match RxEvent::from_frame(frame(&[0x00, 0x01, 0xff])) {
            RxEvent::Message { raw, text } => {
                assert_eq!(raw.len(), 3);
                assert_eq!(text.as_str(), "");
            }
            other => panic!("expected message, got {other:?}"),
        }
    }

    #[test]
    fn recv_event_waits_out_quiet_polls() {
        let mut radio = MockRadio::new().ready_after(3);
        radio.queue_frame(b"OK");

        let event = recv_event(&mut radio).unwrap();
        assert!(radio.polls >= 4);
        match event {
            RxEvent::Message { text, .. } => assert_eq!(text.as_str(), "OK"),
            other => panic!("expected message, got {other:?}"),
        }
    }

    #[test]
    fn recv_event_propagates_transport_faults() {
        let mut radio = MockRadio::new();
        radio.fail_reads = true;
        radio.queue_frame(b"lost");

        assert_eq!(recv_event(&mut radio), Err(Error::Radio));
    }
}
