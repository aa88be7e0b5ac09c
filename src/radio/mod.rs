//! Radio subsystem - nRF24L01+ packet reception.
//!
//! 1. **decode** - filters received payload bytes down to printable
//!    ASCII for display.
//! 2. **receiver** - the `FrameSource` seam and the blocking
//!    poll-until-available receive step.
//! 3. **nrf24** - hardware adapter applying the fixed transceiver
//!    parameters over SPI (`hardware` feature only).
//!
//! The transceiver reports each frame's length itself (dynamic payload
//! lengths), so frames are variable-length up to the 32-byte cap.

pub mod decode;
#[cfg(feature = "hardware")]
pub mod nrf24;
pub mod receiver;

use heapless::{String, Vec};

use crate::config::MAX_PAYLOAD_SIZE;

/// One received frame. The cap is the hardware payload limit, so a
/// well-behaved transceiver can never overflow this.
pub type RadioFrame = Vec<u8, MAX_PAYLOAD_SIZE>;

/// Printable-ASCII decoding of a frame; never longer than its frame.
pub type DecodedMessage = String<MAX_PAYLOAD_SIZE>;
