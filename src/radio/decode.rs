//! Printable-ASCII payload decoding.
//!
//! The transmitting side pads and null-terminates its messages, so a
//! frame usually carries control bytes alongside the text. Decoding
//! keeps only the printable range and drops everything else - dropped,
//! not substituted, so the output is never longer than the input.

use crate::radio::DecodedMessage;

/// Lowest byte value kept by the decoder (space).
pub const PRINTABLE_MIN: u8 = 0x20;

/// Highest byte value kept by the decoder (tilde).
pub const PRINTABLE_MAX: u8 = 0x7e;

/// Decode a frame into its printable-ASCII characters, in order.
pub fn decode_frame(frame: &[u8]) -> DecodedMessage {
    let mut text = DecodedMessage::new();
    for &byte in frame {
        if !(PRINTABLE_MIN..=PRINTABLE_MAX).contains(&byte) {
            continue;
        }
        if text.push(byte as char).is_err() {
            break;
        }
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_printable_byte_decodes_to_itself() {
        for byte in PRINTABLE_MIN..=PRINTABLE_MAX {
            let text = decode_frame(&[byte]);
            assert_eq!(text.len(), 1);
            assert_eq!(text.chars().next(), Some(byte as char));
        }
    }

    #[test]
    fn every_unprintable_byte_is_dropped() {
        for byte in (0..PRINTABLE_MIN).chain(PRINTABLE_MAX + 1..=u8::MAX) {
            assert_eq!(decode_frame(&[byte]).as_str(), "");
        }
    }

    #[test]
    fn mixed_payload_keeps_order() {
        let frame = [0x00, b'H', 0x01, b'i', 0xff, b'!', 0x7f];
        assert_eq!(decode_frame(&frame).as_str(), "Hi!");
    }

    #[test]
    fn output_never_longer_than_input() {
        let frames: [&[u8]; 4] = [
            b"hello",
            &[0x00; 32],
            &[b'a', 0x00, b'b'],
            &[],
        ];
        for frame in frames {
            assert!(decode_frame(frame).len() <= frame.len());
        }
    }

    #[test]
    fn empty_frame_decodes_to_empty_string() {
        assert_eq!(decode_frame(&[]).as_str(), "");
    }

    #[test]
    fn full_width_frame_decodes_whole_payload() {
        let frame = [b'x'; 32];
        assert_eq!(decode_frame(&frame).len(), 32);
    }
}
