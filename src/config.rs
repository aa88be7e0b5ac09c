//! Application-wide constants and compile-time configuration.
//!
//! All pin assignments, timing parameters, radio settings, and display
//! layout constants live here so they can be tuned in one place.

use core::time::Duration;

// Buttons

/// Number of wristband buttons (four records + clear).
pub const BUTTON_COUNT: usize = 5;

/// BCM pin numbers for the five buttons, in button order SW1..SW5.
///
/// The lines read low while a button is held (active-low).
pub const BUTTON_PINS: [u8; BUTTON_COUNT] = [26, 19, 20, 16, 21];

/// Interval between input-line samples.
pub const DISPATCH_POLL_INTERVAL: Duration = Duration::from_secs(1);

// Display layout

/// Element id for the patient text block.
pub const TEXT_ELEMENT_ID: &str = "pID";

/// Element id for the barcode image.
pub const BARCODE_ELEMENT_ID: &str = "barcode";

/// Anchor for the patient text block.
pub const TEXT_ORIGIN: (u32, u32) = (0, 0);

/// Anchor for the barcode image.
pub const BARCODE_ORIGIN: (u32, u32) = (0, 77);

/// Barcode image dimensions (width, height).
///
/// A Code 128 barcode only stays scannable at about 7 characters at the
/// panel's resolution, so the asset is pre-rendered at exactly this size.
pub const BARCODE_SIZE: (u32, u32) = (200, 50);

/// Barcode asset shared by every record. One image per deployment; swap
/// the file to change the encoded id.
pub const BARCODE_IMAGE_PATH: &str = "/home/pi/Pictures/ABC123X.bmp";

// Radio

/// Interval between "data available" polls while waiting for a frame.
pub const RADIO_POLL_INTERVAL: Duration = Duration::from_millis(10);

/// RF channel (2400 + 0x6f MHz).
pub const RADIO_CHANNEL: u8 = 0x6f;

/// Hardware payload cap. Dynamic payload lengths are enabled, so each
/// received frame reports its own length up to this many bytes.
pub const MAX_PAYLOAD_SIZE: usize = 32;

/// Transmit pipe address.
pub const TX_PIPE_ADDRESS: [u8; 5] = [0xe7, 0xe7, 0xe7, 0xe7, 0xe7];

/// Receive pipe address (pipe 1).
pub const RX_PIPE_ADDRESS: [u8; 5] = [0xc2, 0xc2, 0xc2, 0xc2, 0xc2];

/// Pipe index the receiver listens on.
pub const RX_PIPE_INDEX: usize = 1;

/// Auto-retransmit delay, in 250 µs units.
pub const RADIO_RETRANSMIT_DELAY: u8 = 15;

/// Auto-retransmit attempt count.
pub const RADIO_RETRANSMIT_COUNT: u8 = 15;

// Radio wiring (BCM)

/// Chip-enable (CE) pin for the transceiver.
pub const RADIO_CE_PIN: u8 = 25;

/// Chip-select (CSN) pin for the transceiver (SPI0 CE0).
pub const RADIO_CSN_PIN: u8 = 8;

/// SPI clock for the transceiver (Hz). The nRF24L01+ tops out at 10 MHz;
/// 8 MHz leaves margin on long jumper wires.
pub const RADIO_SPI_CLOCK_HZ: u32 = 8_000_000;

// Display wiring (BCM), e-paper HAT defaults

/// Data/command select pin for the panel.
pub const EPD_DC_PIN: u8 = 22;

/// Reset pin for the panel.
pub const EPD_RST_PIN: u8 = 17;

/// Busy pin for the panel.
pub const EPD_BUSY_PIN: u8 = 24;

/// SPI clock for the panel (Hz).
pub const EPD_SPI_CLOCK_HZ: u32 = 4_000_000;
