//! Unified error type for simops.
//!
//! All variants carry only fixed-size data; collaborator error details
//! are logged at the adapter that observed them, not threaded through.

use core::fmt;

/// Crate-wide result alias.
pub type Result<T> = core::result::Result<T, Error>;

/// Top-level error type used across both tools.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// An input line could not be acquired or read.
    Gpio,

    /// SPI transport to a peripheral failed.
    Spi,

    /// Transceiver configuration or frame read failed.
    Radio,

    /// Panel composition or refresh failed.
    Display,

    /// The barcode image could not be read from disk.
    AssetMissing,

    /// A received frame exceeded the 32-byte payload cap.
    Oversize,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            Error::Gpio => "GPIO line unavailable",
            Error::Spi => "SPI transfer failed",
            Error::Radio => "transceiver fault",
            Error::Display => "display refresh failed",
            Error::AssetMissing => "barcode asset missing",
            Error::Oversize => "frame exceeds payload cap",
        };
        f.write_str(msg)
    }
}

impl std::error::Error for Error {}

// Convenience conversions from collaborator error types

#[cfg(feature = "hardware")]
impl From<rppal::gpio::Error> for Error {
    fn from(_: rppal::gpio::Error) -> Self {
        Error::Gpio
    }
}

#[cfg(feature = "hardware")]
impl From<rppal::spi::Error> for Error {
    fn from(_: rppal::spi::Error) -> Self {
        Error::Spi
    }
}
