//! nRF24L01+ transceiver setup - applies the fixed link parameters and
//! adapts the driver to the `FrameSource` seam.
//!
//! The link is configured to match the transmitting side exactly:
//! channel 0x6f, 2 Mbps, lowest PA level, acknowledgements off, dynamic
//! payload lengths on. With auto-ack disabled the 15 x 250 µs / 15-retry
//! retransmit policy is driver-internal and never observed here.

use embedded_nrf24l01::{Configuration, DataRate, Device, RxMode, NRF24L01};
use log::info;
use rppal::gpio::Gpio;
use rppal::spi::{Bus, Mode, SlaveSelect, Spi};

use crate::config::{
    MAX_PAYLOAD_SIZE, RADIO_CE_PIN, RADIO_CHANNEL, RADIO_CSN_PIN, RADIO_RETRANSMIT_COUNT,
    RADIO_RETRANSMIT_DELAY, RADIO_SPI_CLOCK_HZ, RX_PIPE_ADDRESS, RX_PIPE_INDEX, TX_PIPE_ADDRESS,
};
use crate::error::{Error, Result};
use crate::radio::receiver::FrameSource;
use crate::radio::RadioFrame;

/// The transceiver in receive mode, listening on pipe 1.
struct Nrf24Receiver<D: Device> {
    rx: RxMode<D>,
}

/// Acquire CE/CSN and the SPI bus, apply the link parameters, and enter
/// receive mode.
pub fn open(gpio: &Gpio) -> Result<impl FrameSource> {
    let ce = gpio.get(RADIO_CE_PIN)?.into_output();
    let csn = gpio.get(RADIO_CSN_PIN)?.into_output();
    let spi = Spi::new(
        Bus::Spi0,
        SlaveSelect::Ss0,
        RADIO_SPI_CLOCK_HZ,
        Mode::Mode0,
    )?;

    let mut device = NRF24L01::new(ce, csn, spi).map_err(|_| Error::Radio)?;

    device
        .set_frequency(RADIO_CHANNEL)
        .map_err(|_| Error::Radio)?;
    device
        .set_auto_retransmit(RADIO_RETRANSMIT_DELAY, RADIO_RETRANSMIT_COUNT)
        .map_err(|_| Error::Radio)?;
    // Lowest PA level; the transmitter sits on the same bench.
    device
        .set_rf(&DataRate::R2Mbps, 0)
        .map_err(|_| Error::Radio)?;
    device.set_auto_ack(&[false; 6]).map_err(|_| Error::Radio)?;

    let mut pipes = [false; 6];
    pipes[RX_PIPE_INDEX] = true;
    device
        .set_pipes_rx_enable(&pipes)
        .map_err(|_| Error::Radio)?;
    // None on every pipe = dynamic payload lengths.
    device
        .set_pipes_rx_lengths(&[None; 6])
        .map_err(|_| Error::Radio)?;

    device
        .set_tx_addr(&TX_PIPE_ADDRESS)
        .map_err(|_| Error::Radio)?;
    device
        .set_rx_addr(RX_PIPE_INDEX, &RX_PIPE_ADDRESS)
        .map_err(|_| Error::Radio)?;

    info!(
        "nRF24 ready: channel 0x{:02x}, 2 Mbps, dynamic payloads <= {} bytes",
        RADIO_CHANNEL, MAX_PAYLOAD_SIZE
    );
    info!(
        "  tx addr {:02x?}, rx pipe {} addr {:02x?}",
        TX_PIPE_ADDRESS, RX_PIPE_INDEX, RX_PIPE_ADDRESS
    );

    let rx = device.rx().map_err(|_| Error::Radio)?;
    Ok(Nrf24Receiver { rx })
}

impl<D: Device> FrameSource for Nrf24Receiver<D> {
    fn frame_ready(&mut self) -> Result<bool> {
        let pipe = self.rx.can_read().map_err(|_| Error::Radio)?;
        Ok(pipe.is_some())
    }

    fn read_frame(&mut self) -> Result<RadioFrame> {
        let payload = self.rx.read().map_err(|_| Error::Radio)?;
        RadioFrame::from_slice(payload.as_ref()).map_err(|_| Error::Oversize)
    }
}
