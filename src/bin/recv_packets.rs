//! nRF24L01+ packet receiver.
//!
//! Configures the transceiver, then waits for frames forever: raw bytes
//! first, printable-ASCII decoding second, a "..." placeholder for
//! empty frames. Runs until killed.

use anyhow::Result;
use log::info;
use rppal::gpio::Gpio;

use simops::radio::nrf24;
use simops::radio::receiver::{recv_event, RxEvent, EMPTY_FRAME_PLACEHOLDER};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let gpio = Gpio::new()?;
    let mut radio = nrf24::open(&gpio)?;

    loop {
        match recv_event(&mut radio)? {
            RxEvent::Empty => info!("{EMPTY_FRAME_PLACEHOLDER}"),
            RxEvent::Message { raw, text } => {
                info!("Received: {:?}", raw.as_slice());
                info!("Our message decodes to: {text}");
            }
        }
    }
}
