//! Button-driven e-paper wristband display.
//!
//! Samples the five input lines once per second and renders the matching
//! patient record (or clears the panel) on each press. Runs until
//! killed; any collaborator fault ends the process.

use std::thread;

use anyhow::Result;
use log::info;
use rppal::gpio::Gpio;
use rppal::spi::{Bus, Mode, SimpleHalSpiDevice, SlaveSelect, Spi};

use simops::config::{
    BUTTON_COUNT, DISPATCH_POLL_INTERVAL, EPD_BUSY_PIN, EPD_DC_PIN, EPD_RST_PIN, EPD_SPI_CLOCK_HZ,
};
use simops::ui::buttons::ButtonPanel;
use simops::ui::display::EpdPanel;
use simops::ui::dispatch_sample;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let gpio = Gpio::new()?;
    let buttons = ButtonPanel::new(&gpio)?;

    let spi = Spi::new(Bus::Spi0, SlaveSelect::Ss0, EPD_SPI_CLOCK_HZ, Mode::Mode0)?;
    let busy = gpio.get(EPD_BUSY_PIN)?.into_input();
    let dc = gpio.get(EPD_DC_PIN)?.into_output();
    let rst = gpio.get(EPD_RST_PIN)?.into_output();
    let mut panel = EpdPanel::new(SimpleHalSpiDevice::new(spi), busy, dc, rst)?;

    info!("wristband ready; watching {BUTTON_COUNT} buttons");

    loop {
        dispatch_sample(&mut panel, buttons.sample())?;
        thread::sleep(DISPATCH_POLL_INTERVAL);
    }
}
