//! E-paper panel wrapper - a named-element composition over the panel.
//!
//! Generic over the SPI implementation so callers pass in their HAL's
//! SPI device. Elements live in an in-memory store; `write_all`
//! re-renders the whole 200x200 frame and refreshes the panel, which on
//! e-paper takes on the order of a second.

use std::collections::HashMap;
use std::fs;

use embedded_graphics::image::Image;
use embedded_graphics::mono_font::ascii::FONT_6X10;
use embedded_graphics::mono_font::MonoTextStyleBuilder;
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics::text::{Baseline, Text};
use embedded_hal::spi::SpiDevice;
use epd_waveshare::color::Color;
use epd_waveshare::epd1in54::{Display1in54, Epd1in54};
use epd_waveshare::prelude::*;
use log::warn;
use rppal::gpio::{InputPin, OutputPin};
use rppal::hal::Delay;
use tinybmp::Bmp;

use crate::error::{Error, Result};
use crate::ui::composite::Composite;

struct TextElement {
    text: String,
    origin: (u32, u32),
}

struct ImageElement {
    data: Vec<u8>,
    origin: (u32, u32),
}

/// The physical panel plus its element store.
pub struct EpdPanel<SPI>
where
    SPI: SpiDevice,
{
    spi: SPI,
    delay: Delay,
    epd: Epd1in54<SPI, InputPin, OutputPin, OutputPin, Delay>,
    frame: Display1in54,
    texts: HashMap<String, TextElement>,
    images: HashMap<String, ImageElement>,
}

impl<SPI> EpdPanel<SPI>
where
    SPI: SpiDevice,
{
    /// Initialise the panel and start from an empty composition.
    pub fn new(mut spi: SPI, busy: InputPin, dc: OutputPin, rst: OutputPin) -> Result<Self> {
        let mut delay = Delay::new();
        let epd =
            Epd1in54::new(&mut spi, busy, dc, rst, &mut delay, None).map_err(|_| Error::Spi)?;
        let mut frame = Display1in54::default();
        frame.clear(Color::White).map_err(|_| Error::Display)?;
        Ok(Self {
            spi,
            delay,
            epd,
            frame,
            texts: HashMap::new(),
            images: HashMap::new(),
        })
    }

    fn render(&mut self) -> Result<()> {
        self.frame.clear(Color::White).map_err(|_| Error::Display)?;

        let style = MonoTextStyleBuilder::new()
            .font(&FONT_6X10)
            .text_color(Color::Black)
            .build();
        for element in self.texts.values() {
            let anchor = Point::new(element.origin.0 as i32, element.origin.1 as i32);
            Text::with_baseline(&element.text, anchor, style, Baseline::Top)
                .draw(&mut self.frame)
                .map_err(|_| Error::Display)?;
        }

        for element in self.images.values() {
            let bmp =
                Bmp::<BinaryColor>::from_slice(&element.data).map_err(|_| Error::AssetMissing)?;
            let anchor = Point::new(element.origin.0 as i32, element.origin.1 as i32);
            Image::new(&bmp, anchor)
                .draw(&mut self.frame.color_converted())
                .map_err(|_| Error::Display)?;
        }
        Ok(())
    }
}

impl<SPI> Composite for EpdPanel<SPI>
where
    SPI: SpiDevice,
{
    fn add_text(&mut self, text: &str, origin: (u32, u32), id: &str) -> Result<()> {
        self.texts.insert(
            id.to_owned(),
            TextElement {
                text: text.to_owned(),
                origin,
            },
        );
        Ok(())
    }

    fn add_image(
        &mut self,
        path: &str,
        origin: (u32, u32),
        size: (u32, u32),
        id: &str,
    ) -> Result<()> {
        let data = fs::read(path).map_err(|_| Error::AssetMissing)?;
        // Parse eagerly so a bad asset fails the insert, not the flush.
        let bmp = Bmp::<BinaryColor>::from_slice(&data).map_err(|_| Error::AssetMissing)?;
        if bmp.size() != Size::new(size.0, size.1) {
            warn!(
                "asset {} is {}x{}, expected {}x{}; drawing unscaled",
                path,
                bmp.size().width,
                bmp.size().height,
                size.0,
                size.1
            );
        }
        self.images.insert(id.to_owned(), ImageElement { data, origin });
        Ok(())
    }

    fn write_all(&mut self) -> Result<()> {
        self.render()?;
        self.epd
            .update_and_display_frame(&mut self.spi, self.frame.buffer(), &mut self.delay)
            .map_err(|_| Error::Spi)?;
        Ok(())
    }

    fn remove_text(&mut self, id: &str) -> Result<()> {
        self.texts.remove(id);
        Ok(())
    }

    fn remove_image(&mut self, id: &str) -> Result<()> {
        self.images.remove(id);
        Ok(())
    }

    fn clear(&mut self) -> Result<()> {
        self.texts.clear();
        self.images.clear();
        self.frame.clear(Color::White).map_err(|_| Error::Display)?;
        self.epd
            .clear_frame(&mut self.spi, &mut self.delay)
            .map_err(|_| Error::Spi)?;
        self.epd
            .display_frame(&mut self.spi, &mut self.delay)
            .map_err(|_| Error::Spi)?;
        Ok(())
    }
}
