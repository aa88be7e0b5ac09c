//! GPIO input lines for the wristband buttons.
//!
//! Five physical buttons on fixed BCM pins, active-low. The lines are
//! acquired once at startup and sampled together once per dispatch
//! pass; there is no edge detection and no debouncing.

use rppal::gpio::{Gpio, InputPin};

use crate::config::{BUTTON_COUNT, BUTTON_PINS};
use crate::error::Result;

/// The five wristband input lines.
pub struct ButtonPanel {
    lines: [InputPin; BUTTON_COUNT],
}

impl ButtonPanel {
    /// Acquire every button line as a plain input.
    pub fn new(gpio: &Gpio) -> Result<Self> {
        let line = |pin: u8| -> Result<InputPin> { Ok(gpio.get(pin)?.into_input()) };
        Ok(Self {
            lines: [
                line(BUTTON_PINS[0])?,
                line(BUTTON_PINS[1])?,
                line(BUTTON_PINS[2])?,
                line(BUTTON_PINS[3])?,
                line(BUTTON_PINS[4])?,
            ],
        })
    }

    /// Sample all five line levels in line order (`true` = high =
    /// released).
    pub fn sample(&self) -> [bool; BUTTON_COUNT] {
        let mut levels = [true; BUTTON_COUNT];
        for (level, line) in levels.iter_mut().zip(&self.lines) {
            *level = line.is_high();
        }
        levels
    }
}
