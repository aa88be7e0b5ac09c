//! User interface subsystem - e-paper panel + physical buttons.
//!
//! One dispatch pass per second: sample all five input lines, then
//! service every line that reads pressed, in line order. Renders go
//! through the [`composite::Composite`] collaborator so the policy can
//! be exercised on the host without a panel.
//!
//! ## Components
//!
//! - **Buttons**: five tactile switches, active-low, polled (no
//!   debouncing - a held button refreshes the panel every pass)
//! - **Panel**: 200x200 e-paper module via SPI, driven as a named-element
//!   composition

pub mod composite;
pub mod input_logic;

#[cfg(feature = "hardware")]
pub mod buttons;
#[cfg(feature = "hardware")]
pub mod display;

use log::info;

use crate::config::BUTTON_COUNT;
use crate::error::Result;
use crate::records::RECORDS;
use crate::ui::composite::{show_record, Composite};
use crate::ui::input_logic::actions_for_sample;

/// Action owed to one input line reading pressed in a sample.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ButtonAction {
    /// Render the record at this index in [`RECORDS`].
    ShowRecord(usize),
    /// Wipe the panel.
    ClearScreen,
}

/// Service one sample of the five line levels (`true` = high =
/// released).
///
/// Every pressed line is serviced within the same pass; each render
/// fully overwrites the previous one, so with several buttons held only
/// the last record stays visible. With nothing pressed the panel is left
/// untouched and the released diagnostic is emitted.
pub fn dispatch_sample(panel: &mut impl Composite, levels: [bool; BUTTON_COUNT]) -> Result<()> {
    let actions = actions_for_sample(levels);
    if actions.is_empty() {
        info!("released");
        return Ok(());
    }

    for action in actions {
        match action {
            ButtonAction::ShowRecord(index) => show_record(panel, &RECORDS[index])?,
            ButtonAction::ClearScreen => {
                info!("BUTTON5: Clear Screen");
                panel.clear()?;
            }
        }
    }
    Ok(())
}
