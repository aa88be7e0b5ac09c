//! Pure dispatch policy: one sample of line levels to an ordered action
//! list. Kept free of hardware types so it runs in host tests.

use heapless::Vec;

use crate::config::BUTTON_COUNT;
use crate::ui::ButtonAction;

/// Whether an active-low line level means the button is held.
pub fn is_pressed(level_high: bool) -> bool {
    !level_high
}

/// Map one sample of the five line levels (`true` = high = released) to
/// the actions owed this pass, in line order SW1..SW5. Lines 1-4 select
/// records; line 5 clears. An empty result means nothing was pressed.
pub fn actions_for_sample(levels: [bool; BUTTON_COUNT]) -> Vec<ButtonAction, BUTTON_COUNT> {
    let mut actions = Vec::new();
    for (line, &level) in levels.iter().enumerate() {
        if !is_pressed(level) {
            continue;
        }
        let action = if line == BUTTON_COUNT - 1 {
            ButtonAction::ClearScreen
        } else {
            ButtonAction::ShowRecord(line)
        };
        // one action per line, so capacity always suffices
        let _ = actions.push(action);
    }
    actions
}
