//! Reference button table for the six-key front panel.

use crate::types::{ButtonConfig, PinId};

pub const PIN_MENU: PinId = 3;
pub const PIN_ESC: PinId = 2;
pub const PIN_UP: PinId = 5;
pub const PIN_DOWN: PinId = 13;
pub const PIN_RIGHT: PinId = 11;
pub const PIN_LEFT: PinId = 12;

/// Number of buttons in [`BUTTON_TABLE`].
pub const TOTAL_BUTTONS: usize = 6;

/// Button labels, in table order.
pub const BUTTON_NAMES: [&str; TOTAL_BUTTONS] = ["MENU", "ESC", "UP", "DOWN", "RIGHT", "LEFT"];

/// Pin and label of every button. Order is significant for index lookups.
pub const BUTTON_TABLE: [ButtonConfig; TOTAL_BUTTONS] = [
    ButtonConfig::new(PIN_MENU, BUTTON_NAMES[0]),
    ButtonConfig::new(PIN_ESC, BUTTON_NAMES[1]),
    ButtonConfig::new(PIN_UP, BUTTON_NAMES[2]),
    ButtonConfig::new(PIN_DOWN, BUTTON_NAMES[3]),
    ButtonConfig::new(PIN_RIGHT, BUTTON_NAMES[4]),
    ButtonConfig::new(PIN_LEFT, BUTTON_NAMES[5]),
];

/// Debounce interval used when none is given.
pub const DEFAULT_DEBOUNCE_MS: u64 = 50;

/// Name reported for pins that are not in the table.
pub const UNKNOWN_BUTTON_NAME: &str = "UNKNOWN";

/// Pin reported for out-of-range indices.
pub const NO_PIN: PinId = 0;
