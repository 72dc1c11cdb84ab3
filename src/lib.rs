#![cfg_attr(not(feature = "std"), no_std)]
#![doc = include_str!("../README.md")]

//! # Core Concepts
//!
//! - **`ButtonManager`**: Owns a fixed table of buttons, debounces them by polling and counts presses
//! - **`Button`**: Debounced state and press counter of one input line
//! - **`ButtonConfig`**: A `(pin, name)` entry of the static button table
//! - **`DigitalInputs`**: Trait to implement for your GPIO driver
//! - **`TimeSource`**: Trait to implement for your timing system
//! - **`PressListener`**: Receives a `PressEvent` for every detected press
//! - **`PressLog`**: Bounded listener that records the most recent presses
//!
//! Buttons are active-low: lines are configured with pull-ups, so a pressed
//! button reads `Level::Low`.

pub mod config;
pub mod event;
pub mod input;
pub mod manager;
pub mod time;
pub mod types;

pub use config::{
    BUTTON_NAMES, BUTTON_TABLE, DEFAULT_DEBOUNCE_MS, PIN_DOWN, PIN_ESC, PIN_LEFT, PIN_MENU,
    PIN_RIGHT, PIN_UP, TOTAL_BUTTONS, UNKNOWN_BUTTON_NAME,
};
pub use event::{NoListener, PressEvent, PressListener, PressLog};
#[cfg(feature = "embedded-hal")]
pub use input::{HalInputs, UnboundPin};
pub use input::{DigitalInputs, Level};
pub use manager::ButtonManager;
pub use time::{TimeDuration, TimeInstant, TimeSource};
pub use types::{Button, ButtonConfig, ConfigError, PinId, PressCount};
