//! Debounced button manager.
//!
//! Provides [`ButtonManager`], which owns a fixed table of buttons, samples
//! them through a [`DigitalInputs`] driver and counts presses.

use crate::config::{
    BUTTON_TABLE, DEFAULT_DEBOUNCE_MS, NO_PIN, TOTAL_BUTTONS, UNKNOWN_BUTTON_NAME,
};
use crate::event::{NoListener, PressEvent, PressListener};
use crate::input::DigitalInputs;
use crate::time::{TimeDuration, TimeInstant, TimeSource};
use crate::types::{Button, ButtonConfig, ConfigError, PinId, PressCount};

/// Polls a fixed set of active-low push buttons.
///
/// Every call to [`update`](Self::update) that comes more than the debounce
/// interval after the previously accepted one samples all buttons once.
/// Calls arriving sooner are ignored. A button counts as pressed when its
/// line reads low, and each released→pressed transition between two
/// accepted polls increments its counter and notifies the listener.
///
/// Queries by pin never fail: unknown pins report `false`, `0` or
/// `"UNKNOWN"`.
///
/// # Type Parameters
/// * `'t` - Lifetime of the time source reference
/// * `I` - Time instant type
/// * `D` - Digital input driver
/// * `T` - Time source implementation type
/// * `L` - Press listener
/// * `N` - Number of buttons in the table
pub struct ButtonManager<
    't,
    I: TimeInstant,
    D: DigitalInputs,
    T: TimeSource<I>,
    L: PressListener = NoListener,
    const N: usize = TOTAL_BUTTONS,
> {
    buttons: [Button; N],
    inputs: D,
    time_source: &'t T,
    listener: L,
    debounce_time: I::Duration,
    last_debounce: I,
}

impl<'t, I, D, T> ButtonManager<'t, I, D, T, NoListener, TOTAL_BUTTONS>
where
    I: TimeInstant,
    D: DigitalInputs,
    T: TimeSource<I>,
{
    /// Creates a manager for the reference six-button panel.
    ///
    /// # Errors
    /// Returns [`ConfigError::PinSetup`] if a line cannot be configured.
    pub fn new(
        inputs: D,
        time_source: &'t T,
        debounce_time: I::Duration,
    ) -> Result<Self, ConfigError<D::Error>> {
        Self::with_table(&BUTTON_TABLE, inputs, time_source, debounce_time, NoListener)
    }

    /// Same as [`new`](Self::new) with a 50 ms debounce interval.
    pub fn with_default_debounce(
        inputs: D,
        time_source: &'t T,
    ) -> Result<Self, ConfigError<D::Error>> {
        Self::new(
            inputs,
            time_source,
            I::Duration::from_millis(DEFAULT_DEBOUNCE_MS),
        )
    }
}

impl<'t, I, D, T, L, const N: usize> ButtonManager<'t, I, D, T, L, N>
where
    I: TimeInstant,
    D: DigitalInputs,
    T: TimeSource<I>,
    L: PressListener,
{
    /// Creates a manager for a custom button table.
    ///
    /// Validates the table, then configures every line as a pulled-up input
    /// in table order. All buttons start released with a zero counter, and
    /// the current time becomes the last poll time.
    ///
    /// # Errors
    /// * `DuplicatePin` - A pin is listed more than once
    /// * `EmptyName` - An entry has an empty label
    /// * `PinSetup` - The input driver rejected a line
    pub fn with_table(
        table: &[ButtonConfig; N],
        mut inputs: D,
        time_source: &'t T,
        debounce_time: I::Duration,
        listener: L,
    ) -> Result<Self, ConfigError<D::Error>> {
        validate_table(table)?;

        for entry in table {
            if let Err(error) = inputs.configure_input_pullup(entry.pin) {
                #[cfg(feature = "defmt")]
                defmt::warn!("failed to configure button {=str} on pin {=u8}", entry.name, entry.pin);
                return Err(ConfigError::PinSetup {
                    pin: entry.pin,
                    error,
                });
            }
        }

        Ok(Self {
            buttons: (*table).map(Button::released),
            inputs,
            time_source,
            listener,
            debounce_time,
            last_debounce: time_source.now(),
        })
    }

    /// Samples all buttons if the debounce interval has elapsed.
    ///
    /// Call this from the main loop more often than the debounce interval.
    /// A button held across several polls is counted once.
    pub fn update(&mut self) {
        let now = self.time_source.now();
        if self.debounce_time != I::Duration::ZERO
            && now.duration_since(self.last_debounce) <= self.debounce_time
        {
            return;
        }
        self.last_debounce = now;

        for button in self.buttons.iter_mut() {
            let current_state = self.inputs.read_digital(button.pin()).is_low();

            if button.apply(current_state) {
                let event = PressEvent {
                    pin: button.pin(),
                    name: button.name(),
                    count: button.press_count(),
                };

                #[cfg(feature = "defmt")]
                defmt::info!("BUTTON {=str} PRESSED", event.name);

                self.listener.on_press(&event);
            }
        }
    }

    /// Returns true if the button on `pin` is currently pressed.
    pub fn is_pressed(&self, pin: PinId) -> bool {
        self.button(pin).is_some_and(Button::is_pressed)
    }

    /// Returns the state of the button on `pin` as of the previous poll.
    pub fn was_pressed(&self, pin: PinId) -> bool {
        self.button(pin).is_some_and(Button::was_pressed)
    }

    /// Returns the press counter of the button on `pin`, or 0 if unknown.
    pub fn press_count(&self, pin: PinId) -> PressCount {
        self.button(pin).map_or(0, Button::press_count)
    }

    /// Sum of all press counters, saturating at `PressCount::MAX`.
    pub fn total_press_count(&self) -> PressCount {
        self.buttons
            .iter()
            .fold(0, |total: PressCount, b| total.saturating_add(b.press_count()))
    }

    /// Returns the label of the button on `pin`, or `"UNKNOWN"`.
    pub fn button_name(&self, pin: PinId) -> &'static str {
        self.button(pin).map_or(UNKNOWN_BUTTON_NAME, Button::name)
    }

    /// Number of managed buttons.
    pub fn button_count(&self) -> usize {
        N
    }

    /// Returns the pin at table position `index`, or 0 if out of range.
    pub fn button_pin(&self, index: usize) -> PinId {
        self.buttons.get(index).map_or(NO_PIN, Button::pin)
    }

    /// Clears every press counter. Pressed states are kept.
    pub fn reset_counters(&mut self) {
        self.buttons.iter_mut().for_each(Button::reset_count);
    }

    /// Looks up the button on `pin`.
    pub fn button(&self, pin: PinId) -> Option<&Button> {
        self.buttons.iter().find(|b| b.pin() == pin)
    }

    /// Returns the table position of `pin`.
    pub fn index_of(&self, pin: PinId) -> Option<usize> {
        self.buttons.iter().position(|b| b.pin() == pin)
    }

    /// All buttons in table order.
    pub fn buttons(&self) -> &[Button; N] {
        &self.buttons
    }

    pub fn debounce_time(&self) -> I::Duration {
        self.debounce_time
    }

    /// Time of the last accepted poll (construction time before the first).
    pub fn last_poll(&self) -> I {
        self.last_debounce
    }

    pub fn listener(&self) -> &L {
        &self.listener
    }

    pub fn listener_mut(&mut self) -> &mut L {
        &mut self.listener
    }

    /// Consumes the manager and returns the input driver and listener.
    pub fn release(self) -> (D, L) {
        (self.inputs, self.listener)
    }
}

fn validate_table<E, const N: usize>(table: &[ButtonConfig; N]) -> Result<(), ConfigError<E>> {
    for (index, entry) in table.iter().enumerate() {
        if entry.name.is_empty() {
            return Err(ConfigError::EmptyName { index });
        }
        if table[..index].iter().any(|earlier| earlier.pin == entry.pin) {
            return Err(ConfigError::DuplicatePin(entry.pin));
        }
    }
    Ok(())
}
