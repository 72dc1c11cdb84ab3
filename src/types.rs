//! Core types shared by the manager, the pin table and the event sink.

/// Identifier of a physical input line.
pub type PinId = u8;

/// Number of detected presses. Saturates at `u32::MAX`.
pub type PressCount = u32;

/// One entry of a static button table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ButtonConfig {
    /// Input line the button is wired to.
    pub pin: PinId,

    /// Human-readable label.
    pub name: &'static str,
}

impl ButtonConfig {
    /// Creates a table entry.
    pub const fn new(pin: PinId, name: &'static str) -> Self {
        Self { pin, name }
    }
}

/// Debounced state of a single button.
///
/// Records are created once by the manager and only their state fields change
/// afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Button {
    pin: PinId,
    name: &'static str,
    pressed: bool,
    previous_state: bool,
    pub(crate) press_count: PressCount,
}

impl Button {
    pub(crate) const fn released(config: ButtonConfig) -> Self {
        Self {
            pin: config.pin,
            name: config.name,
            pressed: false,
            previous_state: false,
            press_count: 0,
        }
    }

    /// Input line of this button.
    #[inline]
    pub fn pin(&self) -> PinId {
        self.pin
    }

    /// Label from the button table.
    #[inline]
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Debounced state as of the last accepted poll.
    #[inline]
    pub fn is_pressed(&self) -> bool {
        self.pressed
    }

    /// Debounced state kept for edge detection.
    #[inline]
    pub fn was_pressed(&self) -> bool {
        self.previous_state
    }

    /// Presses detected since construction or the last counter reset.
    #[inline]
    pub fn press_count(&self) -> PressCount {
        self.press_count
    }

    /// Applies one debounced sample. Returns `true` on a released→pressed edge.
    pub(crate) fn apply(&mut self, current_state: bool) -> bool {
        let rising = current_state && !self.previous_state;
        if rising {
            self.press_count = self.press_count.saturating_add(1);
        }

        self.pressed = current_state;
        self.previous_state = current_state;
        rising
    }

    pub(crate) fn reset_count(&mut self) {
        self.press_count = 0;
    }
}

/// Errors raised while building a [`ButtonManager`](crate::ButtonManager).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError<E> {
    /// The hardware refused to configure the line as a pulled-up input.
    PinSetup {
        /// Line that failed.
        pin: PinId,
        /// Error reported by the input driver.
        error: E,
    },

    /// The same line appears twice in the button table.
    DuplicatePin(PinId),

    /// A table entry has an empty label.
    EmptyName {
        /// Position of the entry in the table.
        index: usize,
    },
}

impl<E: core::fmt::Debug> core::fmt::Display for ConfigError<E> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ConfigError::PinSetup { pin, error } => {
                write!(f, "failed to configure pin {} as pull-up input: {:?}", pin, error)
            }
            ConfigError::DuplicatePin(pin) => {
                write!(f, "pin {} is assigned to more than one button", pin)
            }
            ConfigError::EmptyName { index } => {
                write!(f, "button at index {} has an empty name", index)
            }
        }
    }
}

#[cfg(feature = "std")]
impl<E: core::fmt::Debug> std::error::Error for ConfigError<E> {}
