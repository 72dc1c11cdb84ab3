//! Digital input abstraction.
//!
//! Provides the [`DigitalInputs`] trait the manager samples through, and with
//! the `embedded-hal` feature, [`HalInputs`] which adapts a set of
//! `embedded_hal::digital::InputPin` objects.

use crate::types::PinId;

/// Logic level of an input line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Level {
    High,
    Low,
}

impl Level {
    /// Returns true for [`Level::Low`].
    #[inline]
    pub fn is_low(self) -> bool {
        self == Level::Low
    }

    /// Returns true for [`Level::High`].
    #[inline]
    pub fn is_high(self) -> bool {
        self == Level::High
    }
}

impl From<bool> for Level {
    /// Maps a raw line reading (`true` = electrically high) to a level.
    ///
    /// This is not a pressed state: with pull-ups, a pressed button reads
    /// `false` / [`Level::Low`].
    fn from(high: bool) -> Self {
        if high { Level::High } else { Level::Low }
    }
}

/// Trait for abstracting the board's digital input lines.
///
/// Implement this for your GPIO driver. Buttons are wired active-low: the
/// line is pulled up, so a released button reads [`Level::High`] and a pressed
/// one reads [`Level::Low`].
pub trait DigitalInputs {
    /// Error reported when a line cannot be configured.
    type Error: core::fmt::Debug;

    /// Configures `pin` as an input with the internal pull-up enabled.
    fn configure_input_pullup(&mut self, pin: PinId) -> Result<(), Self::Error>;

    /// Samples the raw level of `pin`.
    ///
    /// This method cannot fail. Implementations must settle read errors
    /// themselves, preferably by reporting [`Level::High`] (released).
    fn read_digital(&mut self, pin: PinId) -> Level;
}

impl<D: DigitalInputs + ?Sized> DigitalInputs for &mut D {
    type Error = D::Error;

    fn configure_input_pullup(&mut self, pin: PinId) -> Result<(), Self::Error> {
        (**self).configure_input_pullup(pin)
    }

    fn read_digital(&mut self, pin: PinId) -> Level {
        (**self).read_digital(pin)
    }
}

#[cfg(feature = "embedded-hal")]
pub use hal::{HalInputs, UnboundPin};

#[cfg(feature = "embedded-hal")]
mod hal {
    use super::{DigitalInputs, Level};
    use crate::types::PinId;
    use embedded_hal::digital::InputPin;

    /// Configuration failed because no pin object is bound to the id.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    #[cfg_attr(feature = "defmt", derive(defmt::Format))]
    pub struct UnboundPin(pub PinId);

    /// Binds pin ids to `embedded-hal` input pins.
    ///
    /// HALs configure pull-ups through their type-state API, so the pins must
    /// already be pulled-up inputs when handed over. `configure_input_pullup`
    /// only checks that the id is bound.
    pub struct HalInputs<P: InputPin, const N: usize> {
        lines: [(PinId, P); N],
    }

    impl<P: InputPin, const N: usize> HalInputs<P, N> {
        /// Creates the adapter from `(pin id, pin)` pairs.
        pub fn new(lines: [(PinId, P); N]) -> Self {
            Self { lines }
        }

        /// Returns the wrapped pins.
        pub fn release(self) -> [(PinId, P); N] {
            self.lines
        }
    }

    impl<P: InputPin, const N: usize> DigitalInputs for HalInputs<P, N> {
        type Error = UnboundPin;

        fn configure_input_pullup(&mut self, pin: PinId) -> Result<(), Self::Error> {
            if self.lines.iter().any(|(id, _)| *id == pin) {
                Ok(())
            } else {
                Err(UnboundPin(pin))
            }
        }

        fn read_digital(&mut self, pin: PinId) -> Level {
            match self.lines.iter_mut().find(|(id, _)| *id == pin) {
                // Read errors report released
                Some((_, line)) => match line.is_low() {
                    Ok(true) => Level::Low,
                    _ => Level::High,
                },
                None => Level::High,
            }
        }
    }

}
