#![no_std]
#![no_main]

use button_manager::{
    BUTTON_TABLE, ButtonManager, DigitalInputs, Level, PinId, PressEvent, PressLog, TimeDuration,
    TimeInstant, TimeSource,
};
use cortex_m_rt::entry;
use panic_halt as _;

// ============================================================================
// Minimal Time Types
// ============================================================================

/// Minimal 32-bit millisecond duration
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Duration32(u32);

impl TimeDuration for Duration32 {
    const ZERO: Self = Duration32(0);

    fn as_millis(&self) -> u64 {
        self.0 as u64
    }

    fn from_millis(millis: u64) -> Self {
        Duration32(millis as u32)
    }
}

/// Minimal 32-bit millisecond instant
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Instant32(u32);

impl TimeInstant for Instant32 {
    type Duration = Duration32;

    fn duration_since(&self, earlier: Self) -> Self::Duration {
        Duration32(self.0.wrapping_sub(earlier.0))
    }
}

// ============================================================================
// Minimal Input Implementation
// ============================================================================

/// Input driver whose reads the optimizer cannot fold away
pub struct MinimalInputs;

impl DigitalInputs for MinimalInputs {
    type Error = core::convert::Infallible;

    fn configure_input_pullup(&mut self, pin: PinId) -> Result<(), Self::Error> {
        core::hint::black_box(pin);
        Ok(())
    }

    fn read_digital(&mut self, pin: PinId) -> Level {
        Level::from(core::hint::black_box(pin) & 1 == 0)
    }
}

// ============================================================================
// Minimal TimeSource Implementation
// ============================================================================

pub struct MinimalTimeSource;

impl TimeSource<Instant32> for MinimalTimeSource {
    fn now(&self) -> Instant32 {
        Instant32(core::hint::black_box(0))
    }
}

// This function uses the library to prevent optimizer from removing code
#[inline(never)]
fn exercise_managers() {
    let time_source = MinimalTimeSource;

    // Reference panel, no listener
    if let Ok(mut manager) = ButtonManager::with_default_debounce(MinimalInputs, &time_source) {
        manager.update();
        core::hint::black_box(manager.total_press_count());
        core::hint::black_box(manager.button_name(core::hint::black_box(5)));
        manager.reset_counters();
        core::hint::black_box(manager);
    }

    // Reference panel with an event log
    if let Ok(mut manager) = ButtonManager::with_table(
        &BUTTON_TABLE,
        MinimalInputs,
        &time_source,
        Duration32(0),
        PressLog::<8>::new(),
    ) {
        manager.update();
        let event: Option<PressEvent> = manager.listener_mut().pop();
        core::hint::black_box(event);
    }
}

#[entry]
fn main() -> ! {
    // Call test function to ensure all code is included
    exercise_managers();

    // Halt - this is a size analysis binary, not meant to run
    loop {
        cortex_m::asm::nop();
    }
}
