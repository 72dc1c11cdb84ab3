//! Shared test infrastructure for button-manager integration tests

#![allow(dead_code)] // Items used across multiple test files; Rust analyzes per-file

use button_manager::{DigitalInputs, Level, PinId, TimeDuration, TimeInstant, TimeSource};
use core::cell::Cell;

// ============================================================================
// Mock Time Types
// ============================================================================

/// Mock duration type for testing (wraps milliseconds)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct TestDuration(pub u64);

impl TimeDuration for TestDuration {
    const ZERO: Self = TestDuration(0);

    fn as_millis(&self) -> u64 {
        self.0
    }

    fn from_millis(millis: u64) -> Self {
        TestDuration(millis)
    }
}

/// Mock instant type for testing
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct TestInstant(pub u64);

impl TimeInstant for TestInstant {
    type Duration = TestDuration;

    fn duration_since(&self, earlier: Self) -> Self::Duration {
        TestDuration(self.0 - earlier.0)
    }
}

/// 32-bit millisecond tick that wraps, like a SysTick counter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WrappingInstant(pub u32);

impl TimeInstant for WrappingInstant {
    type Duration = TestDuration;

    fn duration_since(&self, earlier: Self) -> Self::Duration {
        TestDuration(self.0.wrapping_sub(earlier.0) as u64)
    }
}

// ============================================================================
// Mock Time Source
// ============================================================================

/// Mock time source with controllable time advancement
pub struct MockTimeSource<I = TestInstant> {
    current_time: Cell<I>,
}

impl MockTimeSource<TestInstant> {
    pub fn new() -> Self {
        Self::starting_at(TestInstant(0))
    }

    /// Advance time by the given number of milliseconds
    pub fn advance(&self, millis: u64) {
        let current = self.current_time.get();
        self.current_time.set(TestInstant(current.0 + millis));
    }
}

impl MockTimeSource<WrappingInstant> {
    pub fn advance_wrapping(&self, millis: u32) {
        let current = self.current_time.get();
        self.current_time.set(WrappingInstant(current.0.wrapping_add(millis)));
    }
}

impl<I: Copy> MockTimeSource<I> {
    pub fn starting_at(time: I) -> Self {
        Self {
            current_time: Cell::new(time),
        }
    }

    pub fn set_time(&self, time: I) {
        self.current_time.set(time);
    }
}

impl<I: TimeInstant> TimeSource<I> for MockTimeSource<I> {
    fn now(&self) -> I {
        self.current_time.get()
    }
}

// ============================================================================
// Mock Input Lines
// ============================================================================

pub const MAX_LINES: usize = 32;

/// Configuration failure injected by `MockLines::fail_on`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SetupRefused(pub PinId);

/// Simulated board: every line idles high (pull-up) until pressed.
///
/// Shared by reference so tests can change levels while the manager owns a
/// `&MockLines` driver.
pub struct MockLines {
    levels: [Cell<Level>; MAX_LINES],
    pull_ups: [Cell<bool>; MAX_LINES],
    reads: Cell<usize>,
    fail_on: Cell<Option<PinId>>,
}

impl MockLines {
    pub fn new() -> Self {
        Self {
            levels: core::array::from_fn(|_| Cell::new(Level::High)),
            pull_ups: core::array::from_fn(|_| Cell::new(false)),
            reads: Cell::new(0),
            fail_on: Cell::new(None),
        }
    }

    pub fn press(&self, pin: PinId) {
        self.set_level(pin, Level::Low);
    }

    pub fn release(&self, pin: PinId) {
        self.set_level(pin, Level::High);
    }

    pub fn set_level(&self, pin: PinId, level: Level) {
        self.levels[pin as usize].set(level);
    }

    pub fn is_pulled_up(&self, pin: PinId) -> bool {
        self.pull_ups[pin as usize].get()
    }

    /// Total number of `read_digital` calls so far
    pub fn reads(&self) -> usize {
        self.reads.get()
    }

    /// Make configuration of `pin` fail
    pub fn fail_on(&self, pin: PinId) {
        self.fail_on.set(Some(pin));
    }
}

impl DigitalInputs for &MockLines {
    type Error = SetupRefused;

    fn configure_input_pullup(&mut self, pin: PinId) -> Result<(), Self::Error> {
        if self.fail_on.get() == Some(pin) {
            return Err(SetupRefused(pin));
        }
        self.pull_ups[pin as usize].set(true);
        Ok(())
    }

    fn read_digital(&mut self, pin: PinId) -> Level {
        self.reads.set(self.reads.get() + 1);
        self.levels[pin as usize].get()
    }
}
