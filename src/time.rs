//! Time abstraction traits for platform-agnostic debounce timing.

/// Trait for abstracting time sources.
///
/// Usually backed by a millisecond tick counter (SysTick, RTC, embassy-time).
pub trait TimeSource<I: TimeInstant> {
    /// Returns the current time instant.
    fn now(&self) -> I;
}

/// Trait abstraction for duration types.
pub trait TimeDuration: Copy + PartialEq + PartialOrd {
    /// Zero duration constant.
    const ZERO: Self;

    /// Converts duration to milliseconds.
    fn as_millis(&self) -> u64;

    /// Creates duration from milliseconds.
    fn from_millis(millis: u64) -> Self;
}

/// Trait abstraction for instant types.
pub trait TimeInstant: Copy {
    /// Duration type for this instant.
    type Duration: TimeDuration;

    /// Calculates duration since an earlier instant.
    ///
    /// Implementations backed by a wrapping tick counter must use wrapping
    /// arithmetic so the result stays correct across rollover.
    fn duration_since(&self, earlier: Self) -> Self::Duration;
}
