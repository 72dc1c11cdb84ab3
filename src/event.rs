//! Press notifications.

use crate::types::{PinId, PressCount};
use heapless::Deque;

/// Emitted once for every detected press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PressEvent {
    pub pin: PinId,
    pub name: &'static str,
    /// Counter value after this press.
    pub count: PressCount,
}

impl core::fmt::Display for PressEvent {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "BUTTON {} PRESSED", self.name)
    }
}

/// Receives press events from the manager.
///
/// Delivery is fire-and-forget. Called from inside `update()`, so keep it short.
pub trait PressListener {
    fn on_press(&mut self, event: &PressEvent);
}

/// Listener that discards every event.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoListener;

impl PressListener for NoListener {
    #[inline]
    fn on_press(&mut self, _event: &PressEvent) {}
}

impl<F: FnMut(&PressEvent)> PressListener for F {
    fn on_press(&mut self, event: &PressEvent) {
        self(event)
    }
}

/// Bounded recorder of the most recent `CAP` press events.
///
/// When full, the oldest event is dropped to make room.
#[derive(Debug)]
pub struct PressLog<const CAP: usize> {
    events: Deque<PressEvent, CAP>,
    dropped: usize,
}

impl<const CAP: usize> PressLog<CAP> {
    pub const fn new() -> Self {
        Self {
            events: Deque::new(),
            dropped: 0,
        }
    }

    /// Removes and returns the oldest recorded event.
    pub fn pop(&mut self) -> Option<PressEvent> {
        self.events.pop_front()
    }

    /// Iterates recorded events, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &PressEvent> {
        self.events.iter()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Number of events discarded because the log was full.
    pub fn dropped(&self) -> usize {
        self.dropped
    }

    pub fn clear(&mut self) {
        self.events.clear();
        self.dropped = 0;
    }
}

impl<const CAP: usize> Default for PressLog<CAP> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const CAP: usize> PressListener for PressLog<CAP> {
    fn on_press(&mut self, event: &PressEvent) {
        if self.events.is_full() {
            self.events.pop_front();
            self.dropped = self.dropped.saturating_add(1);
        }
        // Cannot fail, a slot was freed above
        let _ = self.events.push_back(*event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    extern crate std;
    use std::string::ToString;

    fn event(pin: PinId, name: &'static str, count: PressCount) -> PressEvent {
        PressEvent { pin, name, count }
    }

    #[test]
    fn display_names_the_button() {
        assert_eq!(event(5, "UP", 1).to_string(), "BUTTON UP PRESSED");
    }

    #[test]
    fn log_keeps_most_recent_events() {
        let mut log = PressLog::<2>::new();
        log.on_press(&event(3, "MENU", 1));
        log.on_press(&event(2, "ESC", 1));
        log.on_press(&event(5, "UP", 1));

        assert_eq!(log.len(), 2);
        assert_eq!(log.dropped(), 1);
        assert_eq!(log.pop().map(|e| e.name), Some("ESC"));
        assert_eq!(log.pop().map(|e| e.name), Some("UP"));
        assert!(log.is_empty());
    }

    #[test]
    fn dropped_counter_saturates() {
        let mut log = PressLog::<1>::new();
        log.on_press(&event(3, "MENU", 1));
        log.dropped = usize::MAX;

        log.on_press(&event(2, "ESC", 1));
        assert_eq!(log.dropped(), usize::MAX);
        assert_eq!(log.pop().map(|e| e.name), Some("ESC"));
    }

    #[test]
    fn closure_listener_receives_events() {
        let mut seen = 0;
        {
            let mut listener = |e: &PressEvent| seen += e.count;
            listener.on_press(&event(5, "UP", 3));
        }
        assert_eq!(seen, 3);
    }
}
