//! Debounced one-shot event latch.
//!
//! The latch is written from an interrupt handler and read from the main
//! loop. Both sides go through `critical-section`, so a latch can live in a
//! `static` shared between the two contexts.

use core::cell::Cell;

use critical_section::Mutex;
use embassy_time::{Duration, Instant};

use crate::config::DEFAULT_DEBOUNCE;

#[derive(Debug, Clone, Copy)]
struct LatchState {
    /// Time of the last accepted edge
    last_trigger: Option<Instant>,
    /// Set by an accepted edge, cleared by the reader
    latched: bool,
}

/// Converts noisy edges into a clean signal that is observed exactly once.
///
/// An edge is accepted when more than the debounce window has passed since
/// the previous *accepted* edge. The first edge is always accepted. Edges
/// inside the window are dropped and do not extend it, whether or not the
/// previous event has been read.
pub struct EventLatch {
    state: Mutex<Cell<LatchState>>,
    debounce: Duration,
}

impl EventLatch {
    /// Create an idle latch with the given debounce window.
    pub const fn new(debounce: Duration) -> Self {
        Self {
            state: Mutex::new(Cell::new(LatchState {
                last_trigger: None,
                latched: false,
            })),
            debounce,
        }
    }

    /// Debounce window of this latch
    pub const fn debounce(&self) -> Duration {
        self.debounce
    }

    /// Record a falling edge at the current time.
    ///
    /// Call this from the pin interrupt handler.
    pub fn on_edge(&self) {
        self.record_edge(Instant::now());
    }

    /// Record a falling edge observed at `now`.
    ///
    /// Interrupt safe: one short critical section, no allocation and no I/O.
    pub fn record_edge(&self, now: Instant) {
        critical_section::with(|cs| {
            let cell = self.state.borrow(cs);
            let mut state = cell.get();
            let accepted = match state.last_trigger {
                None => true,
                // A timestamp older than the last accepted edge is noise
                Some(last) => now
                    .checked_duration_since(last)
                    .is_some_and(|elapsed| elapsed > self.debounce),
            };
            if accepted {
                state.latched = true;
                state.last_trigger = Some(now);
                cell.set(state);
            }
        });
    }

    /// Take the pending event, if any.
    ///
    /// Returns `true` once per accepted edge and clears the latch in the same
    /// critical section, so an edge racing with the read is never lost.
    pub fn poll_and_clear(&self) -> bool {
        critical_section::with(|cs| {
            let cell = self.state.borrow(cs);
            let mut state = cell.get();
            let was_latched = state.latched;
            state.latched = false;
            cell.set(state);
            was_latched
        })
    }

    /// Check for a pending event without consuming it.
    pub fn is_latched(&self) -> bool {
        critical_section::with(|cs| self.state.borrow(cs).get().latched)
    }
}

impl Default for EventLatch {
    fn default() -> Self {
        Self::new(DEFAULT_DEBOUNCE)
    }
}
