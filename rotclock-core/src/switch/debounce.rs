//! Change-only debounce policy
//!
//! After a reading is accepted, the inputs are not even sampled until the
//! debounce interval has passed. After that every poll samples, but only a
//! reading that differs from the accepted one is reported (and restarts
//! the interval). A steady reading is never re-reported.

use super::SwitchReading;
use crate::config::DEFAULT_DEBOUNCE_MS;

/// Debounce state for one selector
#[derive(Debug, Clone)]
pub struct Debouncer {
    /// Quiet time required after an accepted change
    interval_ms: u32,
    /// Timestamp of the last accepted reading
    accepted_at_ms: u32,
    /// Last accepted reading
    accepted: SwitchReading,
}

impl Default for Debouncer {
    fn default() -> Self {
        Self::new(DEFAULT_DEBOUNCE_MS)
    }
}

impl Debouncer {
    /// Create a debouncer with the given interval
    pub fn new(interval_ms: u32) -> Self {
        Self {
            interval_ms,
            accepted_at_ms: 0,
            accepted: SwitchReading::Undefined,
        }
    }

    /// Store the startup reading without debouncing
    pub fn prime(&mut self, now_ms: u32, reading: SwitchReading) {
        self.accepted = reading;
        self.accepted_at_ms = now_ms;
    }

    /// True while the interval since the last accepted change is running
    ///
    /// Callers skip sampling entirely in that case.
    pub fn is_settling(&self, now_ms: u32) -> bool {
        now_ms.wrapping_sub(self.accepted_at_ms) < self.interval_ms
    }

    /// Offer a fresh sample
    ///
    /// Returns the reading if it was accepted as a new state.
    pub fn offer(&mut self, now_ms: u32, reading: SwitchReading) -> Option<SwitchReading> {
        if self.is_settling(now_ms) || reading == self.accepted {
            return None;
        }
        self.prime(now_ms, reading);
        Some(reading)
    }

    /// Last accepted reading
    pub fn accepted(&self) -> SwitchReading {
        self.accepted
    }

    /// Debounce interval in milliseconds
    pub fn interval_ms(&self) -> u32 {
        self.interval_ms
    }
}
