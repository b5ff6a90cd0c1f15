//! Fixed-point step accumulator
//!
//! Elapsed time is scaled by the half-steps per revolution instead of
//! dividing by the period, so no fraction is ever rounded away:
//!
//! ```text
//! owed += elapsed_ms * halfsteps_per_revolution
//! while owed >= period_ms { owed -= period_ms; step }
//! ```
//!
//! The remainder carries over to the next poll, which makes the total step
//! count independent of how elapsed time is split across polls.

/// Half-steps owed, scaled by the revolution period
#[derive(Debug, Clone)]
pub struct StepAccumulator {
    /// Owed half-steps × period (always < period after an uncapped drain)
    owed: u64,
    /// Milliseconds per revolution of the current hand
    period_ms: u32,
    /// Half-steps per revolution of the clock hand
    halfsteps_per_revolution: u32,
}

impl StepAccumulator {
    /// Create an empty accumulator with no period set
    pub fn new(halfsteps_per_revolution: u32) -> Self {
        Self {
            owed: 0,
            period_ms: 0,
            halfsteps_per_revolution,
        }
    }

    /// Change the revolution period
    ///
    /// Owed time is kept; callers that change rate reset it on resync.
    pub fn set_period(&mut self, period_ms: u32) {
        self.period_ms = period_ms;
    }

    /// Drop any owed time
    pub fn reset(&mut self) {
        self.owed = 0;
    }

    /// Charge elapsed milliseconds
    pub fn add_elapsed(&mut self, elapsed_ms: u32) {
        let scaled = u64::from(elapsed_ms) * u64::from(self.halfsteps_per_revolution);
        self.owed = self.owed.saturating_add(scaled);
    }

    /// Take whole half-steps out of the accumulator
    ///
    /// Returns the number of half-steps to issue now. With a cap, anything
    /// beyond it stays owed.
    pub fn drain(&mut self, cap: Option<u32>) -> u32 {
        if self.period_ms == 0 {
            return 0;
        }

        let period = u64::from(self.period_ms);
        let due = self.owed / period;
        let limit = cap.map_or(u64::from(u32::MAX), u64::from);
        let steps = due.min(limit);

        self.owed -= steps * period;
        // `steps` is bounded by `limit`, which fits u32
        steps as u32
    }

    /// Current owed value (scaled)
    pub fn owed(&self) -> u64 {
        self.owed
    }

    /// Current revolution period
    pub fn period_ms(&self) -> u32 {
        self.period_ms
    }

    /// Half-steps per revolution this accumulator was built for
    pub fn halfsteps_per_revolution(&self) -> u32 {
        self.halfsteps_per_revolution
    }
}
