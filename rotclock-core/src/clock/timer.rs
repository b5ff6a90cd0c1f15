//! Clock rate state machine
//!
//! ```text
//!                 select_hand / selector change
//!        ┌──────────────────────────────────────────┐
//!        ▼                                          │
//! ┌───────────────┐   advance (no steps)   ┌─────────────┐
//! │ Uninitialized │ ─────────────────────▶ │   Running   │
//! └───────────────┘   baseline = now       └─────────────┘
//! ```
//!
//! The transition into `Running` only records the baseline timestamp and
//! empties the accumulator. Time between a hand change and the next poll is
//! charged to neither rate.

use crate::clock::{HandSelection, StepAccumulator};
use crate::config::{ClockConfig, UndefinedPolicy};
use crate::switch::SwitchReading;
use crate::traits::SwitchListener;

/// Phase of the rate state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ClockPhase {
    /// Waiting for the next poll to take a new baseline
    Uninitialized,
    /// Accumulating elapsed time
    Running,
}

/// Elapsed-time to half-step converter for the selected hand
#[derive(Debug, Clone)]
pub struct StepClock {
    accumulator: StepAccumulator,
    hand: Option<HandSelection>,
    phase: ClockPhase,
    /// Timestamp of the previous poll (or of the resync)
    last_time_ms: u32,
    max_steps_per_poll: Option<u32>,
    undefined_policy: UndefinedPolicy,
}

impl StepClock {
    /// Create a clock with no hand selected
    pub fn new(config: &ClockConfig) -> Self {
        Self {
            accumulator: StepAccumulator::new(config.geometry.halfsteps_per_clock_revolution()),
            hand: None,
            phase: ClockPhase::Uninitialized,
            last_time_ms: 0,
            max_steps_per_poll: config.max_steps_per_poll,
            undefined_policy: config.undefined_policy,
        }
    }

    /// Switch to another hand's rate
    ///
    /// The new rate takes effect from the next [`advance`](Self::advance),
    /// which only resyncs.
    pub fn select_hand(&mut self, hand: HandSelection) {
        self.hand = Some(hand);
        self.accumulator.set_period(hand.period_ms());
        self.phase = ClockPhase::Uninitialized;
    }

    /// Apply a debounced selector reading
    ///
    /// # Panics
    /// On [`SwitchReading::Undefined`] when the policy is
    /// [`UndefinedPolicy::Assert`].
    pub fn on_reading(&mut self, reading: SwitchReading) {
        let hand = match HandSelection::from_reading(reading) {
            Some(hand) => hand,
            None => match self.undefined_policy {
                UndefinedPolicy::FallbackToHour => HandSelection::Hour,
                UndefinedPolicy::Assert => {
                    panic!("selector reported an undefined position after startup")
                }
            },
        };
        self.select_hand(hand);
    }

    /// Account for time up to `now_ms`
    ///
    /// Returns how many clockwise half-steps are due now. The first call
    /// after a hand change returns 0 and sets the baseline.
    pub fn advance(&mut self, now_ms: u32) -> u32 {
        if self.hand.is_none() {
            return 0;
        }

        if self.phase == ClockPhase::Uninitialized {
            self.accumulator.reset();
            self.last_time_ms = now_ms;
            self.phase = ClockPhase::Running;
            return 0;
        }

        let elapsed = now_ms.wrapping_sub(self.last_time_ms);
        self.last_time_ms = now_ms;

        self.accumulator.add_elapsed(elapsed);
        let steps = self.accumulator.drain(self.max_steps_per_poll);

        #[cfg(feature = "defmt")]
        if self.max_steps_per_poll == Some(steps) {
            defmt::debug!("Step burst capped at {}, {} owed", steps, self.accumulator.owed());
        }

        steps
    }

    /// Currently selected hand, if any
    pub fn hand(&self) -> Option<HandSelection> {
        self.hand
    }

    pub fn phase(&self) -> ClockPhase {
        self.phase
    }

    /// Milliseconds per revolution of the selected hand (0 if none)
    pub fn period_ms(&self) -> u32 {
        self.accumulator.period_ms()
    }

    /// Scaled owed value
    pub fn accumulator(&self) -> u64 {
        self.accumulator.owed()
    }

    /// Baseline timestamp of the running interval
    pub fn last_time_ms(&self) -> u32 {
        self.last_time_ms
    }
}

impl SwitchListener for StepClock {
    fn on_switch_change(&mut self, reading: SwitchReading) {
        self.on_reading(reading);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ClockGeometry;
    use proptest::prelude::*;

    fn config_432() -> ClockConfig {
        ClockConfig::new(ClockGeometry::new(216, 36, 36).unwrap())
    }

    #[test]
    fn test_hour_hand_one_hour() {
        let mut clock = StepClock::new(&config_432());
        clock.select_hand(HandSelection::Hour);
        assert_eq!(clock.period_ms(), 43_200_000);

        assert_eq!(clock.advance(5_000), 0);
        assert_eq!(clock.phase(), ClockPhase::Running);
        assert_eq!(clock.advance(5_000 + 3_600_000), 36);
        assert!(clock.accumulator() < u64::from(clock.period_ms()));
    }

    #[test]
    fn test_no_hand_no_steps() {
        let mut clock = StepClock::new(&ClockConfig::default());
        assert_eq!(clock.advance(0), 0);
        assert_eq!(clock.advance(1_000_000), 0);
        assert_eq!(clock.phase(), ClockPhase::Uninitialized);
    }

    #[test]
    fn test_hand_change_discards_phase() {
        let mut clock = StepClock::new(&ClockConfig::default());
        clock.on_reading(SwitchReading::Middle);
        clock.advance(0);
        // 3.1 s of minute hand: 0.992 half-steps, nothing issued yet
        assert_eq!(clock.advance(3_100), 0);
        assert!(clock.accumulator() > 0);

        clock.on_switch_change(SwitchReading::Down);
        assert_eq!(clock.phase(), ClockPhase::Uninitialized);
        assert_eq!(clock.period_ms(), 43_200_000);

        // Long gap since the last poll is not charged
        assert_eq!(clock.advance(10_000_000), 0);
        assert_eq!(clock.accumulator(), 0);
        assert_eq!(clock.last_time_ms(), 10_000_000);
    }

    #[test]
    fn test_elapsed_across_millis_rollover() {
        let mut clock = StepClock::new(&ClockConfig::default());
        clock.select_hand(HandSelection::Second);
        clock.advance(u32::MAX - 999);

        // 60 s across the wrap is 1152 half-steps
        assert_eq!(clock.advance(59_000), 1152);
    }

    #[test]
    fn test_step_cap_spreads_burst() {
        let config = ClockConfig::default().with_step_cap(100).unwrap();
        let mut clock = StepClock::new(&config);
        clock.select_hand(HandSelection::Second);
        clock.advance(0);

        assert_eq!(clock.advance(60_000), 100);
        let mut total = 100;
        let mut now = 60_000;
        loop {
            now += 1;
            let steps = clock.advance(now);
            assert!(steps <= 100);
            total += steps;
            if steps < 100 {
                break;
            }
        }
        // Burst is paid out, plus whatever the extra milliseconds earned
        assert_eq!(total, (now as u64 * 1152 / 60_000) as u32);
    }

    #[test]
    fn test_undefined_fallback_to_hour() {
        let config = ClockConfig::default().with_undefined_policy(UndefinedPolicy::FallbackToHour);
        let mut clock = StepClock::new(&config);
        clock.on_reading(SwitchReading::Undefined);
        assert_eq!(clock.hand(), Some(HandSelection::Hour));
    }

    #[test]
    #[should_panic(expected = "undefined position")]
    fn test_undefined_asserts_by_default() {
        let mut clock = StepClock::new(&ClockConfig::default());
        clock.on_reading(SwitchReading::Undefined);
    }

    proptest! {
        #[test]
        fn prop_no_drift_across_millis_rollover(
            start_before_wrap in 0u32..200_000,
            gaps in proptest::collection::vec(1u32..5_000, 1..500),
            hand in prop_oneof![
                Just(HandSelection::Second),
                Just(HandSelection::Minute),
                Just(HandSelection::Hour),
            ],
        ) {
            let mut clock = StepClock::new(&ClockConfig::default());
            clock.select_hand(hand);

            let start = u32::MAX - start_before_wrap;
            prop_assert_eq!(clock.advance(start), 0);

            let mut now = start;
            let mut total_ms = 0u64;
            let mut issued = 0u64;
            for gap in gaps {
                now = now.wrapping_add(gap);
                total_ms += u64::from(gap);
                issued += u64::from(clock.advance(now));
                prop_assert!(clock.accumulator() < u64::from(clock.period_ms()));
            }

            let expected = total_ms * 1152 / u64::from(hand.period_ms());
            prop_assert_eq!(issued, expected);
        }
    }
}
