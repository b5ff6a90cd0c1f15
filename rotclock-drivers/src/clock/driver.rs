//! Clock driver
//!
//! Owns the motor and the selector and paces the motor from elapsed time.
//! The host calls [`ClockDriver::poll`] from its main loop as often as it
//! likes; the step count only depends on the timestamps passed in.
//!
//! Within one poll the selector is always handled first, so a hand change
//! puts the clock back into resync before any elapsed time is converted.

use rotclock_core::clock::{ClockPhase, HandSelection, StepClock};
use rotclock_core::config::ClockConfig;
use rotclock_core::traits::{Direction, HalfStepper};
use rotclock_hal::InputPin;

use crate::switch::SelectorSwitch;

/// Stepper-driven clock hand with a hand selector
pub struct ClockDriver<M, P> {
    motor: M,
    switch: SelectorSwitch<P>,
    clock: StepClock,
}

impl<M: HalfStepper, P: InputPin> ClockDriver<M, P> {
    /// Create a clock driver
    ///
    /// # Arguments
    /// - `config`: Validated clock configuration
    /// - `motor`: Half-stepping motor turning the hand
    /// - `switch_first`, `switch_second`: Selector inputs (bit 0, bit 1)
    pub fn new(config: &ClockConfig, motor: M, switch_first: P, switch_second: P) -> Self {
        Self {
            motor,
            switch: SelectorSwitch::with_debounce(switch_first, switch_second, config.debounce_ms),
            clock: StepClock::new(config),
        }
    }

    /// Energize the motor and read the selector's starting position
    ///
    /// After this the rate for the selected hand is known, and the first
    /// poll takes the timing baseline.
    pub fn begin(&mut self, now_ms: u32) {
        self.motor.begin();
        self.switch.begin(now_ms, &mut self.clock);

        #[cfg(feature = "defmt")]
        if let Some(hand) = self.clock.hand() {
            defmt::info!("Clock started: {:?} hand, {} ms/rev", hand, self.clock.period_ms());
        }
    }

    /// Run one iteration of the clock
    ///
    /// Returns the number of clockwise half-steps issued. Before
    /// [`begin`](Self::begin) no hand is selected and this issues nothing.
    pub fn poll(&mut self, now_ms: u32) -> u32 {
        if let Some(_reading) = self.switch.poll(now_ms, &mut self.clock) {
            #[cfg(feature = "defmt")]
            defmt::info!(
                "Hand changed to {:?} ({} ms/rev), resyncing",
                self.clock.hand(),
                self.clock.period_ms()
            );
        }

        let steps = self.clock.advance(now_ms);
        for _ in 0..steps {
            self.motor.half_step(Direction::Clockwise);
        }
        steps
    }

    /// Select a hand directly, bypassing the switch
    ///
    /// Same effect as the selector moving: the next poll resyncs.
    pub fn select_hand(&mut self, hand: HandSelection) {
        self.clock.select_hand(hand);
    }

    /// Hand currently being turned
    pub fn hand(&self) -> Option<HandSelection> {
        self.clock.hand()
    }

    pub fn phase(&self) -> ClockPhase {
        self.clock.phase()
    }

    /// Rate state (period, accumulator, baseline)
    pub fn clock(&self) -> &StepClock {
        &self.clock
    }

    pub fn motor(&self) -> &M {
        &self.motor
    }

    pub fn motor_mut(&mut self) -> &mut M {
        &mut self.motor
    }

    pub fn switch(&self) -> &SelectorSwitch<P> {
        &self.switch
    }
}
