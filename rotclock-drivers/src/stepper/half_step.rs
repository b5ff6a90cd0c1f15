//! Half-stepping bipolar motor
//!
//! Drives the four coil terminals directly (through an H-bridge such as an
//! L293D or DRV8833) following the 8-entry half-step table. The motor has no
//! clock of its own; every call to `half_step` moves it exactly one entry.

use rotclock_core::motor::{CoilPattern, StepIndex};
use rotclock_core::traits::{Direction, HalfStepper};
use rotclock_hal::{OutputPin, PinMode};

/// Bipolar stepper on four GPIO outputs
pub struct HalfStepMotor<P> {
    /// Coil outputs in table order: A+, A-, B+, B-
    coils: [P; 4],
    /// Current sequence position
    index: StepIndex,
}

impl<P: OutputPin> HalfStepMotor<P> {
    /// Create a motor from its four coil pins
    ///
    /// Pins are not touched until [`HalfStepper::begin`].
    pub fn new(a_plus: P, a_minus: P, b_plus: P, b_minus: P) -> Self {
        Self {
            coils: [a_plus, a_minus, b_plus, b_minus],
            index: StepIndex::default(),
        }
    }

    /// Current sequence position
    pub fn position(&self) -> StepIndex {
        self.index
    }

    /// Coil pattern for the current position
    pub fn pattern(&self) -> CoilPattern {
        self.index.pattern()
    }

    /// De-energize all coils
    ///
    /// The sequence position is kept; the next `half_step` re-energizes
    /// from it.
    pub fn release(&mut self) {
        self.write(CoilPattern::RELEASED);
    }

    fn write(&mut self, pattern: CoilPattern) {
        for (pin, level) in self.coils.iter_mut().zip(pattern.levels()) {
            pin.set_state(level);
        }
    }
}

impl<P: OutputPin> HalfStepper for HalfStepMotor<P> {
    fn begin(&mut self) {
        for pin in self.coils.iter_mut() {
            pin.configure(PinMode::Output);
        }
        self.index = StepIndex::default();
        self.write(self.index.pattern());

        #[cfg(feature = "defmt")]
        defmt::debug!("Motor coils energized at index 0");
    }

    fn half_step(&mut self, direction: Direction) {
        self.index = self.index.advance(direction);
        self.write(self.index.pattern());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rotclock_core::motor::HALF_STEP_SEQUENCE;
    use rotclock_hal::ConfigurePin;

    /// Mock GPIO pin for testing
    struct MockPin {
        high: bool,
        mode: Option<PinMode>,
        writes: u32,
    }

    impl MockPin {
        fn new() -> Self {
            Self {
                high: false,
                mode: None,
                writes: 0,
            }
        }
    }

    impl ConfigurePin for MockPin {
        fn configure(&mut self, mode: PinMode) {
            self.mode = Some(mode);
        }
    }

    impl OutputPin for MockPin {
        fn set_high(&mut self) {
            self.high = true;
            self.writes += 1;
        }

        fn set_low(&mut self) {
            self.high = false;
            self.writes += 1;
        }

        fn is_set_high(&self) -> bool {
            self.high
        }
    }

    fn motor() -> HalfStepMotor<MockPin> {
        HalfStepMotor::new(MockPin::new(), MockPin::new(), MockPin::new(), MockPin::new())
    }

    fn pin_levels(motor: &HalfStepMotor<MockPin>) -> [bool; 4] {
        [
            motor.coils[0].is_set_high(),
            motor.coils[1].is_set_high(),
            motor.coils[2].is_set_high(),
            motor.coils[3].is_set_high(),
        ]
    }

    #[test]
    fn test_begin_configures_and_energizes_index_zero() {
        let mut motor = motor();
        assert!(motor.coils.iter().all(|pin| pin.writes == 0));

        motor.begin();
        assert!(motor.coils.iter().all(|pin| pin.mode == Some(PinMode::Output)));
        assert_eq!(motor.position().value(), 0);
        assert_eq!(pin_levels(&motor), [true, false, false, false]);

        // Idempotent
        motor.begin();
        assert_eq!(pin_levels(&motor), [true, false, false, false]);
    }

    #[test]
    fn test_clockwise_walks_the_table() {
        let mut motor = motor();
        motor.begin();

        for n in 1..=20 {
            motor.half_step(Direction::Clockwise);
            assert_eq!(motor.pattern(), HALF_STEP_SEQUENCE[n % 8]);
            assert_eq!(pin_levels(&motor), HALF_STEP_SEQUENCE[n % 8].levels());
        }
    }

    #[test]
    fn test_reverse_returns_to_start() {
        let mut motor = motor();
        motor.begin();

        for _ in 0..11 {
            motor.half_step(Direction::Clockwise);
        }
        for _ in 0..11 {
            motor.half_step(Direction::CounterClockwise);
        }
        assert_eq!(motor.position().value(), 0);
        assert_eq!(pin_levels(&motor), HALF_STEP_SEQUENCE[0].levels());
    }

    #[test]
    fn test_counter_clockwise_from_zero_wraps() {
        let mut motor = motor();
        motor.begin();

        motor.half_step(Direction::CounterClockwise);
        assert_eq!(motor.position().value(), 7);
        assert_eq!(pin_levels(&motor), [true, false, false, true]);
    }

    #[test]
    fn test_release_keeps_position() {
        let mut motor = motor();
        motor.begin();
        motor.half_step(Direction::Clockwise);
        motor.half_step(Direction::Clockwise);

        motor.release();
        assert_eq!(pin_levels(&motor), [false; 4]);
        assert_eq!(motor.position().value(), 2);

        motor.half_step(Direction::Clockwise);
        assert_eq!(pin_levels(&motor), HALF_STEP_SEQUENCE[3].levels());
    }
}
