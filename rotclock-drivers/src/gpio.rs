//! `embedded-hal` pin adapters
//!
//! Lets any `embedded-hal` 1.0 digital pin serve as a rotclock pin. Pins
//! from such HALs are already configured by their type, so
//! [`ConfigurePin::configure`] is a no-op here.
//!
//! Only infallible pins are accepted: the clock has no runtime error path,
//! and a GPIO write that could fail has nowhere to go.

use core::cell::RefCell;
use core::convert::Infallible;

use embedded_hal::digital;
use rotclock_hal::{ConfigurePin, InputPin, OutputPin, PinMode};

fn unwrap_infallible<T>(result: Result<T, Infallible>) -> T {
    match result {
        Ok(value) => value,
        Err(never) => match never {},
    }
}

/// Output adapter for an `embedded-hal` output pin
pub struct EhOutput<P> {
    pin: P,
    /// Last written level
    high: bool,
}

impl<P: digital::OutputPin<Error = Infallible>> EhOutput<P> {
    pub fn new(pin: P) -> Self {
        Self { pin, high: false }
    }

    /// Give the wrapped pin back
    pub fn into_inner(self) -> P {
        self.pin
    }
}

impl<P> ConfigurePin for EhOutput<P> {
    fn configure(&mut self, _mode: PinMode) {}
}

impl<P: digital::OutputPin<Error = Infallible>> OutputPin for EhOutput<P> {
    fn set_high(&mut self) {
        unwrap_infallible(self.pin.set_high());
        self.high = true;
    }

    fn set_low(&mut self) {
        unwrap_infallible(self.pin.set_low());
        self.high = false;
    }

    fn is_set_high(&self) -> bool {
        self.high
    }
}

/// Input adapter for an `embedded-hal` input pin
///
/// `embedded-hal` reads through `&mut self`; the cell bridges that to the
/// shared-reference read of [`InputPin`].
pub struct EhInput<P> {
    pin: RefCell<P>,
}

impl<P: digital::InputPin<Error = Infallible>> EhInput<P> {
    pub fn new(pin: P) -> Self {
        Self {
            pin: RefCell::new(pin),
        }
    }

    /// Give the wrapped pin back
    pub fn into_inner(self) -> P {
        self.pin.into_inner()
    }
}

impl<P> ConfigurePin for EhInput<P> {
    fn configure(&mut self, _mode: PinMode) {}
}

impl<P: digital::InputPin<Error = Infallible>> InputPin for EhInput<P> {
    fn is_high(&self) -> bool {
        unwrap_infallible(self.pin.borrow_mut().is_high())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rotclock_core::switch::SwitchReading;
    use rotclock_core::traits::{Direction, HalfStepper};

    use crate::{HalfStepMotor, SelectorSwitch};

    /// Minimal `embedded-hal` pin
    struct Line {
        high: bool,
    }

    impl digital::ErrorType for Line {
        type Error = Infallible;
    }

    impl digital::OutputPin for Line {
        fn set_low(&mut self) -> Result<(), Self::Error> {
            self.high = false;
            Ok(())
        }

        fn set_high(&mut self) -> Result<(), Self::Error> {
            self.high = true;
            Ok(())
        }
    }

    impl digital::InputPin for Line {
        fn is_high(&mut self) -> Result<bool, Self::Error> {
            Ok(self.high)
        }

        fn is_low(&mut self) -> Result<bool, Self::Error> {
            Ok(!self.high)
        }
    }

    fn line(high: bool) -> Line {
        Line { high }
    }

    #[test]
    fn test_output_tracks_level() {
        let mut out = EhOutput::new(line(false));
        out.set_state(true);
        assert!(out.is_set_high());
        assert!(out.pin.high);

        out.set_low();
        assert!(!out.is_set_high());
        assert!(!out.into_inner().high);
    }

    #[test]
    fn test_motor_on_embedded_hal_pins() {
        let mut motor = HalfStepMotor::new(
            EhOutput::new(line(false)),
            EhOutput::new(line(false)),
            EhOutput::new(line(false)),
            EhOutput::new(line(false)),
        );
        motor.begin();
        motor.half_step(Direction::Clockwise);

        // A+ B+
        assert_eq!(motor.pattern().levels(), [true, false, true, false]);
    }

    #[test]
    fn test_selector_on_embedded_hal_pins() {
        let mut switch = SelectorSwitch::new(EhInput::new(line(false)), EhInput::new(line(true)));
        let mut seen = None;
        let reading = switch.begin(0, &mut |r: SwitchReading| seen = Some(r));

        assert_eq!(reading, SwitchReading::Down);
        assert_eq!(seen, Some(SwitchReading::Down));
    }
}
