//! GPIO pins
//!
//! `Flex` lets one pin type serve both as a coil output and as a switch
//! input, with the direction chosen by `ConfigurePin::configure` at startup.

use embassy_rp::gpio::{Flex, Pin, Pull};
use embassy_rp::Peri;
use rotclock_hal::{ConfigurePin, InputPin, OutputPin, PinMode};

/// RP2040 GPIO usable as a rotclock pin
pub struct RpPin<'d> {
    flex: Flex<'d>,
}

impl<'d> RpPin<'d> {
    /// Wrap a GPIO peripheral
    ///
    /// The pin stays in its reset state (input, no pull) until configured.
    pub fn new(pin: Peri<'d, impl Pin>) -> Self {
        Self {
            flex: Flex::new(pin),
        }
    }
}

impl ConfigurePin for RpPin<'_> {
    fn configure(&mut self, mode: PinMode) {
        match mode {
            PinMode::Output => {
                // Drive low before enabling so coils do not glitch on
                self.flex.set_low();
                self.flex.set_as_output();
            }
            PinMode::InputPullUp => {
                self.flex.set_pull(Pull::Up);
                self.flex.set_as_input();
            }
        }
    }
}

impl OutputPin for RpPin<'_> {
    fn set_high(&mut self) {
        self.flex.set_high();
    }

    fn set_low(&mut self) {
        self.flex.set_low();
    }

    fn is_set_high(&self) -> bool {
        self.flex.is_set_high()
    }
}

impl InputPin for RpPin<'_> {
    fn is_high(&self) -> bool {
        self.flex.is_high()
    }
}
