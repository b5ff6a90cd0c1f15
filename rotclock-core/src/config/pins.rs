//! Pin assignment for the motor coils and the selector switch

use heapless::FnvIndexSet;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::ConfigError;

/// Number of pins the clock claims
pub const CLOCK_PIN_COUNT: usize = 6;

/// GPIO numbers for every line the clock drives or samples
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PinAssignment {
    /// Coil A, positive terminal
    pub coil_a_plus: u8,
    /// Coil A, negative terminal
    pub coil_a_minus: u8,
    /// Coil B, positive terminal
    pub coil_b_plus: u8,
    /// Coil B, negative terminal
    pub coil_b_minus: u8,
    /// Selector input sampled as bit 0
    pub switch_first: u8,
    /// Selector input sampled as bit 1
    pub switch_second: u8,
}

impl PinAssignment {
    /// Coil pins in sequence-table order (A+, A-, B+, B-)
    pub fn coil_pins(&self) -> [u8; 4] {
        [
            self.coil_a_plus,
            self.coil_a_minus,
            self.coil_b_plus,
            self.coil_b_minus,
        ]
    }

    /// Switch pins in bit order
    pub fn switch_pins(&self) -> [u8; 2] {
        [self.switch_first, self.switch_second]
    }

    /// Check that every pin exists and none is claimed twice
    ///
    /// # Arguments
    /// - `gpio_count`: Number of GPIOs on the target (pins are `0..gpio_count`)
    pub fn validate(&self, gpio_count: u8) -> Result<(), ConfigError> {
        let mut claimed: FnvIndexSet<u8, 8> = FnvIndexSet::new();

        let coils = self.coil_pins();
        let switches = self.switch_pins();
        for &pin in coils.iter().chain(switches.iter()) {
            if pin >= gpio_count {
                return Err(ConfigError::PinOutOfRange(pin));
            }
            match claimed.insert(pin) {
                Ok(true) => {}
                Ok(false) | Err(_) => return Err(ConfigError::DuplicatePin(pin)),
            }
        }

        Ok(())
    }
}
