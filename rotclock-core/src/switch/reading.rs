//! Two-bit selector readings

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Selector position decoded from the two input levels
///
/// Bit 0 is the first input, bit 1 the second.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[repr(u8)]
pub enum SwitchReading {
    /// Both inputs low; only seen before the first read
    #[default]
    Undefined = 0b00,
    Up = 0b01,
    Down = 0b10,
    Middle = 0b11,
}

impl SwitchReading {
    /// Decode from the sampled input levels
    pub fn from_levels(first: bool, second: bool) -> Self {
        match (second, first) {
            (false, false) => SwitchReading::Undefined,
            (false, true) => SwitchReading::Up,
            (true, false) => SwitchReading::Down,
            (true, true) => SwitchReading::Middle,
        }
    }

    /// Raw two-bit value
    pub fn bits(self) -> u8 {
        self as u8
    }

    /// True for the three real lever positions
    pub fn is_defined(self) -> bool {
        self != SwitchReading::Undefined
    }
}
