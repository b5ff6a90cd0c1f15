//! Clock hand selection

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::switch::SwitchReading;

/// One revolution of the second hand
pub const SECOND_PERIOD_MS: u32 = 60 * 1000;
/// One revolution of the minute hand
pub const MINUTE_PERIOD_MS: u32 = 60 * 60 * 1000;
/// One revolution of the hour hand (12-hour dial)
pub const HOUR_PERIOD_MS: u32 = 12 * 60 * 60 * 1000;

/// Which clock hand the motor is currently standing in for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum HandSelection {
    Second,
    Minute,
    Hour,
}

impl HandSelection {
    /// Milliseconds per full revolution of this hand
    pub const fn period_ms(self) -> u32 {
        match self {
            HandSelection::Second => SECOND_PERIOD_MS,
            HandSelection::Minute => MINUTE_PERIOD_MS,
            HandSelection::Hour => HOUR_PERIOD_MS,
        }
    }

    /// Map a selector position to a hand
    ///
    /// Returns `None` for [`SwitchReading::Undefined`].
    pub fn from_reading(reading: SwitchReading) -> Option<Self> {
        match reading {
            SwitchReading::Up => Some(HandSelection::Second),
            SwitchReading::Middle => Some(HandSelection::Minute),
            SwitchReading::Down => Some(HandSelection::Hour),
            SwitchReading::Undefined => None,
        }
    }
}
