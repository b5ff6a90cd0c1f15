//! Gear train and motor geometry
//!
//! The motor drives a small gear that meshes with the clock-hand gear.
//! Only whole gear ratios are supported, so one clock revolution is always
//! an integer number of half-steps.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::ConfigError;

/// Validated clock geometry
///
/// Fields are private; the only way to get one is through [`ClockGeometry::new`]
/// (or the [`ClockGeometry::ROTCLOCK`] constant), so the derived half-step
/// count is always consistent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(try_from = "GeometryFields", into = "GeometryFields")
)]
pub struct ClockGeometry {
    clock_teeth: u16,
    gear_teeth: u16,
    motor_steps_per_revolution: u16,
    halfsteps_per_clock_revolution: u32,
}

impl ClockGeometry {
    /// Reference build: 216-tooth clock gear, 36-tooth motor gear, 96-step motor
    pub const ROTCLOCK: Self = Self {
        clock_teeth: 216,
        gear_teeth: 36,
        motor_steps_per_revolution: 96,
        halfsteps_per_clock_revolution: 2 * (216 / 36) * 96,
    };

    /// Validate and build a geometry
    ///
    /// # Arguments
    /// - `clock_teeth`: Teeth on the gear carrying the clock hand
    /// - `gear_teeth`: Teeth on the motor-side gear
    /// - `motor_steps_per_revolution`: Full steps per motor revolution
    pub fn new(
        clock_teeth: u16,
        gear_teeth: u16,
        motor_steps_per_revolution: u16,
    ) -> Result<Self, ConfigError> {
        if clock_teeth == 0 || gear_teeth == 0 {
            return Err(ConfigError::ZeroTeeth);
        }
        if motor_steps_per_revolution == 0 {
            return Err(ConfigError::ZeroSteps);
        }
        if clock_teeth % gear_teeth != 0 {
            return Err(ConfigError::UnevenGearRatio {
                clock_teeth,
                gear_teeth,
            });
        }

        let ratio = u32::from(clock_teeth / gear_teeth);
        let halfsteps_per_clock_revolution = ratio
            .checked_mul(u32::from(motor_steps_per_revolution))
            .and_then(|steps| steps.checked_mul(2))
            .ok_or(ConfigError::GeometryOverflow)?;

        Ok(Self {
            clock_teeth,
            gear_teeth,
            motor_steps_per_revolution,
            halfsteps_per_clock_revolution,
        })
    }

    /// Teeth on the clock-hand gear
    pub fn clock_teeth(&self) -> u16 {
        self.clock_teeth
    }

    /// Teeth on the motor gear
    pub fn gear_teeth(&self) -> u16 {
        self.gear_teeth
    }

    /// Full steps per motor revolution
    pub fn motor_steps_per_revolution(&self) -> u16 {
        self.motor_steps_per_revolution
    }

    /// Motor revolutions per clock-hand revolution
    pub fn gear_ratio(&self) -> u16 {
        self.clock_teeth / self.gear_teeth
    }

    /// Half-steps needed to turn the clock hand once
    pub fn halfsteps_per_clock_revolution(&self) -> u32 {
        self.halfsteps_per_clock_revolution
    }
}

/// Serialized form of [`ClockGeometry`]; validated on the way in
#[cfg(feature = "serde")]
#[derive(Serialize, Deserialize)]
struct GeometryFields {
    clock_teeth: u16,
    gear_teeth: u16,
    motor_steps_per_revolution: u16,
}

#[cfg(feature = "serde")]
impl TryFrom<GeometryFields> for ClockGeometry {
    type Error = ConfigError;

    fn try_from(fields: GeometryFields) -> Result<Self, Self::Error> {
        Self::new(
            fields.clock_teeth,
            fields.gear_teeth,
            fields.motor_steps_per_revolution,
        )
    }
}

#[cfg(feature = "serde")]
impl From<ClockGeometry> for GeometryFields {
    fn from(geometry: ClockGeometry) -> Self {
        Self {
            clock_teeth: geometry.clock_teeth,
            gear_teeth: geometry.gear_teeth,
            motor_steps_per_revolution: geometry.motor_steps_per_revolution,
        }
    }
}

impl Default for ClockGeometry {
    fn default() -> Self {
        Self::ROTCLOCK
    }
}
