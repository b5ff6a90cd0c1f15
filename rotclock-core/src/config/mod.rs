//! Configuration types
//!
//! Everything here is validated once, before the clock starts running.
//! A configuration that fails validation is never handed to the drivers.

pub mod geometry;
pub mod pins;

pub use geometry::*;
pub use pins::*;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Default selector debounce interval
pub const DEFAULT_DEBOUNCE_MS: u32 = 50;

/// Configuration errors
///
/// All of these are detected at initialization and are not retryable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Clock or gear tooth count is zero
    ZeroTeeth,
    /// Motor steps per revolution is zero
    ZeroSteps,
    /// Clock teeth are not a whole multiple of gear teeth
    UnevenGearRatio { clock_teeth: u16, gear_teeth: u16 },
    /// Half-steps per clock revolution does not fit in `u32`
    GeometryOverflow,
    /// Pin number beyond the platform's GPIO count
    PinOutOfRange(u8),
    /// Same pin assigned to two functions
    DuplicatePin(u8),
    /// Burst cap of zero would stop the hand forever
    ZeroStepCap,
}

impl core::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ConfigError::ZeroTeeth => write!(f, "gear tooth count is zero"),
            ConfigError::ZeroSteps => write!(f, "motor steps per revolution is zero"),
            ConfigError::UnevenGearRatio {
                clock_teeth,
                gear_teeth,
            } => write!(
                f,
                "clock teeth ({}) not a multiple of gear teeth ({})",
                clock_teeth, gear_teeth
            ),
            ConfigError::GeometryOverflow => {
                write!(f, "half-steps per clock revolution overflow u32")
            }
            ConfigError::PinOutOfRange(pin) => write!(f, "pin {} does not exist", pin),
            ConfigError::DuplicatePin(pin) => write!(f, "pin {} assigned twice", pin),
            ConfigError::ZeroStepCap => write!(f, "step cap must be at least 1"),
        }
    }
}

/// What the clock does with an `Undefined` selector reading after startup
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum UndefinedPolicy {
    /// Treat it as an unreachable state and panic
    #[default]
    Assert,
    /// Turn at the hour-hand rate, like the reference device
    FallbackToHour,
}

/// Complete clock configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ClockConfig {
    /// Gear train and motor geometry
    pub geometry: ClockGeometry,
    /// Minimum quiet time between accepted selector changes
    pub debounce_ms: u32,
    /// Upper bound on half-steps issued by one poll (None = unbounded)
    pub max_steps_per_poll: Option<u32>,
    /// Handling of an `Undefined` selector reading
    pub undefined_policy: UndefinedPolicy,
}

impl ClockConfig {
    /// Create a config with default debounce and no burst cap
    pub const fn new(geometry: ClockGeometry) -> Self {
        Self {
            geometry,
            debounce_ms: DEFAULT_DEBOUNCE_MS,
            max_steps_per_poll: None,
            undefined_policy: UndefinedPolicy::Assert,
        }
    }

    /// Set the selector debounce interval
    pub const fn with_debounce_ms(mut self, debounce_ms: u32) -> Self {
        self.debounce_ms = debounce_ms;
        self
    }

    /// Limit how many half-steps a single poll may issue
    ///
    /// Owed steps beyond the cap stay in the accumulator and are paid out
    /// on later polls.
    pub fn with_step_cap(mut self, max_steps_per_poll: u32) -> Result<Self, ConfigError> {
        if max_steps_per_poll == 0 {
            return Err(ConfigError::ZeroStepCap);
        }
        self.max_steps_per_poll = Some(max_steps_per_poll);
        Ok(self)
    }

    /// Set the `Undefined` selector policy
    pub const fn with_undefined_policy(mut self, policy: UndefinedPolicy) -> Self {
        self.undefined_policy = policy;
        self
    }
}

impl Default for ClockConfig {
    fn default() -> Self {
        Self::new(ClockGeometry::ROTCLOCK)
    }
}
