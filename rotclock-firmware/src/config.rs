//! Clock configuration
//!
//! Values come from clock.toml through build.rs. They were already
//! validated on the build host; they are validated again here so the
//! firmware never starts with a configuration the core would reject.

use rotclock_core::config::{ClockConfig, ClockGeometry, ConfigError};
use rotclock_hal_rp2040::{RpPin, GPIO_COUNT};

include!(concat!(env!("OUT_DIR"), "/clock_config.rs"));

pub(crate) use take_clock_pins;

/// GPIOs claimed by the clock
pub struct ClockPins {
    pub coil_a_plus: RpPin<'static>,
    pub coil_a_minus: RpPin<'static>,
    pub coil_b_plus: RpPin<'static>,
    pub coil_b_minus: RpPin<'static>,
    pub switch_first: RpPin<'static>,
    pub switch_second: RpPin<'static>,
}

/// Build the runtime configuration from the generated constants
pub fn clock_config() -> Result<ClockConfig, ConfigError> {
    PINS.validate(GPIO_COUNT)?;

    let geometry = ClockGeometry::new(CLOCK_TEETH, GEAR_TEETH, MOTOR_STEPS_PER_REVOLUTION)?;
    let config = ClockConfig::new(geometry)
        .with_debounce_ms(DEBOUNCE_MS)
        .with_undefined_policy(UNDEFINED_POLICY);

    match MAX_STEPS_PER_POLL {
        Some(cap) => config.with_step_cap(cap),
        None => Ok(config),
    }
}
