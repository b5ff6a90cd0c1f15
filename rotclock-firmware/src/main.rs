//! Rotclock - Rotating Hand Clock Firmware
//!
//! Main firmware binary for RP2040 boards. Drives one clock hand with a
//! bipolar stepper through an H-bridge; a three-position selector picks
//! whether it turns at second, minute or hour-hand speed.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use rotclock_drivers::{ClockDriver, HalfStepMotor};
use {defmt_rtt as _, panic_probe as _};

mod config;
mod tasks;

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Rotclock firmware starting...");

    // Initialize RP2040 peripherals
    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    // Fail fast: a clock with a bad gear ratio or pin map must not start
    let clock_config = match config::clock_config() {
        Ok(config) => config,
        Err(e) => defmt::panic!("Invalid clock configuration: {:?}", e),
    };
    info!(
        "Clock config: {} half-steps/rev, debounce {} ms, step cap {:?}",
        clock_config.geometry.halfsteps_per_clock_revolution(),
        clock_config.debounce_ms,
        clock_config.max_steps_per_poll
    );

    let pins = config::take_clock_pins!(p);
    info!(
        "Pins: coils {:?}, switch {:?}",
        config::PINS.coil_pins(),
        config::PINS.switch_pins()
    );

    let motor = HalfStepMotor::new(
        pins.coil_a_plus,
        pins.coil_a_minus,
        pins.coil_b_plus,
        pins.coil_b_minus,
    );
    let clock = ClockDriver::new(&clock_config, motor, pins.switch_first, pins.switch_second);

    spawner.spawn(tasks::clock_task(clock)).unwrap();

    info!("All tasks spawned, firmware running");
}
