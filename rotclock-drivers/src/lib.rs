//! Hardware driver implementations
//!
//! This crate binds the logic in rotclock-core to pins from rotclock-hal:
//!
//! - Half-stepping bipolar motor on four coil outputs
//! - Debounced three-position selector on two pulled-up inputs
//! - Clock driver composing both and pacing the motor
//! - Adapters for `embedded-hal` 1.0 digital pins

#![no_std]
#![deny(unsafe_code)]

pub mod clock;
pub mod gpio;
pub mod stepper;
pub mod switch;

pub use clock::ClockDriver;
pub use stepper::HalfStepMotor;
pub use switch::SelectorSwitch;
