//! Board-agnostic core logic for the rotating hand clock
//!
//! This crate contains all clock logic that does not depend on
//! specific hardware implementations:
//!
//! - Configuration types and validation (gear geometry, pin assignment)
//! - Hand selection and per-hand revolution periods
//! - Half-step coil sequence for a bipolar stepper
//! - Selector switch readings and debounce policy
//! - Fixed-point step accumulator and the clock rate state machine
//! - Traits connecting the logic to the pin-bound drivers

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod clock;
pub mod config;
pub mod motor;
pub mod switch;
pub mod traits;
