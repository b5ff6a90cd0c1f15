//! RP2040-specific HAL for the rotating hand clock
//!
//! This crate provides RP2040 implementations of the shared
//! `rotclock-hal` traits:
//!
//! - GPIO pins with run-time mode selection (`RpPin` over `gpio::Flex`)
//! - Millisecond clock from the embassy time driver (`EmbassyMillis`)

#![no_std]

pub mod gpio;
pub mod time;

pub use gpio::RpPin;
pub use time::EmbassyMillis;

/// Number of user GPIOs on the RP2040 (GPIO0..GPIO29)
pub const GPIO_COUNT: u8 = 30;
