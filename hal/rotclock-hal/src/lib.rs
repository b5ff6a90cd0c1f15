//! Rotclock Hardware Abstraction Layer
//!
//! This crate defines the platform capabilities the clock logic consumes.
//! Chip-specific HALs (RP2040, ...) implement them; the core and driver
//! crates never touch a register directly.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  Application (rotclock-firmware)        │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  rotclock-drivers (motor, switch, clock)│
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  rotclock-hal (this crate - traits)     │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//!             ┌───────────────┐
//!             │ rotclock-hal- │
//!             │    rp2040     │
//!             └───────────────┘
//! ```
//!
//! # Traits
//!
//! - [`gpio::ConfigurePin`] - One-time pin mode selection
//! - [`gpio::OutputPin`], [`gpio::InputPin`] - Digital I/O
//! - [`time::MillisClock`] - Wrapping millisecond counter

#![no_std]
#![deny(unsafe_code)]

pub mod gpio;
pub mod time;

// Re-export key traits at crate root for convenience
pub use gpio::{ConfigurePin, InputPin, OutputPin, PinMode};
pub use time::MillisClock;
