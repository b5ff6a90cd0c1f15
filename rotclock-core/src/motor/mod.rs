//! Bipolar stepper coil sequencing
//!
//! Pure table logic; the pin-bound motor lives in the drivers crate.

pub mod sequence;

pub use sequence::{CoilPattern, StepIndex, HALF_STEP_SEQUENCE};
