//! Hardware abstraction traits
//!
//! These traits define the interface between the clock logic
//! and the pin-bound driver implementations.

pub mod listener;
pub mod stepper;

pub use listener::SwitchListener;
pub use stepper::{Direction, HalfStepper};
