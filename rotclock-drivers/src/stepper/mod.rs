//! Stepper motor drivers

pub mod half_step;

pub use half_step::HalfStepMotor;
