//! Clock driver

pub mod driver;

pub use driver::ClockDriver;
