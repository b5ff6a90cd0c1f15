//! Clock rate logic
//!
//! Converts elapsed wall-clock time into half-steps for whichever hand is
//! selected, carrying the fractional remainder forward so the long-run
//! rate is exact.

pub mod accumulator;
pub mod hand;
pub mod timer;

pub use accumulator::StepAccumulator;
pub use hand::{HandSelection, HOUR_PERIOD_MS, MINUTE_PERIOD_MS, SECOND_PERIOD_MS};
pub use timer::{ClockPhase, StepClock};
