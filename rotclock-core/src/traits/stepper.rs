//! Half-stepping motor trait

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Motor rotation direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Direction {
    /// Clockwise rotation
    Clockwise,
    /// Counter-clockwise rotation
    CounterClockwise,
}

impl Direction {
    /// Get the opposite direction
    pub fn opposite(self) -> Self {
        match self {
            Direction::Clockwise => Direction::CounterClockwise,
            Direction::CounterClockwise => Direction::Clockwise,
        }
    }
}

/// Trait for motors driven one half-step at a time
///
/// Implementations have no notion of time. The caller decides when and
/// how often to step.
pub trait HalfStepper {
    /// Configure the coil outputs and energize the first sequence position
    fn begin(&mut self);

    /// Move one half-step in the given direction
    fn half_step(&mut self, direction: Direction);
}
