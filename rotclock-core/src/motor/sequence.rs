//! Half-step coil sequence
//!
//! A bipolar stepper has two coils (A and B), each with a positive and a
//! negative terminal. Energizing them in the order below turns the rotor
//! one half-step per entry:
//!
//! ```text
//! index  A+ A- B+ B-
//!   0     1  0  0  0    A+  B0
//!   1     1  0  1  0    A+  B+
//!   2     0  0  1  0    A0  B+
//!   3     0  1  1  0    A-  B+
//!   4     0  1  0  0    A-  B0
//!   5     0  1  0  1    A-  B-
//!   6     0  0  0  1    A0  B-
//!   7     1  0  0  1    A+  B-
//! ```

use crate::traits::Direction;

/// Number of positions in one electrical cycle
pub const SEQUENCE_LEN: u8 = 8;

const A_PLUS: u8 = 0b1000;
const A_MINUS: u8 = 0b0100;
const B_PLUS: u8 = 0b0010;
const B_MINUS: u8 = 0b0001;

/// Energized terminals for one sequence position
///
/// Bit 3..0 = A+, A-, B+, B-. A set bit energizes that half-coil.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CoilPattern(u8);

impl CoilPattern {
    /// All terminals off
    pub const RELEASED: Self = Self(0);

    /// Raw 4-bit pattern
    pub const fn bits(self) -> u8 {
        self.0
    }

    pub const fn a_plus(self) -> bool {
        self.0 & A_PLUS != 0
    }

    pub const fn a_minus(self) -> bool {
        self.0 & A_MINUS != 0
    }

    pub const fn b_plus(self) -> bool {
        self.0 & B_PLUS != 0
    }

    pub const fn b_minus(self) -> bool {
        self.0 & B_MINUS != 0
    }

    /// Pin levels in terminal order (A+, A-, B+, B-)
    pub const fn levels(self) -> [bool; 4] {
        [self.a_plus(), self.a_minus(), self.b_plus(), self.b_minus()]
    }
}

/// Clockwise half-step sequence
pub const HALF_STEP_SEQUENCE: [CoilPattern; SEQUENCE_LEN as usize] = [
    CoilPattern(A_PLUS),
    CoilPattern(A_PLUS | B_PLUS),
    CoilPattern(B_PLUS),
    CoilPattern(A_MINUS | B_PLUS),
    CoilPattern(A_MINUS),
    CoilPattern(A_MINUS | B_MINUS),
    CoilPattern(B_MINUS),
    CoilPattern(A_PLUS | B_MINUS),
];

/// Position in the half-step sequence (0..8)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct StepIndex(u8);

impl StepIndex {
    /// Index wrapped into the sequence range
    pub const fn new(index: u8) -> Self {
        Self(index & (SEQUENCE_LEN - 1))
    }

    pub const fn value(self) -> u8 {
        self.0
    }

    /// Neighbouring position in the given direction
    ///
    /// Adding 7 is subtracting 1 modulo 8, so both directions are the
    /// same masked add.
    pub fn advance(self, direction: Direction) -> Self {
        let delta = match direction {
            Direction::Clockwise => 1,
            Direction::CounterClockwise => SEQUENCE_LEN - 1,
        };
        Self((self.0 + delta) & (SEQUENCE_LEN - 1))
    }

    /// Coil pattern for this position
    pub fn pattern(self) -> CoilPattern {
        HALF_STEP_SEQUENCE[usize::from(self.0)]
    }
}
