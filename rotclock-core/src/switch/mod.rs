//! Three-position selector switch logic
//!
//! The selector pulls one or both of two inputs low. The combined two-bit
//! level pattern names the position; a debounce window filters contact
//! bounce while the lever moves.

pub mod debounce;
pub mod reading;

pub use debounce::Debouncer;
pub use reading::SwitchReading;
