//! Selector change notification

use crate::switch::SwitchReading;

/// Receiver of confirmed selector transitions
///
/// The switch calls this exactly once per accepted change, plus once for
/// the initial reading taken at startup.
pub trait SwitchListener {
    /// A new debounced reading has been accepted
    fn on_switch_change(&mut self, reading: SwitchReading);
}

impl<F: FnMut(SwitchReading)> SwitchListener for F {
    fn on_switch_change(&mut self, reading: SwitchReading) {
        self(reading)
    }
}
