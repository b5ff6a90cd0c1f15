//! Millisecond clock backed by the embassy time driver

use embassy_time::Instant;
use rotclock_hal::MillisClock;

/// `MillisClock` over `embassy_time::Instant`
///
/// Embassy counts in 64 bits; truncating to `u32` gives the wrapping
/// counter the clock logic expects.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbassyMillis;

impl MillisClock for EmbassyMillis {
    fn now_millis(&self) -> u32 {
        Instant::now().as_millis() as u32
    }
}
