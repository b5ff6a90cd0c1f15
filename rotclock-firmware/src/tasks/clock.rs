//! Clock polling task
//!
//! The clock logic is synchronous; this task only supplies timestamps at a
//! steady cadence. Step timing accuracy does not depend on the cadence,
//! since elapsed time is measured, not assumed.

use defmt::*;
use embassy_time::{Duration, Ticker};
use rotclock_drivers::{ClockDriver, HalfStepMotor};
use rotclock_hal::MillisClock;
use rotclock_hal_rp2040::{EmbassyMillis, RpPin};

/// Poll interval in milliseconds
pub const POLL_INTERVAL_MS: u64 = 1;

/// Concrete clock driver for this board
pub type Clock = ClockDriver<HalfStepMotor<RpPin<'static>>, RpPin<'static>>;

/// Clock task - starts the motor and polls the clock forever
#[embassy_executor::task]
pub async fn clock_task(mut clock: Clock) {
    info!("Clock task started");

    let millis = EmbassyMillis;
    clock.begin(millis.now_millis());

    let mut ticker = Ticker::every(Duration::from_millis(POLL_INTERVAL_MS));
    let mut half_steps: u32 = 0;

    loop {
        ticker.next().await;

        let steps = clock.poll(millis.now_millis());
        if steps > 0 {
            half_steps = half_steps.wrapping_add(steps);
            trace!("{} half-steps (total {})", steps, half_steps);
        }
        if steps > 8 {
            debug!("Step burst: {} half-steps in one poll", steps);
        }
    }
}
