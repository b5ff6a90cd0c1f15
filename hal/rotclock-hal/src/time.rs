//! Time source abstraction

/// Monotonic millisecond counter
///
/// The counter wraps at 2^32 (about 49.7 days). Consumers must compute
/// elapsed time with `wrapping_sub` so that a delta taken across the
/// rollover is still correct.
pub trait MillisClock {
    /// Milliseconds since an arbitrary platform epoch, modulo 2^32
    fn now_millis(&self) -> u32;
}

impl<T: MillisClock + ?Sized> MillisClock for &T {
    fn now_millis(&self) -> u32 {
        (**self).now_millis()
    }
}
