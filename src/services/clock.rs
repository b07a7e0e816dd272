//! Wall-clock source for request-time timestamps.
use chrono::{Local, NaiveDateTime};

/// Current local date-time, without a timezone offset.
///
/// Note:
/// - No monotonicity is promised; a backward clock adjustment shows up as-is.
pub trait Clock: Send + Sync + 'static {
    fn now(&self) -> NaiveDateTime;
}

/// Reads the host's local clock on every call.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn system_clock_does_not_go_backwards_between_reads() {
        let clock = SystemClock;
        let first = clock.now();
        let second = clock.now();
        assert!(first <= second);
    }
}
