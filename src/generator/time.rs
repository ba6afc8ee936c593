//! Time utilities for id generation
//!
//! The generator counts in 10 ms ticks from a fixed epoch

use std::thread;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

/// Generator time unit
pub const TICK: Duration = Duration::from_millis(10);

/// Nanoseconds per tick
pub const TICK_NANOS: i64 = 10_000_000;

/// Epoch in ticks since the Unix epoch: 2023-07-21T00:00:00+08:00
pub const EPOCH_TICKS: i64 = 168_986_880_000;

/// Source of the current tick
///
/// Production code uses [`SystemClock`]. Tests plug in a manual clock to step
/// time forwards and backwards deterministically.
pub trait Clock: Send + Sync {
    /// Current time in ticks since the Unix epoch
    fn now_ticks(&self) -> i64;

    /// Block the calling thread for `duration`
    fn sleep(&self, duration: Duration) {
        thread::sleep(duration);
    }
}

/// Wall clock backed by [`SystemTime`]
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    #[inline(always)]
    fn now_ticks(&self) -> i64 {
        unix_time_ticks()
    }
}

/// Current wall-clock time in ticks since the Unix epoch, 0 if the clock is set before 1970
#[inline(always)]
pub fn unix_time_ticks() -> i64 {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos();
    (nanos / TICK_NANOS as u128) as i64
}

/// Duration of `ticks` ticks
#[inline]
pub fn tick_duration(ticks: i64) -> Duration {
    Duration::from_nanos((ticks.max(0) as u64).saturating_mul(TICK_NANOS as u64))
}
