//! Wait strategies for sequence exhaustion
//!
//! Spin briefly, then sleep with exponential backoff. The wait is bounded to
//! roughly one tick; the caller re-checks the returned tick.

use std::thread;
use std::time::Duration;

use crate::config::WorkerConfig;

use super::time::{Clock, TICK};

/// First backoff step
pub const INITIAL_BACKOFF: Duration = Duration::from_millis(1);

/// Perform spin-wait loop, checking for tick advancement
///
/// Returns Some(new_tick) if the tick advanced, None if spin loops exhausted
#[inline]
pub fn spin_wait<F>(from_tick: i64, config: &WorkerConfig, now: F) -> Option<i64>
where
    F: Fn() -> i64,
{
    if !config.spin_enabled() || config.spin_loops() == 0 {
        return None;
    }

    let yield_every = config.spin_yield_every();

    for i in 0..config.spin_loops() {
        let tick = now();
        if tick > from_tick {
            return Some(tick);
        }

        std::hint::spin_loop();

        if yield_every != 0 && i % yield_every == yield_every - 1 {
            thread::yield_now();
        }
    }

    None
}

/// Sleep with exponential backoff until the tick advances or one tick has been slept
///
/// Returns the last sampled tick, which may still equal `from_tick` if the
/// clock stalled or stepped back.
#[inline]
pub fn sleep_until_next_tick<C: Clock + ?Sized>(from_tick: i64, clock: &C) -> i64 {
    let mut backoff = INITIAL_BACKOFF;
    let mut slept = Duration::ZERO;
    loop {
        clock.sleep(backoff);
        slept += backoff;
        let tick = clock.now_ticks();
        if tick > from_tick || slept >= TICK {
            return tick;
        }
        backoff = next_backoff(backoff);
    }
}

/// Next backoff step, doubling and capped at one tick
#[inline(always)]
pub fn next_backoff(current: Duration) -> Duration {
    let next = current.saturating_mul(2);
    if next > TICK {
        TICK
    } else {
        next
    }
}
