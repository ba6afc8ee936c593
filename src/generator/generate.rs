//! ID generation logic
//!
//! `next_id` runs entirely under the worker lock. It may block for about one
//! tick when the sequence space of a tick is exhausted, or for up to the
//! configured tolerance when the clock steps backwards.

use std::cmp::Ordering;

use tracing::{trace, warn};

use crate::error::IdWorkerError;
use crate::layout::TIMESTAMP_MASK;

use super::state::WorkerState;
use super::time::{tick_duration, Clock, EPOCH_TICKS};
use super::IdWorker;

impl<C: Clock> IdWorker<C> {
    /// Produce the next id
    ///
    /// No two successful calls on one worker return the same value. On error
    /// the worker state is left untouched.
    pub fn next_id(&self) -> Result<i64, IdWorkerError> {
        let mut state = self.state.lock();
        let now = self.clock.now_ticks();

        let (tick, sequence, clash) = match now.cmp(&state.last_tick) {
            Ordering::Equal if state.sequence < self.config.max_sequence() => {
                (now, state.sequence + 1, state.clash)
            }
            Ordering::Equal => {
                trace!(tick = now, "sequence exhausted, waiting for next tick");
                let next = self.wait_next_tick(state.last_tick);
                if next > state.last_tick {
                    (next, 0, state.clash)
                } else {
                    self.absorb_backward_jump(&state, next)?
                }
            }
            Ordering::Greater => (now, 0, state.clash),
            Ordering::Less => self.absorb_backward_jump(&state, now)?,
        };

        let delta = Self::delta_since_epoch(tick)?;
        state.commit(tick, sequence, clash);

        Ok(self
            .config
            .layout()
            .pack(delta, self.config.node_id(), sequence, clash))
    }

    /// Handle a tick at or behind `last_tick`: wait out a small jump and flip
    /// the clash flag, refuse a large one
    ///
    /// The flag only flips onto a tick past `high_water_tick`. A tick at or
    /// below it may already carry ids under either flag value.
    fn absorb_backward_jump(
        &self,
        state: &WorkerState,
        now: i64,
    ) -> Result<(i64, u16, bool), IdWorkerError> {
        let tolerance = self.config.time_back_tolerance();
        let behind = state.high_water_tick - now;

        if behind > i64::from(tolerance) {
            warn!(behind, tolerance, "clock moved backwards beyond tolerance, refusing id");
            // Throttle callers retrying in a tight loop
            self.clock.sleep(tick_duration(i64::from(tolerance)));
            return Err(IdWorkerError::ClockRolledBackTooFar { behind, tolerance });
        }

        self.clock.sleep(tick_duration(behind + 1));
        let now = self.clock.now_ticks();
        if now < state.high_water_tick {
            let behind = state.high_water_tick - now;
            warn!(behind, tolerance, "clock still behind after waiting, refusing id");
            return Err(IdWorkerError::ClockRolledBackTooFar { behind, tolerance });
        }
        if now == state.high_water_tick {
            warn!(tick = now, "clock did not advance after waiting, refusing id");
            return Err(IdWorkerError::ClockStalled { tick: now });
        }

        warn!(behind, clash = !state.clash, "tolerated backward clock jump");
        Ok((now, 0, !state.clash))
    }

    #[inline]
    fn delta_since_epoch(tick: i64) -> Result<i64, IdWorkerError> {
        let delta = tick - EPOCH_TICKS;
        if delta < 0 {
            return Err(IdWorkerError::ClockBeforeEpoch { tick });
        }
        if delta > TIMESTAMP_MASK {
            return Err(IdWorkerError::TimestampOverflow { delta });
        }
        Ok(delta)
    }
}
