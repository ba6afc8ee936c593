//! Id worker
//!
//! Split into modules for testability:
//! - `state` - Lock-guarded tick, sequence and clash bookkeeping
//! - `time` - Tick clock and epoch
//! - `wait` - Spin and backoff until the next tick
//! - `generate` - The `next_id` state machine

mod codec_methods;
mod generate;
pub(crate) mod state;
pub(crate) mod time;
mod wait;

use parking_lot::Mutex;
use tracing::debug;

use crate::config::{WorkerConfig, DEFAULT_TIME_BACK_TOLERANCE};
use crate::error::IdWorkerError;
use crate::layout::Layout;
#[cfg(feature = "ip-node")]
use crate::node::PrivateIpv4Provider;
use crate::node::NodeHintProvider;

use state::WorkerState;
use time::{Clock, SystemClock};
use wait::{sleep_until_next_tick, spin_wait};

/// Produces unique ids for one node
///
/// All state lives behind a single lock; concurrent callers serialize,
/// including while one of them waits out an exhausted tick or a backward
/// clock jump.
#[derive(Debug)]
pub struct IdWorker<C: Clock = SystemClock> {
    config: WorkerConfig,
    state: Mutex<WorkerState>,
    clock: C,
}

impl IdWorker<SystemClock> {
    /// Node id from the low 16 bits of this host's private IPv4 address
    #[cfg(feature = "ip-node")]
    pub fn from_private_ip() -> Result<Self, IdWorkerError> {
        Self::from_private_ip_with_tolerance(DEFAULT_TIME_BACK_TOLERANCE)
    }

    /// Like [`IdWorker::from_private_ip`] with a custom backward-jump tolerance in ticks
    #[cfg(feature = "ip-node")]
    pub fn from_private_ip_with_tolerance(tolerance: u32) -> Result<Self, IdWorkerError> {
        Self::from_provider(&PrivateIpv4Provider, tolerance)
    }

    /// IP-derived layout with the node hint taken from `provider`
    pub fn from_provider<P>(provider: &P, tolerance: u32) -> Result<Self, IdWorkerError>
    where
        P: NodeHintProvider + ?Sized,
    {
        let config = WorkerConfig::builder()
            .ip_node(provider.node_hint()?)
            .time_back_tolerance(tolerance)
            .build()?;
        Ok(Self::with_config(config))
    }

    /// Custom layout with a caller assigned node id (0-1023)
    pub fn with_custom_node(node_id: u16) -> Result<Self, IdWorkerError> {
        Self::with_custom_node_and_tolerance(node_id, DEFAULT_TIME_BACK_TOLERANCE)
    }

    /// Custom layout with a custom backward-jump tolerance in ticks
    pub fn with_custom_node_and_tolerance(
        node_id: u16,
        tolerance: u32,
    ) -> Result<Self, IdWorkerError> {
        let config = WorkerConfig::builder()
            .custom_node(node_id)
            .time_back_tolerance(tolerance)
            .build()?;
        Ok(Self::with_config(config))
    }

    /// Create from a validated configuration using the system clock
    pub fn with_config(config: WorkerConfig) -> Self {
        Self::with_clock(config, SystemClock)
    }
}

impl<C: Clock> IdWorker<C> {
    /// Create from a validated configuration and an explicit clock
    pub fn with_clock(config: WorkerConfig, clock: C) -> Self {
        debug!(
            layout = ?config.layout(),
            node_id = config.node_id(),
            tolerance = config.time_back_tolerance(),
            "created id worker"
        );
        Self {
            config,
            state: Mutex::new(WorkerState::new()),
            clock,
        }
    }

    #[inline(always)]
    pub fn config(&self) -> &WorkerConfig {
        &self.config
    }

    #[inline(always)]
    pub fn node_id(&self) -> u16 {
        self.config.node_id()
    }

    #[inline(always)]
    pub fn layout(&self) -> Layout {
        self.config.layout()
    }

    /// Wait for the tick after `from_tick`, returning the last sample
    pub(crate) fn wait_next_tick(&self, from_tick: i64) -> i64 {
        if let Some(tick) = spin_wait(from_tick, &self.config, || self.clock.now_ticks()) {
            return tick;
        }
        sleep_until_next_tick(from_tick, &self.clock)
    }

    #[cfg(test)]
    pub(crate) fn snapshot(&self) -> WorkerState {
        *self.state.lock()
    }

    #[cfg(test)]
    pub(crate) fn clock(&self) -> &C {
        &self.clock
    }
}
