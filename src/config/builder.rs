//! WorkerConfig builder for constructing configuration

use super::WorkerConfig;
use crate::error::IdWorkerError;
use crate::layout::Layout;

/// Default configuration values
pub(super) const DEFAULT_LAYOUT: Layout = Layout::Custom;
pub(super) const DEFAULT_NODE_ID: u16 = 0;
/// Tolerated backward clock jump, in ticks (1 second)
pub const DEFAULT_TIME_BACK_TOLERANCE: u32 = 100;
pub(super) const DEFAULT_SPIN_ENABLED: bool = true;
pub(super) const DEFAULT_SPIN_LOOPS: u32 = 64;
pub(super) const DEFAULT_SPIN_YIELD_EVERY: u32 = 16;

/// Builder for WorkerConfig
#[derive(Debug, Clone)]
pub struct WorkerConfigBuilder {
    pub(super) layout: Layout,
    pub(super) node_id: u16,
    pub(super) time_back_tolerance: u32,
    pub(super) spin_enabled: bool,
    pub(super) spin_loops: u32,
    pub(super) spin_yield_every: u32,
}

impl WorkerConfigBuilder {
    /// Create a new WorkerConfigBuilder with default values
    pub fn new() -> Self {
        Self {
            layout: DEFAULT_LAYOUT,
            node_id: DEFAULT_NODE_ID,
            time_back_tolerance: DEFAULT_TIME_BACK_TOLERANCE,
            spin_enabled: DEFAULT_SPIN_ENABLED,
            spin_loops: DEFAULT_SPIN_LOOPS,
            spin_yield_every: DEFAULT_SPIN_YIELD_EVERY,
        }
    }

    /// Use the IP-derived layout with the given 16-bit node hint
    pub const fn ip_node(mut self, node_hint: u16) -> Self {
        self.layout = Layout::IpDerived;
        self.node_id = node_hint;
        self
    }

    /// Use the custom layout with a caller assigned node id (0-1023)
    pub const fn custom_node(mut self, node_id: u16) -> Self {
        self.layout = Layout::Custom;
        self.node_id = node_id;
        self
    }

    /// Maximum backward clock jump, in ticks, absorbed before refusing
    pub const fn time_back_tolerance(mut self, ticks: u32) -> Self {
        self.time_back_tolerance = ticks;
        self
    }

    /// Enable or disable micro spin before sleep on sequence exhaustion
    pub const fn enable_spin(mut self, enable: bool) -> Self {
        self.spin_enabled = enable;
        self
    }

    /// Set number of spin loops attempted before falling back to sleep
    pub const fn spin_loops(mut self, loops: u32) -> Self {
        self.spin_loops = loops;
        self
    }

    /// Set spin yield cadence. Yield every N spin iterations; 0 disables yielding
    pub const fn spin_yield_every(mut self, n: u32) -> Self {
        self.spin_yield_every = n;
        self
    }

    /// Validate the node id against the layout and build the final WorkerConfig
    pub fn build(self) -> Result<WorkerConfig, IdWorkerError> {
        let max = self.layout.max_node_id();
        if self.node_id > max {
            return Err(IdWorkerError::NodeIdOutOfRange {
                node_id: self.node_id,
                max,
            });
        }
        Ok(WorkerConfig::from_builder(self))
    }
}

impl Default for WorkerConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
