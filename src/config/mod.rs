//! Configuration for the id worker

mod builder;

pub use builder::{WorkerConfigBuilder, DEFAULT_TIME_BACK_TOLERANCE};
use builder::{
    DEFAULT_LAYOUT, DEFAULT_NODE_ID, DEFAULT_SPIN_ENABLED, DEFAULT_SPIN_LOOPS,
    DEFAULT_SPIN_YIELD_EVERY,
};

use crate::layout::Layout;

/// Immutable worker configuration
///
/// Always holds a node id that fits its layout; the only way to obtain one
/// is through [`WorkerConfigBuilder::build`] or [`Default`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkerConfig {
    layout: Layout,
    node_id: u16,
    time_back_tolerance: u32,
    spin_enabled: bool,
    spin_loops: u32,
    spin_yield_every: u32,
}

impl WorkerConfig {
    /// Create config from a validated builder
    pub(crate) fn from_builder(b: WorkerConfigBuilder) -> Self {
        Self {
            layout: b.layout,
            node_id: b.node_id,
            time_back_tolerance: b.time_back_tolerance,
            spin_enabled: b.spin_enabled,
            spin_loops: b.spin_loops,
            spin_yield_every: b.spin_yield_every,
        }
    }

    /// Create a new configuration builder
    pub fn builder() -> WorkerConfigBuilder {
        WorkerConfigBuilder::new()
    }

    #[inline(always)]
    pub const fn layout(&self) -> Layout {
        self.layout
    }

    #[inline(always)]
    pub const fn node_id(&self) -> u16 {
        self.node_id
    }

    #[inline(always)]
    pub const fn is_custom(&self) -> bool {
        self.layout.is_custom()
    }

    /// Tolerated backward clock jump in ticks
    #[inline(always)]
    pub const fn time_back_tolerance(&self) -> u32 {
        self.time_back_tolerance
    }

    #[inline(always)]
    pub const fn max_sequence(&self) -> u16 {
        self.layout.max_sequence()
    }

    #[inline(always)]
    pub const fn spin_enabled(&self) -> bool {
        self.spin_enabled
    }

    #[inline(always)]
    pub const fn spin_loops(&self) -> u32 {
        self.spin_loops
    }

    #[inline(always)]
    pub const fn spin_yield_every(&self) -> u32 {
        self.spin_yield_every
    }
}

impl Default for WorkerConfig {
    fn default() -> Self {
        Self {
            layout: DEFAULT_LAYOUT,
            node_id: DEFAULT_NODE_ID,
            time_back_tolerance: DEFAULT_TIME_BACK_TOLERANCE,
            spin_enabled: DEFAULT_SPIN_ENABLED,
            spin_loops: DEFAULT_SPIN_LOOPS,
            spin_yield_every: DEFAULT_SPIN_YIELD_EVERY,
        }
    }
}
