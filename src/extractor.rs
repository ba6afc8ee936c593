use std::fmt;

use chrono::{DateTime, TimeDelta, Utc};

use crate::error::IdWorkerError;
use crate::generator::time::{EPOCH_TICKS, TICK_NANOS};
use crate::layout::Layout;

/// Smallest value accepted by [`decode`]
pub const MIN_VALID_ID: i64 = 67_117_056;

const MILLIS_PER_TICK: i64 = TICK_NANOS / 1_000_000;

/// Fields recovered from a packed id
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DecodedId {
    layout: Layout,
    node_id: u16,
    ticks: i64,
    sequence: u16,
    clash: bool,
}

impl DecodedId {
    #[inline(always)]
    pub const fn layout(&self) -> Layout {
        self.layout
    }

    #[inline(always)]
    pub const fn is_custom(&self) -> bool {
        self.layout.is_custom()
    }

    #[inline(always)]
    pub const fn node_id(&self) -> u16 {
        self.node_id
    }

    /// Ticks elapsed since the generator epoch
    #[inline(always)]
    pub const fn ticks(&self) -> i64 {
        self.ticks
    }

    #[inline(always)]
    pub const fn sequence(&self) -> u16 {
        self.sequence
    }

    #[inline(always)]
    pub const fn clash(&self) -> bool {
        self.clash
    }

    /// Wall-clock time of the id, at tick granularity
    ///
    /// `ticks` is at most 37 bits wide, which keeps the sum far inside
    /// chrono's range.
    pub fn timestamp(&self) -> DateTime<Utc> {
        let millis = (EPOCH_TICKS + self.ticks) * MILLIS_PER_TICK;
        DateTime::UNIX_EPOCH + TimeDelta::milliseconds(millis)
    }

    /// Human readable node: `"a.b"` (third and fourth octet) for IP-derived
    /// nodes, decimal for custom ones
    pub fn node_str(&self) -> String {
        match self.layout {
            Layout::IpDerived => format!("{}.{}", self.node_id >> 8, self.node_id & 0xFF),
            Layout::Custom => self.node_id.to_string(),
        }
    }
}

impl fmt::Display for DecodedId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "DecodedId[custom: {}, node: {} ({}), time: {}, sequence: {}, clash: {}]",
            self.is_custom(),
            self.node_id,
            self.node_str(),
            self.timestamp().format("%Y-%m-%d %H:%M:%S%.3f"),
            self.sequence,
            self.clash
        )
    }
}

/// Decode an id produced by an [`IdWorker`](crate::IdWorker)
///
/// The layout is read from the id itself, so no worker is needed.
pub fn decode(id: i64) -> Result<DecodedId, IdWorkerError> {
    if id < MIN_VALID_ID {
        return Err(IdWorkerError::IdTooSmall {
            id,
            min: MIN_VALID_ID,
        });
    }

    let layout = Layout::of(id);
    let (ticks, node_id, sequence, clash) = layout.unpack(id);
    Ok(DecodedId {
        layout,
        node_id,
        ticks,
        sequence,
        clash,
    })
}
