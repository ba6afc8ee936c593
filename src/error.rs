use thiserror::Error;

use crate::codec::CodecError;

/// Represents errors that can occur while producing or decoding ids
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IdWorkerError {
    /// Node id does not fit the selected layout
    #[error("Node ID {node_id} is invalid. Maximum allowed value is {max}")]
    NodeIdOutOfRange { node_id: u16, max: u16 },

    /// No non-loopback RFC1918 IPv4 address was found on this host
    #[error("No private IPv4 address found to derive a node ID from")]
    NoPrivateAddress,

    /// Clock moved backwards further than the configured tolerance
    #[error(
        "Clock moved backwards by {behind} ticks, more than the tolerated {tolerance}. Refusing to generate id"
    )]
    ClockRolledBackTooFar { behind: i64, tolerance: u32 },

    /// Clock stayed on an already used tick after waiting for it to advance
    #[error("Clock did not advance past tick {tick}. Refusing to generate id")]
    ClockStalled { tick: i64 },

    /// Clock reads earlier than the generator epoch
    #[error("Clock tick {tick} is before the generator epoch")]
    ClockBeforeEpoch { tick: i64 },

    /// Ticks since the epoch no longer fit the timestamp field
    #[error("Tick delta {delta} does not fit the 37-bit timestamp field")]
    TimestampOverflow { delta: i64 },

    /// Value is below the smallest id this scheme can produce
    #[error("ID {id} is illegal, it must be at least {min}")]
    IdTooSmall { id: i64, min: i64 },

    #[error(transparent)]
    Codec(#[from] CodecError),
}
