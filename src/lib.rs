//! # flakeid
//!
//! Coordination-free 63-bit Snowflake-style ids for clustered deployments.
//!
//! - 🕒 37-bit timestamp in 10 ms ticks (~44 years from 2023-07-21)
//! - 🌐 Node id from the low 16 bits of a private IPv4 address, or a custom 0-1023 id
//! - 🔁 Tolerates small backward clock jumps with a clash bit, refuses large ones
//! - 🔒 One lock per worker, no process-wide state
//! - 🔤 Reversible base62 / base82 string forms

#![forbid(unsafe_code)]

pub mod codec;
mod config;
mod error;
mod extractor;
mod generator;
mod layout;
pub mod node;

#[cfg(test)]
pub mod tests;

// Re-export main types
pub use config::{WorkerConfig, WorkerConfigBuilder, DEFAULT_TIME_BACK_TOLERANCE};
pub use error::IdWorkerError;
pub use extractor::{decode, DecodedId, MIN_VALID_ID};
pub use generator::time::{Clock, SystemClock, EPOCH_TICKS, TICK};
pub use generator::IdWorker;
pub use layout::Layout;

pub use codec::CodecError;
pub use codec::{decode_base62, decode_base82, encode_base62, encode_base82};
