//! Sharded Snowflake-style 63-bit id generation with a runtime-configurable
//! bit layout.
//!
//! Each id packs a millisecond timestamp delta (relative to a configured
//! epoch), an administratively assigned shard id, and a per-millisecond
//! sequence counter into one non-negative `i64`, most-significant field
//! first. Ids from one shard are strictly increasing; ids across shards are
//! globally unique and approximately time-sortable without any request-time
//! coordination.
//!
//! The bit-width split between the sequence and shard fields is part of the
//! [`Config`] rather than the type, validated once at construction. The
//! remaining bits (at least 40) hold the timestamp delta.
//!
//! # Example
//! ```
//! use shardid::{Config, LockGenerator, UnixClock};
//!
//! let config = Config::new(3, shardid::DEFAULT_EPOCH_MS)?;
//! let generator = LockGenerator::new(config, UnixClock);
//!
//! let id = generator.next_id()?;
//! assert_eq!(config.decode_shard(id), 3);
//! assert!(config.decode_sequence(id) <= config.max_sequence());
//! # Ok::<(), shardid::Error>(())
//! ```
//!
//! Within one millisecond the sequence counter distinguishes ids; when it is
//! exhausted the generator waits for the clock to tick rather than ever
//! reusing a `(timestamp, shard, sequence)` triple. A wall clock observed
//! running backwards relative to the last issued id is an error, never
//! silently absorbed.

mod config;
mod error;
mod generator;
mod id;
#[cfg(feature = "serde")]
mod serde;
mod status;
mod time;

pub use crate::config::*;
pub use crate::error::*;
pub use crate::generator::*;
pub use crate::id::*;
pub use crate::status::*;
pub use crate::time::*;
