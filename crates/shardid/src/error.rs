/// The result type used throughout `shardid`.
pub type Result<T> = core::result::Result<T, Error>;

/// All error variants that `shardid` can emit.
///
/// Sequence exhaustion within a millisecond is deliberately **not** an error:
/// it surfaces as [`IdGenStatus::Pending`] from the poll layer and as a
/// bounded wait inside the blocking `next_id` path.
///
/// [`IdGenStatus::Pending`]: crate::IdGenStatus::Pending
#[derive(Clone, thiserror::Error, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// The configuration violated a construction-time constraint.
    ///
    /// Validation runs exactly once, in the [`Config`] constructors. A
    /// generator is never created from an invalid configuration.
    ///
    /// [`Config`]: crate::Config
    #[error("invalid config: {reason}")]
    InvalidConfig { reason: String },

    /// The wall clock is earlier than the configured epoch.
    ///
    /// A non-negative timestamp delta cannot be produced, so no id can be
    /// issued. Not retried internally.
    #[error("wall clock at {now_ms} ms is before the configured epoch {epoch_ms} ms")]
    ClockBeforeEpoch { now_ms: i64, epoch_ms: i64 },

    /// The wall clock regressed relative to the last issued id.
    ///
    /// The generator never guesses a corrected time and never silently
    /// stalls; the caller decides whether to retry after a delay.
    #[error("wall clock moved backwards: now {now_ms} ms, last id issued at {last_ms} ms")]
    ClockMovedBackwards { now_ms: i64, last_ms: i64 },

    /// The timestamp delta no longer fits the id's timestamp field.
    ///
    /// Packing it would set the sign bit. The epoch is effectively
    /// exhausted, so this is fatal to the generator instance.
    #[error("timestamp delta {delta_ms} ms exceeds the id layout's timestamp field")]
    IdOverflow { delta_ms: i64 },

    /// The operation failed because the generator lock was **poisoned**.
    ///
    /// This occurs when a thread panics while holding the lock. When the
    /// `parking-lot` feature is enabled, mutexes do not poison, so this
    /// variant is not available.
    #[cfg(not(feature = "parking-lot"))]
    #[error("generator lock poisoned by a panicked thread")]
    LockPoisoned,
}

#[cfg(not(feature = "parking-lot"))]
use std::sync::{MutexGuard, PoisonError};

// Convert all poisoned lock errors to a simplified `LockPoisoned`
#[cfg(not(feature = "parking-lot"))]
impl<T> From<PoisonError<MutexGuard<'_, T>>> for Error {
    fn from(_: PoisonError<MutexGuard<'_, T>>) -> Self {
        Self::LockPoisoned
    }
}
