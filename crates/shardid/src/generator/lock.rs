use core::cmp::Ordering;
use core::time::Duration;
use std::sync::Arc;

#[cfg(feature = "tracing")]
use tracing::instrument;

#[cfg(feature = "parking-lot")]
use parking_lot::Mutex;
#[cfg(not(feature = "parking-lot"))]
use std::sync::Mutex;

use crate::{
    Config, Error, IdGenStatus, IdGenerator, Result, ShardedId, TimeSource, generator::State,
};

/// A lock-based id generator suitable for multi-threaded environments.
///
/// The state lives behind an [`Arc`]`<Mutex<_>>`, so clones share one
/// sequence and callers on any thread observe a single serialized
/// read-modify-write per poll: two callers can never receive the same
/// `(timestamp, sequence)` pair.
///
/// The wall clock is sampled outside the critical section; only the compare
/// against the last issued timestamp and the state update happen under the
/// lock. The lock is never held across a sleep.
///
/// ## Recommended When
/// - The generator is shared across threads
/// - Fair access across threads is important
///
/// ## See Also
/// - [`BasicGenerator`]
///
/// [`BasicGenerator`]: crate::BasicGenerator
#[derive(Clone, Debug)]
pub struct LockGenerator<T> {
    config: Config,
    #[cfg(feature = "cache-padded")]
    state: Arc<crossbeam_utils::CachePadded<Mutex<State>>>,
    #[cfg(not(feature = "cache-padded"))]
    state: Arc<Mutex<State>>,
    time: T,
}

impl<T> LockGenerator<T>
where
    T: TimeSource,
{
    /// Creates a new [`LockGenerator`] for the given configuration.
    ///
    /// The state starts at timestamp zero and sequence zero; the first poll
    /// adopts the current wall-clock millisecond.
    ///
    /// # Example
    /// ```
    /// use shardid::{Config, LockGenerator, UnixClock};
    ///
    /// let config = Config::new(7, shardid::DEFAULT_EPOCH_MS)?;
    /// let generator = LockGenerator::new(config, UnixClock);
    ///
    /// let id = generator.next_id()?;
    /// assert_eq!(generator.config().decode_shard(id), 7);
    /// # Ok::<(), shardid::Error>(())
    /// ```
    pub fn new(config: Config, time: T) -> Self {
        let state = State::initial();
        Self {
            config,
            #[cfg(feature = "cache-padded")]
            state: Arc::new(crossbeam_utils::CachePadded::new(Mutex::new(state))),
            #[cfg(not(feature = "cache-padded"))]
            state: Arc::new(Mutex::new(state)),
            time,
        }
    }

    /// The configuration this generator encodes ids with.
    pub const fn config(&self) -> &Config {
        &self.config
    }

    /// Attempts to issue the next id without blocking.
    ///
    /// Returns [`IdGenStatus::Ready`] with a new id, or
    /// [`IdGenStatus::Pending`] when the sequence space for the current
    /// millisecond is exhausted.
    ///
    /// # Errors
    /// - [`Error::ClockBeforeEpoch`] if the wall clock is earlier than the
    ///   configured epoch
    /// - [`Error::ClockMovedBackwards`] if the wall clock regressed relative
    ///   to the last issued id
    /// - [`Error::IdOverflow`] if the timestamp delta no longer fits the
    ///   layout
    /// - [`Error::LockPoisoned`] if another thread panicked while holding
    ///   the lock (std mutex only)
    ///
    /// # Example
    /// ```
    /// use shardid::{Config, IdGenStatus, LockGenerator, UnixClock};
    ///
    /// let config = Config::new(0, shardid::DEFAULT_EPOCH_MS)?;
    /// let generator = LockGenerator::new(config, UnixClock);
    ///
    /// let id = loop {
    ///     match generator.try_poll_id()? {
    ///         IdGenStatus::Ready { id } => break id,
    ///         IdGenStatus::Pending { yield_for_ms } => {
    ///             std::thread::sleep(core::time::Duration::from_millis(yield_for_ms));
    ///         }
    ///     }
    /// };
    /// assert!(id.is_valid());
    /// # Ok::<(), shardid::Error>(())
    /// ```
    #[cfg_attr(feature = "tracing", instrument(level = "trace", skip(self)))]
    pub fn try_poll_id(&self) -> Result<IdGenStatus> {
        let now_ms = self.time.now_millis();
        if now_ms < self.config.epoch_ms() {
            return Err(Error::ClockBeforeEpoch {
                now_ms,
                epoch_ms: self.config.epoch_ms(),
            });
        }

        let mut state = {
            #[cfg(feature = "parking-lot")]
            {
                self.state.lock()
            }
            #[cfg(not(feature = "parking-lot"))]
            {
                self.state.lock()?
            }
        };

        match now_ms.cmp(&state.last_ms) {
            Ordering::Equal => {
                if state.sequence < self.config.max_sequence() {
                    let sequence = state.sequence + 1;
                    let id = self.config.pack(now_ms, sequence)?;
                    *state = State {
                        last_ms: now_ms,
                        sequence,
                    };
                    Ok(IdGenStatus::Ready { id })
                } else {
                    Ok(IdGenStatus::Pending { yield_for_ms: 1 })
                }
            }
            Ordering::Greater => {
                let id = self.config.pack(now_ms, 0)?;
                *state = State {
                    last_ms: now_ms,
                    sequence: 0,
                };
                Ok(IdGenStatus::Ready { id })
            }
            Ordering::Less => Err(Error::ClockMovedBackwards {
                now_ms,
                last_ms: state.last_ms,
            }),
        }
    }

    /// Issues the next id, waiting out sequence exhaustion.
    ///
    /// Polls [`Self::try_poll_id`] and sleeps the hinted duration whenever
    /// the current millisecond's sequence space is exhausted, until the
    /// clock ticks forward. The lock is re-acquired on every poll, never
    /// held across the sleep. Hard errors are returned immediately.
    ///
    /// # Errors
    /// Same as [`Self::try_poll_id`].
    pub fn next_id(&self) -> Result<ShardedId> {
        loop {
            match self.try_poll_id()? {
                IdGenStatus::Ready { id } => return Ok(id),
                IdGenStatus::Pending { yield_for_ms } => {
                    std::thread::sleep(Duration::from_millis(yield_for_ms));
                }
            }
        }
    }
}

impl<T> IdGenerator for LockGenerator<T>
where
    T: TimeSource,
{
    fn config(&self) -> &Config {
        self.config()
    }

    fn try_poll_id(&self) -> Result<IdGenStatus> {
        self.try_poll_id()
    }

    fn next_id(&self) -> Result<ShardedId> {
        self.next_id()
    }
}
