use core::cell::Cell;
use core::cmp::Ordering;
use core::time::Duration;

#[cfg(feature = "tracing")]
use tracing::instrument;

use crate::{
    Config, Error, IdGenStatus, IdGenerator, Result, ShardedId, TimeSource, generator::State,
};

/// A non-concurrent id generator suitable for single-threaded environments.
///
/// This generator keeps its state in a [`Cell`], making it lightweight and
/// fast but **not thread-safe** (`!Sync`). Use [`LockGenerator`] when the
/// generator is shared across threads.
///
/// ## Recommended When
/// - The generator is owned by a single thread or task
/// - You want the cheapest possible poll path
///
/// [`LockGenerator`]: crate::LockGenerator
#[derive(Debug)]
pub struct BasicGenerator<T> {
    config: Config,
    state: Cell<State>,
    time: T,
}

impl<T> BasicGenerator<T>
where
    T: TimeSource,
{
    /// Creates a new [`BasicGenerator`] for the given configuration.
    ///
    /// The state starts at timestamp zero and sequence zero; the first poll
    /// adopts the current wall-clock millisecond.
    ///
    /// # Example
    /// ```
    /// use shardid::{BasicGenerator, Config, UnixClock};
    ///
    /// let config = Config::new(0, shardid::DEFAULT_EPOCH_MS)?;
    /// let generator = BasicGenerator::new(config, UnixClock);
    ///
    /// let id = generator.next_id()?;
    /// assert_eq!(generator.config().decode_shard(id), 0);
    /// # Ok::<(), shardid::Error>(())
    /// ```
    pub fn new(config: Config, time: T) -> Self {
        Self {
            config,
            state: Cell::new(State::initial()),
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
    #[cfg_attr(feature = "tracing", instrument(level = "trace", skip(self)))]
    pub fn try_poll_id(&self) -> Result<IdGenStatus> {
        let now_ms = self.time.now_millis();
        if now_ms < self.config.epoch_ms() {
            return Err(Error::ClockBeforeEpoch {
                now_ms,
                epoch_ms: self.config.epoch_ms(),
            });
        }

        let state = self.state.get();
        match now_ms.cmp(&state.last_ms) {
            Ordering::Equal => {
                if state.sequence < self.config.max_sequence() {
                    let sequence = state.sequence + 1;
                    let id = self.config.pack(now_ms, sequence)?;
                    self.state.set(State {
                        last_ms: now_ms,
                        sequence,
                    });
                    Ok(IdGenStatus::Ready { id })
                } else {
                    Ok(IdGenStatus::Pending { yield_for_ms: 1 })
                }
            }
            Ordering::Greater => {
                let id = self.config.pack(now_ms, 0)?;
                self.state.set(State {
                    last_ms: now_ms,
                    sequence: 0,
                });
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
    /// clock ticks forward. Hard errors are returned immediately.
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

impl<T> IdGenerator for BasicGenerator<T>
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
