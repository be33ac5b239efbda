use crate::ShardedId;

/// The outcome of one non-blocking id generation attempt.
///
/// - [`IdGenStatus::Ready`] carries a newly issued id.
/// - [`IdGenStatus::Pending`] means the sequence space for the current
///   millisecond is exhausted; no id can be issued until the clock advances.
///
/// `Pending` is not an error: it allows non-blocking generation loops and
/// caller-chosen backoff strategies. Hard failures (clock regression, epoch
/// exhaustion) are reported through [`Error`] instead.
///
/// # Example
/// ```
/// use shardid::{Config, IdGenStatus, LockGenerator, UnixClock};
///
/// let config = Config::new(1, shardid::DEFAULT_EPOCH_MS)?;
/// let generator = LockGenerator::new(config, UnixClock);
///
/// let id = loop {
///     match generator.try_poll_id()? {
///         IdGenStatus::Ready { id } => break id,
///         IdGenStatus::Pending { .. } => std::thread::yield_now(),
///     }
/// };
/// assert!(id.is_valid());
/// # Ok::<(), shardid::Error>(())
/// ```
///
/// [`Error`]: crate::Error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdGenStatus {
    /// A unique id was issued and is ready to use.
    Ready {
        /// The generated id.
        id: ShardedId,
    },
    /// The sequence space for the current millisecond is exhausted.
    Pending {
        /// How long to wait (in milliseconds) before polling again.
        yield_for_ms: u64,
    },
}
