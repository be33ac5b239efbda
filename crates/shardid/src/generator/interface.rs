use core::time::Duration;

use crate::{Config, IdGenStatus, Result, ShardedId};

/// A minimal interface over the id generators.
///
/// Lets callers stay generic over the ownership model
/// ([`BasicGenerator`] vs [`LockGenerator`]) while using the same poll or
/// blocking flow.
///
/// [`BasicGenerator`]: crate::BasicGenerator
/// [`LockGenerator`]: crate::LockGenerator
pub trait IdGenerator {
    /// The configuration this generator encodes ids with.
    fn config(&self) -> &Config;

    /// Attempts to issue the next id without blocking.
    ///
    /// # Errors
    /// Returns a hard failure (clock regression, epoch exhaustion, poisoned
    /// lock) immediately; sequence exhaustion is reported as
    /// [`IdGenStatus::Pending`], not as an error.
    fn try_poll_id(&self) -> Result<IdGenStatus>;

    /// Issues the next id, waiting out sequence exhaustion.
    ///
    /// # Errors
    /// Same as [`Self::try_poll_id`].
    fn next_id(&self) -> Result<ShardedId> {
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
