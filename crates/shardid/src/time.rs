use std::time::{SystemTime, UNIX_EPOCH};

/// A source of wall-clock time with millisecond resolution.
///
/// Timestamps are absolute unix milliseconds; generators subtract the
/// configured epoch themselves. This seam lets tests substitute fixed,
/// stepped, or shared mock clocks for the system clock.
///
/// # Example
/// ```
/// use shardid::TimeSource;
///
/// struct FixedTime;
/// impl TimeSource for FixedTime {
///     fn now_millis(&self) -> i64 {
///         1234
///     }
/// }
///
/// assert_eq!(FixedTime.now_millis(), 1234);
/// ```
pub trait TimeSource {
    /// Returns the current time in milliseconds since the unix epoch.
    fn now_millis(&self) -> i64;
}

/// The system wall clock, reported as unix milliseconds.
///
/// Unlike a monotonic timer, the wall clock may be adjusted externally (NTP
/// steps, manual changes). Generators detect a regression against their own
/// last issued timestamp and surface it as
/// [`Error::ClockMovedBackwards`] rather than guessing a corrected time.
///
/// A system clock earlier than the unix epoch is reported as a negative
/// value, which generators reject as [`Error::ClockBeforeEpoch`] since
/// configured epochs are never negative.
///
/// [`Error::ClockMovedBackwards`]: crate::Error::ClockMovedBackwards
/// [`Error::ClockBeforeEpoch`]: crate::Error::ClockBeforeEpoch
#[derive(Clone, Copy, Debug, Default)]
pub struct UnixClock;

impl TimeSource for UnixClock {
    fn now_millis(&self) -> i64 {
        match SystemTime::now().duration_since(UNIX_EPOCH) {
            Ok(since) => since.as_millis() as i64,
            Err(before) => -(before.duration().as_millis() as i64),
        }
    }
}
