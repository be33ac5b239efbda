use core::fmt;

/// A packed, non-negative 63-bit identifier.
///
/// Three fields are packed most-significant to least-significant: the
/// millisecond timestamp delta (relative to the configured epoch), the shard
/// id, and the per-millisecond sequence counter. Because the sign bit is
/// never set, the raw `i64` value orders ids approximately by generation
/// time.
///
/// The field boundaries are not stored in the id itself; decoding requires
/// the same [`Config`] that produced it. Changing the bit-width split
/// invalidates decoding of previously issued ids, which is a deployment-time
/// contract the type cannot detect.
///
/// # Example
/// ```
/// use shardid::ShardedId;
///
/// let id = ShardedId::from_raw(4_033_543);
/// assert_eq!(id.to_raw(), 4_033_543);
/// assert!(id.is_valid());
/// ```
///
/// [`Config`]: crate::Config
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ShardedId(i64);

impl ShardedId {
    /// Wraps a raw `i64` without validation.
    ///
    /// Use [`Self::is_valid`] to check that the value is within the
    /// non-negative 63-bit range a generator can produce.
    pub const fn from_raw(raw: i64) -> Self {
        Self(raw)
    }

    /// Returns the raw packed representation.
    pub const fn to_raw(&self) -> i64 {
        self.0
    }

    /// Returns `true` if the raw value could have been produced by a
    /// generator, i.e. the sign bit is clear.
    pub const fn is_valid(&self) -> bool {
        self.0 >= 0
    }
}

impl fmt::Display for ShardedId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<ShardedId> for i64 {
    fn from(id: ShardedId) -> Self {
        id.to_raw()
    }
}
