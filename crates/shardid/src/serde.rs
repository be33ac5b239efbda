use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::ShardedId;

impl Serialize for ShardedId {
    /// Serializes the id as its native integer representation.
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.to_raw().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for ShardedId {
    /// Deserializes an id from its native integer representation.
    ///
    /// # Errors
    /// Returns an error if:
    /// - The underlying deserializer fails
    /// - The value is negative (no generator ever sets the sign bit)
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = i64::deserialize(deserializer)?;
        let id = ShardedId::from_raw(raw);
        if !id.is_valid() {
            return Err(serde::de::Error::custom(format_args!(
                "{raw} is not a valid id: the sign bit is set"
            )));
        }
        Ok(id)
    }
}
