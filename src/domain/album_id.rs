//! Type-safe album identifier.
//!
//! [`AlbumId`] is a newtype wrapper around [`i64`] providing type safety
//! so that album identifiers cannot be confused with other integers.

use std::fmt;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Unique identifier for an album record.
///
/// Wraps the `INTEGER PRIMARY KEY` assigned by storage on insert and
/// immutable thereafter. An `AlbumId` therefore only exists for records
/// that have been persisted; drafts carry no identifier at all.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, ToSchema,
)]
#[serde(transparent)]
pub struct AlbumId(i64);

impl AlbumId {
    /// Creates an `AlbumId` from a raw storage key.
    #[must_use]
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    /// Returns the inner storage key.
    #[must_use]
    pub const fn as_i64(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for AlbumId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for AlbumId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl From<AlbumId> for i64 {
    fn from(id: AlbumId) -> Self {
        id.0
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn display_is_plain_integer() {
        let id = AlbumId::new(42);
        assert_eq!(format!("{id}"), "42");
    }

    #[test]
    fn serde_round_trip() {
        let id = AlbumId::new(7);
        let json = serde_json::to_string(&id).ok();
        let Some(json) = json else {
            panic!("serialization failed");
        };
        // Transparent: serializes as a bare number.
        assert_eq!(json, "7");
        let Ok(deserialized) = serde_json::from_str::<AlbumId>(&json) else {
            panic!("deserialization failed");
        };
        assert_eq!(id, deserialized);
    }

    #[test]
    fn from_i64_round_trip() {
        let id = AlbumId::from(99);
        assert_eq!(id.as_i64(), 99);
        assert_eq!(i64::from(id), 99);
    }

    #[test]
    fn ordering_follows_storage_keys() {
        assert!(AlbumId::new(1) < AlbumId::new(2));
    }

    #[test]
    fn hash_works_in_hashmap() {
        use std::collections::HashMap;
        let id = AlbumId::new(3);
        let mut map = HashMap::new();
        map.insert(id, "test");
        assert_eq!(map.get(&id), Some(&"test"));
    }
}
