//! Identifier newtypes for domain records
//!
//! All ids are UUIDv7: chronologically sortable, 128-bit unique, and
//! generatable without coordination. Sortability matters: feed ties are
//! broken by id, which for v7 ids reproduces insertion order.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

macro_rules! define_id {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(Uuid);

        impl $name {
            /// Generate a fresh UUIDv7-based id
            pub fn new() -> Self {
                Self(Uuid::now_v7())
            }

            /// Wrap an existing UUID (storage-layer deserialization)
            pub fn from_uuid(uuid: Uuid) -> Self {
                Self(uuid)
            }

            /// Parse from the canonical hyphenated string form
            pub fn parse(s: &str) -> Result<Self, String> {
                Uuid::parse_str(s)
                    .map(Self)
                    .map_err(|e| format!("invalid id '{}': {}", s, e))
            }

            /// The underlying UUID
            pub fn as_uuid(&self) -> Uuid {
                self.0
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

define_id! {
    /// Unique identifier for a [`Friend`](crate::Friend)
    ///
    /// The acquainted-cycle month bucket is derived by hashing the string
    /// form of this id, so the id is load-bearing: rewriting ids (for
    /// example during a storage migration) silently reshuffles buckets.
    FriendId
}

define_id! {
    /// Unique identifier for a [`FeedPost`](crate::FeedPost)
    PostId
}

define_id! {
    /// Unique identifier for a [`ReservedSpotGroup`](crate::ReservedSpotGroup)
    GroupId
}

define_id! {
    /// Unique identifier for a [`SunsetNudge`](crate::SunsetNudge)
    NudgeId
}

define_id! {
    /// Unique identifier for a [`FeedNotification`](crate::FeedNotification)
    NotificationId
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_display_and_parse() {
        let id = FriendId::new();
        let s = id.to_string();

        // Canonical UUID form: 8-4-4-4-12 with hyphens
        assert_eq!(s.len(), 36);

        let parsed = FriendId::parse(&s).unwrap();
        assert_eq!(id, parsed);
    }

    #[test]
    fn test_id_invalid_string() {
        assert!(FriendId::parse("not-a-valid-uuid").is_err());
        assert!(FriendId::parse("").is_err());
    }

    #[test]
    fn test_id_chronological() {
        // UUIDv7s generated in sequence should be chronologically ordered
        let a = PostId::new();
        std::thread::sleep(std::time::Duration::from_millis(2));
        let b = PostId::new();

        assert!(a < b, "earlier UUIDv7 should be less than later UUIDv7");
    }
}
