//! Trait definitions for external interactions
//!
//! These traits define the boundary between domain logic and
//! infrastructure. Implementations live in other crates.

use crate::friend::{Friend, ReservedSpotGroup};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Full persistable state of a roster
///
/// A mutation is complete in memory before its durable write is
/// acknowledged; snapshots are what crosses the persistence boundary.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RosterSnapshot {
    /// All friends across all tiers
    pub friends: Vec<Friend>,

    /// All reserved spot groups
    pub reserved: Vec<ReservedSpotGroup>,

    /// When the user last reviewed their nudges
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub last_tended: Option<DateTime<Utc>>,
}

/// Trait for durably storing and retrieving roster snapshots
///
/// Implemented by the infrastructure layer (tend-store). Keyed by the
/// owning user id; the identity provider is an external collaborator and
/// the id is opaque here.
pub trait RosterPersistence {
    /// Error type for persistence operations
    type Error;

    /// Durably write a snapshot for a user, replacing any previous one
    fn save(&mut self, user_id: &str, snapshot: &RosterSnapshot) -> Result<(), Self::Error>;

    /// Load the most recent snapshot for a user, if one exists
    fn load(&self, user_id: &str) -> Result<Option<RosterSnapshot>, Self::Error>;

    /// Delete any stored snapshot for a user (full account reset)
    fn clear(&mut self, user_id: &str) -> Result<(), Self::Error>;
}
