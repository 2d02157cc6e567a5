//! Friend module - relationship records and reserved capacity

use crate::id::{FriendId, GroupId};
use crate::tier::Tier;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// How a friend prefers to be reached
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PreferredContact {
    /// Phone or video call
    Call,
    /// Text message
    Text,
    /// Asynchronous voice note
    VoiceNote,
    /// Meet in person
    InPerson,
}

/// A relationship record
///
/// Owned exclusively by the roster; mutated only through its operations.
/// Every friend belongs to exactly one tier at any time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Friend {
    /// Unique identifier
    pub id: FriendId,

    /// Display name
    pub name: String,

    /// Email address
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub email: Option<String>,

    /// Phone number
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub phone: Option<String>,

    /// Free-form notes
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub notes: Option<String>,

    /// Preferred contact method
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub preferred_contact: Option<PreferredContact>,

    /// Current tier
    pub tier: Tier,

    /// When this friend was added
    pub added_at: DateTime<Utc>,

    /// Most recent meaningful contact, if any
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub last_contacted: Option<DateTime<Utc>>,

    /// Explicit manual position within the tier
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub sort_order: Option<u32>,
}

impl Friend {
    /// The date nudging is measured from: last contact, falling back to
    /// the date the friend was added
    pub fn reference_date(&self) -> DateTime<Utc> {
        self.last_contacted.unwrap_or(self.added_at)
    }
}

/// Fields for creating a friend
#[derive(Debug, Clone, Default)]
pub struct NewFriend {
    /// Display name (required)
    pub name: String,
    /// Email address
    pub email: Option<String>,
    /// Phone number
    pub phone: Option<String>,
    /// Free-form notes
    pub notes: Option<String>,
    /// Preferred contact method
    pub preferred_contact: Option<PreferredContact>,
}

/// Partial update applied to an existing friend
///
/// `None` fields are left untouched. Tier is deliberately absent: tier
/// changes go through the roster's move operation so the capacity
/// invariant is checked.
#[derive(Debug, Clone, Default)]
pub struct FriendPatch {
    /// New display name
    pub name: Option<String>,
    /// New email address
    pub email: Option<String>,
    /// New phone number
    pub phone: Option<String>,
    /// New notes
    pub notes: Option<String>,
    /// New preferred contact method
    pub preferred_contact: Option<PreferredContact>,
    /// New last-contacted timestamp
    pub last_contacted: Option<DateTime<Utc>>,
}

/// A normalized contact record handed over by an import source
///
/// Contact-source parsing (device contacts, vCard, CSV) happens outside
/// the core; bulk-imported contacts land in the acquainted tier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactRecord {
    /// Display name
    pub name: String,
    /// Email address
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub email: Option<String>,
    /// Phone number
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub phone: Option<String>,
    /// Where the record came from (e.g. "vcard", "device")
    pub source: String,
}

/// A placeholder consuming tier capacity without a concrete friend
///
/// e.g. "2 spots reserved for coworkers". The roster counts reserved
/// spots against the tier limit exactly like friends.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReservedSpotGroup {
    /// Unique identifier
    pub id: GroupId,

    /// Owning tier
    pub tier: Tier,

    /// Number of spots held
    pub count: u32,

    /// Optional note describing who the spots are for
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub note: Option<String>,
}
