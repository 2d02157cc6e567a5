//! Wire types for the exchange format
//!
//! These mirror the domain types field-for-field but keep tiers as
//! strings: imported data is untrusted, and validation should produce a
//! reportable error rather than a parse failure.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tend_domain::{
    ContentType, Friend, FriendId, InteractionType, NotificationSettings, PreferredContact,
    PrivacySettings, Tier,
};

/// Version of the exchange format this crate produces
pub const FORMAT_VERSION: &str = "1.0.0";

/// Major version this crate can import
pub const SUPPORTED_MAJOR: u32 = 1;

/// A friend as it travels on the wire
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WireFriend {
    /// Canonical id string
    pub id: String,
    /// Display name
    pub name: String,
    /// Email address
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub email: Option<String>,
    /// Phone number
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub phone: Option<String>,
    /// Tier name (validated against the known tier set on import)
    pub tier: String,
    /// When the friend was added
    pub added_at: DateTime<Utc>,
    /// Most recent meaningful contact
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub last_contacted: Option<DateTime<Utc>>,
    /// Free-form notes
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub notes: Option<String>,
    /// Preferred contact method
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub preferred_contact: Option<PreferredContact>,
    /// Manual position within the tier
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub sort_order: Option<u32>,
}

impl WireFriend {
    /// Convert a domain friend to wire form
    pub fn from_friend(friend: &Friend) -> Self {
        Self {
            id: friend.id.to_string(),
            name: friend.name.clone(),
            email: friend.email.clone(),
            phone: friend.phone.clone(),
            tier: friend.tier.as_str().to_string(),
            added_at: friend.added_at,
            last_contacted: friend.last_contacted,
            notes: friend.notes.clone(),
            preferred_contact: friend.preferred_contact,
            sort_order: friend.sort_order,
        }
    }

    /// Validate and convert to a domain friend
    pub fn to_friend(&self) -> Result<Friend, String> {
        let id = FriendId::parse(&self.id)?;
        let tier = Tier::parse(&self.tier)
            .ok_or_else(|| format!("friend '{}' has unknown tier '{}'", self.name, self.tier))?;

        Ok(Friend {
            id,
            name: self.name.clone(),
            email: self.email.clone(),
            phone: self.phone.clone(),
            notes: self.notes.clone(),
            preferred_contact: self.preferred_contact,
            tier,
            added_at: self.added_at,
            last_contacted: self.last_contacted,
            sort_order: self.sort_order,
        })
    }
}

/// A post as it travels on the wire
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WirePost {
    /// Canonical id string
    pub id: String,
    /// Author id string
    pub author: String,
    /// Kind of content
    pub content_type: ContentType,
    /// Textual content
    pub content: String,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Tier names allowed to see the post
    pub visibility: Vec<String>,
}

/// An interaction as it travels on the wire
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WireInteraction {
    /// Id string of the post interacted with
    pub post: String,
    /// Id string of the acting friend
    pub actor: String,
    /// What they did
    #[serde(rename = "type")]
    pub kind: InteractionType,
    /// When
    pub created_at: DateTime<Utc>,
}

/// The complete, versioned snapshot of a user's relationship data
///
/// Immutable once produced; consumed only by the import operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SocialGraphExport {
    /// Semantic version of the format
    pub version: String,

    /// When the export was produced
    pub exported_at: DateTime<Utc>,

    /// The owning user
    pub user_id: String,

    /// Full friend list
    pub friends: Vec<WireFriend>,

    /// All posts
    pub posts: Vec<WirePost>,

    /// All interactions
    pub interactions: Vec<WireInteraction>,

    /// Privacy capability matrix
    pub privacy: PrivacySettings,

    /// Notification matrix
    pub notifications: NotificationSettings,
}

impl SocialGraphExport {
    /// Serialize to pretty JSON
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Deserialize from JSON
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Major component of the export's version string, if parseable
    pub fn major_version(&self) -> Option<u32> {
        self.version.split('.').next()?.parse().ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_format_version_major_matches_supported() {
        let major: u32 = FORMAT_VERSION.split('.').next().unwrap().parse().unwrap();
        assert_eq!(major, SUPPORTED_MAJOR);
    }

    #[test]
    fn test_wire_friend_roundtrip() {
        let friend = Friend {
            id: FriendId::new(),
            name: "Ada".into(),
            email: Some("ada@example.com".into()),
            phone: None,
            notes: Some("met at work".into()),
            preferred_contact: Some(PreferredContact::VoiceNote),
            tier: Tier::Inner,
            added_at: Utc.with_ymd_and_hms(2024, 2, 10, 8, 0, 0).unwrap(),
            last_contacted: Some(Utc.with_ymd_and_hms(2025, 1, 5, 19, 30, 0).unwrap()),
            sort_order: Some(3),
        };

        let wire = WireFriend::from_friend(&friend);
        let back = wire.to_friend().unwrap();
        assert_eq!(back, friend);
    }

    #[test]
    fn test_wire_friend_unknown_tier() {
        let wire = WireFriend {
            id: FriendId::new().to_string(),
            name: "Ada".into(),
            email: None,
            phone: None,
            tier: "bestie".into(),
            added_at: Utc::now(),
            last_contacted: None,
            notes: None,
            preferred_contact: None,
            sort_order: None,
        };

        let err = wire.to_friend().unwrap_err();
        assert!(err.contains("unknown tier"));
    }

    #[test]
    fn test_major_version_parsing() {
        let mut export = SocialGraphExport {
            version: "2.3.1".into(),
            exported_at: Utc::now(),
            user_id: "u".into(),
            friends: Vec::new(),
            posts: Vec::new(),
            interactions: Vec::new(),
            privacy: PrivacySettings::default(),
            notifications: NotificationSettings::default(),
        };
        assert_eq!(export.major_version(), Some(2));

        export.version = "garbage".into();
        assert_eq!(export.major_version(), None);
    }
}
