//! Notification module - fidelity scale and routed notification events

use crate::content::{ContentType, InteractionType};
use crate::id::{FriendId, NotificationId, NudgeId, PostId};
use crate::tier::Tier;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// How substantive a piece of content or an interaction is
///
/// Fidelity drives notification urgency independent of raw engagement
/// volume: a single voice reply outranks any number of likes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Fidelity {
    /// Low-effort signals (text, likes)
    Low,
    /// Medium-effort content (photos, comments, shares)
    Medium,
    /// High-effort, synchronous-leaning content (voice, video, invites)
    High,
}

impl Fidelity {
    /// Fixed classification of content types
    pub fn of_content(content: ContentType) -> Self {
        match content {
            ContentType::Text => Fidelity::Low,
            ContentType::Photo | ContentType::LifeUpdate => Fidelity::Medium,
            ContentType::VoiceNote
            | ContentType::Video
            | ContentType::CallInvite
            | ContentType::MeetupInvite
            | ContentType::ProximityPing => Fidelity::High,
        }
    }

    /// Fixed classification of interaction types
    pub fn of_interaction(interaction: InteractionType) -> Self {
        match interaction {
            InteractionType::Like => Fidelity::Low,
            InteractionType::Comment | InteractionType::Share => Fidelity::Medium,
            InteractionType::VoiceReply
            | InteractionType::CallAccepted
            | InteractionType::MeetupRsvp => Fidelity::High,
        }
    }
}

/// Delivery priority of a routed notification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    /// Deliver now
    Immediate,
    /// Coalesce into the next batch
    Batched,
    /// Deliver silently
    Quiet,
}

/// What a notification is about
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum NotificationKind {
    /// A friend posted content
    Post {
        /// The post
        post: PostId,
        /// Its content type
        content_type: ContentType,
    },
    /// A friend interacted with a post
    Interaction {
        /// The post interacted with
        post: PostId,
        /// The interaction type
        interaction: InteractionType,
    },
    /// A sunset nudge surfaced
    Nudge {
        /// The nudge
        nudge: NudgeId,
    },
}

/// A derived notification event
///
/// Created when a content/interaction event is routed, marked read on
/// acknowledgment, pruned by normal retention.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedNotification {
    /// Unique identifier
    pub id: NotificationId,

    /// What happened
    pub event: NotificationKind,

    /// The acting friend
    pub actor: FriendId,

    /// Tier the event originated from
    pub tier: Tier,

    /// Classified fidelity of the event
    pub fidelity: Fidelity,

    /// Routed priority
    pub priority: Priority,

    /// When the notification was created
    pub created_at: DateTime<Utc>,

    /// Whether the user has acknowledged it
    #[serde(default)]
    pub read: bool,
}
