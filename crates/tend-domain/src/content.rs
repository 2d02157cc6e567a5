//! Content module - feed posts and interactions

use crate::id::{FriendId, PostId};
use crate::tier::Tier;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Kind of content a post carries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentType {
    /// Plain text
    Text,
    /// A photo
    Photo,
    /// An asynchronous voice note
    VoiceNote,
    /// A video
    Video,
    /// An invitation to a call
    CallInvite,
    /// An invitation to meet up
    MeetupInvite,
    /// "I'm nearby" ping
    ProximityPing,
    /// A significant life update
    LifeUpdate,
}

/// Kind of interaction with a post
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InteractionType {
    /// A like
    Like,
    /// A written comment
    Comment,
    /// A voice reply
    VoiceReply,
    /// Accepted a call invitation
    CallAccepted,
    /// RSVP'd to a meetup
    MeetupRsvp,
    /// Shared the post onward
    Share,
}

/// Author presence attached to a post, gated by the privacy projector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorPresence {
    /// Whether the author is currently online
    pub online: bool,
    /// When the author was last active
    pub last_active: DateTime<Utc>,
}

/// A content item authored by a friend
///
/// `visibility` is the set of tiers allowed to see the post at all; which
/// *fields* a viewer sees is governed separately by the privacy matrix.
/// `is_suggested`/`is_sponsored` must both be false for any post reaching
/// a tier's primary feed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedPost {
    /// Unique identifier
    pub id: PostId,

    /// Authoring friend
    pub author: FriendId,

    /// Kind of content
    pub content_type: ContentType,

    /// Textual content (or caption)
    pub content: String,

    /// Creation timestamp; the feed sorts strictly by this
    pub created_at: DateTime<Utc>,

    /// Tiers allowed to see this post
    pub visibility: BTreeSet<Tier>,

    /// Algorithmically suggested content, never shown in primary feeds
    #[serde(default)]
    pub is_suggested: bool,

    /// Paid placement, never shown in primary feeds
    #[serde(default)]
    pub is_sponsored: bool,

    /// Where the post was made (viewer-gated)
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub location: Option<String>,

    /// Author presence at post time (viewer-gated)
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub author_presence: Option<AuthorPresence>,
}

/// An interaction with a post by an acting user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostInteraction {
    /// The post interacted with
    pub post: PostId,

    /// Who interacted
    pub actor: FriendId,

    /// What they did
    pub kind: InteractionType,

    /// When
    pub created_at: DateTime<Utc>,
}
