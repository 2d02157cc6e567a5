//! Producing the export snapshot

use crate::types::{SocialGraphExport, WireFriend, WireInteraction, WirePost, FORMAT_VERSION};
use chrono::{DateTime, Utc};
use tend_domain::{FeedPost, NotificationSettings, PostInteraction, PrivacySettings};
use tend_store::Roster;

/// Produce a complete, versioned export of a user's relationship data
///
/// The snapshot is immutable once produced and serializes to plain JSON
/// with no lossy transformation of any field.
pub fn export_graph(
    user_id: &str,
    roster: &Roster,
    posts: &[FeedPost],
    interactions: &[PostInteraction],
    privacy: &PrivacySettings,
    notifications: &NotificationSettings,
    now: DateTime<Utc>,
) -> SocialGraphExport {
    let friends: Vec<WireFriend> = roster.all_friends().map(WireFriend::from_friend).collect();

    let posts: Vec<WirePost> = posts
        .iter()
        .map(|post| WirePost {
            id: post.id.to_string(),
            author: post.author.to_string(),
            content_type: post.content_type,
            content: post.content.clone(),
            created_at: post.created_at,
            visibility: post.visibility.iter().map(|t| t.as_str().to_string()).collect(),
        })
        .collect();

    let interactions: Vec<WireInteraction> = interactions
        .iter()
        .map(|interaction| WireInteraction {
            post: interaction.post.to_string(),
            actor: interaction.actor.to_string(),
            kind: interaction.kind,
            created_at: interaction.created_at,
        })
        .collect();

    tracing::info!(
        friends = friends.len(),
        posts = posts.len(),
        interactions = interactions.len(),
        "social graph exported"
    );

    SocialGraphExport {
        version: FORMAT_VERSION.to_string(),
        exported_at: now,
        user_id: user_id.to_string(),
        friends,
        posts,
        interactions,
        privacy: privacy.clone(),
        notifications: notifications.clone(),
    }
}
