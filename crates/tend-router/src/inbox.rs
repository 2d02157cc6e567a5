//! The notification inbox

use crate::route;
use chrono::{DateTime, Utc};
use tend_domain::{
    FeedNotification, FeedPost, Fidelity, NotificationId, NotificationKind, NotificationSettings,
    PostInteraction, Priority, Tier,
};
use thiserror::Error;

/// Inbox errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RouterError {
    /// Acknowledged a notification that doesn't exist
    #[error("Notification not found: {0}")]
    NotificationNotFound(NotificationId),
}

/// Owns routed notifications for one user
///
/// Events from disabled tiers never enter the inbox. Read state is the
/// only mutation after creation; pruning is left to retention policy.
#[derive(Debug, Default)]
pub struct NotificationInbox {
    notifications: Vec<FeedNotification>,
}

impl NotificationInbox {
    /// Create an empty inbox
    pub fn new() -> Self {
        Self::default()
    }

    /// Route a new post; returns the created notification, or `None`
    /// when the author's tier is disabled
    pub fn record_post(
        &mut self,
        post: &FeedPost,
        author_tier: Tier,
        settings: &NotificationSettings,
        now: DateTime<Utc>,
    ) -> Option<&FeedNotification> {
        let fidelity = Fidelity::of_content(post.content_type);
        let priority = route(author_tier, fidelity, settings)?;
        Some(self.push(
            NotificationKind::Post {
                post: post.id,
                content_type: post.content_type,
            },
            post.author,
            author_tier,
            fidelity,
            priority,
            now,
        ))
    }

    /// Route a new interaction; returns the created notification, or
    /// `None` when the actor's tier is disabled
    pub fn record_interaction(
        &mut self,
        interaction: &PostInteraction,
        actor_tier: Tier,
        settings: &NotificationSettings,
        now: DateTime<Utc>,
    ) -> Option<&FeedNotification> {
        let fidelity = Fidelity::of_interaction(interaction.kind);
        let priority = route(actor_tier, fidelity, settings)?;
        Some(self.push(
            NotificationKind::Interaction {
                post: interaction.post,
                interaction: interaction.kind,
            },
            interaction.actor,
            actor_tier,
            fidelity,
            priority,
            now,
        ))
    }

    /// Acknowledge a notification
    pub fn mark_read(&mut self, id: NotificationId) -> Result<(), RouterError> {
        let notification = self
            .notifications
            .iter_mut()
            .find(|n| n.id == id)
            .ok_or(RouterError::NotificationNotFound(id))?;
        notification.read = true;
        Ok(())
    }

    /// Unread notifications across all priorities
    pub fn unread_count(&self) -> usize {
        self.notifications.iter().filter(|n| !n.read).count()
    }

    /// All notifications, oldest first
    pub fn notifications(&self) -> &[FeedNotification] {
        &self.notifications
    }

    /// Notifications at a given priority, oldest first
    pub fn by_priority(&self, priority: Priority) -> Vec<&FeedNotification> {
        self.notifications
            .iter()
            .filter(|n| n.priority == priority)
            .collect()
    }

    fn push(
        &mut self,
        event: NotificationKind,
        actor: tend_domain::FriendId,
        tier: Tier,
        fidelity: Fidelity,
        priority: Priority,
        now: DateTime<Utc>,
    ) -> &FeedNotification {
        tracing::debug!(%tier, ?fidelity, ?priority, "notification routed");
        self.notifications.push(FeedNotification {
            id: NotificationId::new(),
            event,
            actor,
            tier,
            fidelity,
            priority,
            created_at: now,
            read: false,
        });
        self.notifications.last().expect("just pushed")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use std::collections::BTreeSet;
    use tend_domain::{ContentType, FriendId, InteractionType, PostId};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 15, 10, 0, 0).unwrap()
    }

    fn post(content_type: ContentType) -> FeedPost {
        FeedPost {
            id: PostId::new(),
            author: FriendId::new(),
            content_type,
            content: "hello".into(),
            created_at: now(),
            visibility: BTreeSet::from([Tier::Core]),
            is_suggested: false,
            is_sponsored: false,
            location: None,
            author_presence: None,
        }
    }

    fn interaction(kind: InteractionType) -> PostInteraction {
        PostInteraction {
            post: PostId::new(),
            actor: FriendId::new(),
            kind,
            created_at: now(),
        }
    }

    #[test]
    fn test_record_post_routes_by_fidelity() {
        let mut inbox = NotificationInbox::new();
        let settings = NotificationSettings::default();

        let n = inbox
            .record_post(&post(ContentType::VoiceNote), Tier::Core, &settings, now())
            .unwrap();
        assert_eq!(n.priority, Priority::Immediate);
        assert_eq!(n.fidelity, Fidelity::High);

        let n = inbox
            .record_post(&post(ContentType::Text), Tier::Core, &settings, now())
            .unwrap();
        assert_eq!(n.priority, Priority::Batched);
    }

    #[test]
    fn test_disabled_tier_creates_no_notification() {
        let mut inbox = NotificationInbox::new();
        let settings = NotificationSettings::default();

        let routed = inbox.record_post(&post(ContentType::CallInvite), Tier::Rolemodel, &settings, now());
        assert!(routed.is_none());
        assert!(inbox.notifications().is_empty());
    }

    #[test]
    fn test_unread_count_spans_priorities() {
        let mut inbox = NotificationInbox::new();
        let settings = NotificationSettings::default();

        inbox.record_interaction(&interaction(InteractionType::Like), Tier::Core, &settings, now());
        inbox.record_interaction(&interaction(InteractionType::VoiceReply), Tier::Inner, &settings, now());
        inbox.record_post(&post(ContentType::Photo), Tier::Naybor, &settings, now());

        assert_eq!(inbox.unread_count(), 3);

        let id = inbox.notifications()[0].id;
        inbox.mark_read(id).unwrap();
        assert_eq!(inbox.unread_count(), 2);
    }

    #[test]
    fn test_mark_read_unknown_id() {
        let mut inbox = NotificationInbox::new();
        let missing = NotificationId::new();
        assert_eq!(
            inbox.mark_read(missing),
            Err(RouterError::NotificationNotFound(missing))
        );
    }

    #[test]
    fn test_by_priority_filter() {
        let mut inbox = NotificationInbox::new();
        let settings = NotificationSettings::default();

        inbox.record_interaction(&interaction(InteractionType::Like), Tier::Core, &settings, now());
        inbox.record_interaction(&interaction(InteractionType::CallAccepted), Tier::Core, &settings, now());

        assert_eq!(inbox.by_priority(Priority::Batched).len(), 1);
        assert_eq!(inbox.by_priority(Priority::Immediate).len(), 1);
        assert!(inbox.by_priority(Priority::Quiet).is_empty());
    }
}
