//! Per-viewer post projection

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tend_domain::{ContentType, FeedPost, Friend, FriendId, PostId, PrivacySettings, Tier};

/// Gated profile details of a post author
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorProfile {
    /// Email address
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub email: Option<String>,
    /// Phone number
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub phone: Option<String>,
    /// Notes the owner keeps about the author
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub notes: Option<String>,
}

/// A post as one viewer tier is allowed to see it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostView {
    /// The post
    pub post: PostId,
    /// Author identity
    pub author: FriendId,
    /// Author display name
    pub author_name: String,
    /// Kind of content
    pub content_type: ContentType,
    /// Textual content
    pub content: String,
    /// When the post was created
    pub created_at: DateTime<Utc>,

    /// Post location, when the viewer may see it
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub location: Option<String>,

    /// Author online status, when the viewer may see it
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub author_online: Option<bool>,

    /// Author last-active time, when the viewer may see it
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub author_last_active: Option<DateTime<Utc>>,

    /// Author profile details, when the viewer may see them
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub author_profile: Option<AuthorProfile>,
}

/// Project a post for a viewer tier
///
/// Returns `None` when the viewer's tier is not in the post's visibility
/// set, or when the post is a life update the tier may not see.
pub fn project(
    viewer_tier: Tier,
    post: &FeedPost,
    author: &Friend,
    settings: &PrivacySettings,
) -> Option<PostView> {
    if !post.visibility.contains(&viewer_tier) {
        return None;
    }

    let caps = settings.for_tier(viewer_tier);
    if post.content_type == ContentType::LifeUpdate && !caps.can_see_life_updates {
        return None;
    }

    Some(PostView {
        post: post.id,
        author: post.author,
        author_name: author.name.clone(),
        content_type: post.content_type,
        content: post.content.clone(),
        created_at: post.created_at,
        location: if caps.can_see_location {
            post.location.clone()
        } else {
            None
        },
        author_online: if caps.can_see_online_status {
            post.author_presence.map(|p| p.online)
        } else {
            None
        },
        author_last_active: if caps.can_see_last_active {
            post.author_presence.map(|p| p.last_active)
        } else {
            None
        },
        author_profile: if caps.can_see_full_profile {
            Some(AuthorProfile {
                email: author.email.clone(),
                phone: author.phone.clone(),
                notes: author.notes.clone(),
            })
        } else {
            None
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use std::collections::BTreeSet;
    use tend_domain::AuthorPresence;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 15, 10, 0, 0).unwrap()
    }

    fn author() -> Friend {
        Friend {
            id: FriendId::new(),
            name: "Ada".into(),
            email: Some("ada@example.com".into()),
            phone: Some("555-0100".into()),
            notes: Some("compiler people".into()),
            preferred_contact: None,
            tier: Tier::Core,
            added_at: now(),
            last_contacted: None,
            sort_order: None,
        }
    }

    fn post_by(author: &Friend, visibility: &[Tier], content_type: ContentType) -> FeedPost {
        FeedPost {
            id: PostId::new(),
            author: author.id,
            content_type,
            content: "out hiking".into(),
            created_at: now(),
            visibility: BTreeSet::from_iter(visibility.iter().copied()),
            is_suggested: false,
            is_sponsored: false,
            location: Some("Ridge Trail".into()),
            author_presence: Some(AuthorPresence {
                online: true,
                last_active: now(),
            }),
        }
    }

    #[test]
    fn test_visibility_set_gates_the_whole_post() {
        let author = author();
        let post = post_by(&author, &[Tier::Core, Tier::Inner], ContentType::Photo);
        let settings = PrivacySettings::default();

        assert!(project(Tier::Core, &post, &author, &settings).is_some());
        assert!(project(Tier::Outer, &post, &author, &settings).is_none());
    }

    #[test]
    fn test_core_sees_everything() {
        let author = author();
        let post = post_by(&author, &[Tier::Core], ContentType::Photo);
        let view = project(Tier::Core, &post, &author, &PrivacySettings::default()).unwrap();

        assert_eq!(view.location.as_deref(), Some("Ridge Trail"));
        assert_eq!(view.author_online, Some(true));
        assert!(view.author_last_active.is_some());
        let profile = view.author_profile.unwrap();
        assert_eq!(profile.email.as_deref(), Some("ada@example.com"));
    }

    #[test]
    fn test_outer_loses_location_and_last_active() {
        let author = author();
        let post = post_by(&author, &[Tier::Outer], ContentType::Photo);
        let view = project(Tier::Outer, &post, &author, &PrivacySettings::default()).unwrap();

        assert!(view.location.is_none());
        assert!(view.author_last_active.is_none());
        // But keeps online status and profile
        assert_eq!(view.author_online, Some(true));
        assert!(view.author_profile.is_some());
        // Always-visible fields survive redaction
        assert_eq!(view.content, "out hiking");
        assert_eq!(view.author_name, "Ada");
    }

    #[test]
    fn test_naybor_sees_location_only() {
        let author = author();
        let post = post_by(&author, &[Tier::Naybor], ContentType::Text);
        let view = project(Tier::Naybor, &post, &author, &PrivacySettings::default()).unwrap();

        assert_eq!(view.location.as_deref(), Some("Ridge Trail"));
        assert!(view.author_online.is_none());
        assert!(view.author_last_active.is_none());
        assert!(view.author_profile.is_none());
    }

    #[test]
    fn test_distant_tiers_see_no_gated_fields() {
        let author = author();
        let settings = PrivacySettings::default();

        for tier in [Tier::Parasocial, Tier::Rolemodel, Tier::Acquainted] {
            let post = post_by(&author, &[tier], ContentType::Photo);
            let view = project(tier, &post, &author, &settings).unwrap();
            assert!(view.location.is_none());
            assert!(view.author_online.is_none());
            assert!(view.author_last_active.is_none());
            assert!(view.author_profile.is_none());
        }
    }

    #[test]
    fn test_life_updates_require_the_capability() {
        let author = author();
        let post = post_by(&author, &[Tier::Core, Tier::Naybor], ContentType::LifeUpdate);
        let settings = PrivacySettings::default();

        assert!(project(Tier::Core, &post, &author, &settings).is_some());
        // Naybor is in the visibility set but lacks can_see_life_updates
        assert!(project(Tier::Naybor, &post, &author, &settings).is_none());
    }
}
