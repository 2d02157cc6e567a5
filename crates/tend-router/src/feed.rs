//! Primary feed construction
//!
//! Not a ranking algorithm. The feed for a tier is a filter plus a
//! stable chronological sort; engagement never moves a post.

use tend_domain::{FeedPost, FriendId, Tier};

/// Build the primary feed for a tier
///
/// Includes exactly the posts whose author is in the requested tier,
/// excluding anything suggested or sponsored, sorted by `created_at`
/// descending. The sort is stable, so ties keep insertion order.
///
/// `author_tier` resolves a post author to their current tier; posts by
/// unknown authors are excluded.
pub fn primary_feed<'a, F>(tier: Tier, posts: &'a [FeedPost], author_tier: F) -> Vec<&'a FeedPost>
where
    F: Fn(FriendId) -> Option<Tier>,
{
    let mut feed: Vec<&FeedPost> = posts
        .iter()
        .filter(|post| !post.is_suggested && !post.is_sponsored)
        .filter(|post| author_tier(post.author) == Some(tier))
        .collect();
    feed.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    feed
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, TimeZone, Utc};
    use std::collections::{BTreeSet, HashMap};
    use tend_domain::{ContentType, PostId};

    fn ts(d: u32, h: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, d, h, 0, 0).unwrap()
    }

    fn post(author: FriendId, created_at: DateTime<Utc>, suggested: bool, sponsored: bool) -> FeedPost {
        FeedPost {
            id: PostId::new(),
            author,
            content_type: ContentType::Text,
            content: "post".into(),
            created_at,
            visibility: BTreeSet::from([Tier::Core]),
            is_suggested: suggested,
            is_sponsored: sponsored,
            location: None,
            author_presence: None,
        }
    }

    #[test]
    fn test_feed_filters_and_sorts_chronologically() {
        let core_friend = FriendId::new();
        let outer_friend = FriendId::new();
        let tiers: HashMap<FriendId, Tier> =
            [(core_friend, Tier::Core), (outer_friend, Tier::Outer)].into();

        let posts = vec![
            post(core_friend, ts(10, 8), false, false),
            post(outer_friend, ts(11, 8), false, false), // wrong tier
            post(core_friend, ts(12, 8), true, false),   // suggested
            post(core_friend, ts(13, 8), false, true),   // sponsored
            post(core_friend, ts(14, 8), false, false),
        ];

        let feed = primary_feed(Tier::Core, &posts, |id| tiers.get(&id).copied());

        assert_eq!(feed.len(), 2);
        assert_eq!(feed[0].created_at, ts(14, 8));
        assert_eq!(feed[1].created_at, ts(10, 8));
    }

    #[test]
    fn test_engagement_never_outranks_recency() {
        // An older post with heavy engagement must rank below a newer
        // post with none; the feed has no engagement input at all.
        let author = FriendId::new();
        let older_with_100_likes = post(author, ts(1, 8), false, false);
        let newer_with_none = post(author, ts(20, 8), false, false);

        let posts = vec![older_with_100_likes.clone(), newer_with_none.clone()];
        let feed = primary_feed(Tier::Core, &posts, |_| Some(Tier::Core));

        assert_eq!(feed[0].id, newer_with_none.id);
        assert_eq!(feed[1].id, older_with_100_likes.id);
    }

    #[test]
    fn test_ties_keep_insertion_order() {
        let author = FriendId::new();
        let same_instant = ts(5, 12);
        let first = post(author, same_instant, false, false);
        let second = post(author, same_instant, false, false);

        let posts = vec![first.clone(), second.clone()];
        let feed = primary_feed(Tier::Core, &posts, |_| Some(Tier::Core));

        assert_eq!(feed[0].id, first.id);
        assert_eq!(feed[1].id, second.id);
    }

    #[test]
    fn test_unknown_authors_are_excluded() {
        let posts = vec![post(FriendId::new(), ts(2, 8), false, false)];
        let feed = primary_feed(Tier::Core, &posts, |_| None);
        assert!(feed.is_empty());
    }
}
