//! Validated import of an export snapshot

use crate::error::ExchangeError;
use crate::types::{SocialGraphExport, SUPPORTED_MAJOR};
use std::collections::BTreeMap;
use tend_domain::{
    FeedPost, Friend, FriendId, NotificationSettings, PostId, PostInteraction, PrivacySettings,
    RosterSnapshot, Tier,
};
use tend_store::Roster;

/// How imported data combines with the local store
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImportMode {
    /// Drop all local state, then load the import
    Replace,
    /// Keep local records; imported friends win on id collision
    Merge,
}

/// What a successful import produced
///
/// Posts, interactions and settings are returned to the caller rather
/// than stored: content lives outside the roster.
#[derive(Debug)]
pub struct ImportOutcome {
    /// Friends brought in by the import
    pub friends_imported: usize,
    /// Parsed posts
    pub posts: Vec<FeedPost>,
    /// Parsed interactions
    pub interactions: Vec<PostInteraction>,
    /// Imported privacy matrix
    pub privacy: PrivacySettings,
    /// Imported notification matrix
    pub notifications: NotificationSettings,
}

/// Import an export snapshot into the local roster
///
/// Validation happens before any mutation: the version's major component
/// must match, every tier name must be known, every id must parse, and
/// the resulting roster must satisfy the capacity invariant. A failed
/// import leaves the store byte-for-byte untouched.
pub fn import_graph(
    export: &SocialGraphExport,
    roster: &mut Roster,
    mode: ImportMode,
) -> Result<ImportOutcome, ExchangeError> {
    // 1. Version gate
    match export.major_version() {
        Some(major) if major == SUPPORTED_MAJOR => {}
        _ => {
            return Err(ExchangeError::VersionMismatch {
                found: export.version.clone(),
                supported: SUPPORTED_MAJOR,
            })
        }
    }

    // 2. Parse and validate every friend up front
    let mut imported: Vec<Friend> = Vec::with_capacity(export.friends.len());
    for wire in &export.friends {
        imported.push(wire.to_friend().map_err(ExchangeError::Validation)?);
    }

    let posts = parse_posts(export)?;
    let interactions = parse_interactions(export)?;

    // 3. Compute the resulting friend set without touching the roster
    let mut resulting: BTreeMap<FriendId, Friend> = match mode {
        ImportMode::Replace => BTreeMap::new(),
        ImportMode::Merge => roster.all_friends().map(|f| (f.id, f.clone())).collect(),
    };
    for friend in imported {
        resulting.insert(friend.id, friend);
    }

    // 4. Capacity feasibility: reserved spots survive a merge
    for tier in Tier::ALL {
        let Some(limit) = tier.limit() else { continue };
        let friends = resulting.values().filter(|f| f.tier == tier).count() as u32;
        let reserved = match mode {
            ImportMode::Replace => 0,
            ImportMode::Merge => roster.tier_capacity(tier).reserved,
        };
        if friends + reserved > limit {
            return Err(ExchangeError::Validation(format!(
                "import would overflow tier '{}': {} friends + {} reserved > limit {}",
                tier,
                friends,
                reserved,
                limit
            )));
        }
    }

    // 5. Apply: all validation has passed
    let friends_imported = export.friends.len();
    let snapshot = RosterSnapshot {
        friends: resulting.into_values().collect(),
        reserved: match mode {
            ImportMode::Replace => Vec::new(),
            ImportMode::Merge => roster.snapshot().reserved,
        },
        last_tended: match mode {
            ImportMode::Replace => None,
            ImportMode::Merge => roster.last_tended(),
        },
    };
    *roster = Roster::from_snapshot(snapshot);

    tracing::info!(friends = friends_imported, ?mode, "social graph imported");

    Ok(ImportOutcome {
        friends_imported,
        posts,
        interactions,
        privacy: export.privacy.clone(),
        notifications: export.notifications.clone(),
    })
}

fn parse_posts(export: &SocialGraphExport) -> Result<Vec<FeedPost>, ExchangeError> {
    export
        .posts
        .iter()
        .map(|wire| {
            let id = PostId::parse(&wire.id).map_err(ExchangeError::Validation)?;
            let author = FriendId::parse(&wire.author).map_err(ExchangeError::Validation)?;
            let visibility = wire
                .visibility
                .iter()
                .map(|name| {
                    Tier::parse(name).ok_or_else(|| {
                        ExchangeError::Validation(format!(
                            "post '{}' has unknown visibility tier '{}'",
                            wire.id, name
                        ))
                    })
                })
                .collect::<Result<_, _>>()?;

            Ok(FeedPost {
                id,
                author,
                content_type: wire.content_type,
                content: wire.content.clone(),
                created_at: wire.created_at,
                visibility,
                is_suggested: false,
                is_sponsored: false,
                location: None,
                author_presence: None,
            })
        })
        .collect()
}

fn parse_interactions(export: &SocialGraphExport) -> Result<Vec<PostInteraction>, ExchangeError> {
    export
        .interactions
        .iter()
        .map(|wire| {
            Ok(PostInteraction {
                post: PostId::parse(&wire.post).map_err(ExchangeError::Validation)?,
                actor: FriendId::parse(&wire.actor).map_err(ExchangeError::Validation)?,
                kind: wire.kind,
                created_at: wire.created_at,
            })
        })
        .collect()
}
