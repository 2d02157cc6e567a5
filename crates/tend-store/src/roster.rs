//! In-memory roster with tier capacity enforcement

use chrono::{DateTime, Utc};
use std::collections::BTreeMap;
use tend_domain::{
    ContactRecord, Friend, FriendId, FriendPatch, GroupId, NewFriend, ReservedSpotGroup,
    RosterSnapshot, Tier,
};
use thiserror::Error;

/// Errors from roster mutations
///
/// Capacity and lookup failures are expected, recoverable conditions -
/// callers branch on them rather than unwinding.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    /// The tier has no room for another friend or reserved spot
    #[error("Tier is full: {0}")]
    TierFull(Tier),

    /// The target tier of a move has no room
    #[error("Target tier is full: {0}")]
    TargetTierFull(Tier),

    /// Operation referenced a nonexistent friend
    #[error("Friend not found: {0}")]
    FriendNotFound(FriendId),

    /// Operation referenced a nonexistent reserved group
    #[error("Reserved group not found: {0}")]
    GroupNotFound(GroupId),
}

/// Capacity summary for one tier
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TierCapacity {
    /// Tier limit, `None` when unbounded
    pub limit: Option<u32>,
    /// Friends currently in the tier
    pub friend_count: u32,
    /// Spots held by reserved groups
    pub reserved: u32,
    /// `friend_count + reserved`
    pub used: u32,
    /// `limit - used`, `None` when unbounded
    pub available: Option<u32>,
}

/// The friend roster: tier membership, reserved capacity, tending metadata
///
/// An explicit, injectable value: callers hold an instance and pass it
/// around, so tests can run any number of independent rosters. Every
/// mutation validates and applies the capacity invariant in one step;
/// there is no observable intermediate state.
#[derive(Debug, Clone, Default)]
pub struct Roster {
    friends: BTreeMap<FriendId, Friend>,
    reserved: BTreeMap<GroupId, ReservedSpotGroup>,
    last_tended: Option<DateTime<Utc>>,
}

impl Roster {
    /// Create an empty roster
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a roster from a persisted snapshot
    pub fn from_snapshot(snapshot: RosterSnapshot) -> Self {
        Self {
            friends: snapshot.friends.into_iter().map(|f| (f.id, f)).collect(),
            reserved: snapshot.reserved.into_iter().map(|g| (g.id, g)).collect(),
            last_tended: snapshot.last_tended,
        }
    }

    /// Capture the full persistable state
    pub fn snapshot(&self) -> RosterSnapshot {
        RosterSnapshot {
            friends: self.friends.values().cloned().collect(),
            reserved: self.reserved.values().cloned().collect(),
            last_tended: self.last_tended,
        }
    }

    /// Add a friend to a tier
    ///
    /// Fails with [`StoreError::TierFull`] when the tier's occupied plus
    /// reserved spots leave no room. On success the friend gets a fresh
    /// id and `added_at = now`.
    pub fn add_friend(
        &mut self,
        tier: Tier,
        new: NewFriend,
        now: DateTime<Utc>,
    ) -> Result<&Friend, StoreError> {
        if self.room_in(tier) == Some(0) {
            return Err(StoreError::TierFull(tier));
        }

        let friend = Friend {
            id: FriendId::new(),
            name: new.name,
            email: new.email,
            phone: new.phone,
            notes: new.notes,
            preferred_contact: new.preferred_contact,
            tier,
            added_at: now,
            last_contacted: None,
            sort_order: None,
        };
        let id = friend.id;
        self.friends.insert(id, friend);
        Ok(&self.friends[&id])
    }

    /// Merge patch fields into an existing friend
    ///
    /// Tier is not part of the patch; tier changes go through
    /// [`Roster::move_friend`].
    pub fn update_friend(
        &mut self,
        id: FriendId,
        patch: FriendPatch,
    ) -> Result<&Friend, StoreError> {
        let friend = self
            .friends
            .get_mut(&id)
            .ok_or(StoreError::FriendNotFound(id))?;

        if let Some(name) = patch.name {
            friend.name = name;
        }
        if let Some(email) = patch.email {
            friend.email = Some(email);
        }
        if let Some(phone) = patch.phone {
            friend.phone = Some(phone);
        }
        if let Some(notes) = patch.notes {
            friend.notes = Some(notes);
        }
        if let Some(preferred) = patch.preferred_contact {
            friend.preferred_contact = Some(preferred);
        }
        if let Some(contacted) = patch.last_contacted {
            friend.last_contacted = Some(contacted);
        }

        Ok(&self.friends[&id])
    }

    /// Record a meaningful contact with a friend right now
    pub fn record_contact(&mut self, id: FriendId, now: DateTime<Utc>) -> Result<(), StoreError> {
        let friend = self
            .friends
            .get_mut(&id)
            .ok_or(StoreError::FriendNotFound(id))?;
        friend.last_contacted = Some(now);
        Ok(())
    }

    /// Remove a friend unconditionally; freed capacity is immediately
    /// observable
    pub fn remove_friend(&mut self, id: FriendId) -> Result<Friend, StoreError> {
        self.friends
            .remove(&id)
            .ok_or(StoreError::FriendNotFound(id))
    }

    /// Atomically move a friend to another tier
    ///
    /// Fails with [`StoreError::TargetTierFull`] when the target has no
    /// room. The friend belongs to exactly one tier before and after;
    /// a move within the same tier is a no-op.
    pub fn move_friend(&mut self, id: FriendId, target: Tier) -> Result<(), StoreError> {
        let current = self
            .friends
            .get(&id)
            .ok_or(StoreError::FriendNotFound(id))?
            .tier;
        if current == target {
            return Ok(());
        }
        if self.room_in(target) == Some(0) {
            return Err(StoreError::TargetTierFull(target));
        }

        let friend = self.friends.get_mut(&id).expect("presence checked above");
        friend.tier = target;
        friend.sort_order = None; // manual ordering is per-tier
        Ok(())
    }

    /// Assign a dense manual ordering to the given ids within a tier
    ///
    /// Ids not currently in the tier are ignored; unlisted friends keep
    /// their previous ordering state.
    pub fn reorder_tier(&mut self, tier: Tier, ordered_ids: &[FriendId]) {
        let mut position = 0u32;
        for id in ordered_ids {
            if let Some(friend) = self.friends.get_mut(id) {
                if friend.tier == tier {
                    friend.sort_order = Some(position);
                    position += 1;
                }
            }
        }
    }

    /// All friends in a tier, deterministically ordered
    ///
    /// Manually ordered friends come first by `sort_order`; the rest
    /// follow alphabetically by name, with id as the final tie-break.
    pub fn friends_in_tier(&self, tier: Tier) -> Vec<&Friend> {
        let mut friends: Vec<&Friend> =
            self.friends.values().filter(|f| f.tier == tier).collect();
        friends.sort_by(|a, b| match (a.sort_order, b.sort_order) {
            (Some(x), Some(y)) => x.cmp(&y).then_with(|| a.id.cmp(&b.id)),
            (Some(_), None) => std::cmp::Ordering::Less,
            (None, Some(_)) => std::cmp::Ordering::Greater,
            (None, None) => a.name.cmp(&b.name).then_with(|| a.id.cmp(&b.id)),
        });
        friends
    }

    /// Look up a friend by id
    pub fn get_friend(&self, id: FriendId) -> Option<&Friend> {
        self.friends.get(&id)
    }

    /// Iterate over every friend in the roster
    pub fn all_friends(&self) -> impl Iterator<Item = &Friend> {
        self.friends.values()
    }

    /// Total number of friends across all tiers
    pub fn friend_count(&self) -> usize {
        self.friends.len()
    }

    /// Capacity summary for a tier
    pub fn tier_capacity(&self, tier: Tier) -> TierCapacity {
        let friend_count = self.friends.values().filter(|f| f.tier == tier).count() as u32;
        let reserved = self.reserved_in(tier);
        let used = friend_count + reserved;
        let limit = tier.limit();
        TierCapacity {
            limit,
            friend_count,
            reserved,
            used,
            available: limit.map(|l| l.saturating_sub(used)),
        }
    }

    /// Hold spots in a tier for not-yet-named contacts
    ///
    /// The count is silently clamped to the tier's remaining capacity,
    /// possibly to zero. Unbounded tiers never clamp.
    pub fn add_reserved_group(&mut self, tier: Tier, count: u32, note: Option<String>) -> GroupId {
        let clamped = match self.room_in(tier) {
            Some(room) => count.min(room),
            None => count,
        };
        let group = ReservedSpotGroup {
            id: GroupId::new(),
            tier,
            count: clamped,
            note,
        };
        let id = group.id;
        self.reserved.insert(id, group);
        id
    }

    /// Change the size of a reserved group, clamped to remaining capacity
    /// excluding the group itself
    pub fn update_reserved_group(
        &mut self,
        id: GroupId,
        count: u32,
    ) -> Result<&ReservedSpotGroup, StoreError> {
        let tier = self
            .reserved
            .get(&id)
            .ok_or(StoreError::GroupNotFound(id))?
            .tier;

        let friend_count = self.friends.values().filter(|f| f.tier == tier).count() as u32;
        let other_reserved: u32 = self
            .reserved
            .values()
            .filter(|g| g.tier == tier && g.id != id)
            .map(|g| g.count)
            .sum();
        let clamped = match tier.limit() {
            Some(limit) => count.min(limit.saturating_sub(friend_count + other_reserved)),
            None => count,
        };

        let group = self.reserved.get_mut(&id).expect("presence checked above");
        group.count = clamped;
        Ok(&self.reserved[&id])
    }

    /// Release a reserved group
    pub fn remove_reserved_group(&mut self, id: GroupId) -> Result<(), StoreError> {
        self.reserved
            .remove(&id)
            .map(|_| ())
            .ok_or(StoreError::GroupNotFound(id))
    }

    /// Reserved groups in a tier
    pub fn reserved_groups(&self, tier: Tier) -> Vec<&ReservedSpotGroup> {
        self.reserved.values().filter(|g| g.tier == tier).collect()
    }

    /// Bulk-import normalized contacts into the acquainted tier
    ///
    /// The long tail always has room; each contact becomes a friend with
    /// `added_at = now`, which starts its 12-month aging clock.
    pub fn intake_contacts(
        &mut self,
        contacts: Vec<ContactRecord>,
        now: DateTime<Utc>,
    ) -> Vec<FriendId> {
        contacts
            .into_iter()
            .map(|contact| {
                tracing::debug!(name = %contact.name, source = %contact.source, "contact intake");
                let friend = Friend {
                    id: FriendId::new(),
                    name: contact.name,
                    email: contact.email,
                    phone: contact.phone,
                    notes: None,
                    preferred_contact: None,
                    tier: Tier::Acquainted,
                    added_at: now,
                    last_contacted: None,
                    sort_order: None,
                };
                let id = friend.id;
                self.friends.insert(id, friend);
                id
            })
            .collect()
    }

    /// Record that the user reviewed their nudges
    pub fn mark_tended(&mut self, now: DateTime<Utc>) {
        self.last_tended = Some(now);
    }

    /// When the user last reviewed their nudges
    pub fn last_tended(&self) -> Option<DateTime<Utc>> {
        self.last_tended
    }

    /// Reset friends, reserved spots, and tending state; full account
    /// reset only
    pub fn clear_all(&mut self) {
        self.friends.clear();
        self.reserved.clear();
        self.last_tended = None;
    }

    /// Remaining spots in a tier; `None` when unbounded
    fn room_in(&self, tier: Tier) -> Option<u32> {
        self.tier_capacity(tier).available
    }

    /// Spots held by reserved groups in a tier
    fn reserved_in(&self, tier: Tier) -> u32 {
        self.reserved
            .values()
            .filter(|g| g.tier == tier)
            .map(|g| g.count)
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 15, 10, 0, 0).unwrap()
    }

    fn named(name: &str) -> NewFriend {
        NewFriend {
            name: name.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_add_friend_assigns_id_and_added_at() {
        let mut roster = Roster::new();
        let friend = roster.add_friend(Tier::Inner, named("Ada"), now()).unwrap();
        assert_eq!(friend.name, "Ada");
        assert_eq!(friend.tier, Tier::Inner);
        assert_eq!(friend.added_at, now());
        assert!(friend.last_contacted.is_none());
    }

    #[test]
    fn test_capacity_invariant_on_add() {
        let mut roster = Roster::new();
        for i in 0..5 {
            roster
                .add_friend(Tier::Core, named(&format!("f{}", i)), now())
                .unwrap();
        }

        // The 6th add must fail and leave the roster unchanged
        let err = roster.add_friend(Tier::Core, named("f5"), now()).unwrap_err();
        assert_eq!(err, StoreError::TierFull(Tier::Core));
        assert!(err.to_string().starts_with("Tier is full"));
        assert_eq!(roster.tier_capacity(Tier::Core).friend_count, 5);
        assert_eq!(roster.tier_capacity(Tier::Core).available, Some(0));
    }

    #[test]
    fn test_reserved_spots_count_against_capacity() {
        let mut roster = Roster::new();
        roster.add_reserved_group(Tier::Core, 3, Some("coworkers".into()));
        for i in 0..2 {
            roster
                .add_friend(Tier::Core, named(&format!("f{}", i)), now())
                .unwrap();
        }

        let cap = roster.tier_capacity(Tier::Core);
        assert_eq!(cap.friend_count, 2);
        assert_eq!(cap.reserved, 3);
        assert_eq!(cap.used, 5);
        assert_eq!(cap.available, Some(0));

        assert_eq!(
            roster.add_friend(Tier::Core, named("overflow"), now()),
            Err(StoreError::TierFull(Tier::Core))
        );
    }

    #[test]
    fn test_reserved_count_is_clamped() {
        let mut roster = Roster::new();
        for i in 0..3 {
            roster
                .add_friend(Tier::Core, named(&format!("f{}", i)), now())
                .unwrap();
        }

        // Only 2 spots remain; a request for 10 clamps silently
        let id = roster.add_reserved_group(Tier::Core, 10, None);
        assert_eq!(roster.reserved_groups(Tier::Core)[0].count, 2);

        // Updating clamps against friends + other groups, excluding self
        let other = roster.add_reserved_group(Tier::Core, 5, None);
        assert_eq!(
            roster
                .reserved
                .get(&other)
                .map(|g| g.count),
            Some(0)
        );
        let group = roster.update_reserved_group(id, 1).unwrap();
        assert_eq!(group.count, 1);
    }

    #[test]
    fn test_reserved_unbounded_tier_never_clamps() {
        let mut roster = Roster::new();
        let id = roster.add_reserved_group(Tier::Acquainted, 10_000, None);
        let group = roster.update_reserved_group(id, 20_000).unwrap();
        assert_eq!(group.count, 20_000);
    }

    #[test]
    fn test_move_friend_is_atomic() {
        let mut roster = Roster::new();
        let mut core_ids = Vec::new();
        for i in 0..5 {
            let id = roster
                .add_friend(Tier::Core, named(&format!("f{}", i)), now())
                .unwrap()
                .id;
            core_ids.push(id);
        }

        roster.move_friend(core_ids[0], Tier::Inner).unwrap();

        // Exactly one tier holds the friend afterwards
        assert_eq!(roster.get_friend(core_ids[0]).unwrap().tier, Tier::Inner);
        assert_eq!(roster.tier_capacity(Tier::Core).friend_count, 4);
        assert_eq!(roster.tier_capacity(Tier::Core).available, Some(1));
        assert_eq!(roster.tier_capacity(Tier::Inner).friend_count, 1);
    }

    #[test]
    fn test_move_to_full_tier_fails_without_side_effects() {
        let mut roster = Roster::new();
        for i in 0..5 {
            roster
                .add_friend(Tier::Core, named(&format!("f{}", i)), now())
                .unwrap();
        }
        let outsider = roster.add_friend(Tier::Outer, named("zoe"), now()).unwrap().id;

        let err = roster.move_friend(outsider, Tier::Core).unwrap_err();
        assert_eq!(err, StoreError::TargetTierFull(Tier::Core));
        assert_eq!(roster.get_friend(outsider).unwrap().tier, Tier::Outer);
        assert_eq!(roster.tier_capacity(Tier::Core).friend_count, 5);
    }

    #[test]
    fn test_update_friend_merges_fields() {
        let mut roster = Roster::new();
        let id = roster.add_friend(Tier::Outer, named("Ada"), now()).unwrap().id;

        roster
            .update_friend(
                id,
                FriendPatch {
                    email: Some("ada@example.com".into()),
                    ..Default::default()
                },
            )
            .unwrap();

        let friend = roster.get_friend(id).unwrap();
        assert_eq!(friend.email.as_deref(), Some("ada@example.com"));
        assert_eq!(friend.name, "Ada"); // untouched

        let missing = FriendId::new();
        assert_eq!(
            roster.update_friend(missing, FriendPatch::default()),
            Err(StoreError::FriendNotFound(missing))
        );
    }

    #[test]
    fn test_remove_frees_capacity_immediately() {
        let mut roster = Roster::new();
        for i in 0..5 {
            roster
                .add_friend(Tier::Core, named(&format!("f{}", i)), now())
                .unwrap();
        }
        let victim = roster.friends_in_tier(Tier::Core)[0].id;
        roster.remove_friend(victim).unwrap();

        assert!(roster.add_friend(Tier::Core, named("new"), now()).is_ok());
    }

    #[test]
    fn test_ordering_sort_order_then_alphabetical() {
        let mut roster = Roster::new();
        let carol = roster.add_friend(Tier::Inner, named("Carol"), now()).unwrap().id;
        let alice = roster.add_friend(Tier::Inner, named("Alice"), now()).unwrap().id;
        let bob = roster.add_friend(Tier::Inner, named("Bob"), now()).unwrap().id;

        // No manual order: alphabetical
        let names: Vec<&str> = roster
            .friends_in_tier(Tier::Inner)
            .iter()
            .map(|f| f.name.as_str())
            .collect();
        assert_eq!(names, vec!["Alice", "Bob", "Carol"]);

        // Manual order for two; the unlisted friend trails alphabetically
        roster.reorder_tier(Tier::Inner, &[carol, bob]);
        let names: Vec<&str> = roster
            .friends_in_tier(Tier::Inner)
            .iter()
            .map(|f| f.name.as_str())
            .collect();
        assert_eq!(names, vec!["Carol", "Bob", "Alice"]);

        // Foreign ids are ignored
        roster.reorder_tier(Tier::Inner, &[alice, FriendId::new(), bob]);
        let names: Vec<&str> = roster
            .friends_in_tier(Tier::Inner)
            .iter()
            .map(|f| f.name.as_str())
            .collect();
        assert_eq!(names, vec!["Alice", "Bob", "Carol"]);
    }

    #[test]
    fn test_intake_lands_in_acquainted() {
        let mut roster = Roster::new();
        let ids = roster.intake_contacts(
            vec![
                ContactRecord {
                    name: "Imported One".into(),
                    email: None,
                    phone: Some("555-0100".into()),
                    source: "vcard".into(),
                },
                ContactRecord {
                    name: "Imported Two".into(),
                    email: Some("two@example.com".into()),
                    phone: None,
                    source: "device".into(),
                },
            ],
            now(),
        );

        assert_eq!(ids.len(), 2);
        for id in ids {
            let friend = roster.get_friend(id).unwrap();
            assert_eq!(friend.tier, Tier::Acquainted);
            assert_eq!(friend.added_at, now());
        }
    }

    #[test]
    fn test_mark_tended_and_clear_all() {
        let mut roster = Roster::new();
        roster.add_friend(Tier::Core, named("Ada"), now()).unwrap();
        roster.add_reserved_group(Tier::Inner, 2, None);
        roster.mark_tended(now());

        assert_eq!(roster.last_tended(), Some(now()));

        roster.clear_all();
        assert_eq!(roster.friend_count(), 0);
        assert!(roster.reserved_groups(Tier::Inner).is_empty());
        assert_eq!(roster.last_tended(), None);
    }

    #[test]
    fn test_snapshot_roundtrip() {
        let mut roster = Roster::new();
        roster.add_friend(Tier::Core, named("Ada"), now()).unwrap();
        roster.add_reserved_group(Tier::Inner, 2, Some("family".into()));
        roster.mark_tended(now());

        let restored = Roster::from_snapshot(roster.snapshot());
        assert_eq!(restored.friend_count(), 1);
        assert_eq!(restored.reserved_groups(Tier::Inner).len(), 1);
        assert_eq!(restored.last_tended(), Some(now()));
    }

    #[test]
    fn test_capacity_invariant_holds_everywhere() {
        // Exercise a mix of mutations and check the invariant after each
        let mut roster = Roster::new();
        let mut check = |roster: &Roster| {
            for tier in Tier::ALL {
                let cap = roster.tier_capacity(tier);
                if let Some(limit) = cap.limit {
                    assert!(cap.used <= limit, "invariant broken in {}", tier);
                }
            }
        };

        for i in 0..20 {
            let _ = roster.add_friend(Tier::Core, named(&format!("c{}", i)), now());
            check(&roster);
            let _ = roster.add_friend(Tier::Inner, named(&format!("i{}", i)), now());
            check(&roster);
            roster.add_reserved_group(Tier::Core, i, None);
            check(&roster);
        }
    }
}
