//! Settings module - per-tier privacy and notification matrices

use crate::notify::Priority;
use crate::tier::Tier;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Which gated fields a viewer tier may see on an already-visible post
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TierVisibility {
    /// Post location
    pub can_see_location: bool,
    /// Author's current online status
    pub can_see_online_status: bool,
    /// Author's last-active timestamp
    pub can_see_last_active: bool,
    /// Author's full profile details
    pub can_see_full_profile: bool,
    /// Life-update posts
    pub can_see_life_updates: bool,
}

impl TierVisibility {
    /// Everything visible
    pub fn all() -> Self {
        Self {
            can_see_location: true,
            can_see_online_status: true,
            can_see_last_active: true,
            can_see_full_profile: true,
            can_see_life_updates: true,
        }
    }

    /// Nothing gated visible
    pub fn none() -> Self {
        Self::default()
    }
}

/// Per-tier privacy capability matrix
///
/// Initialized from fixed defaults at account creation, mutated only
/// through explicit settings operations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrivacySettings {
    /// Capability row per tier
    pub tiers: BTreeMap<Tier, TierVisibility>,
}

impl Default for PrivacySettings {
    /// The fixed default matrix:
    /// - core/inner see everything
    /// - outer sees everything except location and last-active
    /// - naybor sees location only (neighborhood coordination)
    /// - parasocial/rolemodel/acquainted see no gated fields
    fn default() -> Self {
        let mut tiers = BTreeMap::new();
        tiers.insert(Tier::Core, TierVisibility::all());
        tiers.insert(Tier::Inner, TierVisibility::all());
        tiers.insert(
            Tier::Outer,
            TierVisibility {
                can_see_location: false,
                can_see_online_status: true,
                can_see_last_active: false,
                can_see_full_profile: true,
                can_see_life_updates: true,
            },
        );
        tiers.insert(
            Tier::Naybor,
            TierVisibility {
                can_see_location: true,
                ..TierVisibility::none()
            },
        );
        tiers.insert(Tier::Parasocial, TierVisibility::none());
        tiers.insert(Tier::Rolemodel, TierVisibility::none());
        tiers.insert(Tier::Acquainted, TierVisibility::none());
        Self { tiers }
    }
}

impl PrivacySettings {
    /// Capability row for a tier (absent rows see nothing)
    pub fn for_tier(&self, tier: Tier) -> TierVisibility {
        self.tiers.get(&tier).copied().unwrap_or_default()
    }

    /// Replace the capability row for a tier
    pub fn set_tier(&mut self, tier: Tier, visibility: TierVisibility) {
        self.tiers.insert(tier, visibility);
    }
}

/// Notification behavior for one tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TierNotify {
    /// Whether events from this tier are routed at all
    pub enabled: bool,
    /// Default priority when no fidelity override applies
    pub priority: Priority,
}

/// Per-tier notification matrix plus batching configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationSettings {
    /// Notification row per tier
    pub tiers: BTreeMap<Tier, TierNotify>,

    /// Minutes between batched-notification deliveries
    pub batch_interval_minutes: u32,
}

impl Default for NotificationSettings {
    /// The fixed default matrix: core/inner immediate, outer batched,
    /// naybor/parasocial quiet, rolemodel/acquainted disabled. Batch
    /// interval defaults to 60 minutes.
    fn default() -> Self {
        let mut tiers = BTreeMap::new();
        for tier in Tier::ALL {
            let row = match tier {
                Tier::Core | Tier::Inner => TierNotify {
                    enabled: true,
                    priority: Priority::Immediate,
                },
                Tier::Outer => TierNotify {
                    enabled: true,
                    priority: Priority::Batched,
                },
                Tier::Naybor | Tier::Parasocial => TierNotify {
                    enabled: true,
                    priority: Priority::Quiet,
                },
                Tier::Rolemodel | Tier::Acquainted => TierNotify {
                    enabled: false,
                    priority: Priority::Quiet,
                },
            };
            tiers.insert(tier, row);
        }
        Self {
            tiers,
            batch_interval_minutes: 60,
        }
    }
}

impl NotificationSettings {
    /// Notification row for a tier (absent rows are disabled)
    pub fn for_tier(&self, tier: Tier) -> TierNotify {
        self.tiers.get(&tier).copied().unwrap_or(TierNotify {
            enabled: false,
            priority: Priority::Quiet,
        })
    }

    /// Replace the notification row for a tier
    pub fn set_tier(&mut self, tier: Tier, row: TierNotify) {
        self.tiers.insert(tier, row);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_privacy_matrix() {
        let settings = PrivacySettings::default();

        assert_eq!(settings.for_tier(Tier::Core), TierVisibility::all());
        assert_eq!(settings.for_tier(Tier::Inner), TierVisibility::all());

        let outer = settings.for_tier(Tier::Outer);
        assert!(!outer.can_see_location);
        assert!(!outer.can_see_last_active);
        assert!(outer.can_see_online_status);
        assert!(outer.can_see_full_profile);
        assert!(outer.can_see_life_updates);

        let naybor = settings.for_tier(Tier::Naybor);
        assert!(naybor.can_see_location);
        assert!(!naybor.can_see_online_status);
        assert!(!naybor.can_see_full_profile);

        for tier in [Tier::Parasocial, Tier::Rolemodel, Tier::Acquainted] {
            assert_eq!(settings.for_tier(tier), TierVisibility::none());
        }
    }

    #[test]
    fn test_default_notification_matrix() {
        let settings = NotificationSettings::default();

        assert_eq!(settings.for_tier(Tier::Core).priority, Priority::Immediate);
        assert_eq!(settings.for_tier(Tier::Inner).priority, Priority::Immediate);
        assert_eq!(settings.for_tier(Tier::Outer).priority, Priority::Batched);
        assert_eq!(settings.for_tier(Tier::Naybor).priority, Priority::Quiet);
        assert_eq!(settings.for_tier(Tier::Parasocial).priority, Priority::Quiet);

        assert!(!settings.for_tier(Tier::Rolemodel).enabled);
        assert!(!settings.for_tier(Tier::Acquainted).enabled);

        assert_eq!(settings.batch_interval_minutes, 60);
    }

    #[test]
    fn test_settings_serde_roundtrip() {
        let privacy = PrivacySettings::default();
        let json = serde_json::to_string(&privacy).unwrap();
        let back: PrivacySettings = serde_json::from_str(&json).unwrap();
        assert_eq!(back, privacy);

        let notify = NotificationSettings::default();
        let json = serde_json::to_string(&notify).unwrap();
        let back: NotificationSettings = serde_json::from_str(&json).unwrap();
        assert_eq!(back, notify);
    }
}
