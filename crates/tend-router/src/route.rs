//! Priority routing rules

use tend_domain::{ContentType, Fidelity, InteractionType, NotificationSettings, Priority, Tier};

/// Route an event to a delivery priority
///
/// Returns `None` when the tier is disabled: no notification object is
/// created at all. For core and inner tiers the bridging rule overrides
/// the default: high fidelity is always immediate, low fidelity always
/// batched. Everything else follows the tier's configured default.
pub fn route(tier: Tier, fidelity: Fidelity, settings: &NotificationSettings) -> Option<Priority> {
    let row = settings.for_tier(tier);
    if !row.enabled {
        return None;
    }

    if matches!(tier, Tier::Core | Tier::Inner) {
        return Some(match fidelity {
            Fidelity::High => Priority::Immediate,
            Fidelity::Low => Priority::Batched,
            Fidelity::Medium => row.priority,
        });
    }

    Some(row.priority)
}

/// Priority for a piece of content from a friend in the given tier
pub fn priority_for_content(
    tier: Tier,
    content: ContentType,
    settings: &NotificationSettings,
) -> Option<Priority> {
    route(tier, Fidelity::of_content(content), settings)
}

/// Priority for an interaction from a friend in the given tier
pub fn priority_for_interaction(
    tier: Tier,
    interaction: InteractionType,
    settings: &NotificationSettings,
) -> Option<Priority> {
    route(tier, Fidelity::of_interaction(interaction), settings)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bridging_override_for_close_tiers() {
        let settings = NotificationSettings::default();

        for tier in [Tier::Core, Tier::Inner] {
            // A like is deprioritized even though the tier default is immediate
            assert_eq!(
                priority_for_interaction(tier, InteractionType::Like, &settings),
                Some(Priority::Batched)
            );
            // A voice reply from the same tier goes straight through
            assert_eq!(
                priority_for_interaction(tier, InteractionType::VoiceReply, &settings),
                Some(Priority::Immediate)
            );
            // Medium fidelity follows the tier default
            assert_eq!(
                priority_for_interaction(tier, InteractionType::Comment, &settings),
                Some(Priority::Immediate)
            );
        }
    }

    #[test]
    fn test_tier_defaults_outside_the_override() {
        let settings = NotificationSettings::default();

        assert_eq!(
            priority_for_content(Tier::Outer, ContentType::VoiceNote, &settings),
            Some(Priority::Batched)
        );
        assert_eq!(
            priority_for_content(Tier::Naybor, ContentType::Photo, &settings),
            Some(Priority::Quiet)
        );
        assert_eq!(
            priority_for_content(Tier::Parasocial, ContentType::Video, &settings),
            Some(Priority::Quiet)
        );
    }

    #[test]
    fn test_disabled_tiers_route_nothing() {
        let settings = NotificationSettings::default();

        for tier in [Tier::Rolemodel, Tier::Acquainted] {
            assert_eq!(
                priority_for_content(tier, ContentType::CallInvite, &settings),
                None
            );
            assert_eq!(
                priority_for_interaction(tier, InteractionType::MeetupRsvp, &settings),
                None
            );
        }
    }

    #[test]
    fn test_user_override_of_tier_default() {
        let mut settings = NotificationSettings::default();
        settings.set_tier(
            Tier::Outer,
            tend_domain::TierNotify {
                enabled: true,
                priority: Priority::Quiet,
            },
        );

        assert_eq!(
            priority_for_content(Tier::Outer, ContentType::Photo, &settings),
            Some(Priority::Quiet)
        );
    }
}
