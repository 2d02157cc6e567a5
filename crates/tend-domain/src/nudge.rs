//! Nudge module - sunset reminders for lapsed relationships

use crate::id::{FriendId, NudgeId};
use crate::tier::Tier;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Action suggested alongside a nudge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NudgeAction {
    /// Schedule a call (core tier)
    ScheduleCall,
    /// Send a voice note (inner tier)
    SendVoiceNote,
    /// Plan a meetup (outer and naybor tiers)
    PlanMeetup,
    /// Review the relationship (acquainted annual cycle)
    AnnualReview,
}

impl NudgeAction {
    /// The action suggested for a threshold-policy nudge in this tier
    ///
    /// Returns `None` for tiers that never produce threshold nudges.
    pub fn for_tier(tier: Tier) -> Option<Self> {
        match tier {
            Tier::Core => Some(NudgeAction::ScheduleCall),
            Tier::Inner => Some(NudgeAction::SendVoiceNote),
            Tier::Outer | Tier::Naybor => Some(NudgeAction::PlanMeetup),
            Tier::Parasocial | Tier::Rolemodel => None,
            Tier::Acquainted => Some(NudgeAction::AnnualReview),
        }
    }
}

/// User response to an annual-cycle nudge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnnualResponse {
    /// Keep the contact where it is; no re-nudge this cycle
    KeepInCircles,
    /// Promote the contact to the outer circle
    PromoteToOuter,
    /// Remove the contact entirely
    RemoveFromCircles,
    /// Suppress eligibility for six months
    SnoozeSixMonths,
}

/// A derived, ephemeral re-engagement reminder
///
/// Nudges are recomputed from the roster on every read; only dismissal,
/// snooze, and once-per-cycle issuance are recorded as state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SunsetNudge {
    /// Unique identifier for this computation of the nudge
    pub id: NudgeId,

    /// The lapsed friend
    pub friend: FriendId,

    /// Display name, denormalized for presentation
    pub friend_name: String,

    /// The friend's tier at computation time
    pub tier: Tier,

    /// Last meaningful contact (None when never contacted since adding)
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub last_deep_contact: Option<DateTime<Utc>>,

    /// Whole days since the reference date
    pub days_since: i64,

    /// What to do about it
    pub suggested_action: NudgeAction,

    /// Whether the user dismissed this nudge
    #[serde(default)]
    pub dismissed: bool,

    /// When it was dismissed
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub dismissed_at: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_per_tier() {
        assert_eq!(NudgeAction::for_tier(Tier::Core), Some(NudgeAction::ScheduleCall));
        assert_eq!(NudgeAction::for_tier(Tier::Inner), Some(NudgeAction::SendVoiceNote));
        assert_eq!(NudgeAction::for_tier(Tier::Outer), Some(NudgeAction::PlanMeetup));
        assert_eq!(NudgeAction::for_tier(Tier::Naybor), Some(NudgeAction::PlanMeetup));
        assert_eq!(NudgeAction::for_tier(Tier::Acquainted), Some(NudgeAction::AnnualReview));
    }

    #[test]
    fn test_observed_tiers_never_nudge() {
        assert_eq!(NudgeAction::for_tier(Tier::Parasocial), None);
        assert_eq!(NudgeAction::for_tier(Tier::Rolemodel), None);
    }
}
