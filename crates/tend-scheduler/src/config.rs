//! Configuration for nudge scheduling
//!
//! Defines per-tier contact thresholds and the aging parameters of the
//! acquainted annual cycle.

use serde::{Deserialize, Serialize};
use tend_domain::Tier;

/// Configuration for the nudge scheduler
///
/// # Examples
///
/// ```
/// use tend_scheduler::SchedulerConfig;
///
/// // Default thresholds
/// let config = SchedulerConfig::default();
/// assert_eq!(config.core_threshold_days, 14);
///
/// // Tighter follow-up cadence
/// let config = SchedulerConfig::attentive();
/// assert_eq!(config.core_threshold_days, 7);
///
/// // Looser cadence
/// let config = SchedulerConfig::relaxed();
/// assert_eq!(config.core_threshold_days, 30);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SchedulerConfig {
    /// Days without contact before a core friend is due
    /// Default: 14
    pub core_threshold_days: i64,

    /// Days without contact before an inner friend is due
    /// Default: 30
    pub inner_threshold_days: i64,

    /// Days without contact before an outer friend is due
    /// Default: 90
    pub outer_threshold_days: i64,

    /// Days without contact before a naybor is due
    /// Default: 60
    pub naybor_threshold_days: i64,

    /// Months a contact must age before entering the annual cycle
    /// Default: 12
    pub aging_months: u32,

    /// Months a snoozed contact stays out of the annual cycle
    /// Default: 6
    pub snooze_months: u32,

    /// Hours between background sweep ticks
    /// Default: 24 (daily)
    #[serde(default = "default_check_interval")]
    pub check_interval_hours: u64,
}

fn default_check_interval() -> u64 {
    24
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            core_threshold_days: 14,
            inner_threshold_days: 30,
            outer_threshold_days: 90,
            naybor_threshold_days: 60,
            aging_months: 12,
            snooze_months: 6,
            check_interval_hours: 24,
        }
    }
}

impl SchedulerConfig {
    /// Tighter cadence for users who want frequent reminders
    pub fn attentive() -> Self {
        Self {
            core_threshold_days: 7,
            inner_threshold_days: 14,
            outer_threshold_days: 45,
            naybor_threshold_days: 30,
            ..Self::default()
        }
    }

    /// Looser cadence for users who find the defaults noisy
    pub fn relaxed() -> Self {
        Self {
            core_threshold_days: 30,
            inner_threshold_days: 60,
            outer_threshold_days: 180,
            naybor_threshold_days: 120,
            ..Self::default()
        }
    }

    /// Threshold in days for a tier, `None` when the tier never produces
    /// threshold nudges
    ///
    /// Parasocial and rolemodel relationships are observed, not tended;
    /// acquainted contacts are handled by the annual cycle instead.
    pub fn threshold_for(&self, tier: Tier) -> Option<i64> {
        match tier {
            Tier::Core => Some(self.core_threshold_days),
            Tier::Inner => Some(self.inner_threshold_days),
            Tier::Outer => Some(self.outer_threshold_days),
            Tier::Naybor => Some(self.naybor_threshold_days),
            Tier::Parasocial | Tier::Rolemodel | Tier::Acquainted => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_thresholds() {
        let config = SchedulerConfig::default();
        assert_eq!(config.threshold_for(Tier::Core), Some(14));
        assert_eq!(config.threshold_for(Tier::Inner), Some(30));
        assert_eq!(config.threshold_for(Tier::Outer), Some(90));
        assert_eq!(config.threshold_for(Tier::Naybor), Some(60));
        assert_eq!(config.aging_months, 12);
        assert_eq!(config.snooze_months, 6);
    }

    #[test]
    fn test_exempt_tiers_have_no_threshold() {
        let config = SchedulerConfig::default();
        assert_eq!(config.threshold_for(Tier::Parasocial), None);
        assert_eq!(config.threshold_for(Tier::Rolemodel), None);
        assert_eq!(config.threshold_for(Tier::Acquainted), None);
    }

    #[test]
    fn test_presets_bracket_default() {
        let default = SchedulerConfig::default();
        assert!(SchedulerConfig::attentive().core_threshold_days < default.core_threshold_days);
        assert!(SchedulerConfig::relaxed().core_threshold_days > default.core_threshold_days);
    }

    #[test]
    fn test_serde_roundtrip() {
        let config = SchedulerConfig::relaxed();
        let serialized = serde_json::to_string(&config).unwrap();
        let deserialized: SchedulerConfig = serde_json::from_str(&serialized).unwrap();

        assert_eq!(config.core_threshold_days, deserialized.core_threshold_days);
        assert_eq!(config.outer_threshold_days, deserialized.outer_threshold_days);
        assert_eq!(config.check_interval_hours, deserialized.check_interval_hours);
    }
}
