//! Nudge history - the minimal persisted state behind nudge generation
//!
//! Nudges themselves are recomputed on every read; what persists is
//! append-only: which contacts were reviewed in which annual cycle,
//! threshold-nudge dismissals, and active snoozes.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tend_domain::FriendId;

/// One annual-cycle review record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnnualRecord {
    /// The reviewed contact
    pub friend: FriendId,
    /// Calendar year of the cycle (cycles reset January 1)
    pub cycle_year: i32,
    /// When the review happened
    pub reviewed_at: DateTime<Utc>,
    /// Whether the nudge was dismissed rather than acted on
    #[serde(default)]
    pub dismissed: bool,
}

/// One threshold-nudge dismissal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dismissal {
    /// The friend whose nudge was dismissed
    pub friend: FriendId,
    /// When
    pub dismissed_at: DateTime<Utc>,
}

/// Append-only nudge history
///
/// Records are never deleted; a dismissal hides a nudge from active
/// lists but the history of it remains queryable.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NudgeLog {
    annual: Vec<AnnualRecord>,
    dismissals: Vec<Dismissal>,
    snoozes: HashMap<FriendId, DateTime<Utc>>,
}

impl NudgeLog {
    /// Create an empty log
    pub fn new() -> Self {
        Self::default()
    }

    /// Was this contact already reviewed (or dismissed) in the given
    /// cycle year?
    pub fn already_nudged(&self, friend: FriendId, cycle_year: i32) -> bool {
        self.annual
            .iter()
            .any(|r| r.friend == friend && r.cycle_year == cycle_year)
    }

    /// Record an annual-cycle review outcome
    pub fn record_review(&mut self, friend: FriendId, cycle_year: i32, now: DateTime<Utc>) {
        self.annual.push(AnnualRecord {
            friend,
            cycle_year,
            reviewed_at: now,
            dismissed: false,
        });
    }

    /// Record an annual-cycle dismissal (suppresses re-nudge this cycle)
    pub fn record_annual_dismissal(
        &mut self,
        friend: FriendId,
        cycle_year: i32,
        now: DateTime<Utc>,
    ) {
        self.annual.push(AnnualRecord {
            friend,
            cycle_year,
            reviewed_at: now,
            dismissed: true,
        });
    }

    /// Record a threshold-nudge dismissal
    ///
    /// The nudge stays suppressed while the friend's reference date is
    /// unchanged; fresh contact resets the window.
    pub fn record_dismissal(&mut self, friend: FriendId, now: DateTime<Utc>) {
        self.dismissals.push(Dismissal {
            friend,
            dismissed_at: now,
        });
    }

    /// Is a threshold nudge for this friend suppressed, given the date
    /// the lapse is measured from?
    pub fn dismissed_since(&self, friend: FriendId, reference: DateTime<Utc>) -> bool {
        self.dismissals
            .iter()
            .any(|d| d.friend == friend && d.dismissed_at >= reference)
    }

    /// Suppress a contact's annual eligibility until the given date
    pub fn snooze_until(&mut self, friend: FriendId, until: DateTime<Utc>) {
        self.snoozes.insert(friend, until);
    }

    /// Is this contact currently snoozed?
    pub fn is_snoozed(&self, friend: FriendId, now: DateTime<Utc>) -> bool {
        self.snoozes.get(&friend).is_some_and(|until| *until > now)
    }

    /// All annual records, oldest first
    pub fn annual_records(&self) -> &[AnnualRecord] {
        &self.annual
    }

    /// All threshold dismissals, oldest first
    pub fn threshold_dismissals(&self) -> &[Dismissal] {
        &self.dismissals
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn ts(y: i32, m: u32, d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, 8, 0, 0).unwrap()
    }

    #[test]
    fn test_already_nudged_is_scoped_to_cycle_year() {
        let mut log = NudgeLog::new();
        let friend = FriendId::new();

        log.record_review(friend, 2024, ts(2024, 5, 1));
        assert!(log.already_nudged(friend, 2024));
        assert!(!log.already_nudged(friend, 2025));
    }

    #[test]
    fn test_annual_dismissal_also_counts_as_reviewed() {
        let mut log = NudgeLog::new();
        let friend = FriendId::new();

        log.record_annual_dismissal(friend, 2025, ts(2025, 3, 1));
        assert!(log.already_nudged(friend, 2025));
        assert!(log.annual_records()[0].dismissed);
    }

    #[test]
    fn test_threshold_dismissal_window() {
        let mut log = NudgeLog::new();
        let friend = FriendId::new();
        log.record_dismissal(friend, ts(2025, 6, 10));

        // Suppressed while the reference date predates the dismissal
        assert!(log.dismissed_since(friend, ts(2025, 6, 1)));
        // A fresh contact after the dismissal re-arms the nudge
        assert!(!log.dismissed_since(friend, ts(2025, 6, 20)));
    }

    #[test]
    fn test_snooze_expires() {
        let mut log = NudgeLog::new();
        let friend = FriendId::new();
        log.snooze_until(friend, ts(2025, 12, 1));

        assert!(log.is_snoozed(friend, ts(2025, 8, 1)));
        assert!(!log.is_snoozed(friend, ts(2025, 12, 1)));
        assert!(!log.is_snoozed(friend, ts(2026, 1, 1)));
    }

    #[test]
    fn test_history_is_append_only() {
        let mut log = NudgeLog::new();
        let friend = FriendId::new();

        log.record_dismissal(friend, ts(2025, 1, 1));
        log.record_dismissal(friend, ts(2025, 2, 1));
        assert_eq!(log.threshold_dismissals().len(), 2);
    }

    #[test]
    fn test_serde_roundtrip() {
        let mut log = NudgeLog::new();
        let friend = FriendId::new();
        log.record_review(friend, 2025, ts(2025, 4, 1));
        log.snooze_until(friend, ts(2025, 10, 1));

        let json = serde_json::to_string(&log).unwrap();
        let back: NudgeLog = serde_json::from_str(&json).unwrap();
        assert_eq!(back, log);
    }
}
