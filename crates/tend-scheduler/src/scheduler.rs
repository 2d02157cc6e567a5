//! Core nudge generation: threshold policy and the annual batch cycle

use crate::{NudgeLog, SchedulerConfig, SchedulerError, SchedulerMetrics};
use chrono::{DateTime, Datelike, Months, Utc};
use tend_domain::{AnnualResponse, Friend, FriendId, NudgeAction, NudgeId, SunsetNudge, Tier};
use tend_store::Roster;

/// Full calendar months elapsed from `from` to `to`
///
/// A contact added on the 15th completes a month on the 15th of the
/// next month; time of day is ignored.
pub fn months_between(from: DateTime<Utc>, to: DateTime<Utc>) -> i32 {
    let mut months =
        (to.year() - from.year()) * 12 + (to.month() as i32 - from.month() as i32);
    if to.day() < from.day() {
        months -= 1;
    }
    months
}

/// Whole calendar days elapsed from `from` to `to`
fn days_between(from: DateTime<Utc>, to: DateTime<Utc>) -> i64 {
    (to.date_naive() - from.date_naive()).num_days()
}

/// FNV-1a, 64-bit. Stateless and stable across runs, which the std
/// hasher is not (SipHash is seeded per process).
fn fnv1a64(bytes: &[u8]) -> u64 {
    const OFFSET_BASIS: u64 = 0xcbf2_9ce4_8422_2325;
    const PRIME: u64 = 0x0000_0100_0000_01b3;

    let mut hash = OFFSET_BASIS;
    for &byte in bytes {
        hash ^= u64::from(byte);
        hash = hash.wrapping_mul(PRIME);
    }
    hash
}

/// The monthly bucket (1-12) an acquainted contact reviews in
///
/// Derived purely from the contact's id, so no assignment table needs
/// persisting and a bulk import spreads roughly evenly across the next
/// twelve months. The flip side: if ids are ever rewritten (say, a
/// storage migration), buckets silently reshuffle.
pub fn bucket_for(id: FriendId) -> u32 {
    (fnv1a64(id.to_string().as_bytes()) % 12) as u32 + 1
}

/// The nudge scheduler
///
/// Wraps pure generation with configuration and metrics. Generation
/// itself never mutates the roster or the log; dismissals and annual
/// responses do, explicitly.
///
/// # Examples
///
/// ```
/// use tend_scheduler::{NudgeScheduler, NudgeLog};
/// use tend_store::Roster;
/// use chrono::Utc;
///
/// let mut scheduler = NudgeScheduler::default_config();
/// let roster = Roster::new();
/// let log = NudgeLog::new();
/// let nudges = scheduler.generate(Utc::now(), &roster, &log);
/// assert!(nudges.is_empty());
/// ```
pub struct NudgeScheduler {
    config: SchedulerConfig,
    metrics: SchedulerMetrics,
}

impl NudgeScheduler {
    /// Create a scheduler with the given configuration
    pub fn new(config: SchedulerConfig) -> Self {
        Self {
            config,
            metrics: SchedulerMetrics::new(),
        }
    }

    /// Create a scheduler with default thresholds
    pub fn default_config() -> Self {
        Self::new(SchedulerConfig::default())
    }

    /// The active configuration
    pub fn config(&self) -> &SchedulerConfig {
        &self.config
    }

    /// Metrics collected so far
    pub fn metrics(&self) -> &SchedulerMetrics {
        &self.metrics
    }

    /// Reset metrics counters
    pub fn reset_metrics(&mut self) {
        self.metrics.reset();
    }

    /// Compute all nudges due right now
    ///
    /// Pure with respect to its inputs: the same `(now, roster, log)`
    /// yields the same batch, so repeated UI queries within a day are
    /// harmless. Ordered most-lapsed first.
    pub fn generate(
        &mut self,
        now: DateTime<Utc>,
        roster: &Roster,
        log: &NudgeLog,
    ) -> Vec<SunsetNudge> {
        let mut nudges = self.threshold_nudges(now, roster, log);
        nudges.extend(self.annual_batch(now, roster, log));
        nudges.sort_by(|a, b| {
            b.days_since
                .cmp(&a.days_since)
                .then_with(|| a.friend.cmp(&b.friend))
        });

        for nudge in &nudges {
            self.metrics.record_issued(nudge.tier);
        }
        self.metrics.record_sweep();
        tracing::debug!(count = nudges.len(), "nudge sweep complete");

        nudges
    }

    /// Nudges due right now for a single tier
    pub fn nudges_for_tier(
        &mut self,
        tier: Tier,
        now: DateTime<Utc>,
        roster: &Roster,
        log: &NudgeLog,
    ) -> Vec<SunsetNudge> {
        let mut nudges = self.generate(now, roster, log);
        nudges.retain(|n| n.tier == tier);
        nudges
    }

    /// Threshold policy: due once days since last contact reach the
    /// tier's threshold (`>=`), measured from `last_contacted` with
    /// `added_at` as the fallback
    fn threshold_nudges(
        &self,
        now: DateTime<Utc>,
        roster: &Roster,
        log: &NudgeLog,
    ) -> Vec<SunsetNudge> {
        roster
            .all_friends()
            .filter_map(|friend| {
                let threshold = self.config.threshold_for(friend.tier)?;
                let action = NudgeAction::for_tier(friend.tier)?;
                let reference = friend.reference_date();
                let days = days_between(reference, now);
                if days < threshold || log.dismissed_since(friend.id, reference) {
                    return None;
                }
                Some(self.nudge_for(friend, days, action))
            })
            .collect()
    }

    /// Annual-batch policy for the acquainted tier
    ///
    /// Only active on the 1st of a month. A contact is in the batch when
    /// it has aged into the cycle, its hash bucket matches the current
    /// month, it hasn't been reviewed this cycle year, and it isn't
    /// snoozed.
    fn annual_batch(
        &self,
        now: DateTime<Utc>,
        roster: &Roster,
        log: &NudgeLog,
    ) -> Vec<SunsetNudge> {
        if now.day() != 1 {
            return Vec::new();
        }
        let month = now.month();
        let cycle_year = now.year();

        roster
            .friends_in_tier(Tier::Acquainted)
            .into_iter()
            .filter(|friend| {
                self.is_aged(friend, now)
                    && bucket_for(friend.id) == month
                    && !log.already_nudged(friend.id, cycle_year)
                    && !log.is_snoozed(friend.id, now)
            })
            .map(|friend| {
                let days = days_between(friend.reference_date(), now);
                self.nudge_for(friend, days, NudgeAction::AnnualReview)
            })
            .collect()
    }

    /// Has this contact aged into the annual cycle?
    pub fn is_aged(&self, friend: &Friend, now: DateTime<Utc>) -> bool {
        months_between(friend.added_at, now) >= self.config.aging_months as i32
    }

    /// Informational: expected size of a monthly batch, `ceil(eligible / 12)`
    ///
    /// The actual per-month count is whatever the hash distribution
    /// yields, never a capped slice.
    pub fn expected_batch_size(&self, now: DateTime<Utc>, roster: &Roster) -> usize {
        let eligible = roster
            .friends_in_tier(Tier::Acquainted)
            .into_iter()
            .filter(|f| self.is_aged(f, now))
            .count();
        eligible.div_ceil(12)
    }

    /// Dismiss a nudge: suppressed from active lists, history kept
    pub fn dismiss(&mut self, log: &mut NudgeLog, nudge: &SunsetNudge, now: DateTime<Utc>) {
        if nudge.tier == Tier::Acquainted {
            log.record_annual_dismissal(nudge.friend, now.year(), now);
        } else {
            log.record_dismissal(nudge.friend, now);
        }
        self.metrics.record_dismissed(nudge.tier);
    }

    /// Apply the user's response to an annual-cycle nudge
    pub fn respond_annual(
        &mut self,
        roster: &mut Roster,
        log: &mut NudgeLog,
        friend: FriendId,
        response: AnnualResponse,
        now: DateTime<Utc>,
    ) -> Result<(), SchedulerError> {
        if roster.get_friend(friend).is_none() {
            return Err(SchedulerError::StaleNudge(friend));
        }
        let cycle_year = now.year();

        match response {
            AnnualResponse::KeepInCircles => {
                log.record_review(friend, cycle_year, now);
            }
            AnnualResponse::PromoteToOuter => {
                roster.move_friend(friend, Tier::Outer)?;
                log.record_review(friend, cycle_year, now);
            }
            AnnualResponse::RemoveFromCircles => {
                roster.remove_friend(friend)?;
            }
            AnnualResponse::SnoozeSixMonths => {
                let until = now
                    .checked_add_months(Months::new(self.config.snooze_months))
                    .unwrap_or(now);
                log.snooze_until(friend, until);
                log.record_review(friend, cycle_year, now);
            }
        }
        self.metrics.record_response(response);
        Ok(())
    }

    fn nudge_for(&self, friend: &Friend, days: i64, action: NudgeAction) -> SunsetNudge {
        SunsetNudge {
            id: NudgeId::new(),
            friend: friend.id,
            friend_name: friend.name.clone(),
            tier: friend.tier,
            last_deep_contact: friend.last_contacted,
            days_since: days,
            suggested_action: action,
            dismissed: false,
            dismissed_at: None,
        }
    }
}
