//! Tend Nudge Scheduler
//!
//! Computes which relationships are due for a re-engagement reminder.
//! Two policies coexist:
//!
//! - **Threshold policy** (core/inner/outer/naybor): a friend is due once
//!   the days since last contact reach the tier's threshold
//! - **Annual-batch policy** (acquainted): every contact that has aged at
//!   least 12 months is assigned to one of 12 monthly buckets by a
//!   deterministic hash of its id, and reviewed in that month's batch
//!
//! Nudge generation is a pure function of `(now, roster, history)`: the
//! UI can re-query it any number of times within a day without nudges
//! duplicating or shifting. Only dismissals, snoozes, and per-cycle
//! review outcomes are recorded as state, in the append-only [`NudgeLog`].

#![warn(missing_docs)]

mod config;
mod error;
mod history;
mod metrics;
mod scheduler;
mod worker;

pub use config::SchedulerConfig;
pub use error::SchedulerError;
pub use history::NudgeLog;
pub use metrics::SchedulerMetrics;
pub use scheduler::{bucket_for, months_between, NudgeScheduler};
pub use worker::NudgeWorker;
