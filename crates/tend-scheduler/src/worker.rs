//! Background worker for periodic nudge sweeps

use crate::{NudgeLog, NudgeScheduler, SchedulerConfig};
use chrono::Utc;
use std::sync::{Arc, RwLock};
use tend_store::Roster;
use tokio::time::{interval, Duration};

/// Background worker that re-runs nudge generation on a schedule
///
/// Generation is pure, so the worker exists only to surface fresh nudges
/// without the UI having to poll: it ticks at the configured interval
/// (daily by default) and logs what came due.
///
/// # Examples
///
/// ```no_run
/// use std::sync::{Arc, RwLock};
/// use tend_scheduler::{NudgeWorker, NudgeLog, SchedulerConfig};
/// use tend_store::Roster;
///
/// #[tokio::main]
/// async fn main() {
///     let roster = Arc::new(RwLock::new(Roster::new()));
///     let log = Arc::new(RwLock::new(NudgeLog::new()));
///     let mut worker = NudgeWorker::new(SchedulerConfig::default());
///
///     // Run until Ctrl+C
///     worker.run(roster, log).await;
/// }
/// ```
pub struct NudgeWorker {
    scheduler: NudgeScheduler,
    interval: Duration,
}

impl NudgeWorker {
    /// Create a worker with the given configuration
    pub fn new(config: SchedulerConfig) -> Self {
        let interval = Duration::from_secs(config.check_interval_hours * 3600);
        Self {
            scheduler: NudgeScheduler::new(config),
            interval,
        }
    }

    /// Create a worker with default configuration
    pub fn default_config() -> Self {
        Self::new(SchedulerConfig::default())
    }

    /// Run the worker until a shutdown signal (Ctrl+C) is received
    pub async fn run(&mut self, roster: Arc<RwLock<Roster>>, log: Arc<RwLock<NudgeLog>>) {
        let mut ticker = interval(self.interval);

        tracing::info!(interval = ?self.interval, "nudge worker started");

        loop {
            tokio::select! {
                _ = ticker.tick() => {
                    self.sweep(&roster, &log);
                }
                _ = tokio::signal::ctrl_c() => {
                    tracing::info!("shutdown signal received, stopping nudge worker");
                    break;
                }
            }
        }

        tracing::info!("nudge worker stopped. Final metrics:\n{}", self.scheduler.metrics().summary());
    }

    /// Run a fixed number of sweep cycles (useful for testing)
    pub async fn run_cycles(
        &mut self,
        roster: Arc<RwLock<Roster>>,
        log: Arc<RwLock<NudgeLog>>,
        cycles: usize,
    ) {
        let mut ticker = interval(self.interval);

        for cycle in 0..cycles {
            ticker.tick().await;
            tracing::debug!("sweep cycle {}/{}", cycle + 1, cycles);
            self.sweep(&roster, &log);
        }
    }

    fn sweep(&mut self, roster: &Arc<RwLock<Roster>>, log: &Arc<RwLock<NudgeLog>>) {
        let now = Utc::now();
        let roster = roster.read().expect("roster lock poisoned");
        let log = log.read().expect("nudge log lock poisoned");

        let nudges = self.scheduler.generate(now, &roster, &log);
        if nudges.is_empty() {
            tracing::debug!("sweep found nothing due");
        } else {
            tracing::info!(count = nudges.len(), "relationships due for tending");
        }
    }

    /// Metrics collected so far
    pub fn metrics(&self) -> &crate::SchedulerMetrics {
        self.scheduler.metrics()
    }
}
