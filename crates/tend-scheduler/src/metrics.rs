//! Metrics collection for scheduler operations

use std::collections::HashMap;
use tend_domain::{AnnualResponse, Tier};

/// Metrics collected across nudge sweeps
///
/// Tracks nudges issued and dismissed per tier and the outcomes of
/// annual reviews.
#[derive(Debug, Clone, Default)]
pub struct SchedulerMetrics {
    /// Nudges issued per tier
    pub issued: HashMap<Tier, usize>,

    /// Nudges dismissed per tier
    pub dismissed: HashMap<Tier, usize>,

    /// Annual responses by kind
    pub responses: HashMap<AnnualResponse, usize>,

    /// Total generation sweeps completed
    pub sweep_count: usize,
}

impl SchedulerMetrics {
    /// Create new empty metrics
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an issued nudge
    pub fn record_issued(&mut self, tier: Tier) {
        *self.issued.entry(tier).or_insert(0) += 1;
    }

    /// Record a dismissed nudge
    pub fn record_dismissed(&mut self, tier: Tier) {
        *self.dismissed.entry(tier).or_insert(0) += 1;
    }

    /// Record an annual review outcome
    pub fn record_response(&mut self, response: AnnualResponse) {
        *self.responses.entry(response).or_insert(0) += 1;
    }

    /// Record a sweep completion
    pub fn record_sweep(&mut self) {
        self.sweep_count += 1;
    }

    /// Total nudges issued across all tiers
    pub fn total_issued(&self) -> usize {
        self.issued.values().sum()
    }

    /// Total nudges dismissed across all tiers
    pub fn total_dismissed(&self) -> usize {
        self.dismissed.values().sum()
    }

    /// Reset all counters
    pub fn reset(&mut self) {
        self.issued.clear();
        self.dismissed.clear();
        self.responses.clear();
        self.sweep_count = 0;
    }

    /// Generate a summary report
    pub fn summary(&self) -> String {
        let mut lines = vec![
            "Nudge Metrics Summary".to_string(),
            "=====================".to_string(),
            format!("Sweeps: {}", self.sweep_count),
            String::new(),
        ];

        if !self.issued.is_empty() {
            lines.push("Issued by tier:".to_string());
            for (tier, count) in &self.issued {
                lines.push(format!("  {}: {}", tier, count));
            }
            lines.push(format!("  Total: {}", self.total_issued()));
            lines.push(String::new());
        }

        if !self.dismissed.is_empty() {
            lines.push("Dismissed by tier:".to_string());
            for (tier, count) in &self.dismissed {
                lines.push(format!("  {}: {}", tier, count));
            }
            lines.push(format!("  Total: {}", self.total_dismissed()));
        }

        lines.join("\n")
    }
}
