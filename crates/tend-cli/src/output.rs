//! Output formatting for the CLI.

use crate::config::OutputFormat;
use crate::error::Result;
use colored::*;
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};
use tend_domain::{Friend, ReservedSpotGroup, SunsetNudge, Tier};
use tend_store::TierCapacity;

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Format a friend list.
    pub fn format_friends(&self, friends: &[&Friend]) -> Result<String> {
        match self.format {
            OutputFormat::Json => {
                let owned: Vec<&Friend> = friends.to_vec();
                Ok(serde_json::to_string_pretty(&owned)?)
            }
            OutputFormat::Quiet => Ok(friends
                .iter()
                .map(|f| f.id.to_string())
                .collect::<Vec<_>>()
                .join("\n")),
            OutputFormat::Table => self.format_friends_table(friends),
        }
    }

    fn format_friends_table(&self, friends: &[&Friend]) -> Result<String> {
        if friends.is_empty() {
            return Ok(self.colorize("No friends found.", "yellow"));
        }

        let mut builder = Builder::default();
        builder.push_record(["ID", "Name", "Tier", "Email", "Phone", "Last contact"]);

        for friend in friends {
            builder.push_record([
                &friend.id.to_string()[..8],
                &friend.name,
                friend.tier.as_str(),
                friend.email.as_deref().unwrap_or("-"),
                friend.phone.as_deref().unwrap_or("-"),
                &friend
                    .last_contacted
                    .map(|t| t.format("%Y-%m-%d").to_string())
                    .unwrap_or_else(|| "never".to_string()),
            ]);
        }

        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));

        Ok(table.to_string())
    }

    /// Format a capacity summary for one or more tiers.
    pub fn format_capacity(&self, rows: &[(Tier, TierCapacity)]) -> Result<String> {
        if let OutputFormat::Json = self.format {
            let json_rows: Vec<serde_json::Value> = rows
                .iter()
                .map(|(tier, cap)| {
                    serde_json::json!({
                        "tier": tier.as_str(),
                        "limit": cap.limit,
                        "friends": cap.friend_count,
                        "reserved": cap.reserved,
                        "used": cap.used,
                        "available": cap.available,
                    })
                })
                .collect();
            return Ok(serde_json::to_string_pretty(&json_rows)?);
        }

        let mut builder = Builder::default();
        builder.push_record(["Tier", "Limit", "Friends", "Reserved", "Used", "Available"]);

        for (tier, cap) in rows {
            builder.push_record([
                tier.as_str(),
                &cap.limit.map(|l| l.to_string()).unwrap_or_else(|| "∞".into()),
                &cap.friend_count.to_string(),
                &cap.reserved.to_string(),
                &cap.used.to_string(),
                &cap
                    .available
                    .map(|a| a.to_string())
                    .unwrap_or_else(|| "∞".into()),
            ]);
        }

        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));

        Ok(table.to_string())
    }

    /// Format a nudge list.
    pub fn format_nudges(&self, nudges: &[SunsetNudge]) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(nudges)?),
            OutputFormat::Quiet => Ok(nudges
                .iter()
                .map(|n| n.friend.to_string())
                .collect::<Vec<_>>()
                .join("\n")),
            OutputFormat::Table => self.format_nudges_table(nudges),
        }
    }

    fn format_nudges_table(&self, nudges: &[SunsetNudge]) -> Result<String> {
        if nudges.is_empty() {
            return Ok(self.colorize("Nothing due. All tended.", "green"));
        }

        let mut builder = Builder::default();
        builder.push_record(["Friend", "Tier", "Days since", "Suggested action"]);

        for nudge in nudges {
            let action = match nudge.suggested_action {
                tend_domain::NudgeAction::ScheduleCall => "schedule a call",
                tend_domain::NudgeAction::SendVoiceNote => "send a voice note",
                tend_domain::NudgeAction::PlanMeetup => "plan a meetup",
                tend_domain::NudgeAction::AnnualReview => "annual review",
            };
            builder.push_record([
                &nudge.friend_name,
                nudge.tier.as_str(),
                &nudge.days_since.to_string(),
                action,
            ]);
        }

        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));

        Ok(table.to_string())
    }

    /// Format reserved spot groups.
    pub fn format_reserved(&self, groups: &[&ReservedSpotGroup]) -> Result<String> {
        match self.format {
            OutputFormat::Json => {
                let owned: Vec<&ReservedSpotGroup> = groups.to_vec();
                Ok(serde_json::to_string_pretty(&owned)?)
            }
            OutputFormat::Quiet => Ok(groups
                .iter()
                .map(|g| g.id.to_string())
                .collect::<Vec<_>>()
                .join("\n")),
            OutputFormat::Table => {
                if groups.is_empty() {
                    return Ok(self.colorize("No reserved spots.", "yellow"));
                }
                let mut builder = Builder::default();
                builder.push_record(["ID", "Tier", "Count", "Note"]);
                for group in groups {
                    builder.push_record([
                        &group.id.to_string()[..8],
                        group.tier.as_str(),
                        &group.count.to_string(),
                        group.note.as_deref().unwrap_or("-"),
                    ]);
                }
                let mut table = builder.build();
                table
                    .with(Style::rounded())
                    .with(Modify::new(Rows::first()).with(Alignment::center()));
                Ok(table.to_string())
            }
        }
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Format an error message.
    pub fn error(&self, message: &str) -> String {
        self.colorize(&format!("✗ {}", message), "red")
    }

    /// Format an info message.
    pub fn info(&self, message: &str) -> String {
        self.colorize(&format!("ℹ {}", message), "blue")
    }

    /// Format a warning message.
    pub fn warning(&self, message: &str) -> String {
        self.colorize(&format!("⚠ {}", message), "yellow")
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "red" => text.red().to_string(),
            "green" => text.green().to_string(),
            "blue" => text.blue().to_string(),
            "yellow" => text.yellow().to_string(),
            _ => text.to_string(),
        }
    }
}
