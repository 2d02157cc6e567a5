//! Tier module - the circles a relationship can belong to

use serde::{Deserialize, Serialize};

/// Tier a friend belongs to
///
/// The three Dunbar circles carry hard capacity limits; the extended
/// categories are unbounded:
/// - Core: the handful of closest relationships (limit 5)
/// - Inner: close friends (limit 15)
/// - Outer: meaningful but less frequent contacts (limit 150)
/// - Naybor: neighborhood/proximity relationships
/// - Parasocial: people followed, not known mutually
/// - Rolemodel: mentors and examples, observed at a distance
/// - Acquainted: the long tail, reviewed once per annual cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    /// Closest relationships (limit 5)
    Core,

    /// Close friends (limit 15)
    Inner,

    /// Wider circle of meaningful contacts (limit 150)
    Outer,

    /// Neighborhood relationships
    Naybor,

    /// One-directional follows
    Parasocial,

    /// Mentors and role models
    Rolemodel,

    /// Long-tail contacts on the annual review cycle
    Acquainted,
}

impl Tier {
    /// All tiers, in closeness order
    pub const ALL: [Tier; 7] = [
        Tier::Core,
        Tier::Inner,
        Tier::Outer,
        Tier::Naybor,
        Tier::Parasocial,
        Tier::Rolemodel,
        Tier::Acquainted,
    ];

    /// Capacity limit for this tier, `None` when unbounded
    ///
    /// Only the three circles are bounded. The invariant enforced by the
    /// roster is `friends + reserved <= limit` for every bounded tier.
    pub fn limit(&self) -> Option<u32> {
        match self {
            Tier::Core => Some(5),
            Tier::Inner => Some(15),
            Tier::Outer => Some(150),
            Tier::Naybor | Tier::Parasocial | Tier::Rolemodel | Tier::Acquainted => None,
        }
    }

    /// Whether this tier is one of the capacity-bounded circles
    pub fn is_circle(&self) -> bool {
        matches!(self, Tier::Core | Tier::Inner | Tier::Outer)
    }

    /// Get the tier name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            Tier::Core => "core",
            Tier::Inner => "inner",
            Tier::Outer => "outer",
            Tier::Naybor => "naybor",
            Tier::Parasocial => "parasocial",
            Tier::Rolemodel => "rolemodel",
            Tier::Acquainted => "acquainted",
        }
    }

    /// Parse a tier from a string
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "core" => Some(Tier::Core),
            "inner" => Some(Tier::Inner),
            "outer" => Some(Tier::Outer),
            "naybor" => Some(Tier::Naybor),
            "parasocial" => Some(Tier::Parasocial),
            "rolemodel" => Some(Tier::Rolemodel),
            "acquainted" => Some(Tier::Acquainted),
            _ => None,
        }
    }
}

impl std::str::FromStr for Tier {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid tier: {}", s))
    }
}

impl std::fmt::Display for Tier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
