use serde::{Deserialize, Serialize};
use std::fmt;

/// Label shown (and sent to the backend) when the score is zero.
pub const UNRATED_LABEL: &str = "Enter risk";

/// Badge colour for an unrated score.
pub const UNRATED_COLOR: &str = "white";

/// Categorical risk severity derived from a likelihood × impact score.
///
/// Bands (inclusive):
/// - `Low`: 1..=5
/// - `Medium`: 6..=12
/// - `High`: 13..=18
/// - `Critical`: 19 and above
///
/// A score of zero has no level; callers represent it as `None`.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
    Critical,
}

impl RiskLevel {
    pub const ALL: [RiskLevel; 4] = [
        RiskLevel::Low,
        RiskLevel::Medium,
        RiskLevel::High,
        RiskLevel::Critical,
    ];

    /// Map a score onto its band. Non-positive scores are unrated.
    pub fn from_score(score: i32) -> Option<RiskLevel> {
        match score {
            i32::MIN..=0 => None,
            1..=5 => Some(RiskLevel::Low),
            6..=12 => Some(RiskLevel::Medium),
            13..=18 => Some(RiskLevel::High),
            _ => Some(RiskLevel::Critical),
        }
    }

    /// Parse a level label as the backend stores it. Unknown labels
    /// (including the "Enter risk" sentinel) yield `None`.
    pub fn from_label(label: &str) -> Option<RiskLevel> {
        match label.trim() {
            "Low" => Some(RiskLevel::Low),
            "Medium" => Some(RiskLevel::Medium),
            "High" => Some(RiskLevel::High),
            "Critical" => Some(RiskLevel::Critical),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            RiskLevel::Low => "Low",
            RiskLevel::Medium => "Medium",
            RiskLevel::High => "High",
            RiskLevel::Critical => "Critical",
        }
    }

    /// Static compliance advice keyed by level.
    pub fn hint(&self) -> &'static str {
        match self {
            RiskLevel::Low => "Routine monitoring recommended",
            RiskLevel::Medium => "Consider implementing basic controls (ISO 27001)",
            RiskLevel::High => "Recommend NIST PR.AC-7: Rate Limiting",
            RiskLevel::Critical => "Immediate action required: NIST PR.AC-7 + ISO 27001 controls",
        }
    }

    /// CSS colour used for badges and heatmap cells.
    pub fn color(&self) -> &'static str {
        match self {
            RiskLevel::Low => "#70c247",
            RiskLevel::Medium => "yellow",
            RiskLevel::High => "orange",
            RiskLevel::Critical => "red",
        }
    }

    /// High and Critical both count as "high risk" in the summary.
    pub fn is_severe(&self) -> bool {
        matches!(self, RiskLevel::High | RiskLevel::Critical)
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Label for an optional level, falling back to the sentinel.
pub fn level_label(level: Option<RiskLevel>) -> &'static str {
    level.map(|l| l.label()).unwrap_or(UNRATED_LABEL)
}

/// Hint for an optional level; unrated scores carry no advice.
pub fn level_hint(level: Option<RiskLevel>) -> &'static str {
    level.map(|l| l.hint()).unwrap_or("")
}

pub fn level_color(level: Option<RiskLevel>) -> &'static str {
    level.map(|l| l.color()).unwrap_or(UNRATED_COLOR)
}

/// Serde adapter that stores an `Option<RiskLevel>` as its label string.
///
/// The backend echoes whatever label the form sent, so the sentinel and
/// any label we don't recognise both deserialize to `None`.
pub mod level_as_label {
    use super::{level_label, RiskLevel};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(level: &Option<RiskLevel>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(level_label(*level))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<RiskLevel>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let label: Option<String> = Option::deserialize(deserializer)?;
        Ok(label.as_deref().and_then(RiskLevel::from_label))
    }
}
