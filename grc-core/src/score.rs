//! Likelihood × impact scoring.

use crate::level::{level_color, level_hint, level_label, RiskLevel};

/// Result of scoring one likelihood/impact pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classification {
    pub score: i32,
    /// `None` when the score is zero ("Enter risk").
    pub level: Option<RiskLevel>,
    pub hint: &'static str,
}

impl Classification {
    pub fn label(&self) -> &'static str {
        level_label(self.level)
    }

    pub fn color(&self) -> &'static str {
        level_color(self.level)
    }
}

/// Score a likelihood/impact pair and classify it.
///
/// `score = likelihood * impact`; the level follows from the score alone.
pub fn classify(likelihood: i32, impact: i32) -> Classification {
    let score = likelihood * impact;
    let level = RiskLevel::from_score(score);
    Classification {
        score,
        level,
        hint: level_hint(level),
    }
}
