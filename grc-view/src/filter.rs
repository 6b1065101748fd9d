use grc_core::{RiskLevel, RiskRecord};
use std::fmt;

/// Level filter for the dashboard table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LevelFilter {
    #[default]
    All,
    Level(RiskLevel),
}

impl LevelFilter {
    /// Options in the order the selector lists them.
    pub const OPTIONS: [LevelFilter; 5] = [
        LevelFilter::All,
        LevelFilter::Level(RiskLevel::Low),
        LevelFilter::Level(RiskLevel::Medium),
        LevelFilter::Level(RiskLevel::High),
        LevelFilter::Level(RiskLevel::Critical),
    ];

    pub fn matches(&self, record: &RiskRecord) -> bool {
        match self {
            LevelFilter::All => true,
            LevelFilter::Level(level) => record.level == Some(*level),
        }
    }

    /// Value used in the `<select>`.
    pub fn value(&self) -> &'static str {
        match self {
            LevelFilter::All => "All",
            LevelFilter::Level(level) => level.label(),
        }
    }

    /// Inverse of `value`. Unknown values fall back to `All`.
    pub fn from_value(value: &str) -> Self {
        RiskLevel::from_label(value)
            .map(LevelFilter::Level)
            .unwrap_or(LevelFilter::All)
    }
}

impl fmt::Display for LevelFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.value())
    }
}
