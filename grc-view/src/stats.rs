use grc_core::RiskRecord;

/// Summary figures shown above the table. Always computed over the full,
/// unfiltered store.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RiskSummary {
    pub total: usize,
    /// Records rated High or Critical.
    pub high_risk: usize,
    /// Mean score rounded to two decimals; 0 for an empty store.
    pub average_score: f64,
}

impl RiskSummary {
    pub fn from_records(records: &[RiskRecord]) -> Self {
        let total = records.len();
        let high_risk = records
            .iter()
            .filter(|r| r.level.is_some_and(|l| l.is_severe()))
            .count();
        let average_score = if total == 0 {
            0.0
        } else {
            let sum: i64 = records.iter().map(|r| r.score as i64).sum();
            round2(sum as f64 / total as f64)
        };
        Self {
            total,
            high_risk,
            average_score,
        }
    }

    /// Average formatted for display, e.g. `"12.33"`.
    pub fn average_display(&self) -> String {
        format!("{:.2}", self.average_score)
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
