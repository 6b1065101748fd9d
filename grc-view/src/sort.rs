use grc_core::RiskRecord;

/// Tri-state sort on the score column.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortOrder {
    #[default]
    Unsorted,
    Ascending,
    Descending,
}

impl SortOrder {
    /// `Unsorted -> Ascending -> Descending -> Unsorted`.
    pub fn next(self) -> Self {
        match self {
            SortOrder::Unsorted => SortOrder::Ascending,
            SortOrder::Ascending => SortOrder::Descending,
            SortOrder::Descending => SortOrder::Unsorted,
        }
    }

    /// Header indicator.
    pub fn indicator(&self) -> &'static str {
        match self {
            SortOrder::Unsorted => "",
            SortOrder::Ascending => " ▲",
            SortOrder::Descending => " ▼",
        }
    }

    /// Sort rows by score. Stable, so ties keep store order.
    pub fn apply(&self, rows: &mut [&RiskRecord]) {
        match self {
            SortOrder::Unsorted => {}
            SortOrder::Ascending => rows.sort_by(|a, b| a.score.cmp(&b.score)),
            SortOrder::Descending => rows.sort_by(|a, b| b.score.cmp(&a.score)),
        }
    }
}
