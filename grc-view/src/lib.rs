//! Read-only projections of the risk store for the dashboard.
//!
//! Everything here is recomputed from scratch on each render; none of it
//! mutates the store.
//!
//! # Usage
//!
//! ```rust
//! use grc_core::{RiskId, RiskLevel, RiskRecord};
//! use grc_view::{DashboardView, LevelFilter};
//!
//! let records = vec![
//!     RiskRecord::new(RiskId::Number(1), "DB", "SQLi", 4, 5),
//!     RiskRecord::new(RiskId::Number(2), "Web", "XSS", 1, 2),
//! ];
//!
//! let mut view = DashboardView::default();
//! view.set_filter(LevelFilter::Level(RiskLevel::Critical));
//! let rows = view.rows(&records);
//! assert_eq!(rows.len(), 1);
//! assert_eq!(rows[0].asset, "DB");
//! ```

pub mod export;
pub mod filter;
pub mod heatmap;
pub mod sort;
pub mod stats;

pub use filter::LevelFilter;
pub use heatmap::Heatmap;
pub use sort::SortOrder;
pub use stats::RiskSummary;

use grc_core::RiskRecord;

/// The dashboard's ephemeral view state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DashboardView {
    pub filter: LevelFilter,
    pub sort: SortOrder,
}

impl DashboardView {
    pub fn set_filter(&mut self, filter: LevelFilter) {
        self.filter = filter;
    }

    /// Score header clicked.
    pub fn toggle_sort(&mut self) {
        self.sort = self.sort.next();
    }

    /// Records as displayed: filtered, then sorted.
    pub fn rows<'a>(&self, records: &'a [RiskRecord]) -> Vec<&'a RiskRecord> {
        let mut rows: Vec<&RiskRecord> = records.iter().filter(|r| self.filter.matches(r)).collect();
        self.sort.apply(&mut rows);
        rows
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use grc_core::{RiskId, RiskLevel};

    fn sample() -> Vec<RiskRecord> {
        vec![
            RiskRecord::new(RiskId::Number(1), "DB", "SQLi", 4, 5),
            RiskRecord::new(RiskId::Number(2), "Web", "XSS", 1, 3),
            RiskRecord::new(RiskId::Number(3), "VPN", "Brute force", 4, 4),
            RiskRecord::new(RiskId::Number(4), "Mail", "Phishing", 2, 5),
            RiskRecord::new(RiskId::Number(5), "HR", "Insider", 1, 3),
        ]
    }

    fn ids(rows: &[&RiskRecord]) -> Vec<String> {
        rows.iter().map(|r| r.id.to_string()).collect()
    }

    #[test]
    fn test_three_clicks_restore_store_order() {
        let records = sample();
        let mut view = DashboardView::default();
        let original = ids(&view.rows(&records));

        view.toggle_sort();
        assert_eq!(ids(&view.rows(&records)), vec!["2", "5", "4", "3", "1"]);
        view.toggle_sort();
        assert_eq!(ids(&view.rows(&records)), vec!["1", "3", "4", "2", "5"]);
        view.toggle_sort();
        assert_eq!(ids(&view.rows(&records)), original);
    }

    #[test]
    fn test_filter_then_sort() {
        let records = sample();
        let mut view = DashboardView::default();
        view.set_filter(LevelFilter::Level(RiskLevel::Low));
        view.toggle_sort();
        let rows = view.rows(&records);
        assert_eq!(ids(&rows), vec!["2", "5"]);
        assert!(rows.iter().all(|r| r.level == Some(RiskLevel::Low)));
    }

    #[test]
    fn test_all_filter_yields_everything_sorted() {
        let records = sample();
        let mut view = DashboardView::default();
        view.toggle_sort();
        view.toggle_sort();
        let rows = view.rows(&records);
        assert_eq!(rows.len(), records.len());
        assert!(rows.windows(2).all(|w| w[0].score >= w[1].score));
    }
}
