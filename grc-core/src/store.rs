//! Session-scoped, append-only collection of risk records.

use crate::record::RiskRecord;

/// Ordered records for the current page session.
///
/// Seeded once from the backend listing and appended to after each
/// successful submission. Nothing is ever updated or removed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RiskStore {
    records: Vec<RiskRecord>,
}

impl RiskStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Install the initial listing ahead of anything already appended.
    ///
    /// A submit can complete before the listing arrives; such records are
    /// kept after the listing unless the listing already contains their id.
    pub fn seed(&mut self, records: Vec<RiskRecord>) {
        log::info!("Seeding risk store with {} records", records.len());
        let appended = std::mem::replace(&mut self.records, records);
        for record in appended {
            if self.records.iter().any(|r| r.id == record.id) {
                log::debug!("Risk {} already in listing", record.id);
            } else {
                self.records.push(record);
            }
        }
    }

    pub fn append(&mut self, record: RiskRecord) {
        log::debug!("Appending risk {} ({})", record.id, record.asset);
        self.records.push(record);
    }

    pub fn records(&self) -> &[RiskRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::RiskId;

    #[test]
    fn test_append_preserves_order() {
        let mut store = RiskStore::new();
        store.seed(vec![RiskRecord::new(RiskId::Number(1), "DB", "SQLi", 4, 5)]);
        store.append(RiskRecord::new(RiskId::Number(2), "Web", "XSS", 2, 3));
        assert_eq!(store.len(), 2);
        assert_eq!(store.records()[0].asset, "DB");
        assert_eq!(store.records()[1].asset, "Web");
    }

    #[test]
    fn test_seed_keeps_earlier_appends() {
        let mut store = RiskStore::new();
        store.append(RiskRecord::new(RiskId::Number(9), "Mail", "Phishing", 2, 5));
        store.seed(vec![RiskRecord::new(RiskId::Number(1), "DB", "SQLi", 4, 5)]);
        let ids: Vec<String> = store.records().iter().map(|r| r.id.to_string()).collect();
        assert_eq!(ids, vec!["1", "9"]);
    }

    #[test]
    fn test_seed_does_not_duplicate_listed_append() {
        let mut store = RiskStore::new();
        store.append(RiskRecord::new(RiskId::Number(2), "Web", "XSS", 2, 3));
        store.seed(vec![
            RiskRecord::new(RiskId::Number(1), "DB", "SQLi", 4, 5),
            RiskRecord::new(RiskId::Number(2), "Web", "XSS", 2, 3),
        ]);
        assert_eq!(store.len(), 2);
        assert_eq!(store.records()[1].id, RiskId::Number(2));
    }

    #[test]
    fn test_starts_empty() {
        let store = RiskStore::new();
        assert!(store.is_empty());
    }
}
