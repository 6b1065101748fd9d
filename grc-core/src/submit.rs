//! Submit workflow for the entry form.

use crate::backend::RiskBackend;
use crate::banner::{BannerState, TimerToken};
use crate::draft::RiskDraft;
use crate::error::RiskError;
use crate::record::RiskRecord;
use crate::store::RiskStore;

pub const SUBMIT_SUCCESS: &str = "Risk added successfully";

/// Validate the draft and post it.
///
/// Validation failures return before any request is made.
pub async fn submit_risk<B: RiskBackend>(
    backend: &B,
    draft: &RiskDraft,
) -> Result<RiskRecord, RiskError> {
    let payload = draft.validate()?;
    log::info!(
        "Submitting risk {} / {} (score {})",
        payload.asset,
        payload.threat,
        payload.score
    );
    backend.add_risk(&payload).await
}

/// Apply a submit outcome to the form, store and banner.
///
/// On success the record is appended and the draft reset; on failure the
/// draft is left as-is so the user can retry. Returns the token of the
/// banner timer to arm.
pub fn apply_outcome(
    outcome: Result<RiskRecord, RiskError>,
    draft: &mut RiskDraft,
    store: &mut RiskStore,
    banner: &mut BannerState,
) -> TimerToken {
    match outcome {
        Ok(record) => {
            store.append(record);
            draft.reset();
            banner.success(SUBMIT_SUCCESS)
        }
        Err(e) => {
            log::warn!("{}", e);
            banner.error(e.message())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::load_risks;
    use crate::banner::{Banner, BannerKind};
    use crate::level::RiskLevel;
    use crate::record::{NewRisk, RiskId};
    use std::cell::{Cell, RefCell};

    /// In-memory backend that records what it was sent.
    #[derive(Default)]
    struct FakeBackend {
        listing: Vec<RiskRecord>,
        sent: RefCell<Vec<NewRisk>>,
        fail_with: Option<RiskError>,
        next_id: Cell<i64>,
    }

    impl RiskBackend for FakeBackend {
        async fn fetch_risks(&self) -> Result<Vec<RiskRecord>, RiskError> {
            match &self.fail_with {
                Some(_) => Err(RiskError::Fetch("connection refused".to_string())),
                None => Ok(self.listing.clone()),
            }
        }

        async fn add_risk(&self, risk: &NewRisk) -> Result<RiskRecord, RiskError> {
            self.sent.borrow_mut().push(risk.clone());
            if let Some(e) = &self.fail_with {
                return Err(e.clone());
            }
            let id = self.next_id.get() + 1;
            self.next_id.set(id);
            Ok(RiskRecord::new(
                RiskId::Number(id),
                &risk.asset,
                &risk.threat,
                risk.likelihood,
                risk.impact,
            ))
        }
    }

    #[tokio::test]
    async fn test_missing_fields_never_hit_backend() {
        let backend = FakeBackend::default();
        let mut draft = RiskDraft::new("", "SQLi", 4, 5);
        let mut store = RiskStore::new();
        let mut banner = BannerState::default();

        let outcome = submit_risk(&backend, &draft).await;
        assert!(matches!(outcome, Err(RiskError::Validation(_))));
        apply_outcome(outcome, &mut draft, &mut store, &mut banner);

        assert!(backend.sent.borrow().is_empty());
        assert!(store.is_empty());
        assert_eq!(
            banner.current(),
            &Banner::Showing {
                kind: BannerKind::Error,
                message: "Both Asset and Threat are required".to_string()
            }
        );
    }

    #[tokio::test]
    async fn test_successful_submit_appends_one_record() {
        let backend = FakeBackend::default();
        let mut draft = RiskDraft::new("DB", "SQLi", 4, 5);
        let mut store = RiskStore::new();
        let mut banner = BannerState::default();

        // Preview is available before any request completes
        assert_eq!(draft.preview().score, 20);
        assert_eq!(draft.preview().level, Some(RiskLevel::Critical));

        let outcome = submit_risk(&backend, &draft).await;
        apply_outcome(outcome, &mut draft, &mut store, &mut banner);

        assert_eq!(store.len(), 1);
        assert_eq!(store.records()[0].score, 20);
        assert_eq!(store.records()[0].id, RiskId::Number(1));
        assert_eq!(backend.sent.borrow()[0].level, Some(RiskLevel::Critical));
        assert_eq!(draft, RiskDraft::default());
        assert!(matches!(
            banner.current(),
            Banner::Showing { kind: BannerKind::Success, .. }
        ));
    }

    #[tokio::test]
    async fn test_failed_submit_preserves_draft() {
        let backend = FakeBackend {
            fail_with: Some(RiskError::Submission("Duplicate asset".to_string())),
            ..FakeBackend::default()
        };
        let mut draft = RiskDraft::new("DB", "SQLi", 4, 5);
        let before = draft.clone();
        let mut store = RiskStore::new();
        let mut banner = BannerState::default();

        let outcome = submit_risk(&backend, &draft).await;
        apply_outcome(outcome, &mut draft, &mut store, &mut banner);

        assert_eq!(draft, before);
        assert!(store.is_empty());
        assert_eq!(
            banner.current(),
            &Banner::Showing {
                kind: BannerKind::Error,
                message: "Duplicate asset".to_string()
            }
        );
    }

    #[tokio::test]
    async fn test_load_failure_leaves_store_empty() {
        let backend = FakeBackend {
            fail_with: Some(RiskError::Fetch("down".to_string())),
            ..FakeBackend::default()
        };
        assert!(load_risks(&backend).await.is_empty());
    }

    #[tokio::test]
    async fn test_load_returns_listing_in_order() {
        let backend = FakeBackend {
            listing: vec![
                RiskRecord::new(RiskId::Number(3), "A", "T", 1, 1),
                RiskRecord::new(RiskId::Number(1), "B", "T", 5, 5),
            ],
            ..FakeBackend::default()
        };
        let records = load_risks(&backend).await;
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].id, RiskId::Number(3));
    }
}
