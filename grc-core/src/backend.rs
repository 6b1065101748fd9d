//! Seam between the views and the remote risk register API.

use crate::error::RiskError;
use crate::record::{NewRisk, RiskRecord};

/// The two operations the register needs from its backend.
///
/// Futures are not `Send`: the browser runtime is single-threaded.
#[allow(async_fn_in_trait)]
pub trait RiskBackend {
    /// `GET {base}/risks`.
    async fn fetch_risks(&self) -> Result<Vec<RiskRecord>, RiskError>;

    /// `POST {base}/add-risk`. Returns the record as the server stored it.
    async fn add_risk(&self, risk: &NewRisk) -> Result<RiskRecord, RiskError>;
}

/// Load the initial listing. Failures are logged and yield an empty list.
pub async fn load_risks<B: RiskBackend>(backend: &B) -> Vec<RiskRecord> {
    match backend.fetch_risks().await {
        Ok(records) => records,
        Err(e) => {
            log::error!("Failed to load risks: {}", e);
            Vec::new()
        }
    }
}
