//! `reqwest` client for the risk register API.
//!
//! Works natively and on `wasm32-unknown-unknown` (where `reqwest` goes
//! through the browser's `fetch`).

use crate::backend::RiskBackend;
use crate::config::BackendConfig;
use crate::error::{submission_error, RiskError, GENERIC_SERVER_ERROR};
use crate::record::{parse_listing, CreatedRisk, NewRisk, RiskRecord};
use log::{info, warn};
use reqwest::Client;

#[derive(Debug, Clone)]
pub struct RiskApi {
    client: Client,
    config: BackendConfig,
}

impl RiskApi {
    pub fn new(config: BackendConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    pub fn from_env() -> Self {
        Self::new(BackendConfig::from_env())
    }

    pub fn config(&self) -> &BackendConfig {
        &self.config
    }
}

impl RiskBackend for RiskApi {
    async fn fetch_risks(&self) -> Result<Vec<RiskRecord>, RiskError> {
        let url = self.config.risks_url();
        let response = match self.client.get(&url).send().await {
            Ok(r) => r,
            Err(e) => {
                warn!("Request to {} failed: {}", url, e);
                return Err(RiskError::Fetch(e.to_string()));
            }
        };

        if !response.status().is_success() {
            warn!("Bad response status from {}: {}", url, response.status());
            return Err(RiskError::Fetch(format!("HTTP {}", response.status())));
        }

        let body = response
            .text()
            .await
            .map_err(|e| RiskError::Fetch(format!("Failed to read risk listing: {}", e)))?;
        let records = parse_listing(&body)
            .map_err(|e| RiskError::Fetch(format!("Failed to parse risk listing: {}", e)))?;
        info!("Fetched {} risks from {}", records.len(), url);
        Ok(records)
    }

    async fn add_risk(&self, risk: &NewRisk) -> Result<RiskRecord, RiskError> {
        let url = self.config.add_risk_url();
        let response = match self.client.post(&url).json(risk).send().await {
            Ok(r) => r,
            Err(e) => {
                warn!("Request to {} failed: {}", url, e);
                return Err(RiskError::Submission(GENERIC_SERVER_ERROR.to_string()));
            }
        };

        let status = response.status();
        let body = match response.text().await {
            Ok(b) => b,
            Err(e) => {
                warn!("Failed to read response body from {}: {}", url, e);
                return Err(RiskError::Submission(GENERIC_SERVER_ERROR.to_string()));
            }
        };

        if !status.is_success() {
            warn!("Bad response status from {}: {}", url, status);
            return Err(submission_error(&body));
        }

        let created: CreatedRisk = serde_json::from_str(&body).map_err(|e| {
            warn!("Unexpected create response from {}: {}", url, e);
            RiskError::Submission(GENERIC_SERVER_ERROR.to_string())
        })?;
        Ok(created.into_record(risk))
    }
}
