//! Entry form state.

use crate::error::RiskError;
use crate::record::NewRisk;
use crate::score::{classify, Classification};

/// Slider bounds for likelihood and impact.
pub const MIN_RATING: i32 = 0;
pub const MAX_RATING: i32 = 5;

pub const MISSING_FIELDS: &str = "Both Asset and Threat are required";

/// The entry form's fields. Sliders are kept inside [`MIN_RATING`, `MAX_RATING`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RiskDraft {
    pub asset: String,
    pub threat: String,
    likelihood: i32,
    impact: i32,
}

impl Default for RiskDraft {
    fn default() -> Self {
        Self {
            asset: String::new(),
            threat: String::new(),
            likelihood: MIN_RATING,
            impact: MIN_RATING,
        }
    }
}

impl RiskDraft {
    pub fn new(asset: &str, threat: &str, likelihood: i32, impact: i32) -> Self {
        let mut draft = Self {
            asset: asset.to_string(),
            threat: threat.to_string(),
            ..Self::default()
        };
        draft.set_likelihood(likelihood);
        draft.set_impact(impact);
        draft
    }

    pub fn likelihood(&self) -> i32 {
        self.likelihood
    }

    pub fn impact(&self) -> i32 {
        self.impact
    }

    pub fn set_likelihood(&mut self, value: i32) {
        self.likelihood = value.clamp(MIN_RATING, MAX_RATING);
    }

    pub fn set_impact(&mut self, value: i32) {
        self.impact = value.clamp(MIN_RATING, MAX_RATING);
    }

    /// Live preview of the current sliders.
    pub fn preview(&self) -> Classification {
        classify(self.likelihood, self.impact)
    }

    /// Check required fields and build the creation payload.
    pub fn validate(&self) -> Result<NewRisk, RiskError> {
        let asset = self.asset.trim();
        let threat = self.threat.trim();
        if asset.is_empty() || threat.is_empty() {
            return Err(RiskError::Validation(MISSING_FIELDS.to_string()));
        }
        Ok(NewRisk::new(asset, threat, self.likelihood, self.impact))
    }

    /// Clear the text fields and drop the sliders back to their minimum.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
