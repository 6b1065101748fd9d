use std::fmt;

/// Generic message used when a failed submission carries no payload.
pub const GENERIC_SERVER_ERROR: &str = "Server error";

/// Failures of the risk register's user-facing operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RiskError {
    /// A required form field is missing. Never reaches the network.
    Validation(String),
    /// The create request failed (transport error or non-2xx response).
    Submission(String),
    /// The initial load of the register failed.
    Fetch(String),
}

impl RiskError {
    /// Text shown in the banner.
    pub fn message(&self) -> &str {
        match self {
            RiskError::Validation(m) | RiskError::Submission(m) | RiskError::Fetch(m) => m,
        }
    }
}

impl fmt::Display for RiskError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RiskError::Validation(m) => write!(f, "Validation error: {}", m),
            RiskError::Submission(m) => write!(f, "Submission error: {}", m),
            RiskError::Fetch(m) => write!(f, "Fetch error: {}", m),
        }
    }
}

impl std::error::Error for RiskError {}

/// Pull the `message` field out of an error response body, if there is one.
pub fn server_message(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    value
        .get("message")
        .and_then(|m| m.as_str())
        .map(str::trim)
        .filter(|m| !m.is_empty())
        .map(str::to_string)
}

/// Build a `Submission` error from a failed response body.
pub fn submission_error(body: &str) -> RiskError {
    RiskError::Submission(server_message(body).unwrap_or_else(|| GENERIC_SERVER_ERROR.to_string()))
}
