//! Backend location.

/// Environment variable naming the backend base URL.
pub const BACKEND_ENV: &str = "GRC_BACKEND";

/// Used when no base URL is configured.
pub const DEFAULT_BACKEND: &str = "http://localhost:5000";

/// Base URL of the risk register API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackendConfig {
    base: String,
}

impl BackendConfig {
    pub fn new(base: &str) -> Self {
        Self {
            base: base.trim().trim_end_matches('/').to_string(),
        }
    }

    /// Resolve the base URL.
    ///
    /// The runtime environment is checked first (native builds); WASM builds
    /// have no process environment, so the value captured at compile time
    /// comes next, then the local default.
    pub fn from_env() -> Self {
        let runtime = std::env::var(BACKEND_ENV).ok();
        Self::resolve(runtime.as_deref(), option_env!("GRC_BACKEND"))
    }

    fn resolve(runtime: Option<&str>, compiled: Option<&str>) -> Self {
        let base = [runtime, compiled]
            .into_iter()
            .flatten()
            .find(|s| !s.trim().is_empty())
            .unwrap_or(DEFAULT_BACKEND);
        log::info!("Using risk register backend at {}", base);
        Self::new(base)
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    /// `GET` endpoint listing all risks.
    pub fn risks_url(&self) -> String {
        format!("{}/risks", self.base)
    }

    /// `POST` endpoint creating a risk.
    pub fn add_risk_url(&self) -> String {
        format!("{}/add-risk", self.base)
    }
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BACKEND)
    }
}
