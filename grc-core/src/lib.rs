//! Core types and backend plumbing for the GRC risk register.
//!
//! This crate provides:
//! - `level` / `score`: the likelihood × impact scoring scheme
//! - `record`: the `RiskRecord` entity and the creation payload
//! - `draft`: form state with live preview and validation
//! - `banner`: the auto-dismissing banner state machine
//! - `store`: the append-only session store
//! - `backend` / `submit`: the backend seam and the submit workflow
//! - `api` (feature `api`): the `reqwest` client for the remote API

pub mod backend;
pub mod banner;
pub mod config;
pub mod draft;
pub mod error;
pub mod level;
pub mod record;
pub mod score;
pub mod store;
pub mod submit;

#[cfg(feature = "api")]
pub mod api;

pub use error::RiskError;
pub use level::RiskLevel;
pub use record::{NewRisk, RiskId, RiskRecord};
pub use score::{classify, Classification};
