//! Shared Dioxus components and JS bridge for the GRC risk register.
//!
//! This crate provides:
//! - `js_bridge`: CSV download and timers via `js_sys` / `web_sys`
//! - `state`: Reactive AppState with Dioxus Signals
//! - `components`: RSX components for the entry form and the dashboard

pub mod js_bridge;
pub mod state;
pub mod components;
