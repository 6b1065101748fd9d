//! Application state managed via Dioxus context.
//!
//! `AppState` bundles all reactive signals into a single struct provided via
//! `use_context_provider`. Child components retrieve it with `use_context::<AppState>()`.

use crate::js_bridge;
use dioxus::core::Task;
use dioxus::prelude::*;
use grc_core::banner::{BannerState, TimerToken, BANNER_MILLIS};
use grc_core::draft::RiskDraft;
use grc_core::store::RiskStore;
use grc_view::DashboardView;

/// Shared application state for the risk register page.
#[derive(Clone, Copy)]
pub struct AppState {
    /// Records for this session (owned by the root view)
    pub store: Signal<RiskStore>,
    /// Whether the initial listing is still loading
    pub loading: Signal<bool>,
    /// Entry form fields
    pub draft: Signal<RiskDraft>,
    /// Form banner
    pub banner: Signal<BannerState>,
    /// Pending dismiss timer for the banner
    pub banner_task: Signal<Option<Task>>,
    /// Dashboard filter and sort
    pub view: Signal<DashboardView>,
}

impl AppState {
    /// Create a new AppState with default signal values.
    pub fn new() -> Self {
        Self {
            store: Signal::new(RiskStore::new()),
            loading: Signal::new(true),
            draft: Signal::new(RiskDraft::default()),
            banner: Signal::new(BannerState::default()),
            banner_task: Signal::new(None),
            view: Signal::new(DashboardView::default()),
        }
    }

    /// Arm the dismiss timer for the banner identified by `token`,
    /// cancelling the timer of whatever banner it replaced.
    pub fn arm_banner(&mut self, token: TimerToken) {
        let previous = self.banner_task.write().take();
        if let Some(task) = previous {
            task.cancel();
        }
        let mut banner = self.banner;
        let task = spawn(async move {
            js_bridge::sleep_ms(BANNER_MILLIS).await;
            banner.write().expire(token);
        });
        self.banner_task.set(Some(task));
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
