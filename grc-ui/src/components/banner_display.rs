//! Transient form banner.

use crate::state::AppState;
use dioxus::prelude::*;
use grc_core::banner::{Banner, BannerKind};

/// Shows the current banner, if any. Dismissal is driven by the timer armed
/// in `AppState::arm_banner`.
#[component]
pub fn BannerDisplay() -> Element {
    let state = use_context::<AppState>();
    let banner = state.banner.read().current().clone();

    match banner {
        Banner::Idle => rsx! {},
        Banner::Showing { kind, message } => {
            let style = match kind {
                BannerKind::Error => "background: #FFEBEE; color: #C62828; border: 1px solid #EF9A9A;",
                BannerKind::Success => "background: #E8F5E9; color: #2E7D32; border: 1px solid #A5D6A7;",
            };
            rsx! {
                div {
                    style: "padding: 12px 16px; margin: 8px; text-align: center; border-radius: 4px; {style}",
                    "{message}"
                }
            }
        }
    }
}
