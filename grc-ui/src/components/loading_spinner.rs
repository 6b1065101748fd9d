//! Placeholder for the dashboard region while the initial listing loads.

use dioxus::prelude::*;

/// Shown instead of the summary, table and heatmap until `GET /risks`
/// settles. The entry form above stays usable.
#[component]
pub fn LoadingSpinner() -> Element {
    rsx! {
        div {
            style: "display: flex; justify-content: center; align-items: center; gap: 8px; padding: 40px; color: #666;",
            span { style: "font-size: 20px;", "⏳" }
            "Loading risk register..."
        }
    }
}
