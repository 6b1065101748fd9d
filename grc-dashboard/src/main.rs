//! GRC Risk Assessment Dashboard
//!
//! Single page with two regions: the risk entry form and the dashboard
//! (summary, filterable/sortable table with CSV export, heatmap).
//!
//! Data flow:
//! 1. The backend base URL is resolved once (`GRC_BACKEND`, captured at
//!    build time for the WASM target) and the client is provided as context.
//! 2. On mount, `GET {base}/risks` seeds the store. A failed load is logged
//!    and leaves the register empty.
//! 3. Each successful submit appends the server's record to the store.
//! 4. The dashboard components re-derive everything from the store on render.

use dioxus::prelude::*;
use grc_core::api::RiskApi;
use grc_core::backend::load_risks;
use grc_ui::components::{
    BannerDisplay, HeatmapGrid, LoadingSpinner, Navbar, RiskForm, RiskTable, SummaryCards,
};
use grc_ui::state::AppState;

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("grc-dashboard-root"))
        .launch(App);
}

#[component]
fn App() -> Element {
    let mut state = use_context_provider(AppState::new);
    let api = use_context_provider(RiskApi::from_env);

    // Seed the store once on mount
    use_effect(move || {
        let api = api.clone();
        spawn(async move {
            let records = load_risks(&api).await;
            log::info!("Loaded {} risks", records.len());
            state.store.write().seed(records);
            state.loading.set(false);
        });
    });

    rsx! {
        div {
            style: "font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;",

            Navbar {
                title: "GRC Risk Assessment Dashboard".to_string(),
                subtitle: "Enterprise Governance, Risk & Compliance".to_string(),
            }

            BannerDisplay {}
            RiskForm {}

            div {
                style: "max-width: 1100px; margin: 0 auto 40px auto; padding: 0 16px;",
                if (state.loading)() {
                    LoadingSpinner {}
                } else {
                    SummaryCards {}
                    RiskTable {}
                    HeatmapGrid {}
                }
            }
        }
    }
}
