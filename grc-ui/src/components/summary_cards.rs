//! Headline figures for the register.

use crate::state::AppState;
use dioxus::prelude::*;
use grc_view::RiskSummary;

/// Totals over the whole register, ignoring the table filter.
#[component]
pub fn SummaryCards() -> Element {
    let state = use_context::<AppState>();
    let summary = RiskSummary::from_records(state.store.read().records());
    let average = summary.average_display();

    rsx! {
        div {
            style: "display: flex; gap: 16px; margin: 16px 0; flex-wrap: wrap;",
            StatCard { label: "Total Risks".to_string(), value: summary.total.to_string() }
            StatCard { label: "High / Critical".to_string(), value: summary.high_risk.to_string() }
            StatCard { label: "Average Score".to_string(), value: average }
        }
    }
}

#[component]
fn StatCard(label: String, value: String) -> Element {
    rsx! {
        div {
            style: "flex: 1; min-width: 160px; padding: 12px 16px; border: 1px solid #E0E0E0; border-radius: 6px; background: #FAFAFA;",
            div { style: "font-size: 12px; color: #666;", "{label}" }
            div { style: "font-size: 24px; font-weight: bold;", "{value}" }
        }
    }
}
