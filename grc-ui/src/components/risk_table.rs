//! Sortable, filterable risk table with CSV export.

use crate::components::LevelFilterSelector;
use crate::js_bridge;
use crate::state::AppState;
use dioxus::prelude::*;
use grc_core::level::{level_color, level_label};
use grc_view::export::{export_filename_today, to_csv};

const HEADER_STYLE: &str = "position: sticky; top: 0; background: #fff; padding: 6px; border-bottom: 2px solid #dee2e6; text-align: left;";
const CELL_STYLE: &str = "padding: 6px; border-bottom: 1px solid #dee2e6; word-wrap: break-word;";

/// Table of the register as filtered and sorted by the dashboard view.
/// Clicking the score header cycles unsorted / ascending / descending.
#[component]
pub fn RiskTable() -> Element {
    let mut state = use_context::<AppState>();
    let view = *state.view.read();
    let store = state.store.read();
    let rows: Vec<_> = view
        .rows(store.records())
        .into_iter()
        .map(|r| (r, level_label(r.level), level_color(r.level)))
        .collect();
    let count = store.len();
    let indicator = view.sort.indicator();

    let title = if count == 0 {
        "No risk registered".to_string()
    } else {
        count.to_string()
    };

    let on_export = move |_: MouseEvent| {
        let store = state.store.read();
        let view = *state.view.read();
        match to_csv(&view.rows(store.records())) {
            Ok(csv) => js_bridge::download_csv(&export_filename_today(), &csv),
            Err(e) => log::error!("Failed to export risks: {}", e),
        }
    };

    rsx! {
        div {
            style: "margin-top: 24px;",
            h2 { "Risk Registered {title}" }

            div {
                style: "display: flex; justify-content: space-between; align-items: center;",
                LevelFilterSelector {}
                button {
                    style: "padding: 6px 16px; border: 1px solid #198754; color: #198754; background: white; border-radius: 4px; cursor: pointer;",
                    onclick: on_export,
                    "Export CSV"
                }
            }

            div {
                style: "margin-top: 16px; padding: 12px; border: 1px solid black; border-radius: 10px; max-height: 350px; overflow: auto; box-shadow: 2px 8px 15px #1A2CA3;",
                table {
                    style: "width: 100%; table-layout: fixed; border-collapse: collapse;",
                    thead {
                        tr {
                            th { style: HEADER_STYLE, "ID" }
                            th { style: HEADER_STYLE, "ASSET" }
                            th { style: HEADER_STYLE, "THREAT" }
                            th { style: HEADER_STYLE, "LIKELIHOOD" }
                            th { style: HEADER_STYLE, "IMPACT" }
                            th {
                                style: "{HEADER_STYLE} cursor: pointer; user-select: none;",
                                onclick: move |_| state.view.write().toggle_sort(),
                                "SCORE{indicator}"
                            }
                            th { style: HEADER_STYLE, "LEVEL" }
                            th { style: HEADER_STYLE, "HINT" }
                        }
                    }
                    tbody {
                        for (risk, label, color) in rows.iter() {
                            tr {
                                key: "{risk.id}",
                                td { style: CELL_STYLE, "{risk.id}" }
                                td { style: CELL_STYLE, "{risk.asset}" }
                                td { style: CELL_STYLE, "{risk.threat}" }
                                td { style: CELL_STYLE, "{risk.likelihood}" }
                                td { style: CELL_STYLE, "{risk.impact}" }
                                td { style: CELL_STYLE, "{risk.score}" }
                                td { style: "{CELL_STYLE} background: {color};", "{label}" }
                                td { style: CELL_STYLE, "{risk.hint}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
