//! Likelihood × impact heatmap.

use crate::state::AppState;
use dioxus::prelude::*;
use grc_view::heatmap::{Heatmap, GRID_SIZE};

const AXIS_STYLE: &str = "padding: 4px; font-size: 12px; font-weight: bold; text-align: center; color: #555;";

/// 5×5 grid, likelihood on the vertical axis (5 at the top) and impact on
/// the horizontal. Each cell lists the assets that fall in it. Built from
/// the full register, not the filtered table.
#[component]
pub fn HeatmapGrid() -> Element {
    let state = use_context::<AppState>();
    let heatmap = Heatmap::from_records(state.store.read().records());
    let rows: Vec<_> = heatmap
        .display_rows()
        .map(|row| (row[0].likelihood, row))
        .collect();
    let impacts: Vec<usize> = (1..=GRID_SIZE).collect();

    rsx! {
        div {
            style: "margin-top: 32px;",
            h3 { style: "margin: 0 0 8px 0; font-size: 16px;", "Risk Heatmap" }
            table {
                style: "border-collapse: collapse;",
                tbody {
                    for (likelihood, row) in rows.iter() {
                        tr {
                            th { style: AXIS_STYLE, "L{likelihood}" }
                            for cell in row.iter() {
                                td {
                                    title: "Score {cell.score} ({cell.label})",
                                    style: "width: 110px; height: 64px; vertical-align: top; padding: 4px; border: 1px solid #999; font-size: 11px; background: {cell.color};",
                                    div { style: "font-weight: bold;", "{cell.score}" }
                                    for asset in cell.assets.iter() {
                                        div { "{asset}" }
                                    }
                                }
                            }
                        }
                    }
                    tr {
                        th {}
                        for impact in impacts.iter() {
                            th { style: AXIS_STYLE, "I{impact}" }
                        }
                    }
                }
            }
        }
    }
}
