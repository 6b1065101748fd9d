//! Level filter dropdown for the dashboard table.

use crate::state::AppState;
use dioxus::prelude::*;
use grc_view::LevelFilter;

/// Dropdown selector for the table's level filter.
#[component]
pub fn LevelFilterSelector() -> Element {
    let mut state = use_context::<AppState>();
    let current = state.view.read().filter;

    let on_change = move |evt: Event<FormData>| {
        let filter = LevelFilter::from_value(&evt.value());
        state.view.write().set_filter(filter);
    };

    rsx! {
        div {
            style: "margin: 8px 0;",
            label {
                r#for: "level-filter",
                style: "font-weight: bold; margin-right: 8px;",
                "Level: "
            }
            select {
                id: "level-filter",
                onchange: on_change,
                for choice in LevelFilter::OPTIONS {
                    option {
                        value: choice.value(),
                        selected: choice == current,
                        "{choice}"
                    }
                }
            }
        }
    }
}
