//! Risk entry form with live score preview.

use crate::state::AppState;
use dioxus::prelude::*;
use grc_core::api::RiskApi;
use grc_core::draft::{MAX_RATING, MIN_RATING};
use grc_core::submit::{apply_outcome, submit_risk};

/// Asset/threat inputs, likelihood/impact sliders and the preview badges.
///
/// Submitting validates locally, posts to the backend and appends the
/// returned record to the store. Overlapping submissions are not blocked;
/// each appends its own result when it completes.
#[component]
pub fn RiskForm() -> Element {
    let mut state = use_context::<AppState>();
    let api = use_context::<RiskApi>();

    let draft = state.draft.read().clone();
    let preview = draft.preview();
    let color = preview.color();
    let label = preview.label();
    let hint = preview.hint;
    let likelihood = draft.likelihood();
    let impact = draft.impact();

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let draft = state.draft.read().clone();
        let api = api.clone();
        spawn(async move {
            let outcome = submit_risk(&api, &draft).await;
            let token = apply_outcome(
                outcome,
                &mut state.draft.write(),
                &mut state.store.write(),
                &mut state.banner.write(),
            );
            state.arm_banner(token);
        });
    };

    let input_style = "width: 100%; padding: 6px 10px; border: 1px solid #ced4da; border-radius: 4px; box-sizing: border-box;";
    let badge_style = format!(
        "display: inline-block; background-color: {color}; border: 2px solid {color}; font-weight: 600;"
    );

    rsx! {
        div {
            style: "max-width: 900px; margin: 0 auto 40px auto; padding: 24px; border: 1px solid #dee2e6; border-radius: 6px; box-shadow: 0 1px 3px rgba(0,0,0,0.1);",
            form {
                onsubmit: on_submit,
                style: "display: grid; grid-template-columns: 1fr 1fr; gap: 16px;",

                div {
                    label { style: "display: block; margin-bottom: 4px;", "Asset" }
                    input {
                        r#type: "text",
                        style: "{input_style}",
                        value: "{draft.asset}",
                        oninput: move |evt: Event<FormData>| {
                            state.draft.write().asset = evt.value();
                        },
                    }
                }

                div {
                    label { style: "display: block; margin-bottom: 4px;", "Threat" }
                    input {
                        r#type: "text",
                        style: "{input_style}",
                        value: "{draft.threat}",
                        oninput: move |evt: Event<FormData>| {
                            state.draft.write().threat = evt.value();
                        },
                    }
                }

                div {
                    label { style: "display: block; margin-bottom: 4px;", "Likelihood: {likelihood}" }
                    input {
                        r#type: "range",
                        style: "width: 100%;",
                        min: "{MIN_RATING}",
                        max: "{MAX_RATING}",
                        value: "{likelihood}",
                        oninput: move |evt: Event<FormData>| {
                            if let Ok(value) = evt.value().parse::<i32>() {
                                state.draft.write().set_likelihood(value);
                            }
                        },
                    }
                }

                div {
                    label { style: "display: block; margin-bottom: 4px;", "Impact: {impact}" }
                    input {
                        r#type: "range",
                        style: "width: 100%;",
                        min: "{MIN_RATING}",
                        max: "{MAX_RATING}",
                        value: "{impact}",
                        oninput: move |evt: Event<FormData>| {
                            if let Ok(value) = evt.value().parse::<i32>() {
                                state.draft.write().set_impact(value);
                            }
                        },
                    }
                }

                div {
                    style: "grid-column: 1 / span 2; text-align: center; margin-top: 24px;",
                    button {
                        r#type: "submit",
                        style: "padding: 8px 24px; background: #0d6efd; color: white; border: none; border-radius: 4px; cursor: pointer;",
                        "+ Add Risk"
                    }
                }

                div {
                    style: "grid-column: 1 / span 2; text-align: center;",
                    span {
                        style: "{badge_style} padding: 10px 20px; border-radius: 10px;",
                        "Risk Preview: {preview.score} ({label})"
                    }
                }

                div {
                    style: "grid-column: 1 / span 2; text-align: center;",
                    span {
                        style: "{badge_style} padding: 8px 15px; border-radius: 8px; font-size: 0.9rem;",
                        "Hint: {hint}"
                    }
                }
            }
        }
    }
}
