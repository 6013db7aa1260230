//! Checkbox group for the datasets drawn on the chart.

use crate::state::AppState;
use dioxus::prelude::*;
use ukc_climate::dataset::Dataset;

/// One checkbox per dataset. Toggling adds or removes that series only.
#[component]
pub fn DatasetToggles() -> Element {
    let state = use_context::<AppState>();
    let selection = state.selection.read().clone();

    rsx! {
        div {
            style: "margin: 8px 0; display: flex; flex-wrap: wrap; gap: 12px;",
            for dataset in Dataset::ALL {
                label {
                    key: "{dataset.code()}",
                    title: "{dataset.label()} ({dataset.unit()})",
                    input {
                        r#type: "checkbox",
                        checked: selection.is_selected(dataset),
                        onchange: move |_| {
                            let mut selection = state.selection;
                            selection.write().toggle_dataset(dataset);
                        },
                    }
                    "{dataset.code()}"
                }
            }
        }
    }
}
