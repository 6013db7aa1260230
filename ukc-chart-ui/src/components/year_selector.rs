//! Dropdown selector for the year.

use crate::state::AppState;
use dioxus::prelude::*;
use ukc_climate::year::Year;

/// Year dropdown, 1884 through the latest published year.
#[component]
pub fn YearSelector() -> Element {
    let mut state = use_context::<AppState>();
    let selected = state.selection.read().year;

    let on_change = move |evt: Event<FormData>| match evt.value().parse::<Year>() {
        Ok(year) => state.selection.write().set_year(year),
        Err(e) => log::warn!("Ignoring year selection: {}", e),
    };

    rsx! {
        div {
            style: "margin: 8px 0;",
            label {
                r#for: "year-select",
                style: "font-weight: bold; margin-right: 8px;",
                "Year: "
            }
            select {
                id: "year-select",
                onchange: on_change,
                for year in Year::all() {
                    option {
                        key: "{year}",
                        value: "{year}",
                        selected: year == selected,
                        "{year}"
                    }
                }
            }
        }
    }
}
