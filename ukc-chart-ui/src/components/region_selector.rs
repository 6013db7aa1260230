//! Dropdown selector for choosing a region.

use crate::state::AppState;
use dioxus::prelude::*;
use ukc_climate::region::Region;

/// Region dropdown selector.
/// Updates the selection's region on change.
#[component]
pub fn RegionSelector() -> Element {
    let mut state = use_context::<AppState>();
    let selected = state.selection.read().region;

    let on_change = move |evt: Event<FormData>| match evt.value().parse::<Region>() {
        Ok(region) => state.selection.write().set_region(region),
        Err(e) => log::warn!("Ignoring region selection: {}", e),
    };

    rsx! {
        div {
            style: "margin: 8px 0;",
            label {
                r#for: "region-select",
                style: "font-weight: bold; margin-right: 8px;",
                "Region: "
            }
            select {
                id: "region-select",
                onchange: on_change,
                for region in Region::ALL {
                    option {
                        key: "{region.code()}",
                        value: "{region.code()}",
                        selected: region == selected,
                        "{region.label()}"
                    }
                }
            }
        }
    }
}
