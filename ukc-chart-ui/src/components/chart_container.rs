//! Chart container component with loading state.

use dioxus::prelude::*;

/// Props for ChartContainer
#[derive(Props, Clone, PartialEq)]
pub struct ChartContainerProps {
    /// The DOM id for the chart container (D3 will render into this)
    pub id: String,
    /// Whether a fetch is in flight
    #[props(default = false)]
    pub loading: bool,
    /// Chart width in pixels
    pub width: u32,
    /// Chart height in pixels
    #[props(default = 450)]
    pub height: u32,
}

/// A container div for the D3.js chart. The previous chart stays visible
/// under a small overlay while new data loads.
#[component]
pub fn ChartContainer(props: ChartContainerProps) -> Element {
    let style = format!(
        "width: {}px; min-height: {}px; position: relative; margin: 0 auto;",
        props.width, props.height
    );

    rsx! {
        div {
            class: "chart-container",
            style: "{style}",
            if props.loading {
                div {
                    style: "position: absolute; top: 8px; right: 8px; color: #666; font-size: 12px;",
                    "Loading..."
                }
            }
            div {
                id: "{props.id}",
                style: "width: 100%;",
            }
        }
    }
}
