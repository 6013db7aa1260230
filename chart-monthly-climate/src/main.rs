//! Monthly UK Climate by Region and Year
//!
//! Displays a multi-series line chart of monthly climate values (max/min/mean
//! temperature, rainfall, rain days, sunshine, air frost) for one region and
//! one year. The user picks the year and region from dropdowns and toggles
//! datasets with checkboxes.
//!
//! Data flow:
//! 1. Any change to the selection issues one request to the climate API
//!    (`use_climate_sync`).
//! 2. The returned records are grouped by dataset and pivoted into twelve
//!    month rows, then stored in `AppState::chart`.
//! 3. Whenever the rows or the window width change, the chart is redrawn
//!    through `renderMonthlyLineChart`.

use dioxus::prelude::*;
use ukc_chart_ui::components::{
    ChartContainer, ChartHeader, DatasetToggles, RegionSelector, YearSelector,
};
use ukc_chart_ui::hooks::{use_climate_sync, use_window_width};
use ukc_chart_ui::js_bridge::{self, MonthlyChartConfig};
use ukc_chart_ui::state::AppState;
use ukc_climate::chart::{chart_width, CHART_HEIGHT};

/// Chart container DOM element ID used by D3.js to render into.
const CHART_ID: &str = "monthly-climate-chart";

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("monthly-climate-root"))
        .launch(App);
}

#[component]
fn App() -> Element {
    let state = use_context_provider(AppState::new);
    let window_width = use_window_width();

    use_hook(|| {
        log::info!(
            "Climate API: {}",
            state.api.peek().config().climate_list_url()
        );
        js_bridge::init_charts();
    });

    use_climate_sync(state);

    // Re-render chart whenever data or window size changes
    use_effect(move || {
        let data = state.chart.read().clone();
        let width = chart_width(window_width());

        if data.is_empty() {
            js_bridge::destroy_chart(CHART_ID);
            return;
        }

        let selection = state.selection.peek().clone();
        let data_json = match serde_json::to_string(&data.rows) {
            Ok(json) => json,
            Err(e) => {
                log::error!("Failed to serialize chart rows: {}", e);
                return;
            }
        };
        let config = MonthlyChartConfig {
            title: format!("{} {}", selection.region.label(), selection.year),
            width,
            height: CHART_HEIGHT,
            series: &data.series,
        };
        let config_json = match serde_json::to_string(&config) {
            Ok(json) => json,
            Err(e) => {
                log::error!("Failed to serialize chart config: {}", e);
                return;
            }
        };

        js_bridge::render_monthly_chart(CHART_ID, &data_json, &config_json);
    });

    let selection = state.selection.read().clone();
    let width = chart_width(window_width());

    rsx! {
        div {
            style: "padding: 16px; font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;",

            ChartHeader {
                title: "Monthly UK Climate".to_string(),
                subtitle: format!("{} - {}", selection.region.label(), selection.year),
            }

            div {
                style: "display: flex; flex-wrap: wrap; gap: 12px; align-items: flex-end; margin-bottom: 8px;",
                YearSelector {}
                RegionSelector {}
            }
            DatasetToggles {}

            ChartContainer {
                id: CHART_ID.to_string(),
                loading: (state.loading)(),
                width,
                height: CHART_HEIGHT,
            }
        }
    }
}
