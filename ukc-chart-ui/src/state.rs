//! Application state managed via Dioxus context.
//!
//! `AppState` bundles all reactive signals into a single struct provided via
//! `use_context_provider`. Child components retrieve it with `use_context::<AppState>()`.

use dioxus::prelude::*;
use ukc_climate::chart::ChartData;
use ukc_climate::client::ClimateApi;
use ukc_climate::selection::Selection;
use ukc_climate::sequencer::RequestSequencer;

/// Shared application state for the climate dashboard.
#[derive(Clone, Copy)]
pub struct AppState {
    /// Year, region and selected datasets
    pub selection: Signal<Selection>,
    /// Pivoted rows of the most recent successful fetch
    pub chart: Signal<ChartData>,
    /// Whether a fetch is in flight
    pub loading: Signal<bool>,
    /// Tickets for overlapping fetches
    pub requests: Signal<RequestSequencer>,
    /// API client
    pub api: Signal<ClimateApi>,
}

impl AppState {
    /// Create a new AppState with default signal values.
    pub fn new() -> Self {
        Self::with_api(ClimateApi::default())
    }

    pub fn with_api(api: ClimateApi) -> Self {
        Self {
            selection: Signal::new(Selection::default()),
            chart: Signal::new(ChartData::default()),
            loading: Signal::new(false),
            requests: Signal::new(RequestSequencer::new()),
            api: Signal::new(api),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
