//! Reusable Dioxus RSX components for the climate dashboard.

mod chart_container;
mod chart_header;
mod dataset_toggles;
mod region_selector;
mod year_selector;

pub use chart_container::ChartContainer;
pub use chart_header::ChartHeader;
pub use dataset_toggles::DatasetToggles;
pub use region_selector::RegionSelector;
pub use year_selector::YearSelector;
