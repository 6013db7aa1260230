//! Reshape of API records into month-major chart rows.
//!
//! The API returns one record per dataset with a column per month. The line
//! chart wants the transpose: one row per month with a field per dataset.
//!
//! ```text
//! dataset  jan  feb ...          month  tmax  rainfall
//! tmax     7.6  9.8       ==>    jan    7.6   120.5
//! rainfall 120  88               feb    9.8   88.0
//! ```

use crate::dataset::Dataset;
use crate::month::Month;
use crate::record::ClimateRecord;
use log::warn;
use serde::Serialize;
use std::collections::BTreeMap;

/// Line colours, assigned by position in the selection.
pub const LINE_COLORS: [&str; 7] = [
    "#ff7300", "#387908", "#0070ff", "#a83279", "#32a89e", "#ffbf00", "#8884d8",
];

/// Fixed chart height in pixels.
pub const CHART_HEIGHT: u32 = 450;
/// Share of the window width the chart occupies.
pub const CHART_WIDTH_RATIO: f64 = 0.8;
/// Narrowest chart drawn, whatever the window size.
pub const MIN_CHART_WIDTH: u32 = 320;

/// Twelve month values of one dataset, indexed by [`Month::index`].
pub type MonthValues = [f64; 12];

/// One x-axis position: a month and the value of each drawn dataset.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartRow {
    pub month: Month,
    #[serde(flatten)]
    pub values: BTreeMap<Dataset, f64>,
}

impl ChartRow {
    pub fn value(&self, dataset: Dataset) -> Option<f64> {
        self.values.get(&dataset).copied()
    }
}

/// A drawn line.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Series {
    pub key: Dataset,
    pub label: &'static str,
    pub unit: &'static str,
    pub color: &'static str,
}

/// Everything the chart needs to draw a selection.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ChartData {
    pub series: Vec<Series>,
    pub rows: Vec<ChartRow>,
}

impl ChartData {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Group records by dataset, replacing missing or non-numeric months with 0.
///
/// Records with an unknown dataset tag are skipped. If a dataset occurs more
/// than once the later record wins.
pub fn group_by_dataset(records: &[ClimateRecord]) -> BTreeMap<Dataset, MonthValues> {
    let mut grouped = BTreeMap::new();
    for record in records {
        let dataset = match record.dataset.parse::<Dataset>() {
            Ok(d) => d,
            Err(e) => {
                warn!("Skipping record: {}", e);
                continue;
            }
        };
        let mut values = [0.0; 12];
        for month in Month::ALL {
            values[month.index()] = record.month_value(month).unwrap_or(0.0);
        }
        grouped.insert(dataset, values);
    }
    grouped
}

/// Pivot grouped values into twelve rows in calendar order.
///
/// A selected dataset missing from `grouped` contributes no value, leaving a
/// gap in its line.
pub fn pivot_rows(grouped: &BTreeMap<Dataset, MonthValues>, selected: &[Dataset]) -> Vec<ChartRow> {
    Month::ALL
        .iter()
        .map(|&month| {
            let values = selected
                .iter()
                .filter_map(|ds| grouped.get(ds).map(|v| (*ds, v[month.index()])))
                .collect();
            ChartRow { month, values }
        })
        .collect()
}

/// Series descriptors for the selected datasets, coloured by position.
pub fn series_for(selected: &[Dataset]) -> Vec<Series> {
    selected
        .iter()
        .enumerate()
        .map(|(i, ds)| Series {
            key: *ds,
            label: ds.label(),
            unit: ds.unit(),
            color: LINE_COLORS[i % LINE_COLORS.len()],
        })
        .collect()
}

/// Build chart data for `selected` from a list response.
pub fn build_chart_data(records: &[ClimateRecord], selected: &[Dataset]) -> ChartData {
    let grouped = group_by_dataset(records);
    ChartData {
        series: series_for(selected),
        rows: pivot_rows(&grouped, selected),
    }
}

/// Chart width for a window of `window_width` CSS pixels.
///
/// 80% of the window, floored to whole pixels and never below
/// [`MIN_CHART_WIDTH`], rather than the bare fractional 80%. Unknown widths
/// (0, NaN) get the minimum.
pub fn chart_width(window_width: f64) -> u32 {
    if !window_width.is_finite() || window_width <= 0.0 {
        return MIN_CHART_WIDTH;
    }
    ((window_width * CHART_WIDTH_RATIO).floor() as u32).max(MIN_CHART_WIDTH)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::ClimateListResponse;

    fn records() -> Vec<ClimateRecord> {
        let body = r#"{"results": [
            {"dataset": "tmax", "jan": 7.6, "feb": 9.8, "mar": 11.1, "apr": 13.0,
             "may": 17.3, "jun": 18.5, "jul": 20.2, "aug": 20.9, "sep": 17.8,
             "oct": 14.3, "nov": 10.0, "dec": 8.4},
            {"dataset": "rainfall", "jan": 120.5, "feb": "bad", "mar": null},
            {"dataset": "snow_depth", "jan": 3.0}
        ]}"#;
        ClimateListResponse::from_json(body).unwrap().results
    }

    #[test]
    fn test_twelve_rows_in_calendar_order() {
        let data = build_chart_data(&records(), &Dataset::ALL);
        assert_eq!(data.rows.len(), 12);
        let months: Vec<Month> = data.rows.iter().map(|r| r.month).collect();
        assert_eq!(months, Month::ALL.to_vec());
    }

    #[test]
    fn test_missing_and_non_numeric_become_zero() {
        let data = build_chart_data(&records(), &[Dataset::Rainfall]);
        assert_eq!(data.rows[0].value(Dataset::Rainfall), Some(120.5));
        assert_eq!(data.rows[1].value(Dataset::Rainfall), Some(0.0));
        assert_eq!(data.rows[2].value(Dataset::Rainfall), Some(0.0));
        assert_eq!(data.rows[11].value(Dataset::Rainfall), Some(0.0));
    }

    #[test]
    fn test_unselected_and_absent_datasets_have_no_value() {
        let data = build_chart_data(&records(), &[Dataset::Tmax, Dataset::Sunshine]);
        for row in &data.rows {
            assert!(row.value(Dataset::Rainfall).is_none());
            assert!(row.value(Dataset::Sunshine).is_none());
        }
        assert_eq!(data.rows[7].value(Dataset::Tmax), Some(20.9));
    }

    #[test]
    fn test_unknown_dataset_is_skipped() {
        let grouped = group_by_dataset(&records());
        assert_eq!(grouped.len(), 2);
        assert!(grouped.contains_key(&Dataset::Tmax));
        assert!(grouped.contains_key(&Dataset::Rainfall));
    }

    #[test]
    fn test_later_duplicate_wins() {
        let body = r#"{"results": [
            {"dataset": "tmin", "jan": 1.0},
            {"dataset": "tmin", "jan": 2.0}
        ]}"#;
        let records = ClimateListResponse::from_json(body).unwrap().results;
        let grouped = group_by_dataset(&records);
        assert_eq!(grouped[&Dataset::Tmin][0], 2.0);
    }

    #[test]
    fn test_toggle_only_affects_that_series() {
        let all = build_chart_data(&records(), &[Dataset::Tmax, Dataset::Rainfall]);
        let tmax_only = build_chart_data(&records(), &[Dataset::Tmax]);
        for (a, b) in all.rows.iter().zip(tmax_only.rows.iter()) {
            assert_eq!(a.value(Dataset::Tmax), b.value(Dataset::Tmax));
            assert!(b.value(Dataset::Rainfall).is_none());
        }
        assert_eq!(all.series.len(), 2);
        assert_eq!(tmax_only.series.len(), 1);
    }

    #[test]
    fn test_series_colours_follow_selection_order() {
        let series = series_for(&[Dataset::Sunshine, Dataset::Tmax]);
        assert_eq!(series[0].key, Dataset::Sunshine);
        assert_eq!(series[0].color, "#ff7300");
        assert_eq!(series[1].color, "#387908");
    }

    #[test]
    fn test_row_serializes_flat() {
        let data = build_chart_data(&records(), &[Dataset::Tmax, Dataset::Rainfall]);
        let json = serde_json::to_value(&data.rows[0]).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"month": "jan", "tmax": 7.6, "rainfall": 120.5})
        );
    }

    #[test]
    fn test_empty_selection_still_yields_twelve_rows() {
        let data = build_chart_data(&records(), &[]);
        assert_eq!(data.rows.len(), 12);
        assert!(data.rows.iter().all(|r| r.values.is_empty()));
        assert!(data.series.is_empty());
    }

    #[test]
    fn test_chart_width() {
        assert_eq!(chart_width(1000.0), 800);
        assert_eq!(chart_width(1280.5), 1024);
        assert_eq!(chart_width(200.0), MIN_CHART_WIDTH);
        assert_eq!(chart_width(f64::NAN), MIN_CHART_WIDTH);
    }
}
