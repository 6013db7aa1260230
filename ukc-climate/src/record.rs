//! Wire types returned by the climate list endpoint.

use crate::month::Month;
use serde::{Deserialize, Deserializer};

/// Decode a record value leniently: JSON numbers are kept, anything else
/// (null, strings, booleans, nested values) becomes `None`.
fn lenient_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(value.as_f64().filter(|v| v.is_finite()))
}

/// One published series (dataset) for one region and one year.
///
/// Monthly values are optional: the current year is only partially filled
/// and some series start after 1884.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ClimateRecord {
    #[serde(default)]
    pub id: Option<u64>,
    /// Dataset code as sent by the server; see [`crate::dataset::Dataset`].
    pub dataset: String,
    #[serde(default)]
    pub region: Option<String>,
    #[serde(default)]
    pub year: Option<i32>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub jan: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub feb: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub mar: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub apr: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub may: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub jun: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub jul: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub aug: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub sep: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub oct: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub nov: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub dec: Option<f64>,
    /// Winter (Dec-Feb) aggregate.
    #[serde(default, deserialize_with = "lenient_number")]
    pub win: Option<f64>,
    /// Spring (Mar-May) aggregate.
    #[serde(default, deserialize_with = "lenient_number")]
    pub spr: Option<f64>,
    /// Summer (Jun-Aug) aggregate.
    #[serde(default, deserialize_with = "lenient_number")]
    pub sum: Option<f64>,
    /// Autumn (Sep-Nov) aggregate.
    #[serde(default, deserialize_with = "lenient_number")]
    pub aut: Option<f64>,
    /// Annual aggregate.
    #[serde(default, deserialize_with = "lenient_number")]
    pub ann: Option<f64>,
}

impl ClimateRecord {
    /// Value recorded for `month`, if the server sent a number for it.
    pub fn month_value(&self, month: Month) -> Option<f64> {
        match month {
            Month::Jan => self.jan,
            Month::Feb => self.feb,
            Month::Mar => self.mar,
            Month::Apr => self.apr,
            Month::May => self.may,
            Month::Jun => self.jun,
            Month::Jul => self.jul,
            Month::Aug => self.aug,
            Month::Sep => self.sep,
            Month::Oct => self.oct,
            Month::Nov => self.nov,
            Month::Dec => self.dec,
        }
    }
}

/// Paginated envelope of the list endpoint.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ClimateListResponse {
    #[serde(default)]
    pub count: Option<u64>,
    #[serde(default)]
    pub next: Option<String>,
    #[serde(default)]
    pub previous: Option<String>,
    pub results: Vec<ClimateRecord>,
}

impl ClimateListResponse {
    /// Decode a response body.
    pub fn from_json(body: &str) -> crate::Result<Self> {
        Ok(serde_json::from_str(body)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BODY: &str = r#"{
        "count": 2,
        "next": null,
        "previous": null,
        "results": [
            {"id": 1, "dataset": "tmax", "region": "UK", "year": 2024,
             "jan": 7.6, "feb": 9.8, "mar": 11.1, "apr": 13.0, "may": 17.3, "jun": 18.5,
             "jul": 20.2, "aug": 20.9, "sep": 17.8, "oct": 14.3, "nov": 10.0, "dec": 8.4,
             "win": 7.9, "spr": 13.8, "sum": 19.9, "aut": 14.0, "ann": 14.1},
            {"id": 2, "dataset": "rainfall", "region": "UK", "year": 2024,
             "jan": 120.5, "feb": "n/a", "mar": null}
        ]
    }"#;

    #[test]
    fn test_decode_list_response() {
        let response = ClimateListResponse::from_json(BODY).unwrap();
        assert_eq!(response.count, Some(2));
        assert_eq!(response.results.len(), 2);

        let tmax = &response.results[0];
        assert_eq!(tmax.dataset, "tmax");
        assert_eq!(tmax.month_value(Month::Aug), Some(20.9));
        assert_eq!(tmax.sum, Some(19.9));
    }

    #[test]
    fn test_non_numeric_and_missing_values_decode_as_none() {
        let response = ClimateListResponse::from_json(BODY).unwrap();
        let rainfall = &response.results[1];
        assert_eq!(rainfall.month_value(Month::Jan), Some(120.5));
        assert_eq!(rainfall.month_value(Month::Feb), None);
        assert_eq!(rainfall.month_value(Month::Mar), None);
        assert_eq!(rainfall.month_value(Month::Dec), None);
        assert_eq!(rainfall.ann, None);
    }

    #[test]
    fn test_missing_results_is_an_error() {
        assert!(ClimateListResponse::from_json(r#"{"count": 0}"#).is_err());
        assert!(ClimateListResponse::from_json("not json").is_err());
    }
}
