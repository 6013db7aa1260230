use crate::error::ClimateError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the seven monthly climate series published per region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dataset {
    Tmax,
    Tmin,
    Rainfall,
    Raindays,
    Sunshine,
    Tmean,
    AirFrost,
}

impl Dataset {
    /// Every dataset, in the order the dashboard lists them.
    pub const ALL: [Dataset; 7] = [
        Dataset::Tmax,
        Dataset::Tmin,
        Dataset::Rainfall,
        Dataset::Raindays,
        Dataset::Sunshine,
        Dataset::Tmean,
        Dataset::AirFrost,
    ];

    /// Wire code used by the API and as the chart row key.
    pub fn code(&self) -> &'static str {
        match self {
            Dataset::Tmax => "tmax",
            Dataset::Tmin => "tmin",
            Dataset::Rainfall => "rainfall",
            Dataset::Raindays => "raindays",
            Dataset::Sunshine => "sunshine",
            Dataset::Tmean => "tmean",
            Dataset::AirFrost => "air_frost",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Dataset::Tmax => "Max temperature",
            Dataset::Tmin => "Min temperature",
            Dataset::Rainfall => "Rainfall",
            Dataset::Raindays => "Rain days (>= 1mm)",
            Dataset::Sunshine => "Sunshine",
            Dataset::Tmean => "Mean temperature",
            Dataset::AirFrost => "Air frost days",
        }
    }

    pub fn unit(&self) -> &'static str {
        match self {
            Dataset::Tmax | Dataset::Tmin | Dataset::Tmean => "°C",
            Dataset::Rainfall => "mm",
            Dataset::Raindays | Dataset::AirFrost => "days",
            Dataset::Sunshine => "hours",
        }
    }
}

impl fmt::Display for Dataset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Dataset {
    type Err = ClimateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Dataset::ALL
            .into_iter()
            .find(|d| d.code() == s)
            .ok_or_else(|| ClimateError::UnknownDataset(s.to_string()))
    }
}
