use crate::error::ClimateError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Geographic aggregation a climate series is published for: the whole UK,
/// a home nation, or one of the Met Office district regions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Region {
    #[default]
    #[serde(rename = "UK")]
    Uk,
    England,
    Wales,
    Scotland,
    #[serde(rename = "Northern_Ireland")]
    NorthernIreland,
    #[serde(rename = "England_and_Wales")]
    EnglandAndWales,
    #[serde(rename = "England_N")]
    EnglandN,
    #[serde(rename = "England_S")]
    EnglandS,
    #[serde(rename = "Scotland_N")]
    ScotlandN,
    #[serde(rename = "Scotland_E")]
    ScotlandE,
    #[serde(rename = "Scotland_W")]
    ScotlandW,
    #[serde(rename = "England_E_and_NE")]
    EnglandEAndNe,
    #[serde(rename = "England_NW_and_N_Wales")]
    EnglandNwAndNWales,
    Midlands,
    #[serde(rename = "East_Anglia")]
    EastAnglia,
    #[serde(rename = "England_SW_and_S_Wales")]
    EnglandSwAndSWales,
    #[serde(rename = "England_SE_and_Central_S")]
    EnglandSeAndCentralS,
}

impl Region {
    /// All regions in dropdown order.
    pub const ALL: [Region; 17] = [
        Region::Uk,
        Region::England,
        Region::Wales,
        Region::Scotland,
        Region::NorthernIreland,
        Region::EnglandAndWales,
        Region::EnglandN,
        Region::EnglandS,
        Region::ScotlandN,
        Region::ScotlandE,
        Region::ScotlandW,
        Region::EnglandEAndNe,
        Region::EnglandNwAndNWales,
        Region::Midlands,
        Region::EastAnglia,
        Region::EnglandSwAndSWales,
        Region::EnglandSeAndCentralS,
    ];

    /// Wire code sent as the `region` query parameter.
    pub fn code(&self) -> &'static str {
        match self {
            Region::Uk => "UK",
            Region::England => "England",
            Region::Wales => "Wales",
            Region::Scotland => "Scotland",
            Region::NorthernIreland => "Northern_Ireland",
            Region::EnglandAndWales => "England_and_Wales",
            Region::EnglandN => "England_N",
            Region::EnglandS => "England_S",
            Region::ScotlandN => "Scotland_N",
            Region::ScotlandE => "Scotland_E",
            Region::ScotlandW => "Scotland_W",
            Region::EnglandEAndNe => "England_E_and_NE",
            Region::EnglandNwAndNWales => "England_NW_and_N_Wales",
            Region::Midlands => "Midlands",
            Region::EastAnglia => "East_Anglia",
            Region::EnglandSwAndSWales => "England_SW_and_S_Wales",
            Region::EnglandSeAndCentralS => "England_SE_and_Central_S",
        }
    }

    /// Human readable name for dropdowns and chart titles.
    pub fn label(&self) -> &'static str {
        match self {
            Region::Uk => "UK",
            Region::England => "England",
            Region::Wales => "Wales",
            Region::Scotland => "Scotland",
            Region::NorthernIreland => "Northern Ireland",
            Region::EnglandAndWales => "England and Wales",
            Region::EnglandN => "England North",
            Region::EnglandS => "England South",
            Region::ScotlandN => "Scotland North",
            Region::ScotlandE => "Scotland East",
            Region::ScotlandW => "Scotland West",
            Region::EnglandEAndNe => "England East and NE",
            Region::EnglandNwAndNWales => "England NW and North Wales",
            Region::Midlands => "Midlands",
            Region::EastAnglia => "East Anglia",
            Region::EnglandSwAndSWales => "England SW and South Wales",
            Region::EnglandSeAndCentralS => "England SE and Central South",
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Region {
    type Err = ClimateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Region::ALL
            .into_iter()
            .find(|r| r.code() == s)
            .ok_or_else(|| ClimateError::UnknownRegion(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serde_matches_code() {
        for region in Region::ALL {
            let json = serde_json::to_string(&region).unwrap();
            assert_eq!(json, format!("\"{}\"", region.code()));
            assert_eq!(region.code().parse::<Region>().unwrap(), region);
        }
    }

    #[test]
    fn test_default_is_uk() {
        assert_eq!(Region::default(), Region::Uk);
        assert_eq!(Region::default().label(), "UK");
    }

    #[test]
    fn test_labels() {
        assert_eq!(Region::NorthernIreland.label(), "Northern Ireland");
        assert_eq!(
            Region::EnglandSeAndCentralS.label(),
            "England SE and Central South"
        );
    }

    #[test]
    fn test_unknown_region() {
        assert!("Cornwall".parse::<Region>().is_err());
        // codes are case sensitive
        assert!("uk".parse::<Region>().is_err());
    }
}
