use crate::error::{ClimateError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A calendar year covered by the regional climate series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u16")]
pub struct Year(u16);

impl Year {
    /// First year with regional records.
    pub const MIN: u16 = 1884;
    /// Last year offered by the dashboard.
    pub const MAX: u16 = 2025;
    /// Year selected when the dashboard opens.
    pub const DEFAULT: Year = Year(2024);

    pub fn new(year: i64) -> Result<Self> {
        if (Self::MIN as i64..=Self::MAX as i64).contains(&year) {
            Ok(Year(year as u16))
        } else {
            Err(ClimateError::InvalidYear {
                year,
                min: Self::MIN,
                max: Self::MAX,
            })
        }
    }

    pub fn get(&self) -> u16 {
        self.0
    }

    /// Every selectable year, oldest first.
    pub fn all() -> impl Iterator<Item = Year> {
        (Self::MIN..=Self::MAX).map(Year)
    }
}

impl Default for Year {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl TryFrom<i64> for Year {
    type Error = ClimateError;

    fn try_from(value: i64) -> Result<Self> {
        Year::new(value)
    }
}

impl From<Year> for u16 {
    fn from(year: Year) -> Self {
        year.0
    }
}

impl fmt::Display for Year {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Year {
    type Err = ClimateError;

    fn from_str(s: &str) -> Result<Self> {
        let year = s
            .trim()
            .parse::<i64>()
            .map_err(|_| ClimateError::InvalidYearText(s.to_string()))?;
        Year::new(year)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range_bounds() {
        assert_eq!(Year::new(1884).unwrap().get(), 1884);
        assert_eq!(Year::new(2025).unwrap().get(), 2025);
        assert!(Year::new(1883).is_err());
        assert!(Year::new(2026).is_err());
    }

    #[test]
    fn test_all_years_listed() {
        let years: Vec<Year> = Year::all().collect();
        assert_eq!(years.len(), 142);
        assert_eq!(years.first().unwrap().get(), 1884);
        assert_eq!(years.last().unwrap().get(), 2025);
    }

    #[test]
    fn test_parse_from_select_value() {
        assert_eq!("1999".parse::<Year>().unwrap().get(), 1999);
        assert!(matches!(
            "1700".parse::<Year>(),
            Err(ClimateError::InvalidYear { year: 1700, .. })
        ));
    }

    #[test]
    fn test_non_numeric_text_is_kept_in_error() {
        let err = "abc".parse::<Year>().unwrap_err();
        assert!(matches!(err, ClimateError::InvalidYearText(ref s) if s == "abc"));
        assert_eq!(err.to_string(), "Invalid year: \"abc\"");
    }

    #[test]
    fn test_default() {
        assert_eq!(Year::default().get(), 2024);
    }
}
