/// Error types for climate record retrieval and selection parsing
use thiserror::Error;

/// Main error type for climate operations
#[derive(Error, Debug)]
pub enum ClimateError {
    /// HTTP request failed or returned a non-success status
    #[cfg(feature = "api")]
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Failed to decode a JSON payload
    #[error("Failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),

    /// Year outside the range covered by the record
    #[error("Year {year} is outside {min}..={max}")]
    InvalidYear { year: i64, min: u16, max: u16 },

    /// Year text that is not a number
    #[error("Invalid year: {0:?}")]
    InvalidYearText(String),

    /// Region code not recognised
    #[error("Unknown region: {0}")]
    UnknownRegion(String),

    /// Dataset code not recognised
    #[error("Unknown dataset: {0}")]
    UnknownDataset(String),
}

/// Type alias for Results using ClimateError
pub type Result<T> = std::result::Result<T, ClimateError>;
