//! API endpoint configuration.

/// Base URL used when `UKC_API_URL` is not set at build time.
pub const DEFAULT_API_URL: &str = "http://localhost:8000";

/// Path of the climate list endpoint, relative to the base URL.
pub const CLIMATE_LIST_PATH: &str = "/api/climate/";

/// Where the climate API lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: String,
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim().trim_end_matches('/').to_string(),
        }
    }

    /// Configuration baked in at compile time from `UKC_API_URL`.
    ///
    /// WASM builds have no process environment, so the value is read with
    /// `option_env!` when the crate is compiled.
    pub fn from_build_env() -> Self {
        match option_env!("UKC_API_URL") {
            Some(url) if !url.trim().is_empty() => Self::new(url),
            _ => Self::new(DEFAULT_API_URL),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Full URL of the climate list endpoint.
    pub fn climate_list_url(&self) -> String {
        format!("{}{}", self.base_url, CLIMATE_LIST_PATH)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::from_build_env()
    }
}
