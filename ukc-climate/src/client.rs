//! HTTP client for the climate list endpoint.
//!
//! Built on `reqwest`, which uses the browser fetch API on `wasm32` and
//! hyper elsewhere, so the dashboard and native tooling share one client.

use crate::config::ApiConfig;
use crate::error::Result;
use crate::query::ClimateQuery;
use crate::record::ClimateListResponse;
use log::{info, warn};
use reqwest::Client;

/// Typed client for the climate records API.
///
/// Cheap to clone; clones share the underlying connection pool.
#[derive(Debug, Clone)]
pub struct ClimateApi {
    client: Client,
    config: ApiConfig,
}

impl ClimateApi {
    pub fn new(config: ApiConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// Fetch one page of climate records matching `query`.
    ///
    /// Non-2xx statuses are reported as [`crate::ClimateError::Http`].
    pub async fn climate_list(&self, query: &ClimateQuery) -> Result<ClimateListResponse> {
        let url = self.config.climate_list_url();
        info!("GET {}?{}", url, query.to_query_string());

        let response = self
            .client
            .get(&url)
            .query(&query.to_pairs())
            .send()
            .await?
            .error_for_status()?;
        let body = response.text().await?;
        let list = ClimateListResponse::from_json(&body)?;

        if list.next.is_some() {
            warn!(
                "Climate list for {} is paginated; only the first {} records are used",
                query.to_query_string(),
                list.results.len()
            );
        }
        info!(
            "Received {} climate records for {}",
            list.results.len(),
            query.to_query_string()
        );
        Ok(list)
    }
}

impl Default for ClimateApi {
    fn default() -> Self {
        Self::new(ApiConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ClimateError;
    use crate::region::Region;
    use crate::year::Year;

    #[test]
    fn test_uses_configured_base_url() {
        let api = ClimateApi::new(ApiConfig::new("https://climate.example.org/"));
        assert_eq!(
            api.config().climate_list_url(),
            "https://climate.example.org/api/climate/"
        );
    }

    #[tokio::test]
    async fn test_connection_failure_is_http_error() {
        // bind an ephemeral port, then free it so nothing is listening
        let port = {
            let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
            listener.local_addr().unwrap().port()
        };
        let api = ClimateApi::new(ApiConfig::new(format!("http://127.0.0.1:{}", port)));
        let query = ClimateQuery::new(Region::Uk, Year::default());
        let err = api.climate_list(&query).await.unwrap_err();
        assert!(matches!(err, ClimateError::Http(_)));
    }
}
