use std::time::Duration;

use repdesk_core::config::BackendConfig;
use repdesk_core::domain::SalesRep;

use crate::error::RosterApiError;
use crate::wire;

const SALES_REPS_PATH: &str = "/api/sales-reps";

pub struct RosterClient {
    http: reqwest::Client,
    base_url: String,
}

impl RosterClient {
    pub fn new(config: &BackendConfig) -> Result<Self, RosterApiError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
            .build()
            .map_err(RosterApiError::ClientBuild)?;

        Ok(Self { http, base_url: config.base_url.trim_end_matches('/').to_string() })
    }

    /// Fetch the full rep roster. One shot, no retry; callers decide how a
    /// failure surfaces.
    pub async fn fetch_sales_reps(&self) -> Result<Vec<SalesRep>, RosterApiError> {
        let url = format!("{}{SALES_REPS_PATH}", self.base_url);

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|source| RosterApiError::Request { url: url.clone(), source })?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|source| RosterApiError::Request { url: url.clone(), source })?;

        if !status.is_success() {
            return Err(RosterApiError::Status { url, status: status.as_u16(), body });
        }

        let reps = wire::parse_roster(&body).map_err(RosterApiError::Decode)?;
        tracing::debug!(count = reps.len(), "sales rep roster fetched");
        Ok(reps)
    }
}
