//! Attestation Collector API Client
//!
//! HTTP client for the collector's reports endpoint.

use std::time::Duration;

use crate::error::CollectorError;
use crate::models::AttestationReport;

/// Reports endpoint, relative to the collector base URL
pub const REPORTS_PATH: &str = "/api/v1/reports";

/// Collector API client
#[derive(Debug, Clone)]
pub struct CollectorClient {
    base_url: String,
    http_client: reqwest::Client,
}

impl CollectorClient {
    /// Create new collector client
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, CollectorError> {
        let http_client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(CollectorError::Client)?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http_client,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn reports_url(&self) -> String {
        format!("{}{}", self.base_url, REPORTS_PATH)
    }

    /// Fetch every attestation report the collector currently holds
    pub async fn fetch_reports(&self) -> Result<Vec<AttestationReport>, CollectorError> {
        let url = self.reports_url();

        let response = self.http_client
            .get(&url)
            .send()
            .await
            .map_err(CollectorError::Network)?;

        if response.status() != reqwest::StatusCode::OK {
            return Err(CollectorError::UnexpectedStatus(response.status().as_u16()));
        }

        response.json().await
            .map_err(CollectorError::Decode)
    }
}
