// src/core/service_client.rs
//! HTTP client for the lead aggregation backend

use anyhow::{Context, Result};
use std::future::Future;
use uuid::Uuid;

use super::error::FetchError;
use crate::app_log;
use crate::types::{FetchLeadsRequest, SearchResponse};

pub const FETCH_LEADS_ENDPOINT: &str = "/fetch-leads";

/// Anything that can answer a free-text query with a [`SearchResponse`].
///
/// The session is generic over this so tests can stand in delayed or failing
/// backends without a network.
pub trait LeadSource: Send + Sync + 'static {
    fn fetch_leads(
        &self,
        query: &str,
    ) -> impl Future<Output = Result<SearchResponse, FetchError>> + Send;

    /// Address shown to the user when a fetch fails.
    fn backend_url(&self) -> &str;
}

pub struct LeadsClient {
    client: reqwest::Client,
    base_url: String,
}

impl LeadsClient {
    /// Create a client for `base_url`. No request timeout is set here; the
    /// session applies the configured deadline, if any.
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let client = reqwest::Client::builder()
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    pub fn endpoint_url(&self) -> String {
        format!("{}{}", self.base_url, FETCH_LEADS_ENDPOINT)
    }
}

impl LeadSource for LeadsClient {
    async fn fetch_leads(&self, query: &str) -> Result<SearchResponse, FetchError> {
        let url = self.endpoint_url();
        let request_id = Uuid::new_v4();

        app_log!(info, %request_id, "Calling lead service: {} (query: {:?})", url, query);

        let response = self
            .client
            .post(&url)
            .header("Content-Type", "application/json")
            .json(&FetchLeadsRequest::new(query))
            .send()
            .await
            .map_err(|e| {
                app_log!(error, %request_id, "Lead service unreachable: {}", e);
                FetchError::Transport(e.to_string())
            })?;

        let status = response.status();
        app_log!(trace, %request_id, "Response status: {}", status);

        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            app_log!(error, %request_id, "Lead service error {}: {}", status, error_text);
            return Err(FetchError::Status(status.as_u16()));
        }

        let body = response.text().await.map_err(|e| {
            app_log!(error, %request_id, "Failed to read response body: {}", e);
            FetchError::Transport(e.to_string())
        })?;

        let search_response: SearchResponse = serde_json::from_str(&body).map_err(|e| {
            app_log!(error, %request_id, "Unparseable lead response: {}", e);
            FetchError::Decode(e.to_string())
        })?;

        app_log!(
            info,
            %request_id,
            "Received {} leads ({} total)",
            search_response.leads.len(),
            search_response.total_results
        );

        Ok(search_response)
    }

    fn backend_url(&self) -> &str {
        &self.base_url
    }
}
