//! iZiwei API Client

use anyhow::{bail, Context, Result};
use reqwest::{Client, RequestBuilder, Response};
use serde::{Deserialize, Serialize};

use iziwei::{ChartBundle, Gender};

/// API Client for iZiwei server
pub struct IziweiClient {
    client: Client,
    base_url: String,
    api_key: Option<String>,
}

// ============================================
// API Request / Response Types
// ============================================

#[derive(Debug, Serialize)]
pub struct ReportRequest<'a> {
    pub birth: &'a str,
    pub gender: Gender,
    pub today_lunar_year: i32,
    pub chart: &'a ChartBundle,
}

#[derive(Debug, Deserialize)]
pub struct ReportResponse {
    pub report: String,
}

impl IziweiClient {
    /// Create a new API client
    pub fn new(base_url: &str, api_key: Option<&str>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.map(str::to_string),
        }
    }

    fn authorized(&self, builder: RequestBuilder) -> RequestBuilder {
        match &self.api_key {
            Some(key) => builder.header("Authorization", format!("Bearer {}", key)),
            None => builder,
        }
    }

    async fn check(resp: Response) -> Result<Response> {
        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            bail!("API error ({}): {}", status, body);
        }
        Ok(resp)
    }

    /// Test connection with health check
    pub async fn health(&self) -> Result<bool> {
        let url = format!("{}/health", self.base_url);
        let resp = self.client.get(&url).send().await?;
        Ok(resp.status().is_success())
    }

    /// Generate the text report on the server
    pub async fn report(&self, request: &ReportRequest<'_>) -> Result<String> {
        let url = format!("{}/iziwei/report", self.base_url);
        let resp = self
            .authorized(self.client.post(&url))
            .json(request)
            .send()
            .await
            .context("Failed to connect to iZiwei API")?;

        let resp: ReportResponse = Self::check(resp)
            .await?
            .json()
            .await
            .context("Failed to parse response")?;

        Ok(resp.report)
    }

    /// Fetch the structured analysis from the server
    pub async fn analysis(&self, request: &ReportRequest<'_>) -> Result<serde_json::Value> {
        let url = format!("{}/iziwei/analysis", self.base_url);
        let resp = self
            .authorized(self.client.post(&url))
            .json(request)
            .send()
            .await
            .context("Failed to connect to iZiwei API")?;

        Self::check(resp)
            .await?
            .json()
            .await
            .context("Failed to parse response")
    }
}
