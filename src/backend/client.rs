// VerityFlow backend client — unauthenticated JSON over HTTP.
//
// A thin reqwest wrapper with one method per backend endpoint. The base
// URL comes from Config at construction; no call site touches the
// environment.

use anyhow::{Context, Result};
use serde_json::json;
use tracing::debug;

use crate::backend::models::{TabularExport, VerdictRecord};

/// HTTP client for the VerityFlow backend.
///
/// Covers both external collaborators: the Analysis Service
/// (`analyze_message`) and the History Store (`fetch_history`,
/// `export_tabular`).
pub struct VerityClient {
    client: reqwest::Client,
    base_url: String,
}

impl VerityClient {
    /// Create a new client pointing at the given backend base URL.
    pub fn new(base_url: &str) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent("verityflow/0.1")
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Submit a message for analysis and return the stored verdict record.
    ///
    /// The caller is responsible for rejecting empty input before this is
    /// reached — the backend would refuse it with a 400 anyway.
    pub async fn analyze_message(&self, message: &str) -> Result<VerdictRecord> {
        let url = format!("{}/api/analyze-message", self.base_url);

        debug!(len = message.len(), "POST analyze-message");

        let response = self
            .client
            .post(&url)
            .json(&json!({ "message": message }))
            .send()
            .await
            .context("Analysis request failed")?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("analyze-message returned {status}: {body}");
        }

        response
            .json::<VerdictRecord>()
            .await
            .context("Failed to deserialize analysis response")
    }

    /// Fetch the analysis history, most recent first.
    ///
    /// An empty search term means an unfiltered query — the parameter is
    /// omitted entirely, matching how the store distinguishes the two.
    pub async fn fetch_history(&self, search: &str, limit: u32) -> Result<Vec<VerdictRecord>> {
        let url = format!("{}/api/history", self.base_url);
        let limit_str = limit.to_string();

        let mut params: Vec<(&str, &str)> = vec![("limit", &limit_str)];
        if !search.is_empty() {
            params.push(("search", search));
        }

        debug!(search = search, limit = limit, "GET history");

        let response = self
            .client
            .get(&url)
            .query(&params)
            .send()
            .await
            .context("History request failed")?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("history returned {status}: {body}");
        }

        response
            .json::<Vec<VerdictRecord>>()
            .await
            .context("Failed to deserialize history response")
    }

    /// Request the server-generated tabular (CSV) export.
    ///
    /// Row generation is owned by the History Store; we only receive the
    /// raw delimited text wrapped in a JSON field.
    pub async fn export_tabular(&self) -> Result<TabularExport> {
        let url = format!("{}/api/export", self.base_url);

        debug!("GET export?format=csv");

        let response = self
            .client
            .get(&url)
            .query(&[("format", "csv")])
            .send()
            .await
            .context("Export request failed")?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("export returned {status}: {body}");
        }

        response
            .json::<TabularExport>()
            .await
            .context("Failed to deserialize export response")
    }
}
