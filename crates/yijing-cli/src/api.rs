//! Yijing API Client

use anyhow::{bail, Context, Result};
use reqwest::Client;
use serde::{Deserialize, Serialize};

/// API Client for the oracle server
pub struct OracleClient {
    client: Client,
    base_url: String,
}

// ============================================
// API Types
// ============================================

#[derive(Debug, Serialize)]
pub struct ChatRequest<'a> {
    pub message: &'a str,
    pub numbers: Option<[i64; 3]>,
}

#[derive(Debug, Deserialize)]
pub struct HexagramData {
    pub num: u8,
    pub name: String,
    pub meaning: String,
    pub fortune: String,
}

#[derive(Debug, Deserialize)]
pub struct ChatResponse {
    pub response: String,
    pub intent: String,
    #[serde(default)]
    pub hexagram_data: Option<HexagramData>,
}

#[derive(Debug, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub openai: String,
}

#[derive(Debug, Deserialize)]
struct ErrorResponse {
    error: String,
}

impl OracleClient {
    /// Create a new API client
    pub fn new(base_url: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Check server status
    pub async fn health(&self) -> Result<HealthResponse> {
        let url = format!("{}/api/health", self.base_url);
        let resp = self
            .client
            .get(&url)
            .send()
            .await
            .context("Failed to connect to Yijing API")?;

        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            bail!("API error ({}): {}", status, body);
        }

        resp.json().await.context("Failed to parse response")
    }

    /// Ask a question, optionally with drawn numbers
    pub async fn chat(&self, message: &str, numbers: Option<[i64; 3]>) -> Result<ChatResponse> {
        let url = format!("{}/api/chat", self.base_url);
        let resp = self
            .client
            .post(&url)
            .json(&ChatRequest { message, numbers })
            .send()
            .await
            .context("Failed to connect to Yijing API")?;

        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ErrorResponse>(&body)
                .map(|e| e.error)
                .unwrap_or(body);
            bail!("API error ({}): {}", status, message);
        }

        resp.json().await.context("Failed to parse response")
    }
}
