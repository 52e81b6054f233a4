use anyhow::{Context, Result};
use reqwest::Client;
use std::time::Duration;

use crate::config::settings::ClientSettings;

/// Shared HTTP client for plain-text API endpoints.
///
/// Cloning is cheap, clones share one connection pool.
#[derive(Clone)]
pub struct TextClient {
    client: Client,
}

impl TextClient {
    pub fn new(settings: &ClientSettings) -> Result<Self> {
        let client = Self::build_client(settings)?;
        Ok(Self { client })
    }

    /// GET a URL and return its body, failing on non-success statuses
    pub async fn get_text(&self, url: &str, accept: &str) -> Result<String> {
        let response = self.send_get_request(url, accept).await?;

        let status = response.status();
        if !status.is_success() {
            anyhow::bail!("{} returned status: {}", url, status);
        }

        response
            .text()
            .await
            .with_context(|| format!("Failed to read response body from {}", url))
    }

    // No total deadline: game exports stream for as long as the arena was busy,
    // only a stalled connection or body is treated as a failure
    fn build_client(settings: &ClientSettings) -> Result<Client> {
        Client::builder()
            .user_agent(&settings.user_agent)
            .connect_timeout(Duration::from_secs(settings.connect_timeout_secs))
            .read_timeout(Duration::from_secs(settings.read_timeout_secs))
            .build()
            .context("Failed to build HTTP client")
    }

    async fn send_get_request(&self, url: &str, accept: &str) -> Result<reqwest::Response> {
        self.client
            .get(url)
            .header(reqwest::header::ACCEPT, accept)
            .send()
            .await
            .with_context(|| format!("Failed to send GET request to {}", url))
    }
}
