use crate::core::error::{AnalysisError, Result};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tracing::{info, warn};
use url::Url;

/// Raw page retrieved for analysis.
#[derive(Debug, Clone)]
pub struct FetchedPage {
    /// Final URL after redirects.
    pub url: Url,
    pub status_code: u16,
    pub body: String,
}

/// Content Fetcher seam. The pipeline only knows this trait, so tests can
/// substitute a canned page without touching the network.
#[async_trait]
pub trait PageFetcher: Send + Sync {
    async fn fetch(&self, url: &Url) -> Result<FetchedPage>;
}

/// reqwest-backed fetcher: one attempt, bounded by the configured timeout.
pub struct HttpFetcher {
    client: Client,
    user_agent: String,
}

impl HttpFetcher {
    pub fn new(timeout: Duration, user_agent: impl Into<String>) -> anyhow::Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .connect_timeout(timeout)
            .redirect(reqwest::redirect::Policy::limited(10))
            .build()?;

        Ok(Self {
            client,
            user_agent: user_agent.into(),
        })
    }
}

#[async_trait]
impl PageFetcher for HttpFetcher {
    async fn fetch(&self, url: &Url) -> Result<FetchedPage> {
        info!("Fetching {}", url);

        let mut request_builder = self
            .client
            .get(url.clone())
            .header("User-Agent", &self.user_agent);
        for (header_name, header_value) in super::headers::browser_headers() {
            request_builder = request_builder.header(header_name, header_value);
        }

        let response = request_builder.send().await.map_err(|e| {
            warn!("Fetch of {} failed: {}", url, e);
            AnalysisError::from(e)
        })?;

        let final_url = response.url().clone();
        let status = response.status();
        if !status.is_success() {
            warn!("Fetch of {} returned {}", url, status);
            return Err(AnalysisError::Fetch(format!("non-success status {}", status)));
        }

        let body = response
            .text()
            .await
            .map_err(|e| AnalysisError::Fetch(format!("failed to read response body: {}", e)))?;

        Ok(FetchedPage {
            url: final_url,
            status_code: status.as_u16(),
            body,
        })
    }
}
