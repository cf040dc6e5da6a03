use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{self, HeaderMap, HeaderValue};
use reqwest::Client;
use tracing::debug;

use crate::acquire::Acquirer;
use crate::config::ScraperConfig;
use crate::extract;
use crate::models::ProductRecord;
use crate::utils::error::AcquireError;

/// The cheap path: a single GET with a browser-like header profile, parsed
/// into a static tree. Fast, but blind to script-rendered content.
pub struct StaticAcquirer {
    client: Client,
}

impl StaticAcquirer {
    pub fn new(config: &ScraperConfig) -> Result<Self, reqwest::Error> {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::ACCEPT,
            HeaderValue::from_static(
                "text/html,application/xhtml+xml,application/xml;q=0.9,image/webp,image/apng,*/*;q=0.8",
            ),
        );
        headers.insert(
            header::ACCEPT_LANGUAGE,
            HeaderValue::from_static("en-US,en;q=0.9"),
        );
        headers.insert(header::CONNECTION, HeaderValue::from_static("keep-alive"));
        headers.insert(
            header::CACHE_CONTROL,
            HeaderValue::from_static("max-age=0"),
        );
        // Accept-Encoding is negotiated by the enabled response codecs so the
        // body arrives decompressed.

        let client = Client::builder()
            .user_agent(config.user_agent.clone())
            .default_headers(headers)
            .timeout(Duration::from_secs(config.request_timeout))
            .build()?;

        Ok(Self { client })
    }
}

#[async_trait]
impl Acquirer for StaticAcquirer {
    fn name(&self) -> &'static str {
        "static"
    }

    async fn acquire(&self, url: &str) -> Result<Vec<ProductRecord>, AcquireError> {
        let response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(AcquireError::Status(status));
        }

        let body = response.text().await?;
        debug!(bytes = body.len(), "static fetch received document body");

        Ok(extract::extract_products(&body))
    }
}
