//! Detail-page fetching.
//!
//! Detail pages are server-rendered, so a plain GET is enough.

use crate::error::{LookupError, Result};
use async_trait::async_trait;
use bizreg_core::HttpConfig;
use std::time::Duration;

/// Fetches a page body by URL.
#[async_trait]
pub trait PageFetcher: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<String>;
}

/// `reqwest`-backed fetcher with a per-request timeout.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: reqwest::Client,
}

impl HttpFetcher {
    pub fn new(config: &HttpConfig) -> Result<Self> {
        let mut builder =
            reqwest::Client::builder().timeout(Duration::from_secs(config.timeout_secs));
        if let Some(user_agent) = &config.user_agent {
            builder = builder.user_agent(user_agent.clone());
        }

        Ok(Self {
            client: builder.build()?,
        })
    }
}

#[async_trait]
impl PageFetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<String> {
        let response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(LookupError::HttpStatus {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        Ok(response.text().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_with_user_agent() {
        let config = HttpConfig {
            user_agent: Some("bizreg/0.1".to_string()),
            ..HttpConfig::default()
        };
        assert!(HttpFetcher::new(&config).is_ok());
    }

    #[tokio::test]
    async fn test_unreachable_host_is_an_error() {
        let config = HttpConfig {
            timeout_secs: 2,
            ..HttpConfig::default()
        };
        let fetcher = HttpFetcher::new(&config).expect("build client");

        // Port 9 (discard) on localhost is closed in test environments
        let result = fetcher.fetch("http://127.0.0.1:9/BusinessSummary.aspx").await;
        assert!(matches!(result, Err(LookupError::Http(_))));
    }
}
