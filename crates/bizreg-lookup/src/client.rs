//! Registry client tying acquisition to extraction.
//!
//! This module provides the `RegistryClient` which obtains markup through a
//! [`SearchDriver`] or [`PageFetcher`] and hands it to the extractors. The
//! infallible entry points log failures and substitute an empty result, so
//! callers always get a value.

use crate::error::{LookupError, Result};
use crate::fetch::{HttpFetcher, PageFetcher};
use crate::search::{BrowserSearchDriver, SearchDriver};
use bizreg_core::{AppConfig, EntityDetailRecord, EntitySummary, JurisdictionCode};
use bizreg_extract::{DetailRecordExtractor, SearchResultExtractor};
use futures::stream::{self, StreamExt};
use std::sync::Arc;
use tokio::sync::Mutex;

/// Default number of detail pages fetched at once.
const DEFAULT_MAX_CONCURRENT_FETCHES: usize = 4;

/// Searches the registry and retrieves entity records.
pub struct RegistryClient {
    search_driver: Arc<dyn SearchDriver>,
    fetcher: Arc<dyn PageFetcher>,
    search_extractor: SearchResultExtractor,
    detail_extractor: DetailRecordExtractor,
    /// One driven browser session at a time
    search_lock: Mutex<()>,
    max_concurrent_fetches: usize,
}

impl RegistryClient {
    /// Create a client from its collaborators.
    #[must_use]
    pub fn new(
        search_driver: Arc<dyn SearchDriver>,
        fetcher: Arc<dyn PageFetcher>,
        jurisdiction: JurisdictionCode,
        detail_base_url: impl Into<String>,
    ) -> Self {
        Self {
            search_driver,
            fetcher,
            search_extractor: SearchResultExtractor::new(jurisdiction.clone(), detail_base_url),
            detail_extractor: DetailRecordExtractor::new(jurisdiction),
            search_lock: Mutex::new(()),
            max_concurrent_fetches: DEFAULT_MAX_CONCURRENT_FETCHES,
        }
    }

    /// Build a browser-backed client from configuration.
    ///
    /// No browser is started until the first search.
    pub fn from_config(config: &AppConfig) -> Result<Self> {
        config.validate()?;

        let search_driver = Arc::new(BrowserSearchDriver::new(
            config.browser.clone(),
            config.registry.search_url.clone(),
        ));
        let fetcher = Arc::new(HttpFetcher::new(&config.http)?);

        Ok(Self::new(
            search_driver,
            fetcher,
            config.jurisdiction()?,
            config.registry.detail_base_url.clone(),
        )
        .with_max_concurrent_fetches(config.http.max_concurrent_fetches))
    }

    /// Set the maximum number of concurrent detail fetches.
    #[must_use]
    pub fn with_max_concurrent_fetches(mut self, max: usize) -> Self {
        self.max_concurrent_fetches = max.max(1);
        self
    }

    /// Search by entity name, propagating acquisition failures.
    pub async fn try_search(&self, query: &str) -> Result<Vec<EntitySummary>> {
        let query = query.trim();
        if query.is_empty() {
            return Err(LookupError::EmptyQuery);
        }

        let html = {
            let _session = self.search_lock.lock().await;
            self.search_driver.search_table_html(query).await?
        };

        Ok(self.search_extractor.extract(&html))
    }

    /// Search by entity name; any failure yields an empty list.
    pub async fn search(&self, query: &str) -> Vec<EntitySummary> {
        match self.try_search(query).await {
            Ok(results) => {
                tracing::info!("Search for {:?} found {} entities", query, results.len());
                results
            }
            Err(e) => {
                tracing::error!("Error fetching data for query '{}': {}", query, e);
                Vec::new()
            }
        }
    }

    /// Fetch and extract one detail page, propagating acquisition failures.
    pub async fn try_fetch_details(&self, url: &str) -> Result<EntityDetailRecord> {
        let html = self.fetcher.fetch(url).await?;
        Ok(self.detail_extractor.extract(&html))
    }

    /// Fetch and extract one detail page; any failure yields `None`.
    pub async fn fetch_details(&self, url: &str) -> Option<EntityDetailRecord> {
        match self.try_fetch_details(url).await {
            Ok(record) => Some(record),
            Err(e) => {
                tracing::error!("Error fetching details from '{}': {}", url, e);
                None
            }
        }
    }

    /// Search, then fetch every result's detail page.
    ///
    /// Up to `max_concurrent_fetches` pages are in flight at once. Records
    /// come back in search order; pages that fail to fetch are left out.
    pub async fn search_with_details(&self, query: &str) -> Vec<EntityDetailRecord> {
        let summaries = self.search(query).await;
        let total = summaries.len();

        let records: Vec<EntityDetailRecord> = stream::iter(summaries)
            .map(|summary| async move { self.fetch_details(&summary.url).await })
            .buffered(self.max_concurrent_fetches)
            .filter_map(|record| async move { record })
            .collect()
            .await;

        if records.len() < total {
            tracing::warn!(
                "Retrieved {} of {} detail pages for {:?}",
                records.len(),
                total,
                query
            );
        }
        records
    }
}
