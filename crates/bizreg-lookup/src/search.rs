//! Running the registry's entity-name search form.

use crate::error::Result;
use async_trait::async_trait;
use bizreg_browser::{BrowserActions, BrowserEngine};
use bizreg_core::BrowserConfig;

/// Entity-name input on the search page.
pub const SEARCH_INPUT: &str = "#MainContent_txtEntityName";

/// Results table rendered after the form posts back.
pub const RESULTS_TABLE: &str = "#MainContent_SearchControl_grdSearchResultsEntity";

/// Produces the outer HTML of the search-results table for a query.
#[async_trait]
pub trait SearchDriver: Send + Sync {
    async fn search_table_html(&self, query: &str) -> Result<String>;
}

/// Drives the search form in a fresh browser per query.
pub struct BrowserSearchDriver {
    settings: BrowserConfig,
    search_url: String,
}

impl BrowserSearchDriver {
    #[must_use]
    pub fn new(settings: BrowserConfig, search_url: impl Into<String>) -> Self {
        Self {
            settings,
            search_url: search_url.into(),
        }
    }
}

#[async_trait]
impl SearchDriver for BrowserSearchDriver {
    async fn search_table_html(&self, query: &str) -> Result<String> {
        let engine = BrowserEngine::from_config(&self.settings).await?;

        let result = match engine.new_session().await {
            Ok(session) => {
                let html = run_search_form(
                    &session,
                    &self.search_url,
                    query,
                    self.settings.wait_timeout_ms(),
                )
                .await;
                if let Err(e) = session.close().await {
                    tracing::debug!("Failed to close search page: {}", e);
                }
                html
            }
            Err(e) => Err(e.into()),
        };

        if let Err(e) = engine.close().await {
            tracing::warn!("Failed to close browser after search: {}", e);
        }

        result
    }
}

/// Submit `query` on the search page and return the results table markup.
///
/// A query matching nothing never renders the table, so it surfaces as a
/// wait timeout.
pub async fn run_search_form<A>(
    actions: &A,
    search_url: &str,
    query: &str,
    wait_timeout_ms: u64,
) -> Result<String>
where
    A: BrowserActions + ?Sized,
{
    actions.navigate(search_url).await?;
    actions.wait_for_selector(SEARCH_INPUT, wait_timeout_ms).await?;
    actions.fill_field(SEARCH_INPUT, query).await?;
    actions.press_enter(SEARCH_INPUT).await?;
    actions.wait_for_selector(RESULTS_TABLE, wait_timeout_ms).await?;

    let html = actions.outer_html(RESULTS_TABLE).await?;
    tracing::debug!("Search for {:?} returned {} bytes of markup", query, html.len());
    Ok(html)
}
