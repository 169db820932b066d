//! Search-results table extraction.

use crate::dom::{DocumentView, ElementView, HtmlDocument};
use crate::selectors;
use bizreg_core::{EntitySummary, JurisdictionCode};

/// Rows with fewer cells are header or filler rows and are skipped.
pub const SEARCH_ROW_MIN_COLUMNS: usize = 5;

/// Status reported when the registry leaves the status cell blank.
pub const DEFAULT_SUMMARY_STATUS: &str = "Active";

const ID_COLUMN: usize = 1;
const STATUS_COLUMN: usize = 3;

/// Turns a search-results table into entity summaries.
///
/// A row yields a summary only when it has at least
/// [`SEARCH_ROW_MIN_COLUMNS`] cells and its first cell holds a link with a
/// non-empty `href`. Everything else is dropped without error.
#[derive(Debug, Clone)]
pub struct SearchResultExtractor {
    jurisdiction: JurisdictionCode,
    detail_base_url: String,
}

impl SearchResultExtractor {
    /// `detail_base_url` is prepended verbatim to each row's relative link.
    pub fn new(jurisdiction: JurisdictionCode, detail_base_url: impl Into<String>) -> Self {
        Self {
            jurisdiction,
            detail_base_url: detail_base_url.into(),
        }
    }

    /// Parse `markup` and extract summaries in row order.
    #[must_use]
    pub fn extract(&self, markup: &str) -> Vec<EntitySummary> {
        self.extract_from(&HtmlDocument::parse(markup))
    }

    /// Extract summaries from an already parsed document.
    pub fn extract_from<D: DocumentView>(&self, document: &D) -> Vec<EntitySummary> {
        let rows = document.select_all(selectors::SEARCH_ROWS);
        let summaries: Vec<EntitySummary> =
            rows.iter().filter_map(|row| self.summarize_row(row)).collect();

        tracing::debug!(
            "Extracted {} search results from {} rows",
            summaries.len(),
            rows.len()
        );
        summaries
    }

    fn summarize_row<E: ElementView>(&self, row: &E) -> Option<EntitySummary> {
        let cells = row.select_all(selectors::CELLS);
        if cells.len() < SEARCH_ROW_MIN_COLUMNS {
            return None;
        }

        let link = cells[0].select_one(selectors::LINK)?;
        let href = link.attribute("href").filter(|href| !href.is_empty())?;

        let status = cells[STATUS_COLUMN].stripped_text();
        let status = if status.is_empty() {
            DEFAULT_SUMMARY_STATUS.to_string()
        } else {
            status
        };

        Some(EntitySummary {
            state: self.jurisdiction.clone(),
            id: cells[ID_COLUMN].stripped_text(),
            name: link.stripped_text(),
            status,
            url: format!("{}{}", self.detail_base_url, href),
        })
    }
}
