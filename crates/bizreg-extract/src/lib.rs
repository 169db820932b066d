//! Bizreg Extract - HTML-to-record extraction for the corporate registry.
//!
//! Two pure extractors turn registry markup into structured records:
//!
//! - [`SearchResultExtractor`] maps a search-results table to [`EntitySummary`] rows
//! - [`DetailRecordExtractor`] maps an entity detail page to an [`EntityDetailRecord`]
//!
//! Neither performs I/O or keeps state between calls. Missing or malformed
//! markup degrades to `None`, empty strings or empty lists; extraction never
//! returns an error.
//!
//! DOM access goes through the [`DocumentView`] and [`ElementView`] traits so the
//! algorithms stay independent of the HTML library. [`HtmlDocument`] implements
//! them over `scraper`.
//!
//! # Example
//!
//! ```rust
//! use bizreg_core::JurisdictionCode;
//! use bizreg_extract::SearchResultExtractor;
//!
//! let extractor = SearchResultExtractor::new(
//!     JurisdictionCode::default(),
//!     "https://business.sos.ri.gov/CorpWeb/CorpSearch/",
//! );
//! let rows = extractor.extract("<table><tbody></tbody></table>");
//! assert!(rows.is_empty());
//! ```
//!
//! [`EntitySummary`]: bizreg_core::EntitySummary
//! [`EntityDetailRecord`]: bizreg_core::EntityDetailRecord

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_panics_doc)]

pub mod detail;
pub mod dom;
pub mod search;
pub mod selectors;

// Re-export commonly used types
pub use detail::{compose_address, DetailRecordExtractor, FieldLookup, ROLE_ROW_MIN_COLUMNS};
pub use dom::{DocumentView, ElementView, HtmlDocument};
pub use search::{SearchResultExtractor, DEFAULT_SUMMARY_STATUS, SEARCH_ROW_MIN_COLUMNS};
