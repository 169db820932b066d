//! Bizreg Lookup - acquisition layer for the corporate registry.
//!
//! Obtains registry markup and runs it through the extractors:
//!
//! - Searches go through a [`SearchDriver`]; the browser-backed one submits
//!   the registry's search form and captures the rendered results table.
//! - Detail pages go through a [`PageFetcher`]; the HTTP one is a plain GET.
//!
//! [`RegistryClient`] combines both. Its `search`/`fetch_details` methods never
//! fail: acquisition errors are logged and replaced by an empty result.
//!
//! # Example
//!
//! ```rust,ignore
//! use bizreg_core::AppConfig;
//! use bizreg_lookup::RegistryClient;
//!
//! let client = RegistryClient::from_config(&AppConfig::load_with_env()?)?;
//! for record in client.search_with_details("ocean state bakery").await {
//!     println!("{}", serde_json::to_string(&record)?);
//! }
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]

pub mod client;
pub mod error;
pub mod fetch;
pub mod search;

// Re-export commonly used types
pub use client::RegistryClient;
pub use error::{LookupError, Result};
pub use fetch::{HttpFetcher, PageFetcher};
pub use search::{run_search_form, BrowserSearchDriver, SearchDriver};
