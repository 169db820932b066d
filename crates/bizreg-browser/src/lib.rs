//! Browser automation engine for the registry's search form.
//!
//! The search page renders its results table with script after a form
//! post, so it is driven through a real (headless) Chromium instead of
//! plain HTTP.

pub mod actions;
pub mod engine;
pub mod error;

pub use actions::BrowserActions;
pub use engine::{BrowserEngine, BrowserSession};
pub use error::{BrowserError, Result};
