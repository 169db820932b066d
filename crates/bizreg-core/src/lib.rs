//! Bizreg Core - Foundation crate for the business registry lookup tools.
//!
//! This crate provides the shared record types, error handling and configuration
//! management that the extraction, browser and lookup crates depend on.
//!
//! # Modules
//!
//! - [`error`] - Central error types using thiserror
//! - [`config`] - TOML-based configuration with XDG paths and env overrides
//! - [`types`] - Registry records and newtypes (`JurisdictionCode`, `EntitySummary`, `EntityDetailRecord`)
//!
//! # Example
//!
//! ```rust
//! use bizreg_core::{AppConfig, JurisdictionCode};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = AppConfig::default();
//! let state = JurisdictionCode::new(config.registry.jurisdiction.as_str())?;
//! assert_eq!(state.as_str(), "RI");
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

pub mod config;
pub mod error;
pub mod types;

// Re-export commonly used types
pub use config::{AppConfig, BrowserConfig, HttpConfig, RegistryConfig};
pub use error::{BizregError, ConfigError, ConfigResult, Result};
pub use types::{EntityDetailRecord, EntityStatus, EntitySummary, JurisdictionCode, RoleHolder};
