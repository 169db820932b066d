//! Registry record types shared across the bizreg crates.
//!
//! These are the plain, JSON-serializable outputs of the extractors. Field
//! names match the records served to downstream consumers, so renaming a
//! field here is a wire-format change.

use crate::error::BizregError;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::OnceLock;

/// Newtype for the jurisdiction code a registry instance serves.
///
/// Codes are two upper-case ASCII letters, e.g. `RI`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct JurisdictionCode(String);

impl JurisdictionCode {
    /// Create a new `JurisdictionCode` from a string.
    ///
    /// # Errors
    /// Returns error if the code is not two upper-case letters.
    pub fn new(code: impl Into<String>) -> Result<Self, BizregError> {
        let code = code.into();
        Self::validate(&code)?;
        Ok(Self(code))
    }

    /// Get the inner string value.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    fn validate(code: &str) -> Result<(), BizregError> {
        static CODE_REGEX: OnceLock<Regex> = OnceLock::new();
        let regex = CODE_REGEX.get_or_init(|| Regex::new(r"^[A-Z]{2}$").expect("valid regex"));

        if regex.is_match(code) {
            Ok(())
        } else {
            Err(BizregError::Validation(format!(
                "invalid jurisdiction code: must be two upper-case letters, got '{code}'"
            )))
        }
    }
}

impl Default for JurisdictionCode {
    fn default() -> Self {
        Self("RI".to_string())
    }
}

impl TryFrom<String> for JurisdictionCode {
    type Error = BizregError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<JurisdictionCode> for String {
    fn from(code: JurisdictionCode) -> Self {
        code.0
    }
}

impl fmt::Display for JurisdictionCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Registration status derived from a detail page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum EntityStatus {
    /// No inactive date on record
    #[default]
    Active,
    /// The registry lists an inactive date
    Revoked,
}

impl EntityStatus {
    /// Get the display name of this status.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Revoked => "Revoked",
        }
    }
}

impl fmt::Display for EntityStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One row of a search-results table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntitySummary {
    /// Jurisdiction of the registry that produced this row
    pub state: JurisdictionCode,
    /// Registry-assigned identifier
    pub id: String,
    /// Entity display name
    pub name: String,
    /// Status wording as shown by the registry, `"Active"` when blank
    pub status: String,
    /// Absolute detail-page URL
    pub url: String,
}

/// A named role-holder (officer or manager) listed on a detail page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleHolder {
    /// Role title, e.g. `President`
    pub title: String,
    /// Person or entity holding the role
    pub name: String,
    /// Address as printed in the table
    pub address: String,
}

/// Full registration record extracted from a detail page.
///
/// Optional scalars are `None` when the page lacks the element. Addresses
/// are always present and empty when none of their parts were found.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityDetailRecord {
    /// Jurisdiction of the registry that produced this record
    pub state: JurisdictionCode,
    /// Entity name
    pub name: Option<String>,
    /// Derived from the inactive date
    pub status: EntityStatus,
    /// Registry identification number
    pub registration_number: Option<String>,
    /// Organisation date as printed
    pub date_registered: Option<String>,
    /// Entity type, e.g. `Domestic Limited Liability Company`
    pub entity_type: Option<String>,
    /// Resident agent name
    pub agent_name: Option<String>,
    /// Resident agent address
    pub agent_address: String,
    /// Principal office address
    pub principal_address: String,
    /// Mailing address
    pub mailing_address: String,
    /// Officers in table order
    pub officers: Vec<RoleHolder>,
    /// Managers in table order
    pub managers: Vec<RoleHolder>,
    /// Reserved; never populated by the extractor
    pub document_images: Vec<String>,
}
