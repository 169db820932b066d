//! Selectors for the registry's search-results table and detail page.
//!
//! The detail page is an ASP.NET form whose labels carry stable element ids.
//! Address parts share a prefix and differ only by suffix, e.g.
//! `#MainContent_lblResidentStreet`.

/// Data rows of the search-results table.
pub const SEARCH_ROWS: &str = "tbody tr";
/// Cells of a table row.
pub const CELLS: &str = "td";
/// Rows of a role table, header included.
pub const TABLE_ROWS: &str = "tr";
/// Detail link inside the first search-result cell.
pub const LINK: &str = "a";

/// Registered entity name.
pub const ENTITY_NAME: &str = "#MainContent_lblEntityName";
/// Inactive date; present with text only for revoked entities.
pub const INACTIVE_DATE: &str = "#MainContent_lblInactiveDate";
/// Registry identification number.
pub const REGISTRATION_NUMBER: &str = "#MainContent_lblIDNumber";
/// Date of organisation.
pub const DATE_REGISTERED: &str = "#MainContent_lblOrganisationDate";
/// Entity type, e.g. "Domestic Profit Corporation".
pub const ENTITY_TYPE: &str = "#MainContent_lblEntityType";
/// Resident agent name.
pub const AGENT_NAME: &str = "#MainContent_lblResidentAgentName";

/// Resident agent address prefix.
pub const AGENT_ADDRESS: &str = "MainContent_lblResident";
/// Principal office address prefix.
pub const PRINCIPAL_ADDRESS: &str = "MainContent_lblPrinciple";
/// Mailing (office) address prefix.
pub const MAILING_ADDRESS: &str = "MainContent_lblOffice";

/// Address id suffixes in composition order.
pub const ADDRESS_PARTS: [&str; 5] = ["Street", "City", "State", "Zip", "Country"];

/// Officers table.
pub const OFFICERS_TABLE: &str = "#MainContent_grdOfficers";
/// Managers table.
pub const MANAGERS_TABLE: &str = "#MainContent_grdManagers";

/// Selector for one part of an address, e.g. `("MainContent_lblOffice", "Zip")`.
#[must_use]
pub fn address_part(prefix: &str, part: &str) -> String {
    format!("#{prefix}{part}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_address_part() {
        assert_eq!(
            address_part(AGENT_ADDRESS, "Street"),
            "#MainContent_lblResidentStreet"
        );
        assert_eq!(
            address_part(MAILING_ADDRESS, ADDRESS_PARTS[3]),
            "#MainContent_lblOfficeZip"
        );
    }
}
