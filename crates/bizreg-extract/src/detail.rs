//! Entity detail-page extraction.

use crate::dom::{DocumentView, ElementView, HtmlDocument};
use crate::selectors;
use bizreg_core::{EntityDetailRecord, EntityStatus, JurisdictionCode, RoleHolder};

/// Role-table rows with fewer cells are skipped.
pub const ROLE_ROW_MIN_COLUMNS: usize = 3;

/// Turns a detail page into an [`EntityDetailRecord`].
#[derive(Debug, Clone, Default)]
pub struct DetailRecordExtractor {
    jurisdiction: JurisdictionCode,
}

impl DetailRecordExtractor {
    /// Records are stamped with `jurisdiction`.
    #[must_use]
    pub fn new(jurisdiction: JurisdictionCode) -> Self {
        Self { jurisdiction }
    }

    /// Parse `markup` and extract the record.
    #[must_use]
    pub fn extract(&self, markup: &str) -> EntityDetailRecord {
        self.extract_from(&HtmlDocument::parse(markup))
    }

    /// Extract the record from an already parsed document.
    pub fn extract_from<D: DocumentView>(&self, document: &D) -> EntityDetailRecord {
        let fields = FieldLookup::new(document);

        let record = EntityDetailRecord {
            state: self.jurisdiction.clone(),
            name: fields.text(selectors::ENTITY_NAME),
            status: fields.status(selectors::INACTIVE_DATE),
            registration_number: fields.text(selectors::REGISTRATION_NUMBER),
            date_registered: fields.text(selectors::DATE_REGISTERED),
            entity_type: fields.text(selectors::ENTITY_TYPE),
            agent_name: fields.text(selectors::AGENT_NAME),
            agent_address: fields.address(selectors::AGENT_ADDRESS),
            principal_address: fields.address(selectors::PRINCIPAL_ADDRESS),
            mailing_address: fields.address(selectors::MAILING_ADDRESS),
            officers: fields.role_holders(selectors::OFFICERS_TABLE, ROLE_ROW_MIN_COLUMNS),
            managers: fields.role_holders(selectors::MANAGERS_TABLE, ROLE_ROW_MIN_COLUMNS),
            document_images: Vec::new(),
        };

        tracing::debug!(
            "Extracted detail record {:?}: {} officers, {} managers",
            record.registration_number,
            record.officers.len(),
            record.managers.len()
        );
        record
    }
}

/// Per-field lookups over one parsed document.
///
/// Every lookup degrades to a default instead of failing: `None` for scalar
/// text, `""` for address parts, an empty list for a missing table.
pub struct FieldLookup<'d, D> {
    document: &'d D,
}

impl<'d, D: DocumentView> FieldLookup<'d, D> {
    /// Lookups over `document`.
    #[must_use]
    pub fn new(document: &'d D) -> Self {
        Self { document }
    }

    /// Stripped text of the first match, `None` if nothing matches.
    pub fn text(&self, selector: &str) -> Option<String> {
        self.document
            .select_one(selector)
            .map(|el| el.stripped_text())
    }

    /// Like [`text`](Self::text) but an absent element reads as `""`.
    pub fn address_component(&self, selector: &str) -> String {
        self.text(selector).unwrap_or_default()
    }

    /// Street, city, state, zip and country under `prefix`, joined by [`compose_address`].
    pub fn address(&self, prefix: &str) -> String {
        compose_address(
            selectors::ADDRESS_PARTS
                .iter()
                .map(|part| self.address_component(&selectors::address_part(prefix, part))),
        )
    }

    /// `Revoked` when the inactive-date element exists with non-empty text.
    pub fn status(&self, inactive_date_selector: &str) -> EntityStatus {
        match self.text(inactive_date_selector) {
            Some(date) if !date.is_empty() => EntityStatus::Revoked,
            _ => EntityStatus::Active,
        }
    }

    /// Rows of a title/name/address table after its header row.
    ///
    /// Rows with fewer than `min_columns` cells, a blank first cell or no
    /// name and address cells are spacers and are skipped.
    pub fn role_holders(&self, table_selector: &str, min_columns: usize) -> Vec<RoleHolder> {
        let Some(table) = self.document.select_one(table_selector) else {
            return Vec::new();
        };

        table
            .select_all(selectors::TABLE_ROWS)
            .into_iter()
            .skip(1)
            .filter_map(|row| {
                let cells = row.select_all(selectors::CELLS);
                if cells.len() < min_columns {
                    return None;
                }

                let [title, name, address, ..] = cells.as_slice() else {
                    return None;
                };

                let title = title.stripped_text();
                if title.is_empty() {
                    return None;
                }

                Some(RoleHolder {
                    title,
                    name: name.stripped_text(),
                    address: address.stripped_text(),
                })
            })
            .collect()
    }
}

/// Trim each part, drop the empty ones and join the rest with `", "`.
///
/// No parts yields `""`.
pub fn compose_address<I, S>(parts: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    parts
        .into_iter()
        .filter_map(|part| {
            let part = part.as_ref().trim();
            (!part.is_empty()).then(|| part.to_string())
        })
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extract(html: &str) -> EntityDetailRecord {
        DetailRecordExtractor::new(JurisdictionCode::default()).extract(html)
    }

    #[test]
    fn test_compose_address_skips_missing_parts() {
        let address = compose_address(["123 Main St", "Providence", "", "02903", ""]);
        assert_eq!(address, "123 Main St, Providence, 02903");
    }

    #[test]
    fn test_compose_address_all_empty() {
        assert_eq!(compose_address(["", "", "", "", ""]), "");
        assert_eq!(compose_address(Vec::<String>::new()), "");
    }

    #[test]
    fn test_compose_address_trims_parts() {
        assert_eq!(compose_address(["  1 Elm St ", " ", "RI"]), "1 Elm St, RI");
    }

    #[test]
    fn test_address_from_page() {
        let html = r#"
            <span id="MainContent_lblPrincipleStreet">123 Main St</span>
            <span id="MainContent_lblPrincipleCity">Providence</span>
            <span id="MainContent_lblPrincipleZip">02903</span>
        "#;

        let record = extract(html);
        assert_eq!(record.principal_address, "123 Main St, Providence, 02903");
        assert_eq!(record.agent_address, "");
        assert_eq!(record.mailing_address, "");
    }

    #[test]
    fn test_status_active_without_inactive_date() {
        let record = extract(r#"<span id="MainContent_lblEntityName">Acme LLC</span>"#);
        assert_eq!(record.status, EntityStatus::Active);
    }

    #[test]
    fn test_status_active_with_blank_inactive_date() {
        let record = extract(r#"<span id="MainContent_lblInactiveDate"> </span>"#);
        assert_eq!(record.status, EntityStatus::Active);
    }

    #[test]
    fn test_status_revoked_with_inactive_date() {
        let record = extract(r#"<span id="MainContent_lblInactiveDate">06/30/2021</span>"#);
        assert_eq!(record.status, EntityStatus::Revoked);
    }

    #[test]
    fn test_missing_scalars_are_none() {
        let record = extract("<html><body><p>Not found</p></body></html>");
        assert_eq!(record.name, None);
        assert_eq!(record.registration_number, None);
        assert_eq!(record.date_registered, None);
        assert_eq!(record.entity_type, None);
        assert_eq!(record.agent_name, None);
        assert!(record.officers.is_empty());
        assert!(record.managers.is_empty());
        assert!(record.document_images.is_empty());
    }

    #[test]
    fn test_role_table_skips_header_and_blank_rows() {
        let html = r#"
            <table id="MainContent_grdOfficers">
                <tr><th>Title</th><th>Name</th><th>Address</th></tr>
                <tr><td></td><td></td><td></td></tr>
                <tr><td>President</td><td>Jane Doe</td><td>1 Elm St</td></tr>
            </table>
        "#;

        let record = extract(html);
        assert_eq!(
            record.officers,
            vec![RoleHolder {
                title: "President".to_string(),
                name: "Jane Doe".to_string(),
                address: "1 Elm St".to_string(),
            }]
        );
    }

    #[test]
    fn test_role_table_skips_short_rows() {
        let html = r#"
            <table id="MainContent_grdManagers">
                <tr><td>Title</td><td>Name</td><td>Address</td></tr>
                <tr><td colspan="2">No managers on file</td></tr>
                <tr><td>Manager</td><td>John Roe</td><td>9 Oak Ave, Newport, RI</td></tr>
            </table>
        "#;

        let record = extract(html);
        assert_eq!(record.managers.len(), 1);
        assert_eq!(record.managers[0].name, "John Roe");
        assert_eq!(record.managers[0].address, "9 Oak Ave, Newport, RI");
    }

    #[test]
    fn test_role_holders_with_lower_threshold_skips_two_cell_rows() {
        let document = HtmlDocument::parse(
            r#"
            <table id="roles">
                <tr><th>Title</th><th>Name</th></tr>
                <tr><td>President</td><td>Jane Doe</td></tr>
                <tr><td>Treasurer</td><td>Sam Poe</td><td>2 Elm St</td></tr>
            </table>
        "#,
        );

        let holders = FieldLookup::new(&document).role_holders("#roles", 2);
        assert_eq!(holders.len(), 1);
        assert_eq!(holders[0].title, "Treasurer");
        assert_eq!(holders[0].address, "2 Elm St");

        assert_eq!(FieldLookup::new(&document).role_holders("#roles", 0).len(), 1);
    }
}
