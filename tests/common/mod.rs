//! Common test helpers and fixtures shared across the test suite.

use isobib::{BibliographicItem, DocumentIdentifier, IdentifierScheme, LocalizedTitle};

/// JSON description of ISO 19115-1:2014 with every section filled in.
pub const ISO_BIB_ITEM_JSON: &str = include_str!("../data/iso_bib_item.json");

/// Builds the fully populated ISO 19115-1:2014 record from the JSON fixture.
pub fn create_iso_item() -> BibliographicItem {
    BibliographicItem::from_json(ISO_BIB_ITEM_JSON).expect("fixture should build")
}

/// Builds a record with only the required sections.
///
/// Identifier `ISO 19115-1:2014` with project and part numbers, and the
/// English title `Metadata -- Part 1: Fundamentals`.
#[allow(dead_code)]
pub fn create_minimal_item() -> BibliographicItem {
    BibliographicItem::builder()
        .identifier(
            DocumentIdentifier::new("ISO 19115-1:2014")
                .with_scheme(IdentifierScheme::Iso)
                .with_project_number("19115")
                .with_part_number("1"),
        )
        .title(LocalizedTitle::new("Metadata", "en", "").with_part("Part 1: Fundamentals"))
        .status("Published")
        .build()
        .expect("minimal record should build")
}
