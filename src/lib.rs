#![warn(missing_docs)]

//! # isobib: ISO bibliographic items
//!
//! A library for describing ISO standards documents as bibliographic items,
//! deriving related references from them and rendering them as `bibitem` XML.
//!
//! ## Quick Start
//!
//! ### Building an item
//!
//! ```
//! use isobib::{BibliographicItem, DocumentIdentifier, IdentifierScheme, LocalizedTitle};
//!
//! # fn main() -> isobib::Result<()> {
//! let item = BibliographicItem::builder()
//!     .identifier(
//!         DocumentIdentifier::new("ISO 19115-1:2014")
//!             .with_scheme(IdentifierScheme::Iso)
//!             .with_project_number("19115")
//!             .with_part_number("1"),
//!     )
//!     .title(
//!         LocalizedTitle::new("Metadata", "en", "Latn")
//!             .with_intro("Geographic information")
//!             .with_part("Part 1: Fundamentals"),
//!     )
//!     .status("Published")
//!     .build()?;
//!
//! assert_eq!(item.xml_id().as_deref(), Some("ISO19115-1-2014"));
//! # Ok(())
//! # }
//! ```
//!
//! ### Loading an item from JSON
//!
//! ```
//! use isobib::BibliographicItem;
//!
//! # fn main() -> isobib::Result<()> {
//! let item = BibliographicItem::from_json(r#"{
//!     "id": {"projectNumber": 1, "partNumber": 2, "prefix": "ISO"},
//!     "titles": [{"mainPart": "Metadata", "languageCode": "en"}],
//!     "status": {"status": "Published", "stage": 60, "substage": 60}
//! }"#)?;
//! assert_eq!(item.identifiers()[0].id(), "ISO 1-2");
//! # Ok(())
//! # }
//! ```
//!
//! ### Deriving references and rendering
//!
//! ```
//! use isobib::{BibliographicItem, DocumentIdentifier, LocalizedTitle, RenderOptions};
//!
//! # fn main() -> isobib::Result<()> {
//! let mut item = BibliographicItem::builder()
//!     .identifier(DocumentIdentifier::new("ISO 19115-1:2014").with_project_number("19115"))
//!     .title(LocalizedTitle::new("Metadata", "en", "Latn"))
//!     .status("Published")
//!     .build()?;
//!
//! item.to_all_parts()?;
//! let xml = item.to_xml_with(&RenderOptions::new().with_note("Cited as a whole"))?;
//! assert!(xml.contains("<allparts>true</allparts>"));
//! # Ok(())
//! # }
//! ```
//!
//! ## Modules
//!
//! - [`bibliographic_item`]: The record, its builder and reference derivations
//! - [`identifier`]: Document identifiers and the identifier engine
//! - [`render`]: `bibitem` XML rendering
//! - [`record_spec`]: Structured (JSON) input for building records
//! - [`ics`]: ICS classification codes
//! - [`relation`]: Relations between documents
//! - [`error`]: Error types and result type

pub mod bibliographic_item;
pub mod contributor;
pub mod date;
pub mod error;
pub mod formatted_string;
pub mod ics;
pub mod identifier;
pub mod link;
pub mod project_group;
pub mod record_spec;
pub mod relation;
pub mod render;
pub mod status;
pub mod title;

pub use bibliographic_item::{BibliographicItem, BibliographicItemBuilder, ShortrefOptions};
pub use contributor::{
    Address, ContactMethod, ContributionInfo, CopyrightAssociation, Organization,
};
pub use date::BibliographicDate;
pub use error::{BibError, Result};
pub use formatted_string::FormattedString;
pub use ics::Ics;
pub use identifier::{DocumentIdentifier, IdentifierScheme};
pub use link::TypedUri;
pub use project_group::{ProjectGroup, Subgroup};
pub use record_spec::RecordSpec;
pub use relation::{DocumentRelation, RelationCollection};
pub use render::{ExtensionElement, IdentityAttribute, RenderOptions, XmlRenderer};
pub use status::DocumentStatus;
pub use title::LocalizedTitle;
