//! ISO bibliographic items and the derivation of related references.
//!
//! A [`BibliographicItem`] describes one standards document. Besides plain
//! accessors it knows how to derive two related references from itself:
//!
//! - [`to_all_parts`](BibliographicItem::to_all_parts) builds the umbrella
//!   reference covering every part of a multi-part document
//!   (`ISO 19115 (all parts)`).
//! - [`to_most_recent_reference`](BibliographicItem::to_most_recent_reference)
//!   builds the undated reference to the latest edition.
//!
//! Both derivations copy the record, edit the copy and register it as a
//! relation of the original. The original keeps its identifiers, titles,
//! dates and abstracts.
//!
//! # Examples
//!
//! ```
//! use isobib::{BibliographicItem, DocumentIdentifier, LocalizedTitle};
//!
//! # fn main() -> isobib::Result<()> {
//! let mut item = BibliographicItem::builder()
//!     .identifier(DocumentIdentifier::new("ISO 19115-1:2014").with_project_number("19115"))
//!     .title(LocalizedTitle::new("Metadata", "en", "Latn").with_part("Part 1: Fundamentals"))
//!     .status("Published")
//!     .build()?;
//!
//! let all_parts = item.to_all_parts()?;
//! assert_eq!(all_parts.identifiers()[0].id(), "ISO 19115:2014 (all parts)");
//! assert_eq!(item.identifiers()[0].id(), "ISO 19115-1:2014");
//! # Ok(())
//! # }
//! ```

use std::fmt::Write as _;
use std::io::Write;
use std::rc::Rc;

use tracing::debug;

use crate::contributor::{ContributionInfo, CopyrightAssociation};
use crate::date::BibliographicDate;
use crate::error::{BibError, Result};
use crate::formatted_string::FormattedString;
use crate::ics::Ics;
use crate::identifier::{DocumentIdentifier, IdentifierScheme};
use crate::link::{TypedUri, SOURCE_LINK};
use crate::project_group::ProjectGroup;
use crate::relation::{DocumentRelation, RelationCollection, INSTANCE, PART_OF};
use crate::render::{RenderOptions, XmlRenderer};
use crate::status::DocumentStatus;
use crate::title::LocalizedTitle;

/// Options for [`BibliographicItem::shortref`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ShortrefOptions {
    /// Leave out the publication year
    pub no_year: bool,
    /// Refer to all parts of the document
    pub all_parts: bool,
}

/// A bibliographic description of a standards document.
///
/// Cloning copies every owned collection; the workgroup and embedded relation
/// targets are shared by reference.
#[derive(Debug, Clone)]
pub struct BibliographicItem {
    fetched: Option<String>,
    docidentifier: Vec<DocumentIdentifier>,
    titles: Vec<LocalizedTitle>,
    links: Vec<TypedUri>,
    dates: Vec<BibliographicDate>,
    contributors: Vec<ContributionInfo>,
    edition: Option<String>,
    languages: Vec<String>,
    scripts: Vec<String>,
    abstracts: Vec<FormattedString>,
    doc_type: Option<String>,
    status: DocumentStatus,
    copyright: Option<CopyrightAssociation>,
    relations: RelationCollection,
    workgroup: Option<Rc<ProjectGroup>>,
    ics: Vec<Ics>,
    all_parts: bool,
    derived_all_parts: bool,
    derived_most_recent: bool,
}

impl BibliographicItem {
    /// Create a builder for fluently constructing items
    #[must_use]
    pub fn builder() -> BibliographicItemBuilder {
        BibliographicItemBuilder::default()
    }

    // ------------------------------------------------------------------
    // Derivations
    // ------------------------------------------------------------------

    /// Derive the reference to all parts of this document.
    ///
    /// The derived record has the part designator removed from every title
    /// and identifier, no abstracts, and every identifier suffixed with
    /// ` (all parts)`. It is registered on `self` as a `partOf` relation.
    ///
    /// # Errors
    ///
    /// Returns [`BibError::AlreadyTransformed`] if an all-parts reference was
    /// already derived from this record. Embedded `partOf` relations supplied
    /// at build time do not count.
    pub fn to_all_parts(&mut self) -> Result<Rc<BibliographicItem>> {
        if self.derived_all_parts {
            return Err(BibError::AlreadyTransformed(format!(
                "all-parts reference already derived for {}",
                self.docidentifier[0]
            )));
        }

        let mut derived = self.clone();
        for title in &mut derived.titles {
            title.remove_part();
        }
        derived.abstracts.clear();
        for id in &mut derived.docidentifier {
            id.remove_part();
            id.mark_all_parts();
        }
        derived.all_parts = true;

        let derived = Rc::new(derived);
        self.relations
            .push(DocumentRelation::embedded(PART_OF, Rc::clone(&derived)));
        self.derived_all_parts = true;
        debug!(
            source = %self.docidentifier[0],
            derived = %derived.docidentifier[0],
            "derived all-parts reference"
        );
        Ok(derived)
    }

    /// Derive the undated reference to the most recent edition.
    ///
    /// The derived record has no dates and no abstracts, and the year is
    /// removed from every identifier. It is registered on `self` as an
    /// `instance` relation.
    ///
    /// # Errors
    ///
    /// Returns [`BibError::AlreadyTransformed`] if a most-recent reference was
    /// already derived from this record.
    pub fn to_most_recent_reference(&mut self) -> Result<Rc<BibliographicItem>> {
        if self.derived_most_recent {
            return Err(BibError::AlreadyTransformed(format!(
                "most-recent reference already derived for {}",
                self.docidentifier[0]
            )));
        }

        let mut derived = self.clone();
        derived.abstracts.clear();
        derived.dates.clear();
        for id in &mut derived.docidentifier {
            id.remove_date();
        }

        let derived = Rc::new(derived);
        self.relations
            .push(DocumentRelation::embedded(INSTANCE, Rc::clone(&derived)));
        self.derived_most_recent = true;
        debug!(
            source = %self.docidentifier[0],
            derived = %derived.docidentifier[0],
            "derived most-recent reference"
        );
        Ok(derived)
    }

    // ------------------------------------------------------------------
    // Identity
    // ------------------------------------------------------------------

    /// First identifier whose scheme is not excluded.
    ///
    /// Untyped identifiers are never excluded.
    #[must_use]
    pub fn primary_identifier(&self, exclude: &[IdentifierScheme]) -> Option<&DocumentIdentifier> {
        self.docidentifier
            .iter()
            .find(|id| id.scheme().map_or(true, |s| !exclude.contains(s)))
    }

    /// Canonical id of the first identifier whose scheme is not excluded.
    ///
    /// See [`DocumentIdentifier::canonical`].
    #[must_use]
    pub fn canonical_id_excluding(&self, exclude: &[IdentifierScheme]) -> Option<String> {
        self.primary_identifier(exclude)
            .map(DocumentIdentifier::canonical)
    }

    /// Canonical id of the first non-DOI identifier.
    #[must_use]
    pub fn canonical_id(&self) -> Option<String> {
        self.canonical_id_excluding(&[IdentifierScheme::Doi])
    }

    /// Value of the XML `id` attribute: the canonical id without spaces.
    #[must_use]
    pub fn xml_id(&self) -> Option<String> {
        self.canonical_id()
            .map(|id| id.replace(' ', ""))
            .filter(|id| !id.is_empty())
    }

    /// Short citation form, e.g. `ISO 1-2:2014`.
    ///
    /// Built from the abbreviations of the publishers, the project and part
    /// numbers of the primary identifier and the year of the first
    /// `published` date. Identifiers without a project number are cited by
    /// their full string.
    #[must_use]
    pub fn shortref(&self, options: ShortrefOptions) -> String {
        let Some(id) = self.primary_identifier(&[IdentifierScheme::Doi]) else {
            return String::new();
        };
        let Some(project) = id.project_number() else {
            return id.id().to_string();
        };

        let publishers = self
            .contributors
            .iter()
            .filter(|c| c.has_role("publisher"))
            .filter_map(|c| c.entity().abbreviation())
            .collect::<Vec<_>>()
            .join("/");

        let mut reference = String::new();
        if !publishers.is_empty() {
            reference.push_str(&publishers);
            reference.push(' ');
        }
        reference.push_str(&DocumentIdentifier::compose(
            None,
            project,
            id.part_number(),
            None,
        ));
        if !options.no_year {
            if let Some(year) = self
                .dates
                .iter()
                .find(|d| d.date_type() == "published")
                .and_then(BibliographicDate::year)
            {
                write!(reference, ":{year}").ok();
            }
        }
        if options.all_parts || self.all_parts {
            reference.push_str(": All Parts");
        }
        reference
    }

    // ------------------------------------------------------------------
    // Rendering
    // ------------------------------------------------------------------

    /// Render the item as a standalone XML document with default options.
    ///
    /// # Errors
    ///
    /// Returns an error if the XML writer fails.
    pub fn to_xml(&self) -> Result<String> {
        self.to_xml_with(&RenderOptions::default())
    }

    /// Render the item as a standalone XML document.
    ///
    /// # Errors
    ///
    /// Returns an error if the XML writer fails.
    pub fn to_xml_with(&self, options: &RenderOptions) -> Result<String> {
        XmlRenderer::new(options).render(self)
    }

    /// Render the item into an existing XML writer.
    ///
    /// # Errors
    ///
    /// Returns an error if the XML writer fails.
    pub fn write_xml<W: Write>(
        &self,
        writer: &mut quick_xml::Writer<W>,
        options: &RenderOptions,
    ) -> Result<()> {
        XmlRenderer::new(options).write(self, writer)
    }

    // ------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------

    /// Date the record was fetched.
    #[must_use]
    pub fn fetched(&self) -> Option<&str> {
        self.fetched.as_deref()
    }

    /// Identifiers, in order.
    #[must_use]
    pub fn identifiers(&self) -> &[DocumentIdentifier] {
        &self.docidentifier
    }

    /// Titles, in order.
    #[must_use]
    pub fn titles(&self) -> &[LocalizedTitle] {
        &self.titles
    }

    /// First title in the given language.
    #[must_use]
    pub fn title(&self, language: &str) -> Option<&LocalizedTitle> {
        self.titles.iter().find(|t| t.language() == language)
    }

    /// Links, in order.
    #[must_use]
    pub fn links(&self) -> &[TypedUri] {
        &self.links
    }

    /// Content of the first link of the given type.
    #[must_use]
    pub fn url(&self, link_type: &str) -> Option<&str> {
        self.links
            .iter()
            .find(|l| l.link_type() == link_type)
            .map(TypedUri::content)
    }

    /// Content of the first `src` link.
    #[must_use]
    pub fn source_url(&self) -> Option<&str> {
        self.url(SOURCE_LINK)
    }

    /// Dates, in order.
    #[must_use]
    pub fn dates(&self) -> &[BibliographicDate] {
        &self.dates
    }

    /// Contributors, in order.
    #[must_use]
    pub fn contributors(&self) -> &[ContributionInfo] {
        &self.contributors
    }

    /// Edition.
    #[must_use]
    pub fn edition(&self) -> Option<&str> {
        self.edition.as_deref()
    }

    /// ISO 639 language codes.
    #[must_use]
    pub fn languages(&self) -> &[String] {
        &self.languages
    }

    /// ISO 15924 script codes.
    #[must_use]
    pub fn scripts(&self) -> &[String] {
        &self.scripts
    }

    /// Abstracts, in order.
    #[must_use]
    pub fn abstracts(&self) -> &[FormattedString] {
        &self.abstracts
    }

    /// First abstract in the given language.
    #[must_use]
    pub fn abstract_for(&self, language: &str) -> Option<&FormattedString> {
        self.abstracts.iter().find(|a| a.language() == language)
    }

    /// Document type, e.g. `international-standard`.
    #[must_use]
    pub fn doc_type(&self) -> Option<&str> {
        self.doc_type.as_deref()
    }

    /// Document status.
    #[must_use]
    pub fn status(&self) -> &DocumentStatus {
        &self.status
    }

    /// Copyright statement.
    #[must_use]
    pub fn copyright(&self) -> Option<&CopyrightAssociation> {
        self.copyright.as_ref()
    }

    /// Relations to other documents.
    #[must_use]
    pub fn relations(&self) -> &RelationCollection {
        &self.relations
    }

    /// Editorial group.
    #[must_use]
    pub fn workgroup(&self) -> Option<&Rc<ProjectGroup>> {
        self.workgroup.as_ref()
    }

    /// ICS classification codes, in order.
    #[must_use]
    pub fn ics(&self) -> &[Ics] {
        &self.ics
    }

    /// Whether this record is an all-parts reference.
    #[must_use]
    pub fn is_all_parts(&self) -> bool {
        self.all_parts
    }
}

/// Builder for [`BibliographicItem`].
///
/// Every setter accepts anything convertible into the target type, so plain
/// values and already-built parts can be mixed.
#[derive(Debug, Default)]
pub struct BibliographicItemBuilder {
    fetched: Option<String>,
    docidentifier: Vec<DocumentIdentifier>,
    titles: Vec<LocalizedTitle>,
    links: Vec<TypedUri>,
    dates: Vec<BibliographicDate>,
    contributors: Vec<ContributionInfo>,
    edition: Option<String>,
    languages: Vec<String>,
    scripts: Vec<String>,
    abstracts: Vec<FormattedString>,
    doc_type: Option<String>,
    status: Option<DocumentStatus>,
    copyright: Option<CopyrightAssociation>,
    relations: RelationCollection,
    workgroup: Option<Rc<ProjectGroup>>,
    ics: Vec<Ics>,
}

impl BibliographicItemBuilder {
    /// Set the fetch date
    #[must_use]
    pub fn fetched(mut self, fetched: impl Into<String>) -> Self {
        self.fetched = Some(fetched.into());
        self
    }

    /// Add an identifier
    #[must_use]
    pub fn identifier(mut self, id: impl Into<DocumentIdentifier>) -> Self {
        self.docidentifier.push(id.into());
        self
    }

    /// Add a title
    #[must_use]
    pub fn title(mut self, title: impl Into<LocalizedTitle>) -> Self {
        self.titles.push(title.into());
        self
    }

    /// Add a link
    #[must_use]
    pub fn link(mut self, link: impl Into<TypedUri>) -> Self {
        self.links.push(link.into());
        self
    }

    /// Add a date
    #[must_use]
    pub fn date(mut self, date: impl Into<BibliographicDate>) -> Self {
        self.dates.push(date.into());
        self
    }

    /// Add a contributor
    #[must_use]
    pub fn contributor(mut self, contributor: impl Into<ContributionInfo>) -> Self {
        self.contributors.push(contributor.into());
        self
    }

    /// Set the edition
    #[must_use]
    pub fn edition(mut self, edition: impl Into<String>) -> Self {
        self.edition = Some(edition.into());
        self
    }

    /// Add a language code
    #[must_use]
    pub fn language(mut self, language: impl Into<String>) -> Self {
        self.languages.push(language.into());
        self
    }

    /// Add a script code
    #[must_use]
    pub fn script(mut self, script: impl Into<String>) -> Self {
        self.scripts.push(script.into());
        self
    }

    /// Add an abstract
    #[must_use]
    pub fn add_abstract(mut self, text: impl Into<FormattedString>) -> Self {
        self.abstracts.push(text.into());
        self
    }

    /// Set the document type
    #[must_use]
    pub fn doc_type(mut self, doc_type: impl Into<String>) -> Self {
        self.doc_type = Some(doc_type.into());
        self
    }

    /// Set the status
    #[must_use]
    pub fn status(mut self, status: impl Into<DocumentStatus>) -> Self {
        self.status = Some(status.into());
        self
    }

    /// Set the copyright statement
    #[must_use]
    pub fn copyright(mut self, copyright: impl Into<CopyrightAssociation>) -> Self {
        self.copyright = Some(copyright.into());
        self
    }

    /// Add a relation
    #[must_use]
    pub fn relation(mut self, relation: impl Into<DocumentRelation>) -> Self {
        self.relations.push(relation.into());
        self
    }

    /// Set the editorial group, shared with any record derived from this one
    #[must_use]
    pub fn workgroup(mut self, workgroup: impl Into<Rc<ProjectGroup>>) -> Self {
        self.workgroup = Some(workgroup.into());
        self
    }

    /// Add an ICS code
    #[must_use]
    pub fn ics(mut self, ics: impl Into<Ics>) -> Self {
        self.ics.push(ics.into());
        self
    }

    /// Build the item.
    ///
    /// # Errors
    ///
    /// Returns [`BibError::MissingField`] when no identifier, no title or no
    /// status was given.
    pub fn build(self) -> Result<BibliographicItem> {
        if self.docidentifier.is_empty() {
            return Err(BibError::MissingField("docidentifier".to_string()));
        }
        if self.titles.is_empty() {
            return Err(BibError::MissingField("title".to_string()));
        }
        let status = self
            .status
            .ok_or_else(|| BibError::MissingField("status".to_string()))?;

        Ok(BibliographicItem {
            fetched: self.fetched,
            docidentifier: self.docidentifier,
            titles: self.titles,
            links: self.links,
            dates: self.dates,
            contributors: self.contributors,
            edition: self.edition,
            languages: self.languages,
            scripts: self.scripts,
            abstracts: self.abstracts,
            doc_type: self.doc_type,
            status,
            copyright: self.copyright,
            relations: self.relations,
            workgroup: self.workgroup,
            ics: self.ics,
            all_parts: false,
            derived_all_parts: false,
            derived_most_recent: false,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contributor::Organization;
    use crate::project_group::Subgroup;

    fn make_item() -> BibliographicItem {
        BibliographicItem::builder()
            .identifier(
                DocumentIdentifier::new("ISO 19115-1:2014")
                    .with_scheme(IdentifierScheme::Iso)
                    .with_project_number("19115")
                    .with_part_number("1"),
            )
            .title(
                LocalizedTitle::new("Metadata", "en", "Latn")
                    .with_intro("Geographic information")
                    .with_part("Part 1: Fundamentals"),
            )
            .date(BibliographicDate::new("published", "2014-04"))
            .add_abstract(FormattedString::new("ISO 19115-1:2014 defines ...", "en", "Latn"))
            .contributor(ContributionInfo::new(
                Organization::new("International Organization for Standardization")
                    .with_abbreviation("ISO"),
                vec!["publisher".to_string()],
            ))
            .link(TypedUri::new("src", "https://www.iso.org/standard/53798.html"))
            .link(TypedUri::new("rss", "https://www.iso.org/53798.detail.rss"))
            .workgroup(ProjectGroup::new(
                Organization::new("International Organization for Standardization"),
                Subgroup::new("ISO/TC 211").with_number(211),
            ))
            .status(DocumentStatus::new("Published").with_stage("60"))
            .build()
            .unwrap()
    }

    #[test]
    fn test_build_requires_identifier_title_and_status() {
        let err = BibliographicItem::builder()
            .title(LocalizedTitle::new("Metadata", "en", "Latn"))
            .status("Published")
            .build()
            .unwrap_err();
        assert!(matches!(err, BibError::MissingField(ref f) if f == "docidentifier"));

        let err = BibliographicItem::builder()
            .identifier("ISO 1")
            .status("Published")
            .build()
            .unwrap_err();
        assert!(matches!(err, BibError::MissingField(ref f) if f == "title"));

        let err = BibliographicItem::builder()
            .identifier("ISO 1")
            .title(LocalizedTitle::new("Metadata", "en", "Latn"))
            .build()
            .unwrap_err();
        assert!(matches!(err, BibError::MissingField(ref f) if f == "status"));
    }

    #[test]
    fn test_title_and_url_lookup() {
        let item = make_item();
        assert_eq!(item.title("en").map(LocalizedTitle::main_part), Some("Metadata"));
        assert!(item.title("de").is_none());
        assert_eq!(
            item.source_url(),
            Some("https://www.iso.org/standard/53798.html")
        );
        assert_eq!(item.url("rss"), Some("https://www.iso.org/53798.detail.rss"));
        assert_eq!(item.url("obp"), None);
    }

    #[test]
    fn test_canonical_id_skips_doi() {
        let item = BibliographicItem::builder()
            .identifier(DocumentIdentifier::new("10.1000/182").with_scheme(IdentifierScheme::Doi))
            .identifier(
                DocumentIdentifier::new("ISO 19115-1:2014").with_scheme(IdentifierScheme::Iso),
            )
            .title(LocalizedTitle::new("Metadata", "en", "Latn"))
            .status("Published")
            .build()
            .unwrap();
        assert_eq!(item.canonical_id().as_deref(), Some("ISO 19115-1-2014"));
        assert_eq!(item.xml_id().as_deref(), Some("ISO19115-1-2014"));
        assert_eq!(
            item.canonical_id_excluding(&[]).as_deref(),
            Some("10.1000/182")
        );
    }

    #[test]
    fn test_canonical_id_none_when_all_excluded() {
        let item = BibliographicItem::builder()
            .identifier(DocumentIdentifier::new("10.1000/182").with_scheme(IdentifierScheme::Doi))
            .title(LocalizedTitle::new("Metadata", "en", "Latn"))
            .status("Published")
            .build()
            .unwrap();
        assert_eq!(item.canonical_id(), None);
        assert_eq!(item.xml_id(), None);
    }

    #[test]
    fn test_to_all_parts_edits_the_clone_only() {
        let mut item = make_item();
        let derived = item.to_all_parts().unwrap();

        assert_eq!(item.identifiers()[0].id(), "ISO 19115-1:2014");
        assert_eq!(item.titles()[0].part_part(), Some("Part 1: Fundamentals"));
        assert_eq!(item.abstracts().len(), 1);
        assert!(!item.is_all_parts());

        assert_eq!(derived.identifiers()[0].id(), "ISO 19115:2014 (all parts)");
        assert_eq!(derived.identifiers()[0].part_number(), None);
        assert_eq!(derived.titles()[0].part_part(), None);
        assert!(derived.abstracts().is_empty());
        assert_eq!(derived.dates().len(), 1);
        assert!(derived.is_all_parts());

        let part_of = item.relations().of_type("partOf");
        assert_eq!(part_of.len(), 1);
        assert!(part_of[0].identifier().is_none());
        assert!(part_of[0].url().is_none());
        assert!(Rc::ptr_eq(part_of[0].bibitem().unwrap(), &derived));
    }

    #[test]
    fn test_to_most_recent_reference() {
        let mut item = make_item();
        let derived = item.to_most_recent_reference().unwrap();

        assert_eq!(derived.identifiers()[0].id(), "ISO 19115-1");
        assert!(derived.dates().is_empty());
        assert!(derived.abstracts().is_empty());
        assert_eq!(item.dates().len(), 1);
        assert_eq!(item.relations().of_type("instance").len(), 1);
    }

    #[test]
    fn test_transformations_apply_once() {
        let mut item = make_item();
        item.to_all_parts().unwrap();
        let err = item.to_all_parts().unwrap_err();
        assert!(matches!(err, BibError::AlreadyTransformed(_)));
        assert_eq!(item.relations().len(), 1);

        item.to_most_recent_reference().unwrap();
        assert!(item.to_most_recent_reference().is_err());
        assert_eq!(item.relations().len(), 2);
    }

    #[test]
    fn test_supplied_relations_do_not_block_derivations() {
        let series = Rc::new(
            BibliographicItem::builder()
                .identifier("ISO 10303")
                .title(LocalizedTitle::new("Product data representation", "en", "Latn"))
                .status("Published")
                .build()
                .unwrap(),
        );
        let mut item = BibliographicItem::builder()
            .identifier(DocumentIdentifier::new("ISO 10303-11:1994").with_project_number("10303"))
            .title(LocalizedTitle::new("Description methods", "en", "Latn"))
            .status("Published")
            .relation(DocumentRelation::embedded(PART_OF, Rc::clone(&series)))
            .relation(DocumentRelation::embedded(INSTANCE, series))
            .build()
            .unwrap();

        let all_parts = item.to_all_parts().unwrap();
        assert_eq!(all_parts.identifiers()[0].id(), "ISO 10303:1994 (all parts)");
        item.to_most_recent_reference().unwrap();
        assert_eq!(item.relations().of_type(PART_OF).len(), 2);
        assert_eq!(item.relations().of_type(INSTANCE).len(), 2);

        assert!(matches!(item.to_all_parts(), Err(BibError::AlreadyTransformed(_))));
    }

    #[test]
    fn test_chinese_standard_derivations() {
        let mut item = BibliographicItem::builder()
            .identifier(
                DocumentIdentifier::new("GB/T 1.1-2009")
                    .with_scheme(IdentifierScheme::ChineseStandard)
                    .with_project_number("1")
                    .with_part_number("1"),
            )
            .title(LocalizedTitle::new("Directives for standardization", "en", "Latn"))
            .date(BibliographicDate::new("published", "2009-06"))
            .status("Published")
            .build()
            .unwrap();

        let all_parts = item.to_all_parts().unwrap();
        assert_eq!(all_parts.identifiers()[0].id(), "GB/T 1-2009 (all parts)");

        let latest = item.to_most_recent_reference().unwrap();
        assert_eq!(latest.identifiers()[0].id(), "GB/T 1.1");
        assert_eq!(item.identifiers()[0].id(), "GB/T 1.1-2009");
    }

    #[test]
    fn test_clone_shares_workgroup() {
        let mut item = make_item();
        let derived = item.to_all_parts().unwrap();
        assert!(Rc::ptr_eq(
            item.workgroup().unwrap(),
            derived.workgroup().unwrap()
        ));
    }

    #[test]
    fn test_shortref() {
        let item = BibliographicItem::builder()
            .identifier(
                DocumentIdentifier::new("ISO 1-2")
                    .with_project_number("1")
                    .with_part_number("2"),
            )
            .title(LocalizedTitle::new("Metadata", "en", "Latn"))
            .contributor(ContributionInfo::new(
                Organization::new("International Organization for Standardization")
                    .with_abbreviation("ISO"),
                vec!["publisher".to_string()],
            ))
            .date(BibliographicDate::new("published", "2014-04"))
            .status("Published")
            .build()
            .unwrap();

        assert_eq!(item.shortref(ShortrefOptions::default()), "ISO 1-2:2014");
        assert_eq!(
            item.shortref(ShortrefOptions {
                no_year: true,
                all_parts: true
            }),
            "ISO 1-2: All Parts"
        );
    }

    #[test]
    fn test_shortref_without_project_number() {
        let item = BibliographicItem::builder()
            .identifier("ISO 9001:2015")
            .title(LocalizedTitle::new("Quality management systems", "en", "Latn"))
            .status("Published")
            .build()
            .unwrap();
        assert_eq!(item.shortref(ShortrefOptions::default()), "ISO 9001:2015");
    }
}
