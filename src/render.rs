//! Rendering of bibliographic items to `bibitem` XML.
//!
//! The renderer walks a [`BibliographicItem`] once and writes its elements in
//! a fixed order through a [`quick_xml::Writer`]:
//!
//! ```text
//! <bibitem type=".." id="..">
//!   fetched, title*, uri*, docidentifier*, date*, contributor*, edition?,
//!   language*, script*, abstract*, status, copyright?, relation*,
//!   editorialgroup?, note?, ics*, allparts?, extension elements*
//! </bibitem>
//! ```
//!
//! Output can be produced as a standalone document ([`XmlRenderer::render`])
//! or written into a writer owned by a larger document
//! ([`XmlRenderer::write`]).
//!
//! # Examples
//!
//! ```
//! use isobib::{BibliographicItem, LocalizedTitle, RenderOptions};
//!
//! # fn main() -> isobib::Result<()> {
//! let item = BibliographicItem::builder()
//!     .identifier("ISO 19115-1:2014")
//!     .title(LocalizedTitle::new("Metadata", "en", "Latn"))
//!     .status("Published")
//!     .build()?;
//!
//! let xml = item.to_xml_with(&RenderOptions::new().with_note("2014"))?;
//! assert!(xml.contains(r#"id="ISO19115-1-2014""#));
//! assert!(xml.contains("ISO DATE: 2014"));
//! # Ok(())
//! # }
//! ```

use std::io::Write;

use indexmap::IndexMap;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;
use tracing::{debug, trace};

use crate::bibliographic_item::BibliographicItem;
use crate::contributor::{ContactMethod, ContributionInfo, CopyrightAssociation, Organization};
use crate::date::BibliographicDate;
use crate::error::Result;
use crate::ics::Ics;
use crate::identifier::DocumentIdentifier;
use crate::project_group::{ProjectGroup, Subgroup};
use crate::relation::DocumentRelation;
use crate::status::DocumentStatus;

/// Prefix of the text of the note element.
pub const NOTE_PREFIX: &str = "ISO DATE: ";

const PLAIN_TEXT: &str = "text/plain";
const NO_YEAR: &str = "--";

/// Whether the root element carries the derived `id` attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IdentityAttribute {
    /// Emit `id` when the record has a canonical identifier
    #[default]
    Emit,
    /// Never emit `id`; used for records embedded as relation targets
    Suppress,
}

/// An element appended after the standard content of a `bibitem`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtensionElement {
    name: String,
    attributes: IndexMap<String, String>,
    text: Option<String>,
    children: Vec<ExtensionElement>,
}

impl ExtensionElement {
    /// Create an empty element.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        ExtensionElement {
            name: name.into(),
            attributes: IndexMap::new(),
            text: None,
            children: Vec::new(),
        }
    }

    /// Set an attribute; attributes keep insertion order.
    #[must_use]
    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    /// Set the text content, written before any children.
    #[must_use]
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Append a child element.
    #[must_use]
    pub fn with_child(mut self, child: ExtensionElement) -> Self {
        self.children.push(child);
        self
    }

    /// Element name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// Options controlling how an item is rendered.
///
/// # Examples
///
/// ```
/// use isobib::{ExtensionElement, IdentityAttribute, RenderOptions};
///
/// let options = RenderOptions::new()
///     .with_note("2014-04")
///     .with_identity(IdentityAttribute::Suppress)
///     .with_extension(ExtensionElement::new("doctype").with_text("international-standard"));
/// assert_eq!(options.note.as_deref(), Some("2014-04"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct RenderOptions {
    /// Free-form note, written as `ISO DATE: {note}`.
    pub note: Option<String>,

    /// Replace date values by `--`.
    pub no_year: bool,

    /// Whether the root element gets an `id` attribute.
    pub identity: IdentityAttribute,

    /// Elements appended at the end of the root element.
    pub extensions: Vec<ExtensionElement>,
}

impl RenderOptions {
    /// Creates options with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Options for a record embedded in a relation.
    #[must_use]
    pub fn relation_target() -> Self {
        Self {
            identity: IdentityAttribute::Suppress,
            ..Self::default()
        }
    }

    /// Set the note.
    #[must_use]
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }

    /// Set whether date values are hidden.
    #[must_use]
    pub fn with_no_year(mut self, no_year: bool) -> Self {
        self.no_year = no_year;
        self
    }

    /// Set the identity attribute mode.
    #[must_use]
    pub fn with_identity(mut self, identity: IdentityAttribute) -> Self {
        self.identity = identity;
        self
    }

    /// Append an extension element.
    #[must_use]
    pub fn with_extension(mut self, element: ExtensionElement) -> Self {
        self.extensions.push(element);
        self
    }
}

/// Writes [`BibliographicItem`]s as `bibitem` XML.
#[derive(Debug, Clone, Copy)]
pub struct XmlRenderer<'a> {
    options: &'a RenderOptions,
}

impl<'a> XmlRenderer<'a> {
    /// Create a renderer using `options`.
    #[must_use]
    pub fn new(options: &'a RenderOptions) -> Self {
        XmlRenderer { options }
    }

    /// Render `item` as a standalone, indented UTF-8 document.
    ///
    /// # Errors
    ///
    /// Returns an error if the XML writer fails.
    pub fn render(&self, item: &BibliographicItem) -> Result<String> {
        let mut writer = Writer::new_with_indent(Vec::new(), b' ', 2);
        writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;
        self.write(item, &mut writer)?;
        Ok(String::from_utf8(writer.into_inner())?)
    }

    /// Write `item` as a `bibitem` element into an existing writer.
    ///
    /// # Errors
    ///
    /// Returns an error if the XML writer fails.
    pub fn write<W: Write>(&self, item: &BibliographicItem, w: &mut Writer<W>) -> Result<()> {
        let id = match self.options.identity {
            IdentityAttribute::Emit => item.xml_id(),
            IdentityAttribute::Suppress => None,
        };
        debug!(id = ?id, all_parts = item.is_all_parts(), "rendering bibitem");

        let mut attrs = Vec::new();
        if let Some(doc_type) = item.doc_type() {
            attrs.push(("type", doc_type));
        }
        if let Some(id) = id.as_deref() {
            attrs.push(("id", id));
        }
        start(w, "bibitem", &attrs)?;

        text_element(w, "fetched", &[], item.fetched().unwrap_or_default())?;
        for title in item.titles() {
            let attrs = [
                ("format", PLAIN_TEXT),
                ("language", title.language()),
                ("script", title.script()),
            ];
            text_element(w, "title", &attrs, &title.to_string())?;
        }
        for link in item.links() {
            text_element(w, "uri", &[("type", link.link_type())], link.content())?;
        }
        for id in item.identifiers() {
            write_identifier(w, id)?;
        }
        for date in item.dates() {
            self.write_date(w, date)?;
        }
        for contributor in item.contributors() {
            write_contributor(w, contributor)?;
        }
        if let Some(edition) = item.edition() {
            text_element(w, "edition", &[], edition)?;
        }
        for language in item.languages() {
            text_element(w, "language", &[], language)?;
        }
        for script in item.scripts() {
            text_element(w, "script", &[], script)?;
        }
        for text in item.abstracts() {
            let attrs = [
                ("format", text.format()),
                ("language", text.language()),
                ("script", text.script()),
            ];
            text_element(w, "abstract", &attrs, text.content())?;
        }
        write_status(w, item.status())?;
        if let Some(copyright) = item.copyright() {
            write_copyright(w, copyright)?;
        }
        for relation in item.relations() {
            write_relation(w, relation)?;
        }
        if let Some(workgroup) = item.workgroup() {
            write_workgroup(w, workgroup)?;
        }
        if let Some(note) = &self.options.note {
            text_element(
                w,
                "note",
                &[("format", PLAIN_TEXT)],
                &format!("{NOTE_PREFIX}{note}"),
            )?;
        }
        for ics in item.ics() {
            write_ics(w, ics)?;
        }
        if item.is_all_parts() {
            text_element(w, "allparts", &[], "true")?;
        }
        for element in &self.options.extensions {
            write_extension(w, element)?;
        }

        end(w, "bibitem")
    }

    fn write_date<W: Write>(&self, w: &mut Writer<W>, date: &BibliographicDate) -> Result<()> {
        start(w, "date", &[("type", date.date_type())])?;
        text_element(w, "from", &[], self.date_value(date.from()))?;
        if let Some(to) = date.to() {
            text_element(w, "to", &[], self.date_value(to))?;
        }
        end(w, "date")
    }

    fn date_value<'v>(&self, value: &'v str) -> &'v str {
        if self.options.no_year {
            NO_YEAR
        } else {
            value
        }
    }
}

// ---------------------------------------------------------------------------
// Element helpers
// ---------------------------------------------------------------------------

fn start<W: Write>(w: &mut Writer<W>, name: &str, attrs: &[(&str, &str)]) -> Result<()> {
    let mut elem = BytesStart::new(name);
    for attr in attrs {
        elem.push_attribute(*attr);
    }
    w.write_event(Event::Start(elem))?;
    Ok(())
}

fn end<W: Write>(w: &mut Writer<W>, name: &str) -> Result<()> {
    w.write_event(Event::End(BytesEnd::new(name)))?;
    Ok(())
}

/// Write `<name attrs>text</name>`, or `<name attrs/>` for empty text.
fn text_element<W: Write>(
    w: &mut Writer<W>,
    name: &str,
    attrs: &[(&str, &str)],
    text: &str,
) -> Result<()> {
    let mut elem = BytesStart::new(name);
    for attr in attrs {
        elem.push_attribute(*attr);
    }
    if text.is_empty() {
        w.write_event(Event::Empty(elem))?;
        return Ok(());
    }
    w.write_event(Event::Start(elem))?;
    w.write_event(Event::Text(BytesText::new(text)))?;
    end(w, name)
}

// ---------------------------------------------------------------------------
// Record parts
// ---------------------------------------------------------------------------

fn write_identifier<W: Write>(w: &mut Writer<W>, id: &DocumentIdentifier) -> Result<()> {
    match id.scheme() {
        Some(scheme) => text_element(w, "docidentifier", &[("type", scheme.as_str())], id.id()),
        None => text_element(w, "docidentifier", &[], id.id()),
    }
}

fn write_contributor<W: Write>(w: &mut Writer<W>, contributor: &ContributionInfo) -> Result<()> {
    start(w, "contributor", &[])?;
    for role in contributor.roles() {
        text_element(w, "role", &[("type", role.as_str())], "")?;
    }
    write_organization(w, contributor.entity())?;
    end(w, "contributor")
}

fn write_organization<W: Write>(w: &mut Writer<W>, org: &Organization) -> Result<()> {
    start(w, "organization", &[])?;
    text_element(w, "name", &[], org.name())?;
    if let Some(abbreviation) = org.abbreviation() {
        text_element(w, "abbreviation", &[], abbreviation)?;
    }
    if let Some(uri) = org.uri() {
        text_element(w, "uri", &[], uri)?;
    }
    for contact in org.contacts() {
        write_contact(w, contact)?;
    }
    end(w, "organization")
}

fn write_contact<W: Write>(w: &mut Writer<W>, contact: &ContactMethod) -> Result<()> {
    match contact {
        ContactMethod::Address(address) => {
            start(w, "address", &[])?;
            for street in &address.street {
                text_element(w, "street", &[], street)?;
            }
            text_element(w, "city", &[], &address.city)?;
            if let Some(postcode) = &address.postcode {
                text_element(w, "postcode", &[], postcode)?;
            }
            text_element(w, "country", &[], &address.country)?;
            end(w, "address")
        }
        ContactMethod::Phone(phone) => text_element(w, "phone", &[], phone),
        ContactMethod::Email(email) => text_element(w, "email", &[], email),
    }
}

fn write_status<W: Write>(w: &mut Writer<W>, status: &DocumentStatus) -> Result<()> {
    let Some(stage) = status.stage() else {
        return text_element(w, "status", &[], status.status());
    };
    start(w, "status", &[])?;
    text_element(w, "stage", &[], stage)?;
    if let Some(substage) = status.substage() {
        text_element(w, "substage", &[], substage)?;
    }
    end(w, "status")
}

fn write_copyright<W: Write>(w: &mut Writer<W>, copyright: &CopyrightAssociation) -> Result<()> {
    start(w, "copyright", &[])?;
    text_element(w, "from", &[], copyright.from())?;
    if let Some(to) = copyright.to() {
        text_element(w, "to", &[], to)?;
    }
    start(w, "owner", &[])?;
    write_organization(w, copyright.owner())?;
    end(w, "owner")?;
    end(w, "copyright")
}

fn write_relation<W: Write>(w: &mut Writer<W>, relation: &DocumentRelation) -> Result<()> {
    start(w, "relation", &[("type", relation.relation_type())])?;
    if let Some(bibitem) = relation.bibitem() {
        trace!(relation = relation.relation_type(), "rendering embedded relation target");
        XmlRenderer::new(&RenderOptions::relation_target()).write(bibitem, w)?;
    } else {
        start(w, "bibitem", &[])?;
        if let Some(identifier) = relation.identifier() {
            text_element(w, "formattedref", &[("format", PLAIN_TEXT)], identifier)?;
            text_element(w, "docidentifier", &[], identifier)?;
        }
        if let Some(url) = relation.url() {
            text_element(w, "uri", &[("type", "src")], url)?;
        }
        end(w, "bibitem")?;
    }
    end(w, "relation")
}

fn write_subgroup<W: Write>(w: &mut Writer<W>, name: &str, group: &Subgroup) -> Result<()> {
    let number = group.number().map(|n| n.to_string());
    let mut attrs = Vec::new();
    if let Some(number) = number.as_deref() {
        attrs.push(("number", number));
    }
    if let Some(group_type) = group.group_type() {
        attrs.push(("type", group_type));
    }
    text_element(w, name, &attrs, group.name())
}

fn write_workgroup<W: Write>(w: &mut Writer<W>, group: &ProjectGroup) -> Result<()> {
    start(w, "editorialgroup", &[])?;
    write_subgroup(w, "technical_committee", group.technical_committee())?;
    if let Some(subcommittee) = group.subcommittee() {
        write_subgroup(w, "subcommittee", subcommittee)?;
    }
    if let Some(workgroup) = group.workgroup() {
        write_subgroup(w, "workgroup", workgroup)?;
    }
    if let Some(secretariat) = group.secretariat() {
        text_element(w, "secretariat", &[], secretariat)?;
    }
    end(w, "editorialgroup")
}

/// Codes missing from the catalog get an empty `<text/>`.
fn write_ics<W: Write>(w: &mut Writer<W>, ics: &Ics) -> Result<()> {
    start(w, "ics", &[])?;
    text_element(w, "code", &[], &ics.code())?;
    text_element(w, "text", &[], ics.description().unwrap_or_default())?;
    end(w, "ics")
}

fn write_extension<W: Write>(w: &mut Writer<W>, element: &ExtensionElement) -> Result<()> {
    let attrs: Vec<(&str, &str)> = element
        .attributes
        .iter()
        .map(|(k, v)| (k.as_str(), v.as_str()))
        .collect();
    if element.children.is_empty() {
        return text_element(w, &element.name, &attrs, element.text.as_deref().unwrap_or_default());
    }
    start(w, &element.name, &attrs)?;
    if let Some(text) = &element.text {
        w.write_event(Event::Text(BytesText::new(text)))?;
    }
    for child in &element.children {
        write_extension(w, child)?;
    }
    end(w, &element.name)
}
