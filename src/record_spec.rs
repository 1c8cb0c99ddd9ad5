//! Structured input describing a bibliographic item.
//!
//! [`RecordSpec`] is the deserialized form of the configuration object used to
//! build a [`BibliographicItem`], typically loaded from JSON. Keys are
//! camelCase; a few aliases (`docid`, `docstatus`, `ics`, `abstract`,
//! `source`, `link`, `language`, `script`) are accepted for compatibility with
//! older feeds.
//!
//! Each nested spec converts into its domain type with `From`/`TryFrom`, so
//! the builder accepts spec values and built values alike.
//!
//! # Examples
//!
//! ```
//! use isobib::BibliographicItem;
//!
//! # fn main() -> isobib::Result<()> {
//! let item = BibliographicItem::from_json(r#"{
//!     "id": {"id": "ISO 19115-1:2014", "type": "ISO", "projectNumber": 19115, "partNumber": 1},
//!     "titles": [{"mainPart": "Metadata", "partPart": "Part 1: Fundamentals", "languageCode": "en"}],
//!     "status": "Published",
//!     "classification": [{"field": 35, "group": 240, "subgroup": 70}]
//! }"#)?;
//! assert_eq!(item.xml_id().as_deref(), Some("ISO19115-1-2014"));
//! assert_eq!(item.ics()[0].code(), "35.240.70");
//! # Ok(())
//! # }
//! ```

use std::fmt;

use serde::Deserialize;

use crate::bibliographic_item::BibliographicItem;
use crate::contributor::{
    Address, ContactMethod, ContributionInfo, CopyrightAssociation, Organization,
};
use crate::date::BibliographicDate;
use crate::error::{BibError, Result};
use crate::formatted_string::FormattedString;
use crate::ics::Ics;
use crate::identifier::{DocumentIdentifier, IdentifierScheme};
use crate::link::TypedUri;
use crate::project_group::{ProjectGroup, Subgroup};
use crate::relation::DocumentRelation;
use crate::status::DocumentStatus;
use crate::title::LocalizedTitle;

/// A value given either as a string or as a number (`"19115"` or `19115`).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    /// Text value
    Text(String),
    /// Numeric value
    Number(u64),
}

impl Scalar {
    fn to_u16(&self, what: &str) -> Result<u16> {
        let invalid = || BibError::InvalidArgument(format!("{what} is not a valid number: {self}"));
        match self {
            Scalar::Text(text) => text.trim().parse().map_err(|_| invalid()),
            Scalar::Number(n) => u16::try_from(*n).map_err(|_| invalid()),
        }
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Text(text) => f.write_str(text),
            Scalar::Number(n) => write!(f, "{n}"),
        }
    }
}

/// A single value or a list of values.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum OneOrMany<T> {
    /// A list of values
    Many(Vec<T>),
    /// A single value
    One(T),
}

impl<T> Default for OneOrMany<T> {
    fn default() -> Self {
        OneOrMany::Many(Vec::new())
    }
}

impl<T> OneOrMany<T> {
    /// Flatten into a list.
    #[must_use]
    pub fn into_vec(self) -> Vec<T> {
        match self {
            OneOrMany::One(value) => vec![value],
            OneOrMany::Many(values) => values,
        }
    }
}

/// Identifier input.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct IdentifierSpec {
    /// Catalog string; composed from the number parts when absent
    pub id: Option<String>,
    /// Scheme tag (`ISO`, `Chinese Standard`, `DOI`, ...)
    #[serde(rename = "type")]
    pub id_type: Option<String>,
    /// Project number
    pub project_number: Option<Scalar>,
    /// Part number
    pub part_number: Option<Scalar>,
    /// Subpart number
    pub subpart_number: Option<Scalar>,
    /// Publisher prefix
    pub prefix: Option<String>,
}

impl TryFrom<IdentifierSpec> for DocumentIdentifier {
    type Error = BibError;

    fn try_from(spec: IdentifierSpec) -> Result<Self> {
        let project = spec.project_number.as_ref().map(Scalar::to_string);
        let part = spec.part_number.as_ref().map(Scalar::to_string);
        let subpart = spec.subpart_number.as_ref().map(Scalar::to_string);

        let id = match (spec.id, project.as_deref()) {
            (Some(id), _) => id,
            (None, Some(project)) => DocumentIdentifier::compose(
                spec.prefix.as_deref(),
                project,
                part.as_deref(),
                subpart.as_deref(),
            ),
            (None, None) => {
                return Err(BibError::MissingField(
                    "identifier needs an id or a projectNumber".to_string(),
                ));
            }
        };

        let mut identifier = DocumentIdentifier::new(id);
        if let Some(tag) = spec.id_type.as_deref() {
            identifier = identifier.with_scheme(IdentifierScheme::parse(tag));
        }
        if let Some(project) = project {
            identifier = identifier.with_project_number(project);
        }
        if let Some(part) = part {
            identifier = identifier.with_part_number(part);
        }
        if let Some(subpart) = subpart {
            identifier = identifier.with_subpart_number(subpart);
        }
        if let Some(prefix) = spec.prefix {
            identifier = identifier.with_prefix(prefix);
        }
        Ok(identifier)
    }
}

/// Title input.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TitleSpec {
    /// Introductory element
    #[serde(alias = "titleIntro")]
    pub intro_part: Option<String>,
    /// Main element
    #[serde(alias = "titleMain")]
    pub main_part: Option<String>,
    /// Part element
    #[serde(alias = "titlePart")]
    pub part_part: Option<String>,
    /// ISO 639 language code
    #[serde(alias = "language")]
    pub language_code: String,
    /// ISO 15924 script code
    #[serde(alias = "script")]
    pub script_code: String,
}

impl From<TitleSpec> for LocalizedTitle {
    fn from(spec: TitleSpec) -> Self {
        let mut title = LocalizedTitle::new(
            spec.main_part.unwrap_or_default(),
            spec.language_code,
            spec.script_code,
        );
        if let Some(intro) = spec.intro_part {
            title = title.with_intro(intro);
        }
        if let Some(part) = spec.part_part {
            title = title.with_part(part);
        }
        title
    }
}

/// Status input: plain text or text with stage codes.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum StatusSpec {
    /// Status text only
    Text(String),
    /// Status with harmonized stage codes
    Detailed {
        /// Status text
        #[serde(default)]
        status: String,
        /// Stage code
        stage: Option<Scalar>,
        /// Substage code
        substage: Option<Scalar>,
    },
}

impl From<StatusSpec> for DocumentStatus {
    fn from(spec: StatusSpec) -> Self {
        match spec {
            StatusSpec::Text(text) => DocumentStatus::new(text),
            StatusSpec::Detailed {
                status,
                stage,
                substage,
            } => {
                let mut result = DocumentStatus::new(status);
                if let Some(stage) = stage {
                    result = result.with_stage(stage.to_string());
                }
                if let Some(substage) = substage {
                    result = result.with_substage(substage.to_string());
                }
                result
            }
        }
    }
}

/// Postal address input.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AddressSpec {
    /// Street lines
    pub street: Vec<String>,
    /// City
    pub city: String,
    /// Postal code
    pub postcode: Option<String>,
    /// Country
    pub country: String,
}

/// Contact input, e.g. `{"email": "central@iso.org"}`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactSpec {
    /// Postal address
    Address(AddressSpec),
    /// Telephone number
    Phone(String),
    /// Email address
    Email(String),
}

impl From<ContactSpec> for ContactMethod {
    fn from(spec: ContactSpec) -> Self {
        match spec {
            ContactSpec::Address(address) => ContactMethod::Address(Address {
                street: address.street,
                city: address.city,
                postcode: address.postcode,
                country: address.country,
            }),
            ContactSpec::Phone(phone) => ContactMethod::Phone(phone),
            ContactSpec::Email(email) => ContactMethod::Email(email),
        }
    }
}

/// Organization input.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct OrganizationSpec {
    /// Full name
    pub name: String,
    /// Abbreviation
    pub abbreviation: Option<String>,
    /// Web address
    pub url: Option<String>,
    /// Contact methods
    pub contacts: Vec<ContactSpec>,
}

impl From<OrganizationSpec> for Organization {
    fn from(spec: OrganizationSpec) -> Self {
        let mut org = Organization::new(spec.name);
        if let Some(abbreviation) = spec.abbreviation {
            org = org.with_abbreviation(abbreviation);
        }
        if let Some(url) = spec.url {
            org = org.with_uri(url);
        }
        spec.contacts
            .into_iter()
            .fold(org, |org, contact| org.with_contact(contact.into()))
    }
}

/// Contributor input.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ContributorSpec {
    /// Contributing organization
    pub entity: OrganizationSpec,
    /// Role types
    pub roles: Vec<String>,
}

impl From<ContributorSpec> for ContributionInfo {
    fn from(spec: ContributorSpec) -> Self {
        ContributionInfo::new(spec.entity.into(), spec.roles)
    }
}

/// Copyright input.
#[derive(Debug, Clone, Deserialize)]
pub struct CopyrightSpec {
    /// Copyright holder
    pub owner: OrganizationSpec,
    /// Start of the period
    pub from: Scalar,
    /// End of the period
    #[serde(default)]
    pub to: Option<Scalar>,
}

impl From<CopyrightSpec> for CopyrightAssociation {
    fn from(spec: CopyrightSpec) -> Self {
        let copyright = CopyrightAssociation::new(spec.owner.into(), spec.from.to_string());
        match spec.to {
            Some(to) => copyright.with_to(to.to_string()),
            None => copyright,
        }
    }
}

/// Date input.
#[derive(Debug, Clone, Deserialize)]
pub struct DateSpec {
    /// Date type
    #[serde(rename = "type")]
    pub date_type: String,
    /// Start of the range, or the date itself
    pub from: Scalar,
    /// End of the range
    #[serde(default)]
    pub to: Option<Scalar>,
}

impl From<DateSpec> for BibliographicDate {
    fn from(spec: DateSpec) -> Self {
        let date = BibliographicDate::new(spec.date_type, spec.from.to_string());
        match spec.to {
            Some(to) => date.with_to(to.to_string()),
            None => date,
        }
    }
}

/// Abstract input.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AbstractSpec {
    /// Text content
    pub content: String,
    /// ISO 639 language code
    pub language: String,
    /// ISO 15924 script code
    pub script: String,
    /// Format (`plain`, `html`, or a MIME type)
    #[serde(rename = "type")]
    pub format: Option<String>,
}

impl From<AbstractSpec> for FormattedString {
    fn from(spec: AbstractSpec) -> Self {
        let text = FormattedString::new(spec.content, spec.language, spec.script);
        match spec.format.as_deref() {
            Some(format) => text.with_format(format),
            None => text,
        }
    }
}

/// Link input.
#[derive(Debug, Clone, Deserialize)]
pub struct LinkSpec {
    /// Link type
    #[serde(rename = "type")]
    pub link_type: String,
    /// Target URI
    pub content: String,
}

impl From<LinkSpec> for TypedUri {
    fn from(spec: LinkSpec) -> Self {
        TypedUri::new(spec.link_type, spec.content)
    }
}

/// Relation input.
#[derive(Debug, Clone, Deserialize)]
pub struct RelationSpec {
    /// Relation type
    #[serde(rename = "type")]
    pub relation_type: String,
    /// Target identifier
    #[serde(default)]
    pub identifier: Option<String>,
    /// Target URL
    #[serde(default)]
    pub url: Option<String>,
}

impl TryFrom<RelationSpec> for DocumentRelation {
    type Error = BibError;

    fn try_from(spec: RelationSpec) -> Result<Self> {
        match (spec.identifier, spec.url) {
            (Some(identifier), None) => Ok(DocumentRelation::new(spec.relation_type, identifier)),
            (Some(identifier), Some(url)) => {
                Ok(DocumentRelation::new(spec.relation_type, identifier).with_url(url))
            }
            (None, Some(url)) => Ok(DocumentRelation::by_url(spec.relation_type, url)),
            (None, None) => Err(BibError::MissingField(format!(
                "{} relation needs an identifier or a url",
                spec.relation_type
            ))),
        }
    }
}

/// Committee input.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SubgroupSpec {
    /// Group name
    pub name: String,
    /// Group type
    #[serde(rename = "type")]
    pub group_type: Option<String>,
    /// Group number
    pub number: Option<u32>,
}

impl From<SubgroupSpec> for Subgroup {
    fn from(spec: SubgroupSpec) -> Self {
        let mut group = Subgroup::new(spec.name);
        if let Some(group_type) = spec.group_type {
            group = group.with_type(group_type);
        }
        if let Some(number) = spec.number {
            group = group.with_number(number);
        }
        group
    }
}

/// Editorial group input.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WorkgroupSpec {
    /// Owning organization name
    pub name: String,
    /// Owning organization abbreviation
    pub abbreviation: Option<String>,
    /// Owning organization web address
    pub url: Option<String>,
    /// Technical committee
    #[serde(alias = "technical_committee")]
    pub technical_committee: SubgroupSpec,
    /// Subcommittee
    pub subcommittee: Option<SubgroupSpec>,
    /// Working group
    pub workgroup: Option<SubgroupSpec>,
    /// Secretariat
    pub secretariat: Option<String>,
}

impl From<WorkgroupSpec> for ProjectGroup {
    fn from(spec: WorkgroupSpec) -> Self {
        let organization = Organization::from(OrganizationSpec {
            name: spec.name,
            abbreviation: spec.abbreviation,
            url: spec.url,
            contacts: Vec::new(),
        });
        let mut group = ProjectGroup::new(organization, spec.technical_committee.into());
        if let Some(subcommittee) = spec.subcommittee {
            group = group.with_subcommittee(subcommittee.into());
        }
        if let Some(workgroup) = spec.workgroup {
            group = group.with_workgroup(workgroup.into());
        }
        if let Some(secretariat) = spec.secretariat {
            group = group.with_secretariat(secretariat);
        }
        group
    }
}

/// ICS input: `{"code": "35.240.70"}` or `{"field": 35, "group": 240, "subgroup": 70}`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct IcsSpec {
    /// Composite code
    pub code: Option<String>,
    /// Field number
    pub field: Option<Scalar>,
    /// Group number
    pub group: Option<Scalar>,
    /// Subgroup number
    pub subgroup: Option<Scalar>,
}

impl TryFrom<IcsSpec> for Ics {
    type Error = BibError;

    fn try_from(spec: IcsSpec) -> Result<Self> {
        let number = |value: Option<&Scalar>, what| value.map(|v| v.to_u16(what)).transpose();
        Ics::new(
            spec.code.as_deref(),
            number(spec.field.as_ref(), "ICS field")?,
            number(spec.group.as_ref(), "ICS group")?,
            number(spec.subgroup.as_ref(), "ICS subgroup")?,
        )
    }
}

/// The full input describing one bibliographic item.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RecordSpec {
    /// Fetch date
    pub fetched: Option<String>,
    /// One identifier or a list of identifiers
    #[serde(alias = "docid")]
    pub id: OneOrMany<IdentifierSpec>,
    /// Titles
    pub titles: Vec<TitleSpec>,
    /// Edition
    pub edition: Option<Scalar>,
    /// Language codes
    #[serde(alias = "language")]
    pub languages: Vec<String>,
    /// Script codes
    #[serde(alias = "script")]
    pub scripts: Vec<String>,
    /// Document type
    #[serde(rename = "type")]
    pub doc_type: Option<String>,
    /// Status
    #[serde(alias = "docstatus")]
    pub status: Option<StatusSpec>,
    /// Editorial group
    pub workgroup: Option<WorkgroupSpec>,
    /// ICS codes
    #[serde(alias = "ics")]
    pub classification: Vec<IcsSpec>,
    /// Dates
    pub dates: Vec<DateSpec>,
    /// Abstracts
    #[serde(alias = "abstract")]
    pub abstracts: Vec<AbstractSpec>,
    /// Contributors
    pub contributors: Vec<ContributorSpec>,
    /// Copyright
    pub copyright: Option<CopyrightSpec>,
    /// Links
    #[serde(alias = "link", alias = "source")]
    pub links: Vec<LinkSpec>,
    /// Relations
    pub relations: Vec<RelationSpec>,
}

impl RecordSpec {
    /// Parse a spec from JSON.
    ///
    /// # Errors
    ///
    /// Returns [`BibError::Json`] for malformed input.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

impl TryFrom<RecordSpec> for BibliographicItem {
    type Error = BibError;

    fn try_from(spec: RecordSpec) -> Result<Self> {
        let ics = spec
            .classification
            .into_iter()
            .map(Ics::try_from)
            .collect::<Result<Vec<_>>>()?;

        let mut builder = BibliographicItem::builder();
        if let Some(fetched) = spec.fetched {
            builder = builder.fetched(fetched);
        }
        for id in spec.id.into_vec() {
            builder = builder.identifier(DocumentIdentifier::try_from(id)?);
        }
        for title in spec.titles {
            builder = builder.title(title);
        }
        if let Some(edition) = spec.edition {
            builder = builder.edition(edition.to_string());
        }
        for language in spec.languages {
            builder = builder.language(language);
        }
        for script in spec.scripts {
            builder = builder.script(script);
        }
        if let Some(doc_type) = spec.doc_type {
            builder = builder.doc_type(doc_type);
        }
        if let Some(status) = spec.status {
            builder = builder.status(status);
        }
        if let Some(workgroup) = spec.workgroup {
            builder = builder.workgroup(ProjectGroup::from(workgroup));
        }
        for ics in ics {
            builder = builder.ics(ics);
        }
        for date in spec.dates {
            builder = builder.date(date);
        }
        for text in spec.abstracts {
            builder = builder.add_abstract(text);
        }
        for contributor in spec.contributors {
            builder = builder.contributor(contributor);
        }
        if let Some(copyright) = spec.copyright {
            builder = builder.copyright(copyright);
        }
        for link in spec.links {
            builder = builder.link(link);
        }
        for relation in spec.relations {
            builder = builder.relation(DocumentRelation::try_from(relation)?);
        }
        builder.build()
    }
}

impl BibliographicItem {
    /// Build an item from its structured input.
    ///
    /// # Errors
    ///
    /// Returns [`BibError::InvalidArgument`] for malformed ICS codes and
    /// [`BibError::MissingField`] when the input lacks an identifier, a title
    /// or a status.
    pub fn from_spec(spec: RecordSpec) -> Result<Self> {
        Self::try_from(spec)
    }

    /// Build an item from JSON input.
    ///
    /// # Errors
    ///
    /// Returns [`BibError::Json`] for malformed JSON, otherwise as
    /// [`from_spec`](Self::from_spec).
    pub fn from_json(json: &str) -> Result<Self> {
        Self::from_spec(RecordSpec::from_json(json)?)
    }
}
