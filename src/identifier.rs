//! Document identifiers and the scheme-sensitive identifier transformations.
//!
//! A [`DocumentIdentifier`] holds the catalog string of a standard (for example
//! `ISO 19115-1:2014`) together with advisory number parts. The string is the
//! single source of truth for rendering; transformations rewrite it in place
//! and keep the advisory parts consistent.
//!
//! Which substrings count as the part designator or the year depends on the
//! identifier scheme. The rules are table driven: every scheme with special
//! rules has one entry in a static table, everything else falls back to the
//! ISO rules (`id-part:year`).
//!
//! # Examples
//!
//! ```
//! use isobib::{DocumentIdentifier, IdentifierScheme};
//!
//! let mut id = DocumentIdentifier::new("ISO 19115-1:2014").with_scheme(IdentifierScheme::Iso);
//! id.remove_part();
//! assert_eq!(id.id(), "ISO 19115:2014");
//! id.remove_date();
//! assert_eq!(id.id(), "ISO 19115");
//! ```

use std::collections::HashMap;
use std::fmt;

use lazy_static::lazy_static;
use regex::Regex;

/// Suffix appended to an identifier that stands for every part of a document.
pub const ALL_PARTS_SUFFIX: &str = " (all parts)";

/// Classification tag of an identifier.
///
/// Parsed from the free-form type string carried by input data. Unknown tags
/// are kept verbatim in [`IdentifierScheme::Other`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum IdentifierScheme {
    /// ISO and ISO-like identifiers (`ISO 19115-1:2014`)
    Iso,
    /// Chinese national standards (`GB/T 1.1-2009`)
    ChineseStandard,
    /// Digital Object Identifier
    Doi,
    /// Any other scheme, kept as given
    Other(String),
}

impl IdentifierScheme {
    /// Returns the type string used for this scheme in XML output.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Iso => "ISO",
            Self::ChineseStandard => "Chinese Standard",
            Self::Doi => "DOI",
            Self::Other(tag) => tag,
        }
    }

    /// Parses a type string into a scheme.
    #[must_use]
    pub fn parse(tag: &str) -> Self {
        match tag {
            "ISO" => Self::Iso,
            "Chinese Standard" => Self::ChineseStandard,
            "DOI" => Self::Doi,
            other => Self::Other(other.to_string()),
        }
    }
}

impl fmt::Display for IdentifierScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for IdentifierScheme {
    fn from(tag: &str) -> Self {
        Self::parse(tag)
    }
}

/// Patterns locating the part designator and the year in an identifier.
#[derive(Debug)]
struct PatternRules {
    part: Regex,
    date: Regex,
}

impl PatternRules {
    fn new(part: &str, date: &str) -> Self {
        // Patterns are compile-time constants; a failure here is a programming error.
        Self {
            part: Regex::new(part).expect("valid part pattern"),
            date: Regex::new(date).expect("valid date pattern"),
        }
    }
}

lazy_static! {
    /// Rules for `id-part:year` identifiers, used for every scheme without an entry.
    static ref DEFAULT_RULES: PatternRules = PatternRules::new(r"-\d+", r":[12]\d{3}");

    /// Scheme-specific rules keyed by type string.
    static ref SCHEME_RULES: HashMap<&'static str, PatternRules> = {
        let mut rules = HashMap::new();
        rules.insert("Chinese Standard", PatternRules::new(r"\.\d+", r"-[12]\d{3}"));
        rules
    };
}

fn rules_for(scheme: Option<&IdentifierScheme>) -> &'static PatternRules {
    scheme
        .and_then(|s| SCHEME_RULES.get(s.as_str()))
        .unwrap_or(&DEFAULT_RULES)
}

/// Removes the first match of `pattern` from `text`.
fn strip_first(pattern: &Regex, text: &str) -> Option<String> {
    pattern.find(text).map(|m| {
        let mut out = String::with_capacity(text.len() - m.len());
        out.push_str(&text[..m.start()]);
        out.push_str(&text[m.end()..]);
        out
    })
}

/// Identifier of a standards document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentIdentifier {
    id: String,
    scheme: Option<IdentifierScheme>,
    project_number: Option<String>,
    part_number: Option<String>,
    subpart_number: Option<String>,
    prefix: Option<String>,
}

impl DocumentIdentifier {
    /// Create an identifier from its catalog string.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        DocumentIdentifier {
            id: id.into(),
            scheme: None,
            project_number: None,
            part_number: None,
            subpart_number: None,
            prefix: None,
        }
    }

    /// Compose an identifier string from its number parts.
    ///
    /// Produces `"{prefix} {project}-{part}-{subpart}"`, leaving out the pieces
    /// that are absent.
    #[must_use]
    pub fn compose(
        prefix: Option<&str>,
        project_number: &str,
        part_number: Option<&str>,
        subpart_number: Option<&str>,
    ) -> String {
        let mut id = String::new();
        if let Some(prefix) = prefix.filter(|p| !p.is_empty()) {
            id.push_str(prefix);
            id.push(' ');
        }
        id.push_str(project_number);
        for number in [part_number, subpart_number].into_iter().flatten() {
            id.push('-');
            id.push_str(number);
        }
        id
    }

    /// Set the identifier scheme.
    #[must_use]
    pub fn with_scheme(mut self, scheme: IdentifierScheme) -> Self {
        self.scheme = Some(scheme);
        self
    }

    /// Set the project number.
    #[must_use]
    pub fn with_project_number(mut self, number: impl Into<String>) -> Self {
        self.project_number = Some(number.into());
        self
    }

    /// Set the part number.
    #[must_use]
    pub fn with_part_number(mut self, number: impl Into<String>) -> Self {
        self.part_number = Some(number.into());
        self
    }

    /// Set the subpart number.
    #[must_use]
    pub fn with_subpart_number(mut self, number: impl Into<String>) -> Self {
        self.subpart_number = Some(number.into());
        self
    }

    /// Set the publisher prefix.
    #[must_use]
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = Some(prefix.into());
        self
    }

    /// The catalog string.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// The identifier scheme, if typed.
    #[must_use]
    pub fn scheme(&self) -> Option<&IdentifierScheme> {
        self.scheme.as_ref()
    }

    /// Project number.
    #[must_use]
    pub fn project_number(&self) -> Option<&str> {
        self.project_number.as_deref()
    }

    /// Part number.
    #[must_use]
    pub fn part_number(&self) -> Option<&str> {
        self.part_number.as_deref()
    }

    /// Subpart number.
    #[must_use]
    pub fn subpart_number(&self) -> Option<&str> {
        self.subpart_number.as_deref()
    }

    /// Publisher prefix.
    #[must_use]
    pub fn prefix(&self) -> Option<&str> {
        self.prefix.as_deref()
    }

    /// Strip the part designator from the identifier.
    ///
    /// Removes the first `.<digits>` run for Chinese standards and the first
    /// `-<digits>` run otherwise, and clears the part and subpart numbers. An
    /// identifier without a part designator keeps its string.
    pub fn remove_part(&mut self) {
        self.part_number = None;
        self.subpart_number = None;
        if let Some(stripped) = strip_first(&rules_for(self.scheme.as_ref()).part, &self.id) {
            self.id = stripped;
        }
    }

    /// Strip the year from the identifier.
    ///
    /// Removes the first `-YYYY` token for Chinese standards and the first
    /// `:YYYY` token otherwise (years 1000 to 2999).
    pub fn remove_date(&mut self) {
        if let Some(stripped) = strip_first(&rules_for(self.scheme.as_ref()).date, &self.id) {
            self.id = stripped;
        }
    }

    /// Append the [`ALL_PARTS_SUFFIX`] to the identifier.
    ///
    /// Every call appends another suffix, so callers apply it once.
    pub fn mark_all_parts(&mut self) {
        self.id.push_str(ALL_PARTS_SUFFIX);
    }

    /// Identifier string with `:` replaced by `-`, trimmed.
    ///
    /// Identifiers from the IEV project always yield `"IEV"`.
    #[must_use]
    pub fn canonical(&self) -> String {
        if self.project_number.as_deref() == Some("IEV") {
            return "IEV".to_string();
        }
        self.id.replace(':', "-").trim().to_string()
    }
}

impl fmt::Display for DocumentIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.id)
    }
}

impl From<&str> for DocumentIdentifier {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}
