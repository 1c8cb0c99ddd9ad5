//! International Classification for Standards (ICS) codes.
//!
//! An ICS code is hierarchical: a two-digit field, a three-digit group and a
//! two-digit subgroup, written `35.240.70`. Descriptions come from a built-in
//! catalog covering every field and a selection of groups and subgroups;
//! codes outside the catalog carry no description.

use std::collections::HashMap;
use std::fmt;

use lazy_static::lazy_static;

use crate::error::{BibError, Result};

lazy_static! {
    static ref ICS_CATALOG: HashMap<&'static str, &'static str> = {
        let mut m = HashMap::new();
        m.insert("01", "Generalities. Terminology. Standardization. Documentation");
        m.insert("01.040", "Vocabularies");
        m.insert("01.140", "Information sciences. Publishing");
        m.insert("01.140.20", "Information sciences");
        m.insert("01.140.40", "Publishing");
        m.insert(
            "03",
            "Services. Company organization, management and quality. Administration. Transport. Sociology",
        );
        m.insert("03.100.70", "Management systems");
        m.insert("03.120.10", "Quality management and quality assurance");
        m.insert("07", "Natural and applied sciences");
        m.insert("07.040", "Astronomy. Geodesy. Geography");
        m.insert("11", "Health care technology");
        m.insert("13", "Environment. Health protection. Safety");
        m.insert("13.020.10", "Environmental management");
        m.insert("17", "Metrology and measurement. Physical phenomena");
        m.insert("19", "Testing");
        m.insert("21", "Mechanical systems and components for general use");
        m.insert("23", "Fluid systems and components for general use");
        m.insert("25", "Manufacturing engineering");
        m.insert("27", "Energy and heat transfer engineering");
        m.insert("29", "Electrical engineering");
        m.insert("31", "Electronics");
        m.insert("33", "Telecommunications. Audio and video engineering");
        m.insert("35", "Information technology");
        m.insert("35.020", "Information technology (IT) in general");
        m.insert("35.030", "IT Security");
        m.insert("35.040", "Information coding");
        m.insert("35.060", "Languages used in information technology");
        m.insert("35.080", "Software");
        m.insert("35.240", "Applications of information technology");
        m.insert("35.240.30", "IT applications in information, documentation and publishing");
        m.insert("35.240.70", "IT applications in science");
        m.insert("37", "Image technology");
        m.insert("39", "Precision mechanics. Jewellery");
        m.insert("43", "Road vehicles engineering");
        m.insert("45", "Railway engineering");
        m.insert("47", "Shipbuilding and marine structures");
        m.insert("49", "Aircraft and space vehicle engineering");
        m.insert("53", "Materials handling equipment");
        m.insert("55", "Packaging and distribution of goods");
        m.insert("59", "Textile and leather technology");
        m.insert("61", "Clothing industry");
        m.insert("65", "Agriculture");
        m.insert("67", "Food technology");
        m.insert("71", "Chemical technology");
        m.insert("73", "Mining and minerals");
        m.insert("75", "Petroleum and related technologies");
        m.insert("77", "Metallurgy");
        m.insert("79", "Wood technology");
        m.insert("81", "Glass and ceramics industries");
        m.insert("83", "Rubber and plastic industries");
        m.insert("85", "Paper technology");
        m.insert("87", "Paint and colour industries");
        m.insert("91", "Construction materials and building");
        m.insert("93", "Civil engineering");
        m.insert("95", "Military engineering");
        m.insert("97", "Domestic and commercial equipment. Entertainment. Sports");
        m
    };
}

/// Look up the catalog description of a formatted ICS code.
#[must_use]
pub fn describe(code: &str) -> Option<&'static str> {
    ICS_CATALOG.get(code).copied()
}

/// An ICS classification code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ics {
    field: u16,
    group: Option<u16>,
    subgroup: Option<u16>,
    description: Option<String>,
}

impl Ics {
    /// Build a code from a composite string or from explicit parts.
    ///
    /// `code` takes precedence when given. The field is required either way.
    ///
    /// # Errors
    ///
    /// Returns [`BibError::InvalidArgument`] when neither `code` nor `field` is
    /// supplied, or when the code string does not consist of numeric parts.
    pub fn new(
        code: Option<&str>,
        field: Option<u16>,
        group: Option<u16>,
        subgroup: Option<u16>,
    ) -> Result<Self> {
        match (code, field) {
            (Some(code), _) => Self::parse(code),
            (None, Some(field)) => Ok(Self::from_parts(field, group, subgroup)),
            (None, None) => Err(BibError::InvalidArgument(
                "ICS requires a code string or a field".to_string(),
            )),
        }
    }

    /// Parse a composite code such as `35.240.70`.
    ///
    /// # Errors
    ///
    /// Returns [`BibError::InvalidArgument`] for empty, non-numeric or
    /// over-long codes.
    pub fn parse(code: &str) -> Result<Self> {
        let invalid = || BibError::InvalidArgument(format!("Invalid ICS code: {code:?}"));
        let mut parts = code.trim().split('.').map(|part| part.parse::<u16>());
        let field = parts.next().and_then(std::result::Result::ok).ok_or_else(invalid)?;
        let group = parts.next().transpose().map_err(|_| invalid())?;
        let subgroup = parts.next().transpose().map_err(|_| invalid())?;
        if parts.next().is_some() {
            return Err(invalid());
        }
        Ok(Self::from_parts(field, group, subgroup))
    }

    /// Build a code from numeric parts.
    ///
    /// A subgroup without a group is dropped.
    #[must_use]
    pub fn from_parts(field: u16, group: Option<u16>, subgroup: Option<u16>) -> Self {
        let subgroup = group.and(subgroup);
        let mut ics = Ics {
            field,
            group,
            subgroup,
            description: None,
        };
        ics.description = describe(&ics.code()).map(str::to_string);
        ics
    }

    /// Replace the catalog description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Field number.
    #[must_use]
    pub fn field(&self) -> u16 {
        self.field
    }

    /// Group number.
    #[must_use]
    pub fn group(&self) -> Option<u16> {
        self.group
    }

    /// Subgroup number.
    #[must_use]
    pub fn subgroup(&self) -> Option<u16> {
        self.subgroup
    }

    /// Formatted code, e.g. `35.240.70`.
    #[must_use]
    pub fn code(&self) -> String {
        let mut code = format!("{:02}", self.field);
        if let Some(group) = self.group {
            code.push_str(&format!(".{group:03}"));
            if let Some(subgroup) = self.subgroup {
                code.push_str(&format!(".{subgroup:02}"));
            }
        }
        code
    }

    /// Description of the code.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
}

impl fmt::Display for Ics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_parts() {
        let ics = Ics::from_parts(35, Some(240), Some(70));
        assert_eq!(ics.code(), "35.240.70");
        assert_eq!(ics.description(), Some("IT applications in science"));
    }

    #[test]
    fn test_parse_pads_parts() {
        let ics = Ics::parse("1.40").unwrap();
        assert_eq!(ics.code(), "01.040");
        assert_eq!(ics.description(), Some("Vocabularies"));
    }

    #[test]
    fn test_code_takes_precedence() {
        let ics = Ics::new(Some("35.240.70"), Some(1), None, None).unwrap();
        assert_eq!(ics.field(), 35);
    }

    #[test]
    fn test_missing_code_and_field_is_invalid() {
        let err = Ics::new(None, None, Some(240), Some(70)).unwrap_err();
        assert!(matches!(err, BibError::InvalidArgument(_)));
    }

    #[test]
    fn test_invalid_codes() {
        assert!(Ics::parse("").is_err());
        assert!(Ics::parse("35.abc").is_err());
        assert!(Ics::parse("35.240.70.1").is_err());
    }

    #[test]
    fn test_unknown_code_has_no_description() {
        let ics = Ics::from_parts(35, Some(240), Some(99));
        assert_eq!(ics.description(), None);
        let ics = ics.with_description("Custom");
        assert_eq!(ics.description(), Some("Custom"));
    }

    #[test]
    fn test_subgroup_without_group_is_dropped() {
        let ics = Ics::from_parts(35, None, Some(70));
        assert_eq!(ics.code(), "35");
        assert_eq!(ics.subgroup(), None);
    }
}
