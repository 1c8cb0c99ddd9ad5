//! Editorial group owning a document: committee, subcommittee, working group.

use crate::contributor::Organization;

/// A committee-level subgroup of a standards body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Subgroup {
    name: String,
    group_type: Option<String>,
    number: Option<u32>,
}

impl Subgroup {
    /// Create a subgroup from its name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Subgroup {
            name: name.into(),
            group_type: None,
            number: None,
        }
    }

    /// Set the group type (e.g. `technicalCommittee`).
    #[must_use]
    pub fn with_type(mut self, group_type: impl Into<String>) -> Self {
        self.group_type = Some(group_type.into());
        self
    }

    /// Set the group number.
    #[must_use]
    pub fn with_number(mut self, number: u32) -> Self {
        self.number = Some(number);
        self
    }

    /// Group name, trimmed.
    #[must_use]
    pub fn name(&self) -> &str {
        self.name.trim()
    }

    /// Group type.
    #[must_use]
    pub fn group_type(&self) -> Option<&str> {
        self.group_type.as_deref()
    }

    /// Group number.
    #[must_use]
    pub fn number(&self) -> Option<u32> {
        self.number
    }
}

/// The body and committees responsible for a document.
///
/// Shared between a record and the records derived from it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectGroup {
    organization: Organization,
    technical_committee: Subgroup,
    subcommittee: Option<Subgroup>,
    workgroup: Option<Subgroup>,
    secretariat: Option<String>,
}

impl ProjectGroup {
    /// Create a group owned by `organization` under a technical committee.
    #[must_use]
    pub fn new(organization: Organization, technical_committee: Subgroup) -> Self {
        ProjectGroup {
            organization,
            technical_committee,
            subcommittee: None,
            workgroup: None,
            secretariat: None,
        }
    }

    /// Set the subcommittee.
    #[must_use]
    pub fn with_subcommittee(mut self, subcommittee: Subgroup) -> Self {
        self.subcommittee = Some(subcommittee);
        self
    }

    /// Set the working group.
    #[must_use]
    pub fn with_workgroup(mut self, workgroup: Subgroup) -> Self {
        self.workgroup = Some(workgroup);
        self
    }

    /// Set the secretariat.
    #[must_use]
    pub fn with_secretariat(mut self, secretariat: impl Into<String>) -> Self {
        self.secretariat = Some(secretariat.into());
        self
    }

    /// Owning organization.
    #[must_use]
    pub fn organization(&self) -> &Organization {
        &self.organization
    }

    /// Technical committee.
    #[must_use]
    pub fn technical_committee(&self) -> &Subgroup {
        &self.technical_committee
    }

    /// Subcommittee.
    #[must_use]
    pub fn subcommittee(&self) -> Option<&Subgroup> {
        self.subcommittee.as_ref()
    }

    /// Working group.
    #[must_use]
    pub fn workgroup(&self) -> Option<&Subgroup> {
        self.workgroup.as_ref()
    }

    /// Secretariat.
    #[must_use]
    pub fn secretariat(&self) -> Option<&str> {
        self.secretariat.as_deref()
    }
}
