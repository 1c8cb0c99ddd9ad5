//! Organizations, contact details and contributions to a document.

/// Postal address of an organization.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Address {
    /// Street lines
    pub street: Vec<String>,
    /// City
    pub city: String,
    /// Postal code
    pub postcode: Option<String>,
    /// Country
    pub country: String,
}

/// A way to reach a contributor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContactMethod {
    /// Postal address
    Address(Address),
    /// Telephone number
    Phone(String),
    /// Email address
    Email(String),
}

/// An organization taking part in the life of a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Organization {
    name: String,
    abbreviation: Option<String>,
    uri: Option<String>,
    contacts: Vec<ContactMethod>,
}

impl Organization {
    /// Create an organization from its name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Organization {
            name: name.into(),
            abbreviation: None,
            uri: None,
            contacts: Vec::new(),
        }
    }

    /// Set the abbreviation (e.g. `ISO`).
    #[must_use]
    pub fn with_abbreviation(mut self, abbreviation: impl Into<String>) -> Self {
        self.abbreviation = Some(abbreviation.into());
        self
    }

    /// Set the web address.
    #[must_use]
    pub fn with_uri(mut self, uri: impl Into<String>) -> Self {
        self.uri = Some(uri.into());
        self
    }

    /// Add a contact method.
    #[must_use]
    pub fn with_contact(mut self, contact: ContactMethod) -> Self {
        self.contacts.push(contact);
        self
    }

    /// Full name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Abbreviation.
    #[must_use]
    pub fn abbreviation(&self) -> Option<&str> {
        self.abbreviation.as_deref()
    }

    /// Web address.
    #[must_use]
    pub fn uri(&self) -> Option<&str> {
        self.uri.as_deref()
    }

    /// Contact methods, in insertion order.
    #[must_use]
    pub fn contacts(&self) -> &[ContactMethod] {
        &self.contacts
    }
}

/// An organization together with its roles for a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContributionInfo {
    entity: Organization,
    roles: Vec<String>,
}

impl ContributionInfo {
    /// Create a contribution with the given roles.
    #[must_use]
    pub fn new(entity: Organization, roles: Vec<String>) -> Self {
        ContributionInfo { entity, roles }
    }

    /// The contributing organization.
    #[must_use]
    pub fn entity(&self) -> &Organization {
        &self.entity
    }

    /// Role types such as `publisher` or `author`.
    #[must_use]
    pub fn roles(&self) -> &[String] {
        &self.roles
    }

    /// Whether one of the roles is `role`.
    #[must_use]
    pub fn has_role(&self, role: &str) -> bool {
        self.roles.iter().any(|r| r == role)
    }
}

/// Copyright statement of a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CopyrightAssociation {
    owner: Organization,
    from: String,
    to: Option<String>,
}

impl CopyrightAssociation {
    /// Create a copyright held by `owner` starting in `from`.
    #[must_use]
    pub fn new(owner: Organization, from: impl Into<String>) -> Self {
        CopyrightAssociation {
            owner,
            from: from.into(),
            to: None,
        }
    }

    /// Set the end of the copyright period.
    #[must_use]
    pub fn with_to(mut self, to: impl Into<String>) -> Self {
        self.to = Some(to.into());
        self
    }

    /// Copyright holder.
    #[must_use]
    pub fn owner(&self) -> &Organization {
        &self.owner
    }

    /// Start of the copyright period.
    #[must_use]
    pub fn from(&self) -> &str {
        &self.from
    }

    /// End of the copyright period.
    #[must_use]
    pub fn to(&self) -> Option<&str> {
        self.to.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contribution_roles() {
        let iso = Organization::new("International Organization for Standardization")
            .with_abbreviation("ISO")
            .with_uri("www.iso.org")
            .with_contact(ContactMethod::Email("central@iso.org".to_string()));
        let info = ContributionInfo::new(iso, vec!["publisher".to_string()]);

        assert!(info.has_role("publisher"));
        assert!(!info.has_role("author"));
        assert_eq!(info.entity().abbreviation(), Some("ISO"));
        assert_eq!(info.entity().contacts().len(), 1);
    }
}
