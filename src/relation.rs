//! Typed, directional relations between bibliographic items.

use std::rc::Rc;

use crate::bibliographic_item::BibliographicItem;

/// Relation type linking a document to its all-parts reference.
pub const PART_OF: &str = "partOf";
/// Relation type linking a document to its most-recent reference.
pub const INSTANCE: &str = "instance";
/// Relation type of documents replaced by the owning document.
pub const REPLACE: &str = "replace";

/// A relation from the owning record to another document.
///
/// The target is given either by identifier and URL or as an embedded record.
/// Embedded records are shared, never mutated after registration.
#[derive(Debug, Clone)]
pub struct DocumentRelation {
    relation_type: String,
    identifier: Option<String>,
    url: Option<String>,
    bibitem: Option<Rc<BibliographicItem>>,
}

impl DocumentRelation {
    /// Create a relation to a document known by its identifier.
    #[must_use]
    pub fn new(relation_type: impl Into<String>, identifier: impl Into<String>) -> Self {
        DocumentRelation {
            relation_type: relation_type.into(),
            identifier: Some(identifier.into()),
            url: None,
            bibitem: None,
        }
    }

    /// Create a relation to a document known only by its URL.
    #[must_use]
    pub fn by_url(relation_type: impl Into<String>, url: impl Into<String>) -> Self {
        DocumentRelation {
            relation_type: relation_type.into(),
            identifier: None,
            url: Some(url.into()),
            bibitem: None,
        }
    }

    /// Create a relation carrying the target record itself.
    #[must_use]
    pub fn embedded(relation_type: impl Into<String>, bibitem: Rc<BibliographicItem>) -> Self {
        DocumentRelation {
            relation_type: relation_type.into(),
            identifier: None,
            url: None,
            bibitem: Some(bibitem),
        }
    }

    /// Set the target URL.
    #[must_use]
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    /// Relation type, e.g. `updates`.
    #[must_use]
    pub fn relation_type(&self) -> &str {
        &self.relation_type
    }

    /// Target identifier.
    #[must_use]
    pub fn identifier(&self) -> Option<&str> {
        self.identifier.as_deref()
    }

    /// Target URL.
    #[must_use]
    pub fn url(&self) -> Option<&str> {
        self.url.as_deref()
    }

    /// Embedded target record.
    #[must_use]
    pub fn bibitem(&self) -> Option<&Rc<BibliographicItem>> {
        self.bibitem.as_ref()
    }
}

/// Ordered relations of a record.
#[derive(Debug, Clone, Default)]
pub struct RelationCollection {
    relations: Vec<DocumentRelation>,
}

impl RelationCollection {
    /// Create an empty collection.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a relation.
    pub fn push(&mut self, relation: DocumentRelation) {
        self.relations.push(relation);
    }

    /// Number of relations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.relations.len()
    }

    /// Whether the collection is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.relations.is_empty()
    }

    /// Iterate over the relations in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, DocumentRelation> {
        self.relations.iter()
    }

    /// Relations of one type.
    #[must_use]
    pub fn of_type(&self, relation_type: &str) -> Vec<&DocumentRelation> {
        self.relations
            .iter()
            .filter(|r| r.relation_type == relation_type)
            .collect()
    }

    /// Relations to documents replaced by the owning one.
    #[must_use]
    pub fn replaces(&self) -> Vec<&DocumentRelation> {
        self.of_type(REPLACE)
    }
}

impl<'a> IntoIterator for &'a RelationCollection {
    type Item = &'a DocumentRelation;
    type IntoIter = std::slice::Iter<'a, DocumentRelation>;

    fn into_iter(self) -> Self::IntoIter {
        self.relations.iter()
    }
}

impl FromIterator<DocumentRelation> for RelationCollection {
    fn from_iter<I: IntoIterator<Item = DocumentRelation>>(iter: I) -> Self {
        RelationCollection {
            relations: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_of_type() {
        let relations: RelationCollection = [
            DocumentRelation::new("updates", "ISO 19115:2003")
                .with_url("https://www.iso.org/standard/26020.html"),
            DocumentRelation::new("replace", "ISO 19115:2003/Cor 1:2006"),
        ]
        .into_iter()
        .collect();

        assert_eq!(relations.len(), 2);
        assert_eq!(relations.of_type("updates").len(), 1);
        assert_eq!(
            relations.replaces()[0].identifier(),
            Some("ISO 19115:2003/Cor 1:2006")
        );
        assert!(relations.of_type("partOf").is_empty());
    }
}
