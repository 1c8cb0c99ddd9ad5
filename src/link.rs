//! Typed links to online representations of a document.

/// Link type of the canonical web page of a document.
pub const SOURCE_LINK: &str = "src";

/// A URI tagged with its role (`src`, `obp`, `rss`, ...).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypedUri {
    link_type: String,
    content: String,
}

impl TypedUri {
    /// Create a link.
    #[must_use]
    pub fn new(link_type: impl Into<String>, content: impl Into<String>) -> Self {
        TypedUri {
            link_type: link_type.into(),
            content: content.into(),
        }
    }

    /// Link type.
    #[must_use]
    pub fn link_type(&self) -> &str {
        &self.link_type
    }

    /// Target URI.
    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }
}
