//! Typed dates of a document (published, issued, ...).

/// A dated event in the life of a document.
///
/// Dates are kept as given (`2014`, `2014-04`, `2014-04-15`); only the year is
/// ever interpreted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BibliographicDate {
    date_type: String,
    from: String,
    to: Option<String>,
}

impl BibliographicDate {
    /// Create a date of the given type.
    #[must_use]
    pub fn new(date_type: impl Into<String>, from: impl Into<String>) -> Self {
        BibliographicDate {
            date_type: date_type.into(),
            from: from.into(),
            to: None,
        }
    }

    /// Set the end of a date range.
    #[must_use]
    pub fn with_to(mut self, to: impl Into<String>) -> Self {
        self.to = Some(to.into());
        self
    }

    /// Date type, e.g. `published`.
    #[must_use]
    pub fn date_type(&self) -> &str {
        &self.date_type
    }

    /// Start of the range, or the date itself.
    #[must_use]
    pub fn from(&self) -> &str {
        &self.from
    }

    /// End of the range.
    #[must_use]
    pub fn to(&self) -> Option<&str> {
        self.to.as_deref()
    }

    /// Four-digit year of [`from`](Self::from), if it starts with one.
    #[must_use]
    pub fn year(&self) -> Option<&str> {
        self.from
            .get(..4)
            .filter(|y| y.bytes().all(|b| b.is_ascii_digit()))
    }
}
