//! Document status in the ISO harmonized stage code system.

/// Status of a document, optionally with its harmonized stage code.
///
/// A stage such as `60` with substage `60` identifies a published
/// International Standard; the free-form status text is used when no stage
/// is known.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentStatus {
    status: String,
    stage: Option<String>,
    substage: Option<String>,
}

impl DocumentStatus {
    /// Create a status from its text.
    #[must_use]
    pub fn new(status: impl Into<String>) -> Self {
        DocumentStatus {
            status: status.into(),
            stage: None,
            substage: None,
        }
    }

    /// Set the stage code.
    #[must_use]
    pub fn with_stage(mut self, stage: impl Into<String>) -> Self {
        self.stage = Some(stage.into());
        self
    }

    /// Set the substage code.
    #[must_use]
    pub fn with_substage(mut self, substage: impl Into<String>) -> Self {
        self.substage = Some(substage.into());
        self
    }

    /// Status text.
    #[must_use]
    pub fn status(&self) -> &str {
        &self.status
    }

    /// Stage code, ignoring blank values.
    #[must_use]
    pub fn stage(&self) -> Option<&str> {
        self.stage.as_deref().filter(|s| !s.is_empty())
    }

    /// Substage code, ignoring blank values.
    #[must_use]
    pub fn substage(&self) -> Option<&str> {
        self.substage.as_deref().filter(|s| !s.is_empty())
    }
}

impl From<&str> for DocumentStatus {
    fn from(status: &str) -> Self {
        Self::new(status)
    }
}
