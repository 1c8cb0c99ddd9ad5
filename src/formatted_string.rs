//! Language-scoped formatted text, used for abstracts.

/// A text in one language and script, tagged with its MIME format.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormattedString {
    content: String,
    language: String,
    script: String,
    format: String,
}

impl FormattedString {
    /// Create a plain-text string.
    #[must_use]
    pub fn new(
        content: impl Into<String>,
        language: impl Into<String>,
        script: impl Into<String>,
    ) -> Self {
        FormattedString {
            content: content.into(),
            language: language.into(),
            script: script.into(),
            format: "text/plain".to_string(),
        }
    }

    /// Set the format from a short type (`plain`, `html`, ...) or a MIME type.
    #[must_use]
    pub fn with_format(mut self, format: &str) -> Self {
        self.format = mime_for(format);
        self
    }

    /// Text content.
    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }

    /// ISO 639 language code.
    #[must_use]
    pub fn language(&self) -> &str {
        &self.language
    }

    /// ISO 15924 script code.
    #[must_use]
    pub fn script(&self) -> &str {
        &self.script
    }

    /// MIME format, e.g. `text/plain`.
    #[must_use]
    pub fn format(&self) -> &str {
        &self.format
    }
}

fn mime_for(format: &str) -> String {
    if format.contains('/') {
        format.to_string()
    } else {
        format!("text/{format}")
    }
}
