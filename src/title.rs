//! Localized titles of standards documents.
//!
//! ISO titles are composed of up to three parts: an introductory element, the
//! main element and a part element, written joined by ` -- `:
//!
//! ```text
//! Geographic information -- Metadata -- Part 1: Fundamentals
//! ```

use std::fmt;

/// Placeholder for a title whose main element is missing.
pub const EMPTY_TITLE_PLACEHOLDER: &str = "[ -- ]";

const SEPARATOR: &str = " -- ";

/// A title in one language and script.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalizedTitle {
    intro_part: Option<String>,
    main_part: String,
    part_part: Option<String>,
    language: String,
    script: String,
}

impl LocalizedTitle {
    /// Create a title from its main element.
    ///
    /// An empty main element is replaced by [`EMPTY_TITLE_PLACEHOLDER`].
    #[must_use]
    pub fn new(
        main_part: impl Into<String>,
        language: impl Into<String>,
        script: impl Into<String>,
    ) -> Self {
        let main_part = main_part.into();
        LocalizedTitle {
            intro_part: None,
            main_part: if main_part.is_empty() {
                EMPTY_TITLE_PLACEHOLDER.to_string()
            } else {
                main_part
            },
            part_part: None,
            language: language.into(),
            script: script.into(),
        }
    }

    /// Set the introductory element.
    #[must_use]
    pub fn with_intro(mut self, intro: impl Into<String>) -> Self {
        self.intro_part = Some(intro.into());
        self
    }

    /// Set the part element.
    #[must_use]
    pub fn with_part(mut self, part: impl Into<String>) -> Self {
        self.part_part = Some(part.into());
        self
    }

    /// Introductory element.
    #[must_use]
    pub fn intro_part(&self) -> Option<&str> {
        self.intro_part.as_deref()
    }

    /// Main element.
    #[must_use]
    pub fn main_part(&self) -> &str {
        &self.main_part
    }

    /// Part element.
    #[must_use]
    pub fn part_part(&self) -> Option<&str> {
        self.part_part.as_deref()
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

    /// Drop the part element.
    pub fn remove_part(&mut self) {
        self.part_part = None;
    }
}

impl fmt::Display for LocalizedTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let segments = [
            self.intro_part.as_deref(),
            Some(self.main_part.as_str()),
            self.part_part.as_deref(),
        ];
        let mut first = true;
        for segment in segments.into_iter().flatten().filter(|s| !s.is_empty()) {
            if !first {
                f.write_str(SEPARATOR)?;
            }
            f.write_str(segment)?;
            first = false;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_title() {
        let title = LocalizedTitle::new("Metadata", "en", "Latn")
            .with_intro("Geographic information")
            .with_part("Part 1: Fundamentals");
        assert_eq!(
            title.to_string(),
            "Geographic information -- Metadata -- Part 1: Fundamentals"
        );
    }

    #[test]
    fn test_empty_segments_are_skipped() {
        let title = LocalizedTitle::new("Metadata", "en", "Latn")
            .with_intro("")
            .with_part("Part 1: Fundamentals");
        assert_eq!(title.to_string(), "Metadata -- Part 1: Fundamentals");
    }

    #[test]
    fn test_empty_main_part_uses_placeholder() {
        let title = LocalizedTitle::new("", "en", "Latn");
        assert_eq!(title.main_part(), "[ -- ]");
        assert_eq!(title.to_string(), "[ -- ]");
    }

    #[test]
    fn test_remove_part() {
        let mut title = LocalizedTitle::new("Metadata", "en", "Latn").with_part("Part 1");
        title.remove_part();
        assert_eq!(title.part_part(), None);
        assert_eq!(title.to_string(), "Metadata");
    }
}
