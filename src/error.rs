//! Error types for bibliographic item operations.
//!
//! This module provides the [`BibError`] type for all library operations
//! and the [`Result`] convenience type.

use thiserror::Error;

/// Error type for all bibliographic item operations.
///
/// Represents the conditions that can occur while building a record from
/// input, deriving related records, or rendering a record to XML.
#[derive(Error, Debug)]
pub enum BibError {
    /// A caller supplied arguments that cannot describe a valid value.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// A required part of a record was not supplied.
    #[error("Missing field: {0}")]
    MissingField(String),

    /// A derivation was applied a second time to the same record.
    #[error("Transformation already applied: {0}")]
    AlreadyTransformed(String),

    /// Error raised by the XML writer.
    #[error("XML error: {0}")]
    Xml(#[from] quick_xml::Error),

    /// Error while decoding structured JSON input.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Rendered output was not valid UTF-8.
    #[error("Encoding error: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    /// IO error from the underlying destination.
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Convenience type alias for [`std::result::Result`] with [`BibError`].
pub type Result<T> = std::result::Result<T, BibError>;
