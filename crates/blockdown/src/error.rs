//! Error types for HTML to Markdown conversion.

use thiserror::Error;

/// Result type for conversion operations.
pub type Result<T> = std::result::Result<T, ConversionError>;

/// Errors that can occur while turning HTML into Markdown.
///
/// Only the parsing stage can fail. Converting an already-built
/// [`Document`](crate::dom::Document) never does: missing or malformed
/// attributes degrade to empty strings and unknown tags pass through.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum ConversionError {
    /// HTML could not be parsed, even after html5ever repair.
    #[error("HTML parsing error: {0}")]
    ParseError(String),
}
