//! Conversion of HTML documents into Markdown text.
//!
//! Block structure (paragraphs, headings, lists, blockquotes, code fences) and
//! inline emphasis (bold, italic, links, images, inline code) are preserved;
//! form controls, scripts and styles are dropped.
//!
//! Rendering is driven by a stack of nested blocks. Each block knows the
//! prefix for its first line (a list bullet, a heading marker) and for every
//! later line (an indent, a quote marker), so arbitrarily deep nesting such as a
//! quote inside a list item inside another list comes out correctly indented.
//!
//! # Example
//!
//! ```
//! use blockdown::{ConversionOptions, convert};
//!
//! let markdown = convert("<h1>Title</h1><p>Hello <strong>world</strong></p>", None).unwrap();
//! assert_eq!(markdown, "# Title\n\nHello **world**");
//!
//! let options = ConversionOptions::default().with_keep_img_tags(true);
//! let markdown = convert(r#"<p><img src="a.png"></p>"#, Some(options)).unwrap();
//! assert_eq!(markdown, r#"<img src="a.png">"#);
//! ```

pub mod converter;
pub mod dom;
pub mod error;
pub mod options;
pub mod text;

pub use converter::{convert_document, convert_html};
pub use dom::{Document, NodeId, NodeKind};
pub use error::{ConversionError, Result};
pub use options::ConversionOptions;

/// Convert HTML to Markdown.
///
/// `None` uses [`ConversionOptions::default`].
///
/// # Errors
///
/// Returns [`ConversionError::ParseError`] if the HTML cannot be parsed.
pub fn convert(html: &str, options: Option<ConversionOptions>) -> Result<String> {
    let options = options.unwrap_or_default();
    convert_html(html, &options)
}
