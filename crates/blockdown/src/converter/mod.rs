//! HTML to Markdown conversion engine.
//!
//! The pipeline runs in three steps: whitespace normalization over the tree,
//! a depth-first walk that dispatches each element to its [`TagRule`], and
//! final assembly of the rendered blocks. Output is produced through a
//! [`BlockStack`], which owns all line-prefix bookkeeping.

pub mod block;
mod main;
pub mod rules;
pub mod whitespace;

pub use block::{Block, BlockStack};
pub use main::{convert_document, convert_html};
pub use rules::TagRule;
pub use whitespace::normalize_whitespace;
