//! Text processing utilities for Markdown output.

use once_cell::sync::Lazy;
use regex::Regex;
use std::borrow::Cow;

static WHITESPACE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"[ \t\n\r\x0C]{2,}").expect("valid regex pattern"));
static BLANK_LINE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n{3,}").expect("valid regex pattern"));
static LANG_CLASS: Lazy<Regex> = Lazy::new(|| Regex::new(r"lang-(\w+)").expect("valid regex pattern"));

/// Collapse every run of two or more ASCII whitespace characters into one space.
///
/// Non-breaking spaces are not whitespace here and are kept as written.
/// A lone newline is left alone; it becomes a line break within the block.
pub fn collapse_whitespace(text: &str) -> Cow<'_, str> {
    WHITESPACE_RUN.replace_all(text, " ")
}

/// Cap blank-line runs: three or more consecutive newlines become two.
pub fn collapse_blank_lines(text: &str) -> Cow<'_, str> {
    BLANK_LINE_RUN.replace_all(text, "\n\n")
}

/// Extract the code language from a `class` attribute (`lang-rust` gives `rust`).
pub fn language_from_class(class: &str) -> &str {
    LANG_CLASS
        .captures(class)
        .and_then(|caps| caps.get(1))
        .map_or("", |m| m.as_str())
}
