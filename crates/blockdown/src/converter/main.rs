//! Main conversion pipeline for HTML to Markdown.
//!
//! This module implements the core conversion functions and the recursive tree walker
//! that transforms document nodes into Markdown output.

use log::debug;

use crate::converter::block::BlockStack;
use crate::converter::rules::{TagRule, emphasis_delimiter, heading_prefix, strong_delimiter};
use crate::converter::whitespace::normalize_whitespace;
use crate::dom::{Document, NodeId, NodeKind};
use crate::error::Result;
use crate::options::ConversionOptions;
use crate::text::{collapse_blank_lines, collapse_whitespace, language_from_class};

const LIST_BLOCKS: [&str; 3] = ["ul", "ol", "menu"];

/// Converts HTML to Markdown using the provided conversion options.
///
/// This is the main entry point for HTML to Markdown conversion.
///
/// # Errors
///
/// Returns [`ConversionError::ParseError`](crate::ConversionError::ParseError)
/// if the HTML cannot be parsed.
pub fn convert_html(html: &str, options: &ConversionOptions) -> Result<String> {
    let document = Document::parse(html)?;
    Ok(convert_document(document, options))
}

/// Converts an already-built document tree to Markdown.
///
/// Whitespace next to block-level elements is normalized in the tree first.
/// This never fails: missing attributes become empty strings and unknown tags
/// are converted as plain containers.
#[must_use]
pub fn convert_document(mut document: Document, options: &ConversionOptions) -> String {
    normalize_whitespace(&mut document);

    let mut converter = Converter::new(&document, options);
    converter.walk_node(document.root());
    let markdown = converter.finish();
    debug!("converted document to {} bytes of markdown", markdown.len());
    markdown
}

/// Traversal state for one conversion call.
struct Converter<'a> {
    document: &'a Document,
    options: &'a ConversionOptions,
    stack: BlockStack,
    output: String,
}

impl<'a> Converter<'a> {
    fn new(document: &'a Document, options: &'a ConversionOptions) -> Self {
        Self {
            document,
            options,
            stack: BlockStack::new(),
            output: String::new(),
        }
    }

    /// Flush the root block and tidy blank lines and edges.
    fn finish(mut self) -> String {
        debug_assert_eq!(self.stack.depth(), 1, "only the root block may remain");
        let rendered = self.stack.flush();
        self.output.push_str(&rendered);
        collapse_blank_lines(&self.output).trim_ascii().to_string()
    }

    fn flush_block(&mut self) {
        let rendered = self.stack.flush();
        self.output.push_str(&rendered);
    }

    /// A block-level node inside a block-level parent must not start while the
    /// current block still holds inline text, or that text would come out
    /// after the nested block.
    fn split_before(&mut self, id: NodeId) {
        let document = self.document;
        let nested_block = document.is_block_level(id)
            && document
                .parent(id)
                .is_some_and(|parent| document.is_block_level(parent));
        if nested_block && self.stack.has_pending_text() {
            let rendered = self.stack.split();
            self.output.push_str(&rendered);
        }
    }

    fn walk_node(&mut self, id: NodeId) {
        self.split_before(id);

        let document = self.document;
        match document.kind(id) {
            NodeKind::Text(text) => self.stack.append(&collapse_whitespace(text)),
            NodeKind::Document => self.walk_children(id),
            NodeKind::Element { tag, .. } => self.walk_element(id, tag),
        }
    }

    fn walk_children(&mut self, id: NodeId) {
        let document = self.document;
        for &child in document.children(id) {
            self.walk_node(child);
        }
    }

    fn walk_block(&mut self, id: NodeId, name: &str, head: &str, body: &str) {
        self.stack.push(name, head, body);
        self.walk_children(id);
        self.flush_block();
    }

    fn walk_wrapped(&mut self, id: NodeId, open: &str, close: &str) {
        self.stack.append(open);
        self.walk_children(id);
        self.stack.append(close);
    }

    fn walk_element(&mut self, id: NodeId, tag: &str) {
        let document = self.document;

        match TagRule::for_tag(tag) {
            TagRule::Blacklisted | TagRule::Metadata => {}

            TagRule::Preformatted => {
                let language = document
                    .children(id)
                    .iter()
                    .copied()
                    .find(|&child| document.tag_name(child) == Some("code"))
                    .and_then(|code| document.attr(code, "class"))
                    .map_or("", language_from_class);

                self.output.push_str("```");
                self.output.push_str(language);
                self.output.push('\n');
                self.walk_block(id, "pre", "", "");
                self.output.push_str("```\n");
            }

            TagRule::Blockquote => self.walk_block(id, "blockquote", "> ", "> "),

            TagRule::Paragraph => {
                self.walk_block(id, tag, "", "");
                self.output.push('\n');
            }

            TagRule::List => self.walk_block(id, tag, "", ""),

            TagRule::ListItem => {
                let marker = match self.stack.nearest(&LIST_BLOCKS) {
                    Some(list) if list.name == "ol" => "1. ",
                    _ => "- ",
                };
                self.walk_block(id, "li", marker, "  ");
            }

            TagRule::Heading(level) => {
                let name = format!("h{level}");
                self.walk_block(id, &name, &heading_prefix(level), "");
                self.output.push('\n');
            }

            TagRule::RawInline => {
                let open = format!("<{tag}>");
                let close = format!("</{tag}>");
                self.walk_wrapped(id, &open, &close);
            }

            TagRule::Abbreviation => {
                let open = match document.attr(id, "title").filter(|title| !title.trim().is_empty()) {
                    Some(title) => format!(
                        "<abbr title=\"{}\">",
                        html_escape::encode_double_quoted_attribute(title)
                    ),
                    None => "<abbr>".to_string(),
                };
                self.walk_wrapped(id, &open, "</abbr>");
            }

            TagRule::Image => {
                if self.options.keep_img_tags {
                    let markup = document.serialize_start_tag(id);
                    self.stack.append(&markup);
                } else {
                    let non_blank = |name: &str| document.attr(id, name).filter(|value| !value.trim().is_empty());
                    let title = non_blank("alt").or_else(|| non_blank("title")).unwrap_or("");
                    let src = document.attr(id, "src").unwrap_or("");
                    self.stack.append(&format!("![{title}]({src})"));
                }
            }

            TagRule::Link => {
                let close = format!("]({})", document.attr(id, "href").unwrap_or(""));
                self.walk_wrapped(id, "[", &close);
            }

            TagRule::Code if self.stack.contains("pre") => self.walk_children(id),

            TagRule::Teletype | TagRule::Code => self.walk_wrapped(id, "`", "`"),

            TagRule::LineBreak => self.stack.append("\n"),

            TagRule::HorizontalRule => self.stack.append("\n\n---\n\n"),

            TagRule::Strong => {
                let delimiter = strong_delimiter(&document.text_content(id));
                self.walk_wrapped(id, delimiter, delimiter);
            }

            TagRule::Emphasis => {
                let delimiter = emphasis_delimiter(&document.text_content(id));
                self.walk_wrapped(id, delimiter, delimiter);
            }

            TagRule::Transparent => self.walk_children(id),
        }
    }
}
