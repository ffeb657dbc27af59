//! Building a [`Document`] from HTML source.
//!
//! `tl` does the parsing. It is fast but does not apply the HTML5 tree
//! construction rules, so input it rejects, or input where it leaves block
//! elements nested inside inline ones, is first normalized by html5ever and
//! then parsed again.

use log::debug;

use super::{Document, NodeId, NodeKind, is_inline_name};
use crate::error::{ConversionError, Result};

impl Document {
    /// Parse an HTML string into a document tree.
    ///
    /// Comments and `<!...>` declarations are dropped. Text and attribute values
    /// are entity-decoded.
    ///
    /// # Errors
    ///
    /// Returns [`ConversionError::ParseError`] if neither `tl` nor the html5ever
    /// repaired markup can be parsed.
    pub fn parse(html: &str) -> Result<Self> {
        let document = if let Some(document) = parse_with_tl(html) {
            document
        } else {
            debug!("tl rejected input, repairing with html5ever");
            let repaired = repair_with_html5ever(html)
                .ok_or_else(|| ConversionError::ParseError("Failed to parse HTML".to_string()))?;
            parse_with_tl(&repaired)
                .ok_or_else(|| ConversionError::ParseError("Failed to parse repaired HTML".to_string()))?
        };

        if has_inline_block_misnest(&document) {
            debug!("block element nested in inline ancestor, repairing with html5ever");
            if let Some(repaired) = repair_with_html5ever(html).and_then(|markup| parse_with_tl(&markup)) {
                return Ok(repaired);
            }
        }

        Ok(document)
    }
}

fn parse_with_tl(html: &str) -> Option<Document> {
    let dom = tl::parse(html, tl::ParserOptions::default()).ok()?;
    let parser = dom.parser();
    let mut document = Document::new();
    let root = document.root();
    for child_handle in dom.children() {
        append_tl_node(&mut document, root, *child_handle, parser);
    }
    Some(document)
}

fn append_tl_node(document: &mut Document, parent: NodeId, node_handle: tl::NodeHandle, parser: &tl::Parser) {
    let Some(node) = node_handle.get(parser) else { return };

    match node {
        tl::Node::Raw(bytes) => {
            let raw = bytes.as_utf8_str();
            if raw.is_empty() {
                return;
            }
            let decoded = html_escape::decode_html_entities(&raw);
            document.append_text(parent, decoded.into_owned());
        }
        tl::Node::Tag(tag) => {
            let name = tag.name().as_utf8_str();
            if name.starts_with('!') || name.is_empty() {
                return;
            }
            let mut attributes: Vec<(String, String)> = tag
                .attributes()
                .iter()
                .map(|(key, value)| {
                    let value = value
                        .map(|val| html_escape::decode_html_entities(&val).into_owned())
                        .unwrap_or_default();
                    (key.to_ascii_lowercase(), value)
                })
                .collect();
            // tl keeps `id` and `class` outside the generic attribute map
            for key in ["id", "class"] {
                if attributes.iter().any(|(name, _)| name == key) {
                    continue;
                }
                if let Some(Some(value)) = tag.attributes().get(key) {
                    let decoded = html_escape::decode_html_entities(&value.as_utf8_str()).into_owned();
                    attributes.push((key.to_string(), decoded));
                }
            }
            let id = document.append_element(parent, &*name, attributes);
            let children = tag.children();
            for child_handle in children.top().iter() {
                append_tl_node(document, id, *child_handle, parser);
            }
        }
        tl::Node::Comment(_) => {}
    }
}

/// Check if an inline ancestor element is allowed to contain block-level elements.
fn inline_ancestor_allows_block(tag_name: &str) -> bool {
    matches!(tag_name, "a" | "ins" | "del")
}

/// Detect block elements that were incorrectly nested under inline ancestors.
///
/// Elements inside `<pre>` or `<code>` are left alone.
fn has_inline_block_misnest(document: &Document) -> bool {
    for id in document.descendants(document.root()) {
        let NodeKind::Element { .. } = document.kind(id) else {
            continue;
        };
        if !document.is_block_level(id) {
            continue;
        }

        let mut inside_preformatted = false;
        let mut inline_parent = false;
        let mut current = document.parent(id);
        while let Some(ancestor) = current {
            if let Some(name) = document.tag_name(ancestor) {
                if matches!(name, "pre" | "code") {
                    inside_preformatted = true;
                    break;
                }
                if is_inline_name(name) && !inline_ancestor_allows_block(name) {
                    inline_parent = true;
                }
            }
            current = document.parent(ancestor);
        }

        if inline_parent && !inside_preformatted {
            return true;
        }
    }

    false
}

/// Try to repair HTML using html5ever parser.
///
/// Returns Some(repaired_html) if repair was successful, None otherwise.
fn repair_with_html5ever(input: &str) -> Option<String> {
    use html5ever::serialize::{SerializeOpts, serialize};
    use html5ever::tendril::TendrilSink;
    use markup5ever_rcdom::{RcDom, SerializableHandle};

    let dom = html5ever::parse_document(RcDom::default(), Default::default())
        .from_utf8()
        .read_from(&mut input.as_bytes())
        .ok()?;

    let mut buf = Vec::with_capacity(input.len());
    let handle = SerializableHandle::from(dom.document);
    serialize(&mut buf, &handle, SerializeOpts::default()).ok()?;
    String::from_utf8(buf).ok()
}
