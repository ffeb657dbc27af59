//! Removal of insignificant whitespace around block-level elements.

use log::debug;

use crate::dom::{Document, NodeId};

/// Trim text nodes that touch a block-level boundary.
///
/// Leading whitespace goes when the nearest previous sibling element is
/// block-level, or when the node is its parent's first child and the parent is
/// block-level. Trailing whitespace is handled symmetrically with the next
/// sibling element and the last child. Text nodes left empty are detached.
/// Only ASCII whitespace is trimmed; a non-breaking space is content.
pub fn normalize_whitespace(document: &mut Document) {
    let text_nodes: Vec<NodeId> = document
        .descendants(document.root())
        .into_iter()
        .filter(|&id| document.text(id).is_some())
        .collect();

    let mut removed = 0usize;
    for id in text_nodes {
        let trim_start = touches_block_before(document, id);
        let trim_end = touches_block_after(document, id);
        if !trim_start && !trim_end {
            continue;
        }

        let Some(text) = document.text(id) else { continue };
        let trimmed = match (trim_start, trim_end) {
            (true, true) => text.trim_ascii(),
            (true, false) => text.trim_ascii_start(),
            _ => text.trim_ascii_end(),
        };

        if trimmed.is_empty() {
            document.detach(id);
            removed += 1;
        } else if trimmed.len() != text.len() {
            let trimmed = trimmed.to_string();
            document.set_text(id, trimmed);
        }
    }
    debug!("whitespace normalization removed {removed} text nodes");
}

fn touches_block_before(document: &Document, id: NodeId) -> bool {
    if let Some(previous) = document.previous_element_sibling(id) {
        return document.is_block_level(previous);
    }
    let Some(parent) = document.parent(id) else { return false };
    document.children(parent).first() == Some(&id) && document.is_block_level(parent)
}

fn touches_block_after(document: &Document, id: NodeId) -> bool {
    if let Some(next) = document.next_element_sibling(id) {
        return document.is_block_level(next);
    }
    let Some(parent) = document.parent(id) else { return false };
    document.children(parent).last() == Some(&id) && document.is_block_level(parent)
}
