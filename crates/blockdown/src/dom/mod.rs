//! Owned HTML node tree consumed by the converter.
//!
//! The tree is an arena: every node lives in a single `Vec` and is addressed by a
//! [`NodeId`]. Parent links and sibling lookups are plain index lookups, so the
//! tree never holds reference cycles. Node 0 is always the synthetic document root.

mod parse;

use std::fmt;

/// Index of a node inside a [`Document`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(u32);

impl NodeId {
    const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Payload of a single node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeKind {
    /// The synthetic root holding the top-level nodes.
    Document,
    /// An element with a lowercased tag name and its attributes in source order.
    Element {
        /// Lowercased tag name.
        tag: String,
        /// Attribute `(name, value)` pairs; valueless attributes carry `""`.
        attributes: Vec<(String, String)>,
    },
    /// Entity-decoded character data.
    Text(String),
}

#[derive(Debug, Clone)]
struct NodeData {
    kind: NodeKind,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

/// An HTML document tree.
#[derive(Debug, Clone)]
pub struct Document {
    nodes: Vec<NodeData>,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    /// Create a document holding only the root node.
    #[must_use]
    pub fn new() -> Self {
        Self {
            nodes: vec![NodeData {
                kind: NodeKind::Document,
                parent: None,
                children: Vec::new(),
            }],
        }
    }

    /// The synthetic document root.
    #[must_use]
    pub const fn root(&self) -> NodeId {
        NodeId(0)
    }

    fn push_node(&mut self, parent: NodeId, kind: NodeKind) -> NodeId {
        let id = NodeId(u32::try_from(self.nodes.len()).unwrap_or(u32::MAX));
        self.nodes.push(NodeData {
            kind,
            parent: Some(parent),
            children: Vec::new(),
        });
        self.nodes[parent.index()].children.push(id);
        id
    }

    /// Append an element as the last child of `parent`.
    ///
    /// The tag name is lowercased.
    pub fn append_element<K, V>(
        &mut self,
        parent: NodeId,
        tag: impl AsRef<str>,
        attributes: impl IntoIterator<Item = (K, V)>,
    ) -> NodeId
    where
        K: Into<String>,
        V: Into<String>,
    {
        let kind = NodeKind::Element {
            tag: tag.as_ref().to_ascii_lowercase(),
            attributes: attributes.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
        };
        self.push_node(parent, kind)
    }

    /// Append a text node as the last child of `parent`.
    pub fn append_text(&mut self, parent: NodeId, text: impl Into<String>) -> NodeId {
        self.push_node(parent, NodeKind::Text(text.into()))
    }

    /// The payload of `id`.
    #[must_use]
    pub fn kind(&self, id: NodeId) -> &NodeKind {
        &self.nodes[id.index()].kind
    }

    /// Tag name of an element node.
    #[must_use]
    pub fn tag_name(&self, id: NodeId) -> Option<&str> {
        match self.kind(id) {
            NodeKind::Element { tag, .. } => Some(tag.as_str()),
            _ => None,
        }
    }

    /// Character data of a text node.
    #[must_use]
    pub fn text(&self, id: NodeId) -> Option<&str> {
        match self.kind(id) {
            NodeKind::Text(text) => Some(text.as_str()),
            _ => None,
        }
    }

    /// Value of the attribute `name` on an element, matched case-insensitively.
    #[must_use]
    pub fn attr(&self, id: NodeId, name: &str) -> Option<&str> {
        match self.kind(id) {
            NodeKind::Element { attributes, .. } => attributes
                .iter()
                .find(|(key, _)| key.eq_ignore_ascii_case(name))
                .map(|(_, value)| value.as_str()),
            _ => None,
        }
    }

    /// Ordered children of `id`.
    #[must_use]
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        &self.nodes[id.index()].children
    }

    /// Parent of `id`, `None` for the root and for detached nodes.
    #[must_use]
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.nodes[id.index()].parent
    }

    fn position_in_parent(&self, id: NodeId) -> Option<(NodeId, usize)> {
        let parent = self.parent(id)?;
        let position = self.children(parent).iter().position(|&child| child == id)?;
        Some((parent, position))
    }

    fn is_element(&self, id: NodeId) -> bool {
        matches!(self.kind(id), NodeKind::Element { .. })
    }

    /// Nearest preceding sibling that is an element.
    #[must_use]
    pub fn previous_element_sibling(&self, id: NodeId) -> Option<NodeId> {
        let (parent, position) = self.position_in_parent(id)?;
        self.children(parent)[..position]
            .iter()
            .rev()
            .copied()
            .find(|&sibling| self.is_element(sibling))
    }

    /// Nearest following sibling that is an element.
    #[must_use]
    pub fn next_element_sibling(&self, id: NodeId) -> Option<NodeId> {
        let (parent, position) = self.position_in_parent(id)?;
        self.children(parent)[position + 1..]
            .iter()
            .copied()
            .find(|&sibling| self.is_element(sibling))
    }

    /// Whether `id` occupies its own region in the rendered output.
    ///
    /// The document root counts as block-level; text never does.
    #[must_use]
    pub fn is_block_level(&self, id: NodeId) -> bool {
        match self.kind(id) {
            NodeKind::Document => true,
            NodeKind::Element { tag, .. } => is_block_level_name(tag),
            NodeKind::Text(_) => false,
        }
    }

    /// Concatenated text of every descendant text node.
    #[must_use]
    pub fn text_content(&self, id: NodeId) -> String {
        let mut text = String::new();
        self.collect_text(id, &mut text);
        text
    }

    fn collect_text(&self, id: NodeId, out: &mut String) {
        match self.kind(id) {
            NodeKind::Text(text) => out.push_str(text),
            _ => {
                for &child in self.children(id) {
                    self.collect_text(child, out);
                }
            }
        }
    }

    /// All nodes below `id` (excluding `id` itself) in document order.
    #[must_use]
    pub fn descendants(&self, id: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut stack: Vec<NodeId> = self.children(id).iter().rev().copied().collect();
        while let Some(next) = stack.pop() {
            out.push(next);
            stack.extend(self.children(next).iter().rev().copied());
        }
        out
    }

    /// Replace the character data of a text node. No-op for other nodes.
    pub fn set_text(&mut self, id: NodeId, value: impl Into<String>) {
        if let NodeKind::Text(text) = &mut self.nodes[id.index()].kind {
            *text = value.into();
        }
    }

    /// Unlink `id` from its parent. The node stays in the arena but is no
    /// longer reachable from the root.
    pub fn detach(&mut self, id: NodeId) {
        if let Some(parent) = self.nodes[id.index()].parent.take() {
            self.nodes[parent.index()].children.retain(|&child| child != id);
        }
    }

    /// Start-tag markup of an element, e.g. `<img src="a.png" alt="x">`.
    ///
    /// Attribute values are re-escaped for a double-quoted context. Returns an
    /// empty string for non-element nodes.
    #[must_use]
    pub fn serialize_start_tag(&self, id: NodeId) -> String {
        let NodeKind::Element { tag, attributes } = self.kind(id) else {
            return String::new();
        };
        let mut html = String::with_capacity(tag.len() + 2 + attributes.len() * 16);
        html.push('<');
        html.push_str(tag);
        for (name, value) in attributes {
            html.push(' ');
            html.push_str(name);
            html.push_str("=\"");
            html.push_str(&html_escape::encode_double_quoted_attribute(value));
            html.push('"');
        }
        html.push('>');
        html
    }
}

/// Whether `tag_name` names a block-level element.
///
/// Covers the HTML5 block-level elements plus `menu`, the document skeleton
/// and table structure.
#[must_use]
pub fn is_block_level_name(tag_name: &str) -> bool {
    matches!(
        tag_name,
        "address"
            | "article"
            | "aside"
            | "blockquote"
            | "details"
            | "dialog"
            | "dd"
            | "div"
            | "dl"
            | "dt"
            | "fieldset"
            | "figcaption"
            | "figure"
            | "footer"
            | "form"
            | "h1"
            | "h2"
            | "h3"
            | "h4"
            | "h5"
            | "h6"
            | "header"
            | "hgroup"
            | "hr"
            | "li"
            | "main"
            | "menu"
            | "nav"
            | "ol"
            | "p"
            | "pre"
            | "section"
            | "table"
            | "ul"
            | "html"
            | "head"
            | "body"
            | "caption"
            | "thead"
            | "tbody"
            | "tfoot"
            | "tr"
            | "td"
            | "th"
    )
}

/// Whether `tag_name` names a phrasing (inline) element.
pub(crate) fn is_inline_name(tag_name: &str) -> bool {
    matches!(
        tag_name,
        "a" | "abbr"
            | "b"
            | "bdi"
            | "bdo"
            | "br"
            | "cite"
            | "code"
            | "data"
            | "dfn"
            | "em"
            | "i"
            | "kbd"
            | "mark"
            | "q"
            | "s"
            | "samp"
            | "small"
            | "span"
            | "strike"
            | "strong"
            | "sub"
            | "sup"
            | "time"
            | "tt"
            | "u"
            | "var"
            | "del"
            | "ins"
            | "img"
            | "label"
            | "button"
            | "select"
            | "textarea"
            | "output"
    )
}
