//! Stack of nested block contexts.
//!
//! Every block-level rule opens a [`Block`] carrying two line prefixes: `head`
//! for the first line the block ever emits and `body` for every line after
//! that. Flushing renders the top block's buffer with the prefixes of the whole
//! stack, so a paragraph inside a quote inside a list item picks up `"  > "`
//! without any rule having to know about its ancestors.

use log::trace;

/// Name of the sentinel block at the bottom of every stack.
pub const ROOT_BLOCK: &str = "root";

/// One rendering context on the stack.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    /// Rule family that opened the block (`"li"`, `"blockquote"`, `"h2"`, ...).
    pub name: String,
    /// Prefix for the first emitted line.
    pub head: String,
    /// Prefix for every later line.
    pub body: String,
    /// Set once any flush has happened while this block was on the stack.
    pub opened: bool,
    /// Unprefixed text accumulated since the last flush.
    pub buffer: String,
}

impl Block {
    fn new(name: &str, head: &str, body: &str) -> Self {
        Self {
            name: name.to_string(),
            head: head.to_string(),
            body: body.to_string(),
            opened: false,
            buffer: String::new(),
        }
    }

    fn prefix(&self) -> &str {
        if self.opened { &self.body } else { &self.head }
    }
}

/// Ordered stack of [`Block`]s; the bottom is always the root sentinel.
#[derive(Debug, Clone)]
pub struct BlockStack {
    blocks: Vec<Block>,
}

impl Default for BlockStack {
    fn default() -> Self {
        Self::new()
    }
}

impl BlockStack {
    /// A stack holding only the root sentinel.
    #[must_use]
    pub fn new() -> Self {
        Self {
            blocks: vec![Block::new(ROOT_BLOCK, "", "")],
        }
    }

    /// Number of blocks, root included.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.blocks.len()
    }

    /// The current writing context.
    #[must_use]
    pub fn top(&self) -> Option<&Block> {
        self.blocks.last()
    }

    /// Open a new block on top of the stack.
    pub fn push(&mut self, name: &str, head: &str, body: &str) {
        trace!("push block {name} (depth {})", self.blocks.len());
        self.blocks.push(Block::new(name, head, body));
    }

    /// Append raw text to the top block's buffer.
    pub fn append(&mut self, text: &str) {
        if let Some(top) = self.blocks.last_mut() {
            top.buffer.push_str(text);
        }
    }

    /// Render the top block, pop it, and return the rendered text.
    ///
    /// Each buffered line gets the prefix built from every block on the stack,
    /// bottom to top, using `body` for opened blocks and `head` otherwise. After
    /// each line every block on the stack is marked opened, so a `head` is used
    /// for one line at most. Lines are right-trimmed of ASCII whitespace before
    /// the prefix goes on, so the prefix itself is kept intact. The result
    /// carries a trailing empty line, i.e. `"- item\n"` for a single line.
    pub fn flush(&mut self) -> String {
        let Some(top) = self.blocks.last_mut() else {
            return String::new();
        };
        trace!("flush block {} ({} bytes)", top.name, top.buffer.len());
        let buffer = std::mem::take(&mut top.buffer);

        let mut rendered = String::with_capacity(buffer.len() + 16);
        for line in buffer.split('\n') {
            let prefix: String = self.blocks.iter().map(Block::prefix).collect();
            for block in &mut self.blocks {
                block.opened = true;
            }
            rendered.push_str(&prefix);
            rendered.push_str(line.trim_ascii_end());
            rendered.push('\n');
        }
        self.blocks.pop();
        rendered
    }

    /// Commit pending inline text before a nested block starts writing.
    ///
    /// The top block is flushed and replaced by a fresh, already-opened copy
    /// with the same name and prefixes. Returns the rendered text of the
    /// flushed block.
    pub fn split(&mut self) -> String {
        let Some(top) = self.blocks.last() else {
            return String::new();
        };
        trace!("split block {}", top.name);
        let mut replacement = Block::new(&top.name, &top.head, &top.body);
        let rendered = self.flush();
        replacement.opened = true;
        self.blocks.push(replacement);
        rendered
    }

    /// Whether the top block has pending text.
    #[must_use]
    pub fn has_pending_text(&self) -> bool {
        self.blocks.last().is_some_and(|top| !top.buffer.is_empty())
    }

    /// Nearest block (from the top down) whose name is in `names`.
    #[must_use]
    pub fn nearest(&self, names: &[&str]) -> Option<&Block> {
        self.blocks.iter().rev().find(|block| names.contains(&block.name.as_str()))
    }

    /// Whether any block on the stack is named `name`.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.blocks.iter().any(|block| block.name == name)
    }
}
