//! Mapping from tag names to conversion rules.

/// How an element is converted. One variant per rule family.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagRule {
    /// Form controls, scripts and styles: nothing is emitted, children are skipped.
    Blacklisted,
    /// `head` and `title`: document metadata, dropped like blacklisted tags.
    Metadata,
    /// `pre`: fenced code block.
    Preformatted,
    /// `blockquote`: every line quoted with `> `.
    Blockquote,
    /// `div`, `p`: a block followed by a blank line.
    Paragraph,
    /// `menu`, `ol`, `ul`: list container.
    List,
    /// `li`: bullet or `1.` marker, two-space continuation indent.
    ListItem,
    /// `h1`..`h6` with the level.
    Heading(u8),
    /// Inline tags without Markdown syntax, emitted as raw tags.
    RawInline,
    /// `abbr`: raw tag keeping only the `title` attribute.
    Abbreviation,
    /// `img`.
    Image,
    /// `a`.
    Link,
    /// `tt`: backtick code span.
    Teletype,
    /// `code`: plain inside `pre`, otherwise a code span.
    Code,
    /// `br`: in-block line break.
    LineBreak,
    /// `hr`: thematic break.
    HorizontalRule,
    /// `strong`, `b`.
    Strong,
    /// `em`, `i`.
    Emphasis,
    /// Anything else: children are converted, nothing is added.
    Transparent,
}

impl TagRule {
    /// Resolve the rule for a lowercased tag name.
    #[must_use]
    pub fn for_tag(tag_name: &str) -> Self {
        match tag_name {
            "button" | "datalist" | "fieldset" | "form" | "input" | "label" | "legend" | "meter" | "optgroup"
            | "option" | "output" | "progress" | "select" | "textarea" | "style" | "script" => Self::Blacklisted,
            "head" | "title" => Self::Metadata,
            "pre" => Self::Preformatted,
            "blockquote" => Self::Blockquote,
            "div" | "p" => Self::Paragraph,
            "menu" | "ol" | "ul" => Self::List,
            "li" => Self::ListItem,
            "h1" => Self::Heading(1),
            "h2" => Self::Heading(2),
            "h3" => Self::Heading(3),
            "h4" => Self::Heading(4),
            "h5" => Self::Heading(5),
            "h6" => Self::Heading(6),
            "del" | "ins" | "kbd" | "s" | "small" | "strike" | "sub" | "sup" => Self::RawInline,
            "abbr" => Self::Abbreviation,
            "img" => Self::Image,
            "a" => Self::Link,
            "tt" => Self::Teletype,
            "code" => Self::Code,
            "br" => Self::LineBreak,
            "hr" => Self::HorizontalRule,
            "strong" | "b" => Self::Strong,
            "em" | "i" => Self::Emphasis,
            _ => Self::Transparent,
        }
    }
}

/// Delimiter for bold text; `__` when the content already holds an asterisk.
#[must_use]
pub fn strong_delimiter(content: &str) -> &'static str {
    if content.contains('*') { "__" } else { "**" }
}

/// Delimiter for italic text; `_` when the content already holds an asterisk.
#[must_use]
pub fn emphasis_delimiter(content: &str) -> &'static str {
    if content.contains('*') { "_" } else { "*" }
}

/// `#` repeated `level` times followed by a space.
#[must_use]
pub fn heading_prefix(level: u8) -> String {
    let mut prefix = "#".repeat(usize::from(level));
    prefix.push(' ');
    prefix
}
