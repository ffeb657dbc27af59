//! End-to-end conversion tests from HTML source to Markdown.

use blockdown::{ConversionOptions, convert};
use pretty_assertions::assert_eq;

fn md(html: &str) -> String {
    convert(html, None).unwrap()
}

#[test]
fn test_heading_then_paragraph() {
    assert_eq!(md("<h1>Title</h1><p>Hello <strong>world</strong></p>"), "# Title\n\nHello **world**");
}

#[test]
fn test_heading_levels() {
    assert_eq!(md("<h3>Three</h3>"), "### Three");
    assert_eq!(md("<h6>Six</h6>"), "###### Six");
}

#[test]
fn test_unordered_list() {
    assert_eq!(md("<ul><li>One</li><li>Two</li></ul>"), "- One\n- Two");
}

#[test]
fn test_ordered_list_always_uses_one() {
    assert_eq!(md("<ol><li>One</li><li>Two</li><li>Three</li></ol>"), "1. One\n1. Two\n1. Three");
}

#[test]
fn test_menu_uses_bullets() {
    assert_eq!(md("<menu><li>Open</li></menu>"), "- Open");
}

#[test]
fn test_list_item_without_list_uses_bullet() {
    assert_eq!(md("<li>Orphan</li>"), "- Orphan");
}

#[test]
fn test_formatted_source_whitespace_is_ignored() {
    let html = "<ul>\n  <li>One</li>\n  <li>Two</li>\n</ul>\n";
    assert_eq!(md(html), "- One\n- Two");
}

#[test]
fn test_nested_list() {
    let html = "<ul><li>A<ul><li>B</li></ul></li><li>C</li></ul>";
    assert_eq!(md(html), "- A\n  - B\n  \n  \n- C");
}

#[test]
fn test_nested_list_under_ordered_item() {
    assert_eq!(md("<ol><li>A<ul><li>B</li></ul></li></ol>"), "1. A\n  - B");
}

#[test]
fn test_blockquote() {
    assert_eq!(md("<blockquote>Quote</blockquote>"), "> Quote");
}

#[test]
fn test_blockquote_inside_list_item_after_text() {
    let html = "<ul><li>Item<blockquote>Quote</blockquote></li></ul>";
    assert_eq!(md(html), "- Item\n  > Quote");
}

#[test]
fn test_blockquote_as_first_content_of_list_item() {
    assert_eq!(md("<ul><li><blockquote>Quote</blockquote></li></ul>"), "- > Quote");
}

#[test]
fn test_loose_list_item_paragraphs() {
    let html = "<ul><li><p>A</p><p>B</p></li></ul>";
    assert_eq!(md(html), "- A\n\n  B");
}

#[test]
fn test_div_split_around_nested_block() {
    assert_eq!(md("<div>outer<div>inner</div>tail</div>"), "outer\ninner\n\ntail");
}

#[test]
fn test_fenced_code_with_language() {
    let markdown = md(r#"<pre><code class="lang-go">fmt.Println()</code></pre>"#);
    assert!(markdown.starts_with("```go\n"), "{markdown}");
    assert_eq!(markdown, "```go\nfmt.Println()\n```");
}

#[test]
fn test_fenced_code_without_language() {
    assert_eq!(md("<pre><code>x = 1</code></pre>"), "```\nx = 1\n```");
    assert_eq!(md(r#"<pre><code class="highlight">y</code></pre>"#), "```\ny\n```");
}

#[test]
fn test_inline_code_and_teletype() {
    assert_eq!(md("<p>Use <code>cargo</code> or <tt>make</tt></p>"), "Use `cargo` or `make`");
}

#[test]
fn test_emphasis_delimiters() {
    assert_eq!(md("<p><em>soft</em> and <i>also</i></p>"), "*soft* and *also*");
    assert_eq!(md("<p><b>bold</b></p>"), "**bold**");
}

#[test]
fn test_emphasis_delimiter_escaping() {
    assert_eq!(md("<p><em>a*b</em></p>"), "_a*b_");
    assert_eq!(md("<p><strong>a*b</strong></p>"), "__a*b__");
}

#[test]
fn test_links() {
    assert_eq!(
        md(r#"<p><a href="https://example.com">Example</a> site</p>"#),
        "[Example](https://example.com) site"
    );
    assert_eq!(md("<p><a>bare</a></p>"), "[bare]()");
}

#[test]
fn test_images() {
    assert_eq!(md(r#"<p><img src="x.png" alt="X"></p>"#), "![X](x.png)");
    assert_eq!(md(r#"<p><img src="y.png" title="T"></p>"#), "![T](y.png)");
    assert_eq!(md(r#"<p><img src="y.png" alt="  " title="T"></p>"#), "![T](y.png)");
    assert_eq!(md(r#"<p><img src="z.png"></p>"#), "![](z.png)");
}

#[test]
fn test_keep_img_tags_option() {
    let options = ConversionOptions::default().with_keep_img_tags(true);
    let markdown = convert(r#"<p>See <img src="x.png"></p>"#, Some(options.clone())).unwrap();
    assert_eq!(markdown, r#"See <img src="x.png">"#);

    let markdown = convert(r#"<p><img src="x.png" alt="A &amp; B"></p>"#, Some(options)).unwrap();
    assert!(markdown.starts_with("<img "), "{markdown}");
    assert!(markdown.contains(r#"src="x.png""#), "{markdown}");
    assert!(markdown.contains(r#"alt="A &amp; B""#), "{markdown}");
    assert!(!markdown.contains("!["), "{markdown}");
}

#[test]
fn test_raw_inline_tags_are_preserved() {
    assert_eq!(md("<p>H<sub>2</sub>O <del>old</del></p>"), "H<sub>2</sub>O <del>old</del>");
    assert_eq!(md("<p>Press <kbd>Ctrl</kbd></p>"), "Press <kbd>Ctrl</kbd>");
}

#[test]
fn test_abbr() {
    assert_eq!(
        md(r#"<p><abbr title="HyperText Markup Language">HTML</abbr></p>"#),
        r#"<abbr title="HyperText Markup Language">HTML</abbr>"#
    );
    assert_eq!(md("<p><abbr>CSS</abbr></p>"), "<abbr>CSS</abbr>");
    assert_eq!(md(r#"<p><abbr title=" ">JS</abbr></p>"#), "<abbr>JS</abbr>");
}

#[test]
fn test_line_break() {
    assert_eq!(md("<p>a<br>b</p>"), "a\nb");
    assert_eq!(md("<ul><li>a<br>b</li></ul>"), "- a\n  b");
}

#[test]
fn test_line_break_at_end_of_block() {
    assert_eq!(md("<p>a<br></p><p>b</p>"), "a\n\nb");
    assert_eq!(md("<ul><li>a<br></li><li>b</li></ul>"), "- a\n  \n- b");
}

#[test]
fn test_empty_lines_keep_their_prefix() {
    assert_eq!(md("<blockquote>a<br><br>b</blockquote>"), "> a\n> \n> b");
    assert_eq!(md("<ul><li></li><li>x</li></ul>"), "- \n- x");
}

#[test]
fn test_non_breaking_spaces_are_content() {
    assert_eq!(
        md("<p>a&nbsp;&nbsp;b</p><p>&nbsp;</p><p>c</p>"),
        "a\u{a0}\u{a0}b\n\n\u{a0}\n\nc"
    );
}

#[test]
fn test_horizontal_rule() {
    assert_eq!(md("<p>a</p><hr><p>b</p>"), "a\n\n---\n\nb");
}

#[test]
fn test_blacklisted_subtree_produces_nothing() {
    assert_eq!(md("<form><input></form>"), "");
    assert_eq!(md("<p>Before</p><form><label>Name</label><input></form><p>After</p>"), "Before\n\nAfter");
    assert_eq!(md("<p>Hi<script>alert(1)</script></p>"), "Hi");
    assert_eq!(md("<style>p { color: red }</style><p>Styled</p>"), "Styled");
}

#[test]
fn test_document_metadata_is_dropped() {
    let html = "<html><head><title>T</title></head><body><p>Body</p></body></html>";
    assert_eq!(md(html), "Body");
}

#[test]
fn test_unknown_tags_are_transparent() {
    assert_eq!(md("<p><span>in</span> <custom-tag>side</custom-tag></p>"), "in side");
}

#[test]
fn test_block_nested_in_inline_is_repaired() {
    assert_eq!(md("<span><div>x</div></span>"), "x");
}

#[test]
fn test_whitespace_runs_collapse() {
    assert_eq!(md("<p>lots   of\n\n  space</p>"), "lots of space");
}

#[test]
fn test_entities_are_decoded() {
    assert_eq!(md("<p>Tom &amp; Jerry &lt;3</p>"), "Tom & Jerry <3");
}

#[test]
fn test_empty_input() {
    assert_eq!(md(""), "");
    assert_eq!(md("   \n  "), "");
}

#[test]
fn test_output_never_has_three_newlines() {
    let html = r#"
        <div>
            <h2>Section</h2>
            <p>Intro <em>text</em></p>
            <hr>
            <ul>
                <li>One<blockquote><p>Q1</p><p>Q2</p></blockquote></li>
                <li>Two<ol><li>Deep<br><br><br>er</li></ol></li>
            </ul>
            <pre><code class="lang-sh">ls</code></pre>
        </div>
    "#;
    let markdown = md(html);
    assert!(!markdown.contains("\n\n\n"), "{markdown:?}");
    assert_eq!(markdown, markdown.trim());
}

#[test]
fn test_conversions_are_independent() {
    let html = "<ul><li>One</li></ul>";
    assert_eq!(md(html), md(html));
}
