//! Render classified blocks into HTML node trees.

use sitegen_core::Node;

use crate::block::{classify, segment, BlockType};
use crate::span::TextSpan;
use crate::tokenize::tokenize;
use crate::Result;

const FENCE_LEN: usize = 3;

/// Render a whole document under a single `div` root
pub fn render_document(markdown: &str) -> Result<Node> {
    let children = segment(markdown)
        .into_iter()
        .map(|block| render_block(block, classify(block)))
        .collect::<Result<Vec<_>>>()?;
    Ok(Node::parent("div", children)?)
}

/// Render a document straight to an HTML string
pub fn markdown_to_html(markdown: &str) -> Result<String> {
    Ok(render_document(markdown)?.to_html())
}

/// Render one block, already classified as `block_type`
pub fn render_block(block: &str, block_type: BlockType) -> Result<Node> {
    match block_type {
        BlockType::Heading(level) => render_heading(block, level),
        BlockType::Code => render_code(block),
        BlockType::Quote => render_quote(block),
        BlockType::UnorderedList => render_unordered_list(block),
        BlockType::OrderedList => render_ordered_list(block),
        BlockType::Paragraph => render_paragraph(block),
    }
}

/// Tokenize inline text into leaf nodes
fn inline_children(text: &str) -> Result<Vec<Node>> {
    Ok(tokenize(text)?
        .into_iter()
        .map(TextSpan::into_node)
        .collect())
}

fn render_heading(block: &str, level: u8) -> Result<Node> {
    let text = block.get(usize::from(level) + 1..).unwrap_or("");
    Ok(Node::parent(format!("h{}", level), inline_children(text)?)?)
}

/// Code content is kept verbatim: no inline parsing.
fn render_code(block: &str) -> Result<Node> {
    let inner = if block.len() >= FENCE_LEN * 2 {
        &block[FENCE_LEN..block.len() - FENCE_LEN]
    } else {
        ""
    };
    let mut text = inner.trim_matches('\n').to_string();
    text.push('\n');

    let code = Node::parent("code", vec![Node::text(text)])?;
    Ok(Node::parent("pre", vec![code])?)
}

fn render_quote(block: &str) -> Result<Node> {
    let text = block
        .split('\n')
        .map(|line| line.trim_start_matches('>').trim())
        .collect::<Vec<_>>()
        .join(" ");
    Ok(Node::parent("blockquote", inline_children(&text)?)?)
}

fn render_unordered_list(block: &str) -> Result<Node> {
    let items = block
        .split('\n')
        .map(|line| list_item(line.strip_prefix("- ").unwrap_or(line)))
        .collect::<Result<Vec<_>>>()?;
    Ok(Node::parent("ul", items)?)
}

fn render_ordered_list(block: &str) -> Result<Node> {
    let items = block
        .split('\n')
        .map(|line| {
            let text = line.find(". ").map_or(line, |i| &line[i + 2..]);
            list_item(text)
        })
        .collect::<Result<Vec<_>>>()?;
    Ok(Node::parent("ol", items)?)
}

fn list_item(text: &str) -> Result<Node> {
    Ok(Node::parent("li", inline_children(text)?)?)
}

fn render_paragraph(block: &str) -> Result<Node> {
    let text = block.split('\n').collect::<Vec<_>>().join(" ");
    Ok(Node::parent("p", inline_children(&text)?)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;
    use pretty_assertions::assert_eq;

    fn html(markdown: &str) -> String {
        markdown_to_html(markdown).unwrap()
    }

    #[test]
    fn test_heading_with_inline() {
        assert_eq!(
            html("## Heading with **bold** and _italic_"),
            "<div><h2>Heading with <b>bold</b> and <i>italic</i></h2></div>"
        );
    }

    #[test]
    fn test_heading_keeps_extra_spaces() {
        assert_eq!(
            render_block("#  spaced", BlockType::Heading(1)).unwrap().to_html(),
            "<h1> spaced</h1>"
        );
        assert_eq!(
            render_block("# ", BlockType::Heading(1)).unwrap().to_html(),
            "<h1></h1>"
        );
    }

    #[test]
    fn test_code_is_verbatim() {
        let md = "```\nThis is text that _should_ remain\nthe **same** even with inline stuff\n```";
        assert_eq!(
            html(md),
            "<div><pre><code>This is text that _should_ remain\nthe **same** even with inline stuff\n</code></pre></div>"
        );
    }

    #[test]
    fn test_short_code_blocks() {
        assert_eq!(
            render_block("``````", BlockType::Code).unwrap().to_html(),
            "<pre><code>\n</code></pre>"
        );
        assert_eq!(
            render_block("```", BlockType::Code).unwrap().to_html(),
            "<pre><code>\n</code></pre>"
        );
    }

    #[test]
    fn test_quote_joins_lines() {
        assert_eq!(
            html("> This is a\n> blockquote block"),
            "<div><blockquote>This is a blockquote block</blockquote></div>"
        );
        assert_eq!(
            html(">no space\n>> nested"),
            "<div><blockquote>no space nested</blockquote></div>"
        );
    }

    #[test]
    fn test_unordered_list_with_inline() {
        assert_eq!(
            html("- **Bold** item\n- _Italic_ item\n- `Code` item"),
            "<div><ul><li><b>Bold</b> item</li><li><i>Italic</i> item</li><li><code>Code</code> item</li></ul></div>"
        );
    }

    #[test]
    fn test_ordered_list() {
        let md = "1. First item\n2. Second item\n3. Third item\n4. Fourth\n5. Fifth\n6. Sixth\n7. Seventh\n8. Eighth\n9. Ninth\n10. Tenth";
        let node = render_document(md).unwrap();
        let ol = &node.children()[0];
        assert_eq!(ol.tag(), Some("ol"));
        assert_eq!(ol.children().len(), 10);
        assert_eq!(ol.children()[0].to_html(), "<li>First item</li>");
        assert_eq!(ol.children()[9].to_html(), "<li>Tenth</li>");
    }

    #[test]
    fn test_paragraph_lines_joined() {
        assert_eq!(
            html("This is **bolded** paragraph\ntext in a p\ntag here"),
            "<div><p>This is <b>bolded</b> paragraph text in a p tag here</p></div>"
        );
    }

    #[test]
    fn test_links_and_images() {
        assert_eq!(
            html("See ![cat](cat.png) and [docs](https://docs.rs)"),
            "<div><p>See <img src=\"cat.png\" alt=\"cat\" /> and <a href=\"https://docs.rs\">docs</a></p></div>"
        );
    }

    #[test]
    fn test_malformed_span_aborts_document() {
        let md = "# Fine\n\nStill fine\n\nbroken `code";
        assert!(matches!(
            render_document(md),
            Err(Error::MalformedInlineSpan { delimiter: "`" })
        ));
    }

    #[test]
    fn test_empty_document() {
        assert_eq!(html(""), "<div></div>");
        assert_eq!(html("\n\n\n"), "<div></div>");
    }
}
