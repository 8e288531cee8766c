//! Inline tokenizer: raw text to a sequence of [`TextSpan`]s.
//!
//! Tokenizing is a fixed pipeline of passes over a growing span list:
//! images, links, then the `**`, `_` and `` ` `` delimiters. Each pass only
//! splits [`TextSpan::Plain`] spans and passes every other span through.
//!
//! The image and link passes drop empty plain text around a match. The
//! delimiter passes keep every piece, empty or not.

use crate::extract::{find_images, find_links, InlineMatch};
use crate::span::TextSpan;
use crate::{Error, Result};

/// Paired inline delimiters, in the order they are applied
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delimiter {
    Bold,
    Italic,
    Code,
}

impl Delimiter {
    pub const ALL: [Delimiter; 3] = [Delimiter::Bold, Delimiter::Italic, Delimiter::Code];

    pub fn as_str(self) -> &'static str {
        match self {
            Delimiter::Bold => "**",
            Delimiter::Italic => "_",
            Delimiter::Code => "`",
        }
    }

    fn wrap(self, text: &str) -> TextSpan {
        match self {
            Delimiter::Bold => TextSpan::Bold(text.to_string()),
            Delimiter::Italic => TextSpan::Italic(text.to_string()),
            Delimiter::Code => TextSpan::Code(text.to_string()),
        }
    }
}

/// Convert raw text into typed spans
pub fn tokenize(text: &str) -> Result<Vec<TextSpan>> {
    let spans = vec![TextSpan::plain(text)];
    let spans = split_images(spans);
    let mut spans = split_links(spans);
    for delimiter in Delimiter::ALL {
        spans = split_delimiter(spans, delimiter)?;
    }
    Ok(spans)
}

/// Split `![alt](url)` out of plain spans
pub fn split_images(spans: Vec<TextSpan>) -> Vec<TextSpan> {
    split_matches(spans, find_images, |m| TextSpan::image(m.text, m.url))
}

/// Split `[text](url)` out of plain spans
pub fn split_links(spans: Vec<TextSpan>) -> Vec<TextSpan> {
    split_matches(spans, find_links, |m| TextSpan::link(m.text, m.url))
}

fn split_matches<F, C>(spans: Vec<TextSpan>, find: F, convert: C) -> Vec<TextSpan>
where
    F: for<'a> Fn(&'a str) -> Vec<InlineMatch<'a>>,
    C: Fn(&InlineMatch<'_>) -> TextSpan,
{
    let mut result = Vec::with_capacity(spans.len());

    for span in spans {
        let text = match span {
            TextSpan::Plain(text) => text,
            other => {
                result.push(other);
                continue;
            }
        };

        match split_around(&text, &find, &convert) {
            Some(pieces) => result.extend(pieces),
            None => result.push(TextSpan::Plain(text)),
        }
    }

    result
}

/// Split one text around its matches, or `None` if nothing matched
fn split_around<F, C>(text: &str, find: &F, convert: &C) -> Option<Vec<TextSpan>>
where
    F: for<'a> Fn(&'a str) -> Vec<InlineMatch<'a>>,
    C: Fn(&InlineMatch<'_>) -> TextSpan,
{
    let found = find(text);
    if found.is_empty() {
        return None;
    }

    let mut pieces = Vec::with_capacity(found.len() * 2 + 1);
    let mut rest = 0;
    for m in &found {
        let before = &text[rest..m.range.start];
        if !before.is_empty() {
            pieces.push(TextSpan::plain(before));
        }
        pieces.push(convert(m));
        rest = m.range.end;
    }
    if rest < text.len() {
        pieces.push(TextSpan::plain(&text[rest..]));
    }

    Some(pieces)
}

/// Split plain spans on `delimiter`.
///
/// Even-indexed pieces stay plain and odd-indexed pieces take the delimiter's
/// kind. Empty pieces are kept. An odd number of delimiters is an error.
pub fn split_delimiter(spans: Vec<TextSpan>, delimiter: Delimiter) -> Result<Vec<TextSpan>> {
    let mut result = Vec::with_capacity(spans.len());

    for span in spans {
        let text = match span {
            TextSpan::Plain(text) => text,
            other => {
                result.push(other);
                continue;
            }
        };

        let pieces: Vec<&str> = text.split(delimiter.as_str()).collect();
        if pieces.len() % 2 == 0 {
            return Err(Error::MalformedInlineSpan {
                delimiter: delimiter.as_str(),
            });
        }

        for (i, piece) in pieces.into_iter().enumerate() {
            if i % 2 == 0 {
                result.push(TextSpan::plain(piece));
            } else {
                result.push(delimiter.wrap(piece));
            }
        }
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn plain(s: &str) -> TextSpan {
        TextSpan::plain(s)
    }

    #[test]
    fn test_all_syntax_combined() {
        let text = "This is **text** with an _italic_ word and a `code block` and an ![obi wan image](https://i.imgur.com/fJRm4Vk.jpeg) and a [link](https://boot.dev)";
        assert_eq!(
            tokenize(text).unwrap(),
            vec![
                plain("This is "),
                TextSpan::Bold("text".into()),
                plain(" with an "),
                TextSpan::Italic("italic".into()),
                plain(" word and a "),
                TextSpan::Code("code block".into()),
                plain(" and an "),
                TextSpan::image("obi wan image", "https://i.imgur.com/fJRm4Vk.jpeg"),
                plain(" and a "),
                TextSpan::link("link", "https://boot.dev"),
            ]
        );
    }

    #[rstest]
    #[case("Just a plain sentence with no formatting")]
    #[case("")]
    #[case("numbers 1. and dashes - and hashes # stay")]
    fn test_plain_text_is_single_span(#[case] text: &str) {
        assert_eq!(tokenize(text).unwrap(), vec![plain(text)]);
    }

    #[test]
    fn test_delimiters_keep_empty_pieces() {
        assert_eq!(
            tokenize("**bold text**").unwrap(),
            vec![plain(""), TextSpan::Bold("bold text".into()), plain("")]
        );
        assert_eq!(
            tokenize("`code` at start").unwrap(),
            vec![plain(""), TextSpan::Code("code".into()), plain(" at start")]
        );
    }

    #[test]
    fn test_image_and_link_drop_empty_pieces() {
        assert_eq!(
            tokenize("![alt](https://example.com/img.png)").unwrap(),
            vec![TextSpan::image("alt", "https://example.com/img.png")]
        );
        assert_eq!(
            tokenize("[a](https://a.com)[b](https://b.com)").unwrap(),
            vec![
                TextSpan::link("a", "https://a.com"),
                TextSpan::link("b", "https://b.com"),
            ]
        );
    }

    #[test]
    fn test_multiple_images_and_links() {
        assert_eq!(
            tokenize("![a](https://a.com/1.png) and ![b](https://b.com/2.png)").unwrap(),
            vec![
                TextSpan::image("a", "https://a.com/1.png"),
                plain(" and "),
                TextSpan::image("b", "https://b.com/2.png"),
            ]
        );
        assert_eq!(
            tokenize("See ![photo](https://img.com/photo.jpg) or click [here](https://link.com)")
                .unwrap(),
            vec![
                plain("See "),
                TextSpan::image("photo", "https://img.com/photo.jpg"),
                plain(" or click "),
                TextSpan::link("here", "https://link.com"),
            ]
        );
    }

    #[test]
    fn test_urls_are_not_split_on_delimiters() {
        assert_eq!(
            tokenize("go [here](https://example.com/a_b) now").unwrap(),
            vec![
                plain("go "),
                TextSpan::link("here", "https://example.com/a_b"),
                plain(" now"),
            ]
        );
    }

    #[rstest]
    #[case("a `b", "`")]
    #[case("**unclosed bold", "**")]
    #[case("snake_case", "_")]
    fn test_unterminated_delimiter(#[case] text: &str, #[case] expected: &str) {
        match tokenize(text) {
            Err(Error::MalformedInlineSpan { delimiter }) => assert_eq!(delimiter, expected),
            other => panic!("expected MalformedInlineSpan, got {:?}", other),
        }
    }

    #[test]
    fn test_split_delimiter_passes_other_spans_through() {
        let spans = vec![
            plain("hello `world`"),
            TextSpan::Bold("bold `text".into()),
            plain("`code` here"),
        ];
        assert_eq!(
            split_delimiter(spans, Delimiter::Code).unwrap(),
            vec![
                plain("hello "),
                TextSpan::Code("world".into()),
                plain(""),
                TextSpan::Bold("bold `text".into()),
                plain(""),
                TextSpan::Code("code".into()),
                plain(" here"),
            ]
        );
        assert_eq!(split_delimiter(Vec::new(), Delimiter::Code).unwrap(), vec![]);
    }

    #[test]
    fn test_pass_order_bold_before_italic() {
        assert_eq!(
            tokenize("**_x_**").unwrap(),
            vec![plain(""), TextSpan::Bold("_x_".into()), plain("")]
        );
    }
}
