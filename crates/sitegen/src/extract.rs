//! Image and link extraction.
//!
//! Both scans are left to right and non-overlapping. Bracket and paren
//! contents cannot themselves contain `[]` / `()`.

use std::ops::Range;

use once_cell::sync::Lazy;
use regex::Regex;

static IMAGE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"!\[([^\[\]]*)\]\(([^\(\)]*)\)").unwrap());

static LINK_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\[([^\[\]]*)\]\(([^\(\)]*)\)").unwrap());

/// A `![text](url)` or `[text](url)` occurrence in the source text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InlineMatch<'a> {
    /// Byte range of the whole match
    pub range: Range<usize>,
    /// Alt text or anchor text
    pub text: &'a str,
    pub url: &'a str,
}

/// Find all `![alt](url)` occurrences
pub fn find_images(text: &str) -> Vec<InlineMatch<'_>> {
    IMAGE_RE
        .captures_iter(text)
        .map(|caps| to_match(text, &caps))
        .collect()
}

/// Find all `[text](url)` occurrences that are not images
pub fn find_links(text: &str) -> Vec<InlineMatch<'_>> {
    let mut found = Vec::new();
    let mut pos = 0;

    while let Some(caps) = LINK_RE.captures_at(text, pos) {
        let whole = caps.get(0).map_or(pos..text.len(), |m| m.range());
        if text[..whole.start].ends_with('!') {
            // `[` is one byte, so this stays on a char boundary
            pos = whole.start + 1;
            continue;
        }
        pos = whole.end;
        found.push(to_match(text, &caps));
    }

    found
}

/// Extract `(alt, url)` pairs of all images
pub fn extract_images(text: &str) -> Vec<(&str, &str)> {
    find_images(text).into_iter().map(|m| (m.text, m.url)).collect()
}

/// Extract `(anchor, url)` pairs of all links
pub fn extract_links(text: &str) -> Vec<(&str, &str)> {
    find_links(text).into_iter().map(|m| (m.text, m.url)).collect()
}

fn to_match<'a>(text: &'a str, caps: &regex::Captures<'a>) -> InlineMatch<'a> {
    let group = |i| caps.get(i).map_or("", |m| m.as_str());
    InlineMatch {
        range: caps.get(0).map_or(0..text.len(), |m| m.range()),
        text: group(1),
        url: group(2),
    }
}
