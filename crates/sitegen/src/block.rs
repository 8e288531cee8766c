//! Block segmentation and classification.

use std::fmt;
use std::str::FromStr;

use crate::Error;

/// Maximum heading level (`######`)
pub const MAX_HEADING_LEVEL: u8 = 6;

const CODE_FENCE: &str = "```";

/// The type of a block
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockType {
    /// `#` to `######` heading, with its level
    Heading(u8),
    /// Fenced code block
    Code,
    /// Every line starts with `>`
    Quote,
    /// Every line starts with `- `
    UnorderedList,
    /// Lines numbered `1. `, `2. `, ... with no gaps
    OrderedList,
    /// Anything else
    Paragraph,
}

impl BlockType {
    pub fn name(self) -> &'static str {
        match self {
            BlockType::Heading(_) => "heading",
            BlockType::Code => "code",
            BlockType::Quote => "quote",
            BlockType::UnorderedList => "unordered_list",
            BlockType::OrderedList => "ordered_list",
            BlockType::Paragraph => "paragraph",
        }
    }
}

impl fmt::Display for BlockType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BlockType::Heading(level) => write!(f, "heading({})", level),
            other => f.write_str(other.name()),
        }
    }
}

impl FromStr for BlockType {
    type Err = Error;

    /// Parse a block type name. `heading` means level 1; `h1`..`h6` and
    /// `heading(N)` select a level.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let unknown = || Error::UnknownBlockType(s.to_string());

        let level = s
            .strip_prefix('h')
            .filter(|rest| !rest.is_empty() && rest.bytes().all(|b| b.is_ascii_digit()))
            .or_else(|| {
                s.strip_prefix("heading(")
                    .and_then(|rest| rest.strip_suffix(')'))
            });
        if let Some(level) = level {
            return match level.parse::<u8>() {
                Ok(n @ 1..=MAX_HEADING_LEVEL) => Ok(BlockType::Heading(n)),
                _ => Err(unknown()),
            };
        }

        match s {
            "heading" => Ok(BlockType::Heading(1)),
            "code" => Ok(BlockType::Code),
            "quote" => Ok(BlockType::Quote),
            "unordered_list" => Ok(BlockType::UnorderedList),
            "ordered_list" => Ok(BlockType::OrderedList),
            "paragraph" => Ok(BlockType::Paragraph),
            _ => Err(unknown()),
        }
    }
}

/// Split a document into trimmed, non-empty blocks separated by blank lines
pub fn segment(document: &str) -> Vec<&str> {
    document
        .split("\n\n")
        .map(str::trim)
        .filter(|block| !block.is_empty())
        .collect()
}

/// Classify a block. The first matching rule wins; anything unmatched is a
/// paragraph.
pub fn classify(block: &str) -> BlockType {
    if let Some(level) = heading_level(block) {
        return BlockType::Heading(level);
    }

    if block.starts_with(CODE_FENCE) && block.ends_with(CODE_FENCE) {
        return BlockType::Code;
    }

    if block.starts_with('>') && block.split('\n').all(|line| line.starts_with('>')) {
        return BlockType::Quote;
    }

    if block.starts_with("- ") && block.split('\n').all(|line| line.starts_with("- ")) {
        return BlockType::UnorderedList;
    }

    if block.starts_with("1. ") && is_numbered(block) {
        return BlockType::OrderedList;
    }

    BlockType::Paragraph
}

/// Level of a `# `-style heading: 1 to 6 hashes followed by a space
fn heading_level(block: &str) -> Option<u8> {
    let hashes = block.bytes().take_while(|&b| b == b'#').count();
    if hashes == 0 || hashes > MAX_HEADING_LEVEL as usize {
        return None;
    }
    if block.as_bytes().get(hashes) != Some(&b' ') {
        return None;
    }
    u8::try_from(hashes).ok()
}

/// Line `i` must start with `"{i + 1}. "`
fn is_numbered(block: &str) -> bool {
    block
        .split('\n')
        .enumerate()
        .all(|(i, line)| line.starts_with(&format!("{}. ", i + 1)))
}
