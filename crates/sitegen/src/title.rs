//! Page title extraction.

use crate::{Error, Result};

/// Return the text of the first `# ` heading line anywhere in the document,
/// trimmed. Inline markup is left as written.
pub fn extract_title(markdown: &str) -> Result<String> {
    markdown
        .lines()
        .find_map(|line| line.strip_prefix("# "))
        .map(|title| title.trim().to_string())
        .ok_or(Error::NoTitleFound)
}
