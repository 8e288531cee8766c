//! Page assembly: render Markdown into an HTML template.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

pub const TITLE_PLACEHOLDER: &str = "{{ Title }}";
pub const CONTENT_PLACEHOLDER: &str = "{{ Content }}";

/// Fill `template` with the title and rendered body of `markdown`
pub fn assemble_page(template: &str, markdown: &str) -> sitegen::Result<String> {
    let content = sitegen::markdown_to_html(markdown)?;
    let title = sitegen::extract_title(markdown)?;

    Ok(template
        .replace(TITLE_PLACEHOLDER, &title)
        .replace(CONTENT_PLACEHOLDER, &content))
}

/// Render `from` through `template_path` and write the page to `dest`
pub fn generate_page(from: &Path, template_path: &Path, dest: &Path) -> Result<()> {
    info!(
        from = %from.display(),
        template = %template_path.display(),
        dest = %dest.display(),
        "generating page"
    );

    let markdown = fs::read_to_string(from)
        .with_context(|| format!("failed to read {}", from.display()))?;
    let template = fs::read_to_string(template_path)
        .with_context(|| format!("failed to read {}", template_path.display()))?;

    let page = assemble_page(&template, &markdown)
        .with_context(|| format!("failed to render {}", from.display()))?;

    if let Some(dir) = dest.parent().filter(|dir| !dir.as_os_str().is_empty()) {
        fs::create_dir_all(dir)
            .with_context(|| format!("failed to create {}", dir.display()))?;
    }
    fs::write(dest, page).with_context(|| format!("failed to write {}", dest.display()))?;

    Ok(())
}
