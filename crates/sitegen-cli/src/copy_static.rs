//! Mirror the static asset tree into the output directory.

use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};
use tracing::info;

/// What a copy created
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CopyReport {
    pub files: usize,
    pub dirs: usize,
}

/// Replace `dest` with a recursive copy of `src`.
///
/// `dest` is removed first if it exists, so the result mirrors `src` exactly.
pub fn copy_static(src: &Path, dest: &Path) -> Result<CopyReport> {
    if !src.is_dir() {
        bail!("source directory does not exist: {}", src.display());
    }

    if dest.exists() {
        info!(path = %dest.display(), "cleaning destination directory");
        fs::remove_dir_all(dest)
            .with_context(|| format!("failed to remove {}", dest.display()))?;
    }

    let mut report = CopyReport::default();
    copy_dir(src, dest, &mut report)?;
    Ok(report)
}

fn copy_dir(src: &Path, dest: &Path, report: &mut CopyReport) -> Result<()> {
    fs::create_dir(dest).with_context(|| format!("failed to create {}", dest.display()))?;
    info!(path = %dest.display(), "created directory");
    report.dirs += 1;

    let entries =
        fs::read_dir(src).with_context(|| format!("failed to read {}", src.display()))?;
    for entry in entries {
        let entry = entry.with_context(|| format!("failed to read {}", src.display()))?;
        let from = entry.path();
        let to = dest.join(entry.file_name());

        if from.is_dir() {
            copy_dir(&from, &to, report)?;
        } else {
            fs::copy(&from, &to).with_context(|| {
                format!("failed to copy {} to {}", from.display(), to.display())
            })?;
            info!(from = %from.display(), to = %to.display(), "copied file");
            report.files += 1;
        }
    }

    Ok(())
}
