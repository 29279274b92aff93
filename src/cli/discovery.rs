//! Input file discovery for the analyze command

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tracing::debug;
use walkdir::WalkDir;

use crate::app::services::session::is_supported_file;

/// Expand command-line paths into the list of files to analyze
///
/// Files are kept as given, even with an unsupported extension, so the user
/// sees why they were refused. Directories are walked recursively and only
/// supported files are taken, sorted by path within each directory argument.
pub fn discover_files(paths: &[PathBuf]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for path in paths {
        if path.is_dir() {
            let found = walk_directory(path)?;
            debug!("Found {} files under {}", found.len(), path.display());
            files.extend(found);
        } else {
            files.push(path.clone());
        }
    }

    if files.is_empty() {
        anyhow::bail!("No .csv, .tsv or .txt files found in the given paths");
    }

    Ok(files)
}

fn walk_directory(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for entry in WalkDir::new(dir).sort_by_file_name() {
        let entry =
            entry.with_context(|| format!("Failed to walk directory {}", dir.display()))?;

        if entry.file_type().is_file() && is_supported_file(entry.path()) {
            files.push(entry.into_path());
        }
    }

    files.sort();
    Ok(files)
}
