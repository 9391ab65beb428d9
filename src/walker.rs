use crate::error::{DocsiftError, Result};
use log::warn;
use std::fs;
use std::path::Path;
use walkdir::WalkDir;

pub const DEFAULT_EXTENSION: &str = "docx";

/// File names directly inside `folder` ending in `.{extension}`, sorted ascending.
pub fn candidate_files(folder: &Path, extension: &str) -> Result<Vec<String>> {
    ensure_folder(folder)?;

    let suffix = format!(".{extension}");
    let mut names: Vec<String> = WalkDir::new(folder)
        .min_depth(1)
        .max_depth(1)
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(e) => {
                warn!("Skipping folder entry: {e}");
                None
            }
        })
        .filter(|entry| entry.path().is_file())
        .filter_map(|entry| match entry.file_name().to_str() {
            Some(name) => Some(name.to_string()),
            None => {
                warn!("Skipping file with a non-UTF-8 name: {:?}", entry.file_name());
                None
            }
        })
        .filter(|name| name.ends_with(&suffix))
        .collect();

    names.sort();
    Ok(names)
}

/// Fails with [`DocsiftError::FolderUnavailable`] unless `folder` is a readable directory.
pub fn ensure_folder(folder: &Path) -> Result<()> {
    fs::read_dir(folder)
        .map(|_| ())
        .map_err(|source| DocsiftError::FolderUnavailable {
            path: folder.to_path_buf(),
            source,
        })
}
