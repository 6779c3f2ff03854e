use std::path::Path;

use walkdir::{DirEntry, WalkDir};

use crate::application::ports::{DocumentLocator, LocatorError};
use crate::domain::{DocumentRef, has_extension};

const VCS_DIRECTORIES: [&str; 3] = [".git", ".svn", ".hg"];

/// Recursive, name-sorted directory walk that skips version-control metadata.
pub struct WalkDirLocator {
    extension: String,
}

impl WalkDirLocator {
    pub fn new(extension: impl Into<String>) -> Self {
        Self {
            extension: extension.into(),
        }
    }
}

impl Default for WalkDirLocator {
    fn default() -> Self {
        Self::new("pdf")
    }
}

fn is_vcs_directory(entry: &DirEntry) -> bool {
    entry.depth() > 0
        && entry.file_type().is_dir()
        && VCS_DIRECTORIES
            .iter()
            .any(|marker| entry.file_name() == *marker)
}

impl DocumentLocator for WalkDirLocator {
    #[tracing::instrument(skip(self), fields(root = %root_directory.display()))]
    fn find_documents(
        &self,
        search_term: &str,
        root_directory: &Path,
    ) -> Result<Vec<DocumentRef>, LocatorError> {
        if !root_directory.is_dir() {
            return Err(LocatorError::RootNotFound(
                root_directory.display().to_string(),
            ));
        }

        let needle = search_term.to_lowercase();

        let documents: Vec<DocumentRef> = WalkDir::new(root_directory)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|entry| !is_vcs_directory(entry))
            .filter_map(|entry| match entry {
                Ok(entry) => Some(entry),
                Err(e) => {
                    tracing::warn!(error = %e, "Skipping unreadable entry");
                    None
                }
            })
            .filter(|entry| entry.file_type().is_file())
            .filter(|entry| has_extension(entry.path(), &self.extension))
            .filter(|entry| {
                entry
                    .file_name()
                    .to_string_lossy()
                    .to_lowercase()
                    .contains(&needle)
            })
            .map(|entry| DocumentRef::new(entry.into_path()))
            .collect();

        tracing::debug!(matches = documents.len(), "Document search complete");

        Ok(documents)
    }
}
