use std::path::{Path, PathBuf};

use crate::domain::has_extension;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MovedDocument {
    pub from: PathBuf,
    pub to: PathBuf,
    pub created_directory: bool,
}

#[derive(Debug, thiserror::Error)]
pub enum OrganizeError {
    #[error("failed to read directory {path}: {source}")]
    ReadDirectory {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to create directory {path}: {source}")]
    CreateDirectory {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to move {path}: {source}")]
    Move {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Moves every PDF lying directly in `directory` into a sibling folder named
/// after the file stem, so photos can later be dropped next to each report.
/// Files whose destination already exists are left in place.
pub fn organize_loose_documents(directory: &Path) -> Result<Vec<MovedDocument>, OrganizeError> {
    let read_dir_error = |source| OrganizeError::ReadDirectory {
        path: directory.display().to_string(),
        source,
    };

    let mut loose = Vec::new();
    for entry in std::fs::read_dir(directory).map_err(read_dir_error)? {
        let path = entry.map_err(read_dir_error)?.path();
        if path.is_file() && has_extension(&path, "pdf") {
            loose.push(path);
        }
    }
    loose.sort();

    let mut moved = Vec::with_capacity(loose.len());

    for from in loose {
        let (Some(stem), Some(file_name)) = (from.file_stem(), from.file_name()) else {
            continue;
        };
        let folder = directory.join(stem);
        let to = folder.join(file_name);

        let created_directory = !folder.exists();
        if created_directory {
            std::fs::create_dir_all(&folder).map_err(|source| OrganizeError::CreateDirectory {
                path: folder.display().to_string(),
                source,
            })?;
            tracing::info!(folder = %folder.display(), "Created report folder");
        }

        if to.exists() {
            tracing::warn!(path = %to.display(), "Destination already exists, skipping");
            continue;
        }

        std::fs::rename(&from, &to).map_err(|source| OrganizeError::Move {
            path: from.display().to_string(),
            source,
        })?;
        tracing::info!(from = %from.display(), to = %to.display(), "Moved PDF");

        moved.push(MovedDocument {
            from,
            to,
            created_directory,
        });
    }

    Ok(moved)
}
