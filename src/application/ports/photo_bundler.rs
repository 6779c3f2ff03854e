use std::path::Path;

use crate::domain::PhotoArchive;

pub trait PhotoBundler: Send + Sync {
    /// Zips the images directly inside `directory`. `Ok(None)` means there
    /// were no images to bundle.
    fn bundle_photos(&self, directory: &Path) -> Result<Option<PhotoArchive>, BundleError>;
}

#[derive(Debug, thiserror::Error)]
pub enum BundleError {
    #[error("failed to read directory {path}: {source}")]
    ReadDirectory {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to read photo {path}: {source}")]
    ReadPhoto {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to write archive: {0}")]
    Archive(String),
}
