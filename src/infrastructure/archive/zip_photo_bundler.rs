use std::io::{Cursor, Write};
use std::path::{Path, PathBuf};

use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

use crate::application::ports::{BundleError, PhotoBundler};
use crate::domain::{PHOTO_EXTENSIONS, PhotoArchive, has_extension};

#[derive(Default)]
pub struct ZipPhotoBundler;

impl ZipPhotoBundler {
    pub fn new() -> Self {
        Self
    }

    fn list_photos(directory: &Path) -> Result<Vec<PathBuf>, BundleError> {
        let read_dir_error = |source| BundleError::ReadDirectory {
            path: directory.display().to_string(),
            source,
        };

        let mut photos = Vec::new();
        for entry in std::fs::read_dir(directory).map_err(read_dir_error)? {
            let entry = entry.map_err(read_dir_error)?;
            let path = entry.path();
            if !path.is_file() {
                continue;
            }
            if PHOTO_EXTENSIONS
                .iter()
                .any(|extension| has_extension(&path, extension))
            {
                photos.push(path);
            }
        }

        photos.sort();
        Ok(photos)
    }
}

impl PhotoBundler for ZipPhotoBundler {
    #[tracing::instrument(skip(self), fields(directory = %directory.display()))]
    fn bundle_photos(&self, directory: &Path) -> Result<Option<PhotoArchive>, BundleError> {
        let photos = Self::list_photos(directory)?;

        if photos.is_empty() {
            tracing::debug!("No photos found");
            return Ok(None);
        }

        let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
        let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);
        let mut entries = Vec::with_capacity(photos.len());

        for photo in &photos {
            let bytes = std::fs::read(photo).map_err(|source| BundleError::ReadPhoto {
                path: photo.display().to_string(),
                source,
            })?;
            let name = photo
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default();

            writer
                .start_file(name.as_str(), options)
                .map_err(|e| BundleError::Archive(e.to_string()))?;
            writer
                .write_all(&bytes)
                .map_err(|e| BundleError::Archive(e.to_string()))?;
            entries.push(name);
        }

        let bytes = writer
            .finish()
            .map_err(|e| BundleError::Archive(e.to_string()))?
            .into_inner();

        tracing::info!(entries = entries.len(), bytes = bytes.len(), "Photo archive built");

        Ok(Some(PhotoArchive { bytes, entries }))
    }
}
