mod zip_photo_bundler;

pub use zip_photo_bundler::ZipPhotoBundler;
