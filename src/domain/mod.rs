mod document;
mod extracted_text;
mod photo_archive;
mod report;

pub use document::{DocumentRef, has_extension};
pub use extracted_text::{ExtractedText, USABILITY_THRESHOLD};
pub use photo_archive::{PHOTO_EXTENSIONS, PhotoArchive};
pub use report::{FAILURE_MARKER, FailureKind, Report};
