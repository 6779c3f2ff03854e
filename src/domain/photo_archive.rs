/// Image file extensions bundled next to a report, compared case-insensitively.
pub const PHOTO_EXTENSIONS: [&str; 3] = ["png", "jpg", "jpeg"];

/// In-memory zip of the photos sitting beside a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhotoArchive {
    pub bytes: Vec<u8>,
    pub entries: Vec<String>,
}

impl PhotoArchive {
    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }
}
