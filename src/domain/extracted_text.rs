/// Below this many characters a document is treated as unreadable
/// (typically a scan without a text layer).
pub const USABILITY_THRESHOLD: usize = 50;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedText(String);

impl ExtractedText {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn char_count(&self) -> usize {
        self.0.chars().count()
    }

    pub fn is_usable(&self) -> bool {
        self.char_count() >= USABILITY_THRESHOLD
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}
