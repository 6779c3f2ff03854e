use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::domain::Report;

/// Per-session memo of generated reports keyed by document path.
/// Entries never expire; a present entry is authoritative.
#[derive(Debug, Default)]
pub struct ReportCache {
    entries: HashMap<PathBuf, Report>,
}

impl ReportCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, path: &Path) -> Option<&Report> {
        self.entries.get(path)
    }

    /// Last write wins.
    pub fn put(&mut self, path: impl Into<PathBuf>, report: Report) -> Option<Report> {
        self.entries.insert(path.into(), report)
    }

    pub fn clear(&mut self, path: &Path) -> Option<Report> {
        self.entries.remove(path)
    }

    pub fn clear_all(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
