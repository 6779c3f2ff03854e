use std::path::Path;

use crate::domain::DocumentRef;

/// Finds candidate documents under a root directory.
///
/// An empty `search_term` matches every document. Implementations must return
/// the same order for the same filesystem state.
pub trait DocumentLocator: Send + Sync {
    fn find_documents(
        &self,
        search_term: &str,
        root_directory: &Path,
    ) -> Result<Vec<DocumentRef>, LocatorError>;
}

#[derive(Debug, thiserror::Error)]
pub enum LocatorError {
    #[error("root directory not found: {0}")]
    RootNotFound(String),
}
