pub mod archive;
pub mod filesystem;
pub mod llm;
pub mod observability;
pub mod text_processing;
