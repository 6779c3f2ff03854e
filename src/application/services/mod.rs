mod call_spacing;
mod model_selector;
mod organizer;
mod report_cache;
mod report_generator;
mod report_prompt;
mod report_service;

pub use call_spacing::CallSpacing;
pub use model_selector::select_model;
pub use organizer::{MovedDocument, OrganizeError, organize_loose_documents};
pub use report_cache::ReportCache;
pub use report_generator::{GeneratorConfig, ReportGenerator};
pub use report_prompt::{
    DEFAULT_MAX_PROMPT_CHARS, DEFAULT_PROMPT_TEMPLATE, RAW_DATA_SEPARATOR, build_prompt,
    truncate_chars,
};
pub use report_service::{ReportOutcome, ReportService, ReportServiceError};
