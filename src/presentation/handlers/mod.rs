mod documents;
mod errors;
mod health;
mod photos;
mod reports;
mod session;

pub use documents::{download_document_handler, search_documents_handler};
pub use errors::ErrorResponse;
pub use health::health_handler;
pub use photos::photos_handler;
pub use reports::{
    UNREADABLE_MESSAGE, clear_report_handler, create_report_handler, download_report_handler,
};
pub use session::{end_session_handler, history_handler};
