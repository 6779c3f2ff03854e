mod pdf_adapter;

pub use pdf_adapter::{PdfAdapter, join_pages};
