use std::sync::Arc;

use crate::application::ports::{LlmClient, TextExtractor};
use crate::application::services::ReportService;

use super::session_store::SessionStore;

pub struct AppState<E, L>
where
    E: TextExtractor + ?Sized,
    L: LlmClient + ?Sized,
{
    pub report_service: Arc<ReportService<E, L>>,
    pub sessions: Arc<SessionStore>,
}

impl<E, L> Clone for AppState<E, L>
where
    E: TextExtractor + ?Sized,
    L: LlmClient + ?Sized,
{
    fn clone(&self) -> Self {
        Self {
            report_service: Arc::clone(&self.report_service),
            sessions: Arc::clone(&self.sessions),
        }
    }
}
