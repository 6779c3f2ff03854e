mod app_state;
mod session_id;
mod session_store;

pub use app_state::AppState;
pub use session_id::{SESSION_ID_HEADER, SessionId, session_middleware};
pub use session_store::{DEFAULT_IDLE_TIMEOUT, HistoryEntry, SessionState, SessionStore};
