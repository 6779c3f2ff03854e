use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use tokio::time::Instant;

use crate::application::services::ReportCache;

use super::session_id::SessionId;

const HISTORY_LABEL_CHARS: usize = 20;

/// One entry of the "recent analyses" list shown to a session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    pub generated_at: String,
    pub label: String,
    pub content: String,
}

impl HistoryEntry {
    pub fn new(file_name: &str, content: String) -> Self {
        Self {
            generated_at: chrono::Local::now().format("%H:%M").to_string(),
            label: file_name.chars().take(HISTORY_LABEL_CHARS).collect(),
            content,
        }
    }
}

#[derive(Debug, Default)]
pub struct SessionState {
    pub cache: ReportCache,
    pub history: Vec<HistoryEntry>,
}

pub const DEFAULT_IDLE_TIMEOUT: Duration = Duration::from_secs(60 * 60);

type SharedState = Arc<tokio::sync::Mutex<SessionState>>;

#[derive(Debug)]
struct SessionSlot {
    state: SharedState,
    last_seen: Instant,
}

/// Owns one independent [`SessionState`] per session id. Reports are never
/// shared between sessions. Sessions untouched for longer than the idle
/// timeout are dropped on the next access.
#[derive(Debug)]
pub struct SessionStore {
    sessions: Mutex<HashMap<SessionId, SessionSlot>>,
    idle_timeout: Duration,
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::with_idle_timeout(DEFAULT_IDLE_TIMEOUT)
    }
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_idle_timeout(idle_timeout: Duration) -> Self {
        Self {
            sessions: Mutex::new(HashMap::new()),
            idle_timeout,
        }
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<SessionId, SessionSlot>> {
        let mut sessions = self.sessions.lock().unwrap_or_else(PoisonError::into_inner);
        let now = Instant::now();
        let before = sessions.len();
        sessions.retain(|_, slot| now.duration_since(slot.last_seen) < self.idle_timeout);
        let evicted = before - sessions.len();
        if evicted > 0 {
            tracing::debug!(evicted, remaining = sessions.len(), "Evicted idle sessions");
        }
        sessions
    }

    /// Returns the session's state, creating it on first use. Only requests
    /// that write to the session should call this.
    pub fn session(&self, id: &SessionId) -> SharedState {
        let mut sessions = self.lock();
        let slot = sessions.entry(id.clone()).or_insert_with(|| SessionSlot {
            state: SharedState::default(),
            last_seen: Instant::now(),
        });
        slot.last_seen = Instant::now();
        Arc::clone(&slot.state)
    }

    /// Returns the session's state if it exists. Never creates one.
    pub fn get(&self, id: &SessionId) -> Option<SharedState> {
        let mut sessions = self.lock();
        sessions.get_mut(id).map(|slot| {
            slot.last_seen = Instant::now();
            Arc::clone(&slot.state)
        })
    }

    /// Drops the session's cache and history. Returns whether it existed.
    pub fn end(&self, id: &SessionId) -> bool {
        self.lock().remove(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
