use std::time::Duration;

use lvc_reporter::domain::Report;
use lvc_reporter::presentation::state::{HistoryEntry, SessionId, SessionStore};

fn success(text: &str) -> Report {
    Report::Success {
        text: text.to_string(),
        model: "models/gemini-1.5-flash".to_string(),
    }
}

#[tokio::test]
async fn given_two_sessions_when_one_caches_a_report_then_the_other_does_not_see_it() {
    let store = SessionStore::new();
    let alice = SessionId("alice".to_string());
    let bob = SessionId("bob".to_string());

    store
        .session(&alice)
        .lock()
        .await
        .cache
        .put("/data/a.pdf", success("relatório"));

    let bob_session = store.session(&bob);
    assert!(bob_session.lock().await.cache.is_empty());
    assert_eq!(store.session(&alice).lock().await.cache.len(), 1);
    assert_eq!(store.len(), 2);
}

#[tokio::test]
async fn given_ended_session_when_reopened_then_starts_empty() {
    let store = SessionStore::new();
    let id = SessionId("s1".to_string());
    store
        .session(&id)
        .lock()
        .await
        .history
        .push(HistoryEntry::new("a.pdf", "texto".to_string()));

    assert!(store.end(&id));
    assert!(!store.end(&id));
    assert!(store.session(&id).lock().await.history.is_empty());
}

#[test]
fn given_long_file_name_when_recording_history_then_label_is_truncated() {
    let entry = HistoryEntry::new("inspection-TD09-rodovia-federal.pdf", "texto".to_string());

    assert_eq!(entry.label.chars().count(), 20);
    assert_eq!(entry.label, "inspection-TD09-rodo");
    assert_eq!(entry.generated_at.len(), 5);
}

#[tokio::test]
async fn given_unknown_session_when_reading_then_nothing_is_created() {
    let store = SessionStore::new();
    let id = SessionId("never-written".to_string());

    for _ in 0..8 {
        assert!(store.get(&id).is_none());
    }

    assert!(store.is_empty());
}

#[tokio::test]
async fn given_existing_session_when_reading_then_returns_its_state() {
    let store = SessionStore::new();
    let id = SessionId("s1".to_string());
    store
        .session(&id)
        .lock()
        .await
        .cache
        .put("/data/a.pdf", success("relatório"));

    let session = store.get(&id).unwrap();

    assert_eq!(session.lock().await.cache.len(), 1);
    assert_eq!(store.len(), 1);
}

#[tokio::test(start_paused = true)]
async fn given_idle_session_when_timeout_elapses_then_it_is_evicted() {
    let store = SessionStore::with_idle_timeout(Duration::from_secs(60));
    let idle = SessionId("idle".to_string());
    let active = SessionId("active".to_string());
    store.session(&idle);
    store.session(&active);

    tokio::time::advance(Duration::from_secs(40)).await;
    assert!(store.get(&active).is_some());
    tokio::time::advance(Duration::from_secs(30)).await;

    assert!(store.get(&idle).is_none());
    assert!(store.get(&active).is_some());
    assert_eq!(store.len(), 1);
}

#[tokio::test(start_paused = true)]
async fn given_evicted_session_when_written_again_then_starts_empty() {
    let store = SessionStore::with_idle_timeout(Duration::from_secs(60));
    let id = SessionId("s1".to_string());
    store
        .session(&id)
        .lock()
        .await
        .history
        .push(HistoryEntry::new("a.pdf", "texto".to_string()));

    tokio::time::advance(Duration::from_secs(61)).await;

    assert!(store.session(&id).lock().await.history.is_empty());
}
