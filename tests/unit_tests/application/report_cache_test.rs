use std::path::Path;

use lvc_reporter::application::services::ReportCache;
use lvc_reporter::domain::Report;

fn success(text: &str) -> Report {
    Report::Success {
        text: text.to_string(),
        model: "models/gemini-1.5-flash".to_string(),
    }
}

#[test]
fn given_empty_cache_when_getting_then_returns_none() {
    let cache = ReportCache::new();

    assert!(cache.get(Path::new("/data/a.pdf")).is_none());
    assert!(cache.is_empty());
}

#[test]
fn given_put_report_when_getting_same_path_then_returns_it() {
    let mut cache = ReportCache::new();
    cache.put("/data/a.pdf", success("first"));

    assert_eq!(cache.get(Path::new("/data/a.pdf")), Some(&success("first")));
    assert!(cache.get(Path::new("/data/b.pdf")).is_none());
}

#[test]
fn given_existing_entry_when_putting_again_then_last_write_wins() {
    let mut cache = ReportCache::new();
    cache.put("/data/a.pdf", success("first"));

    let previous = cache.put("/data/a.pdf", success("second"));

    assert_eq!(previous, Some(success("first")));
    assert_eq!(cache.get(Path::new("/data/a.pdf")), Some(&success("second")));
    assert_eq!(cache.len(), 1);
}

#[test]
fn given_entry_when_clearing_then_only_that_path_is_removed() {
    let mut cache = ReportCache::new();
    cache.put("/data/a.pdf", success("a"));
    cache.put("/data/b.pdf", success("b"));

    let removed = cache.clear(Path::new("/data/a.pdf"));

    assert_eq!(removed, Some(success("a")));
    assert!(cache.get(Path::new("/data/a.pdf")).is_none());
    assert!(cache.get(Path::new("/data/b.pdf")).is_some());
}

#[test]
fn given_entries_when_clearing_all_then_cache_is_empty() {
    let mut cache = ReportCache::new();
    cache.put("/data/a.pdf", success("a"));
    cache.put("/data/b.pdf", success("b"));

    cache.clear_all();

    assert!(cache.is_empty());
}
