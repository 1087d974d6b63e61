use std::sync::Arc;

use common::adapter::StdFileSystem;
use common::audit::{validate, AuditKind, AuditPayload, History, SupremacyResult};
use common::ports::outbound::LogLevel;

use super::{fixed_time, supremacy_response, CollectLog};
use crate::adapter::FileHistoryStore;
use crate::ports::outbound::HistoryStore;

fn supremacy(target: &str) -> SupremacyResult {
    match validate(AuditKind::Supremacy, &supremacy_response(target)) {
        Ok(AuditPayload::Supremacy(r)) => r,
        other => panic!("unexpected: {:?}", other),
    }
}

fn store(dir: &tempfile::TempDir, log: Arc<CollectLog>) -> FileHistoryStore {
    FileHistoryStore::new(
        Arc::new(StdFileSystem),
        dir.path().join("nested").join("AAS_AUDIT_HISTORY.json"),
        log,
    )
}

#[test]
fn test_missing_file_is_empty_history() {
    let dir = tempfile::tempdir().unwrap();
    let log = Arc::new(CollectLog::default());
    let history = store(&dir, log.clone()).load().unwrap();
    assert!(history.is_empty());
    assert!(log.messages(LogLevel::Warn).is_empty());
}

#[test]
fn test_save_then_load_keeps_order() {
    let dir = tempfile::tempdir().unwrap();
    let s = store(&dir, Arc::new(CollectLog::default()));
    let mut history = History::new();
    history.push(supremacy("old.com"));
    history.push(supremacy("new.com").captured(fixed_time()));
    s.save(&history).unwrap();

    assert!(s.path().exists());
    let mut tmp = s.path().as_os_str().to_owned();
    tmp.push(".tmp");
    assert!(!std::path::Path::new(&tmp).exists());

    let loaded = s.load().unwrap();
    assert_eq!(loaded, history);
    assert_eq!(loaded.latest().unwrap().target, "new.com");
}

#[test]
fn test_malformed_entries_are_dropped_with_warning() {
    let dir = tempfile::tempdir().unwrap();
    let log = Arc::new(CollectLog::default());
    let s = store(&dir, log.clone());
    std::fs::create_dir_all(s.path().parent().unwrap()).unwrap();
    let good = serde_json::to_value(supremacy("example.com")).unwrap();
    let contents = serde_json::json!([good, { "target": "sin puntuaciones" }, "texto"]);
    std::fs::write(s.path(), contents.to_string()).unwrap();

    let loaded = s.load().unwrap();
    assert_eq!(loaded.len(), 1);
    assert_eq!(loaded.latest().unwrap().target, "example.com");
    assert_eq!(
        log.messages(LogLevel::Warn),
        vec!["dropped malformed history entries".to_string()]
    );
}

#[test]
fn test_corrupt_file_starts_empty() {
    let dir = tempfile::tempdir().unwrap();
    let log = Arc::new(CollectLog::default());
    let s = store(&dir, log.clone());
    std::fs::create_dir_all(s.path().parent().unwrap()).unwrap();

    std::fs::write(s.path(), "{ no es json").unwrap();
    assert!(s.load().unwrap().is_empty());

    std::fs::write(s.path(), r#"{"entries":[]}"#).unwrap();
    assert!(s.load().unwrap().is_empty());
    assert_eq!(log.messages(LogLevel::Warn).len(), 2);
}
