//! Round-trip and failure tests for the coding store.

use chrono::{Duration, TimeZone, Utc};
use tempfile::tempdir;

use review_model::{CodingDraft, DocId, PrivilegeCode, ResponsivenessCode};
use review_store::{
    BlobStore, CODING_STORAGE_KEY, CodingStore, FileBlobStore, ManualClock, MemoryBlobStore,
    Result, StoreError,
};

fn clock() -> ManualClock {
    ManualClock::new(Utc.with_ymd_and_hms(2025, 3, 1, 9, 30, 0).unwrap())
}

#[test]
fn save_then_load_on_fresh_file_store() {
    let dir = tempdir().unwrap();
    let id = DocId::from_sequence(2);
    let draft = CodingDraft::new(ResponsivenessCode::Responsive, PrivilegeCode::NotPrivileged)
        .with_issues(" Termination ")
        .with_notes("route to counsel");

    let saved = {
        let mut store = CodingStore::with_clock(FileBlobStore::new(dir.path()), clock());
        store.save(&id, draft).unwrap().clone()
    };

    let reopened = CodingStore::open(FileBlobStore::new(dir.path()));
    let loaded = reopened.get(&id).expect("record survives reopen");
    assert_eq!(loaded, &saved);
    assert_eq!(loaded.issues, "Termination");
    assert_eq!(reopened.coded_count(), 1);
}

#[test]
fn saved_at_moves_forward_between_saves() {
    let clock = ManualClock::new(Utc.with_ymd_and_hms(2025, 3, 1, 9, 30, 0).unwrap());
    let mut store = CodingStore::with_clock(MemoryBlobStore::new(), &clock);
    let id = DocId::from_sequence(1);

    let first = store.save(&id, CodingDraft::default()).unwrap().saved_at;
    clock.advance(Duration::minutes(5));
    let second = store.save(&id, CodingDraft::default()).unwrap().saved_at;

    assert!(second > first);
}

#[test]
fn corrupt_file_loads_empty_and_is_replaced_on_save() {
    let dir = tempdir().unwrap();
    std::fs::write(dir.path().join(format!("{CODING_STORAGE_KEY}.json")), "{oops").unwrap();

    let mut store = CodingStore::with_clock(FileBlobStore::new(dir.path()), clock());
    assert_eq!(store.coded_count(), 0);

    store
        .save(&DocId::from_sequence(1), CodingDraft::default())
        .unwrap();
    let reopened = CodingStore::open(FileBlobStore::new(dir.path()));
    assert_eq!(reopened.coded_count(), 1);
}

#[test]
fn whole_mapping_is_written_as_one_object() {
    let backend = MemoryBlobStore::new();
    let mut store = CodingStore::with_clock(backend.clone(), clock());
    store.save(&DocId::from_sequence(1), CodingDraft::default()).unwrap();
    store.save(&DocId::from_sequence(3), CodingDraft::default()).unwrap();

    let raw = backend.raw(CODING_STORAGE_KEY).unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    let keys: Vec<&String> = value.as_object().unwrap().keys().collect();
    assert_eq!(keys, ["DOC-0001", "DOC-0003"]);
    assert_eq!(value["DOC-0001"]["resp"], "Unreviewed");
}

/// Backend whose writes always fail.
#[derive(Default)]
struct ReadOnlyBackend {
    inner: MemoryBlobStore,
}

impl BlobStore for ReadOnlyBackend {
    fn read(&self, key: &str) -> Result<Option<String>> {
        self.inner.read(key)
    }

    fn write(&mut self, _key: &str, _value: &str) -> Result<()> {
        Err(StoreError::Unavailable {
            reason: "read-only".to_string(),
        })
    }

    fn remove(&mut self, _key: &str) -> Result<()> {
        Err(StoreError::Unavailable {
            reason: "read-only".to_string(),
        })
    }
}

#[test]
fn write_failure_is_surfaced_and_memory_unchanged() {
    let mut store = CodingStore::with_clock(ReadOnlyBackend::default(), clock());
    let id = DocId::from_sequence(1);

    let result = store.save(&id, CodingDraft::default());

    assert!(matches!(result, Err(StoreError::Unavailable { .. })));
    assert!(store.get(&id).is_none());
    assert_eq!(store.coded_count(), 0);
}

#[test]
fn failed_reset_keeps_records() {
    let inner = MemoryBlobStore::new().with_entry(
        CODING_STORAGE_KEY,
        r#"{"DOC-0001":{"resp":"Responsive","priv":"Privileged","savedAt":"2025-03-01T09:30:00.000Z"}}"#,
    );
    let mut store = CodingStore::with_clock(ReadOnlyBackend { inner }, clock());
    assert_eq!(store.coded_count(), 1);

    assert!(store.reset_all(|| true).is_err());
    assert_eq!(store.coded_count(), 1);
}

#[test]
fn undecodable_entries_survive_an_unrelated_save() {
    let backend = MemoryBlobStore::new().with_entry(
        CODING_STORAGE_KEY,
        r#"{
            "DOC-0001": {"resp":"Needs Review","priv":"Privileged","issues":"","notes":"keep me","savedAt":"2025-03-01T09:00:00.000Z"},
            "DOC-0002": {"resp":"Responsive","priv":"Privileged","issues":"","notes":""}
        }"#,
    );
    let mut store = CodingStore::with_clock(backend.clone(), clock());
    assert_eq!(store.coded_count(), 0);
    assert_eq!(store.unreadable().len(), 2);

    store
        .save(&DocId::from_sequence(3), CodingDraft::default())
        .unwrap();

    let raw = backend.raw(CODING_STORAGE_KEY).unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(value["DOC-0001"]["notes"], "keep me");
    assert_eq!(value["DOC-0001"]["resp"], "Needs Review");
    assert!(value["DOC-0002"].get("savedAt").is_none());
    assert_eq!(value["DOC-0003"]["resp"], "Unreviewed");

    let reopened = CodingStore::open(backend);
    assert_eq!(reopened.coded_count(), 1);
    assert_eq!(reopened.unreadable().len(), 2);
}

#[test]
fn failed_write_keeps_unreadable_entries() {
    let inner = MemoryBlobStore::new().with_entry(
        CODING_STORAGE_KEY,
        r#"{"DOC-0001":{"resp":"Needs Review"}}"#,
    );
    let mut store = CodingStore::with_clock(ReadOnlyBackend { inner }, clock());

    assert!(store.save(&DocId::from_sequence(1), CodingDraft::default()).is_err());
    assert!(store.unreadable().contains_key("DOC-0001"));
    assert_eq!(store.coded_count(), 0);
}
