//! Durable mapping of document id to coding record.

use std::collections::BTreeMap;
use std::collections::btree_map::Entry;

use chrono::SubsecRound;
use serde_json::{Map, Value};
use tracing::{info, warn};

use review_model::{CodingDraft, CodingMap, CodingRecord, DocId};

use crate::backend::BlobStore;
use crate::clock::{Clock, SystemClock};
use crate::error::{Result, StoreError};

/// Key the whole coding mapping is stored under.
pub const CODING_STORAGE_KEY: &str = "doc-review-coding-v2";

/// Result of a guarded reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResetOutcome {
    /// Confirmation was declined; nothing changed.
    Declined,
    /// All coding was cleared. Carries how many records were dropped.
    Cleared { removed: usize },
}

/// Persisted entries that could not be decoded, keyed by their raw key.
///
/// They never count as coded, but are written back untouched on every save.
pub type UnreadableEntries = BTreeMap<String, Value>;

/// A decoded blob: usable records plus everything that failed to decode.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoadedCoding {
    pub records: CodingMap,
    pub unreadable: UnreadableEntries,
}

/// Coding records held in memory and mirrored to a [`BlobStore`].
///
/// Every save writes the entire mapping in one backend write; there are no
/// field-level patches.
#[derive(Debug)]
pub struct CodingStore<B, C = SystemClock> {
    backend: B,
    clock: C,
    records: CodingMap,
    unreadable: UnreadableEntries,
}

impl<B: BlobStore> CodingStore<B, SystemClock> {
    /// Open a store stamped with wall-clock time.
    pub fn open(backend: B) -> Self {
        Self::with_clock(backend, SystemClock)
    }
}

impl<B: BlobStore, C: Clock> CodingStore<B, C> {
    /// Open a store with an explicit clock and load whatever the backend holds.
    pub fn with_clock(backend: B, clock: C) -> Self {
        let LoadedCoding {
            records,
            unreadable,
        } = load_blob(&backend);
        Self {
            backend,
            clock,
            records,
            unreadable,
        }
    }

    /// Read the persisted mapping afresh.
    ///
    /// Missing, unreadable or malformed state loads as an empty mapping.
    pub fn load(&self) -> CodingMap {
        load_blob(&self.backend).records
    }

    /// Replace the in-memory mapping with the persisted one.
    pub fn reload(&mut self) {
        let LoadedCoding {
            records,
            unreadable,
        } = load_blob(&self.backend);
        self.records = records;
        self.unreadable = unreadable;
    }

    pub fn records(&self) -> &CodingMap {
        &self.records
    }

    /// Entries kept from the backend that did not decode as records.
    pub fn unreadable(&self) -> &UnreadableEntries {
        &self.unreadable
    }

    pub fn get(&self, id: &DocId) -> Option<&CodingRecord> {
        self.records.get(id)
    }

    pub fn coded_count(&self) -> usize {
        self.records.len()
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Overwrite the record for `id` with a snapshot of `draft`.
    ///
    /// The backend is written before memory changes, so a failed write leaves
    /// the store as it was. A saved record replaces any unreadable entry
    /// stored under the same id.
    pub fn save(&mut self, id: &DocId, draft: CodingDraft) -> Result<&CodingRecord> {
        let record = draft.into_record(self.clock.now().trunc_subsecs(3));
        let json = self.serialize_with(id, &record)?;
        if let Err(error) = self.backend.write(CODING_STORAGE_KEY, &json) {
            warn!(doc_id = %id, %error, "failed to persist coding");
            return Err(error);
        }

        self.unreadable.remove(id.as_str());
        let coded = self.records.len() + usize::from(!self.records.contains_key(id));
        info!(doc_id = %id, coded, "saved coding");
        let saved = match self.records.entry(id.clone()) {
            Entry::Occupied(mut slot) => {
                slot.insert(record);
                slot.into_mut()
            }
            Entry::Vacant(slot) => slot.insert(record),
        };
        Ok(saved)
    }

    /// Clear every record, in memory and in the backend.
    ///
    /// `confirm` runs before anything is touched; returning `false` leaves
    /// the store unchanged.
    pub fn reset_all<F>(&mut self, confirm: F) -> Result<ResetOutcome>
    where
        F: FnOnce() -> bool,
    {
        if !confirm() {
            info!("reset declined");
            return Ok(ResetOutcome::Declined);
        }
        self.backend.remove(CODING_STORAGE_KEY)?;
        let removed = self.records.len();
        self.records.clear();
        self.unreadable.clear();
        info!(removed, "cleared all coding");
        Ok(ResetOutcome::Cleared { removed })
    }

    /// The whole mapping as it will be after `record` is stored under `id`.
    /// Unreadable entries are carried through unchanged.
    fn serialize_with(&self, id: &DocId, record: &CodingRecord) -> Result<String> {
        let to_value = |record: &CodingRecord| {
            serde_json::to_value(record).map_err(|source| StoreError::Serialization { source })
        };

        let mut object: Map<String, Value> = self
            .unreadable
            .iter()
            .filter(|(key, _)| key.as_str() != id.as_str())
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect();
        for (key, existing) in &self.records {
            if key != id {
                object.insert(key.as_str().to_string(), to_value(existing)?);
            }
        }
        object.insert(id.as_str().to_string(), to_value(record)?);

        serde_json::to_string(&object).map_err(|source| StoreError::Serialization { source })
    }
}

fn load_blob<B: BlobStore>(backend: &B) -> LoadedCoding {
    let raw = match backend.read(CODING_STORAGE_KEY) {
        Ok(Some(raw)) => raw,
        Ok(None) => return LoadedCoding::default(),
        Err(error) => {
            warn!(%error, "coding store unreadable, starting empty");
            return LoadedCoding::default();
        }
    };
    parse_blob(&raw)
}

/// Decode a persisted blob into usable records.
pub fn parse_records(raw: &str) -> CodingMap {
    parse_blob(raw).records
}

/// Decode a persisted blob. Anything that is not a JSON object yields an
/// empty mapping. Entries that fail to decode are set aside in
/// [`LoadedCoding::unreadable`] rather than dropped.
pub fn parse_blob(raw: &str) -> LoadedCoding {
    let entries = match serde_json::from_str::<Value>(raw) {
        Ok(Value::Object(entries)) => entries,
        Ok(other) => {
            warn!(kind = value_kind(&other), "coding store is not a mapping, starting empty");
            return LoadedCoding::default();
        }
        Err(error) => {
            warn!(%error, "coding store is not valid JSON, starting empty");
            return LoadedCoding::default();
        }
    };

    let mut loaded = LoadedCoding::default();
    for (key, value) in entries {
        let Ok(id) = DocId::new(key.as_str()) else {
            warn!(key = %key, "keeping coding entry with invalid document id aside");
            loaded.unreadable.insert(key, value);
            continue;
        };
        match serde_json::from_value::<CodingRecord>(value.clone()) {
            Ok(record) => {
                loaded.records.insert(id, record);
            }
            Err(error) => {
                warn!(doc_id = %id, %error, "keeping malformed coding entry aside");
                loaded.unreadable.insert(key, value);
            }
        }
    }
    loaded
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::MemoryBlobStore;
    use crate::clock::ManualClock;
    use chrono::{TimeZone, Utc};
    use review_model::{PrivilegeCode, ResponsivenessCode};

    fn clock() -> ManualClock {
        ManualClock::new(Utc.with_ymd_and_hms(2025, 3, 1, 12, 0, 0).unwrap())
    }

    fn draft() -> CodingDraft {
        CodingDraft::new(ResponsivenessCode::Responsive, PrivilegeCode::NotPrivileged)
    }

    #[test]
    fn parse_recovers_from_garbage() {
        for raw in ["", "not json", "[]", "42", "null", "\"text\""] {
            assert!(parse_records(raw).is_empty(), "{raw:?} should load empty");
        }
    }

    #[test]
    fn parse_sets_bad_entries_aside() {
        let raw = r#"{
            "DOC-0001": {"resp":"Responsive","priv":"Privileged","issues":"","notes":"","savedAt":"2025-03-01T12:00:00.000Z"},
            "DOC-0002": {"resp":"Bogus","savedAt":"2025-03-01T12:00:00.000Z"},
            "garbage": {"savedAt":"2025-03-01T12:00:00.000Z"},
            "DOC-0003": 7
        }"#;
        let loaded = parse_blob(raw);
        assert_eq!(loaded.records.len(), 1);
        assert!(loaded.records.contains_key(&DocId::from_sequence(1)));
        let aside: Vec<&str> = loaded.unreadable.keys().map(String::as_str).collect();
        assert_eq!(aside, ["DOC-0002", "DOC-0003", "garbage"]);
    }

    #[test]
    fn saving_over_an_unreadable_entry_replaces_it() {
        let backend = MemoryBlobStore::new().with_entry(
            CODING_STORAGE_KEY,
            r#"{"DOC-0001":{"resp":"Needs Review"}}"#,
        );
        let mut store = CodingStore::with_clock(backend.clone(), clock());
        assert_eq!(store.unreadable().len(), 1);

        store.save(&DocId::from_sequence(1), draft()).unwrap();

        assert!(store.unreadable().is_empty());
        assert!(!backend.raw(CODING_STORAGE_KEY).unwrap().contains("Needs Review"));
        assert_eq!(store.load().len(), 1);
    }

    #[test]
    fn save_overwrites_wholesale() {
        let mut store = CodingStore::with_clock(MemoryBlobStore::new(), clock());
        let id = DocId::from_sequence(1);

        store
            .save(&id, draft().with_issues("NDA").with_notes("first"))
            .unwrap();
        store
            .save(&id, CodingDraft::new(ResponsivenessCode::NotResponsive, PrivilegeCode::Unreviewed))
            .unwrap();

        let record = store.get(&id).unwrap();
        assert_eq!(record.responsiveness, ResponsivenessCode::NotResponsive);
        assert_eq!(record.issues, "");
        assert_eq!(record.notes, "");
        assert_eq!(store.coded_count(), 1);
    }

    #[test]
    fn declined_reset_changes_nothing() {
        let backend = MemoryBlobStore::new();
        let mut store = CodingStore::with_clock(backend.clone(), clock());
        store.save(&DocId::from_sequence(1), draft()).unwrap();

        let outcome = store.reset_all(|| false).unwrap();

        assert_eq!(outcome, ResetOutcome::Declined);
        assert_eq!(store.coded_count(), 1);
        assert!(backend.raw(CODING_STORAGE_KEY).is_some());
    }

    #[test]
    fn confirmed_reset_clears_memory_and_backend() {
        let backend = MemoryBlobStore::new();
        let mut store = CodingStore::with_clock(backend.clone(), clock());
        store.save(&DocId::from_sequence(1), draft()).unwrap();
        store.save(&DocId::from_sequence(2), draft()).unwrap();

        let outcome = store.reset_all(|| true).unwrap();

        assert_eq!(outcome, ResetOutcome::Cleared { removed: 2 });
        assert_eq!(store.coded_count(), 0);
        assert!(store.load().is_empty());
        assert!(backend.raw(CODING_STORAGE_KEY).is_none());
    }

    #[test]
    fn saved_at_is_truncated_to_millis() {
        let start = Utc.with_ymd_and_hms(2025, 3, 1, 12, 0, 0).unwrap()
            + chrono::Duration::nanoseconds(123_456_789);
        let mut store = CodingStore::with_clock(MemoryBlobStore::new(), ManualClock::new(start));
        let record = store.save(&DocId::from_sequence(1), draft()).unwrap();
        assert_eq!(record.saved_at_iso(), "2025-03-01T12:00:00.123Z");
    }
}
