//! Reviewer coding records.
//!
//! A [`CodingRecord`] is the persisted shape of one review decision. The
//! mapping key (the [`DocId`]) identifies the document, so the record itself
//! only carries the decision and when it was saved:
//!
//! ```text
//! { "resp": "Responsive", "priv": "Not Privileged",
//!   "issues": "NDA", "notes": "", "savedAt": "2025-03-01T12:00:00.000Z" }
//! ```

use std::collections::BTreeMap;

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::enums::{PrivilegeCode, ResponsivenessCode};
use crate::ids::DocId;

/// All coding records, keyed by document id.
pub type CodingMap = BTreeMap<DocId, CodingRecord>;

/// The coding form as the reviewer last filled it in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CodingDraft {
    pub responsiveness: ResponsivenessCode,
    pub privilege: PrivilegeCode,
    pub issues: String,
    pub notes: String,
}

impl CodingDraft {
    pub fn new(responsiveness: ResponsivenessCode, privilege: PrivilegeCode) -> Self {
        Self {
            responsiveness,
            privilege,
            ..Self::default()
        }
    }

    pub fn with_issues(mut self, issues: impl Into<String>) -> Self {
        self.issues = issues.into();
        self
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = notes.into();
        self
    }

    /// Snapshot the draft into a record. Free-text fields are trimmed.
    pub fn into_record(self, saved_at: DateTime<Utc>) -> CodingRecord {
        CodingRecord {
            responsiveness: self.responsiveness,
            privilege: self.privilege,
            issues: self.issues.trim().to_string(),
            notes: self.notes.trim().to_string(),
            saved_at,
        }
    }
}

impl From<&CodingRecord> for CodingDraft {
    fn from(record: &CodingRecord) -> Self {
        Self {
            responsiveness: record.responsiveness,
            privilege: record.privilege,
            issues: record.issues.clone(),
            notes: record.notes.clone(),
        }
    }
}

/// A saved review decision for one document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodingRecord {
    #[serde(rename = "resp", default)]
    pub responsiveness: ResponsivenessCode,
    #[serde(rename = "priv", default)]
    pub privilege: PrivilegeCode,
    #[serde(default)]
    pub issues: String,
    #[serde(default)]
    pub notes: String,
    #[serde(rename = "savedAt", with = "timestamp")]
    pub saved_at: DateTime<Utc>,
}

impl CodingRecord {
    /// `"{resp} / {priv}"`, as shown next to a document in listings.
    pub fn summary(&self) -> String {
        format!("{} / {}", self.responsiveness, self.privilege)
    }

    /// `savedAt` rendered the way it is persisted.
    pub fn saved_at_iso(&self) -> String {
        format_timestamp(&self.saved_at)
    }
}

/// ISO-8601 UTC with millisecond precision, e.g. `2025-03-01T12:00:00.000Z`.
pub fn format_timestamp(at: &DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}

mod timestamp {
    use chrono::{DateTime, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(at: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&super::format_timestamp(at))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<DateTime<Utc>, D::Error> {
        let raw = String::deserialize(deserializer)?;
        DateTime::parse_from_rfc3339(&raw)
            .map(|at| at.with_timezone(&Utc))
            .map_err(serde::de::Error::custom)
    }
}
