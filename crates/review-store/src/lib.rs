//! Durable coding storage for the document review trainer.
//!
//! The [`CodingStore`] keeps every coding record in memory and mirrors the
//! whole mapping to a [`BlobStore`] under a single key as a JSON object:
//!
//! ```text
//! doc-review-coding-v2 = {
//!   "DOC-0002": { "resp": "Responsive", "priv": "Not Privileged",
//!                 "issues": "", "notes": "", "savedAt": "2025-03-01T12:00:00.000Z" }
//! }
//! ```
//!
//! # Recovery
//!
//! Loading never fails. A missing key, an unreadable backend, invalid JSON or
//! a non-object value all load as an empty mapping. Entries inside a valid
//! object that do not decode are kept aside and written back on every save,
//! so they are never lost. Write failures are returned to the caller.
//!
//! # Backends
//!
//! - [`MemoryBlobStore`]: shared in-process map, for tests and ephemeral runs
//! - [`FileBlobStore`]: one JSON file per key with atomic replace

mod backend;
mod clock;
mod coding_store;
mod error;
mod file;

pub use backend::{BlobStore, MemoryBlobStore};
pub use clock::{Clock, ManualClock, SystemClock};
pub use coding_store::{
    CODING_STORAGE_KEY, CodingStore, LoadedCoding, ResetOutcome, UnreadableEntries, parse_blob,
    parse_records,
};
pub use error::{Result, StoreError};
pub use file::FileBlobStore;
