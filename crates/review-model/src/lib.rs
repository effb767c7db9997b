//! Data model for the document review trainer.
//!
//! Documents are generated once and never change. Coding records are the only
//! reviewer-authored data; filter criteria are transient and owned by whoever
//! drives the session.

pub mod coding;
pub mod criteria;
pub mod document;
pub mod enums;
pub mod error;
pub mod ids;

pub use coding::{CodingDraft, CodingMap, CodingRecord, format_timestamp};
pub use criteria::FilterCriteria;
pub use document::Document;
pub use enums::{PrivilegeCode, PrivilegeLabel, ResponsivenessCode, ResponsivenessLabel};
pub use error::{ModelError, Result};
pub use ids::{DOC_ID_PREFIX, DocId};
