use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::enums::{PrivilegeLabel, ResponsivenessLabel};
use crate::ids::DocId;

/// A generated, immutable review document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub id: DocId,
    pub title: String,
    pub custodian: String,
    pub doctype: String,
    pub tag: String,
    pub date: NaiveDate,
    pub body: String,
    /// Synthetic training label, not reviewer input.
    pub privilege: PrivilegeLabel,
    /// Synthetic training label, not reviewer input.
    pub responsiveness: ResponsivenessLabel,
}

impl Document {
    /// Calendar date as `YYYY-MM-DD`.
    pub fn iso_date(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }
}
