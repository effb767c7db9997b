#![deny(unsafe_code)]

use std::fmt;
use std::str::FromStr;

use crate::ModelError;

/// Prefix shared by every generated document id.
pub const DOC_ID_PREFIX: &str = "DOC-";

/// Stable document identifier of the form `DOC-####`.
///
/// Sequence numbers are zero-padded to four digits; larger corpora simply
/// grow the digit count.
#[derive(
    Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(try_from = "String", into = "String")]
pub struct DocId(String);

impl DocId {
    /// Parse a user- or store-supplied id. Surrounding whitespace is ignored
    /// and the prefix is matched case-insensitively.
    pub fn new(value: impl Into<String>) -> Result<Self, ModelError> {
        let value = value.into();
        let normalized = value.trim().to_ascii_uppercase();
        let digits = normalized.strip_prefix(DOC_ID_PREFIX).unwrap_or("");
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ModelError::InvalidDocId(value));
        }
        Ok(Self(normalized))
    }

    /// Id for the `n`th document of a corpus (1-based).
    pub fn from_sequence(n: usize) -> Self {
        Self(format!("{DOC_ID_PREFIX}{n:04}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DocId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for DocId {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for DocId {
    type Error = ModelError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<DocId> for String {
    fn from(id: DocId) -> Self {
        id.0
    }
}

impl PartialEq<str> for DocId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for DocId {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sequence_ids_are_zero_padded() {
        assert_eq!(DocId::from_sequence(1).as_str(), "DOC-0001");
        assert_eq!(DocId::from_sequence(42).as_str(), "DOC-0042");
        assert_eq!(DocId::from_sequence(12345).as_str(), "DOC-12345");
    }

    #[test]
    fn parse_normalizes_case_and_whitespace() {
        let id = DocId::new("  doc-0007 ").unwrap();
        assert_eq!(id, "DOC-0007");
    }

    #[test]
    fn parse_rejects_malformed_ids() {
        for raw in ["", "DOC-", "0001", "DOC-00a1", "FILE-0001"] {
            assert!(DocId::new(raw).is_err(), "{raw} should be rejected");
        }
    }
}
