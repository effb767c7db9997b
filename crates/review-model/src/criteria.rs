use serde::{Deserialize, Serialize};

use crate::enums::{PrivilegeLabel, ResponsivenessLabel};

/// Active filter criteria. Every empty field is a wildcard.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterCriteria {
    /// Free-text query, matched case-insensitively.
    pub query: String,
    pub custodian: Option<String>,
    pub doctype: Option<String>,
    pub tag: Option<String>,
    pub privilege: Option<PrivilegeLabel>,
    pub responsiveness: Option<ResponsivenessLabel>,
}

impl FilterCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = query.into();
        self
    }

    pub fn with_custodian(mut self, custodian: impl Into<String>) -> Self {
        self.custodian = Some(custodian.into());
        self
    }

    pub fn with_doctype(mut self, doctype: impl Into<String>) -> Self {
        self.doctype = Some(doctype.into());
        self
    }

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = Some(tag.into());
        self
    }

    pub fn with_privilege(mut self, privilege: PrivilegeLabel) -> Self {
        self.privilege = Some(privilege);
        self
    }

    pub fn with_responsiveness(mut self, responsiveness: ResponsivenessLabel) -> Self {
        self.responsiveness = Some(responsiveness);
        self
    }

    /// Lowercased query with surrounding whitespace removed, or `None` when
    /// the query is blank.
    pub fn normalized_query(&self) -> Option<String> {
        let trimmed = self.query.trim();
        (!trimmed.is_empty()).then(|| trimmed.to_lowercase())
    }

    /// True when no criterion narrows the corpus.
    pub fn is_empty(&self) -> bool {
        self.normalized_query().is_none()
            && active(self.custodian.as_deref()).is_none()
            && active(self.doctype.as_deref()).is_none()
            && active(self.tag.as_deref()).is_none()
            && self.privilege.is_none()
            && self.responsiveness.is_none()
    }
}

/// Treat an empty equality filter the same as an absent one.
pub fn active(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_fields_are_wildcards() {
        let criteria = FilterCriteria {
            query: "   ".to_string(),
            custodian: Some(String::new()),
            ..FilterCriteria::default()
        };
        assert!(criteria.is_empty());
        assert_eq!(criteria.normalized_query(), None);
    }

    #[test]
    fn query_is_trimmed_and_lowercased() {
        let criteria = FilterCriteria::new().with_query("  Vendor TERMS ");
        assert_eq!(criteria.normalized_query().as_deref(), Some("vendor terms"));
        assert!(!criteria.is_empty());
    }
}
