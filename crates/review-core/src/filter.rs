//! Filter engine: corpus + criteria to an ordered subsequence.
//!
//! Criteria combine with AND. Equality filters match exactly and an empty
//! filter matches everything. The free-text query is a case-insensitive
//! substring search over `"{id} {title} {body}"`. Results keep corpus order.

use review_model::criteria::active;
use review_model::{Document, FilterCriteria};

/// Criteria with the query normalized once up front.
struct Compiled<'a> {
    query: Option<String>,
    custodian: Option<&'a str>,
    doctype: Option<&'a str>,
    tag: Option<&'a str>,
    criteria: &'a FilterCriteria,
}

impl<'a> Compiled<'a> {
    fn new(criteria: &'a FilterCriteria) -> Self {
        Self {
            query: criteria.normalized_query(),
            custodian: active(criteria.custodian.as_deref()),
            doctype: active(criteria.doctype.as_deref()),
            tag: active(criteria.tag.as_deref()),
            criteria,
        }
    }

    fn matches(&self, doc: &Document) -> bool {
        if self.custodian.is_some_and(|c| doc.custodian != c) {
            return false;
        }
        if self.doctype.is_some_and(|d| doc.doctype != d) {
            return false;
        }
        if self.tag.is_some_and(|t| doc.tag != t) {
            return false;
        }
        if self.criteria.privilege.is_some_and(|p| doc.privilege != p) {
            return false;
        }
        if self
            .criteria
            .responsiveness
            .is_some_and(|r| doc.responsiveness != r)
        {
            return false;
        }
        match &self.query {
            Some(query) => haystack(doc).contains(query.as_str()),
            None => true,
        }
    }
}

fn haystack(doc: &Document) -> String {
    format!("{} {} {}", doc.id, doc.title, doc.body).to_lowercase()
}

/// True if `doc` satisfies every active criterion.
pub fn matches(doc: &Document, criteria: &FilterCriteria) -> bool {
    Compiled::new(criteria).matches(doc)
}

/// Corpus indices of matching documents, ascending.
pub fn filter_indices(documents: &[Document], criteria: &FilterCriteria) -> Vec<usize> {
    let compiled = Compiled::new(criteria);
    documents
        .iter()
        .enumerate()
        .filter(|(_, doc)| compiled.matches(doc))
        .map(|(index, _)| index)
        .collect()
}

/// Matching documents in corpus order.
pub fn filter_documents<'a>(documents: &'a [Document], criteria: &FilterCriteria) -> Vec<&'a Document> {
    let compiled = Compiled::new(criteria);
    documents.iter().filter(|doc| compiled.matches(doc)).collect()
}
