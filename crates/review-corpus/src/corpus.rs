use std::collections::{BTreeSet, HashMap};

use review_model::{DocId, Document};

use crate::generator::generate_documents;

/// The full, immutable document collection for a session.
#[derive(Debug, Clone, Default)]
pub struct Corpus {
    documents: Vec<Document>,
    positions: HashMap<DocId, usize>,
}

/// Distinct values available for the equality filters, sorted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Facets {
    pub custodians: Vec<String>,
    pub doctypes: Vec<String>,
    pub tags: Vec<String>,
}

impl Corpus {
    /// Generate a corpus of `count` documents.
    pub fn generate(count: usize) -> Self {
        Self::from_documents(generate_documents(count))
    }

    /// Wrap already-built documents. The first occurrence of a duplicated id
    /// wins lookups.
    pub fn from_documents(documents: Vec<Document>) -> Self {
        let mut positions = HashMap::with_capacity(documents.len());
        for (index, doc) in documents.iter().enumerate() {
            positions.entry(doc.id.clone()).or_insert(index);
        }
        Self {
            documents,
            positions,
        }
    }

    pub fn documents(&self) -> &[Document] {
        &self.documents
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Document> {
        self.documents.iter()
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    pub fn get(&self, id: &DocId) -> Option<&Document> {
        self.position(id).map(|index| &self.documents[index])
    }

    /// Index of `id` in corpus order.
    pub fn position(&self, id: &DocId) -> Option<usize> {
        self.positions.get(id).copied()
    }

    pub fn contains(&self, id: &DocId) -> bool {
        self.positions.contains_key(id)
    }

    pub fn facets(&self) -> Facets {
        fn distinct<'a>(values: impl Iterator<Item = &'a String>) -> Vec<String> {
            values.collect::<BTreeSet<_>>().into_iter().cloned().collect()
        }
        Facets {
            custodians: distinct(self.documents.iter().map(|d| &d.custodian)),
            doctypes: distinct(self.documents.iter().map(|d| &d.doctype)),
            tags: distinct(self.documents.iter().map(|d| &d.tag)),
        }
    }
}

impl<'a> IntoIterator for &'a Corpus {
    type Item = &'a Document;
    type IntoIter = std::slice::Iter<'a, Document>;

    fn into_iter(self) -> Self::IntoIter {
        self.documents.iter()
    }
}
