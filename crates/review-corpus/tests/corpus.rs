//! Reproducibility tests for corpus generation.

use proptest::prelude::*;

use review_corpus::pools::{CUSTODIANS, DOCTYPES, TAGS};
use review_corpus::{Corpus, fnv1a_32, generate_documents};

#[test]
fn regenerating_yields_identical_documents() {
    let first = generate_documents(50);
    let second = generate_documents(50);
    assert_eq!(first, second);
}

#[test]
fn ids_are_sequential() {
    let corpus = Corpus::generate(12);
    let ids: Vec<String> = corpus.iter().map(|d| d.id.to_string()).collect();
    assert_eq!(ids.first().map(String::as_str), Some("DOC-0001"));
    assert_eq!(ids.last().map(String::as_str), Some("DOC-0012"));
    assert_eq!(ids.len(), 12);
}

#[test]
fn smaller_corpus_is_a_prefix_of_larger() {
    let small = generate_documents(10);
    let large = generate_documents(30);
    assert_eq!(small.as_slice(), &large[..10]);
}

#[test]
fn values_come_from_pools() {
    for doc in generate_documents(100) {
        assert!(CUSTODIANS.contains(&doc.custodian.as_str()));
        assert!(DOCTYPES.contains(&doc.doctype.as_str()));
        assert!(TAGS.contains(&doc.tag.as_str()));
        assert!(doc.body.contains(&doc.title));
        assert!(doc.body.ends_with("— End of document —"));
    }
}

proptest! {
    #[test]
    fn hash_is_deterministic(input in ".*") {
        prop_assert_eq!(fnv1a_32(&input), fnv1a_32(&input.clone()));
    }

    #[test]
    fn generation_is_deterministic(count in 0usize..64) {
        prop_assert_eq!(generate_documents(count), generate_documents(count));
    }
}
