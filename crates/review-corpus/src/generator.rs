//! Deterministic document generation.
//!
//! Each document is a pure function of its id: the id is hashed once and the
//! resulting seed drives every pick. Pool picks use the seed shifted right by
//! 0..=4 bits so a single hash yields decorrelated choices.

use chrono::NaiveDate;
use tracing::debug;

use review_model::{DocId, Document, PrivilegeLabel, ResponsivenessLabel};

use crate::hash::fnv1a_32;
use crate::pools::{
    BODIES, CORPUS_YEAR, CUSTODIANS, DAY_SPAN, DOCTYPES, END_OF_DOCUMENT, MONTH_SPAN,
    PRIVILEGE_DOCTYPE, RESPONSIVE_TAGS, SUBJECTS, TAGS,
};

/// Corpus size used when none is configured.
pub const DEFAULT_CORPUS_SIZE: usize = 25;

fn pick(pool: &[&'static str], n: u32) -> &'static str {
    pool[n as usize % pool.len()]
}

/// Synthetic date derived from the seed.
pub fn synthetic_date(seed: u32) -> NaiveDate {
    let month = seed % MONTH_SPAN + 1;
    let day = seed % DAY_SPAN + 1;
    // Month and day are in range by construction.
    NaiveDate::from_ymd_opt(CORPUS_YEAR, month, day).unwrap_or(NaiveDate::MIN)
}

/// Privileged only for a fifth of emails.
pub fn privilege_label(doctype: &str, seed: u32) -> PrivilegeLabel {
    if doctype == PRIVILEGE_DOCTYPE && seed % 5 == 0 {
        PrivilegeLabel::Privileged
    } else {
        PrivilegeLabel::NotPrivileged
    }
}

pub fn responsiveness_label(tag: &str) -> ResponsivenessLabel {
    if RESPONSIVE_TAGS.contains(&tag) {
        ResponsivenessLabel::Responsive
    } else {
        ResponsivenessLabel::Unreviewed
    }
}

/// Generate the document for a given id.
pub fn generate_document(id: DocId) -> Document {
    let seed = fnv1a_32(id.as_str());

    let custodian = pick(CUSTODIANS, seed);
    let doctype = pick(DOCTYPES, seed >> 1);
    let tag = pick(TAGS, seed >> 2);
    let title = pick(SUBJECTS, seed >> 3);
    let sentence = pick(BODIES, seed >> 4);
    let date = synthetic_date(seed);

    let body = format!(
        "Subject: {title}\n\
         Custodian: {custodian}\n\
         Date: {date}\n\
         Doc Type: {doctype}\n\
         Tag: {tag}\n\n\
         {sentence}\n\n\
         {END_OF_DOCUMENT}",
        date = date.format("%Y-%m-%d"),
    );

    Document {
        id,
        title: title.to_string(),
        custodian: custodian.to_string(),
        doctype: doctype.to_string(),
        tag: tag.to_string(),
        date,
        body,
        privilege: privilege_label(doctype, seed),
        responsiveness: responsiveness_label(tag),
    }
}

/// Generate `count` documents with ids `DOC-0001`..`DOC-{count}`.
pub fn generate_documents(count: usize) -> Vec<Document> {
    let documents: Vec<Document> = (1..=count)
        .map(|n| generate_document(DocId::from_sequence(n)))
        .collect();
    debug!(count = documents.len(), "generated corpus");
    documents
}
