//! Integration tests for CSV export.

use chrono::{NaiveDate, TimeZone, Utc};
use csv::ReaderBuilder;

use review_corpus::Corpus;
use review_model::{CodingDraft, CodingMap, DocId, PrivilegeCode, ResponsivenessCode};
use review_output::{CSV_HEADERS, export_coding, render_csv};

fn coded_doc_0002() -> CodingMap {
    let saved_at = Utc.with_ymd_and_hms(2025, 3, 1, 12, 0, 0).unwrap();
    let record = CodingDraft::new(ResponsivenessCode::Responsive, PrivilegeCode::NotPrivileged)
        .with_issues("Hold")
        .with_notes(r#"Asked about "hold" scope"#)
        .into_record(saved_at);
    let mut coding = CodingMap::new();
    coding.insert(DocId::from_sequence(2), record);
    coding
}

#[test]
fn three_document_export_snapshot() {
    let corpus = Corpus::generate(3);
    let csv = render_csv(corpus.documents(), &coded_doc_0002()).expect("render csv");
    insta::assert_snapshot!("three_document_export", csv);
}

#[test]
fn export_parses_back_with_quotes_intact() {
    let corpus = Corpus::generate(3);
    let export = export_coding(
        corpus.documents(),
        &coded_doc_0002(),
        NaiveDate::from_ymd_opt(2025, 3, 2).unwrap(),
    )
    .expect("export");

    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .from_reader(export.contents.as_bytes());
    let headers: Vec<String> = reader
        .headers()
        .unwrap()
        .iter()
        .map(String::from)
        .collect();
    assert_eq!(headers, CSV_HEADERS);

    let rows: Vec<csv::StringRecord> = reader.records().map(Result::unwrap).collect();
    assert_eq!(rows.len(), 3);
    assert_eq!(export.rows, 3);
    assert_eq!(export.filename, "doc-review-coding-2025-03-02.csv");

    let coded = &rows[1];
    assert_eq!(&coded[0], "DOC-0002");
    assert_eq!(&coded[6], "Responsive");
    assert_eq!(&coded[7], "Not Privileged");
    assert_eq!(&coded[9], r#"Asked about "hold" scope"#);
    assert_eq!(&coded[10], "2025-03-01T12:00:00.000Z");

    for uncoded in [&rows[0], &rows[2]] {
        for column in 6..11 {
            assert_eq!(&uncoded[column], "");
        }
    }
}

#[test]
fn every_corpus_document_gets_a_row() {
    let corpus = Corpus::generate(40);
    let csv = render_csv(corpus.documents(), &CodingMap::new()).unwrap();
    // Header plus one line per document; no field contains a newline.
    assert_eq!(csv.lines().count(), 41);
    assert!(csv.lines().skip(1).all(|line| line.starts_with("\"DOC-")));
}

#[test]
fn rows_are_joined_without_a_trailing_newline() {
    let corpus = Corpus::generate(3);
    let csv = render_csv(corpus.documents(), &coded_doc_0002()).unwrap();

    assert_eq!(csv.matches('\n').count(), 3);
    assert!(csv.ends_with(r#""HR","","","","","""#));
}

#[test]
fn write_to_directory_uses_default_filename() {
    let dir = tempfile::tempdir().unwrap();
    let corpus = Corpus::generate(2);
    let export = export_coding(
        corpus.documents(),
        &CodingMap::new(),
        NaiveDate::from_ymd_opt(2025, 1, 31).unwrap(),
    )
    .unwrap();

    let path = export.write_to(dir.path()).unwrap();

    assert_eq!(path, dir.path().join("doc-review-coding-2025-01-31.csv"));
    assert_eq!(std::fs::read_to_string(path).unwrap(), export.contents);
}
