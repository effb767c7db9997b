use std::fs;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use csv::{QuoteStyle, Terminator, WriterBuilder};
use tracing::info;

use review_model::{CodingMap, Document};

use crate::error::{ExportError, Result};

/// Column order of the export. The header row is written unquoted.
pub const CSV_HEADERS: [&str; 11] = [
    "doc_id",
    "title",
    "custodian",
    "doctype",
    "date",
    "tag",
    "resp_code",
    "priv_code",
    "issues",
    "notes",
    "saved_at",
];

pub const EXPORT_FILE_PREFIX: &str = "doc-review-coding";

/// A rendered export, ready to hand to whoever delivers it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvExport {
    pub filename: String,
    pub contents: String,
    pub rows: usize,
}

impl CsvExport {
    /// Write the blob to `target`. A directory target receives the export
    /// under its default filename.
    pub fn write_to(&self, target: &Path) -> Result<PathBuf> {
        let path = if target.is_dir() {
            target.join(&self.filename)
        } else {
            target.to_path_buf()
        };
        fs::write(&path, &self.contents).map_err(|source| ExportError::Write {
            path: path.clone(),
            source,
        })?;
        info!(path = %path.display(), rows = self.rows, "wrote coding export");
        Ok(path)
    }
}

/// `doc-review-coding-YYYY-MM-DD.csv`
pub fn export_filename(date: NaiveDate) -> String {
    format!("{EXPORT_FILE_PREFIX}-{}.csv", date.format("%Y-%m-%d"))
}

/// Render one quoted row per document. Missing coding renders as empty
/// strings; embedded quotes are doubled. Lines are separated by `\n` with
/// no newline after the last one.
pub fn render_csv(documents: &[Document], coding: &CodingMap) -> Result<String> {
    let mut buffer = CSV_HEADERS.join(",").into_bytes();
    buffer.push(b'\n');

    let mut writer = WriterBuilder::new()
        .has_headers(false)
        .quote_style(QuoteStyle::Always)
        .double_quote(true)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(buffer);

    for doc in documents {
        let record = coding.get(&doc.id);
        let resp = record.map(|r| r.responsiveness.as_str()).unwrap_or_default();
        let priv_code = record.map(|r| r.privilege.as_str()).unwrap_or_default();
        let issues = record.map(|r| r.issues.as_str()).unwrap_or_default();
        let notes = record.map(|r| r.notes.as_str()).unwrap_or_default();
        let saved_at = record.map(|r| r.saved_at_iso()).unwrap_or_default();
        let date = doc.iso_date();

        writer.write_record([
            doc.id.as_str(),
            doc.title.as_str(),
            doc.custodian.as_str(),
            doc.doctype.as_str(),
            date.as_str(),
            doc.tag.as_str(),
            resp,
            priv_code,
            issues,
            notes,
            saved_at.as_str(),
        ])?;
    }

    let mut bytes = writer
        .into_inner()
        .map_err(|e| ExportError::Flush(e.into_error()))?;
    if bytes.last() == Some(&b'\n') {
        bytes.pop();
    }
    Ok(String::from_utf8(bytes)?)
}

/// Render the export for `documents` as of `today`.
pub fn export_coding(documents: &[Document], coding: &CodingMap, today: NaiveDate) -> Result<CsvExport> {
    let contents = render_csv(documents, coding)?;
    Ok(CsvExport {
        filename: export_filename(today),
        contents,
        rows: documents.len(),
    })
}
