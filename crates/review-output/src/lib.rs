//! CSV export of coding decisions.
//!
//! Output covers every corpus document in corpus order, whatever filter is
//! active, joined with its coding record when one exists.

pub mod csv_export;
pub mod error;

pub use csv_export::{
    CSV_HEADERS, CsvExport, EXPORT_FILE_PREFIX, export_coding, export_filename, render_csv,
};
pub use error::{ExportError, Result};
