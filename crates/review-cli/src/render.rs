//! Terminal rendering for documents, coding and facets.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use review_core::{DateStyle, ReviewSession, format_date, format_saved_at};
use review_corpus::Facets;
use review_model::{CodingRecord, Document};
use review_store::{BlobStore, Clock};

/// Filtered view as a table, with the selection marked.
pub fn document_table<B: BlobStore, C: Clock>(
    session: &ReviewSession<B, C>,
    style: DateStyle,
) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell(""),
        header_cell("Doc ID"),
        header_cell("Title"),
        header_cell("Custodian"),
        header_cell("Type"),
        header_cell("Date"),
        header_cell("Tag"),
        header_cell("Coding"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Center);
    let selected = session.selected_id();
    for doc in session.filtered_view() {
        let marker = if selected == Some(&doc.id) {
            Cell::new("▶").fg(Color::Green).add_attribute(Attribute::Bold)
        } else {
            Cell::new("")
        };
        table.add_row(vec![
            marker,
            Cell::new(doc.id.as_str())
                .fg(Color::Blue)
                .add_attribute(Attribute::Bold),
            Cell::new(&doc.title),
            Cell::new(&doc.custodian),
            Cell::new(&doc.doctype),
            Cell::new(format_date(doc.date, style)),
            Cell::new(&doc.tag),
            coding_cell(session.coding_for(&doc.id)),
        ]);
    }
    table
}

/// Available filter values.
pub fn facets_table(facets: &Facets) -> Table {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Facet"), header_cell("Values")]);
    apply_table_style(&mut table);
    table.add_row(vec![Cell::new("custodian"), Cell::new(facets.custodians.join(", "))]);
    table.add_row(vec![Cell::new("doctype"), Cell::new(facets.doctypes.join(", "))]);
    table.add_row(vec![Cell::new("tag"), Cell::new(facets.tags.join(", "))]);
    table
}

/// Plain-text document view: metadata, training labels, coding, then body.
pub fn document_detail(doc: &Document, coding: Option<&CodingRecord>, style: DateStyle) -> String {
    let mut lines = vec![
        format!("{}  {}", doc.id, doc.title),
        format!("Custodian:    {}", doc.custodian),
        format!("Doc type:     {}", doc.doctype),
        format!("Date:         {}", format_date(doc.date, style)),
        format!("Tag:          {}", doc.tag),
        format!("Ground truth: {} / {}", doc.responsiveness, doc.privilege),
    ];
    match coding {
        Some(record) => {
            lines.push(format!("Coding:       {}", record.summary()));
            if !record.issues.is_empty() {
                lines.push(format!("Issues:       {}", record.issues));
            }
            if !record.notes.is_empty() {
                lines.push(format!("Notes:        {}", record.notes));
            }
            lines.push(format!("              {}", format_saved_at(&record.saved_at, style)));
        }
        None => lines.push("Coding:       not coded".to_string()),
    }
    lines.push(String::new());
    lines.push(doc.body.clone());
    lines.join("\n")
}

/// One-line status for the current position in the view.
pub fn status_line<B: BlobStore, C: Clock>(session: &ReviewSession<B, C>) -> String {
    let Some(doc) = session.selected_document() else {
        return format!("No document selected ({})", session.stats());
    };
    let position = match session.selected_index() {
        Some(index) => format!("{}/{}", index + 1, session.filtered_len()),
        None => "outside filter".to_string(),
    };
    format!(
        "{}  {}  [{}]  ({position})",
        doc.id,
        doc.title,
        session.coding_summary(&doc.id)
    )
}

fn coding_cell(record: Option<&CodingRecord>) -> Cell {
    match record {
        Some(record) => Cell::new(record.summary()).fg(Color::Green),
        None => dim_cell(review_core::UNCODED_SUMMARY),
    }
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
