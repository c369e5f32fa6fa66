//! Extract & export
//!
//! `extract` reads the model back into a plain header-keyed payload for
//! the costing endpoint; `export` produces a self-contained, sanitized
//! HTML document named deterministically from the session id.

use std::fmt::Write;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::data::styles::{
    export_filename, EXPORT_BYLINE, EXPORT_HEADING, EXPORT_STYLESHEET, EXPORT_TITLE,
};
use crate::utils::html::escape_text;

use super::decorate::render_image;
use super::model::{Cell, Table};

/// Header-keyed table payload, the wire shape shared with the costing
/// endpoint: ordered headers plus one ordered label → value map per row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableData {
    pub headers: Vec<String>,
    pub rows: Vec<IndexMap<String, String>>,
}

/// A standalone export: deterministic filename plus full document markup
#[derive(Debug, Clone, Serialize)]
pub struct ExportDocument {
    pub filename: String,
    pub html: String,
}

/// Whether a header label names the synthetic action column
///
/// Action cells never reach the model when parsing our own decorated
/// output, but data arriving from elsewhere may still carry the column.
pub fn is_action_label(label: &str) -> bool {
    let label = label.trim();
    label.eq_ignore_ascii_case("action") || label.eq_ignore_ascii_case("actions")
}

/// Serialize one cell for extraction: image-bearing cells keep their
/// markup (appended after any text, mirroring the cell's rendered body),
/// text cells just their text
fn cell_value(cell: &Cell) -> String {
    match &cell.image {
        Some(image) if cell.text.is_empty() => render_image(image, false),
        Some(image) => format!("{}{}", cell.text, render_image(image, false)),
        None => cell.text.clone(),
    }
}

/// Read the table back into a plain header-keyed `TableData`
pub fn extract(table: &Table) -> TableData {
    let labels = table.header_labels();
    let headers: Vec<String> = labels
        .iter()
        .filter(|l| !is_action_label(l))
        .cloned()
        .collect();

    let rows = table
        .data_rows()
        .iter()
        .map(|row| {
            let mut record = IndexMap::new();
            for (label, cell) in labels.iter().zip(&row.cells) {
                if is_action_label(label) {
                    continue;
                }
                record.insert(label.clone(), cell_value(cell));
            }
            record
        })
        .collect();

    TableData { headers, rows }
}

/// Render the sanitized table: no action column, no interactive
/// attributes, presentation left to the export stylesheet
fn render_plain(table: &Table) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "<table>");
    for row in table.rows() {
        let _ = writeln!(out, "<tr>");
        for (label, cell) in table.header_labels().iter().zip(&row.cells) {
            if is_action_label(label) {
                continue;
            }
            let mut body = escape_text(&cell.text);
            if let Some(image) = &cell.image {
                body.push_str(&render_image(image, false));
            }
            let _ = writeln!(out, "<td>{}</td>", body);
        }
        let _ = writeln!(out, "</tr>");
    }
    out.push_str("</table>\n");
    out
}

/// Produce the standalone export document for a session
pub fn export(table: &Table, file_id: &str) -> ExportDocument {
    let html = format!(
        "<!DOCTYPE html>\n\
         <html>\n\
         <head>\n\
         <meta charset=\"UTF-8\">\n\
         <title>{title}</title>\n\
         <style>\n{stylesheet}\n</style>\n\
         </head>\n\
         <body>\n\
         <h1>{heading}</h1>\n\
         <p>{byline}</p>\n\
         {table}\
         </body>\n\
         </html>\n",
        title = escape_text(EXPORT_TITLE),
        stylesheet = EXPORT_STYLESHEET,
        heading = escape_text(EXPORT_HEADING),
        byline = escape_text(EXPORT_BYLINE),
        table = render_plain(table),
    );

    ExportDocument {
        filename: export_filename(&sanitize_file_id(file_id)),
        html,
    }
}

/// Keep the session id filesystem-safe in the generated filename
fn sanitize_file_id(file_id: &str) -> String {
    file_id
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect()
}
