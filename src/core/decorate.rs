//! Rendering/decoration layer
//!
//! Turns a plain `Table` into the editable widget markup: distinct header
//! styling, stripe classes, `contenteditable` data cells, one action cell
//! per data row, and drag affordances on images. All interactivity is
//! keyed by data attributes (`data-action`, `data-row-index`) so the host
//! binds a single delegated listener per table instead of re-serialized
//! inline handlers.
//!
//! Decoration is a pure function of the model. Because the parser strips
//! action-column markers, `parse(decorate(t))` never accumulates a second
//! action column — the property the Reset path depends on.

use std::fmt::Write;

use crate::data::styles::{
    table_dom_id, ACTION_BUTTON_CLASS, ACTION_CELL_CLASS, ACTION_CELL_STYLE, ACTION_COLUMN_LABEL,
    ACTION_HEADER_CLASS, ACTION_HEADER_STYLE, ATTR_ACTION, ATTR_DRAGGABLE_IMAGE,
    ATTR_DROP_TARGET, ATTR_FILE_ID, ATTR_ROW_INDEX, DATA_CELL_STYLE, HEADER_CELL_STYLE,
    IMAGE_STYLE, SHADED_ROW_BG,
};
use crate::utils::html::{escape_attr, escape_text};

use super::model::{Cell, ImageRef, Row, Stripe, Table};

/// Render an `<img>` element for a cell
///
/// `interactive` adds the drag affordances; the export path renders the
/// same image without them.
pub fn render_image(image: &ImageRef, interactive: bool) -> String {
    let mut out = format!(r#"<img src="{}""#, escape_attr(&image.src));
    if let Some(alt) = &image.alt {
        let _ = write!(out, r#" alt="{}""#, escape_attr(alt));
    }
    if interactive {
        let style = image.style.as_deref().unwrap_or(IMAGE_STYLE);
        let _ = write!(
            out,
            r#" style="{}" draggable="true" {}="true""#,
            escape_attr(style),
            ATTR_DRAGGABLE_IMAGE
        );
    }
    out.push('>');
    out
}

/// Render the body of a cell: escaped text, then the owned image
fn render_cell_body(cell: &Cell, interactive: bool) -> String {
    let mut out = escape_text(&cell.text);
    if let Some(image) = &cell.image {
        out.push_str(&render_image(image, interactive));
    }
    out
}

fn write_header_row(out: &mut String, row: &Row) {
    let _ = writeln!(out, r#"<tr {}="0">"#, ATTR_ROW_INDEX);
    for cell in &row.cells {
        let _ = writeln!(
            out,
            r#"<td style="{}">{}</td>"#,
            HEADER_CELL_STYLE,
            render_cell_body(cell, false)
        );
    }
    let _ = writeln!(
        out,
        r#"<td class="{}" contenteditable="false" style="{}">{}</td>"#,
        ACTION_HEADER_CLASS, ACTION_HEADER_STYLE, ACTION_COLUMN_LABEL
    );
    let _ = writeln!(out, "</tr>");
}

fn write_action_cell(out: &mut String, file_id: &str, position: usize) {
    let _ = writeln!(
        out,
        r#"<td class="{}" contenteditable="false" style="{}">"#,
        ACTION_CELL_CLASS, ACTION_CELL_STYLE
    );
    for (action, title, glyph) in [
        ("add", "Add row below", "&#x2795;"),
        ("delete", "Delete row", "&#x1F5D1;"),
    ] {
        let _ = writeln!(
            out,
            r#"<button type="button" class="{}" {}="{}" {}="{}" {}="{}" title="{}">{}</button>"#,
            ACTION_BUTTON_CLASS,
            ATTR_ACTION,
            action,
            ATTR_FILE_ID,
            escape_attr(file_id),
            ATTR_ROW_INDEX,
            position,
            title,
            glyph
        );
    }
    let _ = writeln!(out, "</td>");
}

fn write_data_row(out: &mut String, row: &Row, file_id: &str) {
    let stripe = row.stripe().unwrap_or(Stripe::Odd);
    let bg = if stripe.is_shaded() {
        format!(r#" style="background-color:{};""#, SHADED_ROW_BG)
    } else {
        String::new()
    };
    let _ = writeln!(
        out,
        r#"<tr {}="{}" {}="{}" class="{}"{}>"#,
        ATTR_ROW_INDEX,
        row.position,
        ATTR_FILE_ID,
        escape_attr(file_id),
        stripe.css_class(),
        bg
    );
    for cell in &row.cells {
        let _ = writeln!(
            out,
            r#"<td contenteditable="true" {}="true" style="{}">{}</td>"#,
            ATTR_DROP_TARGET,
            DATA_CELL_STYLE,
            render_cell_body(cell, true)
        );
    }
    write_action_cell(out, file_id, row.position);
    let _ = writeln!(out, "</tr>");
}

/// Produce the editable widget markup for a table
pub fn decorate(table: &Table, file_id: &str) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        r#"<table id="{}" border="1" style="width:100%;border-collapse:collapse;margin-top:10px;">"#,
        escape_attr(&table_dom_id(file_id))
    );
    write_header_row(&mut out, table.header_row());
    for row in table.data_rows() {
        write_data_row(&mut out, row, file_id);
    }
    out.push_str("</table>\n");
    out
}
