//! HTML table fragment parser
//!
//! Parses the raw fragment produced by the stitch endpoint into a `Table`.
//! The scanner is deliberately narrow: it understands `<table>`, `<tr>`,
//! `<td>`/`<th>` and embedded `<img>` tags, tolerates arbitrary attributes
//! and entity-escaped text, and ignores everything else.
//!
//! Action-column cells (recognized by their class markers) are dropped at
//! parse time, so feeding decorated widget output back through the parser
//! yields the same model — the property the Reset path relies on.

use std::ops::Range;

use lazy_static::lazy_static;
use regex::Regex;

use crate::data::styles::{ACTION_CELL_CLASS, ACTION_HEADER_CLASS};
use crate::utils::error::{TableError, TableResult};
use crate::utils::html::{attr_value, has_class, text_content};

use super::model::{Cell, ImageRef, Row, Table};

lazy_static! {
    static ref IMG_RE: Regex = Regex::new(r"(?is)<img\b([^>]*)>").unwrap();
}

/// Byte spans of one parsed element within the source fragment
struct ElementSpan {
    attrs: Range<usize>,
    inner: Range<usize>,
    end: usize,
}

/// Find the next element among `tags` in `lower[from..limit]`
///
/// `lower` must be the ASCII-lowercased copy of the source; both share
/// byte offsets, so the returned spans index into either.
fn find_element(lower: &str, tags: &[&str], from: usize, limit: usize) -> Option<ElementSpan> {
    let window = &lower[..limit];
    let mut best: Option<(usize, &str)> = None;

    for &tag in tags {
        let open = format!("<{}", tag);
        let mut search = from;
        while let Some(rel) = window[search..].find(&open) {
            let at = search + rel;
            // The tag name must end here, not be a prefix of a longer name
            match window.as_bytes().get(at + open.len()) {
                Some(b' ') | Some(b'\t') | Some(b'\n') | Some(b'\r') | Some(b'>') | Some(b'/') => {
                    if best.map_or(true, |(b, _)| at < b) {
                        best = Some((at, tag));
                    }
                    break;
                }
                _ => search = at + open.len(),
            }
        }
    }

    let (at, tag) = best?;
    let attrs_start = at + 1 + tag.len();
    let tag_close = window[attrs_start..].find('>')? + attrs_start;
    let close = format!("</{}>", tag);
    let inner_start = tag_close + 1;
    let close_at = window[inner_start..].find(&close)? + inner_start;

    Some(ElementSpan {
        attrs: attrs_start..tag_close,
        inner: inner_start..close_at,
        end: close_at + close.len(),
    })
}

/// Build a cell from its inner markup
///
/// Text and an embedded `<img>` coexist: the tag scanner strips the image
/// markup out of the text, and the first image with a `src` becomes the
/// cell's owned image.
fn parse_cell(inner: &str) -> Cell {
    let mut cell = Cell::text(text_content(inner));
    if let Some(caps) = IMG_RE.captures(inner) {
        let attrs = caps.get(1).map(|m| m.as_str()).unwrap_or("");
        if let Some(src) = attr_value(attrs, "src") {
            let mut image = ImageRef::new(src);
            image.alt = attr_value(attrs, "alt");
            image.style = attr_value(attrs, "style");
            cell.image = Some(image);
        }
    }
    cell
}

/// Parse a raw HTML table fragment into a `Table`
///
/// The first `<table>` element in the fragment is used; rows outside it
/// are ignored. Fails with `ParseError` when no table or no rows are found.
pub fn parse_fragment(input: &str) -> TableResult<Table> {
    let lower = input.to_ascii_lowercase();

    let table = find_element(&lower, &["table"], 0, lower.len()).ok_or_else(|| {
        TableError::ParseError {
            message: "no <table> element in fragment".to_string(),
        }
    })?;

    let mut rows = Vec::new();
    let mut pos = table.inner.start;

    while let Some(tr) = find_element(&lower, &["tr"], pos, table.inner.end) {
        let mut cells = Vec::new();
        let mut cell_pos = tr.inner.start;

        while let Some(td) = find_element(&lower, &["td", "th"], cell_pos, tr.inner.end) {
            let attrs = &input[td.attrs.clone()];
            cell_pos = td.end;

            // Synthetic action column: not data, never re-imported
            if has_class(attrs, ACTION_CELL_CLASS) || has_class(attrs, ACTION_HEADER_CLASS) {
                continue;
            }
            cells.push(parse_cell(&input[td.inner.clone()]));
        }

        rows.push(Row::new(cells));
        pos = tr.end;
    }

    if rows.is_empty() {
        return Err(TableError::ParseError {
            message: "table contains no rows".to_string(),
        });
    }

    Table::from_rows(rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_fragment() {
        let html = "<table><tr><th>Item</th><th>Qty</th></tr>\
                    <tr><td>Widget</td><td>2</td></tr></table>";
        let table = parse_fragment(html).unwrap();
        assert_eq!(table.row_count(), 2);
        assert_eq!(table.header_labels(), vec!["Item", "Qty"]);
        assert_eq!(table.cell_at(1, 0).unwrap().text_value(), "Widget");
    }

    #[test]
    fn test_attributes_and_entities() {
        let html = r#"<table border="1"><tr><td style="color:red">A &amp; B</td></tr>
                      <tr><td>&nbsp;x&nbsp;</td></tr></table>"#;
        let table = parse_fragment(html).unwrap();
        assert_eq!(table.cell_at(0, 0).unwrap().text_value(), "A & B");
        assert_eq!(table.cell_at(1, 0).unwrap().text_value(), "x");
    }

    #[test]
    fn test_image_cell() {
        let html = r#"<table><tr><td>Img</td></tr>
                      <tr><td><img src="pic.png" alt="p" style="max-width:100px;"></td></tr></table>"#;
        let table = parse_fragment(html).unwrap();
        let cell = table.cell_at(1, 0).unwrap();
        assert!(cell.has_image());
        let image = cell.image_ref().unwrap();
        assert_eq!(image.src, "pic.png");
        assert_eq!(image.alt.as_deref(), Some("p"));
    }

    #[test]
    fn test_action_cells_skipped() {
        let html = r#"<table>
            <tr><td>Item</td><td class="action-column-header">Actions</td></tr>
            <tr><td>Widget</td><td class="action-column-cell"><button>x</button></td></tr>
        </table>"#;
        let table = parse_fragment(html).unwrap();
        assert_eq!(table.column_count(), 1);
        assert_eq!(table.header_labels(), vec!["Item"]);
    }

    #[test]
    fn test_empty_cell() {
        let html = "<table><tr><td>H</td></tr><tr><td>  </td></tr></table>";
        let table = parse_fragment(html).unwrap();
        assert!(table.cell_at(1, 0).unwrap().is_empty());
    }

    #[test]
    fn test_not_a_table() {
        assert!(matches!(
            parse_fragment("<div>hello</div>"),
            Err(TableError::ParseError { .. })
        ));
        assert!(matches!(
            parse_fragment("<table></table>"),
            Err(TableError::ParseError { .. })
        ));
    }

    #[test]
    fn test_uppercase_tags() {
        let html = "<TABLE><TR><TD>H</TD></TR><TR><TD>v</TD></TR></TABLE>";
        let table = parse_fragment(html).unwrap();
        assert_eq!(table.cell_at(1, 0).unwrap().text_value(), "v");
    }
}
