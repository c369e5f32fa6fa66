//! Plain-data table model
//!
//! The model knows nothing about styling or event wiring; it is the
//! structural truth that decoration, row operations, and export all read
//! from. Row 0 is always the header row: fixed semantics, never editable,
//! never deletable, excluded from stripe alternation.

use serde::{Deserialize, Serialize};

use crate::utils::error::{TableError, TableResult};

/// Reference to an embedded image: opaque source URI plus the display
/// attributes worth preserving across a move
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageRef {
    /// Source URI (opaque to the engine)
    pub src: String,
    /// Alternate text, if the extraction service provided one
    pub alt: Option<String>,
    /// Inline style carried along when the image is relocated
    pub style: Option<String>,
}

impl ImageRef {
    pub fn new(src: impl Into<String>) -> Self {
        ImageRef {
            src: src.into(),
            alt: None,
            style: None,
        }
    }
}

/// A single table cell: text content plus at most one owned image
///
/// At all times exactly one cell owns a given image; the drag protocol is
/// the only mechanism that transfers ownership. A drop replaces the
/// target's previous image and preserves its text.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Cell {
    pub text: String,
    pub image: Option<ImageRef>,
}

impl Cell {
    pub fn empty() -> Self {
        Cell::default()
    }

    pub fn text(value: impl Into<String>) -> Self {
        Cell {
            text: value.into(),
            image: None,
        }
    }

    pub fn image(image: ImageRef) -> Self {
        Cell {
            text: String::new(),
            image: Some(image),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty() && self.image.is_none()
    }

    pub fn has_image(&self) -> bool {
        self.image.is_some()
    }

    /// Image reference, if this cell owns one
    pub fn image_ref(&self) -> Option<&ImageRef> {
        self.image.as_ref()
    }

    /// Text value for serialization (empty for pure image cells)
    pub fn text_value(&self) -> &str {
        &self.text
    }

    /// Detach the owned image, leaving text untouched
    pub fn take_image(&mut self) -> Option<ImageRef> {
        self.image.take()
    }
}

/// Stripe class of a data row, alternating by 1-based position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stripe {
    Odd,
    Even,
}

impl Stripe {
    pub fn of_position(position: usize) -> Self {
        if position % 2 == 0 {
            Stripe::Even
        } else {
            Stripe::Odd
        }
    }

    /// CSS class applied by the decoration layer
    pub fn css_class(&self) -> &'static str {
        match self {
            Stripe::Odd => crate::data::styles::STRIPE_ODD_CLASS,
            Stripe::Even => crate::data::styles::STRIPE_EVEN_CLASS,
        }
    }

    /// Whether rows with this stripe get the shaded background
    pub fn is_shaded(&self) -> bool {
        matches!(self, Stripe::Even)
    }
}

/// A table row
///
/// `position` is derived bookkeeping maintained by `reindex`: 0 for the
/// header row, 1-based for data rows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Row {
    pub cells: Vec<Cell>,
    pub position: usize,
}

impl Row {
    pub fn new(cells: Vec<Cell>) -> Self {
        Row { cells, position: 0 }
    }

    /// A structurally-identical blank data row with the given column count
    pub fn blank(columns: usize) -> Self {
        Row::new(vec![Cell::empty(); columns])
    }

    /// Stripe for this row; the header row has none
    pub fn stripe(&self) -> Option<Stripe> {
        if self.position == 0 {
            None
        } else {
            Some(Stripe::of_position(self.position))
        }
    }
}

/// The canonical table: ordered rows, row 0 designated the header
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Table {
    pub(crate) rows: Vec<Row>,
}

impl Table {
    /// Build a table from rows; row 0 becomes the header row
    pub fn from_rows(rows: Vec<Row>) -> TableResult<Self> {
        if rows.is_empty() {
            return Err(TableError::ParseError {
                message: "table has no rows".to_string(),
            });
        }
        let mut table = Table { rows };
        table.reindex();
        Ok(table)
    }

    /// Total rows including the header
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Data rows only (header excluded)
    pub fn data_row_count(&self) -> usize {
        self.rows.len().saturating_sub(1)
    }

    /// Columns in the data area, derived from the header row
    pub fn column_count(&self) -> usize {
        self.rows.first().map(|r| r.cells.len()).unwrap_or(0)
    }

    pub fn header_row(&self) -> &Row {
        &self.rows[0]
    }

    /// Ordered header cell texts: the canonical column-name mapping
    pub fn header_labels(&self) -> Vec<String> {
        self.header_row()
            .cells
            .iter()
            .map(|c| c.text_value().to_string())
            .collect()
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Data rows in order (header skipped)
    pub fn data_rows(&self) -> &[Row] {
        &self.rows[1..]
    }

    pub fn cell_at(&self, row: usize, col: usize) -> TableResult<&Cell> {
        self.rows
            .get(row)
            .and_then(|r| r.cells.get(col))
            .ok_or(TableError::OutOfBounds { row, col })
    }

    pub fn cell_at_mut(&mut self, row: usize, col: usize) -> TableResult<&mut Cell> {
        self.rows
            .get_mut(row)
            .and_then(|r| r.cells.get_mut(col))
            .ok_or(TableError::OutOfBounds { row, col })
    }

    /// Whether the given row index names a data row (not header, in range)
    pub fn is_data_row(&self, row: usize) -> bool {
        row >= 1 && row < self.rows.len()
    }
}
