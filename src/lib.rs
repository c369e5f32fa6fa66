//! # boqgrid
//!
//! Client-side engine for the editable BOQ (Bill of Quantities) table.
//!
//! The backend extracts per-page tables from an uploaded BOQ document and
//! stitches them into one HTML fragment. This crate turns that fragment
//! into an editable widget and keeps its state coherent through edits:
//!
//! - **Table model**: header row plus positioned data rows, parsed from
//!   and rendered back to HTML
//! - **Row operations**: insert-below, append, delete, with automatic
//!   reindexing and stripe recoloring
//! - **Image transfer**: grab/hover/release protocol for dragging product
//!   images between cells
//! - **Snapshot/reset**: pristine copy taken at stitch time, restorable
//!   at any point
//! - **Extract/export**: header-keyed JSON for the costing pipeline and a
//!   standalone sanitized HTML document for download
//! - **Backend contracts**: typed request/response shapes and URL builders
//!   for stitching, costing, document generation, and value engineering
//!   (the host performs the I/O)
//!
//! ## Usage Examples
//!
//! ```rust
//! use boqgrid::{decorate_fragment, extract_fragment};
//!
//! let fragment = "<table>\
//!     <tr><th>Item</th><th>Qty</th></tr>\
//!     <tr><td>Widget</td><td>2</td></tr></table>";
//!
//! // Raw fragment -> editable widget markup
//! let widget = decorate_fragment(fragment, "upload-1").unwrap();
//! assert!(widget.contains("contenteditable"));
//!
//! // Raw fragment -> header-keyed data
//! let data = extract_fragment(fragment).unwrap();
//! assert_eq!(data.headers, vec!["Item", "Qty"]);
//! ```

/// Core table engine
pub mod core;

/// Data layer - CSS classes, attributes, and markup constants
pub mod data;

/// Feature modules - backend workflow contracts
pub mod features;

/// Utility modules
pub mod utils;

/// WASM bindings (feature-gated)
#[cfg(feature = "wasm")]
pub mod wasm;

// Re-export the core engine
pub use core::{
    decorate, export, extract, is_action_label, parse_fragment, Cell, CellRef, DragState,
    DropOutcome, ExportDocument, ImageRef, Row, Session, Stripe, Table, TableData,
};

// Re-export markup constants and identifier helpers
pub use data::styles;
pub use data::styles::export_filename;

// Re-export backend contracts
pub use features::costing;
pub use features::documents;
pub use features::stitch;
pub use features::value_engineering;
pub use features::{
    costing_summary, costing_url, generate_url, stitch_url, value_engineering_url, BudgetOption,
    CostingFactors, CostingSummary, DocumentKind, StitchResponse,
};

// Re-export utilities
pub use utils::error::{TableError, TableResult};
pub use utils::html;

/// Parse a raw table fragment and render it as editable widget markup
pub fn decorate_fragment(fragment: &str, file_id: &str) -> TableResult<String> {
    Ok(decorate(&parse_fragment(fragment)?, file_id))
}

/// Parse a raw table fragment and extract its header-keyed data
pub fn extract_fragment(fragment: &str) -> TableResult<TableData> {
    Ok(extract(&parse_fragment(fragment)?))
}

/// Parse a raw table fragment and build its standalone sanitized export
pub fn export_fragment(fragment: &str, file_id: &str) -> TableResult<ExportDocument> {
    Ok(export(&parse_fragment(fragment)?, file_id))
}
