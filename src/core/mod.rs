//! Core table-editing engine
//!
//! This module contains the editable table substrate:
//! - `model`: plain-data table representation (rows, cells, images)
//! - `parser`: HTML table fragment → model
//! - `ops`: row insert/append/delete with reindexing
//! - `drag`: the image transfer protocol state machine
//! - `decorate`: model → editable widget markup
//! - `session`: per-widget lifecycle (snapshot, reset, drag state)
//! - `export`: extraction payloads and standalone document export

pub mod decorate;
pub mod drag;
pub mod export;
pub mod model;
pub mod ops;
pub mod parser;
pub mod session;


// Re-export main types and functions
pub use decorate::{decorate, render_image};
pub use drag::{CellRef, DragState, DropOutcome};
pub use export::{export, extract, is_action_label, ExportDocument, TableData};
pub use model::{Cell, ImageRef, Row, Stripe, Table};
pub use parser::parse_fragment;
pub use session::Session;
