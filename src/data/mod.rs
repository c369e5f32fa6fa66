//! Data layer - static styling and attribute vocabulary
//!
//! This module contains the shared constants used across decoration,
//! parsing, and export:
//! - Action-column class markers
//! - Delegated-listener data attributes
//! - Inline style strings and the export stylesheet
//! - Session-derived DOM identifiers

pub mod styles;

// Re-export commonly used items
pub use styles::{
    editable_container_id, export_filename, stitch_result_id, table_dom_id, ACTION_BUTTON_CLASS,
    ACTION_CELL_CLASS, ACTION_COLUMN_LABEL, ACTION_HEADER_CLASS, ATTR_ACTION,
    ATTR_DRAGGABLE_IMAGE, ATTR_DROP_TARGET, ATTR_FILE_ID, ATTR_ROW_INDEX, DROP_HOVER_CLASS,
    EXPORT_STYLESHEET, EXPORT_TITLE, GRABBED_IMAGE_CLASS, INTERACTIVE_ATTRIBUTES,
    STRIPE_EVEN_CLASS, STRIPE_ODD_CLASS,
};
