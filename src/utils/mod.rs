//! Utility modules
//!
//! This module contains utilities and helpers:
//! - Error types and result types
//! - HTML text helpers (escaping, attribute extraction)

pub mod error;
pub mod html;

// Re-export commonly used items
pub use error::{TableError, TableResult};
pub use html::{attr_value, escape_attr, escape_text, has_class, strip_tags, text_content, unescape};
