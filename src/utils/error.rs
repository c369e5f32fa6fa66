//! Error handling for Boqgrid table operations
//!
//! This module provides a unified error type and result type for all
//! table-editing operations.

use std::fmt;

/// Table operation error type
#[derive(Debug, Clone, PartialEq)]
pub enum TableError {
    /// Cell indices exceed the current table dimensions
    OutOfBounds { row: usize, col: usize },
    /// Row index does not name a valid position for the operation
    InvalidPosition { index: usize },
    /// Deletion refused: a table must keep its header plus one data row
    MinimumRowsViolation,
    /// Reset requested but no pristine snapshot exists for the session
    NoSnapshot { file_id: String },
    /// No live table is mounted for the session
    TableNotFound { id: String },
    /// Input fragment could not be parsed as a table
    ParseError { message: String },
    /// Backend reported a non-success response
    Backend { message: String },
    /// IO error (for file operations)
    IoError { message: String },
}

impl fmt::Display for TableError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TableError::OutOfBounds { row, col } => {
                write!(f, "Cell ({}, {}) is out of bounds", row, col)
            }
            TableError::InvalidPosition { index } => {
                write!(f, "Row index {} is not a valid position", index)
            }
            TableError::MinimumRowsViolation => {
                write!(f, "Cannot delete the last remaining data row")
            }
            TableError::NoSnapshot { file_id } => {
                write!(f, "No snapshot stored for session '{}'", file_id)
            }
            TableError::TableNotFound { id } => {
                write!(f, "No table mounted for session '{}'", id)
            }
            TableError::ParseError { message } => {
                write!(f, "Parse error: {}", message)
            }
            TableError::Backend { message } => {
                write!(f, "Backend error: {}", message)
            }
            TableError::IoError { message } => {
                write!(f, "IO error: {}", message)
            }
        }
    }
}

impl std::error::Error for TableError {}

impl From<std::io::Error> for TableError {
    fn from(err: std::io::Error) -> Self {
        TableError::IoError {
            message: err.to_string(),
        }
    }
}

/// Result type for table operations
pub type TableResult<T> = Result<T, TableError>;
