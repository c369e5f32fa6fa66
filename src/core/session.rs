//! Session context
//!
//! One `Session` per mounted widget: the session id that threads through
//! every backend endpoint and DOM identifier, the live table, the
//! grabbed-image state, and the pristine snapshot taken at stitch time.
//! This replaces the page-global mutable state of the original UI with an
//! explicit lifecycle: created at widget mount, cleared at teardown or
//! session switch.

use crate::utils::error::{TableError, TableResult};

use super::decorate::decorate;
use super::drag::{CellRef, DragState, DropOutcome};
use super::export::{export, extract, ExportDocument, TableData};
use super::model::Table;
use super::parser::parse_fragment;

#[derive(Debug)]
pub struct Session {
    file_id: String,
    table: Option<Table>,
    snapshot: Option<Table>,
    drag: DragState,
}

impl Session {
    pub fn new(file_id: impl Into<String>) -> Self {
        Session {
            file_id: file_id.into(),
            table: None,
            snapshot: None,
            drag: DragState::new(),
        }
    }

    /// The correlation key shared with the backend
    pub fn file_id(&self) -> &str {
        &self.file_id
    }

    pub fn has_snapshot(&self) -> bool {
        self.snapshot.is_some()
    }

    /// The live table, if one is mounted
    pub fn table(&self) -> TableResult<&Table> {
        self.table.as_ref().ok_or_else(|| TableError::TableNotFound {
            id: self.file_id.clone(),
        })
    }

    fn table_mut(&mut self) -> TableResult<&mut Table> {
        self.table.as_mut().ok_or_else(|| TableError::TableNotFound {
            id: self.file_id.clone(),
        })
    }

    /// Install a freshly stitched table: take the pristine snapshot and
    /// return the decorated widget markup for the host to inject.
    ///
    /// A second install for the same session overwrites the live table and
    /// its snapshot wholesale (last stitch response wins), discarding any
    /// local edits.
    pub fn install(&mut self, table: Table) -> String {
        let html = decorate(&table, &self.file_id);
        self.snapshot = Some(table.clone());
        self.table = Some(table);
        self.drag.cancel();
        html
    }

    /// Parse a raw stitched fragment and install it
    pub fn mount_fragment(&mut self, fragment: &str) -> TableResult<String> {
        let table = parse_fragment(fragment)?;
        Ok(self.install(table))
    }

    /// Current widget markup for the live table
    pub fn decorate(&self) -> TableResult<String> {
        Ok(decorate(self.table()?, &self.file_id))
    }

    /// Replace the live table with the pristine snapshot and return the
    /// fresh decoration the host must re-mount (re-attaching its delegated
    /// listeners). Destructive; the caller is responsible for confirming
    /// with the user first.
    pub fn reset(&mut self) -> TableResult<String> {
        let snapshot = self.snapshot.clone().ok_or_else(|| TableError::NoSnapshot {
            file_id: self.file_id.clone(),
        })?;
        self.drag.cancel();
        let html = decorate(&snapshot, &self.file_id);
        self.table = Some(snapshot);
        Ok(html)
    }

    /// Drop the live table, snapshot, and any in-flight drag
    pub fn teardown(&mut self) {
        self.table = None;
        self.snapshot = None;
        self.drag.cancel();
    }

    // ---- row operations (mutate, then re-render) ----

    /// Insert a blank row below `row_index`; returns the fresh widget markup
    pub fn add_row_below(&mut self, row_index: usize) -> TableResult<String> {
        self.table_mut()?.insert_row_after(row_index)?;
        self.decorate()
    }

    /// Append a blank row at the bottom; returns the fresh widget markup
    pub fn append_row(&mut self) -> TableResult<String> {
        self.table_mut()?.append_row();
        self.decorate()
    }

    /// Delete the data row at `row_index`; returns the fresh widget markup.
    /// Destructive; the caller confirms with the user first.
    pub fn delete_row(&mut self, row_index: usize) -> TableResult<String> {
        self.table_mut()?.delete_row(row_index)?;
        self.decorate()
    }

    // ---- image transfer protocol ----

    /// Drag started on the image in the given cell; true if a grab began
    pub fn drag_start(&mut self, at: CellRef) -> bool {
        match &self.table {
            Some(table) => self.drag.grab(table, at),
            None => false,
        }
    }

    /// Hover feedback: should the host highlight this cell?
    pub fn drag_enter(&self, at: CellRef) -> bool {
        match &self.table {
            Some(table) => self.drag.hover(table, at),
            None => false,
        }
    }

    /// Drop on the given cell
    pub fn drop_image(&mut self, at: CellRef) -> DropOutcome {
        match self.table.as_mut() {
            Some(table) => self.drag.release(table, at),
            None => {
                self.drag.cancel();
                DropOutcome::NoGrab
            }
        }
    }

    /// Drag ended without a drop (abandoned); restores cue state
    pub fn drag_end(&mut self) {
        self.drag.cancel();
    }

    /// Whether an image is currently grabbed
    pub fn dragging(&self) -> bool {
        self.drag.grabbed().is_some()
    }

    // ---- serialization ----

    /// Header-keyed payload of the live table (for costing or download)
    pub fn extract(&self) -> TableResult<TableData> {
        Ok(extract(self.table()?))
    }

    /// Standalone sanitized export of the live table
    pub fn export(&self) -> TableResult<ExportDocument> {
        Ok(export(self.table()?, &self.file_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FRAGMENT: &str = "<table>\
        <tr><th>Item</th><th>Qty</th></tr>\
        <tr><td>Widget</td><td>2</td></tr>\
        <tr><td>Gadget</td><td>5</td></tr></table>";

    #[test]
    fn test_mount_and_decorate() {
        let mut session = Session::new("f1");
        let html = session.mount_fragment(FRAGMENT).unwrap();
        assert!(html.contains(r#"id="table-f1""#));
        assert!(session.has_snapshot());
    }

    #[test]
    fn test_no_table_mounted() {
        let session = Session::new("f1");
        assert_eq!(
            session.table().unwrap_err(),
            TableError::TableNotFound {
                id: "f1".to_string()
            }
        );
    }

    #[test]
    fn test_reset_restores_pristine_state() {
        let mut session = Session::new("f1");
        session.mount_fragment(FRAGMENT).unwrap();
        session.append_row().unwrap();
        session.append_row().unwrap();
        assert_eq!(session.table().unwrap().data_row_count(), 4);

        session.reset().unwrap();
        assert_eq!(session.table().unwrap().data_row_count(), 2);
        assert_eq!(
            session.table().unwrap().cell_at(1, 0).unwrap().text_value(),
            "Widget"
        );
    }

    #[test]
    fn test_reset_without_snapshot() {
        let mut session = Session::new("f1");
        assert!(matches!(
            session.reset(),
            Err(TableError::NoSnapshot { .. })
        ));
    }

    #[test]
    fn test_reset_is_repeatable() {
        // snapshot is read-only: consuming it for reset must not spend it
        let mut session = Session::new("f1");
        session.mount_fragment(FRAGMENT).unwrap();
        session.delete_row(1).unwrap();
        session.reset().unwrap();
        session.delete_row(1).unwrap();
        session.reset().unwrap();
        assert_eq!(session.table().unwrap().data_row_count(), 2);
    }

    #[test]
    fn test_second_install_supersedes_snapshot() {
        let mut session = Session::new("f1");
        session.mount_fragment(FRAGMENT).unwrap();
        session
            .mount_fragment("<table><tr><th>A</th></tr><tr><td>1</td></tr></table>")
            .unwrap();
        session.reset().unwrap();
        assert_eq!(session.table().unwrap().header_labels(), vec!["A"]);
    }

    #[test]
    fn test_row_ops_rerender() {
        let mut session = Session::new("f1");
        session.mount_fragment(FRAGMENT).unwrap();
        let html = session.add_row_below(1).unwrap();
        assert_eq!(html.matches("action-column-cell").count(), 3);
        let html = session.delete_row(1).unwrap();
        assert_eq!(html.matches("action-column-cell").count(), 2);
    }

    #[test]
    fn test_guard_leaves_widget_usable() {
        let mut session = Session::new("f1");
        session.mount_fragment(FRAGMENT).unwrap();
        session.delete_row(1).unwrap();
        assert_eq!(
            session.delete_row(1).unwrap_err(),
            TableError::MinimumRowsViolation
        );
        // still renders and still has its one data row
        assert!(session.decorate().is_ok());
        assert_eq!(session.table().unwrap().data_row_count(), 1);
    }

    #[test]
    fn test_teardown() {
        let mut session = Session::new("f1");
        session.mount_fragment(FRAGMENT).unwrap();
        session.teardown();
        assert!(session.table().is_err());
        assert!(!session.has_snapshot());
    }

    #[test]
    fn test_install_clears_stale_drag() {
        let mut session = Session::new("f1");
        session
            .mount_fragment(
                "<table><tr><th>P</th></tr><tr><td><img src=\"a.png\"></td></tr></table>",
            )
            .unwrap();
        assert!(session.drag_start(CellRef::new(1, 0)));
        session.mount_fragment(FRAGMENT).unwrap();
        assert!(!session.dragging());
    }
}
