//! Image transfer protocol
//!
//! A three-phase drag interaction (grab, hover, release) over one piece of
//! shared state: the currently grabbed image, at most one at a time. The
//! protocol has no recoverable errors; unmet preconditions silently no-op.
//! Every terminal event (release or cancel) clears the grab, so a stale
//! reference never leaks into a later gesture.

use serde::{Deserialize, Serialize};

use super::model::Table;

/// Position of a cell within a table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellRef {
    pub row: usize,
    pub col: usize,
}

impl CellRef {
    pub fn new(row: usize, col: usize) -> Self {
        CellRef { row, col }
    }
}

/// What a release did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropOutcome {
    /// Image detached from `from` and attached to `to`
    Moved { from: CellRef, to: CellRef },
    /// Dropped on the cell that already owns the image
    SameCell,
    /// No image was grabbed
    NoGrab,
    /// Target is the header row or outside the table
    InvalidTarget,
    /// The source cell no longer holds an image (edited away mid-drag)
    StaleSource,
}

/// The grabbed-image state machine
#[derive(Debug, Default)]
pub struct DragState {
    grabbed: Option<CellRef>,
}

impl DragState {
    pub fn new() -> Self {
        DragState::default()
    }

    /// Currently grabbed cell, if a drag is in progress
    pub fn grabbed(&self) -> Option<CellRef> {
        self.grabbed
    }

    /// Start a drag from `at`. Only an image-bearing data cell can be
    /// grabbed; anything else is a no-op. Returns whether a grab started
    /// (the host applies the opacity cue on `true`).
    pub fn grab(&mut self, table: &Table, at: CellRef) -> bool {
        let valid = table.is_data_row(at.row)
            && table
                .cell_at(at.row, at.col)
                .map(|cell| cell.has_image())
                .unwrap_or(false);
        if valid {
            self.grabbed = Some(at);
        }
        valid
    }

    /// Hover feedback over a candidate target. Purely visual: returns
    /// whether the host should highlight the cell. May fire any number of
    /// times; never changes the grab.
    pub fn hover(&self, table: &Table, at: CellRef) -> bool {
        self.grabbed.is_some()
            && table.is_data_row(at.row)
            && table.cell_at(at.row, at.col).is_ok()
    }

    /// Drop on `at`. The grab is consumed no matter what, so the host can
    /// always restore the visual cue afterwards. On success the image's
    /// ownership transfers: the source cell keeps its text but loses the
    /// image, and the target's previous image (if any) is replaced while
    /// its text is preserved.
    pub fn release(&mut self, table: &mut Table, at: CellRef) -> DropOutcome {
        let from = match self.grabbed.take() {
            Some(from) => from,
            None => return DropOutcome::NoGrab,
        };

        if !table.is_data_row(at.row) || table.cell_at(at.row, at.col).is_err() {
            return DropOutcome::InvalidTarget;
        }
        if from == at {
            return DropOutcome::SameCell;
        }

        let image = match table.cell_at_mut(from.row, from.col) {
            Ok(cell) => match cell.take_image() {
                Some(image) => image,
                None => return DropOutcome::StaleSource,
            },
            Err(_) => return DropOutcome::StaleSource,
        };

        // Target was validated above; this cannot fail now
        if let Ok(target) = table.cell_at_mut(at.row, at.col) {
            target.image = Some(image);
        }
        DropOutcome::Moved { from, to: at }
    }

    /// Abandon the drag without moving anything
    pub fn cancel(&mut self) {
        self.grabbed = None;
    }
}

#[cfg(test)]
mod tests {
    use super::super::model::{Cell, ImageRef, Row};
    use super::*;

    fn table_with_image() -> Table {
        Table::from_rows(vec![
            Row::new(vec![Cell::text("Item"), Cell::text("Pic")]),
            Row::new(vec![Cell::text("Widget"), Cell::image(ImageRef::new("a.png"))]),
            Row::new(vec![Cell::text("Gadget"), Cell::empty()]),
        ])
        .unwrap()
    }

    #[test]
    fn test_grab_requires_image() {
        let table = table_with_image();
        let mut drag = DragState::new();
        assert!(!drag.grab(&table, CellRef::new(1, 0)));
        assert!(drag.grabbed().is_none());
        assert!(drag.grab(&table, CellRef::new(1, 1)));
        assert_eq!(drag.grabbed(), Some(CellRef::new(1, 1)));
    }

    #[test]
    fn test_grab_refused_on_header() {
        let table = table_with_image();
        let mut drag = DragState::new();
        assert!(!drag.grab(&table, CellRef::new(0, 1)));
    }

    #[test]
    fn test_hover_is_pure() {
        let table = table_with_image();
        let mut drag = DragState::new();
        assert!(!drag.hover(&table, CellRef::new(2, 0)));
        drag.grab(&table, CellRef::new(1, 1));
        assert!(drag.hover(&table, CellRef::new(2, 0)));
        assert!(drag.hover(&table, CellRef::new(2, 1)));
        // header never highlights
        assert!(!drag.hover(&table, CellRef::new(0, 0)));
        assert_eq!(drag.grabbed(), Some(CellRef::new(1, 1)));
    }

    #[test]
    fn test_release_moves_image() {
        let mut table = table_with_image();
        let mut drag = DragState::new();
        drag.grab(&table, CellRef::new(1, 1));
        let outcome = drag.release(&mut table, CellRef::new(2, 1));
        assert_eq!(
            outcome,
            DropOutcome::Moved {
                from: CellRef::new(1, 1),
                to: CellRef::new(2, 1)
            }
        );
        assert!(table.cell_at(1, 1).unwrap().is_empty());
        assert_eq!(
            table.cell_at(2, 1).unwrap().image_ref().map(|i| i.src.as_str()),
            Some("a.png")
        );
        assert!(drag.grabbed().is_none());
    }

    #[test]
    fn test_drop_preserves_target_text() {
        let mut table = table_with_image();
        let mut drag = DragState::new();
        drag.grab(&table, CellRef::new(1, 1));
        // target holds text; the image joins it, the text stays
        drag.release(&mut table, CellRef::new(2, 0));
        let target = table.cell_at(2, 0).unwrap();
        assert!(target.has_image());
        assert_eq!(target.text_value(), "Gadget");
        assert!(table.cell_at(1, 1).unwrap().is_empty());
    }

    #[test]
    fn test_drop_replaces_target_image() {
        let mut table = Table::from_rows(vec![
            Row::new(vec![Cell::text("Pic A"), Cell::text("Pic B")]),
            Row::new(vec![
                Cell::image(ImageRef::new("a.png")),
                Cell::image(ImageRef::new("b.png")),
            ]),
        ])
        .unwrap();
        let mut drag = DragState::new();
        drag.grab(&table, CellRef::new(1, 0));
        drag.release(&mut table, CellRef::new(1, 1));
        assert_eq!(
            table.cell_at(1, 1).unwrap().image_ref().map(|i| i.src.as_str()),
            Some("a.png")
        );
        assert!(!table.cell_at(1, 0).unwrap().has_image());
    }

    #[test]
    fn test_ownership_is_exclusive() {
        let mut table = table_with_image();
        let mut drag = DragState::new();
        drag.grab(&table, CellRef::new(1, 1));
        drag.release(&mut table, CellRef::new(2, 1));

        let owners = table
            .rows()
            .iter()
            .flat_map(|r| r.cells.iter())
            .filter(|c| c.has_image())
            .count();
        assert_eq!(owners, 1);
    }

    #[test]
    fn test_drop_without_grab_is_noop() {
        let mut table = table_with_image();
        let before = table.clone();
        let mut drag = DragState::new();
        assert_eq!(
            drag.release(&mut table, CellRef::new(2, 0)),
            DropOutcome::NoGrab
        );
        assert_eq!(table, before);
    }

    #[test]
    fn test_drop_on_same_cell_clears_state() {
        let mut table = table_with_image();
        let mut drag = DragState::new();
        drag.grab(&table, CellRef::new(1, 1));
        assert_eq!(
            drag.release(&mut table, CellRef::new(1, 1)),
            DropOutcome::SameCell
        );
        assert!(drag.grabbed().is_none());
        assert!(table.cell_at(1, 1).unwrap().has_image());
    }

    #[test]
    fn test_drop_on_header_clears_state() {
        let mut table = table_with_image();
        let mut drag = DragState::new();
        drag.grab(&table, CellRef::new(1, 1));
        assert_eq!(
            drag.release(&mut table, CellRef::new(0, 0)),
            DropOutcome::InvalidTarget
        );
        assert!(drag.grabbed().is_none());
        // no ownership change
        assert!(table.cell_at(1, 1).unwrap().has_image());
    }

    #[test]
    fn test_stale_source() {
        let mut table = table_with_image();
        let mut drag = DragState::new();
        drag.grab(&table, CellRef::new(1, 1));
        // the user edits the image away mid-drag
        let source = table.cell_at_mut(1, 1).unwrap();
        source.image = None;
        source.text = "typed".to_string();
        assert_eq!(
            drag.release(&mut table, CellRef::new(2, 0)),
            DropOutcome::StaleSource
        );
        assert_eq!(table.cell_at(1, 1).unwrap().text_value(), "typed");
        assert!(!table.cell_at(2, 0).unwrap().has_image());
    }

    #[test]
    fn test_cancel() {
        let table = table_with_image();
        let mut drag = DragState::new();
        drag.grab(&table, CellRef::new(1, 1));
        drag.cancel();
        assert!(drag.grabbed().is_none());
    }
}
