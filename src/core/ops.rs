//! Row management operations
//!
//! Structural mutations on a `Table`: insert, append, delete, reindex.
//! Every mutation ends with a reindex pass so stripe bookkeeping and
//! position-dependent identifiers stay consistent.

use crate::utils::error::{TableError, TableResult};

use super::model::{Row, Table};

impl Table {
    /// Recompute each row's derived position (0 = header, data rows
    /// 1-based). Idempotent: a second pass with no intervening mutation
    /// changes nothing.
    pub fn reindex(&mut self) {
        for (index, row) in self.rows.iter_mut().enumerate() {
            row.position = index;
        }
    }

    /// Insert a blank data row immediately after `row_index`
    ///
    /// `row_index` must name an existing row; inserting at the top of the
    /// data area is `insert_row_after(0)`. The new row has one empty cell
    /// per data column (derived from the header). Returns the new row's
    /// index.
    pub fn insert_row_after(&mut self, row_index: usize) -> TableResult<usize> {
        if row_index >= self.rows.len() {
            return Err(TableError::InvalidPosition { index: row_index });
        }
        let new_index = row_index + 1;
        self.rows.insert(new_index, Row::blank(self.column_count()));
        self.reindex();
        Ok(new_index)
    }

    /// Append a blank data row at the bottom; returns its index
    pub fn append_row(&mut self) -> usize {
        self.rows.push(Row::blank(self.column_count()));
        self.reindex();
        self.rows.len() - 1
    }

    /// Delete the data row at `row_index`
    ///
    /// The header row is not deletable, and a table must keep at least one
    /// data row: deleting when total rows would drop below header + 1 is
    /// refused with `MinimumRowsViolation` and leaves the table unchanged.
    pub fn delete_row(&mut self, row_index: usize) -> TableResult<()> {
        if row_index == 0 || row_index >= self.rows.len() {
            return Err(TableError::InvalidPosition { index: row_index });
        }
        if self.rows.len() <= 2 {
            return Err(TableError::MinimumRowsViolation);
        }
        self.rows.remove(row_index);
        self.reindex();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::super::model::{Cell, Stripe};
    use super::*;

    fn table_with_data_rows(n: usize) -> Table {
        let mut rows = vec![Row::new(vec![Cell::text("Item"), Cell::text("Qty")])];
        for i in 0..n {
            rows.push(Row::new(vec![
                Cell::text(format!("item-{}", i)),
                Cell::text(format!("{}", i)),
            ]));
        }
        Table::from_rows(rows).unwrap()
    }

    #[test]
    fn test_insert_after_header() {
        let mut table = table_with_data_rows(2);
        let idx = table.insert_row_after(0).unwrap();
        assert_eq!(idx, 1);
        assert_eq!(table.data_row_count(), 3);
        assert!(table.cell_at(1, 0).unwrap().is_empty());
        // previously-first data row shifted down
        assert_eq!(table.cell_at(2, 0).unwrap().text_value(), "item-0");
    }

    #[test]
    fn test_insert_invalid_position() {
        let mut table = table_with_data_rows(1);
        assert_eq!(
            table.insert_row_after(2),
            Err(TableError::InvalidPosition { index: 2 })
        );
        assert_eq!(table.data_row_count(), 1);
    }

    #[test]
    fn test_new_row_matches_column_count() {
        let mut table = table_with_data_rows(1);
        let idx = table.append_row();
        assert_eq!(table.rows()[idx].cells.len(), table.column_count());
    }

    #[test]
    fn test_append_equals_insert_after_last() {
        let mut a = table_with_data_rows(2);
        let mut b = table_with_data_rows(2);
        let last = b.row_count() - 1;
        a.append_row();
        b.insert_row_after(last).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_delete_row() {
        let mut table = table_with_data_rows(3);
        table.delete_row(2).unwrap();
        assert_eq!(table.data_row_count(), 2);
        assert_eq!(table.cell_at(2, 0).unwrap().text_value(), "item-2");
    }

    #[test]
    fn test_delete_last_data_row_refused() {
        let mut table = table_with_data_rows(1);
        let before = table.clone();
        assert_eq!(table.delete_row(1), Err(TableError::MinimumRowsViolation));
        assert_eq!(table, before);
    }

    #[test]
    fn test_delete_header_refused() {
        let mut table = table_with_data_rows(3);
        assert_eq!(
            table.delete_row(0),
            Err(TableError::InvalidPosition { index: 0 })
        );
    }

    #[test]
    fn test_minimum_guard_scenario() {
        // header + 2 data rows: one delete succeeds, the second is refused
        let mut table = table_with_data_rows(2);
        table.delete_row(1).unwrap();
        assert_eq!(table.data_row_count(), 1);
        assert_eq!(table.delete_row(1), Err(TableError::MinimumRowsViolation));
        assert_eq!(table.data_row_count(), 1);
    }

    #[test]
    fn test_reindex_idempotent() {
        let mut table = table_with_data_rows(4);
        table.insert_row_after(2).unwrap();
        let once = table.clone();
        table.reindex();
        assert_eq!(table, once);
    }

    #[test]
    fn test_stripes_after_delete() {
        let mut table = table_with_data_rows(4);
        table.delete_row(1).unwrap();
        let stripes: Vec<_> = table.data_rows().iter().map(|r| r.stripe()).collect();
        assert_eq!(
            stripes,
            vec![
                Some(Stripe::Odd),
                Some(Stripe::Even),
                Some(Stripe::Odd)
            ]
        );
    }
}
