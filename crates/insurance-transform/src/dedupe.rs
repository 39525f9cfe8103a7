//! Row removal: fully-empty rows and exact duplicates.

use std::collections::HashSet;

use insurance_model::{Cell, Table};
use tracing::debug;

/// Drop every row in which all cells are missing.
///
/// Rows with at least one value survive in their original order. Returns the
/// number of rows removed.
pub fn drop_empty_rows(table: &mut Table) -> usize {
    let removed = table.retain_rows(|row| !row.iter().all(Cell::is_missing));
    if removed > 0 {
        debug!(removed, "dropped empty rows");
    }
    removed
}

/// Flag each row that repeats an earlier row across every column.
fn duplicate_mask(table: &Table) -> Vec<bool> {
    let mut seen = HashSet::with_capacity(table.height());
    table
        .rows()
        .iter()
        .map(|row| !seen.insert(row.as_slice()))
        .collect()
}

/// Count rows identical to an earlier row.
///
/// Comparison is type-strict: text `"5"` and integer `5` differ.
pub fn count_duplicate_rows(table: &Table) -> usize {
    duplicate_mask(table).into_iter().filter(|dup| *dup).count()
}

/// Keep the first occurrence of each distinct row.
///
/// The table is left untouched when there are no duplicates. Returns the
/// number of rows removed.
pub fn drop_duplicate_rows(table: &mut Table) -> usize {
    let mask = duplicate_mask(table);
    let duplicates = mask.iter().filter(|dup| **dup).count();
    if duplicates == 0 {
        return 0;
    }
    let keep: Vec<bool> = mask.into_iter().map(|dup| !dup).collect();
    let removed = table.retain_mask(&keep);
    debug!(removed, "dropped duplicate rows");
    removed
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(rows: Vec<Vec<Cell>>) -> Table {
        Table::new(vec!["a".to_string(), "b".to_string()], rows).unwrap()
    }

    #[test]
    fn empty_rows_go_partial_rows_stay() {
        let mut t = table(vec![
            vec![Cell::Missing, Cell::Missing],
            vec![Cell::Missing, Cell::Int(1)],
            vec![Cell::Float(f64::NAN), Cell::Missing],
        ]);
        assert_eq!(drop_empty_rows(&mut t), 2);
        assert_eq!(t.rows(), [vec![Cell::Missing, Cell::Int(1)]]);
    }

    #[test]
    fn duplicates_keep_first_position() {
        let mut t = table(vec![
            vec![Cell::from("x"), Cell::Int(1)],
            vec![Cell::from("y"), Cell::Int(2)],
            vec![Cell::from("x"), Cell::Int(1)],
        ]);
        assert_eq!(count_duplicate_rows(&t), 1);
        assert_eq!(drop_duplicate_rows(&mut t), 1);
        assert_eq!(t.height(), 2);
        assert_eq!(t.rows()[0][0], Cell::from("x"));
        assert_eq!(t.rows()[1][0], Cell::from("y"));
    }

    #[test]
    fn type_differences_are_not_duplicates() {
        let mut t = table(vec![
            vec![Cell::from("5"), Cell::Missing],
            vec![Cell::Int(5), Cell::Missing],
        ]);
        assert_eq!(drop_duplicate_rows(&mut t), 0);
        assert_eq!(t.height(), 2);
    }

    #[test]
    fn missing_cells_match_each_other() {
        let mut t = table(vec![
            vec![Cell::from("x"), Cell::Missing],
            vec![Cell::from("x"), Cell::Missing],
        ]);
        assert_eq!(drop_duplicate_rows(&mut t), 1);
    }
}
