//! In-memory table of named columns and mixed-type rows.

use std::collections::HashSet;
use std::fmt;

use serde::Serialize;

use crate::cell::Cell;
use crate::error::{CleaningError, Result};

/// Ordered, uniquely named columns over ordered rows of [`Cell`]s.
///
/// Every row has exactly one cell per column. Mutating helpers keep column
/// order and the relative order of surviving rows.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Table {
    columns: Vec<String>,
    rows: Vec<Vec<Cell>>,
}

impl Table {
    /// Build a table, checking row widths and column-name uniqueness.
    pub fn new(columns: Vec<String>, rows: Vec<Vec<Cell>>) -> Result<Self> {
        ensure_unique(&columns)?;
        for (idx, row) in rows.iter().enumerate() {
            check_width(idx, columns.len(), row.len())?;
        }
        Ok(Self { columns, rows })
    }

    /// Create an empty table with the given headers.
    pub fn with_columns<I, S>(names: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(names.into_iter().map(Into::into).collect(), Vec::new())
    }

    /// Append a row.
    pub fn push_row(&mut self, row: Vec<Cell>) -> Result<()> {
        check_width(self.rows.len(), self.columns.len(), row.len())?;
        self.rows.push(row);
        Ok(())
    }

    /// Number of rows.
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// Number of columns.
    pub fn width(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn column_names(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }

    /// Position of a column, or [`CleaningError::MissingColumn`].
    pub fn column_index(&self, name: &str) -> Result<usize> {
        self.columns
            .iter()
            .position(|column| column == name)
            .ok_or_else(|| CleaningError::MissingColumn(name.to_string()))
    }

    /// Iterate the values of one column top to bottom.
    pub fn column(&self, name: &str) -> Result<impl Iterator<Item = &Cell>> {
        let idx = self.column_index(name)?;
        Ok(self.rows.iter().map(move |row| &row[idx]))
    }

    /// Value at `row` in column `name`; `None` when the row is out of range.
    pub fn get(&self, row: usize, name: &str) -> Result<Option<&Cell>> {
        let idx = self.column_index(name)?;
        Ok(self.rows.get(row).map(|cells| &cells[idx]))
    }

    /// Replace every header at once.
    pub fn set_column_names(&mut self, names: Vec<String>) -> Result<()> {
        if names.len() != self.columns.len() {
            return Err(CleaningError::HeaderCount {
                expected: self.columns.len(),
                actual: names.len(),
            });
        }
        ensure_unique(&names)?;
        self.columns = names;
        Ok(())
    }

    /// Rewrite one column through a fallible function.
    ///
    /// All replacements are computed before any cell is written, so an error
    /// leaves the column untouched. Returns the number of cells whose value
    /// changed.
    pub fn try_map_column<F>(&mut self, name: &str, mut f: F) -> Result<usize>
    where
        F: FnMut(usize, &Cell) -> Result<Cell>,
    {
        let idx = self.column_index(name)?;
        let mut replacements = Vec::new();
        for (row_idx, row) in self.rows.iter().enumerate() {
            let current = &row[idx];
            let updated = f(row_idx, current)?;
            if updated != *current || updated.type_name() != current.type_name() {
                replacements.push((row_idx, updated));
            }
        }
        let changed = replacements.len();
        for (row_idx, value) in replacements {
            self.rows[row_idx][idx] = value;
        }
        Ok(changed)
    }

    /// Rewrite every cell in the table. `f` returns `Some` for a new value.
    pub fn map_cells<F>(&mut self, mut f: F) -> usize
    where
        F: FnMut(&Cell) -> Option<Cell>,
    {
        let mut changed = 0;
        for cell in self.rows.iter_mut().flatten() {
            if let Some(value) = f(cell) {
                *cell = value;
                changed += 1;
            }
        }
        changed
    }

    /// Keep rows for which `keep` returns true. Returns the number removed.
    pub fn retain_rows<F>(&mut self, mut keep: F) -> usize
    where
        F: FnMut(&[Cell]) -> bool,
    {
        let before = self.rows.len();
        self.rows.retain(|row| keep(row));
        before - self.rows.len()
    }

    /// Keep rows whose position is flagged in `mask`.
    pub fn retain_mask(&mut self, mask: &[bool]) -> usize {
        let mut flags = mask.iter().copied();
        self.retain_rows(|_| flags.next().unwrap_or(true))
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.columns.join(" | "))?;
        for row in &self.rows {
            let rendered: Vec<String> = row.iter().map(ToString::to_string).collect();
            writeln!(f, "{}", rendered.join(" | "))?;
        }
        Ok(())
    }
}

fn ensure_unique(names: &[String]) -> Result<()> {
    let mut seen = HashSet::with_capacity(names.len());
    for name in names {
        if !seen.insert(name.as_str()) {
            return Err(CleaningError::DuplicateColumn(name.clone()));
        }
    }
    Ok(())
}

fn check_width(row: usize, expected: usize, actual: usize) -> Result<()> {
    if expected == actual {
        Ok(())
    } else {
        Err(CleaningError::RowWidth {
            row,
            expected,
            actual,
        })
    }
}
