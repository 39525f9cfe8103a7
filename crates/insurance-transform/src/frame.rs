//! Conversion between [`Table`] and Polars `DataFrame`.
//!
//! Loading stays with the caller; these helpers let a frame read by Polars go
//! through the cleaner and come back out as a frame.

use polars::prelude::{AnyValue, Column, DataFrame, IntoColumn, NamedFrom, Series};

use insurance_model::{Cell, CleaningError, Result, Table};

/// Build a [`Table`] from a Polars frame.
///
/// Nulls become [`Cell::Missing`], integer and boolean dtypes become
/// [`Cell::Int`], floats become [`Cell::Float`] and strings become
/// [`Cell::Text`]. Other dtypes are kept as their display text.
pub fn table_from_dataframe(df: &DataFrame) -> Result<Table> {
    let names: Vec<String> = df
        .get_column_names()
        .iter()
        .map(|name| name.as_str().to_string())
        .collect();

    let mut rows: Vec<Vec<Cell>> = (0..df.height())
        .map(|_| Vec::with_capacity(names.len()))
        .collect();
    for column in df.get_columns() {
        // `Series::iter` walks a single chunk.
        let series = column.as_materialized_series().rechunk();
        for (row, value) in rows.iter_mut().zip(series.iter()) {
            row.push(any_to_cell(value));
        }
    }

    Table::new(names, rows)
}

/// Build a Polars frame from a [`Table`].
///
/// Each column gets the narrowest dtype that holds all its values: `Int64`
/// when every value is an integer, `Float64` when every value is numeric,
/// otherwise `String` with numbers rendered as text.
pub fn table_to_dataframe(table: &Table) -> Result<DataFrame> {
    let columns: Vec<Column> = table
        .column_names()
        .iter()
        .enumerate()
        .map(|(idx, name)| {
            let cells: Vec<&Cell> = table.rows().iter().map(|row| &row[idx]).collect();
            cells_to_column(name, &cells)
        })
        .collect();
    DataFrame::new(columns).map_err(frame_error)
}

fn any_to_cell(value: AnyValue<'_>) -> Cell {
    match value {
        AnyValue::Null => Cell::Missing,
        AnyValue::Boolean(b) => Cell::Int(i64::from(b)),
        AnyValue::Int8(v) => Cell::Int(i64::from(v)),
        AnyValue::Int16(v) => Cell::Int(i64::from(v)),
        AnyValue::Int32(v) => Cell::Int(i64::from(v)),
        AnyValue::Int64(v) => Cell::Int(v),
        AnyValue::UInt8(v) => Cell::Int(i64::from(v)),
        AnyValue::UInt16(v) => Cell::Int(i64::from(v)),
        AnyValue::UInt32(v) => Cell::Int(i64::from(v)),
        AnyValue::UInt64(v) => i64::try_from(v).map_or(Cell::Float(v as f64), Cell::Int),
        AnyValue::Float32(v) => Cell::Float(f64::from(v)),
        AnyValue::Float64(v) => Cell::Float(v),
        AnyValue::String(s) => Cell::from(s),
        AnyValue::StringOwned(s) => Cell::from(s.as_str()),
        other => Cell::Text(other.to_string()),
    }
}

fn cells_to_column(name: &str, cells: &[&Cell]) -> Column {
    let present = || cells.iter().filter(|cell| !cell.is_missing());
    if present().all(|cell| matches!(cell, Cell::Int(_))) {
        let values: Vec<Option<i64>> = cells.iter().map(|cell| cell.as_i64()).collect();
        Series::new(name.into(), values).into_column()
    } else if present().all(|cell| cell.is_numeric()) {
        let values: Vec<Option<f64>> = cells
            .iter()
            .map(|cell| if cell.is_missing() { None } else { cell.as_f64() })
            .collect();
        Series::new(name.into(), values).into_column()
    } else {
        let values: Vec<Option<String>> = cells
            .iter()
            .map(|cell| (!cell.is_missing()).then(|| cell.to_string()))
            .collect();
        Series::new(name.into(), values).into_column()
    }
}

fn frame_error(err: impl std::fmt::Display) -> CleaningError {
    CleaningError::Frame(err.to_string())
}
