//! Table-level cleaning steps.
//!
//! Each function applies one cell rule from [`crate::normalization`] to a
//! fixed column (or to every cell) and returns how many cells changed. A
//! column that is absent fails with
//! [`CleaningError::MissingColumn`](insurance_model::CleaningError::MissingColumn).
//! Cell-level failures are wrapped with the column name, row position and
//! offending value.

use insurance_model::columns::{
    CUSTOMER_LIFETIME_VALUE, EDUCATION, GENDER, NUMBER_OF_OPEN_COMPLAINTS, STATE, VEHICLE_CLASS,
};
use insurance_model::{CleaningError, CleaningOptions, Result, RoundingMode, Table};

use crate::normalization::{
    combine_vehicle_class, convert_percentage, extract_complaints, normalize_gender,
    replace_exact, round_to_integer,
};

/// Collapse the `gender` column to `M`, `F`, `U` or missing.
pub fn normalize_gender_column(table: &mut Table) -> Result<usize> {
    table.try_map_column(GENDER, |_, cell| Ok(normalize_gender(cell)))
}

/// Turn `%` strings in `customer_lifetime_value` into fractions.
pub fn convert_percentage_column(table: &mut Table) -> Result<usize> {
    table.try_map_column(CUSTOMER_LIFETIME_VALUE, |row, cell| {
        convert_percentage(cell).map_err(|source| CleaningError::Parse {
            column: CUSTOMER_LIFETIME_VALUE.to_string(),
            row,
            value: cell.to_string(),
            source,
        })
    })
}

/// Replace `a/b/c` strings in `number_of_open_complaints` with `b`.
pub fn extract_complaints_column(table: &mut Table) -> Result<usize> {
    table.try_map_column(NUMBER_OF_OPEN_COMPLAINTS, |row, cell| {
        extract_complaints(cell).map_err(|issue| CleaningError::Format {
            column: NUMBER_OF_OPEN_COMPLAINTS.to_string(),
            row,
            value: cell.to_string(),
            issue,
        })
    })
}

/// Round every float cell in the table to an integer.
///
/// Column-agnostic; never fails.
pub fn round_numeric_cells(table: &mut Table, mode: RoundingMode) -> usize {
    table.map_cells(|cell| {
        let rounded = round_to_integer(cell, mode);
        (rounded.type_name() != cell.type_name()).then_some(rounded)
    })
}

/// Expand state abbreviations in the `state` column.
pub fn standardize_states(table: &mut Table, options: &CleaningOptions) -> Result<usize> {
    table.try_map_column(STATE, |_, cell| Ok(replace_exact(cell, &options.state_names)))
}

/// Standardize degree names in the `education` column.
pub fn standardize_education(table: &mut Table, options: &CleaningOptions) -> Result<usize> {
    table.try_map_column(EDUCATION, |_, cell| {
        Ok(replace_exact(cell, &options.education_names))
    })
}

/// Fold luxury vehicle classes in `vehicle_class` into one label.
pub fn combine_vehicle_classes(table: &mut Table, options: &CleaningOptions) -> Result<usize> {
    table.try_map_column(VEHICLE_CLASS, |_, cell| {
        Ok(combine_vehicle_class(
            cell,
            &options.luxury_vehicle_classes,
            &options.luxury_label,
        ))
    })
}

#[cfg(test)]
mod tests {
    use insurance_model::{Cell, ComplaintIssue};

    use super::*;

    fn single_column(name: &str, values: Vec<Cell>) -> Table {
        Table::new(
            vec![name.to_string()],
            values.into_iter().map(|value| vec![value]).collect(),
        )
        .unwrap()
    }

    #[test]
    fn percentage_error_carries_position() {
        let mut table = single_column(
            CUSTOMER_LIFETIME_VALUE,
            vec![Cell::from("10%"), Cell::from("ten%")],
        );
        let err = convert_percentage_column(&mut table).unwrap_err();
        match err {
            CleaningError::Parse { column, row, value, .. } => {
                assert_eq!(column, CUSTOMER_LIFETIME_VALUE);
                assert_eq!(row, 1);
                assert_eq!(value, "ten%");
            }
            other => panic!("unexpected error: {other}"),
        }
        // Nothing was committed.
        assert_eq!(table.rows()[0][0], Cell::from("10%"));
    }

    #[test]
    fn complaint_error_carries_issue() {
        let mut table = single_column(NUMBER_OF_OPEN_COMPLAINTS, vec![Cell::from("3")]);
        let err = extract_complaints_column(&mut table).unwrap_err();
        assert!(matches!(
            err,
            CleaningError::Format {
                issue: ComplaintIssue::MissingComponent,
                row: 0,
                ..
            }
        ));
    }

    #[test]
    fn missing_column_is_named() {
        let mut table = single_column("customer", vec![Cell::from("AA1")]);
        let err = normalize_gender_column(&mut table).unwrap_err();
        assert_eq!(err, CleaningError::MissingColumn(GENDER.to_string()));
    }

    #[test]
    fn rounding_touches_every_column() {
        let mut table = Table::new(
            vec!["income".to_string(), "score".to_string()],
            vec![vec![Cell::Float(1.4), Cell::Float(9.6)]],
        )
        .unwrap();
        let changed = round_numeric_cells(&mut table, RoundingMode::HalfEven);
        assert_eq!(changed, 2);
        assert_eq!(table.rows()[0], vec![Cell::Int(1), Cell::Int(10)]);
    }

    #[test]
    fn state_counts_only_rewrites() {
        let mut table = single_column(
            STATE,
            vec![Cell::from("Cali"), Cell::from("California"), Cell::Missing],
        );
        let changed = standardize_states(&mut table, &CleaningOptions::default()).unwrap();
        assert_eq!(changed, 1);
        assert_eq!(table.rows()[1][0], Cell::from("California"));
    }
}
