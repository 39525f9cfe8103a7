//! Column header normalization.

use insurance_model::columns::{STATE, STATE_ABBREVIATION};
use insurance_model::{Result, Table};
use tracing::debug;

/// Lower-case a header and replace spaces with underscores.
///
/// # Examples
///
/// ```
/// use insurance_transform::headers::normalize_header;
///
/// assert_eq!(normalize_header("Customer Lifetime Value"), "customer_lifetime_value");
/// assert_eq!(normalize_header("ST"), "st");
/// ```
pub fn normalize_header(name: &str) -> String {
    name.to_lowercase().replace(' ', "_")
}

/// Normalize every header, then rename the first `st` column to `state`.
///
/// A table that already has a `state` column keeps its `st` column as is.
/// Only headers change; cells are untouched. Applying this twice gives the
/// same headers as applying it once. Fails with
/// [`insurance_model::CleaningError::DuplicateColumn`] when two headers
/// collapse to the same name. Plain renaming never fails; this error is a
/// deliberate tightening so a cleaned table never carries two equal headers.
/// Returns the number of headers that changed.
pub fn rename_columns(table: &mut Table) -> Result<usize> {
    let mut names: Vec<String> = table
        .column_names()
        .iter()
        .map(|name| normalize_header(name))
        .collect();
    let has_state = names.iter().any(|name| name == STATE);
    if !has_state
        && let Some(abbreviated) = names
            .iter_mut()
            .find(|name| name.as_str() == STATE_ABBREVIATION)
    {
        *abbreviated = STATE.to_string();
    }

    let changed = table
        .column_names()
        .iter()
        .zip(&names)
        .filter(|(before, after)| before != after)
        .count();
    if changed > 0 {
        table.set_column_names(names)?;
        debug!(changed, "renamed columns");
    }
    Ok(changed)
}

#[cfg(test)]
mod tests {
    use insurance_model::CleaningError;

    use super::*;

    #[test]
    fn st_becomes_state() {
        let mut table = Table::with_columns(["Customer", "ST", "Gender"]).unwrap();
        let changed = rename_columns(&mut table).unwrap();
        assert_eq!(changed, 3);
        assert_eq!(table.column_names(), ["customer", "state", "gender"]);
    }

    #[test]
    fn only_whole_st_is_renamed() {
        let mut table = Table::with_columns(["st_code", "Policy ST"]).unwrap();
        rename_columns(&mut table).unwrap();
        assert_eq!(table.column_names(), ["st_code", "policy_st"]);
    }

    #[test]
    fn existing_state_keeps_st() {
        let mut table = Table::with_columns(["State", "ST"]).unwrap();
        rename_columns(&mut table).unwrap();
        assert_eq!(table.column_names(), ["state", "st"]);
        assert_eq!(rename_columns(&mut table).unwrap(), 0);
    }

    #[test]
    fn collapsing_headers_are_rejected() {
        let mut table = Table::with_columns(["Gender", "gender"]).unwrap();
        let err = rename_columns(&mut table).unwrap_err();
        assert_eq!(err, CleaningError::DuplicateColumn("gender".to_string()));
        assert_eq!(table.column_names(), ["Gender", "gender"]);
    }
}
