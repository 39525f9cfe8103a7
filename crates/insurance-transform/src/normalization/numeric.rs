//! Numeric-like string parsing and integer coercion.

use std::num::ParseFloatError;

use insurance_model::{Cell, ComplaintIssue, RoundingMode};

/// Convert a percentage string such as `"88%"` to its fraction (`0.88`).
///
/// Only text containing `%` is converted: trailing `%` signs are stripped,
/// the rest is trimmed and parsed, then divided by 100. Every other value is
/// returned unchanged.
///
/// # Examples
///
/// ```
/// use insurance_model::Cell;
/// use insurance_transform::normalization::convert_percentage;
///
/// assert_eq!(convert_percentage(&Cell::from("88%")).unwrap(), Cell::Float(0.88));
/// assert_eq!(convert_percentage(&Cell::Float(0.5)).unwrap(), Cell::Float(0.5));
/// assert!(convert_percentage(&Cell::from("n/a%")).is_err());
/// ```
pub fn convert_percentage(value: &Cell) -> Result<Cell, ParseFloatError> {
    match value.as_str() {
        Some(text) if text.contains('%') => {
            let number: f64 = text.trim_end_matches('%').trim().parse()?;
            Ok(Cell::Float(number / 100.0))
        }
        _ => Ok(value.clone()),
    }
}

/// Read the open complaint count out of a `"a/b/c"` string.
///
/// The second `/`-separated component is the count. Non-text values are
/// returned unchanged.
///
/// # Examples
///
/// ```
/// use insurance_model::Cell;
/// use insurance_transform::normalization::extract_complaints;
///
/// assert_eq!(extract_complaints(&Cell::from("1/5/00")).unwrap(), Cell::Int(5));
/// assert_eq!(extract_complaints(&Cell::Int(3)).unwrap(), Cell::Int(3));
/// ```
pub fn extract_complaints(value: &Cell) -> Result<Cell, ComplaintIssue> {
    let Some(text) = value.as_str() else {
        return Ok(value.clone());
    };
    let count = text
        .split('/')
        .nth(1)
        .ok_or(ComplaintIssue::MissingComponent)?
        .trim()
        .parse::<i64>()?;
    Ok(Cell::Int(count))
}

/// Round a numeric cell to an integer.
///
/// Missing values, integers and text pass through. Floats that are infinite
/// or outside the `i64` range stay as they are.
pub fn round_to_integer(value: &Cell, mode: RoundingMode) -> Cell {
    match value {
        Cell::Float(v) if v.is_finite() => {
            let rounded = mode.round(*v);
            if (i64::MIN as f64..i64::MAX as f64).contains(&rounded) {
                Cell::Int(rounded as i64)
            } else {
                value.clone()
            }
        }
        _ => value.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percentage_strips_repeated_signs_and_spaces() {
        assert_eq!(
            convert_percentage(&Cell::from(" 50 %%")).unwrap(),
            Cell::Float(0.5)
        );
    }

    #[test]
    fn text_without_percent_passes_through() {
        assert_eq!(
            convert_percentage(&Cell::from("1234.5")).unwrap(),
            Cell::from("1234.5")
        );
        assert_eq!(convert_percentage(&Cell::Missing).unwrap(), Cell::Missing);
    }

    #[test]
    fn complaints_without_separator_fail() {
        assert_eq!(
            extract_complaints(&Cell::from("5")),
            Err(ComplaintIssue::MissingComponent)
        );
        assert_eq!(
            extract_complaints(&Cell::from("")),
            Err(ComplaintIssue::MissingComponent)
        );
    }

    #[test]
    fn complaints_with_non_integer_part_fail() {
        assert!(matches!(
            extract_complaints(&Cell::from("1/x/00")),
            Err(ComplaintIssue::NotAnInteger(_))
        ));
    }

    #[test]
    fn complaints_accept_two_parts() {
        assert_eq!(extract_complaints(&Cell::from("1/0")).unwrap(), Cell::Int(0));
    }

    #[test]
    fn rounding_leaves_non_floats() {
        let mode = RoundingMode::HalfEven;
        assert_eq!(round_to_integer(&Cell::Int(7), mode), Cell::Int(7));
        assert_eq!(round_to_integer(&Cell::from("7.6"), mode), Cell::from("7.6"));
        assert_eq!(round_to_integer(&Cell::Missing, mode), Cell::Missing);
        assert!(round_to_integer(&Cell::Float(f64::NAN), mode).is_missing());
        assert_eq!(
            round_to_integer(&Cell::Float(f64::INFINITY), mode),
            Cell::Float(f64::INFINITY)
        );
    }

    #[test]
    fn rounding_leaves_out_of_range_floats() {
        let mode = RoundingMode::HalfEven;
        assert_eq!(round_to_integer(&Cell::Float(1e30), mode), Cell::Float(1e30));
        assert_eq!(round_to_integer(&Cell::Float(-1e30), mode), Cell::Float(-1e30));
    }

    #[test]
    fn rounding_follows_mode() {
        assert_eq!(round_to_integer(&Cell::Float(2.5), RoundingMode::HalfEven), Cell::Int(2));
        assert_eq!(
            round_to_integer(&Cell::Float(2.5), RoundingMode::HalfAwayFromZero),
            Cell::Int(3)
        );
        assert_eq!(round_to_integer(&Cell::Float(0.05), RoundingMode::HalfEven), Cell::Int(0));
        assert_eq!(round_to_integer(&Cell::Float(-1.7), RoundingMode::HalfEven), Cell::Int(-2));
    }
}
