//! Gender value normalization.

use insurance_model::Cell;

/// Collapse a gender value to `M`, `F` or `U`.
///
/// Missing values are returned unchanged. Text whose first character
/// upper-cases to `M` or `F` becomes that letter. Everything else, including
/// the empty string and numbers, becomes `U`.
///
/// # Examples
///
/// ```
/// use insurance_model::Cell;
/// use insurance_transform::normalization::normalize_gender;
///
/// assert_eq!(normalize_gender(&Cell::from("female")), Cell::from("F"));
/// assert_eq!(normalize_gender(&Cell::Int(123)), Cell::from("U"));
/// assert_eq!(normalize_gender(&Cell::Missing), Cell::Missing);
/// ```
pub fn normalize_gender(value: &Cell) -> Cell {
    if value.is_missing() {
        return value.clone();
    }
    let letter = value
        .as_str()
        .and_then(|text| text.chars().next())
        .and_then(initial_letter);
    Cell::from(letter.unwrap_or("U"))
}

fn initial_letter(first: char) -> Option<&'static str> {
    let mut upper = first.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some('M'), None) => Some("M"),
        (Some('F'), None) => Some("F"),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_string_is_unknown() {
        assert_eq!(normalize_gender(&Cell::from("")), Cell::from("U"));
    }

    #[test]
    fn nan_is_preserved() {
        assert!(normalize_gender(&Cell::Float(f64::NAN)).is_missing());
    }

    #[test]
    fn leading_whitespace_is_not_skipped() {
        assert_eq!(normalize_gender(&Cell::from(" M")), Cell::from("U"));
    }

    #[test]
    fn multi_letter_uppercase_is_unknown() {
        // 'ß' upper-cases to "SS".
        assert_eq!(normalize_gender(&Cell::from("ß")), Cell::from("U"));
    }
}
