//! Tests for cell normalization rules.

use insurance_model::{Cell, CleaningOptions, ComplaintIssue};
use insurance_transform::normalization::{
    convert_percentage, extract_complaints, normalize_gender, replace_exact,
};

#[test]
fn gender_variants_collapse() {
    for raw in ["Female", "f", "FEMALE", "Femal"] {
        assert_eq!(normalize_gender(&Cell::from(raw)), Cell::from("F"), "{raw}");
    }
    for raw in ["Male", "M", "male"] {
        assert_eq!(normalize_gender(&Cell::from(raw)), Cell::from("M"), "{raw}");
    }
    assert_eq!(normalize_gender(&Cell::from("unknown")), Cell::from("U"));
    assert_eq!(normalize_gender(&Cell::Int(123)), Cell::from("U"));
    assert_eq!(normalize_gender(&Cell::Float(1.5)), Cell::from("U"));
    assert_eq!(normalize_gender(&Cell::Missing), Cell::Missing);
}

#[test]
fn percentages_become_fractions() {
    assert_eq!(convert_percentage(&Cell::from("88%")).unwrap(), Cell::Float(0.88));
    assert_eq!(convert_percentage(&Cell::from("5%")).unwrap(), Cell::Float(0.05));
    assert_eq!(convert_percentage(&Cell::Float(0.5)).unwrap(), Cell::Float(0.5));
    assert_eq!(convert_percentage(&Cell::Int(7)).unwrap(), Cell::Int(7));
}

#[test]
fn non_numeric_percentage_is_an_error() {
    assert!(convert_percentage(&Cell::from("%")).is_err());
    assert!(convert_percentage(&Cell::from("5%3")).is_err());
}

#[test]
fn complaint_counts_come_from_second_part() {
    assert_eq!(extract_complaints(&Cell::from("1/5/00")).unwrap(), Cell::Int(5));
    assert_eq!(extract_complaints(&Cell::from("1/ 2 /00")).unwrap(), Cell::Int(2));
    assert_eq!(extract_complaints(&Cell::Int(3)).unwrap(), Cell::Int(3));
    assert_eq!(extract_complaints(&Cell::Missing).unwrap(), Cell::Missing);
    assert_eq!(
        extract_complaints(&Cell::from("no complaints")),
        Err(ComplaintIssue::MissingComponent)
    );
}

#[test]
fn states_map_once() {
    let states = CleaningOptions::default().state_names;
    assert_eq!(replace_exact(&Cell::from("Cali"), &states), Cell::from("California"));
    assert_eq!(
        replace_exact(&Cell::from("California"), &states),
        Cell::from("California")
    );
}
