//! Configuration options for table cleaning.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// How fractional numbers are rounded to integers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoundingMode {
    /// Ties go to the even neighbour: 0.5 -> 0, 2.5 -> 2, 3.5 -> 4.
    #[default]
    HalfEven,
    /// Ties go away from zero: 0.5 -> 1, -2.5 -> -3.
    HalfAwayFromZero,
}

impl RoundingMode {
    pub fn round(self, value: f64) -> f64 {
        match self {
            Self::HalfEven => value.round_ties_even(),
            Self::HalfAwayFromZero => value.round(),
        }
    }
}

/// Options for the cleaning pipeline.
///
/// Defaults reproduce the fixed insurance customer rules. Every field can be
/// overridden from a serialized config; absent fields keep their default.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CleaningOptions {
    /// Exact replacements for the `state` column.
    pub state_names: BTreeMap<String, String>,

    /// Exact replacements for the `education` column.
    pub education_names: BTreeMap<String, String>,

    /// Vehicle classes folded into [`CleaningOptions::luxury_label`].
    pub luxury_vehicle_classes: Vec<String>,

    /// Replacement value for the luxury vehicle classes.
    pub luxury_label: String,

    /// Rounding used when numbers are coerced to integers.
    pub rounding: RoundingMode,
}

impl Default for CleaningOptions {
    fn default() -> Self {
        Self {
            state_names: string_map(&[
                ("Cali", "California"),
                ("AZ", "Arizona"),
                ("WA", "Washington"),
            ]),
            education_names: string_map(&[("Bachelors", "Bachelor")]),
            luxury_vehicle_classes: vec![
                "Sports Car".to_string(),
                "Luxury SUV".to_string(),
                "Luxury Car".to_string(),
            ],
            luxury_label: "Luxury".to_string(),
            rounding: RoundingMode::default(),
        }
    }
}

impl CleaningOptions {
    #[must_use]
    pub fn with_rounding(mut self, rounding: RoundingMode) -> Self {
        self.rounding = rounding;
        self
    }

    #[must_use]
    pub fn with_state_name(mut self, raw: impl Into<String>, standard: impl Into<String>) -> Self {
        self.state_names.insert(raw.into(), standard.into());
        self
    }

    #[must_use]
    pub fn with_education_name(
        mut self,
        raw: impl Into<String>,
        standard: impl Into<String>,
    ) -> Self {
        self.education_names.insert(raw.into(), standard.into());
        self
    }

    #[must_use]
    pub fn with_luxury_vehicle_class(mut self, class: impl Into<String>) -> Self {
        self.luxury_vehicle_classes.push(class.into());
        self
    }
}

fn string_map(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
    pairs
        .iter()
        .map(|(raw, standard)| ((*raw).to_string(), (*standard).to_string()))
        .collect()
}
