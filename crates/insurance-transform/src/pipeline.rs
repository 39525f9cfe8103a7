//! The fixed cleaning pipeline for insurance customer tables.
//!
//! Steps run in [`CleaningStep::ORDER`]. The order matters: integer
//! coercion runs after percentage conversion, so `"50%"` becomes `0.5` and
//! then `0` under half-even rounding.
//!
//! # Example
//!
//! ```
//! use insurance_model::{Cell, Table};
//! use insurance_transform::clean;
//!
//! let raw = Table::new(
//!     vec![
//!         "ST".to_string(),
//!         "Gender".to_string(),
//!         "Customer Lifetime Value".to_string(),
//!         "Number of Open Complaints".to_string(),
//!         "Education".to_string(),
//!         "Vehicle Class".to_string(),
//!     ],
//!     vec![vec![
//!         Cell::from("AZ"),
//!         Cell::from("female"),
//!         Cell::from("120%"),
//!         Cell::from("1/0/00"),
//!         Cell::from("Master"),
//!         Cell::from("SUV"),
//!     ]],
//! )?;
//!
//! let cleaned = clean(&raw)?;
//! assert_eq!(cleaned.get(0, "state")?, Some(&Cell::from("Arizona")));
//! assert_eq!(cleaned.get(0, "gender")?, Some(&Cell::from("F")));
//! # Ok::<(), insurance_model::CleaningError>(())
//! ```

use insurance_model::{CleaningOptions, Result, Table};
use serde::Serialize;
use tracing::{debug, info, info_span};

use crate::dedupe::{drop_duplicate_rows, drop_empty_rows};
use crate::executors::{
    combine_vehicle_classes, convert_percentage_column, extract_complaints_column,
    normalize_gender_column, round_numeric_cells, standardize_education, standardize_states,
};
use crate::headers::rename_columns;

/// One step of the cleaning pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum CleaningStep {
    /// Remove rows whose cells are all missing.
    DropEmptyRows,
    /// Lower-case headers, spaces to underscores, `st` to `state`.
    RenameColumns,
    /// Collapse `gender` to `M`, `F` or `U`.
    NormalizeGender,
    /// Turn `%` strings in `customer_lifetime_value` into fractions.
    ConvertPercentages,
    /// Pull the count out of `number_of_open_complaints` strings.
    ExtractComplaints,
    /// Round every float cell to an integer.
    RoundNumerics,
    /// Expand state abbreviations.
    StandardizeStates,
    /// Standardize degree names.
    StandardizeEducation,
    /// Fold luxury vehicle classes together.
    CombineVehicleClasses,
    /// Remove exact duplicate rows.
    DropDuplicates,
}

impl CleaningStep {
    /// Execution order of a full run.
    pub const ORDER: [CleaningStep; 10] = [
        Self::DropEmptyRows,
        Self::RenameColumns,
        Self::NormalizeGender,
        Self::ConvertPercentages,
        Self::ExtractComplaints,
        Self::RoundNumerics,
        Self::StandardizeStates,
        Self::StandardizeEducation,
        Self::CombineVehicleClasses,
        Self::DropDuplicates,
    ];

    /// Returns a human-readable name for the step.
    pub fn display_name(self) -> &'static str {
        match self {
            Self::DropEmptyRows => "Drop empty rows",
            Self::RenameColumns => "Rename columns",
            Self::NormalizeGender => "Normalize gender",
            Self::ConvertPercentages => "Convert percentages",
            Self::ExtractComplaints => "Extract complaints",
            Self::RoundNumerics => "Round numerics",
            Self::StandardizeStates => "Standardize states",
            Self::StandardizeEducation => "Standardize education",
            Self::CombineVehicleClasses => "Combine vehicle classes",
            Self::DropDuplicates => "Drop duplicates",
        }
    }

    /// Whether the step removes rows rather than rewriting values.
    pub fn removes_rows(self) -> bool {
        matches!(self, Self::DropEmptyRows | Self::DropDuplicates)
    }

    /// Apply this step in place, returning the number of changes.
    pub fn apply(self, table: &mut Table, options: &CleaningOptions) -> Result<usize> {
        match self {
            Self::DropEmptyRows => Ok(drop_empty_rows(table)),
            Self::RenameColumns => rename_columns(table),
            Self::NormalizeGender => normalize_gender_column(table),
            Self::ConvertPercentages => convert_percentage_column(table),
            Self::ExtractComplaints => extract_complaints_column(table),
            Self::RoundNumerics => Ok(round_numeric_cells(table, options.rounding)),
            Self::StandardizeStates => standardize_states(table, options),
            Self::StandardizeEducation => standardize_education(table, options),
            Self::CombineVehicleClasses => combine_vehicle_classes(table, options),
            Self::DropDuplicates => Ok(drop_duplicate_rows(table)),
        }
    }
}

/// What a single step did.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StepReport {
    pub step: CleaningStep,
    /// Cells or headers rewritten, or rows removed for row steps.
    pub changed: usize,
    /// Row count once the step finished.
    pub rows_after: usize,
}

/// Summary of a full pipeline run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CleaningReport {
    pub input_rows: usize,
    pub output_rows: usize,
    pub steps: Vec<StepReport>,
}

impl CleaningReport {
    /// Report entry for `step`, if it ran.
    pub fn step(&self, step: CleaningStep) -> Option<&StepReport> {
        self.steps.iter().find(|entry| entry.step == step)
    }

    /// Total rows removed by row-removing steps.
    pub fn rows_removed(&self) -> usize {
        self.steps
            .iter()
            .filter(|entry| entry.step.removes_rows())
            .map(|entry| entry.changed)
            .sum()
    }

    /// Total cells and headers rewritten by value steps.
    pub fn values_changed(&self) -> usize {
        self.steps
            .iter()
            .filter(|entry| !entry.step.removes_rows())
            .map(|entry| entry.changed)
            .sum()
    }
}

/// Cleaned table together with the run report.
#[derive(Debug, Clone)]
pub struct CleaningOutcome {
    pub table: Table,
    pub report: CleaningReport,
}

/// The cleaning pipeline with its options.
#[derive(Debug, Clone, Default)]
pub struct CleaningPipeline {
    options: CleaningOptions,
}

impl CleaningPipeline {
    pub fn new(options: CleaningOptions) -> Self {
        Self { options }
    }

    /// Run every step on a copy of `input`.
    ///
    /// The input table is never modified. The first failing step aborts the
    /// run and its error is returned unchanged.
    pub fn execute(&self, input: &Table) -> Result<CleaningOutcome> {
        let span = info_span!(
            "clean_table",
            rows = input.height(),
            columns = input.width()
        );
        let _enter = span.enter();

        let mut table = input.clone();
        let mut report = CleaningReport {
            input_rows: input.height(),
            ..CleaningReport::default()
        };

        for step in CleaningStep::ORDER {
            let changed = step.apply(&mut table, &self.options)?;
            debug!(
                step = step.display_name(),
                changed,
                rows = table.height(),
                "step complete"
            );
            report.steps.push(StepReport {
                step,
                changed,
                rows_after: table.height(),
            });
        }

        report.output_rows = table.height();
        info!(
            input_rows = report.input_rows,
            output_rows = report.output_rows,
            "table cleaned"
        );
        Ok(CleaningOutcome { table, report })
    }
}

/// Clean a table with the default options.
pub fn clean(table: &Table) -> Result<Table> {
    clean_with_options(table, &CleaningOptions::default())
}

/// Clean a table with custom options.
pub fn clean_with_options(table: &Table, options: &CleaningOptions) -> Result<Table> {
    CleaningPipeline::new(options.clone())
        .execute(table)
        .map(|outcome| outcome.table)
}
