//! Cleaning pipeline for insurance customer tables.
//!
//! This crate provides the cleaning logic on top of `insurance-model`:
//!
//! - **normalization**: cell rules for gender, percentages, complaint counts,
//!   integer rounding and categorical replacements
//! - **headers**: column header normalization
//! - **executors**: the cell rules applied to their fixed columns
//! - **dedupe**: empty-row and duplicate-row removal
//! - **pipeline**: the ordered [`CleaningPipeline`] and [`clean`] entry point
//! - **frame**: conversion to and from Polars data frames

pub mod dedupe;
pub mod executors;
pub mod frame;
pub mod headers;
pub mod normalization;
pub mod pipeline;

pub use dedupe::{count_duplicate_rows, drop_duplicate_rows, drop_empty_rows};
pub use frame::{table_from_dataframe, table_to_dataframe};
pub use headers::rename_columns;
pub use pipeline::{
    CleaningOutcome, CleaningPipeline, CleaningReport, CleaningStep, StepReport, clean,
    clean_with_options,
};
