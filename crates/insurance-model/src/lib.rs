//! Data model for insurance customer table cleaning.
//!
//! - **cell**: the tagged [`Cell`] value held by every table position
//! - **table**: the [`Table`] container and its mutation helpers
//! - **options**: [`CleaningOptions`] replacement tables and rounding mode
//! - **error**: [`CleaningError`] and the crate [`Result`] alias
//! - **columns**: fixed column names addressed by the cleaning steps

pub mod cell;
pub mod columns;
pub mod error;
pub mod options;
pub mod table;

pub use cell::Cell;
pub use error::{CleaningError, ComplaintIssue, Result};
pub use options::{CleaningOptions, RoundingMode};
pub use table::Table;
