//! Cell-level normalization rules.
//!
//! - **gender**: collapse free-text gender to `M`, `F` or `U`
//! - **numeric**: percentage strings, complaint fractions, integer rounding
//! - **categorical**: exact-match replacement tables

pub mod categorical;
pub mod gender;
pub mod numeric;

pub use categorical::{combine_vehicle_class, replace_exact};
pub use gender::normalize_gender;
pub use numeric::{convert_percentage, extract_complaints, round_to_integer};
