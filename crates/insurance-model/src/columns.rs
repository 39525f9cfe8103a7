//! Column names the cleaning steps address after headers are normalized.

pub const GENDER: &str = "gender";
pub const CUSTOMER_LIFETIME_VALUE: &str = "customer_lifetime_value";
pub const NUMBER_OF_OPEN_COMPLAINTS: &str = "number_of_open_complaints";
pub const STATE: &str = "state";
pub const EDUCATION: &str = "education";
pub const VEHICLE_CLASS: &str = "vehicle_class";

/// Normalized form of the raw `ST` header, renamed to [`STATE`].
pub const STATE_ABBREVIATION: &str = "st";
