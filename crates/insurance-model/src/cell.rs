//! Cell values for mixed-type tables.
//!
//! A column may hold text in one row and a number in the next, so every
//! value carries its own type tag. Steps pattern-match on [`Cell`] instead of
//! coercing implicitly.

use std::fmt;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

/// A single table value.
///
/// `Missing` is the absence of data. It is never equal to `"U"`, `""` or
/// zero. A `Float` holding NaN is also treated as missing by
/// [`Cell::is_missing`], matching the way data frames mark absent numbers.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Cell {
    #[default]
    Missing,
    Int(i64),
    Float(f64),
    Text(String),
}

impl Cell {
    /// Returns true for `Missing` and for NaN floats.
    pub fn is_missing(&self) -> bool {
        match self {
            Self::Missing => true,
            Self::Float(v) => v.is_nan(),
            Self::Int(_) | Self::Text(_) => false,
        }
    }

    /// Returns true for integer and non-NaN float values.
    pub fn is_numeric(&self) -> bool {
        matches!(self, Self::Int(_)) || matches!(self, Self::Float(v) if !v.is_nan())
    }

    /// Borrow the text of a `Text` cell.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Int(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Float(v) => Some(*v),
            Self::Int(v) => Some(*v as f64),
            _ => None,
        }
    }

    /// Short name of the variant, used in diagnostics.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Missing => "missing",
            Self::Int(_) => "integer",
            Self::Float(_) => "float",
            Self::Text(_) => "text",
        }
    }
}

impl PartialEq for Cell {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (a, b) if a.is_missing() && b.is_missing() => true,
            (Self::Int(a), Self::Int(b)) => a == b,
            // A NaN here is compared against a non-missing float and is never equal.
            (Self::Float(a), Self::Float(b)) => a == b,
            (Self::Text(a), Self::Text(b)) => a == b,
            _ => false,
        }
    }
}

impl Eq for Cell {}

impl Hash for Cell {
    fn hash<H: Hasher>(&self, state: &mut H) {
        if self.is_missing() {
            state.write_u8(0);
            return;
        }
        match self {
            Self::Int(v) => {
                state.write_u8(1);
                v.hash(state);
            }
            Self::Float(v) => {
                state.write_u8(2);
                // -0.0 == 0.0
                let bits = if *v == 0.0 { 0.0f64.to_bits() } else { v.to_bits() };
                bits.hash(state);
            }
            Self::Text(s) => {
                state.write_u8(3);
                s.hash(state);
            }
            Self::Missing => {}
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Missing => Ok(()),
            Self::Float(v) if v.is_nan() => Ok(()),
            Self::Int(v) => write!(f, "{v}"),
            Self::Float(v) => write!(f, "{v}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for Cell {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<i32> for Cell {
    fn from(value: i32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<f64> for Cell {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<&str> for Cell {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for Cell {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl<T: Into<Cell>> From<Option<T>> for Cell {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Missing, Into::into)
    }
}
