//! Cell values.
//!
//! A grid can hold any type. The aggregation pass only needs to know whether
//! a value is an integer, which is what [`CellValue`] exposes.

use std::fmt;

/// What the aggregation pass needs from a cell value.
pub trait CellValue {
    /// The value as an integer, if it is one. Sum-mode counters add this;
    /// everything else contributes 0.
    fn as_integer(&self) -> Option<i64>;

    /// Positive integer that passes trial division.
    fn is_prime(&self) -> bool {
        self.as_integer()
            .is_some_and(|n| n > 0 && matches!(ulam_spiral::is_prime(n), Ok(true)))
    }
}

/// A heterogeneous sequence element: number or text.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum Value {
    Int(i64),
    Float(f64),
    Text(String),
}

impl CellValue for Value {
    fn as_integer(&self) -> Option<i64> {
        match self {
            Value::Int(n) => Some(*n),
            Value::Float(_) | Value::Text(_) => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(n) => fmt::Display::fmt(n, f),
            Value::Float(x) => fmt::Display::fmt(x, f),
            Value::Text(s) => f.pad(s),
        }
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Int(n)
    }
}

impl From<f64> for Value {
    fn from(x: f64) -> Self {
        Value::Float(x)
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

macro_rules! integer_cell_value {
    ($($t:ty),*) => {
        $(
            impl CellValue for $t {
                fn as_integer(&self) -> Option<i64> {
                    i64::try_from(*self).ok()
                }
            }
        )*
    };
}

integer_cell_value!(i8, i16, i32, i64, u8, u16, u32, u64, usize);

impl CellValue for f64 {
    fn as_integer(&self) -> Option<i64> {
        None
    }
}

impl CellValue for String {
    fn as_integer(&self) -> Option<i64> {
        None
    }
}

impl CellValue for &str {
    fn as_integer(&self) -> Option<i64> {
        None
    }
}
