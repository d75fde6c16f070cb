//! Aggregation configuration.

use std::fmt;
use std::str::FromStr;

use crate::{Error, Result};

/// How a counter accumulates a matching cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "String", into = "String"))]
pub enum CountersMode {
    /// A matching cell contributes exactly 1.
    #[default]
    Count,
    /// A matching cell contributes its integer value (0 if not an integer).
    Sum,
}

impl CountersMode {
    pub const fn as_str(self) -> &'static str {
        match self {
            CountersMode::Count => "count",
            CountersMode::Sum => "sum",
        }
    }
}

impl FromStr for CountersMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "count" => Ok(CountersMode::Count),
            "sum" => Ok(CountersMode::Sum),
            other => Err(Error::UnsupportedCountersMode(other.to_string())),
        }
    }
}

impl TryFrom<String> for CountersMode {
    type Error = Error;

    fn try_from(s: String) -> Result<Self> {
        s.parse()
    }
}

impl From<CountersMode> for String {
    fn from(mode: CountersMode) -> Self {
        mode.as_str().to_string()
    }
}

impl fmt::Display for CountersMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Options that change what the aggregation pass computes.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SpiralConfig {
    /// Accumulation rule for every counter
    pub counters_mode: CountersMode,
    /// Pre-register a `prime` marker and a `prime` counter
    pub mark_prime: bool,
}

impl Default for SpiralConfig {
    fn default() -> Self {
        Self {
            counters_mode: CountersMode::Count,
            mark_prime: true,
        }
    }
}
