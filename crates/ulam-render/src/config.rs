//! Renderer configuration and input selection.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use ulam_grid::{CountersMode, Sequence, SpiralConfig, Value};

use crate::{Error, Result};

/// Output encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = &'static str;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err("expected \"text\" or \"json\""),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            OutputFormat::Text => "text",
            OutputFormat::Json => "json",
        })
    }
}

/// Everything the renderer needs: the aggregation options plus display toggles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderConfig {
    /// Options forwarded to the aggregation engine
    pub spiral: SpiralConfig,
    /// Plain cells: no center brackets, no marker asterisks
    pub raw: bool,
    /// Per-row totals on the left and (mirrored) right edges
    pub row_counters: bool,
    /// Per-column totals above and (mirrored) below the matrix
    pub col_counters: bool,
    /// Output encoding
    pub format: OutputFormat,
    /// Length of the default `1..=count` dataset
    pub count: i64,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            spiral: SpiralConfig::default(),
            raw: false,
            row_counters: true,
            col_counters: true,
            format: OutputFormat::Text,
            count: 100,
        }
    }
}

impl RenderConfig {
    /// Create config from environment variables with sensible defaults.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Create config from any `name -> value` source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = Self::default();

        if let Some(mode) = lookup("ULAM_COUNTERS_MODE") {
            config.spiral.counters_mode = mode.parse::<CountersMode>()?;
        }
        if let Some(value) = lookup("ULAM_MARK_PRIME") {
            config.spiral.mark_prime = parse_flag("ULAM_MARK_PRIME", value)?;
        }
        if let Some(value) = lookup("ULAM_RAW") {
            config.raw = parse_flag("ULAM_RAW", value)?;
        }
        if let Some(value) = lookup("ULAM_ROW_COUNTERS") {
            config.row_counters = parse_flag("ULAM_ROW_COUNTERS", value)?;
        }
        if let Some(value) = lookup("ULAM_COL_COUNTERS") {
            config.col_counters = parse_flag("ULAM_COL_COUNTERS", value)?;
        }
        if let Some(value) = lookup("ULAM_FORMAT") {
            config.format = value.parse().map_err(|reason| Error::InvalidEnv {
                name: "ULAM_FORMAT",
                value: value.clone(),
                reason,
            })?;
        }
        if let Some(value) = lookup("ULAM_COUNT") {
            config.count = match value.parse::<i64>() {
                Ok(n) if n > 0 => n,
                _ => {
                    return Err(Error::InvalidEnv {
                        name: "ULAM_COUNT",
                        value,
                        reason: "expected a positive integer",
                    })
                }
            };
        }

        Ok(config)
    }
}

fn parse_flag(name: &'static str, value: String) -> Result<bool> {
    match value.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(Error::InvalidEnv {
            name,
            value,
            reason: "expected a boolean",
        }),
    }
}

/// Where the sequence comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    /// Integers `1..=n`
    Range(i64),
    /// A JSON array of numbers and strings
    JsonFile(PathBuf),
}

impl InputSource {
    /// A numeric argument selects a range, anything else is a JSON file path.
    pub fn from_arg(arg: Option<String>, default_count: i64) -> Self {
        match arg {
            None => InputSource::Range(default_count),
            Some(arg) => match arg.parse::<i64>() {
                Ok(n) => InputSource::Range(n),
                Err(_) => InputSource::JsonFile(PathBuf::from(arg)),
            },
        }
    }

    pub fn load(&self) -> Result<Sequence<Value>> {
        match self {
            InputSource::Range(n) => Ok(Sequence::range(1, *n)?),
            InputSource::JsonFile(path) => {
                let input = std::fs::read_to_string(path)?;
                Ok(Sequence::from_json(&input)?)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn defaults_without_env() {
        let config = RenderConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, RenderConfig::default());
        assert_eq!(config.spiral.counters_mode, CountersMode::Count);
        assert!(config.spiral.mark_prime);
    }

    #[test]
    fn reads_every_variable() {
        let config = RenderConfig::from_lookup(lookup(&[
            ("ULAM_COUNTERS_MODE", "sum"),
            ("ULAM_MARK_PRIME", "false"),
            ("ULAM_RAW", "1"),
            ("ULAM_ROW_COUNTERS", "no"),
            ("ULAM_COL_COUNTERS", "OFF"),
            ("ULAM_FORMAT", "json"),
            ("ULAM_COUNT", "49"),
        ]))
        .unwrap();

        assert_eq!(config.spiral.counters_mode, CountersMode::Sum);
        assert!(!config.spiral.mark_prime);
        assert!(config.raw);
        assert!(!config.row_counters);
        assert!(!config.col_counters);
        assert_eq!(config.format, OutputFormat::Json);
        assert_eq!(config.count, 49);
    }

    #[test]
    fn unsupported_counters_mode_is_an_error() {
        let err = RenderConfig::from_lookup(lookup(&[("ULAM_COUNTERS_MODE", "avg")])).unwrap_err();
        assert!(matches!(
            err,
            Error::Grid(ulam_grid::Error::UnsupportedCountersMode(_))
        ));
    }

    #[test]
    fn bad_values_name_the_variable() {
        for (name, value) in [
            ("ULAM_RAW", "maybe"),
            ("ULAM_FORMAT", "html"),
            ("ULAM_COUNT", "0"),
            ("ULAM_COUNT", "ten"),
        ] {
            let err = RenderConfig::from_lookup(lookup(&[(name, value)])).unwrap_err();
            assert!(
                matches!(&err, Error::InvalidEnv { name: n, .. } if *n == name),
                "{} = {}",
                name,
                value
            );
        }
    }

    #[test]
    fn input_source_from_arg() {
        assert_eq!(InputSource::from_arg(None, 25), InputSource::Range(25));
        assert_eq!(
            InputSource::from_arg(Some("81".into()), 25),
            InputSource::Range(81)
        );
        assert_eq!(
            InputSource::from_arg(Some("data.json".into()), 25),
            InputSource::JsonFile(PathBuf::from("data.json"))
        );
    }

    #[test]
    fn loads_json_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"[2, "x", 3.5]"#).unwrap();

        let seq = InputSource::JsonFile(file.path().to_path_buf()).load().unwrap();
        assert_eq!(
            seq.into_vec(),
            vec![Value::Int(2), Value::from("x"), Value::Float(3.5)]
        );
    }

    #[test]
    fn missing_file_and_bad_range() {
        let missing = InputSource::JsonFile(PathBuf::from("/nonexistent/ulam.json")).load();
        assert!(matches!(missing, Err(Error::Io(_))));

        let empty = InputSource::Range(0).load();
        assert!(matches!(
            empty,
            Err(Error::Grid(ulam_grid::Error::InvalidSequence(_)))
        ));
    }
}
