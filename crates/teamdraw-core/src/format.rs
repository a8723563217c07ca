//! Output format handling for teamdraw
//!
//! - human: readable summary for the terminal
//! - json: stable, machine-readable JSON
//! - records: line-oriented `H`/`T`/`M`/`W` records

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::bail_usage;
use crate::error::TeamdrawError;

/// Output format for teamdraw commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output for machine consumption
    Json,
    /// Line-oriented records
    Records,
}

impl FromStr for OutputFormat {
    type Err = TeamdrawError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "human" => Ok(OutputFormat::Human),
            "json" => Ok(OutputFormat::Json),
            "records" => Ok(OutputFormat::Records),
            other => bail_usage!(format!(
                "unknown format: {} (expected: human, json, or records)",
                other
            )),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Human => write!(f, "human"),
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Records => write!(f, "records"),
        }
    }
}

/// Escape double quotes for embedding in a quoted records field
pub fn escape_quotes(s: &str) -> String {
    s.replace('"', r#"\""#)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_formats() {
        assert_eq!("json".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert_eq!("HUMAN".parse::<OutputFormat>().unwrap(), OutputFormat::Human);
        assert!("xml".parse::<OutputFormat>().is_err());
        assert_eq!(OutputFormat::Records.to_string(), "records");
    }

    #[test]
    fn test_escape_quotes() {
        assert_eq!(escape_quotes(r#"Jo "JJ" Doe"#), r#"Jo \"JJ\" Doe"#);
    }
}
