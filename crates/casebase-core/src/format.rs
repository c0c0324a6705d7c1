//! Output format handling for casebase
//!
//! - human: readable, concise output for terminal use
//! - json: stable, machine-readable JSON
//! - records: line-oriented output that is easy to grep and to feed to
//!   other tools

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CasebaseError;

/// Output format for casebase commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output for machine consumption
    Json,
    /// One record per line
    Records,
}

impl FromStr for OutputFormat {
    type Err = CasebaseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "human" => Ok(OutputFormat::Human),
            "json" => Ok(OutputFormat::Json),
            "records" => Ok(OutputFormat::Records),
            other => Err(CasebaseError::UnknownFormat(other.to_string())),
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

/// Escape a value for a quoted records field.
///
/// Backslashes and double quotes are backslash-escaped, and line breaks
/// become `\n` / `\r`, so one record always stays on one line.
pub fn escape_quotes(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '\\' => out.push_str(r"\\"),
            '"' => out.push_str(r#"\""#),
            '\n' => out.push_str(r"\n"),
            '\r' => out.push_str(r"\r"),
            _ => out.push(c),
        }
    }
    out
}
