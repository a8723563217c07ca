//! Error types and exit codes for teamdraw
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure (I/O, serialization)
//! - 2: Usage error (bad flags/args)
//! - 3: Data error (malformed record, missing header, invalid config)

pub mod macros;

use std::path::PathBuf;
use thiserror::Error;

/// Process exit codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data error - malformed input or configuration (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur while drawing teams
#[derive(Error, Debug)]
pub enum TeamdrawError {
    // Usage errors (exit code 2)
    #[error("{0}")]
    UsageError(String),

    // Data errors (exit code 3)
    #[error("malformed record in {path:?} at line {line}: expected at least {expected} columns, found {found}")]
    MalformedRecord {
        path: PathBuf,
        line: u64,
        expected: usize,
        found: usize,
    },

    #[error("missing header row in {path:?}")]
    MissingHeader { path: PathBuf },

    #[error("invalid configuration: {reason}")]
    InvalidConfig { reason: String },

    // Generic failures (exit code 1)
    #[error("failed to read {path:?}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("failed to write {path:?}: {source}")]
    FileWrite {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSer(#[from] toml::ser::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}

impl TeamdrawError {
    /// Build a malformed-record error for a short row
    pub fn malformed(path: impl Into<PathBuf>, line: u64, expected: usize, found: usize) -> Self {
        TeamdrawError::MalformedRecord {
            path: path.into(),
            line,
            expected,
            found,
        }
    }

    /// Build an invalid-config error
    pub fn invalid_config(reason: impl Into<String>) -> Self {
        TeamdrawError::InvalidConfig {
            reason: reason.into(),
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            TeamdrawError::UsageError(_) => ExitCode::Usage,

            TeamdrawError::MalformedRecord { .. }
            | TeamdrawError::MissingHeader { .. }
            | TeamdrawError::InvalidConfig { .. } => ExitCode::Data,

            TeamdrawError::FileRead { .. }
            | TeamdrawError::FileWrite { .. }
            | TeamdrawError::Toml(_)
            | TeamdrawError::TomlSer(_)
            | TeamdrawError::Json(_)
            | TeamdrawError::Other(_) => ExitCode::Failure,
        }
    }

    /// Convert error to JSON representation for structured error output
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "error": {
                "code": self.exit_code() as i32,
                "type": self.error_type(),
                "message": self.to_string(),
            }
        })
    }

    /// Get the error type identifier
    fn error_type(&self) -> &'static str {
        match self {
            TeamdrawError::UsageError(_) => "usage_error",
            TeamdrawError::MalformedRecord { .. } => "malformed_record",
            TeamdrawError::MissingHeader { .. } => "missing_header",
            TeamdrawError::InvalidConfig { .. } => "invalid_config",
            TeamdrawError::FileRead { .. } => "file_read_error",
            TeamdrawError::FileWrite { .. } => "file_write_error",
            TeamdrawError::Toml(_) => "toml_error",
            TeamdrawError::TomlSer(_) => "toml_error",
            TeamdrawError::Json(_) => "json_error",
            TeamdrawError::Other(_) => "other",
        }
    }
}

/// Result type alias for teamdraw operations
pub type Result<T> = std::result::Result<T, TeamdrawError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        assert_eq!(
            TeamdrawError::UsageError("bad".into()).exit_code(),
            ExitCode::Usage
        );
        assert_eq!(
            TeamdrawError::malformed("eventbrite.csv", 3, 5, 2).exit_code(),
            ExitCode::Data
        );
        assert_eq!(
            TeamdrawError::MissingHeader {
                path: PathBuf::from("x.csv")
            }
            .exit_code(),
            ExitCode::Data
        );
        assert_eq!(
            TeamdrawError::Other("boom".into()).exit_code(),
            ExitCode::Failure
        );
    }

    #[test]
    fn test_malformed_message_names_line_and_columns() {
        let err = TeamdrawError::malformed("eventbrite.csv", 7, 5, 3);
        let message = err.to_string();
        assert!(message.contains("line 7"));
        assert!(message.contains("at least 5 columns"));
        assert!(message.contains("found 3"));
    }

    #[test]
    fn test_to_json_envelope() {
        let json = TeamdrawError::invalid_config("grade order is empty").to_json();
        assert_eq!(json["error"]["code"], 3);
        assert_eq!(json["error"]["type"], "invalid_config");
        assert_eq!(
            json["error"]["message"],
            "invalid configuration: grade order is empty"
        );
    }
}
