//! Shared CLI error type and exit codes.

use std::fmt;

/// Process exit codes used by CLI commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Input was rejected (e.g. unknown key)
    ValidationError = 1,
    /// Reading or writing a file failed
    IoError = 2,
}

impl ExitCode {
    /// Numeric code for `std::process::exit`.
    #[must_use]
    pub const fn code(self) -> i32 {
        self as i32
    }
}

/// Error returned by a CLI command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliError {
    /// Exit code to terminate with
    pub exit_code: ExitCode,
    /// Message printed to stderr
    pub message: String,
}

impl CliError {
    /// Invalid user input.
    pub fn validation(message: impl Into<String>) -> Self {
        Self {
            exit_code: ExitCode::ValidationError,
            message: message.into(),
        }
    }

    /// File system or serialization failure.
    pub fn io(message: impl Into<String>) -> Self {
        Self {
            exit_code: ExitCode::IoError,
            message: message.into(),
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Error: {}", self.message)
    }
}

impl std::error::Error for CliError {}

/// Result alias for CLI commands.
pub type CliResult<T> = Result<T, CliError>;

/// Serializes `value` as pretty JSON.
pub fn to_json<T: serde::Serialize>(value: &T) -> CliResult<String> {
    serde_json::to_string_pretty(value)
        .map_err(|e| CliError::io(format!("Failed to serialize JSON: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        assert_eq!(CliError::validation("bad key").exit_code.code(), 1);
        assert_eq!(CliError::io("disk").exit_code.code(), 2);
    }

    #[test]
    fn test_display() {
        let err = CliError::validation("Unknown key 'H'");
        assert_eq!(err.to_string(), "Error: Unknown key 'H'");
    }
}
