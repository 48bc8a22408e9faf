use crate::core::exit_code::ExitCode;
use std::fmt;

/// Errors raised by the CLI itself. Library failures travel as `RtokError`.
#[derive(Debug)]
pub enum CliError {
    /// One or more fixtures failed during `fixture check`.
    ChecksFailed {
        failed: usize,
        total: usize,
        code: ExitCode,
    },
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::ChecksFailed { failed, total, .. } => {
                write!(f, "{failed} of {total} fixtures failed")
            }
        }
    }
}

impl std::error::Error for CliError {}
