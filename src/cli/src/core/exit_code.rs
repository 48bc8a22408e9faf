use crate::core::error::CliError;
use rtok_lib::RtokError;

/// Exit codes for the rtok CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    Success = 0,
    /// General/unspecified error
    GeneralError = 1,
    /// Unrecognized input kept a baseline from being recorded
    GarbageError = 2,
    /// A missing baseline was recorded and needs review
    BaselineCreated = 3,
    /// IO error or bad fixture root
    FileError = 4,
    /// Source or baseline file not found
    NotFoundError = 5,
    /// Tokens differ from the recorded baseline
    MismatchError = 6,
}

impl ExitCode {
    pub fn code(&self) -> i32 {
        *self as i32
    }

    /// Collapses several failure codes: identical codes are kept, mixed ones
    /// become `GeneralError`.
    pub fn combine(codes: impl IntoIterator<Item = ExitCode>) -> ExitCode {
        let mut combined = ExitCode::Success;
        for code in codes {
            combined = match combined {
                ExitCode::Success => code,
                current if current == code => current,
                _ => ExitCode::GeneralError,
            };
        }
        combined
    }
}

impl From<&RtokError> for ExitCode {
    fn from(error: &RtokError) -> Self {
        match error {
            RtokError::Io(_) => ExitCode::FileError,
            RtokError::NotFound(_) => ExitCode::NotFoundError,
            RtokError::DirectoryNotFound(_) => ExitCode::FileError,
            RtokError::NotADirectory(_) => ExitCode::FileError,
            RtokError::DuplicateFixture { .. } => ExitCode::GeneralError,
            RtokError::InvalidBaseline { .. } => ExitCode::GeneralError,
            RtokError::BaselineCreated { .. } => ExitCode::BaselineCreated,
            RtokError::GarbageTokens { .. } => ExitCode::GarbageError,
            RtokError::Mismatch { .. } => ExitCode::MismatchError,
        }
    }
}

impl From<&Box<dyn std::error::Error>> for ExitCode {
    fn from(error: &Box<dyn std::error::Error>) -> Self {
        if let Some(CliError::ChecksFailed { code, .. }) = error.downcast_ref::<CliError>() {
            *code
        } else if let Some(rtok_error) = error.downcast_ref::<RtokError>() {
            ExitCode::from(rtok_error)
        } else {
            ExitCode::GeneralError
        }
    }
}
