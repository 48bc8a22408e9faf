use std::fmt;
use std::io;
use std::path::PathBuf;

#[derive(Debug)]
pub enum RtokError {
    Io(io::Error),
    NotFound(PathBuf),
    DirectoryNotFound(PathBuf),
    NotADirectory(PathBuf),
    /// Two source files map to the same fixture name.
    DuplicateFixture {
        name: String,
        first: PathBuf,
        second: PathBuf,
    },
    InvalidBaseline {
        path: Option<PathBuf>,
        line: usize,
        message: String,
    },
    /// No baseline existed; the observed tokens were written as the new one.
    BaselineCreated {
        fixture: String,
        path: PathBuf,
    },
    GarbageTokens {
        fixture: String,
        report: String,
    },
    Mismatch {
        fixture: String,
        report: String,
    },
}

impl fmt::Display for RtokError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RtokError::Io(err) => write!(f, "IO error: {err}"),
            RtokError::NotFound(path) => write!(f, "File not found: {}", path.display()),
            RtokError::DirectoryNotFound(path) => {
                write!(f, "Directory not found: {}", path.display())
            }
            RtokError::NotADirectory(path) => write!(f, "Not a directory: {}", path.display()),
            RtokError::DuplicateFixture {
                name,
                first,
                second,
            } => write!(
                f,
                "Fixture name {name} is used by both {} and {}",
                first.display(),
                second.display()
            ),
            RtokError::InvalidBaseline {
                path: Some(path),
                line,
                message,
            } => write!(
                f,
                "Invalid baseline {} at line {line}: {message}",
                path.display()
            ),
            RtokError::InvalidBaseline {
                path: None,
                line,
                message,
            } => write!(f, "Invalid baseline at line {line}: {message}"),
            RtokError::BaselineCreated { fixture, path } => write!(
                f,
                "Expected tokens file doesn't exist for {fixture}: {}. Created it, review and commit it.",
                path.display()
            ),
            RtokError::GarbageTokens { fixture, report } => {
                write!(f, "Found garbage tokens in {fixture}:\n{report}")
            }
            RtokError::Mismatch { fixture, report } => {
                write!(f, "Tokenizing {fixture} didn't produce expected tokens.\n{report}")
            }
        }
    }
}

impl std::error::Error for RtokError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RtokError::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for RtokError {
    fn from(err: io::Error) -> Self {
        RtokError::Io(err)
    }
}
