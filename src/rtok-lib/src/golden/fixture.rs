use crate::error::RtokError;
use crate::syntax::TokenizationResult;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

pub const SOURCE_EXTENSION: &str = "rs";
pub const EXPECTED_EXTENSION: &str = "tokens";

/// A source file paired with its expected-tokens sibling
/// (`foo.rs` and `foo.tokens` in the same directory).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fixture {
    pub name: String,
    pub source_path: PathBuf,
    pub expected_path: PathBuf,
}

impl Fixture {
    pub fn new(name: impl Into<String>, source_path: impl Into<PathBuf>) -> Self {
        let source_path = source_path.into();
        let expected_path = source_path.with_extension(EXPECTED_EXTENSION);
        Self {
            name: name.into(),
            source_path,
            expected_path,
        }
    }

    /// Fixture for a single file, named after its stem.
    pub fn from_path(source_path: &Path) -> Self {
        let name = source_path
            .file_stem()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_default();
        Self::new(name, source_path)
    }

    pub fn read_source(&self) -> Result<String, RtokError> {
        read_file(&self.source_path)
    }

    pub fn exists(&self) -> bool {
        self.expected_path.is_file()
    }

    pub fn read_expected(&self) -> Result<TokenizationResult, RtokError> {
        let text = read_file(&self.expected_path)?;
        TokenizationResult::deserialize(&text).map_err(|e| match e {
            RtokError::InvalidBaseline { line, message, .. } => RtokError::InvalidBaseline {
                path: Some(self.expected_path.clone()),
                line,
                message,
            },
            other => other,
        })
    }

    /// Overwrites the baseline. Only the bootstrap path calls this.
    pub fn write_expected(&self, result: &TokenizationResult) -> Result<(), RtokError> {
        fs::write(&self.expected_path, result.serialize())?;
        Ok(())
    }
}

impl std::fmt::Display for Fixture {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name, self.source_path.display())
    }
}

fn read_file(path: &Path) -> Result<String, RtokError> {
    fs::read_to_string(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => RtokError::NotFound(path.to_path_buf()),
        _ => RtokError::Io(e),
    })
}
