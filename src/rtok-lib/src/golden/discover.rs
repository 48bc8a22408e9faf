use super::fixture::{Fixture, SOURCE_EXTENSION};
use crate::error::RtokError;
use std::fs;
use std::path::Path;

pub const FILTER_ENV_VAR: &str = "RTOK_FIXTURE_FILTER";

/// Restricts discovery to the named fixtures. Empty means everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FixtureFilter {
    names: Vec<String>,
}

impl FixtureFilter {
    /// Comma-separated fixture names, e.g. `"hello,comments"`.
    pub fn parse(spec: &str) -> Self {
        let names = spec
            .split(',')
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .map(String::from)
            .collect();
        Self { names }
    }

    pub fn from_env() -> Self {
        std::env::var(FILTER_ENV_VAR)
            .map(|spec| Self::parse(&spec))
            .unwrap_or_default()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn matches(&self, name: &str) -> bool {
        self.is_empty() || self.names.iter().any(|n| n == name)
    }
}

/// Every `*.rs` file under `root`, sorted by fixture name.
///
/// A fixture's name is its path relative to `root` without the extension,
/// with path separators replaced by `_`. Two files with the same name, such
/// as `a/b.rs` and `a_b.rs`, are rejected.
pub fn discover(root: &Path, filter: &FixtureFilter) -> Result<Vec<Fixture>, RtokError> {
    if !root.exists() {
        return Err(RtokError::DirectoryNotFound(root.to_path_buf()));
    }
    if !root.is_dir() {
        return Err(RtokError::NotADirectory(root.to_path_buf()));
    }

    let mut fixtures = Vec::new();
    collect_fixtures(root, Path::new(""), &mut fixtures)?;
    fixtures.sort_by(|a, b| a.name.cmp(&b.name));
    if let Some(pair) = fixtures.windows(2).find(|pair| pair[0].name == pair[1].name) {
        return Err(RtokError::DuplicateFixture {
            name: pair[0].name.clone(),
            first: pair[0].source_path.clone(),
            second: pair[1].source_path.clone(),
        });
    }
    fixtures.retain(|f| filter.matches(&f.name));
    Ok(fixtures)
}

fn collect_fixtures(
    base_dir: &Path,
    relative_dir: &Path,
    fixtures: &mut Vec<Fixture>,
) -> Result<(), RtokError> {
    let current_dir = base_dir.join(relative_dir);
    for entry in fs::read_dir(&current_dir)? {
        let path = entry?.path();
        if path.is_dir() {
            if let Some(dir_name) = path.file_name() {
                collect_fixtures(base_dir, &relative_dir.join(dir_name), fixtures)?;
            }
        } else if path.extension().and_then(|e| e.to_str()) == Some(SOURCE_EXTENSION) {
            let file_stem = match path.file_stem() {
                Some(stem) => stem.to_string_lossy().to_string(),
                None => continue,
            };
            let dir_str = relative_dir.to_string_lossy().to_string();
            let name = if dir_str.is_empty() {
                file_stem
            } else {
                let safe_dir = dir_str.replace(std::path::MAIN_SEPARATOR, "_");
                format!("{safe_dir}_{file_stem}")
            };
            fixtures.push(Fixture::new(name, path));
        }
    }
    Ok(())
}
