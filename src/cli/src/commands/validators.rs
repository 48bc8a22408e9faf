use lazy_static::lazy_static;
use regex::Regex;
use std::path::Path;

lazy_static! {
    static ref FIXTURE_NAME_REGEX: Regex = Regex::new(r"^[a-zA-Z0-9_.-]+$").unwrap();
}

pub fn validate_path_exists(path: &str) -> Result<String, String> {
    if Path::new(path).exists() {
        Ok(path.to_string())
    } else {
        Err(format!("Path does not exist: {path}"))
    }
}

pub fn validate_file(path: &str) -> Result<String, String> {
    let path = validate_path_exists(path)?;
    if Path::new(&path).is_file() {
        Ok(path)
    } else {
        Err(format!("Not a file: {path}"))
    }
}

/// Comma-separated fixture names.
pub fn validate_filter(filter: &str) -> Result<String, String> {
    let names: Vec<&str> = filter.split(',').map(str::trim).collect();
    if names.iter().all(|name| name.is_empty()) {
        return Err("Filter must name at least one fixture".to_string());
    }
    for name in names.iter().filter(|name| !name.is_empty()) {
        if !FIXTURE_NAME_REGEX.is_match(name) {
            return Err(format!(
                "Invalid fixture name '{name}': must match ^[a-zA-Z0-9_.-]+$"
            ));
        }
    }
    Ok(filter.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_filter() {
        assert!(validate_filter("hello").is_ok());
        assert!(validate_filter("hello,items_lifetimes").is_ok());
        assert!(validate_filter("a, b").is_ok());
        assert!(validate_filter("v1.2-rc").is_ok());

        assert!(validate_filter("").is_err());
        assert!(validate_filter(" , ").is_err());
        assert!(validate_filter("bad name").is_err());
        assert!(validate_filter("nested/path").is_err());
    }

    #[test]
    fn test_validate_file() {
        assert!(validate_file("Cargo.toml").is_ok());
        assert!(validate_file("src").is_err());
        assert!(validate_file("does-not-exist.rs").is_err());
    }
}
