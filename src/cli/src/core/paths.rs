use std::path::Path;

pub fn clean_path_str(s: &str) -> &str {
    #[cfg(windows)]
    {
        if let Some(stripped) = s.strip_prefix(r"\\?\") {
            return stripped;
        }
    }
    s
}

/// Path as shown to the user: relative to the working directory when it is
/// inside it, otherwise as given.
pub fn display_path(path: &Path) -> String {
    let shown = std::env::current_dir()
        .ok()
        .and_then(|cwd| path.strip_prefix(&cwd).ok().map(Path::to_path_buf))
        .unwrap_or_else(|| path.to_path_buf());
    clean_path_str(&shown.display().to_string()).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_path_relative_to_cwd() {
        let cwd = std::env::current_dir().unwrap();
        let inside = cwd.join("fixtures").join("hello.rs");
        assert_eq!(
            display_path(&inside),
            Path::new("fixtures").join("hello.rs").display().to_string()
        );
    }

    #[test]
    fn test_display_path_outside_cwd_is_unchanged() {
        assert_eq!(display_path(Path::new("relative/a.rs")), "relative/a.rs");
    }
}
