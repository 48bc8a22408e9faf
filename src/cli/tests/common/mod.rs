#![allow(dead_code)]
use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

pub fn rtok_cmd() -> Command {
    Command::new(env!("CARGO_BIN_EXE_rtok"))
}

pub fn run(args: &[&str]) -> Output {
    rtok_cmd()
        .args(args)
        .output()
        .expect("Failed to execute rtok")
}

pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}

/// Fresh scratch directory, unique per test and process.
pub struct TempDir {
    pub path: PathBuf,
}

impl TempDir {
    pub fn new(label: &str) -> Self {
        let path = std::env::temp_dir().join(format!("rtok_cli_{label}_{}", std::process::id()));
        if path.exists() {
            fs::remove_dir_all(&path).expect("Failed to clear temp dir");
        }
        fs::create_dir_all(&path).expect("Failed to create temp dir");
        Self { path }
    }

    pub fn write(&self, relative: &str, content: &str) -> PathBuf {
        let file = self.path.join(relative);
        if let Some(parent) = file.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent dir");
        }
        fs::write(&file, content).expect("Failed to write file");
        file
    }

    pub fn as_str(&self) -> &str {
        self.path.to_str().expect("temp dir is valid UTF-8")
    }

    pub fn exists(&self, relative: &str) -> bool {
        Path::new(&self.path).join(relative).exists()
    }
}

impl Drop for TempDir {
    fn drop(&mut self) {
        fs::remove_dir_all(&self.path).ok();
    }
}
