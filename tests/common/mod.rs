#![allow(dead_code)]

use std::fs;
use std::path::Path;

use tempfile::TempDir;

/// Creates an `assert_cmd` Command for the flint binary, run from `dir`
/// so no stray `.flint.toml` is picked up.
#[macro_export]
macro_rules! flint {
    ($dir:expr) => {{
        #[allow(deprecated)]
        let mut cmd = assert_cmd::Command::cargo_bin("flint").expect("binary should exist");
        cmd.current_dir($dir);
        cmd
    }};
}

/// Creates a temporary directory with test fixtures for integration tests.
pub struct TestFixture {
    pub dir: TempDir,
}

impl TestFixture {
    /// Creates a new test fixture with an empty temp directory.
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Creates a file with the given content in the temp directory.
    pub fn create_file(&self, relative_path: &str, content: &str) {
        let path = self.dir.path().join(relative_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        fs::write(&path, content).expect("Failed to write file");
    }

    /// Returns the path to the temp directory.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Creates a `.flint.toml` in the temp directory.
    pub fn create_config(&self, content: &str) {
        self.create_file(".flint.toml", content);
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

/// A header with a proper guard and nothing to report.
pub const CLEAN_HEADER: &str = "#ifndef CLEAN_H\n#define CLEAN_H\nint clean();\n#endif\n";

/// One error (`strtok`) on line 1, one advice (`NULL`) on line 2 in C++.
pub const ERROR_AND_ADVICE: &str = "char *t = strtok(s, d);\nint *p = NULL;\n";

/// One warning (`volatile`) on line 1 in C++.
pub const WARNING_ONLY: &str = "volatile int flag;\n";

/// The offending call sits between pause and resume markers.
pub const PAUSED_ERROR: &str =
    "int a;\n// %flint: pause\nchar *t = strtok(s, d);\n// %flint: resume\nint b;\n";
