//! Shared testing utilities for routegen integration tests.

use assert_cmd::Command;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Isolated destination project on disk.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
}

#[allow(dead_code)]
impl TestContext {
    /// Create an empty project directory.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        Self { root }
    }

    /// Project on Remix 2 with TypeScript enabled.
    pub fn v2_typescript() -> Self {
        let ctx = Self::new();
        ctx.write("package.json", r#"{"dependencies": {"@remix-run/react": "^2.1.0"}}"#);
        ctx.write("tsconfig.json", "{}");
        ctx
    }

    pub fn project(&self) -> &Path {
        self.root.path()
    }

    pub fn write(&self, relative: &str, contents: &str) {
        let path = self.project().join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        fs::write(path, contents).expect("Failed to write fixture file");
    }

    pub fn read(&self, relative: &str) -> String {
        fs::read_to_string(self.project().join(relative))
            .unwrap_or_else(|err| panic!("Failed to read {}: {}", relative, err))
    }

    pub fn exists(&self, relative: &str) -> bool {
        self.project().join(relative).exists()
    }

    /// `routegen` binary running inside the project directory.
    pub fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("routegen").expect("Failed to find routegen binary");
        cmd.current_dir(self.project()).env_remove("RUST_LOG");
        cmd
    }
}
