//! `ProjectStore` backed by the destination project's directory on disk.

use std::fs;
use std::path::{Component, Path, PathBuf};

use crate::domain::AppError;
use crate::ports::ProjectStore;

/// Filesystem-backed project store rooted at the project directory.
///
/// Path operations are validated against the root to prevent directory traversal.
#[derive(Debug, Clone)]
pub struct FilesystemProjectStore {
    root: PathBuf,
}

impl FilesystemProjectStore {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// Create a store rooted at the current working directory.
    pub fn current() -> Result<Self, AppError> {
        let cwd = std::env::current_dir()?;
        Ok(Self::new(cwd))
    }

    fn resolve(&self, path: &str) -> Result<PathBuf, AppError> {
        let full_path = normalize_path(&self.root.join(path));
        if !full_path.starts_with(normalize_path(&self.root)) {
            return Err(AppError::config_error(format!(
                "Path '{}' escapes the project root {}",
                path,
                self.root.display()
            )));
        }
        Ok(full_path)
    }
}

impl ProjectStore for FilesystemProjectStore {
    fn exists(&self, path: &str) -> bool {
        self.resolve(path).map(|full_path| full_path.exists()).unwrap_or(false)
    }

    fn read_to_string(&self, path: &str) -> Result<String, AppError> {
        let full_path = self.resolve(path)?;
        fs::read_to_string(full_path).map_err(AppError::from)
    }

    fn write(&self, path: &str, contents: &[u8]) -> Result<(), AppError> {
        let full_path = self.resolve(path)?;
        fs::write(&full_path, contents)
            .map_err(|source| AppError::Write { path: path.to_string(), source })
    }

    fn create_dir_all(&self, path: &str) -> Result<(), AppError> {
        let full_path = self.resolve(path)?;
        fs::create_dir_all(full_path)
            .map_err(|source| AppError::Write { path: path.to_string(), source })
    }

    fn list_dir(&self, path: &str) -> Result<Vec<String>, AppError> {
        let full_path = self.resolve(path)?;
        if !full_path.is_dir() {
            return Ok(Vec::new());
        }

        let mut names = Vec::new();
        for entry in fs::read_dir(full_path)? {
            let entry = entry?;
            names.push(entry.file_name().to_string_lossy().to_string());
        }
        names.sort();
        Ok(names)
    }
}

/// Normalize path by resolving `.` and `..` components logically.
/// This does not access the filesystem.
pub(crate) fn normalize_path(path: &Path) -> PathBuf {
    let mut components = path.components().peekable();
    let mut ret = if let Some(Component::RootDir) = components.peek() {
        components.next();
        PathBuf::from("/")
    } else {
        PathBuf::new()
    };

    for component in components {
        match component {
            Component::Prefix(..) | Component::RootDir => ret.push(component.as_os_str()),
            Component::CurDir => {}
            Component::ParentDir => {
                ret.pop();
            }
            Component::Normal(c) => ret.push(c),
        }
    }
    ret
}
