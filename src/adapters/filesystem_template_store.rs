//! `TemplateStore` reading templates from a directory on disk.

use std::fs;
use std::io;
use std::path::PathBuf;

use crate::domain::AppError;
use crate::domain::template_path::normalize;
use crate::ports::TemplateStore;

#[derive(Debug, Clone)]
pub struct FilesystemTemplateStore {
    root: PathBuf,
}

impl FilesystemTemplateStore {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    fn resolve(&self, path: &str) -> Option<PathBuf> {
        normalize(path).map(|relative| self.root.join(relative))
    }

    fn read_error(path: &str, source: io::Error) -> AppError {
        AppError::TemplateRead { path: path.to_string(), source }
    }
}

impl TemplateStore for FilesystemTemplateStore {
    fn read_to_string(&self, path: &str) -> Result<String, AppError> {
        let full_path = self.resolve(path).ok_or_else(|| AppError::TemplateNotFound(path.into()))?;
        fs::read_to_string(full_path).map_err(|source| Self::read_error(path, source))
    }

    fn read_bytes(&self, path: &str) -> Result<Vec<u8>, AppError> {
        let full_path = self.resolve(path).ok_or_else(|| AppError::TemplateNotFound(path.into()))?;
        fs::read(full_path).map_err(|source| Self::read_error(path, source))
    }

    fn is_file(&self, path: &str) -> bool {
        self.resolve(path).is_some_and(|full_path| full_path.is_file())
    }

    fn describe(&self) -> String {
        self.root.display().to_string()
    }
}
