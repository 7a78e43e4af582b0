//! Run-time choice between the embedded skeleton and a templates directory.

use std::path::PathBuf;

use super::{EmbeddedTemplateStore, FilesystemTemplateStore};
use crate::domain::AppError;
use crate::ports::TemplateStore;

#[derive(Debug, Clone)]
pub enum TemplateSource {
    Embedded(EmbeddedTemplateStore),
    Directory(FilesystemTemplateStore),
}

impl TemplateSource {
    /// Templates from `root` when given, the embedded skeleton otherwise.
    pub fn from_root(root: Option<PathBuf>) -> Self {
        match root {
            Some(root) => TemplateSource::Directory(FilesystemTemplateStore::new(root)),
            None => TemplateSource::Embedded(EmbeddedTemplateStore::new()),
        }
    }

    fn store(&self) -> &dyn TemplateStore {
        match self {
            TemplateSource::Embedded(store) => store,
            TemplateSource::Directory(store) => store,
        }
    }
}

impl TemplateStore for TemplateSource {
    fn read_to_string(&self, path: &str) -> Result<String, AppError> {
        self.store().read_to_string(path)
    }

    fn read_bytes(&self, path: &str) -> Result<Vec<u8>, AppError> {
        self.store().read_bytes(path)
    }

    fn is_file(&self, path: &str) -> bool {
        self.store().is_file(path)
    }

    fn describe(&self) -> String {
        self.store().describe()
    }
}
