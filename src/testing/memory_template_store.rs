use std::cell::RefCell;
use std::collections::{HashMap, HashSet};
use std::io;

use crate::domain::AppError;
use crate::ports::TemplateStore;

/// Templates root held in memory.
#[derive(Debug, Default)]
pub struct MemoryTemplateStore {
    files: HashMap<String, Vec<u8>>,
    unreadable: HashSet<String>,
    /// Paths read so far, in call order.
    pub reads: RefCell<Vec<String>>,
}

#[allow(dead_code)]
impl MemoryTemplateStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_file(mut self, path: &str, contents: &str) -> Self {
        self.files.insert(path.to_string(), contents.as_bytes().to_vec());
        self
    }

    /// Register a file that exists but fails to read.
    pub fn with_unreadable(mut self, path: &str) -> Self {
        self.files.insert(path.to_string(), Vec::new());
        self.unreadable.insert(path.to_string());
        self
    }

    fn get(&self, path: &str) -> Result<Vec<u8>, AppError> {
        self.reads.borrow_mut().push(path.to_string());
        if self.unreadable.contains(path) {
            return Err(AppError::TemplateRead {
                path: path.to_string(),
                source: io::Error::new(io::ErrorKind::PermissionDenied, "permission denied"),
            });
        }
        self.files.get(path).cloned().ok_or_else(|| AppError::TemplateNotFound(path.to_string()))
    }
}

impl TemplateStore for MemoryTemplateStore {
    fn read_to_string(&self, path: &str) -> Result<String, AppError> {
        let bytes = self.get(path)?;
        String::from_utf8(bytes).map_err(|err| AppError::TemplateRead {
            path: path.to_string(),
            source: io::Error::new(io::ErrorKind::InvalidData, err),
        })
    }

    fn read_bytes(&self, path: &str) -> Result<Vec<u8>, AppError> {
        self.get(path)
    }

    fn is_file(&self, path: &str) -> bool {
        self.files.contains_key(path)
    }

    fn describe(&self) -> String {
        "<memory>".to_string()
    }
}
