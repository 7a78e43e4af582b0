use std::cell::RefCell;
use std::collections::{BTreeMap, BTreeSet};

use crate::domain::AppError;
use crate::ports::ProjectStore;

/// In-memory destination project.
#[derive(Debug, Default)]
pub struct MockProjectStore {
    pub files: RefCell<BTreeMap<String, Vec<u8>>>,
    pub dirs: RefCell<BTreeSet<String>>,
    /// Every path passed to `write`, in call order.
    pub writes: RefCell<Vec<String>>,
}

#[allow(dead_code)]
impl MockProjectStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_file(self, path: &str, contents: &str) -> Self {
        self.files.borrow_mut().insert(path.to_string(), contents.as_bytes().to_vec());
        self
    }

    pub fn with_dir(self, path: &str) -> Self {
        self.dirs.borrow_mut().insert(path.to_string());
        self
    }

    pub fn file(&self, path: &str) -> Option<String> {
        self.files.borrow().get(path).map(|bytes| String::from_utf8_lossy(bytes).into_owned())
    }

    pub fn written(&self) -> Vec<String> {
        self.writes.borrow().clone()
    }
}

impl ProjectStore for MockProjectStore {
    fn exists(&self, path: &str) -> bool {
        let prefix = format!("{}/", path);
        self.files.borrow().contains_key(path)
            || self.dirs.borrow().contains(path)
            || self.files.borrow().keys().any(|file| file.starts_with(&prefix))
    }

    fn read_to_string(&self, path: &str) -> Result<String, AppError> {
        self.file(path).ok_or_else(|| {
            AppError::Io(std::io::Error::new(std::io::ErrorKind::NotFound, path.to_string()))
        })
    }

    fn write(&self, path: &str, contents: &[u8]) -> Result<(), AppError> {
        self.writes.borrow_mut().push(path.to_string());
        self.files.borrow_mut().insert(path.to_string(), contents.to_vec());
        Ok(())
    }

    fn create_dir_all(&self, path: &str) -> Result<(), AppError> {
        let mut dirs = self.dirs.borrow_mut();
        let mut current = String::new();
        for segment in path.split('/').filter(|segment| !segment.is_empty()) {
            if !current.is_empty() {
                current.push('/');
            }
            current.push_str(segment);
            dirs.insert(current.clone());
        }
        Ok(())
    }

    fn list_dir(&self, path: &str) -> Result<Vec<String>, AppError> {
        let prefix = format!("{}/", path);
        let child = |entry: &String| -> Option<String> {
            let rest = entry.strip_prefix(&prefix)?;
            rest.split('/').next().map(str::to_string)
        };

        let mut entries: BTreeSet<String> = self.files.borrow().keys().filter_map(child).collect();
        entries.extend(self.dirs.borrow().iter().filter_map(child));
        Ok(entries.into_iter().collect())
    }
}
