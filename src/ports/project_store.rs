use crate::domain::AppError;

/// Port for filesystem operations inside the destination project.
///
/// All `path` arguments are `/`-separated and relative to the project root.
pub trait ProjectStore {
    /// Check whether a file or directory exists.
    fn exists(&self, path: &str) -> bool;

    /// Read a file as UTF-8 text.
    fn read_to_string(&self, path: &str) -> Result<String, AppError>;

    /// Write bytes to a file, replacing any previous content.
    fn write(&self, path: &str, contents: &[u8]) -> Result<(), AppError>;

    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &str) -> Result<(), AppError>;

    /// Names of the entries of a directory, sorted. Missing directories yield no entries.
    fn list_dir(&self, path: &str) -> Result<Vec<String>, AppError>;
}
