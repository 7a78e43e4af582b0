use crate::domain::AppError;

/// Port for reading route templates and their dependencies.
///
/// All `path` arguments are `/`-separated and relative to the templates root.
pub trait TemplateStore {
    /// Read a template file as UTF-8 text.
    fn read_to_string(&self, path: &str) -> Result<String, AppError>;

    /// Read a template file as raw bytes (non-script assets).
    fn read_bytes(&self, path: &str) -> Result<Vec<u8>, AppError>;

    /// Check whether a regular file exists at `path`.
    fn is_file(&self, path: &str) -> bool;

    /// Human-readable location of the templates root, for logs.
    fn describe(&self) -> String;
}
