//! `TemplateStore` over the skeleton templates compiled into the binary.

use include_dir::{Dir, include_dir};

use crate::domain::AppError;
use crate::domain::template_path::normalize;
use crate::ports::TemplateStore;

static SKELETON_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/src/assets/templates/skeleton");

/// Embedded skeleton templates, used when no templates directory is given.
#[derive(Debug, Clone, Default)]
pub struct EmbeddedTemplateStore;

impl EmbeddedTemplateStore {
    pub fn new() -> Self {
        Self
    }

    fn file(path: &str) -> Result<&'static include_dir::File<'static>, AppError> {
        normalize(path)
            .and_then(|relative| SKELETON_DIR.get_file(relative))
            .ok_or_else(|| AppError::TemplateNotFound(path.to_string()))
    }
}

impl TemplateStore for EmbeddedTemplateStore {
    fn read_to_string(&self, path: &str) -> Result<String, AppError> {
        let file = Self::file(path)?;
        file.contents_utf8().map(str::to_string).ok_or_else(|| AppError::TemplateRead {
            path: path.to_string(),
            source: std::io::Error::new(std::io::ErrorKind::InvalidData, "template is not UTF-8"),
        })
    }

    fn read_bytes(&self, path: &str) -> Result<Vec<u8>, AppError> {
        Ok(Self::file(path)?.contents().to_vec())
    }

    fn is_file(&self, path: &str) -> bool {
        Self::file(path).is_ok()
    }

    fn describe(&self) -> String {
        "<embedded skeleton>".to_string()
    }
}
