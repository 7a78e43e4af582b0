use std::io;

use thiserror::Error;

/// Library-wide error type for routegen operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// Route name is not part of the catalog.
    #[error("No route found for '{name}'. Try one of {available}.")]
    UnknownRoute { name: String, available: String },

    /// The selected route template does not exist in the templates root.
    #[error("Route template not found: {0}")]
    TemplateNotFound(String),

    /// A template file exists but could not be read.
    #[error("Failed to read template '{path}': {source}")]
    TemplateRead {
        path: String,
        #[source]
        source: io::Error,
    },

    /// A destination file could not be written.
    #[error("Failed to write '{path}': {source}")]
    Write {
        path: String,
        #[source]
        source: io::Error,
    },

    /// Stripping static types from a template failed.
    #[error("Failed to transpile '{path}': {details}")]
    Transpile { path: String, details: String },

    /// Formatting generated code failed.
    #[error("Failed to format '{path}': {details}")]
    Format { path: String, details: String },

    /// Parse error for a config file.
    #[error("Failed to parse {what}: {details}")]
    ConfigParse { what: String, details: String },

    /// Interactive prompt failed.
    #[error("Prompt failed: {0}")]
    Prompt(String),

    /// The operator interrupted an interactive prompt.
    #[error("Operation cancelled")]
    Cancelled,
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }

    pub fn transpile<P: Into<String>, D: Into<String>>(path: P, details: D) -> Self {
        AppError::Transpile { path: path.into(), details: details.into() }
    }

    pub fn format<P: Into<String>, D: Into<String>>(path: P, details: D) -> Self {
        AppError::Format { path: path.into(), details: details.into() }
    }

    pub fn config_parse<W: Into<String>, D: ToString>(what: W, details: D) -> Self {
        AppError::ConfigParse { what: what.into(), details: details.to_string() }
    }

    /// Get the equivalent `io::ErrorKind` for this error.
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            AppError::Io(e) => e.kind(),
            AppError::TemplateRead { source, .. } | AppError::Write { source, .. } => source.kind(),
            AppError::UnknownRoute { .. } | AppError::TemplateNotFound(_) => {
                io::ErrorKind::NotFound
            }
            AppError::Configuration(_) | AppError::ConfigParse { .. } => {
                io::ErrorKind::InvalidInput
            }
            AppError::Transpile { .. } | AppError::Format { .. } => io::ErrorKind::InvalidData,
            AppError::Cancelled => io::ErrorKind::Interrupted,
            AppError::Prompt(_) => io::ErrorKind::Other,
        }
    }
}
