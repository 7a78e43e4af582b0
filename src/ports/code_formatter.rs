use crate::domain::{AppError, FormatOptions};

/// Port for reformatting generated code in the destination project's style.
pub trait CodeFormatter {
    /// Format `source`; `destination` picks the parser by extension.
    fn format(
        &self,
        source: &str,
        destination: &str,
        options: &FormatOptions,
    ) -> Result<String, AppError>;
}
