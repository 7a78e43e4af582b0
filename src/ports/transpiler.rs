use crate::domain::AppError;

/// Port for downgrading TypeScript sources to JavaScript.
pub trait Transpiler {
    /// Strip static types from `source`; `path` selects the dialect (`.ts` vs `.tsx`).
    fn strip_types(&self, source: &str, path: &str) -> Result<String, AppError>;
}
