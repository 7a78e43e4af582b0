//! Per-file content pipeline applied to script templates.

use tracing::debug;

use crate::domain::{AppError, ConventionFlags, FormatOptions, Language, condition_template};
use crate::ports::{CodeFormatter, Transpiler};

/// Server adapter package the templates import from.
pub const DEFAULT_ADAPTER: &str = "@shopify/remix-oxygen";

/// Settings shared by every file of a generation run.
#[derive(Debug, Clone, Copy)]
pub struct RewriteSettings<'a> {
    pub convention_flags: ConventionFlags,
    pub language: Language,
    pub adapter: Option<&'a str>,
    pub format_options: &'a FormatOptions,
}

/// Condition, downgrade, re-target and format one template.
///
/// `template_path` names the source (its extension picks the TypeScript
/// dialect) and `destination` names the output (its extension picks the
/// formatter's parser).
pub fn rewrite_content(
    source: &str,
    template_path: &str,
    destination: &str,
    settings: &RewriteSettings<'_>,
    transpiler: &dyn Transpiler,
    formatter: &dyn CodeFormatter,
) -> Result<String, AppError> {
    let mut content = condition_template(source, settings.convention_flags);

    if !settings.language.is_typescript() {
        content = transpiler.strip_types(&content, template_path)?;
    }

    if let Some(adapter) = settings.adapter
        && adapter != DEFAULT_ADAPTER
    {
        content = content.replace(DEFAULT_ADAPTER, adapter);
    }

    let formatted = formatter.format(&content, destination, settings.format_options)?;
    debug!(template = template_path, destination, bytes = formatted.len(), "rewrote template");
    Ok(formatted)
}
