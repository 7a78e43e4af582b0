use std::sync::LazyLock;

use regex::Regex;

use crate::ports::ImportExtractor;

/// `import … from '…'` / `export … from '…'`, possibly spanning lines.
static IMPORT_FROM: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?ims)^(import|export)\s+.*?\s+from\s+['"](.*?)['"];?$"#)
        .unwrap_or_else(|err| panic!("invalid import pattern: {err}"))
});

/// Line-oriented textual scan for module specifiers.
///
/// Heuristic: specifiers inside comments or template strings are reported too.
#[derive(Debug, Clone, Copy, Default)]
pub struct RegexImportExtractor;

impl ImportExtractor for RegexImportExtractor {
    fn module_specifiers(&self, source: &str) -> Vec<String> {
        IMPORT_FROM
            .captures_iter(source)
            .filter_map(|captures| captures.get(2))
            .map(|specifier| specifier.as_str().to_string())
            .filter(|specifier| !specifier.is_empty())
            .collect()
    }
}
