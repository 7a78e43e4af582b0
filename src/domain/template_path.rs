//! Helpers for `/`-separated paths relative to a templates root.
//!
//! Template paths never touch the host filesystem representation, so they
//! are handled as plain strings and normalized logically.

/// Directory holding the application sources inside a templates root.
pub const GENERATOR_APP_DIR: &str = "app";

/// Directory holding route modules, relative to the app directory.
pub const GENERATOR_ROUTE_DIR: &str = "routes";

/// Extensions tried, in order, when an import specifier has none.
pub const RESOLVE_EXTENSIONS: [&str; 4] = ["tsx", "ts", "jsx", "js"];

/// Path of a file under the templates' app directory.
pub fn template_app_file(relative: &str) -> String {
    if relative.is_empty() {
        GENERATOR_APP_DIR.to_string()
    } else {
        format!("{}/{}", GENERATOR_APP_DIR, relative.trim_start_matches('/'))
    }
}

/// Directory portion of a path (`""` for a bare file name).
pub fn dirname(path: &str) -> &str {
    match path.rfind('/') {
        Some(idx) => &path[..idx],
        None => "",
    }
}

/// Final path segment.
pub fn basename(path: &str) -> &str {
    match path.rfind('/') {
        Some(idx) => &path[idx + 1..],
        None => path,
    }
}

/// Join `relative` onto `base` and normalize the result.
///
/// Returns `None` when the path climbs above the templates root.
pub fn join(base: &str, relative: &str) -> Option<String> {
    if base.is_empty() { normalize(relative) } else { normalize(&format!("{}/{}", base, relative)) }
}

/// Resolve `.` and `..` segments logically.
pub fn normalize(path: &str) -> Option<String> {
    let mut segments: Vec<&str> = Vec::new();
    for segment in path.split('/') {
        match segment {
            "" | "." => {}
            ".." => {
                segments.pop()?;
            }
            other => segments.push(other),
        }
    }
    Some(segments.join("/"))
}

/// Relative path from directory `from` to directory `to`, or `"."` when equal.
pub fn relative_dir(from: &str, to: &str) -> String {
    let from: Vec<&str> = from.split('/').filter(|s| !s.is_empty()).collect();
    let to: Vec<&str> = to.split('/').filter(|s| !s.is_empty()).collect();
    let common = from.iter().zip(&to).take_while(|(a, b)| a == b).count();

    let mut parts: Vec<&str> = vec![".."; from.len() - common];
    parts.extend(&to[common..]);
    if parts.is_empty() { ".".to_string() } else { parts.join("/") }
}

/// Whether the path names a TypeScript or JavaScript module.
pub fn is_script(path: &str) -> bool {
    matches!(extension(path), Some("ts" | "tsx" | "js" | "jsx"))
}

/// File extension without the dot.
pub fn extension(path: &str) -> Option<&str> {
    let name = basename(path);
    match name.rfind('.') {
        Some(idx) if idx > 0 => Some(&name[idx + 1..]),
        _ => None,
    }
}

/// Swap `.ts`/`.tsx` for `.js`/`.jsx` when the project is not TypeScript.
pub fn with_language_extension(path: &str, typescript: bool) -> String {
    if typescript {
        return path.to_string();
    }
    if let Some(stem) = path.strip_suffix(".tsx") {
        format!("{}.jsx", stem)
    } else if let Some(stem) = path.strip_suffix(".ts") {
        format!("{}.js", stem)
    } else {
        path.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_resolves_parent_segments() {
        assert_eq!(
            normalize("app/routes/pages/../../components/Button").as_deref(),
            Some("app/components/Button")
        );
        assert_eq!(normalize("./app/./styles/app.css").as_deref(), Some("app/styles/app.css"));
        assert_eq!(normalize("../outside"), None);
    }

    #[test]
    fn relative_dir_walks_up_to_common_ancestor() {
        assert_eq!(relative_dir("app/routes/pages", "app"), "../..");
        assert_eq!(relative_dir("app", "app"), ".");
        assert_eq!(relative_dir("app/components", "app/lib"), "../lib");
    }

    #[test]
    fn language_extension_only_touches_typescript_files() {
        assert_eq!(with_language_extension("components/Form.tsx", false), "components/Form.jsx");
        assert_eq!(with_language_extension("utils/index.ts", false), "utils/index.js");
        assert_eq!(with_language_extension("styles/app.css", false), "styles/app.css");
        assert_eq!(with_language_extension("components/Form.tsx", true), "components/Form.tsx");
    }

    #[test]
    fn extension_ignores_dotfiles_and_directories() {
        assert_eq!(extension("app/routes/[robots.txt].tsx"), Some("tsx"));
        assert_eq!(extension("app/.env"), None);
        assert_eq!(extension("app/lib.d/utils"), None);
        assert!(is_script("app/root.jsx"));
        assert!(!is_script("app/styles/app.css"));
    }
}
