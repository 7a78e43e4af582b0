//! Transitive template-dependency discovery for one route.

use std::collections::{BTreeSet, VecDeque};

use tracing::debug;

use crate::domain::AppError;
use crate::domain::template_path::{
    GENERATOR_APP_DIR, GENERATOR_ROUTE_DIR, RESOLVE_EXTENSIONS, dirname, is_script, join,
    relative_dir,
};
use crate::ports::{ImportExtractor, TemplateStore};

/// Collect every template file `route_file` needs, the route file included.
///
/// Only local specifiers (`./`, `../` or the `~/` app alias) are followed.
/// Unresolvable specifiers are skipped, files under the routes directory are
/// never pulled in, and non-script assets are collected without being scanned.
/// A file that exists but cannot be read fails the whole resolution.
pub fn resolve_route_dependencies<T, I>(
    templates: &T,
    imports: &I,
    route_file: &str,
) -> Result<BTreeSet<String>, AppError>
where
    T: TemplateStore + ?Sized,
    I: ImportExtractor + ?Sized,
{
    if !templates.is_file(route_file) {
        return Err(AppError::TemplateNotFound(route_file.to_string()));
    }

    let routes_dir = format!("{}/{}/", GENERATOR_APP_DIR, GENERATOR_ROUTE_DIR);
    let mut files = BTreeSet::from([route_file.to_string()]);
    let mut worklist = VecDeque::from([route_file.to_string()]);

    while let Some(file) = worklist.pop_front() {
        let source = templates.read_to_string(&file)?;
        let dir = dirname(&file);

        for specifier in imports.module_specifiers(&source) {
            let Some(relative) = local_specifier(&specifier, dir) else {
                continue;
            };
            let resolved = join(dir, &relative).and_then(|path| find_module_file(templates, &path));
            let Some(resolved) = resolved else {
                debug!(file = %file, specifier = %specifier, "skipping unresolved import");
                continue;
            };
            if resolved.starts_with(&routes_dir) || !files.insert(resolved.clone()) {
                continue;
            }
            if is_script(&resolved) {
                worklist.push_back(resolved);
            }
        }
    }

    debug!(route = route_file, files = files.len(), "resolved route dependencies");
    Ok(files)
}

/// Rewrite a local specifier relative to `dir`; external packages yield `None`.
fn local_specifier(specifier: &str, dir: &str) -> Option<String> {
    if let Some(rest) = specifier.strip_prefix('~') {
        Some(format!("{}{}", relative_dir(dir, GENERATOR_APP_DIR), rest))
    } else if specifier.starts_with('.') {
        Some(specifier.to_string())
    } else {
        None
    }
}

/// The file a specifier path names: itself, with an extension, or an `index` module.
fn find_module_file<T: TemplateStore + ?Sized>(templates: &T, path: &str) -> Option<String> {
    std::iter::once(path.to_string())
        .chain(RESOLVE_EXTENSIONS.iter().map(|ext| format!("{}.{}", path, ext)))
        .chain(RESOLVE_EXTENSIONS.iter().map(|ext| format!("{}/index.{}", path, ext)))
        .find(|candidate| templates.is_file(candidate))
}
