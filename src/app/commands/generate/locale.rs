//! Locale prefix discovery from the project's existing routes.

use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use crate::domain::template_path::GENERATOR_ROUTE_DIR;
use crate::domain::{AppError, ConventionFlags};
use crate::ports::ProjectStore;

/// Localized home route under the flat convention, e.g. `($locale)._index.tsx`.
static FLAT_LOCALE_ROUTE: LazyLock<Regex> =
    LazyLock::new(|| pattern(r"^\(\$(\w+)\)\._index\.[jt]sx?$"));

/// Localized route directory under the nested convention, e.g. `($locale)`.
static NESTED_LOCALE_DIR: LazyLock<Regex> = LazyLock::new(|| pattern(r"^\(\$(\w+)\)$"));

static PREFIX_NAME: LazyLock<Regex> = LazyLock::new(|| pattern(r"^\w+$"));

fn pattern(source: &str) -> Regex {
    Regex::new(source).unwrap_or_else(|err| panic!("invalid locale pattern {source:?}: {err}"))
}

/// Find the locale prefix an existing project already uses, if any.
pub fn detect_locale_prefix<P: ProjectStore + ?Sized>(
    project: &P,
    app_directory: &str,
    flags: ConventionFlags,
) -> Result<Option<String>, AppError> {
    let routes_dir = format!("{}/{}", app_directory, GENERATOR_ROUTE_DIR);
    let matcher = if flags.flat_routes { &FLAT_LOCALE_ROUTE } else { &NESTED_LOCALE_DIR };

    let prefix = project
        .list_dir(&routes_dir)?
        .iter()
        .find_map(|entry| matcher.captures(entry).map(|captures| captures[1].to_string()));

    debug!(routes_dir = %routes_dir, prefix = ?prefix, "detected locale prefix");
    Ok(prefix)
}

/// Check a caller-supplied prefix name (`locale` in `($locale)`).
pub fn validate_locale_prefix(name: &str) -> Result<(), AppError> {
    if PREFIX_NAME.is_match(name) {
        Ok(())
    } else {
        Err(AppError::config_error(format!(
            "Invalid locale prefix '{}': use letters, digits and underscores only",
            name
        )))
    }
}
