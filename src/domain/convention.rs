//! Routing conventions and destination path mapping.

use std::fmt;

use crate::domain::template_path::GENERATOR_ROUTE_DIR;

/// Framework-version switches selecting which code variant and file layout to emit.
///
/// Resolved once per run and shared by every generated file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConventionFlags {
    /// Flat, dot-delimited route file names (`pages.$handle._index`).
    pub flat_routes: bool,
    /// `meta` export returns a descriptor array instead of an object.
    pub v2_meta: bool,
    /// `ErrorBoundary` handles both thrown responses and errors.
    pub v2_error_boundary: bool,
}

impl ConventionFlags {
    /// Every axis on the current convention.
    pub const fn v2() -> Self {
        Self { flat_routes: true, v2_meta: true, v2_error_boundary: true }
    }
}

impl fmt::Display for ConventionFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = |on: bool| if on { "v2" } else { "v1" };
        write!(
            f,
            "routes={} meta={} error-boundary={}",
            label(self.flat_routes),
            label(self.v2_meta),
            label(self.v2_error_boundary)
        )
    }
}

/// Source dialect of the destination project.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    TypeScript,
    JavaScript,
}

impl Language {
    pub fn from_typescript(typescript: bool) -> Self {
        if typescript { Language::TypeScript } else { Language::JavaScript }
    }

    pub fn is_typescript(self) -> bool {
        matches!(self, Language::TypeScript)
    }

    /// Extension given to generated route modules.
    pub fn route_extension(self) -> &'static str {
        match self {
            Language::TypeScript => "tsx",
            Language::JavaScript => "jsx",
        }
    }
}

/// How the locale path segment is chosen for generated routes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum LocalePrefix {
    /// Reuse the prefix of an existing localized home route, if any.
    #[default]
    Detect,
    /// Never add a locale segment.
    Disabled,
    /// Always use the given prefix name.
    Fixed(String),
}

/// Convert a slash-delimited route path to the flat, dot-delimited convention.
///
/// A trailing `index` segment becomes `_index`.
pub fn to_flat_route(route: &str) -> String {
    let route = if route == "index" {
        "_index".to_string()
    } else if let Some(parent) = route.strip_suffix("/index") {
        format!("{}/_index", parent)
    } else {
        route.to_string()
    };

    match route.strip_prefix('/') {
        Some(rest) => format!("/{}", rest.replace('/', ".")),
        None => route.replace('/', "."),
    }
}

/// Whether a route serves a static asset (`[robots.txt]`, `[sitemap.xml]`).
pub fn is_asset_route(route: &str) -> bool {
    route.contains(".txt") || route.contains(".xml")
}

/// Destination of a route module relative to the app directory, without extension.
///
/// `route_id` is a template id such as `routes/pages/$pageHandle`.
pub fn destination_route(route_id: &str, locale: Option<&str>, flags: ConventionFlags) -> String {
    let prefix = format!("{}/", GENERATOR_ROUTE_DIR);
    let route_path = route_id.strip_prefix(&prefix).unwrap_or(route_id);
    let separator = if flags.flat_routes { "." } else { "/" };

    let locale_segment = match locale {
        Some(locale) if !locale.is_empty() && !is_asset_route(route_path) => {
            format!("(${}){}", locale, separator)
        }
        _ => String::new(),
    };

    let route_path =
        if flags.flat_routes { to_flat_route(route_path) } else { route_path.to_string() };

    format!("{}/{}{}", GENERATOR_ROUTE_DIR, locale_segment, route_path)
}
