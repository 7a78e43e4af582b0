pub mod convention;
pub mod error;
pub mod format_options;
pub mod generation;
pub mod route_catalog;
pub mod template_path;
pub mod version_conditioning;

pub use convention::{ConventionFlags, Language, LocalePrefix, destination_route, to_flat_route};
pub use error::AppError;
pub use format_options::{EndOfLine, FormatOptions};
pub use generation::{GenerateRoutesOutcome, GenerationResult, Operation};
pub use route_catalog::{ROUTE_CATALOG, RouteCatalogEntry, RouteSelector, resolve_route_ids};
pub use version_conditioning::{ConventionAxis, condition_template};
