//! routegen: Scaffold storefront route files and the local modules they import.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;

#[cfg(test)]
pub(crate) mod testing;

pub use app::AppContext;
pub use app::api::{
    GenerateOptions, RouteSummary, Workspace, generate_project_file, generate_routes,
    generate_routes_in, list_routes, resolve_route_dependencies,
};
pub use domain::{
    AppError, ConventionFlags, EndOfLine, FormatOptions, GenerateRoutesOutcome, GenerationResult,
    Language, LocalePrefix, Operation, RouteSelector, condition_template, destination_route,
};
