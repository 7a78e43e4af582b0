//! API Facade for the application.
//!
//! This module exposes high-level functions that glue together context creation
//! and command execution.

use std::collections::BTreeSet;
use std::path::PathBuf;

use crate::adapters::{FilesystemProjectStore, RegexImportExtractor, TemplateSource, TerminalPrompt};
use crate::app::{
    AppContext,
    commands::{generate, list},
};
use crate::ports::ConfirmationPrompt;

pub use crate::app::commands::generate::GenerateOptions;
pub use crate::app::commands::list::RouteSummary;
pub use crate::domain::{
    AppError, GenerateRoutesOutcome, GenerationResult, LocalePrefix, Operation, RouteSelector,
};

/// Where a generation run reads templates from and writes to.
#[derive(Debug, Clone, Default)]
pub struct Workspace {
    /// Destination project root; the current directory when unset.
    pub project: Option<PathBuf>,
    /// Templates root; the embedded skeleton when unset.
    pub templates: Option<PathBuf>,
}

/// Create an `AppContext` for a workspace.
fn create_context<C: ConfirmationPrompt>(
    workspace: &Workspace,
    prompt: C,
) -> Result<AppContext<FilesystemProjectStore, TemplateSource, C>, AppError> {
    let project = match &workspace.project {
        Some(path) => FilesystemProjectStore::new(path.clone()),
        None => FilesystemProjectStore::current()?,
    };
    let templates = TemplateSource::from_root(workspace.templates.clone());
    Ok(AppContext::new(project, templates, prompt))
}

/// Generate the selected routes in the current directory, asking before replacing files.
pub fn generate_routes(
    selector: &RouteSelector,
    options: &GenerateOptions,
) -> Result<GenerateRoutesOutcome, AppError> {
    generate_routes_in(&Workspace::default(), selector, options, TerminalPrompt)
}

/// Generate the selected routes in `workspace`, answering overwrite questions with `prompt`.
pub fn generate_routes_in<C: ConfirmationPrompt>(
    workspace: &Workspace,
    selector: &RouteSelector,
    options: &GenerateOptions,
    prompt: C,
) -> Result<GenerateRoutesOutcome, AppError> {
    let ctx = create_context(workspace, prompt)?;
    generate::execute(&ctx, selector, options)
}

/// Generate one route template id (e.g. `routes/cart`) and its local dependencies.
pub fn generate_project_file<C: ConfirmationPrompt>(
    workspace: &Workspace,
    route_id: &str,
    options: &GenerateOptions,
    prompt: C,
) -> Result<GenerationResult, AppError> {
    let ctx = create_context(workspace, prompt)?;
    generate::execute_one(&ctx, route_id, options)
}

/// The route file plus every template file it transitively imports.
///
/// `route_file` is relative to the templates root, e.g. `app/routes/cart.tsx`.
pub fn resolve_route_dependencies(
    templates: Option<PathBuf>,
    route_file: &str,
) -> Result<BTreeSet<String>, AppError> {
    let templates = TemplateSource::from_root(templates);
    generate::resolve_route_dependencies(&templates, &RegexImportExtractor, route_file)
}

/// List the route catalog.
pub fn list_routes() -> Vec<RouteSummary> {
    list::execute()
}
