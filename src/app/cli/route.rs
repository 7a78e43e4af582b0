//! Route command implementation.

use std::path::PathBuf;

use clap::Args;

use crate::adapters::TerminalPrompt;
use crate::app::api::{self, GenerateOptions, Workspace};
use crate::domain::{AppError, LocalePrefix, Operation, ROUTE_CATALOG, RouteSelector};
use crate::ports::ConfirmationPrompt;

#[derive(Args)]
pub struct RouteArgs {
    /// Routes to generate (see `routegen list`), or `all`
    names: Vec<String>,
    /// Project directory (defaults to current directory)
    #[arg(long)]
    path: Option<PathBuf>,
    /// Templates directory (defaults to the built-in skeleton)
    #[arg(long)]
    templates: Option<PathBuf>,
    /// Replace existing route files without asking
    #[arg(short, long)]
    force: bool,
    /// Server adapter package to import from instead of @shopify/remix-oxygen
    #[arg(long)]
    adapter: Option<String>,
    /// Generate TypeScript files
    #[arg(long, conflicts_with = "javascript")]
    typescript: bool,
    /// Generate JavaScript files
    #[arg(long)]
    javascript: bool,
    /// Locale segment name, e.g. `locale` for `($locale)`
    #[arg(long, value_name = "NAME", conflicts_with = "no_locale_prefix")]
    locale_prefix: Option<String>,
    /// Never prefix routes with a locale segment
    #[arg(long)]
    no_locale_prefix: bool,
}

impl RouteArgs {
    fn options(&self) -> GenerateOptions {
        let typescript = match (self.typescript, self.javascript) {
            (true, _) => Some(true),
            (_, true) => Some(false),
            _ => None,
        };
        let locale_prefix = match &self.locale_prefix {
            Some(name) => LocalePrefix::Fixed(name.clone()),
            None if self.no_locale_prefix => LocalePrefix::Disabled,
            None => LocalePrefix::Detect,
        };
        GenerateOptions {
            typescript,
            force: self.force,
            adapter: self.adapter.clone(),
            locale_prefix,
            ..Default::default()
        }
    }
}

pub fn run_route(args: RouteArgs) -> Result<(), AppError> {
    let selector = if args.names.is_empty() {
        if !confirm_all(&TerminalPrompt)? {
            println!("No routes generated.");
            return Ok(());
        }
        RouteSelector::All
    } else {
        RouteSelector::from_names(args.names.iter().cloned())
    };

    let options = args.options();
    let workspace = Workspace { project: args.path, templates: args.templates };
    let outcome = api::generate_routes_in(&workspace, &selector, &options, TerminalPrompt)?;

    for route in &outcome.routes {
        println!("{} {}", heading(route.operation), route.destination_route);
    }
    Ok(())
}

fn confirm_all<C: ConfirmationPrompt>(prompt: &C) -> Result<bool, AppError> {
    let names: Vec<&str> = ROUTE_CATALOG.iter().map(|entry| entry.name).collect();
    prompt.confirm(&format!("Scaffold all standard route files? {}", names.join(", ")))
}

fn heading(operation: Operation) -> &'static str {
    match operation {
        Operation::Created => "Created",
        Operation::Replaced => "Replaced",
        Operation::Skipped => "Skipped",
    }
}
