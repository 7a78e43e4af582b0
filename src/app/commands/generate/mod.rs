//! Route generation: catalog selection, project discovery and materialization.

mod dependencies;
mod locale;
mod materialize;
mod rewrite;

use tracing::info;

pub use dependencies::resolve_route_dependencies;
pub use locale::{detect_locale_prefix, validate_locale_prefix};
pub use materialize::{RouteFileOptions, generate_project_file};
pub use rewrite::{DEFAULT_ADAPTER, RewriteSettings, rewrite_content};

use crate::app::AppContext;
use crate::app::config::{load_format_options, load_project_config};
use crate::domain::{
    AppError, ConventionFlags, FormatOptions, GenerateRoutesOutcome, GenerationResult, Language,
    LocalePrefix, RouteSelector, resolve_route_ids,
};
use crate::ports::{ConfirmationPrompt, ProjectStore, TemplateStore};

/// Caller overrides for a generation run; unset values are detected from the project.
#[derive(Debug, Clone, Default)]
pub struct GenerateOptions {
    /// Force TypeScript (`Some(true)`) or JavaScript output.
    pub typescript: Option<bool>,
    pub force: bool,
    /// Server adapter package replacing the default one in imports.
    pub adapter: Option<String>,
    pub locale_prefix: LocalePrefix,
    pub convention_flags: Option<ConventionFlags>,
    pub format_options: Option<FormatOptions>,
}

/// Generate every route the selector names, one after another.
///
/// Stops at the first failing route; routes finished before it stay written.
pub fn execute<P, T, C>(
    ctx: &AppContext<P, T, C>,
    selector: &RouteSelector,
    options: &GenerateOptions,
) -> Result<GenerateRoutesOutcome, AppError>
where
    P: ProjectStore,
    T: TemplateStore,
    C: ConfirmationPrompt,
{
    let route_ids = resolve_route_ids(selector)?;
    let file_options = route_file_options(ctx, options, !selector.is_all())?;

    info!(
        routes = route_ids.len(),
        language = ?file_options.language,
        convention = %file_options.convention_flags,
        locale = ?file_options.locale,
        templates = %ctx.templates().describe(),
        "generating routes"
    );

    let mut routes = Vec::with_capacity(route_ids.len());
    for route_id in &route_ids {
        routes.push(generate_project_file(ctx, route_id, &file_options)?);
    }

    Ok(GenerateRoutesOutcome {
        routes,
        is_typescript: file_options.language.is_typescript(),
        convention_flags: file_options.convention_flags,
        format_options: file_options.format_options,
    })
}

/// Generate a single route template id such as `routes/cart`.
pub fn execute_one<P, T, C>(
    ctx: &AppContext<P, T, C>,
    route_id: &str,
    options: &GenerateOptions,
) -> Result<GenerationResult, AppError>
where
    P: ProjectStore,
    T: TemplateStore,
    C: ConfirmationPrompt,
{
    let file_options = route_file_options(ctx, options, true)?;
    generate_project_file(ctx, route_id, &file_options)
}

/// Merge caller overrides with what the project itself declares.
fn route_file_options<P, T, C>(
    ctx: &AppContext<P, T, C>,
    options: &GenerateOptions,
    detect_locale: bool,
) -> Result<RouteFileOptions, AppError>
where
    P: ProjectStore,
    T: TemplateStore,
    C: ConfirmationPrompt,
{
    let config = load_project_config(ctx.project())?;

    let typescript = options.typescript.unwrap_or(config.typescript);
    let convention_flags = options.convention_flags.unwrap_or(config.convention_flags);
    let format_options = match &options.format_options {
        Some(format_options) => format_options.clone(),
        None => load_format_options(ctx.project())?,
    };

    let locale = match &options.locale_prefix {
        LocalePrefix::Disabled => None,
        LocalePrefix::Fixed(name) => {
            validate_locale_prefix(name)?;
            Some(name.clone())
        }
        LocalePrefix::Detect if !detect_locale => None,
        LocalePrefix::Detect => {
            detect_locale_prefix(ctx.project(), &config.app_directory, convention_flags)?
        }
    };

    Ok(RouteFileOptions {
        app_directory: config.app_directory,
        language: Language::from_typescript(typescript),
        convention_flags,
        locale,
        adapter: options.adapter.clone(),
        force: options.force,
        format_options,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::EmbeddedTemplateStore;
    use crate::domain::Operation;
    use crate::testing::{MemoryTemplateStore, MockProjectStore, ScriptedPrompt};

    fn v2_project() -> MockProjectStore {
        MockProjectStore::new()
            .with_file("package.json", r#"{"dependencies": {"@remix-run/react": "^2.0.0"}}"#)
            .with_file("tsconfig.json", "{}")
    }

    fn cart_templates() -> MemoryTemplateStore {
        MemoryTemplateStore::new()
            .with_file("app/routes/cart.tsx", "export default function Cart() {}\n")
            .with_file("app/routes/index.tsx", "export default function Home() {}\n")
    }

    fn names(names: &[&str]) -> RouteSelector {
        RouteSelector::from_names(names.iter().copied())
    }

    #[test]
    fn detects_project_settings() {
        let ctx = AppContext::new(v2_project(), cart_templates(), ScriptedPrompt::answering(false));
        let outcome = execute(&ctx, &names(&["cart"]), &GenerateOptions::default()).unwrap();

        assert!(outcome.is_typescript);
        assert_eq!(outcome.convention_flags, ConventionFlags::v2());
        assert_eq!(outcome.format_options, FormatOptions::storefront_defaults());
        assert_eq!(outcome.routes.len(), 1);
        assert_eq!(outcome.routes[0].source_route, "routes/cart");
        assert_eq!(outcome.routes[0].destination_route, "app/routes/cart.tsx");
        assert_eq!(outcome.routes[0].operation, Operation::Created);
    }

    #[test]
    fn detected_locale_prefixes_new_routes() {
        let project = v2_project().with_file("app/routes/($locale)._index.tsx", "");
        let ctx = AppContext::new(project, cart_templates(), ScriptedPrompt::answering(false));
        let outcome = execute(&ctx, &names(&["cart"]), &GenerateOptions::default()).unwrap();

        assert_eq!(outcome.routes[0].destination_route, "app/routes/($locale).cart.tsx");
        assert_eq!(outcome.routes[0].operation, Operation::Created);
    }

    #[test]
    fn locale_prefix_can_be_disabled_or_fixed() {
        let project = v2_project().with_file("app/routes/($locale)._index.tsx", "");
        let ctx = AppContext::new(project, cart_templates(), ScriptedPrompt::answering(false));

        let disabled =
            GenerateOptions { locale_prefix: LocalePrefix::Disabled, ..Default::default() };
        let outcome = execute(&ctx, &names(&["cart"]), &disabled).unwrap();
        assert_eq!(outcome.routes[0].destination_route, "app/routes/cart.tsx");

        let fixed = GenerateOptions {
            locale_prefix: LocalePrefix::Fixed("lang".to_string()),
            force: true,
            ..Default::default()
        };
        let outcome = execute(&ctx, &names(&["cart"]), &fixed).unwrap();
        assert_eq!(outcome.routes[0].destination_route, "app/routes/($lang).cart.tsx");
    }

    #[test]
    fn unknown_route_names_fail_before_any_write() {
        let ctx = AppContext::new(v2_project(), cart_templates(), ScriptedPrompt::answering(false));
        let err =
            execute(&ctx, &names(&["cart", "blog"]), &GenerateOptions::default()).unwrap_err();

        assert!(matches!(err, AppError::UnknownRoute { .. }));
        assert!(err.to_string().contains("all"));
        assert!(ctx.project().written().is_empty());
    }

    #[test]
    fn routes_are_processed_in_selector_order() {
        let ctx = AppContext::new(v2_project(), cart_templates(), ScriptedPrompt::answering(false));
        let selector = names(&["home", "cart"]);
        let outcome = execute(&ctx, &selector, &GenerateOptions::default()).unwrap();
        let sources: Vec<&str> = outcome.routes.iter().map(|r| r.source_route.as_str()).collect();
        assert_eq!(sources, ["routes/index", "routes/cart"]);
    }

    #[test]
    fn embedded_skeleton_generates_every_route_as_javascript() {
        let project = MockProjectStore::new()
            .with_file("package.json", r#"{"devDependencies": {"@remix-run/dev": "2.3.0"}}"#);
        let prompt = ScriptedPrompt::answering(false);
        let ctx = AppContext::new(project, EmbeddedTemplateStore::new(), prompt);
        let outcome = execute(&ctx, &RouteSelector::All, &GenerateOptions::default()).unwrap();

        assert!(!outcome.is_typescript);
        assert_eq!(outcome.count(Operation::Created), 11);
        assert_eq!(ctx.prompt().calls(), 0);

        let files = ctx.project().files.borrow();
        assert!(files.contains_key("app/routes/_index.jsx"));
        assert!(files.contains_key("app/routes/[robots.txt].jsx"));
        assert!(files.contains_key("app/styles/app.css"));
        for (path, contents) in files.iter() {
            let typescript = path.ends_with(".ts") || path.ends_with(".tsx");
            assert!(!typescript, "{path} kept a TypeScript extension");
            let text = String::from_utf8_lossy(contents);
            assert!(!text.contains("metaV1"), "{path} kept the legacy meta export");
            assert!(!text.contains("CatchBoundary"), "{path} kept the legacy boundary");
            assert!(!text.contains("V2_MetaFunction"), "{path} kept a type import");
        }
    }

    #[test]
    fn embedded_skeleton_conditions_legacy_projects() {
        let project = MockProjectStore::new().with_file("tsconfig.json", "{}");
        let prompt = ScriptedPrompt::answering(false);
        let ctx = AppContext::new(project, EmbeddedTemplateStore::new(), prompt);
        let outcome = execute(&ctx, &names(&["page"]), &GenerateOptions::default()).unwrap();

        assert_eq!(outcome.routes[0].destination_route, "app/routes/pages/$pageHandle.tsx");
        let route = ctx.project().file("app/routes/pages/$pageHandle.tsx").unwrap();
        assert!(route.contains("export const meta: MetaFunction"));
        assert!(route.contains("export function CatchBoundary()"));
        assert!(route.contains("export const ErrorBoundary: ErrorBoundaryComponent"));
        assert!(!route.contains("useRouteError"));
    }

    #[test]
    fn single_route_detects_locale_and_settings() {
        let project = v2_project().with_file("app/routes/($locale)._index.tsx", "");
        let ctx = AppContext::new(project, cart_templates(), ScriptedPrompt::answering(false));
        let options = GenerateOptions { typescript: Some(false), ..Default::default() };
        let result = execute_one(&ctx, "routes/cart", &options).unwrap();

        assert_eq!(result.destination_route, "app/routes/($locale).cart.jsx");
        assert_eq!(result.operation, Operation::Created);
    }
}
