//! Writing one route and its dependencies into the destination project.

use tracing::{debug, info};

use super::dependencies::resolve_route_dependencies;
use super::rewrite::{RewriteSettings, rewrite_content};
use crate::app::AppContext;
use crate::domain::template_path::{
    GENERATOR_APP_DIR, dirname, is_script, template_app_file, with_language_extension,
};
use crate::domain::{
    AppError, ConventionFlags, FormatOptions, GenerationResult, Language, Operation,
    destination_route,
};
use crate::ports::{ConfirmationPrompt, ProjectStore, TemplateStore};

/// Resolved settings for generating a single route.
#[derive(Debug, Clone)]
pub struct RouteFileOptions {
    /// App directory relative to the project root.
    pub app_directory: String,
    pub language: Language,
    pub convention_flags: ConventionFlags,
    /// Locale prefix name, without the `($…)` decoration.
    pub locale: Option<String>,
    pub adapter: Option<String>,
    /// Replace an existing route file without asking.
    pub force: bool,
    pub format_options: FormatOptions,
}

impl RouteFileOptions {
    /// Destination of the route module, relative to the project root.
    pub fn route_destination(&self, route_id: &str) -> String {
        format!(
            "{}/{}.{}",
            self.app_directory,
            destination_route(route_id, self.locale.as_deref(), self.convention_flags),
            self.language.route_extension()
        )
    }

    /// Destination of a supporting template file, relative to the project root.
    fn supporting_destination(&self, template: &str) -> String {
        let relative = template
            .strip_prefix(GENERATOR_APP_DIR)
            .and_then(|rest| rest.strip_prefix('/'))
            .unwrap_or(template);
        with_language_extension(
            &format!("{}/{}", self.app_directory, relative),
            self.language.is_typescript(),
        )
    }
}

/// Generate the route `route_id` (e.g. `routes/cart`) and everything it imports.
///
/// An existing route file is only replaced when forced or confirmed; supporting
/// files are always overwritten. Every file is transformed before the first
/// write, so a transform failure leaves the project untouched.
pub fn generate_project_file<P, T, C>(
    ctx: &AppContext<P, T, C>,
    route_id: &str,
    options: &RouteFileOptions,
) -> Result<GenerationResult, AppError>
where
    P: ProjectStore,
    T: TemplateStore,
    C: ConfirmationPrompt,
{
    let route_file = template_app_file(&format!("{}.tsx", route_id));
    let route_destination = options.route_destination(route_id);
    let result = |operation| GenerationResult {
        source_route: route_id.to_string(),
        destination_route: route_destination.clone(),
        operation,
    };

    let operation = if ctx.project().exists(&route_destination) {
        let replace = options.force
            || ctx.prompt().confirm(&format!(
                "The file {} already exists. Do you want to replace it?",
                route_destination
            ))?;
        if !replace {
            info!(route = route_id, destination = %route_destination, "kept existing route file");
            return Ok(result(Operation::Skipped));
        }
        Operation::Replaced
    } else {
        Operation::Created
    };

    let files = resolve_route_dependencies(ctx.templates(), ctx.imports(), &route_file)?;
    let settings = RewriteSettings {
        convention_flags: options.convention_flags,
        language: options.language,
        adapter: options.adapter.as_deref(),
        format_options: &options.format_options,
    };

    let mut outputs = Vec::with_capacity(files.len());
    for file in &files {
        let destination = if *file == route_file {
            route_destination.clone()
        } else {
            options.supporting_destination(file)
        };
        let contents = if is_script(file) {
            let source = ctx.templates().read_to_string(file)?;
            rewrite_content(
                &source,
                file,
                &destination,
                &settings,
                ctx.transpiler(),
                ctx.formatter(),
            )?
            .into_bytes()
        } else {
            ctx.templates().read_bytes(file)?
        };
        outputs.push((destination, contents));
    }

    for (destination, contents) in &outputs {
        let parent = dirname(destination);
        if !parent.is_empty() {
            ctx.project().create_dir_all(parent)?;
        }
        ctx.project().write(destination, contents)?;
        debug!(destination = %destination, bytes = contents.len(), "wrote file");
    }

    info!(route = route_id, destination = %route_destination, %operation, "generated route");
    Ok(result(operation))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::{CodeFormatter, ImportExtractor, Transpiler};
    use crate::testing::{MemoryTemplateStore, MockProjectStore, ScriptedPrompt};

    /// Extractor that sees no imports, so only the route file is copied.
    struct NoImports;

    impl ImportExtractor for NoImports {
        fn module_specifiers(&self, _source: &str) -> Vec<String> {
            Vec::new()
        }
    }

    struct KeepTypes;

    impl Transpiler for KeepTypes {
        fn strip_types(&self, source: &str, _path: &str) -> Result<String, AppError> {
            Ok(source.to_string())
        }
    }

    struct Banner;

    impl CodeFormatter for Banner {
        fn format(
            &self,
            source: &str,
            destination: &str,
            _options: &FormatOptions,
        ) -> Result<String, AppError> {
            Ok(format!("// {destination}\n{source}"))
        }
    }

    const ROUTE_ID: &str = "routes/pages/$pageHandle";
    const STYLESHEET: &str = "body {\n  margin: 0;   \n}\n";

    fn templates() -> MemoryTemplateStore {
        MemoryTemplateStore::new()
            .with_file(
                "app/routes/pages/$pageHandle.tsx",
                "import {Button} from '~/components/Button';\nimport styles from '../../styles/app.css';\n\nexport const links = () => [{rel: 'stylesheet', href: styles}];\n\nexport default function Page() {\n  return <Button label=\"Home\" />;\n}\n",
            )
            .with_file(
                "app/components/Button.tsx",
                "export function Button({label}: {label: string}) {\n  return <button>{label}</button>;\n}\n",
            )
            .with_file("app/styles/app.css", STYLESHEET)
    }

    fn options(language: Language, force: bool) -> RouteFileOptions {
        RouteFileOptions {
            app_directory: "app".to_string(),
            language,
            convention_flags: ConventionFlags::v2(),
            locale: None,
            adapter: None,
            force,
            format_options: FormatOptions::storefront_defaults(),
        }
    }

    fn context(
        project: MockProjectStore,
        prompt: ScriptedPrompt,
    ) -> AppContext<MockProjectStore, MemoryTemplateStore, ScriptedPrompt> {
        AppContext::new(project, templates(), prompt)
    }

    #[test]
    fn empty_project_gets_route_component_and_stylesheet() {
        let ctx = context(MockProjectStore::new(), ScriptedPrompt::answering(false));
        let result =
            generate_project_file(&ctx, ROUTE_ID, &options(Language::JavaScript, false)).unwrap();

        assert_eq!(result.operation, Operation::Created);
        assert_eq!(result.destination_route, "app/routes/pages.$pageHandle.jsx");
        let mut written = ctx.project().written();
        written.sort();
        assert_eq!(
            written,
            vec![
                "app/components/Button.jsx".to_string(),
                "app/routes/pages.$pageHandle.jsx".to_string(),
                "app/styles/app.css".to_string(),
            ]
        );
        assert_eq!(ctx.project().file("app/styles/app.css").as_deref(), Some(STYLESHEET));
        assert_eq!(
            ctx.project().file("app/components/Button.jsx").as_deref(),
            Some("export function Button({label}) {\n  return <button>{label}</button>;\n}\n")
        );
        assert_eq!(ctx.prompt().calls(), 0);
        assert!(ctx.project().dirs.borrow().contains("app/components"));
    }

    #[test]
    fn existing_route_declined_is_skipped_untouched() {
        let project =
            MockProjectStore::new().with_file("app/routes/pages.$pageHandle.tsx", "// mine\n");
        let ctx = context(project, ScriptedPrompt::answering(false));
        let result =
            generate_project_file(&ctx, ROUTE_ID, &options(Language::TypeScript, false)).unwrap();

        assert_eq!(result.operation, Operation::Skipped);
        assert_eq!(ctx.prompt().calls(), 1);
        assert!(ctx.prompt().messages.borrow()[0].contains("app/routes/pages.$pageHandle.tsx"));
        assert_eq!(ctx.project().file("app/routes/pages.$pageHandle.tsx").as_deref(), Some("// mine\n"));
        assert!(ctx.project().written().is_empty());
    }

    #[test]
    fn existing_route_confirmed_is_replaced() {
        let project =
            MockProjectStore::new().with_file("app/routes/pages.$pageHandle.tsx", "// mine\n");
        let ctx = context(project, ScriptedPrompt::answering(true));
        let result =
            generate_project_file(&ctx, ROUTE_ID, &options(Language::TypeScript, false)).unwrap();

        assert_eq!(result.operation, Operation::Replaced);
        assert_eq!(ctx.prompt().calls(), 1);
        assert_ne!(ctx.project().file("app/routes/pages.$pageHandle.tsx").as_deref(), Some("// mine\n"));
    }

    #[test]
    fn force_replaces_without_prompting() {
        let project = MockProjectStore::new()
            .with_file("app/routes/pages.$pageHandle.tsx", "// mine\n")
            .with_file("app/components/Button.tsx", "// old button\n");
        let ctx = context(project, ScriptedPrompt::answering(false));
        let result =
            generate_project_file(&ctx, ROUTE_ID, &options(Language::TypeScript, true)).unwrap();

        assert_eq!(result.operation, Operation::Replaced);
        assert_eq!(ctx.prompt().calls(), 0);
        let button = ctx.project().file("app/components/Button.tsx").unwrap();
        assert!(button.contains("{label}: {label: string}"));
    }

    #[test]
    fn supporting_files_are_overwritten_without_prompting() {
        let project = MockProjectStore::new().with_file("app/components/Button.tsx", "// old\n");
        let ctx = context(project, ScriptedPrompt::answering(false));
        let result =
            generate_project_file(&ctx, ROUTE_ID, &options(Language::TypeScript, false)).unwrap();

        assert_eq!(result.operation, Operation::Created);
        assert_eq!(ctx.prompt().calls(), 0);
        assert_ne!(ctx.project().file("app/components/Button.tsx").as_deref(), Some("// old\n"));
    }

    #[test]
    fn cancelled_prompt_writes_nothing() {
        let project =
            MockProjectStore::new().with_file("app/routes/pages.$pageHandle.tsx", "// mine\n");
        let ctx = context(project, ScriptedPrompt::cancelling());
        let err = generate_project_file(&ctx, ROUTE_ID, &options(Language::TypeScript, false))
            .unwrap_err();

        assert!(matches!(err, AppError::Cancelled));
        assert!(ctx.project().written().is_empty());
    }

    #[test]
    fn transform_failure_leaves_project_untouched() {
        let templates = MemoryTemplateStore::new()
            .with_file("app/routes/cart.tsx", "import {Size} from '~/lib/size';\nexport default Size;\n")
            .with_file("app/lib/size.ts", "export enum Size {Small}\n");
        let ctx =
            AppContext::new(MockProjectStore::new(), templates, ScriptedPrompt::answering(true));
        let err = generate_project_file(&ctx, "routes/cart", &options(Language::JavaScript, false))
            .unwrap_err();

        assert!(matches!(err, AppError::Transpile { .. }));
        assert!(ctx.project().written().is_empty());
    }

    #[test]
    fn locale_and_custom_app_directory_shape_destinations() {
        let ctx = context(MockProjectStore::new(), ScriptedPrompt::answering(false));
        let options = RouteFileOptions {
            app_directory: "src/app".to_string(),
            locale: Some("locale".to_string()),
            ..options(Language::TypeScript, false)
        };
        let result = generate_project_file(&ctx, ROUTE_ID, &options).unwrap();

        assert_eq!(result.destination_route, "src/app/routes/($locale).pages.$pageHandle.tsx");
        assert!(ctx.project().file("src/app/components/Button.tsx").is_some());
    }

    #[test]
    fn injected_import_extractor_limits_copied_files() {
        let ctx = context(MockProjectStore::new(), ScriptedPrompt::answering(false))
            .with_import_extractor(NoImports);
        generate_project_file(&ctx, ROUTE_ID, &options(Language::TypeScript, false)).unwrap();

        assert_eq!(ctx.project().written(), vec!["app/routes/pages.$pageHandle.tsx".to_string()]);
    }

    #[test]
    fn injected_transpiler_and_formatter_produce_written_content() {
        let ctx = context(MockProjectStore::new(), ScriptedPrompt::answering(false))
            .with_transpiler(KeepTypes)
            .with_formatter(Banner);
        generate_project_file(&ctx, ROUTE_ID, &options(Language::JavaScript, false)).unwrap();

        let button = ctx.project().file("app/components/Button.jsx").unwrap();
        assert!(button.starts_with("// app/components/Button.jsx\n"), "{button}");
        assert!(button.contains("{label}: {label: string}"));
        assert_eq!(ctx.project().file("app/styles/app.css").as_deref(), Some(STYLESHEET));
    }
}
