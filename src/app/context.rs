use crate::adapters::{RegexImportExtractor, SwcFormatter, SwcTypeStripper};
use crate::ports::{
    CodeFormatter, ConfirmationPrompt, ImportExtractor, ProjectStore, TemplateStore, Transpiler,
};

/// Application context holding dependencies for command execution.
pub struct AppContext<P: ProjectStore, T: TemplateStore, C: ConfirmationPrompt> {
    project: P,
    templates: T,
    prompt: C,
    imports: Box<dyn ImportExtractor>,
    transpiler: Box<dyn Transpiler>,
    formatter: Box<dyn CodeFormatter>,
}

impl<P: ProjectStore, T: TemplateStore, C: ConfirmationPrompt> AppContext<P, T, C> {
    /// Create a new application context with the default source transforms.
    pub fn new(project: P, templates: T, prompt: C) -> Self {
        Self {
            project,
            templates,
            prompt,
            imports: Box::new(RegexImportExtractor),
            transpiler: Box::new(SwcTypeStripper),
            formatter: Box::new(SwcFormatter),
        }
    }

    /// Replace the import extractor used by the dependency resolver.
    pub fn with_import_extractor(mut self, imports: impl ImportExtractor + 'static) -> Self {
        self.imports = Box::new(imports);
        self
    }

    pub fn with_transpiler(mut self, transpiler: impl Transpiler + 'static) -> Self {
        self.transpiler = Box::new(transpiler);
        self
    }

    pub fn with_formatter(mut self, formatter: impl CodeFormatter + 'static) -> Self {
        self.formatter = Box::new(formatter);
        self
    }

    /// Get a reference to the destination project store.
    pub fn project(&self) -> &P {
        &self.project
    }

    /// Get a reference to the template store.
    pub fn templates(&self) -> &T {
        &self.templates
    }

    pub fn prompt(&self) -> &C {
        &self.prompt
    }

    pub fn imports(&self) -> &dyn ImportExtractor {
        self.imports.as_ref()
    }

    pub fn transpiler(&self) -> &dyn Transpiler {
        self.transpiler.as_ref()
    }

    pub fn formatter(&self) -> &dyn CodeFormatter {
        self.formatter.as_ref()
    }
}
