mod code_formatter;
mod confirmation_prompt;
mod import_extractor;
mod project_store;
mod template_store;
mod transpiler;

pub use code_formatter::CodeFormatter;
pub use confirmation_prompt::ConfirmationPrompt;
pub use import_extractor::ImportExtractor;
pub use project_store::ProjectStore;
pub use template_store::TemplateStore;
pub use transpiler::Transpiler;
