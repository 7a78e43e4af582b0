pub mod embedded_template_store;
pub mod filesystem_project_store;
pub mod filesystem_template_store;
pub mod regex_import_extractor;
pub mod swc;
pub mod template_source;
pub mod terminal_prompt;

pub use embedded_template_store::EmbeddedTemplateStore;
pub use filesystem_project_store::FilesystemProjectStore;
pub use filesystem_template_store::FilesystemTemplateStore;
pub use regex_import_extractor::RegexImportExtractor;
pub use swc::{SwcFormatter, SwcTypeStripper};
pub use template_source::TemplateSource;
pub use terminal_prompt::{FixedAnswerPrompt, TerminalPrompt};
