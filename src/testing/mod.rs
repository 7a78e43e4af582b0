//! In-memory test doubles for the ports.

mod memory_template_store;
mod mock_project_store;
mod scripted_prompt;

pub use memory_template_store::MemoryTemplateStore;
pub use mock_project_store::MockProjectStore;
pub use scripted_prompt::ScriptedPrompt;
