//! Destination-project configuration discovery.
//!
//! Everything here reads files through a `ProjectStore`, relative to the
//! project root, and turns them into domain values.

mod format_config;
mod project_config;

pub use format_config::load_format_options;
pub use project_config::{ProjectConfig, load_project_config};
