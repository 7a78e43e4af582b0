use std::fmt;

use crate::domain::{ConventionFlags, FormatOptions};

/// Terminal outcome of generating one route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Created,
    Replaced,
    Skipped,
}

impl Operation {
    pub fn label(self) -> &'static str {
        match self {
            Operation::Created => "created",
            Operation::Replaced => "replaced",
            Operation::Skipped => "skipped",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Record of one requested route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationResult {
    /// Template id, e.g. `routes/pages/$pageHandle`.
    pub source_route: String,
    /// Destination file relative to the project root.
    pub destination_route: String,
    pub operation: Operation,
}

/// Summary of a multi-route generation run.
#[derive(Debug, Clone)]
pub struct GenerateRoutesOutcome {
    pub routes: Vec<GenerationResult>,
    pub is_typescript: bool,
    pub convention_flags: ConventionFlags,
    pub format_options: FormatOptions,
}

impl GenerateRoutesOutcome {
    pub fn count(&self, operation: Operation) -> usize {
        self.routes.iter().filter(|route| route.operation == operation).count()
    }
}
