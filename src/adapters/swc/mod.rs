//! swc-backed source transforms.

mod formatter;
mod source;
mod type_stripper;

pub use formatter::SwcFormatter;
pub use type_stripper::SwcTypeStripper;
