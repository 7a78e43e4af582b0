use serde::Deserialize;

/// Line ending written by the formatter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EndOfLine {
    #[default]
    Lf,
    Crlf,
    /// Keep whatever line endings the content already has.
    Auto,
}

/// Code style of the destination project, read from its Prettier config.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FormatOptions {
    pub single_quote: bool,
    pub bracket_spacing: bool,
    pub use_tabs: bool,
    pub tab_width: usize,
    pub print_width: usize,
    pub semi: bool,
    pub end_of_line: EndOfLine,
}

impl Default for FormatOptions {
    /// Prettier's own defaults, used for keys a project config leaves out.
    fn default() -> Self {
        Self {
            single_quote: false,
            bracket_spacing: true,
            use_tabs: false,
            tab_width: 2,
            print_width: 80,
            semi: true,
            end_of_line: EndOfLine::Lf,
        }
    }
}

impl FormatOptions {
    /// Style applied when the project has no formatter config at all.
    pub fn storefront_defaults() -> Self {
        Self { single_quote: true, bracket_spacing: false, ..Self::default() }
    }

    pub fn indent_unit(&self) -> String {
        if self.use_tabs { "\t".to_string() } else { " ".repeat(self.tab_width) }
    }
}
