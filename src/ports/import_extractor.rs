/// Port for discovering the module specifiers a source file imports.
///
/// The resolver only walks the graph; how specifiers are found (a textual
/// scan or a real parse) is up to the implementation.
pub trait ImportExtractor {
    /// Module specifiers of `import … from` / `export … from` statements, in source order.
    fn module_specifiers(&self, source: &str) -> Vec<String>;
}
