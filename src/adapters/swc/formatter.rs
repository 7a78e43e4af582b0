//! Prettier-compatible formatting of generated files.
//!
//! Formatting runs in two passes. The first parses the module and rewrites
//! the tokens whose style a project can configure: string quotes, spacing
//! inside object braces, and the layout of import and export lists. The
//! second re-parses the result to locate template literals, then normalizes
//! whitespace line by line without touching template literal contents.

use std::ops::Range;

use swc_common::Span;
use swc_ecma_ast::*;
use swc_ecma_visit::{Visit, VisitWith};
use tracing::debug;

use super::source::{Dialect, ParsedModule, parse_module};
use crate::domain::{AppError, EndOfLine, FormatOptions};
use crate::ports::CodeFormatter;

#[derive(Debug, Clone, Copy, Default)]
pub struct SwcFormatter;

impl CodeFormatter for SwcFormatter {
    fn format(
        &self,
        source: &str,
        destination: &str,
        options: &FormatOptions,
    ) -> Result<String, AppError> {
        let dialect = Dialect::for_path(destination);

        let parsed = parse_module(source, destination, dialect)
            .map_err(|details| AppError::format(destination, details))?;
        let mut rewriter = TokenRewriter { source, parsed: &parsed, options, edits: Vec::new() };
        parsed.module.visit_with(&mut rewriter);
        let edit_count = rewriter.edits.len();
        let rewritten = apply_edits(source, rewriter.edits);

        let reparsed = parse_module(&rewritten, destination, dialect)
            .map_err(|details| AppError::format(destination, details))?;
        let mut templates = TemplateCollector { parsed: &reparsed, ranges: Vec::new() };
        reparsed.module.visit_with(&mut templates);

        let eol = match options.end_of_line {
            EndOfLine::Lf => "\n",
            EndOfLine::Crlf => "\r\n",
            EndOfLine::Auto if source.contains("\r\n") => "\r\n",
            EndOfLine::Auto => "\n",
        };

        debug!(destination, edits = edit_count, templates = templates.ranges.len(), "formatting");
        let protected =
            Protected { templates: &templates.ranges, comments: &reparsed.block_comments };
        Ok(normalize_lines(&rewritten, &protected, options, eol))
    }
}

struct Edit {
    range: Range<usize>,
    text: String,
}

struct TokenRewriter<'a> {
    source: &'a str,
    parsed: &'a ParsedModule,
    options: &'a FormatOptions,
    edits: Vec<Edit>,
}

impl TokenRewriter<'_> {
    fn range(&self, span: Span) -> Range<usize> {
        self.parsed.range(span)
    }

    fn push(&mut self, range: Range<usize>, text: String) {
        if self.source[range.clone()] != text {
            self.edits.push(Edit { range, text });
        }
    }

    /// Statement range, extended over a trailing semicolon the span may leave out.
    fn statement_range(&self, span: Span) -> Range<usize> {
        let range = self.range(span);
        let rest = &self.source[range.end..];
        let spaces = rest.len() - rest.trim_start_matches([' ', '\t']).len();
        if rest[spaces..].starts_with(';') { range.start..range.end + spaces + 1 } else { range }
    }

    fn quoted(&self, string: &Str) -> String {
        requote(&self.source[self.range(string.span)], self.options.single_quote)
    }

    fn export_name(&self, name: &ModuleExportName) -> String {
        match name {
            ModuleExportName::Ident(ident) => ident.sym.to_string(),
            ModuleExportName::Str(string) => self.quoted(string),
        }
    }

    /// Set the spacing just inside a single-line `{ … }`.
    fn space_braces(&mut self, range: Range<usize>) {
        let text = &self.source[range.clone()];
        if text.len() < 2 || !text.starts_with('{') || !text.ends_with('}') || text.contains('\n') {
            return;
        }
        let inner = &text[1..text.len() - 1];
        if inner.trim().is_empty() {
            return;
        }
        let pad = if self.options.bracket_spacing { " " } else { "" };
        let leading = inner.len() - inner.trim_start().len();
        let trailing = inner.len() - inner.trim_end().len();
        let open = range.start + 1;
        let close = range.end - 1;
        self.push(open..open + leading, pad.to_string());
        self.push(close - trailing..close, pad.to_string());
    }

    /// Print an import or export list the way Prettier lays it out: on one
    /// line when it fits, otherwise one specifier per line.
    fn print_list(
        &self,
        keyword: &str,
        prefix: &[String],
        named: &[String],
        from: Option<String>,
    ) -> String {
        let semi = if self.options.semi { ";" } else { "" };
        let from = from.map(|src| format!(" from {src}")).unwrap_or_default();
        let pad = if self.options.bracket_spacing { " " } else { "" };

        let mut clauses = prefix.to_vec();
        if !named.is_empty() {
            clauses.push(format!("{{{pad}{}{pad}}}", named.join(", ")));
        }
        let single = format!("{keyword} {}{from}{semi}", clauses.join(", "));
        if named.len() <= 1 || single.len() <= self.options.print_width {
            return single;
        }

        let indent = self.options.indent_unit();
        let lead = if prefix.is_empty() { String::new() } else { format!("{}, ", prefix.join(", ")) };
        let body: String = named.iter().map(|name| format!("{indent}{name},\n")).collect();
        format!("{keyword} {lead}{{\n{body}}}{from}{semi}")
    }

    fn reprint_import(&mut self, import: &ImportDecl) -> bool {
        let range = self.statement_range(import.span);
        if import.with.is_some() || has_comment(&self.source[range.clone()]) {
            return false;
        }

        let mut prefix = Vec::new();
        let mut named = Vec::new();
        for specifier in &import.specifiers {
            match specifier {
                ImportSpecifier::Default(default) => prefix.push(default.local.sym.to_string()),
                ImportSpecifier::Namespace(namespace) => {
                    prefix.push(format!("* as {}", namespace.local.sym))
                }
                ImportSpecifier::Named(specifier) => {
                    let local = specifier.local.sym.to_string();
                    let name = match &specifier.imported {
                        Some(imported) => format!("{} as {local}", self.export_name(imported)),
                        None => local,
                    };
                    named.push(if specifier.is_type_only { format!("type {name}") } else { name });
                }
            }
        }

        let keyword = if import.type_only { "import type" } else { "import" };
        let printed = self.print_list(keyword, &prefix, &named, Some(self.quoted(&import.src)));
        self.push(range, printed);
        true
    }

    fn reprint_export(&mut self, export: &NamedExport) -> bool {
        let range = self.statement_range(export.span);
        if export.with.is_some() || has_comment(&self.source[range.clone()]) {
            return false;
        }

        let mut prefix = Vec::new();
        let mut named = Vec::new();
        for specifier in &export.specifiers {
            match specifier {
                ExportSpecifier::Namespace(namespace) => {
                    prefix.push(format!("* as {}", self.export_name(&namespace.name)))
                }
                ExportSpecifier::Default(default) => prefix.push(default.exported.sym.to_string()),
                ExportSpecifier::Named(specifier) => {
                    let orig = self.export_name(&specifier.orig);
                    let name = match &specifier.exported {
                        Some(exported) => format!("{orig} as {}", self.export_name(exported)),
                        None => orig,
                    };
                    named.push(if specifier.is_type_only { format!("type {name}") } else { name });
                }
            }
        }

        let keyword = if export.type_only { "export type" } else { "export" };
        let from = export.src.as_deref().map(|src| self.quoted(src));
        let printed = self.print_list(keyword, &prefix, &named, from);
        self.push(range, printed);
        true
    }
}

impl Visit for TokenRewriter<'_> {
    fn visit_import_decl(&mut self, import: &ImportDecl) {
        if import.specifiers.is_empty() || !self.reprint_import(import) {
            import.visit_children_with(self);
        }
    }

    fn visit_named_export(&mut self, export: &NamedExport) {
        if export.specifiers.is_empty() || !self.reprint_export(export) {
            export.visit_children_with(self);
        }
    }

    fn visit_str(&mut self, string: &Str) {
        let range = self.range(string.span);
        let raw = &self.source[range.clone()];
        if raw.starts_with(['\'', '"']) {
            let text = requote(raw, self.options.single_quote);
            self.push(range, text);
        }
    }

    /// JSX attribute strings follow their own quote setting and are left alone.
    fn visit_jsx_attr_value(&mut self, value: &JSXAttrValue) {
        if !matches!(value, JSXAttrValue::Lit(_)) {
            value.visit_children_with(self);
        }
    }

    fn visit_object_lit(&mut self, object: &ObjectLit) {
        let range = self.range(object.span);
        self.space_braces(range);
        object.visit_children_with(self);
    }

    fn visit_object_pat(&mut self, pattern: &ObjectPat) {
        let mut range = self.range(pattern.span);
        if let Some(annotation) = &pattern.type_ann {
            range.end = range.end.min(self.range(annotation.span).start);
        }
        if let Some(close) = self.source[range.clone()].rfind('}') {
            range.end = range.start + close + 1;
            self.space_braces(range);
        }
        pattern.visit_children_with(self);
    }
}

struct TemplateCollector<'a> {
    parsed: &'a ParsedModule,
    ranges: Vec<Range<usize>>,
}

impl Visit for TemplateCollector<'_> {
    fn visit_tpl(&mut self, template: &Tpl) {
        self.ranges.push(self.parsed.range(template.span));
        template.visit_children_with(self);
    }
}

fn has_comment(text: &str) -> bool {
    text.contains("//") || text.contains("/*")
}

/// Re-quote a string literal with the quote Prettier would pick: the
/// preferred one, unless the content holds more of it than of the other.
fn requote(raw: &str, single_quote: bool) -> String {
    let content = &raw[1..raw.len().saturating_sub(1).max(1)];
    let (preferred, alternate) = if single_quote { ('\'', '"') } else { ('"', '\'') };
    let quote = if content.matches(preferred).count() > content.matches(alternate).count() {
        alternate
    } else {
        preferred
    };

    let mut output = String::with_capacity(raw.len());
    output.push(quote);
    let mut chars = content.chars();
    while let Some(c) = chars.next() {
        match c {
            '\\' => match chars.next() {
                Some(escaped @ ('\'' | '"')) if escaped != quote => output.push(escaped),
                Some(escaped) => {
                    output.push('\\');
                    output.push(escaped);
                }
                None => output.push('\\'),
            },
            '\'' | '"' if c == quote => {
                output.push('\\');
                output.push(c);
            }
            _ => output.push(c),
        }
    }
    output.push(quote);
    output
}

fn apply_edits(source: &str, mut edits: Vec<Edit>) -> String {
    edits.sort_by_key(|edit| (edit.range.start, edit.range.end));
    let mut output = String::with_capacity(source.len());
    let mut cursor = 0;
    for edit in edits {
        if edit.range.start < cursor {
            continue;
        }
        output.push_str(&source[cursor..edit.range.start]);
        output.push_str(&edit.text);
        cursor = edit.range.end;
    }
    output.push_str(&source[cursor..]);
    output
}

/// Source ranges whose text formatting must not reinterpret.
struct Protected<'a> {
    templates: &'a [Range<usize>],
    comments: &'a [Range<usize>],
}

impl Protected<'_> {
    fn in_template(&self, offset: usize) -> bool {
        self.templates.iter().any(|t| t.start < offset && offset < t.end)
    }

    fn in_comment(&self, offset: usize) -> bool {
        self.comments.iter().any(|c| c.start < offset && offset < c.end)
    }
}

/// Smallest space indentation used outside templates and comment bodies.
fn detect_indent_width(lines: &[(&str, bool)]) -> usize {
    lines
        .iter()
        .filter(|(_, protected)| !protected)
        .filter_map(|(line, _)| {
            let content = line.trim_start_matches(' ');
            let width = line.len() - content.len();
            let is_code = !content.is_empty() && !content.starts_with(['*', '\t']);
            (width > 0 && is_code).then_some(width)
        })
        .min()
        .unwrap_or(2)
}

fn reindent(line: &str, width: usize, unit: &str) -> String {
    let content = line.trim_start_matches([' ', '\t']);
    let leading = &line[..line.len() - content.len()];
    let tabs = leading.matches('\t').count();
    let spaces = leading.len() - tabs;
    let levels = tabs + spaces / width;
    format!("{}{}{content}", unit.repeat(levels), " ".repeat(spaces % width))
}

fn normalize_lines(
    text: &str,
    protected: &Protected<'_>,
    options: &FormatOptions,
    eol: &str,
) -> String {
    let mut raw_lines = Vec::new();
    let mut offset = 0;
    for raw in text.split('\n') {
        let start = offset;
        let end = start + raw.len();
        offset = end + 1;
        let in_comment = protected.in_comment(start);
        raw_lines.push((raw, protected.in_template(start), protected.in_template(end), in_comment));
    }

    let width = detect_indent_width(
        &raw_lines
            .iter()
            .map(|(raw, starts, _, in_comment)| (*raw, *starts || *in_comment))
            .collect::<Vec<_>>(),
    );
    let unit = options.indent_unit();

    let mut lines: Vec<String> = Vec::new();
    let mut previous_blank = true;
    for (raw, starts_inside, ends_inside, _) in raw_lines {
        let raw = raw.strip_suffix('\r').unwrap_or(raw);
        if starts_inside || ends_inside {
            let line = if ends_inside { raw } else { raw.trim_end() };
            lines.push(if starts_inside { line.to_string() } else { reindent(line, width, &unit) });
            previous_blank = false;
            continue;
        }

        let line = raw.trim_end();
        if line.is_empty() {
            if !previous_blank {
                lines.push(String::new());
            }
            previous_blank = true;
            continue;
        }
        lines.push(reindent(line, width, &unit));
        previous_blank = false;
    }

    while lines.last().is_some_and(|line| line.is_empty()) {
        lines.pop();
    }
    if lines.is_empty() {
        return String::new();
    }
    let mut output = lines.join(eol);
    output.push_str(eol);
    output
}
