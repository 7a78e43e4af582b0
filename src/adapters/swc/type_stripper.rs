//! TypeScript → JavaScript downgrade by deleting type syntax in place.
//!
//! The module is parsed with swc and walked once; every piece of type-only
//! syntax is recorded as a byte range of the original text and the ranges
//! are cut out afterwards. Nothing is re-printed, so comments, blank lines
//! and the author's layout survive unchanged.

use std::collections::HashSet;
use std::ops::Range;

use swc_common::{Span, Spanned};
use swc_ecma_ast::*;
use swc_ecma_visit::{Visit, VisitWith};
use tracing::debug;

use super::source::{Dialect, ParsedModule, line_column, parse_module};
use crate::domain::AppError;
use crate::ports::Transpiler;

/// Class member modifiers that only exist in TypeScript.
const TS_MODIFIERS: [&str; 7] =
    ["public", "private", "protected", "readonly", "abstract", "override", "declare"];

/// Modifiers that may be interleaved with TypeScript ones and must be kept.
const JS_MODIFIERS: [&str; 4] = ["static", "async", "get", "set"];

#[derive(Debug, Clone, Copy, Default)]
pub struct SwcTypeStripper;

impl Transpiler for SwcTypeStripper {
    fn strip_types(&self, source: &str, path: &str) -> Result<String, AppError> {
        let dialect = match Dialect::for_path(path) {
            Dialect::JavaScript => return Ok(source.to_string()),
            dialect => dialect,
        };
        let parsed = parse_module(source, path, dialect)
            .map_err(|details| AppError::transpile(path, details))?;

        let mut collector = TypeSyntaxCollector::new(source, &parsed);
        parsed.module.visit_with(&mut collector);
        if let Some((offset, message)) = collector.unsupported {
            let (line, column) = line_column(source, offset.min(source.len()));
            let details = format!("{message} (line {line}, column {column})");
            return Err(AppError::transpile(path, details));
        }
        collector.elide_unused_imports();

        debug!(path, removals = collector.removals.len(), "stripped type syntax");
        Ok(apply_removals(source, collector.removals))
    }
}

/// An import declaration whose bindings may be dropped when unused.
struct ImportRecord {
    statement: Range<usize>,
    /// Whole `{ … }` group, when present.
    braces: Option<Range<usize>>,
    bindings: Vec<ImportBinding>,
}

struct ImportBinding {
    local: String,
    range: Range<usize>,
    in_braces: bool,
    type_only: bool,
}

struct TypeSyntaxCollector<'a> {
    source: &'a str,
    parsed: &'a ParsedModule,
    removals: Vec<Range<usize>>,
    value_idents: HashSet<String>,
    imports: Vec<ImportRecord>,
    has_jsx: bool,
    unsupported: Option<(usize, String)>,
}

impl<'a> TypeSyntaxCollector<'a> {
    fn new(source: &'a str, parsed: &'a ParsedModule) -> Self {
        Self {
            source,
            parsed,
            removals: Vec::new(),
            value_idents: HashSet::new(),
            imports: Vec::new(),
            has_jsx: false,
            unsupported: None,
        }
    }

    fn range(&self, span: Span) -> Range<usize> {
        self.parsed.range(span)
    }

    fn bytes(&self) -> &'a [u8] {
        self.source.as_bytes()
    }

    fn unsupported(&mut self, span: Span, what: &str) {
        if self.unsupported.is_none() {
            let message = format!("{what} cannot be converted to JavaScript");
            self.unsupported = Some((self.range(span).start, message));
        }
    }

    /// Remove a whole statement, including its semicolon and, when it sits
    /// on lines of its own, the surrounding indentation and line break.
    fn remove_statement(&mut self, span: Span) {
        let range = self.range(span);
        self.remove_statement_range(range);
    }

    fn remove_statement_range(&mut self, range: Range<usize>) {
        let Range { mut start, mut end } = range;
        let bytes = self.bytes();

        let mut cursor = end;
        while cursor < bytes.len() && matches!(bytes[cursor], b' ' | b'\t') {
            cursor += 1;
        }
        if cursor < bytes.len() && bytes[cursor] == b';' {
            end = cursor + 1;
        }

        let mut line_start = start;
        while line_start > 0 && matches!(bytes[line_start - 1], b' ' | b'\t') {
            line_start -= 1;
        }
        let mut line_end = end;
        while line_end < bytes.len() && matches!(bytes[line_end], b' ' | b'\t') {
            line_end += 1;
        }
        let starts_line = line_start == 0 || bytes[line_start - 1] == b'\n';
        let ends_line = line_end == bytes.len() || matches!(bytes[line_end], b'\n' | b'\r');
        if starts_line && ends_line {
            start = line_start;
            end = line_end;
            if end < bytes.len() && bytes[end] == b'\r' {
                end += 1;
            }
            if end < bytes.len() && bytes[end] == b'\n' {
                end += 1;
            }
        }

        self.removals.push(start..end);
    }

    /// Remove one element of a comma-separated list together with its separator.
    fn remove_list_item(&mut self, item: Range<usize>) {
        let bytes = self.bytes();
        let mut end = item.end;
        while end < bytes.len() && bytes[end].is_ascii_whitespace() {
            end += 1;
        }
        if end < bytes.len() && bytes[end] == b',' {
            end += 1;
            while end < bytes.len() && bytes[end].is_ascii_whitespace() {
                end += 1;
            }
            self.removals.push(item.start..end);
            return;
        }

        let mut start = item.start;
        while start > 0 && bytes[start - 1].is_ascii_whitespace() {
            start -= 1;
        }
        if start > 0 && bytes[start - 1] == b',' {
            self.removals.push(start - 1..item.end);
        } else {
            self.removals.push(item);
        }
    }

    /// Remove `: Type`, plus an optional or definite marker right before the colon.
    fn remove_type_annotation(&mut self, span: Span) {
        let Range { mut start, end } = self.range(span);
        let bytes = self.bytes();

        if bytes.get(start) != Some(&b':') {
            let mut cursor = start;
            while cursor > 0 && bytes[cursor - 1].is_ascii_whitespace() {
                cursor -= 1;
            }
            if cursor > 0 && bytes[cursor - 1] == b':' {
                start = cursor - 1;
            }
        }

        let mut cursor = start;
        while cursor > 0 && matches!(bytes[cursor - 1], b' ' | b'\t') {
            cursor -= 1;
        }
        if cursor > 0 && matches!(bytes[cursor - 1], b'?' | b'!') {
            start = cursor - 1;
        }

        self.removals.push(start..end);
    }

    /// Remove the text between the end of an expression and the end of its wrapper
    /// (` as T`, ` satisfies T`, ` as const`).
    fn remove_suffix(&mut self, wrapper: Span, inner: Span) {
        let start = self.range(inner).end;
        let end = self.range(wrapper).end;
        if start < end {
            self.removals.push(start..end);
        }
    }

    /// Strip TypeScript-only modifier keywords at the start of a class member.
    fn remove_member_modifiers(&mut self, span: Span) {
        let bytes = self.bytes();
        let mut cursor = self.range(span).start;

        loop {
            let word_end =
                cursor + bytes[cursor..].iter().take_while(|b| b.is_ascii_alphabetic()).count();
            let word = &self.source[cursor..word_end];
            let mut next = word_end;
            while next < bytes.len() && matches!(bytes[next], b' ' | b'\t') {
                next += 1;
            }
            // A modifier is always followed by another name, `[`, `#` or `*`.
            let followed_by_name = next < bytes.len()
                && (bytes[next].is_ascii_alphabetic()
                    || matches!(bytes[next], b'_' | b'$' | b'[' | b'#' | b'*'));
            if word.is_empty() || !followed_by_name {
                break;
            }
            if TS_MODIFIERS.contains(&word) {
                self.removals.push(cursor..next);
            } else if !JS_MODIFIERS.contains(&word) {
                break;
            }
            cursor = next;
        }
    }

    fn record_import(&mut self, import: &ImportDecl) {
        if import.type_only {
            self.remove_statement(import.span);
            return;
        }
        if import.specifiers.is_empty() {
            return;
        }

        let statement = self.range(import.span);
        let text = &self.source[statement.clone()];
        let braces = match (text.find('{'), text.find('}')) {
            (Some(open), Some(close)) if open < close => {
                Some(statement.start + open..statement.start + close + 1)
            }
            _ => None,
        };

        let bindings = import
            .specifiers
            .iter()
            .map(|specifier| match specifier {
                ImportSpecifier::Named(named) => ImportBinding {
                    local: named.local.sym.to_string(),
                    range: self.range(named.span),
                    in_braces: true,
                    type_only: named.is_type_only,
                },
                ImportSpecifier::Default(default) => ImportBinding {
                    local: default.local.sym.to_string(),
                    range: self.range(default.span),
                    in_braces: false,
                    type_only: false,
                },
                ImportSpecifier::Namespace(namespace) => ImportBinding {
                    local: namespace.local.sym.to_string(),
                    range: self.range(namespace.span),
                    in_braces: false,
                    type_only: false,
                },
            })
            .collect();

        self.imports.push(ImportRecord { statement, braces, bindings });
    }

    /// Drop import bindings never referenced as values, like the TypeScript compiler does.
    fn elide_unused_imports(&mut self) {
        let mut value_idents = std::mem::take(&mut self.value_idents);
        if self.has_jsx {
            value_idents.insert("React".to_string());
        }

        for record in std::mem::take(&mut self.imports) {
            let is_kept = |binding: &ImportBinding| {
                !binding.type_only && value_idents.contains(&binding.local)
            };
            let kept: Vec<&ImportBinding> = record.bindings.iter().filter(|b| is_kept(b)).collect();

            if kept.is_empty() {
                self.remove_statement_range(record.statement.clone());
                continue;
            }

            let has_named = record.bindings.iter().any(|binding| binding.in_braces);
            let named_kept = kept.iter().any(|binding| binding.in_braces);
            if has_named
                && !named_kept
                && let Some(braces) = record.braces.clone()
            {
                self.remove_list_item(braces);
                for binding in record.bindings.iter().filter(|b| !b.in_braces && !is_kept(b)) {
                    self.remove_list_item(binding.range.clone());
                }
                continue;
            }

            for binding in record.bindings.iter().filter(|b| !is_kept(b)) {
                let range = if binding.type_only {
                    self.with_type_keyword(binding.range.clone())
                } else {
                    binding.range.clone()
                };
                self.remove_list_item(range);
            }
        }

        self.value_idents = value_idents;
    }

    /// Widen a specifier range to cover a `type` keyword written before it.
    fn with_type_keyword(&self, range: Range<usize>) -> Range<usize> {
        let bytes = self.bytes();
        let mut start = range.start;
        while start > 0 && matches!(bytes[start - 1], b' ' | b'\t') {
            start -= 1;
        }
        let is_ident = |b: u8| b.is_ascii_alphanumeric() || matches!(b, b'_' | b'$');
        let preceded_by_type = start >= 4
            && &self.source[start - 4..start] == "type"
            && (start == 4 || !is_ident(bytes[start - 5]));
        if preceded_by_type {
            (start - 4)..range.end
        } else {
            range
        }
    }

    fn is_type_only_decl(&mut self, decl: &Decl) -> bool {
        match decl {
            Decl::TsInterface(_) | Decl::TsTypeAlias(_) => true,
            Decl::Var(var) => var.declare,
            Decl::Fn(function) => function.declare || function.function.body.is_none(),
            Decl::Class(class) => class.declare,
            Decl::TsEnum(ts_enum) => {
                if !ts_enum.declare {
                    self.unsupported(ts_enum.span, "enum");
                }
                true
            }
            Decl::TsModule(module) => {
                if !module.declare && !module.global {
                    self.unsupported(module.span, "namespace");
                }
                true
            }
            _ => false,
        }
    }
}

impl Visit for TypeSyntaxCollector<'_> {
    fn visit_module_item(&mut self, item: &ModuleItem) {
        let ModuleItem::ModuleDecl(decl) = item else {
            item.visit_children_with(self);
            return;
        };

        match decl {
            ModuleDecl::Import(import) => self.record_import(import),
            ModuleDecl::ExportDecl(export) => {
                if self.is_type_only_decl(&export.decl) {
                    self.remove_statement(export.span);
                } else {
                    export.decl.visit_with(self);
                }
            }
            ModuleDecl::ExportDefaultDecl(export) => {
                if let DefaultDecl::TsInterfaceDecl(_) = export.decl {
                    self.remove_statement(export.span);
                } else {
                    export.decl.visit_with(self);
                }
            }
            ModuleDecl::ExportNamed(export) => {
                if export.type_only {
                    self.remove_statement(export.span);
                    return;
                }
                for specifier in &export.specifiers {
                    if let ExportSpecifier::Named(named) = specifier {
                        if named.is_type_only {
                            let range = self.with_type_keyword(self.range(named.span));
                            self.remove_list_item(range);
                        } else if export.src.is_none() {
                            named.orig.visit_with(self);
                        }
                    }
                }
            }
            ModuleDecl::TsNamespaceExport(export) => self.remove_statement(export.span),
            ModuleDecl::TsImportEquals(import) => self.unsupported(import.span, "import = require()"),
            ModuleDecl::TsExportAssignment(export) => self.unsupported(export.span, "export ="),
            _ => decl.visit_children_with(self),
        }
    }

    fn visit_stmt(&mut self, stmt: &Stmt) {
        if let Stmt::Decl(decl) = stmt
            && self.is_type_only_decl(decl)
        {
            self.remove_statement(decl.span());
            return;
        }
        stmt.visit_children_with(self);
    }

    fn visit_ts_type_ann(&mut self, annotation: &TsTypeAnn) {
        self.remove_type_annotation(annotation.span);
    }

    fn visit_ts_type_param_decl(&mut self, params: &TsTypeParamDecl) {
        let range = self.range(params.span);
        self.removals.push(range);
    }

    fn visit_ts_type_param_instantiation(&mut self, args: &TsTypeParamInstantiation) {
        let range = self.range(args.span);
        self.removals.push(range);
    }

    fn visit_ts_as_expr(&mut self, expr: &TsAsExpr) {
        self.remove_suffix(expr.span, expr.expr.span());
        expr.expr.visit_with(self);
    }

    fn visit_ts_satisfies_expr(&mut self, expr: &TsSatisfiesExpr) {
        self.remove_suffix(expr.span, expr.expr.span());
        expr.expr.visit_with(self);
    }

    fn visit_ts_const_assertion(&mut self, expr: &TsConstAssertion) {
        self.remove_suffix(expr.span, expr.expr.span());
        expr.expr.visit_with(self);
    }

    fn visit_ts_non_null_expr(&mut self, expr: &TsNonNullExpr) {
        let end = self.range(expr.span).end;
        if end > 0 && self.bytes()[end - 1] == b'!' {
            self.removals.push(end - 1..end);
        }
        expr.expr.visit_with(self);
    }

    fn visit_ts_type_assertion(&mut self, expr: &TsTypeAssertion) {
        let start = self.range(expr.span).start;
        let inner = self.range(expr.expr.span()).start;
        if start < inner {
            self.removals.push(start..inner);
        }
        expr.expr.visit_with(self);
    }

    fn visit_binding_ident(&mut self, binding: &BindingIdent) {
        if binding.id.optional && binding.type_ann.is_none() {
            let end = self.range(binding.id.span).end;
            let bytes = self.bytes();
            if end > 0 && bytes[end - 1] == b'?' {
                self.removals.push(end - 1..end);
            } else if bytes.get(end) == Some(&b'?') {
                self.removals.push(end..end + 1);
            }
        }
        binding.visit_children_with(self);
    }

    fn visit_class(&mut self, class: &Class) {
        if class.is_abstract {
            self.unsupported(class.span, "abstract class");
        }
        if let (Some(first), Some(last)) = (class.implements.first(), class.implements.last()) {
            let first_start = self.range(first.span).start;
            let class_start = self.range(class.span).start;
            if let Some(keyword) = self.source[class_start..first_start].rfind("implements") {
                let mut start = class_start + keyword;
                while start > 0 && self.bytes()[start - 1].is_ascii_whitespace() {
                    start -= 1;
                }
                let end = self.range(last.span).end;
                self.removals.push(start..end);
            }
        }

        for decorator in &class.decorators {
            decorator.visit_with(self);
        }
        if let Some(type_params) = &class.type_params {
            self.visit_ts_type_param_decl(type_params);
        }
        if let Some(super_class) = &class.super_class {
            super_class.visit_with(self);
        }
        if let Some(super_type_params) = &class.super_type_params {
            self.visit_ts_type_param_instantiation(super_type_params);
        }
        for member in &class.body {
            member.visit_with(self);
        }
    }

    fn visit_class_member(&mut self, member: &ClassMember) {
        match member {
            ClassMember::TsIndexSignature(signature) => {
                self.remove_statement(signature.span);
                return;
            }
            ClassMember::Method(method) if method.function.body.is_none() => {
                self.remove_statement(method.span);
                return;
            }
            ClassMember::ClassProp(prop) if prop.declare => {
                self.remove_statement(prop.span);
                return;
            }
            ClassMember::Constructor(constructor) => {
                if let Some(ParamOrTsParamProp::TsParamProp(param)) = constructor
                    .params
                    .iter()
                    .find(|param| matches!(param, ParamOrTsParamProp::TsParamProp(_)))
                {
                    self.unsupported(param.span, "constructor parameter property");
                }
                if constructor.body.is_none() {
                    self.remove_statement(constructor.span);
                    return;
                }
            }
            ClassMember::ClassProp(prop) => self.remove_member_modifiers(prop.span),
            ClassMember::PrivateProp(prop) => self.remove_member_modifiers(prop.span),
            ClassMember::Method(method) => self.remove_member_modifiers(method.span),
            ClassMember::PrivateMethod(method) => self.remove_member_modifiers(method.span),
            _ => {}
        }
        member.visit_children_with(self);
    }

    fn visit_jsx_element(&mut self, element: &JSXElement) {
        self.has_jsx = true;
        element.visit_children_with(self);
    }

    fn visit_jsx_fragment(&mut self, fragment: &JSXFragment) {
        self.has_jsx = true;
        fragment.visit_children_with(self);
    }

    fn visit_param(&mut self, param: &Param) {
        // `this` parameters only type the receiver.
        if let Pat::Ident(binding) = &param.pat
            && &*binding.id.sym == "this"
        {
            let mut range = self.range(param.span);
            if let Some(annotation) = &binding.type_ann {
                range.end = range.end.max(self.range(annotation.span).end);
            }
            self.remove_list_item(range);
            return;
        }
        param.visit_children_with(self);
    }

    fn visit_member_prop(&mut self, prop: &MemberProp) {
        if let MemberProp::Computed(computed) = prop {
            computed.visit_with(self);
        }
    }

    fn visit_super_prop(&mut self, prop: &SuperProp) {
        if let SuperProp::Computed(computed) = prop {
            computed.visit_with(self);
        }
    }

    fn visit_prop_name(&mut self, name: &PropName) {
        if let PropName::Computed(computed) = name {
            computed.visit_with(self);
        }
    }

    fn visit_ident(&mut self, ident: &Ident) {
        self.value_idents.insert(ident.sym.to_string());
    }
}

/// Cut the (possibly overlapping) ranges out of `source`.
fn apply_removals(source: &str, mut removals: Vec<Range<usize>>) -> String {
    removals.retain(|range| range.start < range.end && range.end <= source.len());
    removals.sort_by_key(|range| (range.start, range.end));

    let mut output = String::with_capacity(source.len());
    let mut cursor = 0;
    for range in removals {
        if range.start > cursor {
            output.push_str(&source[cursor..range.start]);
        }
        cursor = cursor.max(range.end);
    }
    if cursor < source.len() {
        output.push_str(&source[cursor..]);
    }
    output
}
