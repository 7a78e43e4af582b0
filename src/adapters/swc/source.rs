//! Shared swc parsing for the transpiler and formatter adapters.

use std::ops::Range;

use swc_common::comments::{CommentKind, SingleThreadedComments};
use swc_common::{FileName, SourceMap, Span, Spanned, sync::Lrc};
use swc_ecma_ast::Module;
use swc_ecma_parser::{EsConfig, Parser, StringInput, Syntax, TsConfig, lexer::Lexer};

use crate::domain::template_path::extension;

/// Grammar a source file is parsed with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Dialect {
    TypeScript { tsx: bool },
    JavaScript,
}

impl Dialect {
    /// Pick the grammar from a file name; unknown extensions parse as TSX.
    pub(crate) fn for_path(path: &str) -> Self {
        match extension(path) {
            Some("ts" | "mts" | "cts") => Dialect::TypeScript { tsx: false },
            Some("js" | "jsx" | "mjs" | "cjs") => Dialect::JavaScript,
            _ => Dialect::TypeScript { tsx: true },
        }
    }

    fn syntax(self) -> Syntax {
        match self {
            Dialect::TypeScript { tsx } => {
                Syntax::Typescript(TsConfig { tsx, decorators: true, ..Default::default() })
            }
            Dialect::JavaScript => Syntax::Es(EsConfig { jsx: true, ..Default::default() }),
        }
    }
}

/// A parsed module plus the offset mapping back into the source text.
pub(crate) struct ParsedModule {
    pub(crate) module: Module,
    /// Byte ranges of `/* … */` comments, in source order.
    pub(crate) block_comments: Vec<Range<usize>>,
    start: u32,
}

impl ParsedModule {
    /// Byte range of `span` within the parsed source.
    pub(crate) fn range(&self, span: Span) -> Range<usize> {
        let start = span.lo.0.saturating_sub(self.start) as usize;
        let end = span.hi.0.saturating_sub(self.start) as usize;
        start..end
    }
}

/// Parse `source` as a module. Any syntax error, recoverable or not, is reported.
pub(crate) fn parse_module(
    source: &str,
    path: &str,
    dialect: Dialect,
) -> Result<ParsedModule, String> {
    let cm: Lrc<SourceMap> = Default::default();
    let fm = cm.new_source_file(FileName::Custom(path.to_string()), source.to_string());
    let start = fm.start_pos.0;

    let comments = SingleThreadedComments::default();
    let lexer =
        Lexer::new(dialect.syntax(), Default::default(), StringInput::from(&*fm), Some(&comments));
    let mut parser = Parser::new_from(lexer);

    let module = parser.parse_module().map_err(|err| describe_error(source, start, &err))?;
    if let Some(err) = parser.take_errors().into_iter().next() {
        return Err(describe_error(source, start, &err));
    }

    let mut parsed = ParsedModule { module, block_comments: Vec::new(), start };
    let (leading, trailing) = comments.take_all();
    for map in [leading, trailing] {
        for comment in map.borrow().values().flatten() {
            if comment.kind == CommentKind::Block {
                let range = parsed.range(comment.span);
                parsed.block_comments.push(range);
            }
        }
    }
    parsed.block_comments.sort_by_key(|range| range.start);
    parsed.block_comments.dedup();
    Ok(parsed)
}

fn describe_error(source: &str, start: u32, err: &swc_ecma_parser::error::Error) -> String {
    let offset = (err.span().lo.0.saturating_sub(start) as usize).min(source.len());
    let (line, column) = line_column(source, offset);
    format!("{} (line {}, column {})", err.kind().msg(), line, column)
}

/// One-based line and column of a byte offset.
pub(crate) fn line_column(source: &str, offset: usize) -> (usize, usize) {
    let before = &source[..offset];
    let line = before.matches('\n').count() + 1;
    let column = before.rfind('\n').map_or(offset, |idx| offset - idx - 1) + 1;
    (line, column)
}
