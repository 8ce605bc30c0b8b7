//diagnostic stream, lexical and syntax errors are printed here
//nothing in this module stops the caller, it only writes to stderr

use crate::lexer_tokenizer::LexError;
use crate::parser::ParseError;
use console::style;
use std::ops::Range;

/// Anything that can be shown with a source excerpt.
pub trait Diagnostic {
    fn code(&self) -> &'static str;
    fn message(&self) -> String;
    fn span(&self) -> Range<usize>;
    fn suggestion(&self) -> Option<&str> {
        None
    }
}

impl Diagnostic for LexError {
    fn code(&self) -> &'static str {
        LexError::code(self)
    }

    fn message(&self) -> String {
        self.to_string()
    }

    fn span(&self) -> Range<usize> {
        LexError::span(self)
    }
}

impl Diagnostic for ParseError {
    fn code(&self) -> &'static str {
        ParseError::code(self)
    }

    fn message(&self) -> String {
        self.to_string()
    }

    fn span(&self) -> Range<usize> {
        self.span.clone()
    }

    fn suggestion(&self) -> Option<&str> {
        self.suggestion.as_deref()
    }
}

/// Renders one diagnostic: message line, offending source line, caret row
/// and an optional hint. Spans outside `src` only print the message.
pub fn render(diagnostic: &dyn Diagnostic, src: &str) -> String {
    let mut out = format!(
        "{} {}",
        style(format!("[{}]", diagnostic.code())).red().bold(),
        diagnostic.message()
    );

    let span = diagnostic.span();
    if span.start <= src.len() && span.end <= src.len() && src.is_char_boundary(span.start) {
        let line_start = src[..span.start].rfind('\n').map(|i| i + 1).unwrap_or(0);
        let line_end = src[span.start..]
            .find('\n')
            .map(|i| span.start + i)
            .unwrap_or(src.len());
        let line_num = src[..span.start].matches('\n').count() + 1;
        let column = src[line_start..span.start].chars().count();
        let width = src
            .get(span.start..span.end.max(span.start))
            .map_or(1, |s| s.chars().count().max(1));
        out.push_str(&format!(
            "\n{:>4} | {}\n     | {}{}",
            line_num,
            style(&src[line_start..line_end]).dim(),
            " ".repeat(column),
            style("^".repeat(width)).red().bold()
        ));
    }

    if let Some(suggestion) = diagnostic.suggestion() {
        out.push_str(&format!(
            "\n{} {}",
            style("Hint:").cyan().bold(),
            style(suggestion).cyan()
        ));
    }
    out
}

/// Writes a stage header followed by every diagnostic to stderr.
pub fn print_error(phase: &str, diagnostics: &[&dyn Diagnostic], src: &str) {
    if diagnostics.is_empty() {
        return;
    }
    eprintln!(
        "{} Stage: {}",
        style("✘").red().bold(),
        style(phase).red().bold()
    );
    for diagnostic in diagnostics {
        eprintln!("{}", render(*diagnostic, src));
    }
}

pub fn print_lex_errors(errors: &[LexError], src: &str) {
    let diagnostics: Vec<&dyn Diagnostic> = errors.iter().map(|e| e as &dyn Diagnostic).collect();
    print_error("Lexer", &diagnostics, src);
}

pub fn print_parse_error(error: &ParseError, src: &str) {
    print_error("Parser", &[error as &dyn Diagnostic], src);
}
