//syntax errors, a parse call stops at the first one
//rendering with the source excerpt happens in diagnostics.rs

use std::ops::Range;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseErrorKind {
    #[error("Unexpected token '{found}', expected {expected}")]
    UnexpectedToken {
        found: String,
        expected: &'static str,
    },
    #[error("Unexpected end of input, expected {expected}")]
    UnexpectedEof { expected: &'static str },
    #[error("Statement nests deeper than {limit} levels")]
    NestingTooDeep { limit: usize },
}

#[derive(Debug, Clone, PartialEq, Error)]
#[error("{kind} (line {line})")]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub span: Range<usize>,
    pub line: usize,
    pub suggestion: Option<String>,
}

impl ParseError {
    pub fn new(kind: ParseErrorKind, span: Range<usize>, line: usize) -> Self {
        ParseError {
            kind,
            span,
            line,
            suggestion: None,
        }
    }

    pub fn eof(expected: &'static str, at: usize, line: usize) -> Self {
        ParseError::new(ParseErrorKind::UnexpectedEof { expected }, at..at, line)
    }

    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    pub fn code(&self) -> &'static str {
        match self.kind {
            ParseErrorKind::UnexpectedToken { .. } => "ERR-SYN-001",
            ParseErrorKind::UnexpectedEof { .. } => "ERR-SYN-002",
            ParseErrorKind::NestingTooDeep { .. } => "ERR-SYN-003",
        }
    }
}
