//parser state and token cursor helpers
//one parse call turns the whole token slice into exactly one statement

use crate::ast::Statement;
use crate::lexer_tokenizer::{PositionedToken, Token};
use crate::parser::parser_error::{ParseError, ParseErrorKind};
use crate::parser::precedence::{PRECEDENCE, PrecedenceTable};

/// Deepest tree a single parse call may build. Keeps parsing, printing and
/// dropping the tree within the thread's stack.
pub const MAX_NESTING: usize = 256;

pub struct Parser<'a> {
    pub tokens: &'a [PositionedToken],
    pub pos: usize,
    pub precedence: &'static PrecedenceTable,
    pub depth: usize,
}

impl<'a> Parser<'a> {
    pub fn new(tokens: &'a [PositionedToken]) -> Self {
        Self {
            tokens,
            pos: 0,
            precedence: &PRECEDENCE,
            depth: 0,
        }
    }

    /// Runs one grammar rule one level deeper, failing past `MAX_NESTING`.
    pub fn nested<T>(
        &mut self,
        rule: impl FnOnce(&mut Self) -> Result<T, ParseError>,
    ) -> Result<T, ParseError> {
        if self.depth >= MAX_NESTING {
            return Err(self.too_deep());
        }
        self.depth += 1;
        let result = rule(self);
        self.depth -= 1;
        result
    }

    pub fn too_deep(&self) -> ParseError {
        let kind = ParseErrorKind::NestingTooDeep { limit: MAX_NESTING };
        let (span, line) = match self.tokens.get(self.pos).or(self.tokens.last()) {
            Some(token) => (token.span.clone(), token.line),
            None => (0..0, 1),
        };
        ParseError::new(kind, span, line).with_suggestion("Split the statement into smaller ones")
    }

    pub fn current(&self) -> Option<&Token> {
        self.tokens.get(self.pos).map(|t| &t.token)
    }

    pub fn peek(&self, offset: usize) -> Option<&Token> {
        self.tokens.get(self.pos + offset).map(|t| &t.token)
    }

    pub fn advance(&mut self) {
        self.pos += 1;
    }

    pub fn match_token(&mut self, expected: &Token) -> bool {
        if self.current() == Some(expected) {
            self.advance();
            return true;
        }
        false
    }

    pub fn expect(&mut self, expected: &Token) -> Result<(), ParseError> {
        if self.match_token(expected) {
            Ok(())
        } else {
            Err(self.unexpected(expected.lexeme()))
        }
    }

    pub fn expect_name(&mut self) -> Result<String, ParseError> {
        match self.current() {
            Some(Token::Name(name)) => {
                let name = name.clone();
                self.advance();
                Ok(name)
            }
            _ => Err(self.unexpected("a name")),
        }
    }

    /// Error for whatever sits at the cursor, end of input included.
    pub fn unexpected(&self, expected: &'static str) -> ParseError {
        match self.tokens.get(self.pos) {
            Some(token) => ParseError::new(
                ParseErrorKind::UnexpectedToken {
                    found: token.token.to_string(),
                    expected,
                },
                token.span.clone(),
                token.line,
            ),
            None => {
                let (at, line) = self
                    .tokens
                    .last()
                    .map_or((0, 1), |t| (t.span.end, t.line));
                ParseError::eof(expected, at, line)
            }
        }
    }

    pub fn parse(&mut self) -> Result<Statement, ParseError> {
        let statement = self.parse_statement()?;
        if self.current().is_some() {
            let err = self.unexpected("end of input");
            return Err(if self.current() == Some(&Token::Else) {
                err.with_suggestion("ELSE only follows the THEN branch of an IF")
            } else {
                err.with_suggestion("Only one statement is parsed per line")
            });
        }
        Ok(statement)
    }
}
