//! Tokenizer and parser for a small BASIC-flavoured statement language.
//!
//! One call takes one line of source and produces either a token listing or
//! a single [`ast::Statement`]. Nothing is evaluated here.
//!
//! ```text
//! IF a == 10 THEN a = 1 ELSE a = 2
//! ('if_stmt', ('condition_eqeq', ('var', 'a'), ('num', 10)),
//!     ('branch', ('var_assign', 'a', ('num', 1)), ('var_assign', 'a', ('num', 2))))
//! ```

pub mod ast;
pub mod diagnostics;
pub mod lexer_tokenizer;
pub mod parser;

use crate::ast::Statement;
use crate::lexer_tokenizer::{LexError, PositionedToken, tokenize};
use crate::parser::{ParseError, Parser};

/// Lexes and parses one statement. Lexical errors do not stop the parse, they
/// are handed to `on_lex_error` and the offending characters are dropped.
pub fn parse_source(
    source: &str,
    on_lex_error: &mut dyn FnMut(LexError),
) -> Result<Statement, ParseError> {
    let tokens: Vec<PositionedToken> = tokenize(source, on_lex_error).collect();
    Parser::new(&tokens).parse()
}
