//lexical code analysis,
//it breaks what you wrote into tokens
//that are then parsed into the AST
//the patterns live on the logos enum, the scan loop is ours so that
//a bad character only costs one character

use logos::Logos;
use std::fmt;
use std::ops::Range;
use thiserror::Error;

/// Failure raised by a logos callback while matching a single lexeme.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum LexFailure {
    #[default]
    NoMatch,
    NumberTooLarge,
}

#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(error = LexFailure)]
#[logos(skip r"[ \t\r]+")]
pub enum Token {
    // Keywords, exact tokens win over the NAME regex
    #[token("IF")]
    If,
    #[token("THEN")]
    Then,
    #[token("ELSE")]
    Else,
    #[token("FOR")]
    For,
    #[token("TO")]
    To,
    #[token("FUN")]
    Fun,

    // Two character operators
    #[token("->")]
    Arrow,
    #[token("==")]
    EqEq,

    // Comparisons
    #[token(">")]
    Greater,
    #[token("<")]
    Less,

    // Literal characters
    #[token("=")]
    Assign,
    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("*")]
    Star,
    #[token("/")]
    Slash,
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token(",")]
    Comma,
    #[token(";")]
    Semicolon,

    // Names
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*", |lex| lex.slice().to_string())]
    Name(String),

    // Integer values
    #[regex("[0-9]+", |lex| lex.slice().parse::<i64>().map_err(|_| LexFailure::NumberTooLarge))]
    Number(i64),

    // Strings, no escapes, stop at the first closing quote
    #[regex(r#""[^"\n]*""#, |lex| { let s = lex.slice(); s[1..s.len() - 1].to_string() })]
    Str(String),

    // Comments
    #[regex(r"#[^\n]*", logos::skip)]
    Comment,

    // Only advances the line counter, never handed to the parser
    #[regex(r"\n+")]
    Newline,
}

impl Token {
    /// Kind tag as printed in token listings.
    pub fn kind(&self) -> &'static str {
        match self {
            Token::If => "IF",
            Token::Then => "THEN",
            Token::Else => "ELSE",
            Token::For => "FOR",
            Token::To => "TO",
            Token::Fun => "FUN",
            Token::Arrow => "ARROW",
            Token::EqEq => "EQEQ",
            Token::Greater => "GRTH",
            Token::Less => "LSTH",
            Token::Name(_) => "NAME",
            Token::Number(_) => "NUMBER",
            Token::Str(_) => "STRING",
            // scan-only variants, Tokens::next never yields them
            Token::Comment => "COMMENT",
            Token::Newline => "NEWLINE",
            other => other.lexeme(),
        }
    }

    /// Fixed source text of the token, or its kind for valued tokens.
    pub fn lexeme(&self) -> &'static str {
        match self {
            Token::If => "IF",
            Token::Then => "THEN",
            Token::Else => "ELSE",
            Token::For => "FOR",
            Token::To => "TO",
            Token::Fun => "FUN",
            Token::Arrow => "->",
            Token::EqEq => "==",
            Token::Greater => ">",
            Token::Less => "<",
            Token::Assign => "=",
            Token::Plus => "+",
            Token::Minus => "-",
            Token::Star => "*",
            Token::Slash => "/",
            Token::LParen => "(",
            Token::RParen => ")",
            Token::Comma => ",",
            Token::Semicolon => ";",
            Token::Name(_) => "NAME",
            Token::Number(_) => "NUMBER",
            Token::Str(_) => "STRING",
            // scan-only variants, Tokens::next never yields them
            Token::Comment => "#",
            Token::Newline => "\\n",
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Name(name) => write!(f, "{}", name),
            Token::Number(n) => write!(f, "{}", n),
            Token::Str(s) => write!(f, "\"{}\"", s),
            other => write!(f, "{}", other.lexeme()),
        }
    }
}

// Token with its byte span and the line it started on
#[derive(Debug, Clone, PartialEq)]
pub struct PositionedToken {
    pub token: Token,
    pub span: Range<usize>,
    pub line: usize,
}

impl fmt::Display for PositionedToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.token.kind(), self.token, self.line)
    }
}

/// Non-fatal problems found while scanning. The scan always continues.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LexError {
    #[error("Illegal character '{ch}' at line {line}, index {index}")]
    IllegalCharacter { ch: char, index: usize, line: usize },
    #[error("Integer literal '{text}' does not fit in 64 bits (line {line})")]
    NumberTooLarge {
        text: String,
        span: Range<usize>,
        line: usize,
    },
}

impl LexError {
    pub fn code(&self) -> &'static str {
        match self {
            LexError::IllegalCharacter { .. } => "ERR-LEX-001",
            LexError::NumberTooLarge { .. } => "ERR-LEX-002",
        }
    }

    pub fn span(&self) -> Range<usize> {
        match self {
            LexError::IllegalCharacter { ch, index, .. } => *index..*index + ch.len_utf8(),
            LexError::NumberTooLarge { span, .. } => span.clone(),
        }
    }
}

/// Lazy token stream over one source text.
///
/// A fresh logos lexer is started at the current offset for every token so
/// that an unmatched character is skipped on its own, never together with a
/// partial match that follows it.
pub struct Tokens<'src, 'sink> {
    source: &'src str,
    pos: usize,
    line: usize,
    on_error: &'sink mut dyn FnMut(LexError),
}

impl Iterator for Tokens<'_, '_> {
    type Item = PositionedToken;

    fn next(&mut self) -> Option<PositionedToken> {
        while self.pos < self.source.len() {
            let mut lexer = Token::lexer(&self.source[self.pos..]);
            let result = lexer.next()?;
            let range = lexer.span();
            let start = self.pos + range.start;
            let end = self.pos + range.end;

            match result {
                Ok(Token::Newline) => {
                    self.line += end - start;
                    self.pos = end;
                }
                Ok(token) => {
                    self.pos = end;
                    return Some(PositionedToken {
                        token,
                        span: start..end,
                        line: self.line,
                    });
                }
                Err(LexFailure::NumberTooLarge) => {
                    (self.on_error)(LexError::NumberTooLarge {
                        text: self.source[start..end].to_string(),
                        span: start..end,
                        line: self.line,
                    });
                    self.pos = end;
                }
                Err(LexFailure::NoMatch) => {
                    let ch = self.source[start..].chars().next().unwrap_or('\0');
                    (self.on_error)(LexError::IllegalCharacter {
                        ch,
                        index: start,
                        line: self.line,
                    });
                    self.pos = start + ch.len_utf8().max(1);
                }
            }
        }
        None
    }
}

/// Start scanning `source`. Lexical errors go to `on_error`.
pub fn tokenize<'src, 'sink>(
    source: &'src str,
    on_error: &'sink mut dyn FnMut(LexError),
) -> Tokens<'src, 'sink> {
    Tokens {
        source,
        pos: 0,
        line: 1,
        on_error,
    }
}

// Lexing function, returns tokens with spans and every error seen on the way
pub fn lex_with_span(source: &str) -> (Vec<PositionedToken>, Vec<LexError>) {
    let mut errors = Vec::new();
    let mut sink = |err: LexError| errors.push(err);
    let tokens = tokenize(source, &mut sink).collect();
    (tokens, errors)
}
