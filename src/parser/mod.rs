pub mod parser_error;
pub mod parser_expression;
pub mod parser_kernel;
pub mod parser_statement;
pub mod precedence;

pub use parser_error::{ParseError, ParseErrorKind};
pub use parser_kernel::{MAX_NESTING, Parser};
