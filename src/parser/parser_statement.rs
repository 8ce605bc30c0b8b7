//parsing statements, one method per production
//the head tokens pick the production, NAME needs one extra token of lookahead

use crate::ast::*;
use crate::lexer_tokenizer::Token;
use crate::parser::{parser_error::ParseError, parser_kernel::Parser};

impl<'a> Parser<'a> {
    pub fn parse_statement(&mut self) -> Result<Statement, ParseError> {
        self.nested(Self::parse_statement_body)
    }

    fn parse_statement_body(&mut self) -> Result<Statement, ParseError> {
        match self.current() {
            // a statement may only be empty where one is allowed to end
            None | Some(Token::Else) => Ok(Statement::Empty),
            Some(Token::For) => self.parse_for(),
            Some(Token::If) => self.parse_if(),
            Some(Token::Fun) => self.parse_function_def(),
            Some(Token::Name(_)) => match self.peek(1) {
                Some(Token::LParen) => self.parse_function_call(),
                Some(Token::Assign) => Ok(Statement::Assignment(self.parse_var_assign()?)),
                _ => Ok(Statement::Expr(self.parse_expr()?)),
            },
            _ => Ok(Statement::Expr(self.parse_expr()?)),
        }
    }

    // FOR i = 0 TO 10 THEN i
    fn parse_for(&mut self) -> Result<Statement, ParseError> {
        self.expect(&Token::For)?;
        let setup = self.parse_var_assign()?;
        self.expect(&Token::To)?;
        let bound = self.parse_expr()?;
        self.expect(&Token::Then)?;
        let body = self.parse_statement()?;
        Ok(Statement::ForLoop {
            setup,
            bound,
            body: Box::new(body),
        })
    }

    // IF a == 10 THEN a = 1 ELSE a = 2
    fn parse_if(&mut self) -> Result<Statement, ParseError> {
        self.expect(&Token::If)?;
        let condition = self.parse_condition()?;
        self.expect(&Token::Then)?;
        let then_branch = self.parse_statement()?;
        if self.current().is_none() {
            return Err(self
                .unexpected("ELSE")
                .with_suggestion("Every IF needs an ELSE branch"));
        }
        self.expect(&Token::Else)?;
        let else_branch = self.parse_statement()?;
        Ok(Statement::If {
            condition,
            then_branch: Box::new(then_branch),
            else_branch: Box::new(else_branch),
        })
    }

    // FUN hello() -> statement
    fn parse_function_def(&mut self) -> Result<Statement, ParseError> {
        self.expect(&Token::Fun)?;
        let name = self.expect_name()?;
        self.expect(&Token::LParen)?;
        if self.current().is_some() && self.current() != Some(&Token::RParen) {
            return Err(self
                .unexpected(")")
                .with_suggestion("Functions take no parameters"));
        }
        self.expect(&Token::RParen)?;
        self.expect(&Token::Arrow)?;
        let body = self.parse_statement()?;
        Ok(Statement::FunctionDef {
            name,
            body: Box::new(body),
        })
    }

    // hello()
    fn parse_function_call(&mut self) -> Result<Statement, ParseError> {
        let name = self.expect_name()?;
        self.expect(&Token::LParen)?;
        self.expect(&Token::RParen)?;
        Ok(Statement::FunctionCall { name })
    }

    // x = expr | x = "text"
    pub fn parse_var_assign(&mut self) -> Result<VarAssign, ParseError> {
        let name = self.expect_name()?;
        self.expect(&Token::Assign)?;
        let value = match self.current() {
            Some(Token::Str(s)) => {
                let s = s.clone();
                self.advance();
                AssignValue::Str(s)
            }
            _ => AssignValue::Expr(self.parse_expr()?),
        };
        Ok(VarAssign { name, value })
    }
}
