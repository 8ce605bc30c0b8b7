//parsing expressions and conditions
//binding strength comes from the precedence table, not from the grammar shape

use crate::ast::{Condition, Expr, Logic, Operator};
use crate::lexer_tokenizer::Token;
use crate::parser::{
    parser_error::ParseError,
    parser_kernel::{MAX_NESTING, Parser},
    precedence::{Assoc, OperatorKey},
};

impl<'a> Parser<'a> {
    pub fn parse_expr(&mut self) -> Result<Expr, ParseError> {
        self.parse_binary_op(1)
    }

    fn parse_binary_op(&mut self, min_precedence: u8) -> Result<Expr, ParseError> {
        self.nested(|p| p.parse_binary_chain(min_precedence))
    }

    // every loop turn puts the previous result one level further down
    fn parse_binary_chain(&mut self, min_precedence: u8) -> Result<Expr, ParseError> {
        let mut result = self.parse_unary()?;
        let mut links = 0usize;

        while let Some(op) = self.current().and_then(token_to_operator) {
            let Some((prec, assoc)) = self.precedence.binding(OperatorKey::Binary(op)) else {
                break;
            };
            if prec < min_precedence {
                break;
            }
            if self.depth + links >= MAX_NESTING {
                return Err(self.too_deep());
            }
            links += 1;
            self.advance();
            let next_min_prec = if assoc == Assoc::Left { prec + 1 } else { prec };
            let right = self.parse_binary_op(next_min_prec)?;
            result = Expr::binary(result, op, right);
        }
        Ok(result)
    }

    // a run of leading '-' is counted, not recursed into
    fn parse_unary(&mut self) -> Result<Expr, ParseError> {
        let mut negations = 0usize;
        while self.current() == Some(&Token::Minus) {
            if self.depth + negations >= MAX_NESTING {
                return Err(self.too_deep());
            }
            negations += 1;
            self.advance();
        }
        if negations == 0 {
            return self.parse_term();
        }
        let prec = self
            .precedence
            .binding(OperatorKey::UnaryMinus)
            .map_or(u8::MAX, |(prec, _)| prec);
        let mut operand = self.parse_binary_op(prec)?;
        for _ in 0..negations {
            operand = Expr::Neg(Box::new(operand));
        }
        Ok(operand)
    }

    pub fn parse_term(&mut self) -> Result<Expr, ParseError> {
        match self.current() {
            Some(Token::Number(n)) => {
                let n = *n;
                self.advance();
                Ok(Expr::Num(n))
            }
            Some(Token::Name(id)) => {
                let id = id.clone();
                self.advance();
                Ok(Expr::Var(id))
            }
            Some(Token::Str(_)) => Err(self
                .unexpected("an expression")
                .with_suggestion("Strings can only be assigned, as in x = \"text\"")),
            _ => Err(self.unexpected("an expression")),
        }
    }

    pub fn parse_condition(&mut self) -> Result<Condition, ParseError> {
        let left = self.parse_expr()?;
        let logic = match self.current() {
            Some(Token::EqEq) => Logic::Equal,
            Some(Token::Greater) => Logic::Greater,
            Some(Token::Less) => Logic::Less,
            Some(Token::Assign) => {
                return Err(self
                    .unexpected("'==', '>' or '<'")
                    .with_suggestion("Use '==' to compare"));
            }
            _ => return Err(self.unexpected("'==', '>' or '<'")),
        };
        self.advance();
        let right = self.parse_expr()?;
        Ok(Condition { logic, left, right })
    }
}

fn token_to_operator(token: &Token) -> Option<Operator> {
    match token {
        Token::Plus => Some(Operator::Plus),
        Token::Minus => Some(Operator::Minus),
        Token::Star => Some(Operator::Multiply),
        Token::Slash => Some(Operator::Divide),
        _ => None,
    }
}
