//AST (abstract syntax tree) is what one line turns into after parsing
//every node owns its children, there is no sharing between nodes

use std::fmt::{self, Display, Formatter};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Plus,
    Minus,
    Multiply,
    Divide,
}

impl Operator {
    pub fn tag(self) -> &'static str {
        match self {
            Operator::Plus => "add",
            Operator::Minus => "sub",
            Operator::Multiply => "mul",
            Operator::Divide => "div",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Logic {
    Equal,
    Greater,
    Less,
}

impl Logic {
    pub fn tag(self) -> &'static str {
        match self {
            Logic::Equal => "condition_eqeq",
            Logic::Greater => "condition_GRTH",
            Logic::Less => "condition_LSTH",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Num(i64),
    Var(String),
    Neg(Box<Expr>),
    BinaryOp {
        left: Box<Expr>,
        op: Operator,
        right: Box<Expr>,
    },
}

impl Expr {
    pub fn binary(left: Expr, op: Operator, right: Expr) -> Self {
        Expr::BinaryOp {
            left: Box::new(left),
            op,
            right: Box::new(right),
        }
    }
}

/// Right hand side of `name = ...`.
#[derive(Debug, Clone, PartialEq)]
pub enum AssignValue {
    Expr(Expr),
    Str(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct VarAssign {
    pub name: String,
    pub value: AssignValue,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Condition {
    pub logic: Logic,
    pub left: Expr,
    pub right: Expr,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    Empty,
    Expr(Expr),
    Assignment(VarAssign),
    If {
        condition: Condition,
        then_branch: Box<Statement>,
        else_branch: Box<Statement>,
    },
    ForLoop {
        setup: VarAssign,
        bound: Expr,
        body: Box<Statement>,
    },
    FunctionDef {
        name: String,
        body: Box<Statement>,
    },
    FunctionCall {
        name: String,
    },
}

// Printing follows the nested tagged tuple layout, e.g.
// ('add', ('num', 1), ('mul', ('num', 2), ('num', 3)))

impl Display for Expr {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Num(n) => write!(f, "('num', {})", n),
            Expr::Var(name) => write!(f, "('var', '{}')", name),
            Expr::Neg(inner) => write!(f, "('neg', {})", inner),
            Expr::BinaryOp { left, op, right } => {
                write!(f, "('{}', {}, {})", op.tag(), left, right)
            }
        }
    }
}

impl Display for AssignValue {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            AssignValue::Expr(expr) => write!(f, "{}", expr),
            AssignValue::Str(s) => write!(f, "'\"{}\"'", s),
        }
    }
}

impl Display for VarAssign {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "('var_assign', '{}', {})", self.name, self.value)
    }
}

impl Display for Condition {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "('{}', {}, {})", self.logic.tag(), self.left, self.right)
    }
}

impl Display for Statement {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Statement::Empty => write!(f, "None"),
            Statement::Expr(expr) => write!(f, "{}", expr),
            Statement::Assignment(assign) => write!(f, "{}", assign),
            Statement::If {
                condition,
                then_branch,
                else_branch,
            } => write!(
                f,
                "('if_stmt', {}, ('branch', {}, {}))",
                condition, then_branch, else_branch
            ),
            Statement::ForLoop { setup, bound, body } => write!(
                f,
                "('for_loop', ('for_loop_setup', {}, {}), {})",
                setup, bound, body
            ),
            Statement::FunctionDef { name, body } => {
                write!(f, "('fun_def', '{}', {})", name, body)
            }
            Statement::FunctionCall { name } => write!(f, "('fun_call', '{}')", name),
        }
    }
}
