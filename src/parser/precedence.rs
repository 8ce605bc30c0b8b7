//operator binding table, read by precedence climbing in parser_expression.rs
//levels are listed lowest first

use crate::ast::Operator;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Assoc {
    Left,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperatorKey {
    Binary(Operator),
    UnaryMinus,
}

#[derive(Debug)]
pub struct PrecedenceLevel {
    pub assoc: Assoc,
    pub operators: &'static [OperatorKey],
}

#[derive(Debug)]
pub struct PrecedenceTable {
    levels: &'static [PrecedenceLevel],
}

pub static PRECEDENCE: PrecedenceTable = PrecedenceTable {
    levels: &[
        PrecedenceLevel {
            assoc: Assoc::Left,
            operators: &[
                OperatorKey::Binary(Operator::Plus),
                OperatorKey::Binary(Operator::Minus),
            ],
        },
        PrecedenceLevel {
            assoc: Assoc::Left,
            operators: &[
                OperatorKey::Binary(Operator::Multiply),
                OperatorKey::Binary(Operator::Divide),
            ],
        },
        PrecedenceLevel {
            assoc: Assoc::Right,
            operators: &[OperatorKey::UnaryMinus],
        },
    ],
};

impl PrecedenceTable {
    /// Level (1 = weakest) and associativity, `None` for unknown keys.
    pub fn binding(&self, key: OperatorKey) -> Option<(u8, Assoc)> {
        self.levels.iter().enumerate().find_map(|(i, level)| {
            level
                .operators
                .contains(&key)
                .then(|| (i as u8 + 1, level.assoc))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unary_minus_binds_tightest() {
        let (neg, assoc) = PRECEDENCE.binding(OperatorKey::UnaryMinus).unwrap();
        let (mul, _) = PRECEDENCE
            .binding(OperatorKey::Binary(Operator::Multiply))
            .unwrap();
        let (add, _) = PRECEDENCE.binding(OperatorKey::Binary(Operator::Plus)).unwrap();
        assert!(neg > mul && mul > add);
        assert_eq!(assoc, Assoc::Right);
    }

    #[test]
    fn binary_operators_are_left_associative() {
        for op in [
            Operator::Plus,
            Operator::Minus,
            Operator::Multiply,
            Operator::Divide,
        ] {
            let (_, assoc) = PRECEDENCE.binding(OperatorKey::Binary(op)).unwrap();
            assert_eq!(assoc, Assoc::Left);
        }
    }
}
