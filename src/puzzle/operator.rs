use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::InvalidOperation;
use crate::puzzle::Value;

/// The `Operator` enum represents each of the math operators
/// that can combine two tiles.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[allow(missing_docs)]
pub enum Operator {
    #[serde(rename = "+")]
    Add,
    #[serde(rename = "-")]
    Subtract,
    #[serde(rename = "*")]
    Multiply,
    #[serde(rename = "/")]
    Divide,
}

impl Operator {
    /// All operators in the order the solver tries them
    pub const ALL: [Operator; 4] = [
        Operator::Add,
        Operator::Subtract,
        Operator::Multiply,
        Operator::Divide,
    ];

    /// Retrieve the character representation of the symbol
    pub fn symbol(self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Subtract => '-',
            Operator::Multiply => '*',
            Operator::Divide => '/',
        }
    }

    /// Retrieve an `Operator` from its corresponding symbol
    pub fn from_symbol(c: char) -> Option<Operator> {
        let o = match c {
            '+' => Operator::Add,
            '-' | '−' => Operator::Subtract,
            '*' | '×' => Operator::Multiply,
            '/' | '÷' => Operator::Divide,
            _ => return None,
        };
        Some(o)
    }

    /// True if swapping the operands never changes the result
    pub fn is_commutative(self) -> bool {
        match self {
            Operator::Add | Operator::Multiply => true,
            Operator::Subtract | Operator::Divide => false,
        }
    }

    /// Combine `a` and `b`, in that order, under the rules of the game.
    ///
    /// Subtraction may not go below zero and division must be exact.
    pub fn apply(self, a: Value, b: Value) -> Result<Value, InvalidOperation> {
        let overflow = InvalidOperation::Overflow {
            a,
            b,
            operator: self,
        };
        match self {
            Operator::Add => a.checked_add(b).ok_or(overflow),
            Operator::Subtract => {
                if a < b {
                    return Err(InvalidOperation::NegativeResult { a, b });
                }
                Ok(a - b)
            }
            Operator::Multiply => a.checked_mul(b).ok_or(overflow),
            Operator::Divide => {
                if b == 0 {
                    return Err(InvalidOperation::DivideByZero { a });
                }
                if a % b != 0 {
                    return Err(InvalidOperation::InexactDivision { a, b });
                }
                Ok(a / b)
            }
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Apply `operator` to `a` and `b`, in that order.
pub fn apply(a: Value, b: Value, operator: Operator) -> Result<Value, InvalidOperation> {
    operator.apply(a, b)
}

/// Apply the operator written as `symbol` to `a` and `b`.
///
/// Symbols other than the four operators are rejected.
pub fn apply_symbol(a: Value, b: Value, symbol: char) -> Result<Value, InvalidOperation> {
    let operator = Operator::from_symbol(symbol).ok_or(InvalidOperation::UnknownOperator(symbol))?;
    operator.apply(a, b)
}
