use std::fmt;

use crate::puzzle::Value;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Token {
    Comma,
    Equals,
    Number(Value),
    Space,
}

impl Token {
    pub fn number(self) -> Option<Value> {
        match self {
            Token::Number(n) => Some(n),
            _ => None,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Comma => write!(f, ","),
            Token::Equals => write!(f, "="),
            Token::Number(n) => write!(f, "{}", n),
            Token::Space => write!(f, " "),
        }
    }
}
