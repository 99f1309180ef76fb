//! Error types

use std::fmt::{Display, Formatter};
use std::{fmt, io};

use thiserror::Error;

use crate::puzzle::{Difficulty, Operator, Value};

#[derive(Error, Debug, Clone, PartialEq)]
#[error("invalid puzzle: {}", msg)]
pub struct InvalidPuzzle {
    msg: String,
}

impl InvalidPuzzle {
    pub(crate) fn new(msg: String) -> Self {
        Self { msg }
    }
}

/// An operation that the rules of the game do not allow
#[derive(Error, Clone, Copy, Debug, PartialEq, Eq)]
pub enum InvalidOperation {
    #[error("{a} - {b} is negative")]
    NegativeResult { a: Value, b: Value },
    #[error("{a} / 0 divides by zero")]
    DivideByZero { a: Value },
    #[error("{a} / {b} is not a whole number")]
    InexactDivision { a: Value, b: Value },
    #[error("{a} {operator} {b} is too big")]
    Overflow {
        a: Value,
        b: Value,
        operator: Operator,
    },
    #[error("unknown operator: {0:?}")]
    UnknownOperator(char),
}

/// No solvable puzzle was found within the attempt bound
#[derive(Error, Clone, Debug, PartialEq)]
pub struct GenerationExhausted {
    pub difficulty: Difficulty,
    pub require_division: bool,
    pub attempts: u32,
}

impl Display for GenerationExhausted {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "failed to generate {} puzzle", self.difficulty)?;
        if self.require_division {
            write!(f, " with division")?;
        }
        write!(f, " after {} attempts", self.attempts)
    }
}

/// A move rejected by [`Game`](crate::game::Game)
#[derive(Error, Clone, Debug, PartialEq)]
pub enum InvalidMove {
    #[error("the puzzle is already solved")]
    Solved,
    #[error("no tile at position {0}")]
    NoTile(usize),
    #[error("a tile cannot be combined with itself")]
    SameTile,
    #[error(transparent)]
    Operation(#[from] InvalidOperation),
}

#[derive(Error, Debug)]
pub enum PuzzleFromFileError {
    #[error("error reading puzzle file")]
    Io(#[from] io::Error),
    #[error("error decoding puzzle file")]
    Json(#[from] serde_json::Error),
}

pub const UNEXPECTED_END: ParseError = ParseError::from_type(ParsePuzzleErrorType::UnexpectedEnd);

#[derive(Debug, Error)]
pub enum ParsePuzzleError {
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    InvalidPuzzle(#[from] InvalidPuzzle),
}

#[derive(Debug, Error)]
#[cfg_attr(test, derive(PartialEq))]
pub struct ParseError {
    error_type: ParsePuzzleErrorType,
    token: Option<String>,
    index: Option<usize>,
}

impl ParseError {
    pub(crate) fn new(error_type: ParsePuzzleErrorType, token: impl Display, index: usize) -> Self {
        Self {
            error_type,
            token: Some(token.to_string()),
            index: Some(index),
        }
    }

    pub(crate) const fn from_type(error_type: ParsePuzzleErrorType) -> Self {
        Self {
            error_type,
            token: None,
            index: None,
        }
    }

    /// The kind of error
    pub fn error_type(&self) -> &ParsePuzzleErrorType {
        &self.error_type
    }
}

#[derive(Debug)]
#[cfg_attr(test, derive(PartialEq))]
pub enum ParsePuzzleErrorType {
    InvalidNumber,
    InvalidToken,
    MissingDigits,
    MissingTarget,
    UnexpectedEnd,
    UnexpectedToken,
}

impl Display for ParsePuzzleErrorType {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let s = match self {
            ParsePuzzleErrorType::InvalidNumber => "Invalid number",
            ParsePuzzleErrorType::InvalidToken => "Invalid token",
            ParsePuzzleErrorType::MissingDigits => "Missing digits",
            ParsePuzzleErrorType::MissingTarget => "Missing target",
            ParsePuzzleErrorType::UnexpectedEnd => "Unexpected end",
            ParsePuzzleErrorType::UnexpectedToken => "Unexpected token",
        };
        write!(f, "{}", s)
    }
}

impl Display for ParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.error_type)?;
        if let Some(token) = &self.token {
            write!(f, ": \"{}\"", token)?;
        }
        if let Some(index) = &self.index {
            write!(f, " at {}", index)?;
        }
        Ok(())
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
#[error("unknown difficulty: \"{0}\" (expected easy, medium or hard)")]
pub struct UnknownDifficulty(pub String);
