//! Puzzles: a set of digits and a target number

use std::convert::TryFrom;
use std::fmt;
use std::fs::File;
use std::io::{BufReader, Write};
use std::path::Path;
use std::str::FromStr;

use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::error::{InvalidPuzzle, ParsePuzzleError, PuzzleFromFileError};
use crate::parse::parse_puzzle;

pub use self::difficulty::Difficulty;
pub use self::operator::{apply, apply_symbol, Operator};

mod difficulty;
mod operator;

/// The number on a tile or the target
pub type Value = u64;

/// An unsolved puzzle
///
/// The digits are kept in the order they were given. The order has no effect on whether the
/// puzzle can be solved, but it is the order the tiles are shown in.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(try_from = "PuzzleData")]
pub struct Puzzle {
    digits: Box<[Value]>,
    target: Value,
}

#[derive(Deserialize)]
struct PuzzleData {
    digits: Vec<Value>,
    target: Value,
}

impl Puzzle {
    /// Creates a puzzle from its digits and target
    pub fn new(digits: Vec<Value>, target: Value) -> Result<Self, InvalidPuzzle> {
        let puzzle = Self::new_unchecked(digits, target);
        validate(&puzzle)?;
        Ok(puzzle)
    }

    pub(crate) fn new_unchecked(digits: Vec<Value>, target: Value) -> Self {
        Self {
            digits: digits.into_boxed_slice(),
            target,
        }
    }

    /// Parse a puzzle in the form `9 7 7 6 = 56`
    pub fn parse(s: &str) -> Result<Self, ParsePuzzleError> {
        parse_puzzle(s)
    }

    /// The digits the puzzle starts with
    pub fn digits(&self) -> &[Value] {
        &self.digits
    }

    /// The number the digits must be combined to reach
    pub fn target(&self) -> Value {
        self.target
    }

    /// True if any combination of the digits reaches the target
    pub fn is_solvable(&self) -> bool {
        crate::solve::is_solvable(&self.digits, self.target)
    }
}

fn validate(puzzle: &Puzzle) -> Result<(), InvalidPuzzle> {
    if puzzle.digits.is_empty() {
        return Err(InvalidPuzzle::new("digits must not be empty".into()));
    }
    if let Some(i) = puzzle.digits.iter().position(|&digit| digit == 0) {
        return Err(InvalidPuzzle::new(format!(
            "digits must be positive (digit {} is 0)",
            i + 1
        )));
    }
    if puzzle.target == 0 {
        return Err(InvalidPuzzle::new("target must be positive".into()));
    }
    Ok(())
}

impl TryFrom<PuzzleData> for Puzzle {
    type Error = InvalidPuzzle;

    fn try_from(data: PuzzleData) -> Result<Self, Self::Error> {
        Puzzle::new(data.digits, data.target)
    }
}

impl FromStr for Puzzle {
    type Err = ParsePuzzleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_puzzle(s)
    }
}

impl fmt::Display for Puzzle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} = {}", self.digits.iter().join(" "), self.target)
    }
}

/// Read a JSON array of puzzles
pub fn read_puzzle_set(path: impl AsRef<Path>) -> Result<Vec<Puzzle>, PuzzleFromFileError> {
    let file = File::open(path)?;
    let puzzles = serde_json::from_reader(BufReader::new(file))?;
    Ok(puzzles)
}

/// Write puzzles as a pretty-printed JSON array
pub fn write_puzzle_set(mut writer: impl Write, puzzles: &[Puzzle]) -> Result<(), PuzzleFromFileError> {
    serde_json::to_writer_pretty(&mut writer, puzzles)?;
    writeln!(writer)?;
    Ok(())
}
