//! Generate and solve digit arithmetic puzzles
//!
//! A puzzle is a handful of digits and a target number. The digits are combined two at a time
//! with `+`, `-`, `*` or `/` until a single number is left, and the puzzle is solved when that
//! number equals the target. Intermediate results may never be negative and division must be
//! exact.

#![warn(missing_docs)]
#![warn(rust_2018_idioms)]
#![warn(trivial_casts)]
#![warn(trivial_numeric_casts)]
#![warn(unused_qualifications)]

#[macro_use]
extern crate log;

#[allow(missing_docs)]
pub mod error;
pub mod game;
pub mod generate;
pub mod parse;
pub mod puzzle;
pub mod solve;

pub use crate::generate::Generator;
pub use crate::puzzle::{apply, apply_symbol, Difficulty, Operator, Puzzle, Value};
pub use crate::solve::{is_solvable, solve, SolutionPath, Step};
