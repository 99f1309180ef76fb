use std::iter;

use crate::error::GenerationExhausted;
use crate::puzzle::{Difficulty, Puzzle};

/// Which puzzles of a batch must require division
///
/// Puzzles that require division come first, followed by the rest.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BatchPlan {
    difficulty: Difficulty,
    count: usize,
    division_count: usize,
}

impl BatchPlan {
    /// The usual plan: at medium and hard, a third of the puzzles (rounded up) require division
    pub fn new(difficulty: Difficulty, count: usize) -> Self {
        let division_count = if difficulty.batch_requires_division() {
            (count + 2) / 3
        } else {
            0
        };
        Self {
            difficulty,
            count,
            division_count,
        }
    }

    /// A plan where every puzzle requires division
    pub fn all_division(difficulty: Difficulty, count: usize) -> Self {
        Self {
            difficulty,
            count,
            division_count: count,
        }
    }

    /// A plan where no puzzle requires division
    pub fn no_division(difficulty: Difficulty, count: usize) -> Self {
        Self {
            difficulty,
            count,
            division_count: 0,
        }
    }

    /// The difficulty of every puzzle in the batch
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// The number of puzzles in the batch
    pub fn count(&self) -> usize {
        self.count
    }

    /// The number of puzzles that must require division
    pub fn division_count(&self) -> usize {
        self.division_count
    }

    /// The number of puzzles with no division requirement
    pub fn regular_count(&self) -> usize {
        self.count - self.division_count
    }

    /// For each puzzle in order, whether it must require division
    pub fn requirements(&self) -> impl Iterator<Item = bool> {
        iter::repeat(true)
            .take(self.division_count)
            .chain(iter::repeat(false).take(self.regular_count()))
    }
}

/// The result of generating a batch
#[derive(Debug, Default)]
pub struct Batch {
    /// Puzzles in the order they were generated
    pub puzzles: Vec<Puzzle>,
    /// Puzzles that could not be generated
    pub failures: Vec<GenerationExhausted>,
}
