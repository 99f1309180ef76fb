use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::UnknownDifficulty;
use crate::generate::TargetDistribution;
use crate::puzzle::Puzzle;

/// How hard a puzzle is: the number of digits and the range of the target
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
#[allow(missing_docs)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// Every difficulty, easiest first
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    /// The lowercase name of the difficulty
    pub fn name(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }

    /// The number of digits in a puzzle
    pub fn digit_count(self) -> usize {
        match self {
            Difficulty::Easy => 4,
            Difficulty::Medium => 5,
            Difficulty::Hard => 6,
        }
    }

    /// The distribution targets are sampled from
    pub fn target_distribution(self) -> TargetDistribution {
        TargetDistribution::for_difficulty(self)
    }

    /// Whether a batch of puzzles at this difficulty includes puzzles that need division
    pub fn batch_requires_division(self) -> bool {
        match self {
            Difficulty::Easy => false,
            Difficulty::Medium | Difficulty::Hard => true,
        }
    }

    /// A known solvable puzzle to fall back on when generation gives up
    pub fn fallback_puzzle(self) -> Puzzle {
        let (digits, target) = match self {
            Difficulty::Easy => (vec![9, 7, 7, 6], 56),
            Difficulty::Medium => (vec![8, 5, 3, 2, 1], 42),
            Difficulty::Hard => (vec![9, 8, 7, 6, 5, 4], 100),
        };
        Puzzle::new_unchecked(digits, target)
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Difficulty {
    type Err = UnknownDifficulty;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Difficulty::ALL
            .iter()
            .copied()
            .find(|difficulty| difficulty.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownDifficulty(s.to_string()))
    }
}
