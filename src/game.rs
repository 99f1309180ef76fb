//! Playing a puzzle one move at a time
//!
//! A move picks two tiles and an operator. Both tiles are replaced by a single tile holding the
//! result, which goes at the end. Every move can be undone until the puzzle is solved.

use crate::error::InvalidMove;
use crate::puzzle::{Operator, Puzzle, Value};
use crate::solve::{SolutionPath, Step};

/// A move that was played
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HistoryEntry {
    /// The operator applied
    pub operator: Operator,
    /// The operands, in the order they were applied
    pub operands: (Value, Value),
    /// The value of the new tile
    pub result: Value,
    /// The tiles before the move
    pub previous_digits: Vec<Value>,
}

/// The state of a puzzle being played
#[derive(Clone, Debug)]
pub struct Game {
    puzzle: Puzzle,
    digits: Vec<Value>,
    history: Vec<HistoryEntry>,
}

impl Game {
    /// Start playing `puzzle`
    pub fn new(puzzle: Puzzle) -> Self {
        let digits = puzzle.digits().to_vec();
        Self {
            puzzle,
            digits,
            history: Vec::new(),
        }
    }

    /// The puzzle being played
    pub fn puzzle(&self) -> &Puzzle {
        &self.puzzle
    }

    /// The tiles in play
    pub fn digits(&self) -> &[Value] {
        &self.digits
    }

    /// The moves played so far, oldest first
    pub fn history(&self) -> &[HistoryEntry] {
        &self.history
    }

    /// True when one tile is left and it equals the target
    pub fn is_solved(&self) -> bool {
        self.digits == [self.puzzle.target()]
    }

    /// Combine the tile at `first` with the tile at `second`, in that order.
    ///
    /// Returns the value of the new tile. A rejected move leaves the game unchanged.
    pub fn apply_move(
        &mut self,
        first: usize,
        second: usize,
        operator: Operator,
    ) -> Result<Value, InvalidMove> {
        if self.is_solved() {
            return Err(InvalidMove::Solved);
        }
        for &i in &[first, second] {
            if i >= self.digits.len() {
                return Err(InvalidMove::NoTile(i));
            }
        }
        if first == second {
            return Err(InvalidMove::SameTile);
        }
        let (a, b) = (self.digits[first], self.digits[second]);
        let result = operator.apply(a, b)?;
        let previous_digits = self.digits.clone();
        self.digits.remove(first.max(second));
        self.digits.remove(first.min(second));
        self.digits.push(result);
        self.history.push(HistoryEntry {
            operator,
            operands: (a, b),
            result,
            previous_digits,
        });
        if self.is_solved() {
            info!("Solved {} in {} moves", self.puzzle, self.history.len());
        }
        Ok(result)
    }

    /// Take back the last move. Nothing is undone once the puzzle is solved.
    pub fn undo(&mut self) -> Option<HistoryEntry> {
        if self.is_solved() {
            return None;
        }
        let entry = self.history.pop()?;
        self.digits = entry.previous_digits.clone();
        Some(entry)
    }

    /// Go back to the starting tiles
    pub fn reset(&mut self) {
        self.digits = self.puzzle.digits().to_vec();
        self.history.clear();
    }

    /// The moves played so far as a solution path
    pub fn solution_path(&self) -> SolutionPath {
        self.history
            .iter()
            .map(|entry| Step::new(entry.operands.0, entry.operands.1, entry.operator, entry.result))
            .collect::<Vec<_>>()
            .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::InvalidOperation;
    use crate::puzzle::Operator::*;

    fn game(digits: Vec<Value>, target: Value) -> Game {
        Game::new(Puzzle::new(digits, target).unwrap())
    }

    #[test]
    fn play_to_the_end() {
        let mut game = game(vec![9, 7, 7, 6], 56);
        assert_eq!(game.apply_move(0, 1, Subtract), Ok(2));
        assert_eq!(game.digits(), &[7, 6, 2]);
        assert_eq!(game.apply_move(1, 2, Add), Ok(8));
        assert_eq!(game.digits(), &[7, 8]);
        assert!(!game.is_solved());
        assert_eq!(game.apply_move(0, 1, Multiply), Ok(56));
        assert!(game.is_solved());
        assert!(game.solution_path().verify(&[9, 7, 7, 6], 56));
        assert_eq!(game.apply_move(0, 0, Add), Err(InvalidMove::Solved));
        assert_eq!(game.undo(), None);
    }

    #[test]
    fn operand_order_follows_selection() {
        let mut game = game(vec![2, 8], 4);
        assert_eq!(
            game.apply_move(0, 1, Divide),
            Err(InvalidMove::Operation(InvalidOperation::InexactDivision { a: 2, b: 8 }))
        );
        assert_eq!(game.digits(), &[2, 8]);
        assert!(game.history().is_empty());
        assert_eq!(game.apply_move(1, 0, Divide), Ok(4));
        assert!(game.is_solved());
    }

    #[test]
    fn rejected_moves() {
        let mut game = game(vec![2, 5, 4], 12);
        assert_eq!(game.apply_move(0, 3, Add), Err(InvalidMove::NoTile(3)));
        assert_eq!(game.apply_move(1, 1, Add), Err(InvalidMove::SameTile));
        assert_eq!(
            game.apply_move(0, 1, Subtract),
            Err(InvalidMove::Operation(InvalidOperation::NegativeResult { a: 2, b: 5 }))
        );
        assert_eq!(game.digits(), &[2, 5, 4]);
    }

    #[test]
    fn undo_and_reset() {
        let mut game = game(vec![2, 5, 4], 12);
        game.apply_move(1, 0, Subtract).unwrap();
        game.apply_move(0, 1, Add).unwrap();
        assert_eq!(game.digits(), &[7]);
        let entry = game.undo().unwrap();
        assert_eq!(entry.operator, Add);
        assert_eq!(entry.operands, (4, 3));
        assert_eq!(game.digits(), &[4, 3]);
        game.apply_move(0, 1, Multiply).unwrap();
        assert!(game.is_solved());
        game.reset();
        assert_eq!(game.digits(), &[2, 5, 4]);
        assert!(game.history().is_empty());
        assert_eq!(game.undo(), None);
    }
}
