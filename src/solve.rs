//! Decide whether digits can reach a target, and find a way to do it
//!
//! The search repeatedly picks two of the remaining numbers, combines them with one of the
//! operators and replaces them with the result, until a single number is left. Pairs are tried
//! in index order and operators in the order `+ - * /`. Subtraction and division are also tried
//! with the operands swapped, right after the forward order. The first solution found in that
//! order is the one returned.

use ahash::AHashSet;
use itertools::Itertools;

use crate::puzzle::{Operator, Value};

pub use self::solution::{SolutionPath, Step};

mod solution;

/// True if `digits` can be combined to reach `target`
pub fn is_solvable(digits: &[Value], target: Value) -> bool {
    Solver::new(target).solve(digits).is_some()
}

/// Find a sequence of steps that combines `digits` into `target`
pub fn solve(digits: &[Value], target: Value) -> Option<SolutionPath> {
    Solver::new(target).solve(digits)
}

/// Backtracking search for a single target
///
/// A solver remembers every set of numbers it has found unable to reach the target, so reusing
/// one solver for several digit sets with the same target skips work already done.
pub struct Solver {
    target: Value,
    /// sorted multisets known not to reach the target
    dead_ends: AHashSet<Box<[Value]>>,
    steps: Vec<Step>,
}

impl Solver {
    /// Creates a solver for `target`
    pub fn new(target: Value) -> Self {
        Self {
            target,
            dead_ends: AHashSet::new(),
            steps: Vec::new(),
        }
    }

    /// The number this solver searches for
    pub fn target(&self) -> Value {
        self.target
    }

    /// Find a sequence of steps that combines `digits` into the target
    pub fn solve(&mut self, digits: &[Value]) -> Option<SolutionPath> {
        if digits.is_empty() {
            return None;
        }
        self.steps.clear();
        if self.search(digits) {
            Some(SolutionPath::from(std::mem::take(&mut self.steps)))
        } else {
            None
        }
    }

    fn search(&mut self, digits: &[Value]) -> bool {
        if let [value] = *digits {
            return value == self.target;
        }
        let key = sorted(digits);
        if self.dead_ends.contains(&key) {
            return false;
        }
        for (i, j) in (0..digits.len()).tuple_combinations() {
            let (a, b) = (digits[i], digits[j]);
            // the last slot holds the result of each step
            let mut next: Vec<Value> = digits
                .iter()
                .enumerate()
                .filter(|&(k, _)| k != i && k != j)
                .map(|(_, &value)| value)
                .chain(Some(0))
                .collect();
            for &operator in &Operator::ALL {
                if self.try_step(&mut next, a, b, operator) {
                    return true;
                }
                if !operator.is_commutative() && self.try_step(&mut next, b, a, operator) {
                    return true;
                }
            }
        }
        trace!("{:?} cannot reach {}", key, self.target);
        self.dead_ends.insert(key);
        false
    }

    fn try_step(&mut self, next: &mut [Value], a: Value, b: Value, operator: Operator) -> bool {
        let result = match operator.apply(a, b) {
            Ok(result) => result,
            Err(_) => return false,
        };
        let last = next.len() - 1;
        next[last] = result;
        self.steps.push(Step::new(a, b, operator, result));
        if self.search(next) {
            return true;
        }
        self.steps.pop();
        false
    }
}

fn sorted(digits: &[Value]) -> Box<[Value]> {
    let mut digits: Box<[Value]> = digits.into();
    digits.sort_unstable();
    digits
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_digit() {
        for n in 1..20 {
            assert!(is_solvable(&[n], n));
            assert!(!is_solvable(&[n], n + 1));
        }
    }

    #[test]
    fn empty_is_unsolvable() {
        assert!(!is_solvable(&[], 4));
        assert!(solve(&[], 4).is_none());
    }

    #[test]
    fn two_digits() {
        assert!(is_solvable(&[4, 2], 6));
        assert!(is_solvable(&[4, 2], 8));
        assert!(is_solvable(&[4, 2], 2));
        assert!(!is_solvable(&[5, 3], 1));
    }

    #[test]
    fn operand_order_is_tried_both_ways() {
        assert!(is_solvable(&[8, 2], 4));
        assert!(is_solvable(&[2, 8], 4));
        assert!(is_solvable(&[2, 8], 6));
    }

    #[test]
    fn negative_branch_falls_through() {
        // 2 - 5 is invalid, but (5 - 2) * 4 = 12
        assert!(is_solvable(&[2, 5, 4], 12));
        let path = solve(&[2, 5, 4], 12).unwrap();
        assert!(path.verify(&[2, 5, 4], 12));
    }

    #[test]
    fn first_solution_follows_search_order() {
        let path = solve(&[4, 2], 2).unwrap();
        assert_eq!(path.steps(), &[Step::new(4, 2, Operator::Subtract, 2)]);
        let path = solve(&[2, 8], 4).unwrap();
        assert_eq!(path.steps(), &[Step::new(8, 2, Operator::Divide, 4)]);
        let path = solve(&[2, 8], 6).unwrap();
        assert_eq!(path.steps(), &[Step::new(8, 2, Operator::Subtract, 6)]);
    }

    #[test]
    fn solutions_are_valid() {
        let cases: &[(&[Value], Value)] = &[
            (&[9, 7, 7, 6], 56),
            (&[8, 5, 3, 2, 1], 42),
            (&[9, 8, 7, 6, 5, 4], 100),
            (&[1, 1, 1, 1], 4),
            (&[6, 6, 6, 6], 24),
        ];
        for &(digits, target) in cases {
            let path = solve(digits, target).unwrap();
            assert_eq!(path.len(), digits.len() - 1);
            assert!(path.verify(digits, target), "{:?} = {}\n{}", digits, target, path);
        }
    }

    #[test]
    fn is_pure() {
        let digits = [7, 3, 2, 9, 1];
        let first = is_solvable(&digits, 97);
        assert_eq!(is_solvable(&digits, 97), first);
        assert_eq!(solve(&digits, 61), solve(&digits, 61));
    }

    #[test]
    fn reused_solver_agrees() {
        let mut solver = Solver::new(24);
        let cases: &[&[Value]] = &[&[1, 1, 1, 1], &[3, 3, 8, 8], &[1, 2, 3, 4], &[1, 1, 1, 2]];
        for &digits in cases {
            assert_eq!(solver.solve(digits), solve(digits, 24));
        }
    }

    #[test]
    fn unreachable() {
        assert!(!is_solvable(&[1, 1, 1, 1], 100));
        assert!(!is_solvable(&[1, 1], 3));
        // 8 / (3 - 8 / 3) needs a fraction
        assert!(!is_solvable(&[3, 3, 8, 8], 24));
    }
}
