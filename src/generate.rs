//! Generate random solvable puzzles
//!
//! Candidates are sampled at random and checked with the solver until one is accepted or the
//! attempt bound runs out.

use rand::rngs::{StdRng, ThreadRng};
use rand::{thread_rng, Rng, SeedableRng};

use crate::error::GenerationExhausted;
use crate::puzzle::{Difficulty, Puzzle, Value};
use crate::solve::solve;

pub use self::batch::{Batch, BatchPlan};
pub use self::distribution::{Band, TargetDistribution};

mod batch;
mod distribution;

/// Attempt bound for offline generation
pub const BATCH_MAX_ATTEMPTS: u32 = 50_000;

/// Attempt bound for generation while a player is waiting
pub const INTERACTIVE_MAX_ATTEMPTS: u32 = 10_000;

const MIN_DIGIT: Value = 1;
const MAX_DIGIT: Value = 9;

/// Generates puzzles using the random number generator `R`
pub struct Generator<R = ThreadRng> {
    rng: R,
    max_attempts: u32,
}

impl Generator<ThreadRng> {
    /// A generator for offline use, seeded by the thread's random number generator
    pub fn new() -> Self {
        Self::with_rng(thread_rng())
    }

    /// A generator with the smaller attempt bound used while a player is waiting
    pub fn interactive() -> Self {
        Self::new().with_max_attempts(INTERACTIVE_MAX_ATTEMPTS)
    }
}

impl Default for Generator<ThreadRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl Generator<StdRng> {
    /// A generator that produces the same puzzles for the same seed
    pub fn from_seed(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> Generator<R> {
    /// A generator drawing from `rng`
    pub fn with_rng(rng: R) -> Self {
        Self {
            rng,
            max_attempts: BATCH_MAX_ATTEMPTS,
        }
    }

    /// Change the number of candidates tried before giving up
    pub fn with_max_attempts(mut self, max_attempts: u32) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    /// The number of candidates tried before giving up
    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    /// Draw `count` digits from 1 to 9, repeats allowed
    pub fn sample_digits(&mut self, count: usize) -> Vec<Value> {
        let rng = &mut self.rng;
        (0..count)
            .map(|_| rng.gen_range(MIN_DIGIT, MAX_DIGIT + 1))
            .collect()
    }

    /// Draw a target for `difficulty`
    pub fn sample_target(&mut self, difficulty: Difficulty) -> Value {
        difficulty.target_distribution().sample(&mut self.rng)
    }

    /// Generate a solvable puzzle.
    ///
    /// With `require_division`, the first solution the solver finds must divide.
    pub fn generate(
        &mut self,
        difficulty: Difficulty,
        require_division: bool,
    ) -> Result<Puzzle, GenerationExhausted> {
        for attempt in 1..=self.max_attempts {
            let digits = self.sample_digits(difficulty.digit_count());
            let target = self.sample_target(difficulty);
            let path = match solve(&digits, target) {
                Some(path) => path,
                None => continue,
            };
            if require_division && !path.uses_division() {
                continue;
            }
            let puzzle = Puzzle::new_unchecked(digits, target);
            debug!(
                "Generated {} puzzle {} after {} attempt(s)",
                difficulty, puzzle, attempt
            );
            return Ok(puzzle);
        }
        let error = GenerationExhausted {
            difficulty,
            require_division,
            attempts: self.max_attempts,
        };
        warn!("{}", error);
        Err(error)
    }

    /// Generate a solvable puzzle, or the difficulty's fallback puzzle if none is found
    pub fn generate_or_fallback(&mut self, difficulty: Difficulty) -> Puzzle {
        self.generate(difficulty, false)
            .unwrap_or_else(|_| difficulty.fallback_puzzle())
    }

    /// Generate `count` puzzles, a third of them requiring division at medium and hard
    pub fn generate_batch(&mut self, difficulty: Difficulty, count: usize) -> Batch {
        self.generate_plan(&BatchPlan::new(difficulty, count))
    }

    /// Generate the puzzles described by `plan`
    pub fn generate_plan(&mut self, plan: &BatchPlan) -> Batch {
        self.generate_plan_with(plan, |_, _| {})
    }

    /// Generate the puzzles described by `plan`, calling `on_generate` after each attempt with
    /// the index of the puzzle in the plan and the outcome
    pub fn generate_plan_with(
        &mut self,
        plan: &BatchPlan,
        mut on_generate: impl FnMut(usize, &Result<Puzzle, GenerationExhausted>),
    ) -> Batch {
        let mut batch = Batch::default();
        for (i, require_division) in plan.requirements().enumerate() {
            let result = self.generate(plan.difficulty(), require_division);
            on_generate(i, &result);
            match result {
                Ok(puzzle) => batch.puzzles.push(puzzle),
                Err(error) => batch.failures.push(error),
            }
        }
        batch
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solve::is_solvable;

    fn assert_valid(puzzle: &Puzzle, difficulty: Difficulty) {
        assert_eq!(puzzle.digits().len(), difficulty.digit_count(), "{}", puzzle);
        assert!(
            puzzle.digits().iter().all(|&d| (1..=9).contains(&d)),
            "{}",
            puzzle
        );
        let distribution = difficulty.target_distribution();
        assert!(
            (distribution.min()..=distribution.max()).contains(&puzzle.target()),
            "{}",
            puzzle
        );
        assert!(is_solvable(puzzle.digits(), puzzle.target()), "{}", puzzle);
    }

    #[test]
    fn easy_always_terminates() {
        let mut generator = Generator::from_seed(1);
        for _ in 0..100 {
            let puzzle = generator.generate(Difficulty::Easy, false).unwrap();
            assert_valid(&puzzle, Difficulty::Easy);
            assert!((5..=99).contains(&puzzle.target()));
        }
    }

    #[test]
    fn every_difficulty() {
        let mut generator = Generator::from_seed(2);
        for &difficulty in &Difficulty::ALL {
            for _ in 0..20 {
                let puzzle = generator.generate(difficulty, false).unwrap();
                assert_valid(&puzzle, difficulty);
            }
        }
    }

    #[test]
    fn require_division() {
        let mut generator = Generator::from_seed(3);
        for &difficulty in &Difficulty::ALL {
            for _ in 0..3 {
                let puzzle = generator.generate(difficulty, true).unwrap();
                assert_valid(&puzzle, difficulty);
                let path = solve(puzzle.digits(), puzzle.target()).unwrap();
                assert!(path.uses_division(), "{}\n{}", puzzle, path);
            }
        }
    }

    #[test]
    fn seeded_generators_agree() {
        let mut a = Generator::from_seed(42);
        let mut b = Generator::from_seed(42);
        for &difficulty in &Difficulty::ALL {
            assert_eq!(
                a.generate(difficulty, false).unwrap(),
                b.generate(difficulty, false).unwrap()
            );
        }
    }

    #[test]
    fn exhausted() {
        let mut generator = Generator::from_seed(4).with_max_attempts(0);
        let error = generator.generate(Difficulty::Medium, true).unwrap_err();
        assert_eq!(
            error,
            GenerationExhausted {
                difficulty: Difficulty::Medium,
                require_division: true,
                attempts: 0,
            }
        );
        assert_eq!(
            error.to_string(),
            "failed to generate medium puzzle with division after 0 attempts"
        );
        assert_eq!(
            generator.generate_or_fallback(Difficulty::Hard),
            Difficulty::Hard.fallback_puzzle()
        );
    }

    #[test]
    fn interactive_bound() {
        assert_eq!(Generator::interactive().max_attempts(), INTERACTIVE_MAX_ATTEMPTS);
        assert_eq!(Generator::new().max_attempts(), BATCH_MAX_ATTEMPTS);
        let puzzle = Generator::interactive().generate_or_fallback(Difficulty::Easy);
        assert!(puzzle.is_solvable());
    }

    #[test]
    fn batch_puts_division_first() {
        let mut generator = Generator::from_seed(5);
        let batch = generator.generate_batch(Difficulty::Medium, 6);
        assert!(batch.failures.is_empty());
        assert_eq!(batch.puzzles.len(), 6);
        for (i, puzzle) in batch.puzzles.iter().enumerate() {
            assert_valid(puzzle, Difficulty::Medium);
            if i < 2 {
                let path = solve(puzzle.digits(), puzzle.target()).unwrap();
                assert!(path.uses_division(), "{}", puzzle);
            }
        }
    }

    #[test]
    fn batch_reports_progress() {
        let mut generator = Generator::from_seed(6);
        let plan = BatchPlan::new(Difficulty::Easy, 4);
        let mut seen = Vec::new();
        let batch = generator.generate_plan_with(&plan, |i, result| {
            assert!(result.is_ok());
            seen.push(i);
        });
        assert_eq!(seen, vec![0, 1, 2, 3]);
        assert_eq!(batch.puzzles.len(), 4);
    }

    #[test]
    fn batch_keeps_failures() {
        let mut generator = Generator::from_seed(7).with_max_attempts(0);
        let batch = generator.generate_batch(Difficulty::Hard, 3);
        assert!(batch.puzzles.is_empty());
        assert_eq!(batch.failures.len(), 3);
        assert!(batch.failures[0].require_division);
        assert!(!batch.failures[1].require_division);
    }
}
