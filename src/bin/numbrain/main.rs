#![warn(rust_2018_idioms)]
#![warn(trivial_casts)]
#![warn(trivial_numeric_casts)]
#![warn(unused_qualifications)]

#[macro_use]
extern crate log;

use std::io::{self, Write};

use anyhow::{bail, Context as _, Result};
use numbrain::generate::Generator;
use numbrain::puzzle::{read_puzzle_set, write_puzzle_set};
use numbrain::{solve, Puzzle};
use rand::{thread_rng, Rng};

use crate::context::{append_puzzle_set, Context};
use crate::options::{Generate, Options, Source};

mod context;
mod options;

fn main() -> Result<()> {
    env_logger::init();
    let options = Options::from_args()?;
    let context = Context::new(options)?;
    context.start()?;
    Ok(())
}

impl Context {
    fn start(&self) -> Result<()> {
        match self.options().source() {
            Source::File(path) => {
                println!("Reading puzzles from \"{}\"", path.display());
                let puzzles = read_puzzle_set(path)
                    .with_context(|| format!("Error reading puzzles: {}", path.display()))?;
                self.check_puzzles(&puzzles)?;
            }
            Source::Puzzle(puzzle) => {
                self.check_puzzles(std::slice::from_ref(puzzle))?;
            }
            Source::Generate(generate) => {
                self.start_generate(generate)?;
            }
        }
        Ok(())
    }

    fn check_puzzles(&self, puzzles: &[Puzzle]) -> Result<()> {
        let mut unsolvable = 0;
        for (i, puzzle) in puzzles.iter().enumerate() {
            match solve(puzzle.digits(), puzzle.target()) {
                Some(path) => {
                    println!("{:>4}: {}", i + 1, puzzle);
                    if self.options().solve() {
                        for step in path.steps() {
                            println!("        {}", step);
                        }
                    }
                }
                None => {
                    println!("{:>4}: {} is not solvable", i + 1, puzzle);
                    unsolvable += 1;
                }
            }
        }
        if unsolvable > 0 {
            bail!("{} of {} puzzles are not solvable", unsolvable, puzzles.len());
        }
        println!("All {} puzzles are solvable", puzzles.len());
        Ok(())
    }

    fn start_generate(&self, generate: &Generate) -> Result<()> {
        let plan = &generate.plan;
        let seed = generate.seed.unwrap_or_else(|| thread_rng().gen());
        info!("Generating with seed {}", seed);
        let mut generator = Generator::from_seed(seed).with_max_attempts(generate.max_attempts);

        eprintln!("Generating {} {} puzzles", plan.count(), plan.difficulty());
        if plan.division_count() > 0 {
            eprintln!("  {} requiring division", plan.division_count());
        }
        let batch = generator.generate_plan_with(plan, |i, result| {
            if let Err(error) = result {
                eprintln!("  puzzle {}: {}", i + 1, error);
            } else if (i + 1) % 10 == 0 || i + 1 == plan.count() {
                eprintln!("  {}/{}", i + 1, plan.count());
            }
        });
        if !batch.failures.is_empty() {
            eprintln!(
                "Generated {} of {} puzzles",
                batch.puzzles.len(),
                plan.count()
            );
        }

        if self.options().solve() {
            for puzzle in &batch.puzzles {
                eprintln!("{}", puzzle);
                if let Some(path) = solve(puzzle.digits(), puzzle.target()) {
                    for step in path.steps() {
                        eprintln!("    {}", step);
                    }
                }
            }
        }

        match generate.output_path() {
            Some(path) => {
                let total = append_puzzle_set(path, &batch.puzzles)?;
                println!(
                    "Added {} puzzles to {} ({} total)",
                    batch.puzzles.len(),
                    path.display(),
                    total
                );
            }
            None => {
                let stdout = io::stdout();
                let mut stdout = stdout.lock();
                write_puzzle_set(&mut stdout, &batch.puzzles)?;
                stdout.flush()?;
            }
        }
        Ok(())
    }
}
