use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context as _, Result};
use clap::ArgMatches;
use numbrain::generate::{BatchPlan, BATCH_MAX_ATTEMPTS};
use numbrain::{Difficulty, Puzzle};

const DEFAULT_COUNT: usize = 1;

#[derive(Clone)]
pub(crate) struct Options {
    source: Source,
    solve: bool,
}

impl Options {
    pub fn from_args() -> Result<Self> {
        Self::from_arg_matches(&clap_app().get_matches())
    }

    fn from_arg_matches(matches: &ArgMatches<'_>) -> Result<Self> {
        let source = if let Some(path) = matches.value_of("input") {
            Source::File(path.into())
        } else if let Some(text) = matches.value_of("puzzle") {
            let puzzle = text
                .parse::<Puzzle>()
                .with_context(|| format!("invalid puzzle: \"{}\"", text))?;
            Source::Puzzle(puzzle)
        } else {
            Source::Generate(Generate::from_arg_matches(matches)?)
        };
        Ok(Self {
            source,
            solve: matches.is_present("solve"),
        })
    }

    pub fn source(&self) -> &Source {
        &self.source
    }

    pub fn solve(&self) -> bool {
        self.solve
    }
}

#[derive(Clone)]
pub(crate) enum Source {
    File(PathBuf),
    Puzzle(Puzzle),
    Generate(Generate),
}

#[derive(Clone)]
pub(crate) struct Generate {
    pub plan: BatchPlan,
    pub seed: Option<u64>,
    pub max_attempts: u32,
    pub output_path: Option<PathBuf>,
}

impl Generate {
    fn from_arg_matches(matches: &ArgMatches<'_>) -> Result<Self> {
        let difficulty: Difficulty = matches
            .value_of("difficulty")
            .unwrap_or("easy")
            .parse()?;
        let count = parse_value(matches, "count")?.unwrap_or(DEFAULT_COUNT);
        let plan = if matches.is_present("require_division") {
            BatchPlan::all_division(difficulty, count)
        } else if matches.is_present("no_division") {
            BatchPlan::no_division(difficulty, count)
        } else {
            BatchPlan::new(difficulty, count)
        };
        Ok(Self {
            plan,
            seed: parse_value(matches, "seed")?,
            max_attempts: parse_value(matches, "max_attempts")?.unwrap_or(BATCH_MAX_ATTEMPTS),
            output_path: matches.value_of("output").map(PathBuf::from),
        })
    }

    pub fn output_path(&self) -> Option<&Path> {
        self.output_path.as_deref()
    }
}

fn parse_value<T: std::str::FromStr>(matches: &ArgMatches<'_>, name: &str) -> Result<Option<T>> {
    matches
        .value_of(name)
        .map(|s| {
            s.parse::<T>()
                .map_err(|_| anyhow!("invalid value for --{}: {}", name.replace('_', "-"), s))
        })
        .transpose()
}

fn clap_app() -> clap::App<'static, 'static> {
    use clap::{App, AppSettings, Arg, ArgGroup};

    App::new("numbrain")
        .author("Cameron Steffen <cam.steffen94@gmail.com>")
        .about("Generate and check digit arithmetic puzzles")
        .setting(AppSettings::ArgRequiredElseHelp)
        .group(
            ArgGroup::with_name("source")
                .args(&["generate", "input", "puzzle"])
                .required(true),
        )
        .arg(
            Arg::with_name("generate")
                .short("g")
                .long("generate")
                .help("generate puzzle(s)")
                .display_order(1),
        )
        .arg(
            Arg::with_name("input")
                .short("i")
                .long("input")
                .takes_value(true)
                .value_name("PATH")
                .help("check every puzzle in a JSON puzzle file")
                .display_order(1),
        )
        .arg(
            Arg::with_name("puzzle")
                .short("p")
                .long("puzzle")
                .takes_value(true)
                .value_name("PUZZLE")
                .help("check a single puzzle, written like \"9 7 7 6 = 56\"")
                .display_order(1),
        )
        .arg(
            Arg::with_name("solve")
                .short("s")
                .long("solve")
                .help("print a solution for each puzzle"),
        )
        .arg(
            Arg::with_name("difficulty")
                .short("d")
                .long("difficulty")
                .takes_value(true)
                .possible_values(&["easy", "medium", "hard"])
                .requires("generate")
                .help("the difficulty of generated puzzles [default: easy]"),
        )
        .arg(
            Arg::with_name("count")
                .short("c")
                .long("count")
                .takes_value(true)
                .requires("generate")
                .help("the number of puzzles to generate"),
        )
        .arg(
            Arg::with_name("require_division")
                .long("require-division")
                .requires("generate")
                .help("only generate puzzles whose solution divides"),
        )
        .arg(
            Arg::with_name("no_division")
                .long("no-division")
                .requires("generate")
                .conflicts_with("require_division")
                .help("do not require division in any generated puzzle"),
        )
        .arg(
            Arg::with_name("seed")
                .long("seed")
                .takes_value(true)
                .requires("generate")
                .help("seed the random number generator to reproduce a batch"),
        )
        .arg(
            Arg::with_name("max_attempts")
                .long("max-attempts")
                .takes_value(true)
                .requires("generate")
                .help("candidates to try per puzzle before giving up"),
        )
        .arg(
            Arg::with_name("output")
                .short("o")
                .long("output")
                .takes_value(true)
                .value_name("PATH")
                .requires("generate")
                .help("append generated puzzles to a JSON puzzle file instead of printing them"),
        )
}
