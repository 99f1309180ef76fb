use std::path::Path;

use anyhow::{bail, Context as _, Result};
use numbrain::puzzle::{read_puzzle_set, write_puzzle_set};
use numbrain::Puzzle;
use tempfile::NamedTempFile;

use crate::options::{Options, Source};

pub(crate) struct Context {
    options: Options,
}

impl Context {
    pub fn new(options: Options) -> Result<Self> {
        if let Source::Generate(generate) = options.source() {
            if let Some(path) = generate.output_path() {
                if path.is_dir() {
                    bail!("Output path is a directory: {}", path.display());
                }
                if let Some(parent) = path.parent() {
                    if !parent.as_os_str().is_empty() && !parent.exists() {
                        bail!("Path does not exist: {}", parent.display());
                    }
                }
            }
        }
        Ok(Self { options })
    }

    pub fn options(&self) -> &Options {
        &self.options
    }
}

/// Add `puzzles` to the end of the puzzle set at `path`, creating it if needed.
///
/// The new set is written to a temporary file next to `path` and then moved over it, so the
/// existing set is left untouched if anything fails. Returns the size of the new set.
pub(crate) fn append_puzzle_set(path: &Path, puzzles: &[Puzzle]) -> Result<usize> {
    let mut all = if path.exists() {
        read_puzzle_set(path)
            .with_context(|| format!("Error reading existing puzzles: {}", path.display()))?
    } else {
        Vec::new()
    };
    all.extend_from_slice(puzzles);
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut file = NamedTempFile::new_in(dir)?;
    write_puzzle_set(&mut file, &all)?;
    file.persist(path)
        .with_context(|| format!("Error writing puzzles: {}", path.display()))?;
    Ok(all.len())
}
