//! # Test-case generation helpers
//!
//! Generators are seeded so that a failing case can be reproduced from the
//! seed alone. Case files are numbered `1.in`, `2.in`, ... and a new batch
//! continues after the highest number already present in the directory.

use crate::judge::{TaskOptions, get_task};
use crate::timeout::run_with_timeout;
use anyhow::{Context, Result};
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Rough size class of a generated case.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum Size {
    /// Small enough for every brute-force oracle.
    #[default]
    Small,
    Medium,
    /// Close to the upper constraints.
    Large,
}

pub fn rng_from_seed(seed: Option<u64>) -> ChaCha20Rng {
    match seed {
        Some(s) => ChaCha20Rng::seed_from_u64(s),
        None => ChaCha20Rng::from_os_rng(),
    }
}

pub fn input_path(dir: &Path, num: usize) -> PathBuf {
    dir.join(format!("{}.in", num))
}

pub fn output_path(dir: &Path, num: usize) -> PathBuf {
    dir.join(format!("{}.out", num))
}

/// Returns the first `k >= 1` such that `k.in` does not exist in `dir`.
pub fn next_file_number(dir: &Path) -> usize {
    let mut num = 1;
    while input_path(dir, num).exists() {
        num += 1;
    }
    num
}

pub fn write_case(dir: &Path, num: usize, input: &str, output: Option<&str>) -> Result<()> {
    fs::create_dir_all(dir).with_context(|| format!("Cannot create {}", dir.display()))?;
    let in_path = input_path(dir, num);
    fs::write(&in_path, input).with_context(|| format!("Cannot write {}", in_path.display()))?;
    if let Some(output) = output {
        let out_path = output_path(dir, num);
        fs::write(&out_path, output)
            .with_context(|| format!("Cannot write {}", out_path.display()))?;
    }
    Ok(())
}

/// Where an expected output came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AnswerSource {
    Brute,
    /// The oracle refused the input or failed on it.
    Skipped,
    Timeout,
}

/// The reference answer for `input`: the oracle's when it finishes within
/// `limit`, the fast solver's otherwise.
pub fn expected_output(
    problem: &str,
    options: TaskOptions,
    input: &str,
    limit: Duration,
) -> Result<(String, AnswerSource)> {
    let name = problem.to_string();
    let owned = input.to_string();
    let brute = run_with_timeout(limit, move || {
        get_task(&name, options).and_then(|task| task.brute(&owned))
    });
    let source = match brute {
        Some(Ok(output)) => {
            eprintln!("[brute force]");
            return Ok((output, AnswerSource::Brute));
        }
        Some(Err(e)) => {
            eprintln!("[oracle skipped: {:#}]", e);
            AnswerSource::Skipped
        }
        None => {
            eprintln!("[timeout -> optimal]");
            AnswerSource::Timeout
        }
    };
    Ok((get_task(problem, options)?.solve(input)?, source))
}

/// Joins values with single spaces.
pub fn join_line<T: std::fmt::Display>(values: &[T]) -> String {
    itertools::Itertools::join(&mut values.iter(), " ")
}
