//! # Two sum
//!
//! Find `i < j` with `a_i + a_j = target`. Among all such pairs the answer is
//! the one with the smallest `j`, ties broken by the smallest `i`, which is
//! what a single left-to-right pass with a first-occurrence map yields.

use crate::testgen::{Size, join_line};
use crate::validate::{Tokens, ValidationError, check_range};
use rand::Rng;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::fmt;

pub const MAX_N: usize = 100_000;
pub const MAX_ABS: i64 = 1_000_000_000;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Input {
    pub nums: Vec<i64>,
    pub target: i64,
}

impl fmt::Display for Input {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.nums.len())?;
        writeln!(f, "{}", join_line(&self.nums))?;
        writeln!(f, "{}", self.target)
    }
}

pub fn solve(input: &Input) -> Option<(usize, usize)> {
    let mut first = FxHashMap::default();
    for (j, &a) in input.nums.iter().enumerate() {
        if let Some(&i) = first.get(&(input.target - a)) {
            return Some((i, j));
        }
        first.entry(a).or_insert(j);
    }
    None
}

pub fn brute(input: &Input) -> Option<(usize, usize)> {
    let a = &input.nums;
    for j in 0..a.len() {
        for i in 0..j {
            if a[i] + a[j] == input.target {
                return Some((i, j));
            }
        }
    }
    None
}

pub fn format_answer(answer: Option<(usize, usize)>) -> String {
    match answer {
        Some((i, j)) => format!("{} {}\n", i, j),
        None => "-1\n".to_string(),
    }
}

pub fn read(t: &mut Tokens) -> Result<Input, ValidationError> {
    let n: usize = t.next("n")?;
    let mut nums = Vec::with_capacity(n.min(MAX_N));
    for i in 0..n {
        nums.push(t.next(&format!("nums[{}]", i))?);
    }
    let target = t.next("target")?;
    Ok(Input { nums, target })
}

pub fn validate(s: &str) -> Result<Input, ValidationError> {
    let mut t = Tokens::new(s);
    let n = t.ranged("n", 2, MAX_N as i64)?;
    let mut nums = Vec::with_capacity(n as usize);
    for i in 0..n {
        let what = format!("nums[{}]", i);
        let v: i64 = t.next(&what)?;
        check_range(&what, v, -MAX_ABS, MAX_ABS)?;
        nums.push(v);
    }
    let target = t.ranged("target", -2 * MAX_ABS, 2 * MAX_ABS)?;
    t.finish()?;
    Ok(Input { nums, target })
}

/// Random values with a planted pair, so that an answer always exists.
pub fn generate<R: Rng>(rng: &mut R, size: Size) -> Input {
    let (min_n, max_n, max_abs) = match size {
        Size::Small => (2, 10, 20),
        Size::Medium => (11, 1000, 1000),
        Size::Large => (1001, MAX_N, MAX_ABS),
    };
    let n = rng.random_range(min_n..=max_n);
    let nums: Vec<i64> = (0..n).map(|_| rng.random_range(-max_abs..=max_abs)).collect();
    let i = rng.random_range(0..n - 1);
    let j = rng.random_range(i + 1..n);
    let target = nums[i] + nums[j];
    Input { nums, target }
}

pub fn edge_cases() -> Vec<Input> {
    let input = |nums: Vec<i64>, target| Input { nums, target };
    let mut sparse = vec![0; 100];
    sparse[25] = 17;
    sparse[75] = 23;
    let mut one_off = vec![5; 50];
    one_off[30] = 15;
    vec![
        input(vec![-10, 10], 0),
        input(vec![5, 10], 15),
        input(vec![3, 3, 3, 3, 3], 6),
        input(vec![-2, -1, 0, 1, 2, 3], 0),
        input(vec![-5, -4, -3, -2, -1], -7),
        input(vec![0, 0, 0, 0, 0], 0),
        input(sparse, 40),
        input(one_off, 20),
        input(
            vec![1000, -1000, 500, -500, 750, -750, 250, -250, 100, -100],
            0,
        ),
        input((0..20).map(|i| i * 5).collect(), 35),
        input(vec![MAX_ABS, MAX_ABS], 2 * MAX_ABS),
        input(vec![1, 2, 3], 100),
    ]
}
