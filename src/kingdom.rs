//! # Dividing the Kingdom
//!
//! `n` cities (n even) lie on a cycle. Cutting the cycle at two roads splits
//! it into two arcs; a division is valid when both arcs hold `n/2` cities.
//! The value of a division is the absolute difference of the identifier sums
//! of the two arcs.
//!
//! Rotations `r` and `r + n/2` describe the same division, so only the first
//! `n/2` rotations need to be examined.

use crate::SetMinMax;
use crate::testgen::{Size, join_line};
use crate::validate::{Tokens, ValidationError, check_range};
use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

pub const MAX_N: usize = 100_000;
pub const MAX_ID: i64 = 1_000_000_000;

/// Whether the most or the least balanced division is reported.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum Objective {
    #[default]
    Min,
    Max,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KingdomError {
    #[error("the number of cities must be even and positive, got {0}")]
    OddCount(usize),
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Input {
    pub cities: Vec<i64>,
}

impl fmt::Display for Input {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.cities.len())?;
        writeln!(f, "{}", join_line(&self.cities))
    }
}

fn check_count(n: usize) -> Result<(), KingdomError> {
    if n == 0 || n % 2 == 1 {
        return Err(KingdomError::OddCount(n));
    }
    Ok(())
}

/// O(n) with prefix sums.
pub fn solve(input: &Input, objective: Objective) -> Result<i64, KingdomError> {
    let a = &input.cities;
    let n = a.len();
    check_count(n)?;
    let half = n / 2;
    let mut prefix = vec![0i64; n + 1];
    for i in 0..n {
        prefix[i + 1] = prefix[i] + a[i];
    }
    let total = prefix[n];
    let mut best = match objective {
        Objective::Min => i64::MAX,
        Objective::Max => i64::MIN,
    };
    // Every division has one arc lying inside [0, n) without wrapping.
    for start in 0..half {
        let arc = prefix[start + half] - prefix[start];
        let diff = (total - 2 * arc).abs();
        match objective {
            Objective::Min => best.setmin(diff),
            Objective::Max => best.setmax(diff),
        };
    }
    Ok(best)
}

/// O(n^2): every rotation, both halves summed explicitly.
pub fn brute(input: &Input, objective: Objective) -> Result<i64, KingdomError> {
    let a = &input.cities;
    let n = a.len();
    check_count(n)?;
    let half = n / 2;
    let mut diffs = vec![];
    for r in 0..n {
        let first: i64 = (0..half).map(|i| a[(r + i) % n]).sum();
        let second: i64 = (half..n).map(|i| a[(r + i) % n]).sum();
        diffs.push((first - second).abs());
    }
    let best = match objective {
        Objective::Min => diffs.into_iter().min(),
        Objective::Max => diffs.into_iter().max(),
    };
    Ok(best.unwrap_or_default())
}

pub fn read(t: &mut Tokens) -> Result<Input, ValidationError> {
    let n: usize = t.next("n")?;
    let mut cities = Vec::with_capacity(n.min(MAX_N));
    for i in 0..n {
        cities.push(t.next(&format!("a[{}]", i))?);
    }
    Ok(Input { cities })
}

pub fn validate(s: &str) -> Result<Input, ValidationError> {
    let mut t = Tokens::new(s);
    let n = t.ranged("n", 2, MAX_N as i64)?;
    if n % 2 == 1 {
        return Err(ValidationError::Constraint(format!("n={} is not even", n)));
    }
    let mut cities = Vec::with_capacity(n as usize);
    for i in 0..n {
        let a: i64 = t.next(&format!("a[{}]", i))?;
        check_range(&format!("a[{}]", i), a, 1, MAX_ID)?;
        cities.push(a);
    }
    t.finish()?;
    Ok(Input { cities })
}

pub fn generate<R: Rng>(rng: &mut R, size: Size) -> Input {
    let (max_half, max_id) = match size {
        Size::Small => (5, 20),
        Size::Medium => (500, 1_000_000),
        Size::Large => (MAX_N / 2, MAX_ID),
    };
    let n = 2 * rng.random_range(1..=max_half);
    let cities = (0..n).map(|_| rng.random_range(1..=max_id)).collect();
    Input { cities }
}

pub fn edge_cases() -> Vec<Input> {
    let alternating: Vec<i64> = (0..100)
        .map(|i| if i % 2 == 0 { 1 } else { MAX_ID })
        .collect();
    let blocks: Vec<i64> = (0..100).map(|i| if i < 50 { 1 } else { MAX_ID }).collect();
    let shuffled = {
        let mut v: Vec<i64> = (1..=100).collect();
        v.shuffle(&mut crate::testgen::rng_from_seed(Some(0)));
        v
    };
    vec![
        Input { cities: vec![1, 1] },
        Input {
            cities: vec![1, MAX_ID],
        },
        Input {
            cities: vec![MAX_ID; MAX_N],
        },
        Input {
            cities: alternating,
        },
        Input { cities: blocks },
        Input {
            cities: (1..=100).collect(),
        },
        Input { cities: shuffled },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testgen::rng_from_seed;

    fn input(cities: &[i64]) -> Input {
        Input {
            cities: cities.to_vec(),
        }
    }

    #[test]
    fn small_cycles() {
        // Divisions of [1, 2, 3, 4]: {1,2}|{3,4} -> 4, {2,3}|{4,1} -> 0.
        let a = input(&[1, 2, 3, 4]);
        assert_eq!(solve(&a, Objective::Min), Ok(0));
        assert_eq!(solve(&a, Objective::Max), Ok(4));
        let b = input(&[5, 5]);
        assert_eq!(solve(&b, Objective::Min), Ok(0));
        let c = input(&[1, 10, 100, 1000, 10000, 100000]);
        // Arcs 111, 1110 and 11100 out of a total of 111111.
        assert_eq!(solve(&c, Objective::Min), Ok(88911));
        assert_eq!(solve(&c, Objective::Max), Ok(110889));
    }

    #[test]
    fn odd_count_is_rejected() {
        assert_eq!(
            solve(&input(&[1, 2, 3]), Objective::Min),
            Err(KingdomError::OddCount(3))
        );
        assert_eq!(
            brute(&input(&[]), Objective::Max),
            Err(KingdomError::OddCount(0))
        );
    }

    #[test]
    fn matches_brute_force_on_random_cycles() {
        let mut rng = rng_from_seed(Some(42));
        for _ in 0..300 {
            let a = generate(&mut rng, Size::Small);
            for objective in [Objective::Min, Objective::Max] {
                assert_eq!(solve(&a, objective), brute(&a, objective), "{:?}", a);
            }
        }
    }

    #[test]
    fn large_values_do_not_overflow() {
        let a = Input {
            cities: vec![MAX_ID; MAX_N],
        };
        assert_eq!(solve(&a, Objective::Max), Ok(0));
    }

    #[test]
    fn validator_enforces_constraints() {
        assert!(validate("4\n1 2 3 4\n").is_ok());
        assert!(matches!(
            validate("3\n1 2 3\n"),
            Err(ValidationError::Constraint(_))
        ));
        assert!(matches!(
            validate("2\n0 1\n"),
            Err(ValidationError::OutOfRange { .. })
        ));
        assert_eq!(validate("2\n1 1 1\n"), Err(ValidationError::TrailingData));
    }

    #[test]
    fn edge_cases_are_valid_inputs() {
        for case in edge_cases() {
            assert_eq!(validate(&case.to_string()), Ok(case));
        }
    }
}
