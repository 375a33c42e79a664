//! # Small Operations
//!
//! One operation picks `a` in `[1, k]` and either multiplies `x` by `a` or
//! divides `x` by `a` when `a` divides it. With `g = gcd(x, y)` every optimal
//! sequence divides `x` down to `g` and multiplies it up to `y`, so the answer
//! is `f(x / g) + f(y / g)` where `f(v)` is the fewest factors, each at most
//! `k`, whose product is `v`.

use crate::SetMinMax;
use crate::testgen::Size;
use crate::validate::{Tokens, ValidationError};
use itertools::Itertools;
use num::integer::gcd;
use once_cell::sync::Lazy;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

pub const MAX_T: usize = 10_000;
pub const MAX_VALUE: u32 = 1_000_000;
pub const MAX_SUM: u64 = 100_000_000;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Case {
    pub x: u32,
    pub y: u32,
    pub k: u32,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Input {
    pub cases: Vec<Case>,
}

impl fmt::Display for Input {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.cases.len())?;
        for c in &self.cases {
            writeln!(f, "{} {} {}", c.x, c.y, c.k)?;
        }
        Ok(())
    }
}

/// Smallest prime factor of every value up to [`MAX_VALUE`].
static SPF: Lazy<Vec<u32>> = Lazy::new(|| {
    let n = MAX_VALUE as usize + 1;
    let mut spf: Vec<u32> = (0..n as u32).collect();
    let mut i = 2;
    while i * i < n {
        if spf[i] == i as u32 {
            for j in (i * i..n).step_by(i) {
                if spf[j] == j as u32 {
                    spf[j] = i as u32;
                }
            }
        }
        i += 1;
    }
    spf
});

/// Prime factors of `v` with multiplicity, in ascending order.
pub fn prime_factors(mut v: u32) -> Vec<u32> {
    assert!(v <= MAX_VALUE, "{} exceeds the sieve", v);
    let mut primes = vec![];
    while v > 1 {
        let p = SPF[v as usize];
        primes.push(p);
        v /= p;
    }
    primes
}

fn divisors(primes: &[u32]) -> Vec<u32> {
    let mut divs = vec![1u32];
    for (p, group) in &primes.iter().chunk_by(|&&p| p) {
        let e = group.count();
        let len = divs.len();
        let mut pw = 1;
        for _ in 0..e {
            pw *= p;
            for i in 0..len {
                divs.push(divs[i] * pw);
            }
        }
    }
    divs.sort_unstable();
    divs
}

/// Fewest factors in `[2, k]` with product `v`, by DP over the divisors of `v`.
pub fn min_factors(v: u32, k: u32) -> Option<u32> {
    let primes = prime_factors(v);
    if primes.iter().any(|&p| p > k) {
        return None;
    }
    let divs = divisors(&primes);
    let mut dp = vec![u32::MAX; divs.len()];
    dp[0] = 0;
    for i in 1..divs.len() {
        let d = divs[i];
        for j in 1..=i {
            let e = divs[j];
            if e > k {
                break;
            }
            if d % e != 0 {
                continue;
            }
            if let Ok(q) = divs.binary_search(&(d / e))
                && dp[q] != u32::MAX
            {
                let cand = dp[q] + 1;
                dp[i].setmin(cand);
            }
        }
    }
    Some(dp[divs.len() - 1])
}

pub fn solve_case(c: Case) -> i64 {
    let g = gcd(c.x, c.y);
    match (min_factors(c.x / g, c.k), min_factors(c.y / g, c.k)) {
        (Some(a), Some(b)) => (a + b) as i64,
        _ => -1,
    }
}

pub fn solve(input: &Input) -> Vec<i64> {
    input.cases.iter().map(|&c| solve_case(c)).collect()
}

/// Packs the prime multiset into the fewest bins whose products stay within `k`.
pub fn min_bins(primes: &[u32], k: u32) -> Option<u32> {
    if primes.iter().any(|&p| p > k) {
        return None;
    }
    let mut primes = primes.to_vec();
    primes.sort_unstable_by(|a, b| b.cmp(a));
    let n = primes.len();
    let mut bins = vec![1u64; n];
    for b in 0..=n {
        bins.fill(1);
        if pack(&primes, k as u64, b, 0, 0, &mut bins) {
            return Some(b as u32);
        }
    }
    unreachable!("one bin per prime always fits")
}

fn pack(primes: &[u32], k: u64, limit: usize, idx: usize, used: usize, bins: &mut [u64]) -> bool {
    if idx == primes.len() {
        return true;
    }
    let p = primes[idx] as u64;
    let mut prev = 0;
    for i in 0..used {
        // Bins with equal products are interchangeable.
        if bins[i] == prev {
            continue;
        }
        prev = bins[i];
        if bins[i] * p <= k {
            bins[i] *= p;
            if pack(primes, k, limit, idx + 1, used, bins) {
                return true;
            }
            bins[i] /= p;
        }
    }
    if used < limit {
        bins[used] = p;
        if pack(primes, k, limit, idx + 1, used + 1, bins) {
            return true;
        }
        bins[used] = 1;
    }
    false
}

pub fn brute_case(c: Case) -> i64 {
    if c.x == c.y {
        return 0;
    }
    let g = gcd(c.x, c.y);
    match (
        min_bins(&prime_factors(c.x / g), c.k),
        min_bins(&prime_factors(c.y / g), c.k),
    ) {
        (Some(a), Some(b)) => (a + b) as i64,
        _ => -1,
    }
}

pub fn brute(input: &Input) -> Vec<i64> {
    input.cases.iter().map(|&c| brute_case(c)).collect()
}

pub fn read(t: &mut Tokens) -> Result<Input, ValidationError> {
    let n: usize = t.next("t")?;
    let mut cases = Vec::with_capacity(n.min(MAX_T));
    for i in 1..=n {
        cases.push(Case {
            x: t.next(&format!("test case #{}: x", i))?,
            y: t.next(&format!("test case #{}: y", i))?,
            k: t.next(&format!("test case #{}: k", i))?,
        });
    }
    Ok(Input { cases })
}

pub fn validate(s: &str) -> Result<Input, ValidationError> {
    let mut t = Tokens::new(s);
    let n = t.ranged("t", 1, MAX_T as i64)?;
    let (mut sum_x, mut sum_y) = (0u64, 0u64);
    let mut cases = Vec::with_capacity(n as usize);
    for i in 1..=n {
        let mut value = |name: &str| {
            t.ranged(&format!("test case #{}: {}", i, name), 1, MAX_VALUE as i64)
                .map(|v| v as u32)
        };
        let c = Case {
            x: value("x")?,
            y: value("y")?,
            k: value("k")?,
        };
        sum_x += c.x as u64;
        sum_y += c.y as u64;
        if sum_x > MAX_SUM {
            return Err(ValidationError::Constraint(format!(
                "sum of x exceeded {} at test case #{}",
                MAX_SUM, i
            )));
        }
        if sum_y > MAX_SUM {
            return Err(ValidationError::Constraint(format!(
                "sum of y exceeded {} at test case #{}",
                MAX_SUM, i
            )));
        }
        cases.push(c);
    }
    t.finish()?;
    Ok(Input { cases })
}

pub fn generate<R: Rng>(rng: &mut R, size: Size) -> Input {
    let (max_t, max_value) = match size {
        Size::Small => (20, 50),
        Size::Medium => (100, 1000),
        Size::Large => (100, MAX_VALUE),
    };
    let t = rng.random_range(1..=max_t);
    let cases = (0..t)
        .map(|_| Case {
            x: rng.random_range(1..=max_value),
            y: rng.random_range(1..=max_value),
            k: rng.random_range(1..=max_value),
        })
        .collect();
    Input { cases }
}

pub fn edge_cases() -> Vec<Input> {
    let case = |x, y, k| Case { x, y, k };
    vec![
        Input {
            cases: vec![
                case(1, 1, 1),
                case(1, MAX_VALUE, 1),
                case(MAX_VALUE, 1, 1),
                case(MAX_VALUE, MAX_VALUE, 1),
                case(1, 1, MAX_VALUE),
            ],
        },
        Input {
            cases: vec![
                case(MAX_VALUE, MAX_VALUE, MAX_VALUE),
                case(2, 4, 2),
                case(3, 9, 3),
            ],
        },
        // 720720 has the most divisors below the limit.
        Input {
            cases: vec![case(1, 720_720, 16), case(720_720, 1, 2), case(524_288, 1, 2)],
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testgen::rng_from_seed;

    fn ops(x: u32, y: u32, k: u32) -> i64 {
        solve_case(Case { x, y, k })
    }

    #[test]
    fn hand_checked_cases() {
        assert_eq!(ops(1, 1, 1), 0);
        assert_eq!(ops(1, 1_000_000, 1), -1);
        assert_eq!(ops(2, 4, 2), 1);
        assert_eq!(ops(3, 9, 3), 1);
        assert_eq!(ops(4, 1, 2), 2);
        assert_eq!(ops(4, 1, 4), 1);
        assert_eq!(ops(1, 30, 5), 3);
        assert_eq!(ops(1, 30, 6), 2);
        assert_eq!(ops(6, 35, 7), 3);
        assert_eq!(ops(14, 2, 6), -1);
    }

    #[test]
    fn sieve_factors() {
        assert_eq!(prime_factors(1), Vec::<u32>::new());
        assert_eq!(prime_factors(360), vec![2, 2, 2, 3, 3, 5]);
        assert_eq!(prime_factors(999_983), vec![999_983]);
        assert_eq!(divisors(&prime_factors(12)), vec![1, 2, 3, 4, 6, 12]);
        assert_eq!(divisors(&prime_factors(720_720)).len(), 240);
    }

    #[test]
    fn bin_packing_agrees_with_divisor_dp() {
        for v in 1..=2000 {
            for k in [1, 2, 3, 5, 7, 10, 16, 50, 200] {
                assert_eq!(
                    min_bins(&prime_factors(v), k),
                    min_factors(v, k),
                    "v={} k={}",
                    v,
                    k
                );
            }
        }
    }

    #[test]
    fn matches_brute_force_on_random_cases() {
        let mut rng = rng_from_seed(Some(7));
        for size in [Size::Small, Size::Medium, Size::Large] {
            for _ in 0..20 {
                let input = generate(&mut rng, size);
                assert_eq!(solve(&input), brute(&input));
            }
        }
    }

    #[test]
    fn validator_enforces_sums() {
        assert!(validate("2\n1 2 3\n4 5 6\n").is_ok());
        let too_much: String = std::iter::once("101\n".to_string())
            .chain((0..101).map(|_| "1000000 1 1\n".to_string()))
            .collect();
        assert_eq!(
            validate(&too_much),
            Err(ValidationError::Constraint(
                "sum of x exceeded 100000000 at test case #101".to_string()
            ))
        );
        let too_much_y: String = std::iter::once("101\n".to_string())
            .chain((0..101).map(|_| "1 1000000 1\n".to_string()))
            .collect();
        assert_eq!(
            validate(&too_much_y),
            Err(ValidationError::Constraint(
                "sum of y exceeded 100000000 at test case #101".to_string()
            ))
        );
        let at_limit: String = std::iter::once("100\n".to_string())
            .chain((0..100).map(|_| "1000000 1000000 1\n".to_string()))
            .collect();
        assert!(validate(&at_limit).is_ok());
        assert_eq!(validate("1\n1 1 1\n2\n"), Err(ValidationError::TrailingData));
        assert!(matches!(
            validate("1\n0 1 1\n"),
            Err(ValidationError::OutOfRange { .. })
        ));
    }

    #[test]
    fn edge_cases_are_valid_inputs() {
        for case in edge_cases() {
            assert_eq!(validate(&case.to_string()), Ok(case));
        }
    }
}
