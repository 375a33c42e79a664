//! # Permutations avoiding forbidden intervals
//!
//! For `m_1, ..., m_n` the interval `[l, r]` is forbidden iff `l <= r <= m_l`.
//! A permutation `p` fixes `[l, r]` when `{p_l, ..., p_r} = {l, ..., r}`. We
//! count permutations fixing no forbidden interval, modulo 1_000_000_007.
//!
//! ## Decomposition
//!
//! Among the fixed forbidden intervals of a permutation take the one with the
//! smallest right end `r`, and among those the largest left end `l`. Cutting
//! `[l, r]` out leaves
//!
//! * an inner block, a permutation of `[l, r]` fixing no forbidden interval
//!   that ends before `r`, and
//! * an outer permutation of the remaining `N - (r - l + 1)` values fixing no
//!   forbidden interval inside `[s, l - 1]`.
//!
//! An interval crossing `l` from the left and ending before `r` would make
//! `[l, r']` fixed and forbidden, and a fixed `[a, r]` with `a > l` would make
//! `[l, a - 1]` fixed and forbidden; both are excluded by the inner condition,
//! so the split is a bijection. Writing `H(s, k, N)` for the number of
//! permutations of size `N` with no fixed forbidden interval inside `[s, k]`
//! and `G(l, r) = H(l, r - 1, r - l + 1)`:
//!
//! ```text
//! H(s, s - 1, N) = N!
//! H(s, k, N)     = H(s, k - 1, N) - sum_{s <= l <= k <= m_l} G(l, k) * H(s, l - 1, N - (k - l + 1))
//! ```
//!
//! and the answer is `H(1, n, n)`.

use crate::modint::{ModInt, factorials};
use crate::testgen::{Size, join_line};
use crate::validate::{Tokens, ValidationError, check_range};
use itertools::Itertools;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

pub const MAX_N: usize = 200;
/// Largest `n` the brute-force oracle accepts.
pub const BRUTE_MAX_N: usize = 8;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Input {
    /// `m[l - 1]` is the largest forbidden right end for left end `l`.
    pub m: Vec<usize>,
}

impl Input {
    pub fn n(&self) -> usize {
        self.m.len()
    }
    pub fn is_forbidden(&self, l: usize, r: usize) -> bool {
        l >= 1 && l <= r && r <= self.m[l - 1]
    }
}

impl fmt::Display for Input {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.n())?;
        writeln!(f, "{}", join_line(&self.m))
    }
}

pub fn solve(input: &Input) -> ModInt {
    let n = input.n();
    if n == 0 {
        return ModInt::one();
    }
    let fact = factorials(n);
    // ends_at[k]: left ends l with [l, k] forbidden.
    let mut ends_at = vec![vec![]; n + 1];
    for k in 1..=n {
        for l in 1..=k {
            if input.is_forbidden(l, k) {
                ends_at[k].push(l);
            }
        }
    }
    // g[l][r] = G(l, r), filled for l > s before row s is processed.
    let mut g = mat![ModInt::zero(); n + 2; n + 2];
    let mut answer = ModInt::zero();
    for s in (1..=n).rev() {
        // h[k - s + 1][size] = H(s, k, size); rows start at k = s - 1.
        let mut h: Vec<Vec<ModInt>> = Vec::with_capacity(n - s + 2);
        h.push(fact.clone());
        for k in s..=n {
            g[s][k] = h[k - s][k - s + 1];
            let mut row = vec![ModInt::zero(); n + 1];
            for size in (k - s + 1)..=n {
                let mut v = h[k - s][size];
                for &l in ends_at[k].iter().filter(|&&l| l >= s) {
                    v -= g[l][k] * h[l - s][size - (k - l + 1)];
                }
                row[size] = v;
            }
            h.push(row);
        }
        if s == 1 {
            answer = h[n][n];
        }
    }
    answer
}

/// Enumerates all permutations; `n` must not exceed [`BRUTE_MAX_N`].
pub fn brute(input: &Input) -> ModInt {
    let n = input.n();
    assert!(n <= BRUTE_MAX_N, "n={} is too large for enumeration", n);
    let mut count = 0usize;
    for p in (1..=n).permutations(n) {
        let fixes_forbidden = (1..=n).any(|l| {
            let (mut lo, mut hi) = (usize::MAX, 0);
            (l..=n).any(|r| {
                lo = lo.min(p[r - 1]);
                hi = hi.max(p[r - 1]);
                input.is_forbidden(l, r) && lo == l && hi == r
            })
        });
        if !fixes_forbidden {
            count += 1;
        }
    }
    ModInt::from(count)
}

pub fn read(t: &mut Tokens) -> Result<Input, ValidationError> {
    let n: usize = t.next("n")?;
    let mut m = Vec::with_capacity(n.min(MAX_N));
    for i in 1..=n {
        m.push(t.next(&format!("m[{}]", i))?);
    }
    Ok(Input { m })
}

pub fn validate(s: &str) -> Result<Input, ValidationError> {
    let mut t = Tokens::new(s);
    let n = t.ranged("n", 1, MAX_N as i64)?;
    let mut m = Vec::with_capacity(n as usize);
    for i in 1..=n {
        let what = format!("m[{}]", i);
        let v: i64 = t.next(&what)?;
        check_range(&what, v, 0, n)?;
        m.push(v as usize);
    }
    t.finish()?;
    Ok(Input { m })
}

pub fn generate<R: Rng>(rng: &mut R, size: Size) -> Input {
    let max_n = match size {
        Size::Small => 7,
        Size::Medium => 40,
        Size::Large => MAX_N,
    };
    let n = rng.random_range(1..=max_n);
    let m = (1..=n)
        .map(|i| {
            if rng.random_bool(0.3) {
                rng.random_range(0..i)
            } else {
                rng.random_range(i..=n)
            }
        })
        .collect();
    Input { m }
}

pub fn edge_cases() -> Vec<Input> {
    vec![
        Input { m: vec![0] },
        Input { m: vec![1] },
        Input { m: vec![0; MAX_N] },
        // Only singletons: derangements.
        Input {
            m: (1..=MAX_N).collect(),
        },
        Input {
            m: vec![MAX_N; MAX_N],
        },
        Input {
            m: (0..MAX_N).map(|i| if i == 0 { MAX_N - 1 } else { MAX_N }).collect(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testgen::rng_from_seed;

    fn count(m: &[usize]) -> u32 {
        solve(&Input { m: m.to_vec() }).get()
    }

    #[test]
    fn no_forbidden_intervals_counts_all_permutations() {
        assert_eq!(count(&[0, 0, 0]), 6);
        assert_eq!(count(&[0, 1, 2, 3]), 24);
        assert_eq!(
            solve(&Input { m: vec![0; MAX_N] }),
            factorials(MAX_N)[MAX_N]
        );
    }

    #[test]
    fn whole_range_forbidden_gives_zero() {
        assert_eq!(count(&[1]), 0);
        assert_eq!(count(&[3, 0, 0]), 0);
        assert_eq!(count(&[5, 5, 5, 5, 5]), 0);
    }

    #[test]
    fn singletons_give_derangements() {
        let derangements = [1, 0, 1, 2, 9, 44, 265, 1854, 14833];
        for (n, &d) in derangements.iter().enumerate().skip(1) {
            let m: Vec<usize> = (1..=n).collect();
            assert_eq!(count(&m), d, "n={}", n);
        }
    }

    #[test]
    fn hand_checked_cases() {
        // [1,1] and [2,2] forbidden: only (2, 1).
        assert_eq!(count(&[1, 2]), 1);
        // [1,1] and [1,2] forbidden: (2,3,1), (3,1,2) and (3,2,1).
        assert_eq!(count(&[2, 0, 0]), 3);
    }

    #[test]
    fn matches_brute_force_for_small_n() {
        let mut rng = rng_from_seed(Some(2024));
        for _ in 0..400 {
            let input = generate(&mut rng, Size::Small);
            assert_eq!(solve(&input), brute(&input), "{:?}", input.m);
        }
    }

    #[test]
    fn matches_brute_force_exhaustively_for_n_up_to_4() {
        for n in 1..=4usize {
            let choices = (0..n).map(|_| 0..=n).multi_cartesian_product();
            for m in choices {
                let input = Input { m };
                assert_eq!(solve(&input), brute(&input), "{:?}", input.m);
            }
        }
    }

    #[test]
    fn validator_enforces_constraints() {
        assert!(validate("3\n0 3 2\n").is_ok());
        assert!(matches!(
            validate("3\n0 4 2\n"),
            Err(ValidationError::OutOfRange { .. })
        ));
        assert!(matches!(
            validate("0\n"),
            Err(ValidationError::OutOfRange { .. })
        ));
        assert!(matches!(
            validate("2\n1\n"),
            Err(ValidationError::Missing { .. })
        ));
    }

    #[test]
    fn edge_cases_are_valid_inputs() {
        for case in edge_cases() {
            assert_eq!(validate(&case.to_string()), Ok(case));
        }
    }
}
