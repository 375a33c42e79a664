//! # Harmony grid
//!
//! Colour an `n x n` grid of lights with `R`, `G` and `B` such that every row
//! and every column holds exactly one `R` and one `G`, and no two lights of
//! the same colour (other than `B`) share a diagonal or an anti-diagonal. In
//! other words the red lights and the green lights are two disjoint `n`-queens
//! placements. Such a pair exists iff `n >= 4`.

use crate::testgen::Size;
use crate::validate::{Tokens, ValidationError};
use itertools::Itertools;
use num::integer::gcd;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

pub const MAX_N: usize = 1000;
/// Largest `n` handled by exhaustive search.
pub const SEARCH_MAX_N: usize = 9;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Input {
    pub n: usize,
}

impl fmt::Display for Input {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.n)
    }
}

/// Column of the red and of the green light in every row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Coloring {
    pub red: Vec<usize>,
    pub green: Vec<usize>,
}

impl Coloring {
    pub fn n(&self) -> usize {
        self.red.len()
    }

    pub fn to_grid(&self) -> Vec<Vec<u8>> {
        let n = self.n();
        let mut grid = vec![vec![b'B'; n]; n];
        for i in 0..n {
            grid[i][self.red[i]] = b'R';
            grid[i][self.green[i]] = b'G';
        }
        grid
    }

    /// Parses `n` rows of `R`/`G`/`B`. Each row must hold exactly one `R` and one `G`.
    pub fn parse(n: usize, text: &str) -> Result<Self, String> {
        let rows = text.split_ascii_whitespace().collect_vec();
        if rows.len() != n {
            return Err(format!("expected {} rows, got {}", n, rows.len()));
        }
        let mut red = Vec::with_capacity(n);
        let mut green = Vec::with_capacity(n);
        for (i, row) in rows.iter().enumerate() {
            let row = row.as_bytes();
            if row.len() != n {
                return Err(format!("row {} has length {}", i, row.len()));
            }
            if let Some(&c) = row.iter().find(|&&c| !matches!(c, b'R' | b'G' | b'B')) {
                return Err(format!("row {} contains {:?}", i, c as char));
            }
            let reds = row.iter().positions(|&c| c == b'R').collect_vec();
            let greens = row.iter().positions(|&c| c == b'G').collect_vec();
            if reds.len() != 1 || greens.len() != 1 {
                return Err(format!(
                    "row {} has {} R and {} G",
                    i,
                    reds.len(),
                    greens.len()
                ));
            }
            red.push(reds[0]);
            green.push(greens[0]);
        }
        Ok(Self { red, green })
    }

    pub fn verify(&self) -> Result<(), String> {
        for (name, cols) in [("R", &self.red), ("G", &self.green)] {
            if let Some(reason) = queens_violation(cols) {
                return Err(format!("{}: {}", name, reason));
            }
        }
        if let Some(i) = (0..self.n()).find(|&i| self.red[i] == self.green[i]) {
            return Err(format!("row {} has R and G on the same cell", i));
        }
        Ok(())
    }
}

impl fmt::Display for Coloring {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.to_grid() {
            writeln!(f, "{}", String::from_utf8_lossy(&row))?;
        }
        Ok(())
    }
}

fn queens_violation(cols: &[usize]) -> Option<String> {
    let n = cols.len();
    let mut col = vec![false; n];
    let mut diag = vec![false; 2 * n];
    let mut anti = vec![false; 2 * n];
    for (r, &c) in cols.iter().enumerate() {
        if c >= n {
            return Some(format!("column {} out of range in row {}", c, r));
        }
        if std::mem::replace(&mut col[c], true) {
            return Some(format!("column {} used twice", c));
        }
        if std::mem::replace(&mut diag[r + c], true) {
            return Some(format!("anti-diagonal {} used twice", r + c));
        }
        if std::mem::replace(&mut anti[r + n - c], true) {
            return Some(format!("diagonal {} used twice", r as i64 - c as i64));
        }
    }
    None
}

pub fn is_queens(cols: &[usize]) -> bool {
    queens_violation(cols).is_none()
}

/// A queens placement for `n >= 4`: even columns first, then odd ones, with
/// the usual fix-ups when `n mod 6` is 2 or 3.
pub fn explicit_queens(n: usize) -> Vec<usize> {
    let mut evens = (2..=n).step_by(2).collect_vec();
    let mut odds = (1..=n).step_by(2).collect_vec();
    match n % 6 {
        2 => {
            odds.swap(0, 1);
            let five = odds.remove(2);
            odds.push(five);
        }
        3 => {
            evens.rotate_left(1);
            odds.rotate_left(2);
        }
        _ => {}
    }
    evens.into_iter().chain(odds).map(|c| c - 1).collect()
}

fn mirror(cols: &[usize]) -> Vec<usize> {
    let n = cols.len();
    cols.iter().map(|&c| n - 1 - c).collect()
}

fn rotate_half(cols: &[usize]) -> Vec<usize> {
    let n = cols.len();
    cols.iter().rev().map(|&c| n - 1 - c).collect()
}

fn all_queens(n: usize) -> Vec<Vec<usize>> {
    fn rec(n: usize, cols: &mut Vec<usize>, out: &mut Vec<Vec<usize>>) {
        let r = cols.len();
        if r == n {
            out.push(cols.clone());
            return;
        }
        for c in 0..n {
            let attacked = cols
                .iter()
                .enumerate()
                .any(|(r2, &c2)| c2 == c || r - r2 == c.abs_diff(c2));
            if !attacked {
                cols.push(c);
                rec(n, cols, out);
                cols.pop();
            }
        }
    }
    let mut out = vec![];
    rec(n, &mut vec![], &mut out);
    out
}

/// Exhaustive search over pairs of queens placements.
pub fn search(n: usize) -> Option<Coloring> {
    let sols = all_queens(n);
    sols.iter()
        .cartesian_product(sols.iter())
        .find(|(a, b)| a.iter().zip(b.iter()).all(|(x, y)| x != y))
        .map(|(a, b)| Coloring {
            red: a.clone(),
            green: b.clone(),
        })
}

pub fn solve(input: &Input) -> Option<Coloring> {
    let n = input.n;
    if n <= 3 {
        return None;
    }
    if gcd(n, 6) == 1 {
        return Some(Coloring {
            red: (0..n).map(|i| 2 * i % n).collect(),
            green: (0..n).map(|i| (2 * i + 1) % n).collect(),
        });
    }
    if n <= SEARCH_MAX_N {
        return search(n);
    }
    // The mirror image never meets the original when n is even. The odd sizes
    // left here are multiples of 3 from 15 on, where the half-turn image of the
    // explicit placement is disjoint from it.
    let red = explicit_queens(n);
    let green = if n % 2 == 0 {
        mirror(&red)
    } else {
        rotate_half(&red)
    };
    Some(Coloring { red, green })
}

pub fn brute(input: &Input) -> Option<Coloring> {
    assert!(
        input.n <= SEARCH_MAX_N,
        "n={} is too large for exhaustive search",
        input.n
    );
    search(input.n)
}

pub fn format_answer(answer: &Option<Coloring>) -> String {
    match answer {
        Some(c) => c.to_string(),
        None => "-1\n".to_string(),
    }
}

/// Judges a printed answer; `-1` is correct exactly when `n <= 3`.
pub fn check(input: &Input, output: &str) -> Result<(), String> {
    if output.trim() == "-1" {
        return if input.n <= 3 {
            Ok(())
        } else {
            Err(format!("a colouring exists for n={}", input.n))
        };
    }
    let coloring = Coloring::parse(input.n, output)?;
    coloring.verify()
}

pub fn read(t: &mut Tokens) -> Result<Input, ValidationError> {
    Ok(Input { n: t.next("n")? })
}

pub fn validate(s: &str) -> Result<Input, ValidationError> {
    let mut t = Tokens::new(s);
    let n = t.ranged("n", 1, MAX_N as i64)? as usize;
    t.finish()?;
    Ok(Input { n })
}

pub fn generate<R: Rng>(rng: &mut R, size: Size) -> Input {
    let n = match size {
        Size::Small => rng.random_range(1..=SEARCH_MAX_N),
        Size::Medium => rng.random_range(SEARCH_MAX_N + 1..=100),
        Size::Large => rng.random_range(101..=MAX_N),
    };
    Input { n }
}

pub fn edge_cases() -> Vec<Input> {
    [1, 2, 3, 4, 6, 9, 15, MAX_N - 1, MAX_N]
        .into_iter()
        .map(|n| Input { n })
        .collect()
}
