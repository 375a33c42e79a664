// # Puzzles: offline workbench for small contest problems
//
// Every problem lives in its own module and exposes the same three pieces: a
// fast solver, a brute-force oracle and a seeded generator. The `judge`
// module wraps them behind a string interface so that the binaries under
// `src/bin` can drive any problem by name.

/// A trait for conveniently updating a value to its minimum or maximum.
pub trait SetMinMax {
    /// If `v` is less than `self`, updates `self` to `v` and returns `true`.
    /// Otherwise, returns `false`.
    fn setmin(&mut self, v: Self) -> bool;
    /// If `v` is greater than `self`, updates `self` to `v` and returns `true`.
    /// Otherwise, returns `false`.
    fn setmax(&mut self, v: Self) -> bool;
}
impl<T> SetMinMax for T
where
    T: PartialOrd,
{
    fn setmin(&mut self, v: T) -> bool {
        *self > v && {
            *self = v;
            true
        }
    }
    fn setmax(&mut self, v: T) -> bool {
        *self < v && {
            *self = v;
            true
        }
    }
}

/// A macro for convenient initialization of vectors, including nested vectors for multi-dimensional arrays.
///
/// # Examples
///
/// ```
/// use puzzles::mat;
/// // A simple vector
/// let v1 = mat![1, 2, 3];
///
/// // A 2x3 matrix initialized with zeros
/// let m1 = mat![0; 2; 3];
/// assert_eq!(m1, vec![vec![0, 0, 0], vec![0, 0, 0]]);
/// ```
#[macro_export]
macro_rules! mat {
    ($($e:expr),*) => { vec![$($e),*] };
    ($($e:expr,)*) => { vec![$($e),*] };
    ($e:expr; $d:expr) => { vec![$e; $d] };
    ($e:expr; $d:expr $(; $ds:expr)+) => { vec![mat![$e $(; $ds)*]; $d] };
}

/// Names, oracle limits and descriptions of the problems.
pub mod problems;

/// String-level interface over every problem (solve, oracle, validate, generate, check).
pub mod judge;

/// Strict input validators.
pub mod validate;

/// Shared pieces of the test-case generators.
pub mod testgen;

/// Runs a closure with a deadline.
pub mod timeout;

/// Randomized cross-checking of fast solvers against their oracles.
pub mod stress;

/// Arithmetic modulo 1_000_000_007.
pub mod modint;

pub mod forbidden;
pub mod harmony;
pub mod kingdom;
pub mod small_ops;
pub mod two_sum;

/// SVG rendering of harmony colourings. Enabled with the `svg` feature.
#[cfg(feature = "svg")]
pub mod svg;
