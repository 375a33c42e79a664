//! Randomized cross-checking of a fast solver against its oracle.

use crate::judge::{Task, Verdict};
use crate::testgen::Size;
use anyhow::Result;
use rand_chacha::ChaCha20Rng;

/// The first input on which the solver and the oracle disagree.
#[derive(Clone, Debug)]
pub struct Mismatch {
    pub iteration: usize,
    pub input: String,
    pub expected: String,
    pub actual: String,
    pub reason: String,
}

/// Runs up to `iterations` rounds and stops at the first disagreement.
/// `on_round` is called after every agreeing round.
pub fn run(
    task: &dyn Task,
    rng: &mut ChaCha20Rng,
    size: Size,
    iterations: usize,
    mut on_round: impl FnMut(usize),
) -> Result<Option<Mismatch>> {
    for iteration in 0..iterations {
        let input = task.generate(rng, size);
        let expected = task.brute(&input)?;
        let actual = task.solve(&input)?;
        if let Verdict::WrongAnswer(reason) = task.check(&input, &expected, &actual)? {
            return Ok(Some(Mismatch {
                iteration,
                input,
                expected,
                actual,
                reason,
            }));
        }
        on_round(iteration);
    }
    Ok(None)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::judge::{Puzzle, TaskOptions, get_task};
    use crate::testgen::rng_from_seed;
    use crate::two_sum;
    use crate::validate::{Tokens, ValidationError};

    /// Reports the last pair instead of the first.
    struct LastPair;

    impl Puzzle for LastPair {
        type Input = two_sum::Input;
        type Output = Option<(usize, usize)>;
        const NAME: &'static str = "last_pair";

        fn read(t: &mut Tokens) -> Result<Self::Input, ValidationError> {
            two_sum::read(t)
        }
        fn validate(s: &str) -> Result<Self::Input, ValidationError> {
            two_sum::validate(s)
        }
        fn size(input: &Self::Input) -> usize {
            input.nums.len()
        }
        fn solve(&self, input: &Self::Input) -> Result<Self::Output> {
            let a = &input.nums;
            let mut last = None;
            for j in 0..a.len() {
                for i in 0..j {
                    if a[i] + a[j] == input.target {
                        last = Some((i, j));
                    }
                }
            }
            Ok(last)
        }
        fn brute(&self, input: &Self::Input) -> Result<Self::Output> {
            Ok(two_sum::brute(input))
        }
        fn format(output: &Self::Output) -> String {
            two_sum::format_answer(*output)
        }
        fn generate(rng: &mut ChaCha20Rng, size: Size) -> Self::Input {
            two_sum::generate(rng, size)
        }
        fn edge_cases() -> Vec<Self::Input> {
            two_sum::edge_cases()
        }
    }

    #[test]
    fn correct_solvers_survive() {
        let mut rng = rng_from_seed(Some(1));
        for name in crate::problems::problem_names() {
            let task = get_task(name, TaskOptions::default()).unwrap();
            let mut rounds = 0;
            let r = run(task.as_ref(), &mut rng, Size::Small, 30, |_| rounds += 1).unwrap();
            assert!(r.is_none(), "{}: {:?}", name, r);
            assert_eq!(rounds, 30);
        }
    }

    #[test]
    fn wrong_solver_is_caught() {
        let mut rng = rng_from_seed(Some(1));
        let mismatch = run(&LastPair, &mut rng, Size::Small, 1000, |_| {})
            .unwrap()
            .expect("a multi-pair input should show up");
        assert_ne!(mismatch.expected, mismatch.actual);
        assert!(mismatch.reason.starts_with("token #"));
    }
}
