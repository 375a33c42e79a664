//! String-level interface over the problems.
//!
//! Each problem implements [`Puzzle`] on its own types; the blanket [`Task`]
//! impl turns that into text in, text out, so the binaries can work with any
//! problem picked by name. Inputs are read in the contest text format, or as
//! JSON when the text starts with `{`.

use crate::kingdom::Objective;
use crate::testgen::Size;
use crate::validate::{Tokens, ValidationError};
use crate::*;
use anyhow::{Context, Result, bail};
use itertools::Itertools;
use rand_chacha::ChaCha20Rng;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fmt::Display;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Verdict {
    Accepted,
    WrongAnswer(String),
}

impl Verdict {
    pub fn is_accepted(&self) -> bool {
        matches!(self, Verdict::Accepted)
    }
}

/// One problem, on its own input and output types.
pub trait Puzzle {
    type Input: Serialize + DeserializeOwned + Display;
    type Output;

    const NAME: &'static str;

    fn read(t: &mut Tokens) -> Result<Self::Input, ValidationError>;
    fn validate(s: &str) -> Result<Self::Input, ValidationError>;
    /// The size parameter compared against the oracle limit.
    fn size(input: &Self::Input) -> usize;
    fn solve(&self, input: &Self::Input) -> Result<Self::Output>;
    fn brute(&self, input: &Self::Input) -> Result<Self::Output>;
    fn format(output: &Self::Output) -> String;
    fn generate(rng: &mut ChaCha20Rng, size: Size) -> Self::Input;
    fn edge_cases() -> Vec<Self::Input>;

    /// Token-wise comparison against the reference answer.
    fn check(_input: &Self::Input, expected: &str, actual: &str) -> Verdict {
        let e = expected.split_ascii_whitespace().collect_vec();
        let a = actual.split_ascii_whitespace().collect_vec();
        if e.len() != a.len() {
            return Verdict::WrongAnswer(format!(
                "expected {} tokens, got {}",
                e.len(),
                a.len()
            ));
        }
        match e.iter().zip(&a).position(|(x, y)| x != y) {
            Some(i) => Verdict::WrongAnswer(format!(
                "token #{}: expected {}, got {}",
                i + 1,
                e[i],
                a[i]
            )),
            None => Verdict::Accepted,
        }
    }
}

pub trait Task {
    fn name(&self) -> &'static str;
    fn solve(&self, input: &str) -> Result<String>;
    fn brute(&self, input: &str) -> Result<String>;
    fn validate(&self, input: &str) -> Result<(), ValidationError>;
    fn generate(&self, rng: &mut ChaCha20Rng, size: Size) -> String;
    fn edge_cases(&self) -> Vec<String>;
    /// Converts a text-format input to JSON.
    fn to_json(&self, input: &str) -> Result<String>;
    fn check(&self, input: &str, expected: &str, actual: &str) -> Result<Verdict>;
}

fn parse_input<P: Puzzle>(s: &str) -> Result<P::Input> {
    let s = s.trim_start();
    if s.starts_with('{') {
        return serde_json::from_str(s)
            .with_context(|| format!("invalid JSON input for {}", P::NAME));
    }
    let mut t = Tokens::new(s);
    P::read(&mut t).with_context(|| format!("invalid input for {}", P::NAME))
}

impl<P: Puzzle> Task for P {
    fn name(&self) -> &'static str {
        P::NAME
    }
    fn solve(&self, input: &str) -> Result<String> {
        let input = parse_input::<P>(input)?;
        Ok(P::format(&Puzzle::solve(self, &input)?))
    }
    fn brute(&self, input: &str) -> Result<String> {
        let input = parse_input::<P>(input)?;
        if let Some(p) = problems::get_problem(P::NAME)
            && P::size(&input) > p.brute_limit
        {
            bail!(
                "{}: size {} exceeds the oracle limit {}",
                P::NAME,
                P::size(&input),
                p.brute_limit
            );
        }
        Ok(P::format(&Puzzle::brute(self, &input)?))
    }
    /// JSON inputs are rendered back to text and validated as such.
    fn validate(&self, input: &str) -> Result<(), ValidationError> {
        let trimmed = input.trim_start();
        if trimmed.starts_with('{') {
            let parsed: P::Input = serde_json::from_str(trimmed)
                .map_err(|e| ValidationError::Json(e.to_string()))?;
            return <P as Puzzle>::validate(&parsed.to_string()).map(|_| ());
        }
        <P as Puzzle>::validate(input).map(|_| ())
    }
    fn generate(&self, rng: &mut ChaCha20Rng, size: Size) -> String {
        <P as Puzzle>::generate(rng, size).to_string()
    }
    fn edge_cases(&self) -> Vec<String> {
        <P as Puzzle>::edge_cases()
            .iter()
            .map(|i| i.to_string())
            .collect()
    }
    fn to_json(&self, input: &str) -> Result<String> {
        let input = parse_input::<P>(input)?;
        Ok(serde_json::to_string(&input)?)
    }
    fn check(&self, input: &str, expected: &str, actual: &str) -> Result<Verdict> {
        let input = parse_input::<P>(input)?;
        Ok(<P as Puzzle>::check(&input, expected, actual))
    }
}

pub struct Kingdom {
    pub objective: Objective,
}

impl Puzzle for Kingdom {
    type Input = kingdom::Input;
    type Output = i64;
    const NAME: &'static str = "kingdom";

    fn read(t: &mut Tokens) -> Result<Self::Input, ValidationError> {
        kingdom::read(t)
    }
    fn validate(s: &str) -> Result<Self::Input, ValidationError> {
        kingdom::validate(s)
    }
    fn size(input: &Self::Input) -> usize {
        input.cities.len()
    }
    fn solve(&self, input: &Self::Input) -> Result<i64> {
        Ok(kingdom::solve(input, self.objective)?)
    }
    fn brute(&self, input: &Self::Input) -> Result<i64> {
        Ok(kingdom::brute(input, self.objective)?)
    }
    fn format(output: &i64) -> String {
        format!("{}\n", output)
    }
    fn generate(rng: &mut ChaCha20Rng, size: Size) -> Self::Input {
        kingdom::generate(rng, size)
    }
    fn edge_cases() -> Vec<Self::Input> {
        kingdom::edge_cases()
    }
}

pub struct Forbidden;

impl Puzzle for Forbidden {
    type Input = forbidden::Input;
    type Output = modint::ModInt;
    const NAME: &'static str = "forbidden";

    fn read(t: &mut Tokens) -> Result<Self::Input, ValidationError> {
        forbidden::read(t)
    }
    fn validate(s: &str) -> Result<Self::Input, ValidationError> {
        forbidden::validate(s)
    }
    fn size(input: &Self::Input) -> usize {
        input.n()
    }
    fn solve(&self, input: &Self::Input) -> Result<modint::ModInt> {
        Ok(forbidden::solve(input))
    }
    fn brute(&self, input: &Self::Input) -> Result<modint::ModInt> {
        Ok(forbidden::brute(input))
    }
    fn format(output: &modint::ModInt) -> String {
        format!("{}\n", output)
    }
    fn generate(rng: &mut ChaCha20Rng, size: Size) -> Self::Input {
        forbidden::generate(rng, size)
    }
    fn edge_cases() -> Vec<Self::Input> {
        forbidden::edge_cases()
    }
}

pub struct SmallOps;

impl Puzzle for SmallOps {
    type Input = small_ops::Input;
    type Output = Vec<i64>;
    const NAME: &'static str = "small_ops";

    fn read(t: &mut Tokens) -> Result<Self::Input, ValidationError> {
        small_ops::read(t)
    }
    fn validate(s: &str) -> Result<Self::Input, ValidationError> {
        small_ops::validate(s)
    }
    fn size(input: &Self::Input) -> usize {
        input
            .cases
            .iter()
            .map(|c| c.x.max(c.y) as usize)
            .max()
            .unwrap_or(0)
    }
    fn solve(&self, input: &Self::Input) -> Result<Vec<i64>> {
        Ok(small_ops::solve(input))
    }
    fn brute(&self, input: &Self::Input) -> Result<Vec<i64>> {
        Ok(small_ops::brute(input))
    }
    fn format(output: &Vec<i64>) -> String {
        output.iter().map(|v| format!("{}\n", v)).collect()
    }
    fn generate(rng: &mut ChaCha20Rng, size: Size) -> Self::Input {
        small_ops::generate(rng, size)
    }
    fn edge_cases() -> Vec<Self::Input> {
        small_ops::edge_cases()
    }
}

pub struct Harmony;

impl Puzzle for Harmony {
    type Input = harmony::Input;
    type Output = Option<harmony::Coloring>;
    const NAME: &'static str = "harmony";

    fn read(t: &mut Tokens) -> Result<Self::Input, ValidationError> {
        harmony::read(t)
    }
    fn validate(s: &str) -> Result<Self::Input, ValidationError> {
        harmony::validate(s)
    }
    fn size(input: &Self::Input) -> usize {
        input.n
    }
    fn solve(&self, input: &Self::Input) -> Result<Self::Output> {
        Ok(harmony::solve(input))
    }
    fn brute(&self, input: &Self::Input) -> Result<Self::Output> {
        Ok(harmony::brute(input))
    }
    fn format(output: &Self::Output) -> String {
        harmony::format_answer(output)
    }
    fn generate(rng: &mut ChaCha20Rng, size: Size) -> Self::Input {
        harmony::generate(rng, size)
    }
    fn edge_cases() -> Vec<Self::Input> {
        harmony::edge_cases()
    }
    /// Any valid colouring is accepted, so the reference answer only matters
    /// through its `-1`.
    fn check(input: &Self::Input, _expected: &str, actual: &str) -> Verdict {
        match harmony::check(input, actual) {
            Ok(()) => Verdict::Accepted,
            Err(reason) => Verdict::WrongAnswer(reason),
        }
    }
}

pub struct TwoSum;

impl Puzzle for TwoSum {
    type Input = two_sum::Input;
    type Output = Option<(usize, usize)>;
    const NAME: &'static str = "two_sum";

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
        Ok(two_sum::solve(input))
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

/// Settings that only some problems read.
#[derive(Clone, Copy, Debug, Default)]
pub struct TaskOptions {
    pub objective: Objective,
}

pub fn get_task(name: &str, options: TaskOptions) -> Result<Box<dyn Task>> {
    let task: Box<dyn Task> = match name {
        "kingdom" => Box::new(Kingdom {
            objective: options.objective,
        }),
        "forbidden" => Box::new(Forbidden),
        "small_ops" => Box::new(SmallOps),
        "harmony" => Box::new(Harmony),
        "two_sum" => Box::new(TwoSum),
        _ => bail!(
            "Unknown problem: {} (expected one of {})",
            name,
            problems::problem_names().join(", ")
        ),
    };
    Ok(task)
}

/// Judges solver output against a reference answer.
pub struct LocalJudge {
    task: Box<dyn Task>,
}

impl LocalJudge {
    pub fn new(task: Box<dyn Task>) -> Self {
        Self { task }
    }

    pub fn problem_name(&self) -> &str {
        self.task.name()
    }

    /// Computes the reference answer with the fast solver.
    pub fn reference(&self, input: &str) -> Result<String> {
        self.task.solve(input)
    }

    pub fn judge(&self, input: &str, expected: &str, actual: &str) -> Result<bool> {
        match self.task.check(input, expected, actual)? {
            Verdict::Accepted => {
                eprintln!("!log status AC");
                Ok(true)
            }
            Verdict::WrongAnswer(reason) => {
                eprintln!("{}: {}", self.problem_name(), reason);
                eprintln!("!log status WA");
                Ok(false)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testgen::rng_from_seed;

    #[test]
    fn every_registered_problem_has_a_task() {
        for name in problems::problem_names() {
            let task = get_task(name, TaskOptions::default()).unwrap();
            assert_eq!(task.name(), name);
        }
        assert!(get_task("unknown", TaskOptions::default()).is_err());
    }

    #[test]
    fn tasks_agree_with_their_oracles() {
        let mut rng = rng_from_seed(Some(5));
        for name in problems::problem_names() {
            let task = get_task(name, TaskOptions::default()).unwrap();
            for _ in 0..20 {
                let input = task.generate(&mut rng, Size::Small);
                assert_eq!(task.validate(&input), Ok(()), "{}: {}", name, input);
                let expected = task.brute(&input).unwrap();
                let actual = task.solve(&input).unwrap();
                assert_eq!(
                    task.check(&input, &expected, &actual).unwrap(),
                    Verdict::Accepted,
                    "{}: {}",
                    name,
                    input
                );
            }
        }
    }

    #[test]
    fn json_input_is_accepted() {
        let task = get_task("two_sum", TaskOptions::default()).unwrap();
        let json = task.to_json("4\n2 7 11 15\n9\n").unwrap();
        assert_eq!(json, r#"{"nums":[2,7,11,15],"target":9}"#);
        assert_eq!(task.solve(&json).unwrap(), "0 1\n");
    }

    #[test]
    fn json_input_is_validated_like_text() {
        let task = get_task("two_sum", TaskOptions::default()).unwrap();
        let json = task.to_json("4\n2 7 11 15\n9\n").unwrap();
        assert_eq!(task.validate(&json), Ok(()));
        assert!(matches!(
            task.validate(r#"{"nums":[5],"target":5}"#),
            Err(ValidationError::OutOfRange { .. })
        ));
        assert!(matches!(
            task.validate(r#"{"nums":[1,2]}"#),
            Err(ValidationError::Json(_))
        ));
        let harmony = get_task("harmony", TaskOptions::default()).unwrap();
        assert_eq!(harmony.validate(r#" {"n":1000}"#), Ok(()));
        assert!(harmony.validate(r#"{"n":1001}"#).is_err());
    }

    #[test]
    fn objective_is_forwarded() {
        let input = "4\n1 2 3 4\n";
        let min = get_task("kingdom", TaskOptions::default()).unwrap();
        let max = get_task(
            "kingdom",
            TaskOptions {
                objective: Objective::Max,
            },
        )
        .unwrap();
        assert_eq!(min.solve(input).unwrap(), "0\n");
        assert_eq!(max.solve(input).unwrap(), "4\n");
        assert!(min.solve("3\n1 2 3\n").is_err());
    }

    #[test]
    fn oracle_refuses_large_inputs() {
        let task = get_task("forbidden", TaskOptions::default()).unwrap();
        assert!(task.brute("9\n0 0 0 0 0 0 0 0 0\n").is_err());
        assert_eq!(task.brute("2\n1 2\n").unwrap(), "1\n");
    }

    #[test]
    fn default_check_compares_tokens() {
        let input = "2\n1 1\n2\n";
        let task = get_task("two_sum", TaskOptions::default()).unwrap();
        assert!(task.check(input, "0 1\n", "0  1").unwrap().is_accepted());
        assert!(!task.check(input, "0 1\n", "1 0").unwrap().is_accepted());
        assert!(!task.check(input, "0 1\n", "-1").unwrap().is_accepted());
        let judge = LocalJudge::new(task);
        assert!(judge.judge(input, "0 1", "0 1").unwrap());
    }

    #[test]
    fn harmony_accepts_any_valid_colouring() {
        let task = get_task("harmony", TaskOptions::default()).unwrap();
        let brute = task.brute("5\n").unwrap();
        let fast = task.solve("5\n").unwrap();
        assert!(task.check("5\n", &brute, &fast).unwrap().is_accepted());
        assert!(!task.check("5\n", &brute, "-1").unwrap().is_accepted());
    }
}
