//! # Input validation
//!
//! Validators read the whole input token by token and stop at the first
//! violation. The error names the offending value and, where it applies, the
//! test case it belongs to, so a bad generator can be fixed without a
//! debugger.

use std::str::{FromStr, SplitAsciiWhitespace};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("could not read {what}")]
    Missing { what: String },
    #[error("could not parse {what} from {token:?}")]
    Malformed { what: String, token: String },
    #[error("{what}={value} is out of the valid range [{lo}, {hi}]")]
    OutOfRange {
        what: String,
        value: i64,
        lo: i64,
        hi: i64,
    },
    #[error("{0}")]
    Constraint(String),
    #[error("extra data found at the end of the input")]
    TrailingData,
    #[error("invalid JSON input: {0}")]
    Json(String),
}

/// Whitespace-separated token reader with typed errors.
pub struct Tokens<'a> {
    it: SplitAsciiWhitespace<'a>,
}

impl<'a> Tokens<'a> {
    pub fn new(s: &'a str) -> Self {
        Self {
            it: s.split_ascii_whitespace(),
        }
    }

    pub fn next<T: FromStr>(&mut self, what: &str) -> Result<T, ValidationError> {
        let token = self.it.next().ok_or_else(|| ValidationError::Missing {
            what: what.to_string(),
        })?;
        token.parse().map_err(|_| ValidationError::Malformed {
            what: what.to_string(),
            token: token.to_string(),
        })
    }

    /// Reads an integer and checks `lo <= value <= hi`.
    pub fn ranged(&mut self, what: &str, lo: i64, hi: i64) -> Result<i64, ValidationError> {
        let value: i64 = self.next(what)?;
        check_range(what, value, lo, hi)?;
        Ok(value)
    }

    pub fn finish(mut self) -> Result<(), ValidationError> {
        match self.it.next() {
            Some(_) => Err(ValidationError::TrailingData),
            None => Ok(()),
        }
    }
}

pub fn check_range(what: &str, value: i64, lo: i64, hi: i64) -> Result<(), ValidationError> {
    if value < lo || value > hi {
        return Err(ValidationError::OutOfRange {
            what: what.to_string(),
            value,
            lo,
            hi,
        });
    }
    Ok(())
}

/// Prints the verdict in the usual `Validation PASSED/FAILED` form and
/// returns whether the input passed.
pub fn report(result: &Result<(), ValidationError>) -> bool {
    match result {
        Ok(()) => {
            println!("Validation PASSED: Input format is correct.");
            true
        }
        Err(e) => {
            println!("Validation FAILED: {}.", e);
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_and_ranges_tokens() {
        let mut t = Tokens::new("3  -7\n x");
        assert_eq!(t.ranged("n", 1, 5), Ok(3));
        assert_eq!(
            t.ranged("a", 0, 10),
            Err(ValidationError::OutOfRange {
                what: "a".to_string(),
                value: -7,
                lo: 0,
                hi: 10
            })
        );
        assert!(matches!(
            t.next::<i64>("b"),
            Err(ValidationError::Malformed { .. })
        ));
        assert!(matches!(
            t.next::<i64>("c"),
            Err(ValidationError::Missing { .. })
        ));
    }

    #[test]
    fn trailing_data_is_rejected() {
        let mut t = Tokens::new("1 2");
        let _: i64 = t.next("a").unwrap();
        assert_eq!(t.finish(), Err(ValidationError::TrailingData));
        assert_eq!(Tokens::new("  \n").finish(), Ok(()));
    }

    #[test]
    fn error_messages_name_the_value() {
        let e = ValidationError::OutOfRange {
            what: "test case #2: x".to_string(),
            value: 0,
            lo: 1,
            hi: 1_000_000,
        };
        assert_eq!(
            e.to_string(),
            "test case #2: x=0 is out of the valid range [1, 1000000]"
        );
    }
}
