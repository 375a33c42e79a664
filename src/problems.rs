use once_cell::sync::Lazy;
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Problem {
    pub problem_name: &'static str,
    pub description: &'static str,
    /// Inputs whose size parameter exceeds this are not given to the oracle.
    pub brute_limit: usize,
}

const PROBLEMS_DATA: &[Problem] = &[
    Problem {
        problem_name: "kingdom",
        description: "split a cycle of cities into two equal arcs",
        brute_limit: 5000,
    },
    Problem {
        problem_name: "forbidden",
        description: "count permutations fixing no forbidden interval",
        brute_limit: crate::forbidden::BRUTE_MAX_N,
    },
    Problem {
        problem_name: "small_ops",
        description: "fewest bounded multiplications and divisions from x to y",
        brute_limit: crate::small_ops::MAX_VALUE as usize,
    },
    Problem {
        problem_name: "harmony",
        description: "two disjoint queens placements on an n x n grid",
        brute_limit: crate::harmony::SEARCH_MAX_N,
    },
    Problem {
        problem_name: "two_sum",
        description: "first pair of indices summing to a target",
        brute_limit: 5000,
    },
];

pub fn all_problems() -> &'static [Problem] {
    PROBLEMS_DATA
}

static PROBLEM_MAP: Lazy<HashMap<&'static str, &'static Problem>> = Lazy::new(|| {
    let mut m = HashMap::new();
    for p in PROBLEMS_DATA.iter() {
        m.insert(p.problem_name, p);
    }
    m
});

pub fn get_problem(name: &str) -> Option<&'static Problem> {
    PROBLEM_MAP.get(name).copied()
}

pub fn problem_names() -> Vec<&'static str> {
    PROBLEMS_DATA.iter().map(|p| p.problem_name).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_problems_contains_expected_entries() {
        assert_eq!(
            problem_names(),
            vec!["kingdom", "forbidden", "small_ops", "harmony", "two_sum"]
        );
        assert!(all_problems().iter().all(|p| p.brute_limit > 0));
    }

    #[test]
    fn get_problem_returns_expected() {
        let p = get_problem("forbidden").expect("forbidden should exist");
        assert_eq!(p.brute_limit, 8);
        assert!(get_problem("unknown").is_none());
    }
}
