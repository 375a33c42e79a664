use itertools::Itertools;
use proconio::input;
use puzzles::small_ops::{self, Case};

fn main() {
    input! {
        t: usize,
        cases: [(u32, u32, u32); t],
    }
    let answers = cases
        .into_iter()
        .map(|(x, y, k)| small_ops::solve_case(Case { x, y, k }))
        .join("\n");
    println!("{}", answers);
}
