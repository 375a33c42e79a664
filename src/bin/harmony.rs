use proconio::input;
use puzzles::harmony::{self, Input};

fn main() {
    input! {
        n: usize,
    }
    print!("{}", harmony::format_answer(&harmony::solve(&Input { n })));
}
