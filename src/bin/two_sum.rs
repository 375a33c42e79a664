use proconio::input;
use puzzles::two_sum::{self, Input};

fn main() {
    input! {
        n: usize,
        nums: [i64; n],
        target: i64,
    }
    print!("{}", two_sum::format_answer(two_sum::solve(&Input { nums, target })));
}
