use proconio::input;
use puzzles::forbidden::{self, Input};

fn main() {
    input! {
        n: usize,
        m: [usize; n],
    }
    println!("{}", forbidden::solve(&Input { m }));
}
