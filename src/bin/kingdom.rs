use clap::Parser;
use proconio::input;
use puzzles::kingdom::{self, Input, Objective};

#[derive(Parser)]
struct Cli {
    /// Report the most (min) or the least (max) balanced division.
    #[clap(long, value_enum, default_value_t = Objective::Min)]
    objective: Objective,
}

fn main() -> anyhow::Result<()> {
    let args = Cli::parse();
    input! {
        n: usize,
        cities: [i64; n],
    }
    let answer = kingdom::solve(&Input { cities }, args.objective)?;
    println!("{}", answer);
    Ok(())
}
