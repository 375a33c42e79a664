use clap::Parser;
use puzzles::judge::{TaskOptions, get_task};
use puzzles::validate;
use std::io::Read;

/// Checks that stdin is a well-formed input of the given problem.
#[derive(Parser)]
struct Cli {
    problem: String,
}

fn main() -> anyhow::Result<()> {
    let args = Cli::parse();
    let task = get_task(&args.problem, TaskOptions::default())?;
    let mut input = String::new();
    std::io::stdin().read_to_string(&mut input)?;
    if !validate::report(&task.validate(&input)) {
        std::process::exit(1);
    }
    Ok(())
}
