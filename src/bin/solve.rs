use anyhow::Context;
use clap::Parser;
use puzzles::judge::{TaskOptions, get_task};
use puzzles::kingdom::Objective;
use std::io::Read;

/// Runs the solver of any problem on one input.
#[derive(Parser)]
struct Cli {
    problem: String,
    /// Input file. Reads stdin if omitted.
    #[clap(long, short = 'i')]
    input: Option<String>,
    /// Use the brute-force oracle instead of the fast solver.
    #[clap(long, default_value_t = false)]
    brute: bool,
    #[clap(long, value_enum, default_value_t = Objective::Min)]
    objective: Objective,
}

fn main() -> anyhow::Result<()> {
    let args = Cli::parse();
    let task = get_task(
        &args.problem,
        TaskOptions {
            objective: args.objective,
        },
    )?;
    let input = match &args.input {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("No such input: {}", path))?
        }
        None => {
            let mut s = String::new();
            std::io::stdin().read_to_string(&mut s)?;
            s
        }
    };
    let stime = std::time::Instant::now();
    let output = if args.brute {
        task.brute(&input)?
    } else {
        task.solve(&input)?
    };
    eprintln!("!log time {:.3}", stime.elapsed().as_secs_f64());
    print!("{}", output);
    Ok(())
}
