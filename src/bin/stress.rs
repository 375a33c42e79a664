use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use puzzles::judge::{TaskOptions, get_task};
use puzzles::kingdom::Objective;
use puzzles::stress;
use puzzles::testgen::{self, Size};

/// Compares the fast solver with the oracle on random inputs.
#[derive(Parser)]
struct Cli {
    problem: String,
    #[clap(long, short = 'n', default_value_t = 1000)]
    iterations: usize,
    #[clap(long, short = 's')]
    seed: Option<u64>,
    #[clap(long, value_enum, default_value_t = Size::Small)]
    size: Size,
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
    let mut rng = testgen::rng_from_seed(args.seed);
    let pb = ProgressBar::new(args.iterations as u64);
    pb.set_style(ProgressStyle::with_template(
        "{spinner} [{elapsed_precise}] {bar:40} {pos}/{len} {msg}",
    )?);
    pb.set_message(args.problem.clone());
    let mismatch = stress::run(task.as_ref(), &mut rng, args.size, args.iterations, |_| {
        pb.inc(1)
    })?;
    pb.finish_and_clear();
    match mismatch {
        None => {
            eprintln!("{}: {} rounds OK", args.problem, args.iterations);
            eprintln!("!log status AC");
            Ok(())
        }
        Some(m) => {
            eprintln!("mismatch at round {}: {}", m.iteration, m.reason);
            eprintln!("--- input ---\n{}", m.input.trim_end());
            eprintln!("--- oracle ---\n{}", m.expected.trim_end());
            eprintln!("--- solver ---\n{}", m.actual.trim_end());
            eprintln!("!log status WA");
            std::process::exit(1);
        }
    }
}
