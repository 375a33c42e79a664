use anyhow::Context;
use clap::{Parser, ValueEnum};
use puzzles::judge::{TaskOptions, get_task};
use puzzles::kingdom::Objective;
use puzzles::testgen::{self, Size};
use std::path::PathBuf;
use std::time::Duration;

/// Writes numbered test cases (`N.in`, `N.out`) for a problem.
#[derive(Parser)]
struct Cli {
    problem: String,
    /// Number of random cases.
    #[clap(long, short = 'c', default_value_t = 10)]
    count: usize,
    #[clap(long, short = 's')]
    seed: Option<u64>,
    #[clap(long, value_enum, default_value_t = Size::Small)]
    size: Size,
    /// Output directory. Defaults to `tests/<problem>`.
    #[clap(long, short = 'd')]
    dir: Option<PathBuf>,
    /// Also write the hand-made edge cases, before the random ones.
    #[clap(long, default_value_t = false)]
    edge: bool,
    #[clap(long, short = 'f', value_enum, default_value_t = Format::Text)]
    format: Format,
    /// Time limit for the oracle, after which the fast solver is used.
    #[clap(long, default_value_t = 2000)]
    timeout_ms: u64,
    /// Only write inputs.
    #[clap(long, default_value_t = false)]
    no_output: bool,
    #[clap(long, value_enum, default_value_t = Objective::Min)]
    objective: Objective,
}

#[derive(Default, Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Format {
    #[default]
    Text,
    Json,
}

fn main() -> anyhow::Result<()> {
    let args = Cli::parse();
    let options = TaskOptions {
        objective: args.objective,
    };
    let task = get_task(&args.problem, options)?;
    let dir = args
        .dir
        .clone()
        .unwrap_or_else(|| PathBuf::from("tests").join(&args.problem));
    let mut rng = testgen::rng_from_seed(args.seed);

    let mut inputs = vec![];
    if args.edge {
        inputs.extend(task.edge_cases());
    }
    for _ in 0..args.count {
        inputs.push(task.generate(&mut rng, args.size));
    }

    let mut num = testgen::next_file_number(&dir);
    for input in &inputs {
        debug_assert_eq!(task.validate(input), Ok(()));
        eprint!("{}: ", testgen::input_path(&dir, num).display());
        let output = if args.no_output {
            eprintln!("[input only]");
            None
        } else {
            let limit = Duration::from_millis(args.timeout_ms);
            let (output, _) = testgen::expected_output(&args.problem, options, input, limit)
                .with_context(|| format!("Failed to solve case {}", num))?;
            Some(output)
        };
        let text = match args.format {
            Format::Text => input.clone(),
            Format::Json => task.to_json(input)?,
        };
        testgen::write_case(&dir, num, &text, output.as_deref())?;
        num += 1;
    }
    eprintln!("wrote {} cases to {}", inputs.len(), dir.display());
    Ok(())
}
