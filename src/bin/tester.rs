use anyhow::Context;
use clap::Parser;
use puzzles::judge::{LocalJudge, TaskOptions, get_task};
use puzzles::kingdom::Objective;

/// Tester tool for running a command with input/output redirection and
/// judging what it prints.
#[derive(Parser, Debug)]
struct Cli {
    problem: String,
    /// The shell command to run (e.g., the solution binary)
    cmd: String,
    /// Path to the input file
    input: String,
    /// Path to the output file (will be created)
    output: String,
    /// Reference answer. Computed with the fast solver if omitted.
    #[clap(long, short = 'e')]
    expected: Option<String>,
    #[clap(long, value_enum, default_value_t = Objective::Min)]
    objective: Objective,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let judge = LocalJudge::new(get_task(
        &cli.problem,
        TaskOptions {
            objective: cli.objective,
        },
    )?);
    let input_file =
        std::fs::File::open(&cli.input).with_context(|| format!("No such input: {}", cli.input))?;
    let output_file = std::fs::File::create(&cli.output)
        .with_context(|| format!("Cannot create {}", cli.output))?;
    let stime = std::time::Instant::now();
    let status = std::process::Command::new("sh")
        .arg("-c")
        .arg(&cli.cmd)
        .stdin(std::process::Stdio::from(input_file))
        .stdout(std::process::Stdio::from(output_file))
        .stderr(std::process::Stdio::inherit())
        .status()
        .with_context(|| format!("Failed to execute command: {}", cli.cmd))?;
    eprintln!("!log time {:.3}", stime.elapsed().as_secs_f64());
    if !status.success() {
        if status.code() == Some(124) {
            eprintln!("!log status TLE");
        } else {
            eprintln!("!log status RE");
        }
        std::process::exit(1);
    }
    let input = std::fs::read_to_string(&cli.input)?;
    let actual = std::fs::read_to_string(&cli.output)?;
    let expected = match &cli.expected {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("No such answer: {}", path))?
        }
        None => judge.reference(&input)?,
    };
    if !judge.judge(&input, &expected, &actual)? {
        std::process::exit(1);
    }
    Ok(())
}
