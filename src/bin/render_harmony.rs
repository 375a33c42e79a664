use anyhow::bail;
use clap::Parser;
use puzzles::harmony::{self, Coloring, Input};
use puzzles::svg;
use std::fs;
use std::io::{Read, Write};

/// Renders a harmony colouring as SVG. Reads the grid rows from stdin unless
/// `-n` is given, in which case the solver's colouring is drawn.
#[derive(Parser)]
struct Cli {
    #[clap(long, short = 'n')]
    n: Option<usize>,
    /// Path to output file. If not provided, outputs to stdout.
    #[clap(long, short = 'o', default_value = "")]
    output: String,
    /// Draw the diagonals through the red lights.
    #[clap(long, short = 'd', default_value_t = false)]
    diagonals: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Cli::parse();
    let coloring = match args.n {
        Some(n) => match harmony::solve(&Input { n }) {
            Some(c) => c,
            None => bail!("No colouring exists for n={}", n),
        },
        None => {
            let mut text = String::new();
            std::io::stdin().read_to_string(&mut text)?;
            let n = text.split_ascii_whitespace().count();
            Coloring::parse(n, &text).map_err(anyhow::Error::msg)?
        }
    };
    if let Err(reason) = coloring.verify() {
        eprintln!("warning: {}", reason);
    }
    let mut w: Box<dyn Write> = if args.output.is_empty() {
        Box::new(std::io::stdout())
    } else {
        Box::new(fs::File::create(&args.output)?)
    };
    w.write_all(svg::render_grid(&coloring, args.diagonals).as_bytes())?;
    Ok(())
}
