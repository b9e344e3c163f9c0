use std::error::Error;
use std::io::{self, Read};
use std::path::PathBuf;

use clap::Parser;
use crossterm::style::Stylize;
use rand::{rngs::StdRng, SeedableRng};
use slider_puzzle::{Board, Solver, SolverConfig};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "slider-puzzle")]
#[command(about = "Find a shortest solution to an n-by-n sliding block puzzle")]
struct Args {
    /// Puzzle file: `n` followed by n*n tiles, 0 for the blank. Reads stdin
    /// when omitted or `-`.
    puzzle: Option<PathBuf>,

    /// Solve a random solvable board of this dimension instead of reading one.
    #[arg(long, value_name = "N", conflicts_with = "puzzle")]
    random: Option<usize>,

    /// Seed for --random.
    #[arg(long, requires = "random")]
    seed: Option<u64>,

    /// Abort after this many node expansions.
    #[arg(long, value_name = "K")]
    max_expansions: Option<usize>,

    /// Never expand the same board twice within a search.
    #[arg(long)]
    closed_set: bool,

    /// Print only the move count.
    #[arg(long)]
    moves_only: bool,

    /// More log output (repeatable).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn load(args: &Args) -> Result<Board, Box<dyn Error>> {
    if let Some(size) = args.random {
        let mut rng = match args.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        return Ok(Board::shuffled(size, &mut rng)?);
    }

    let text = match args.puzzle.as_deref() {
        Some(path) if path.as_os_str() != "-" => std::fs::read_to_string(path)?,
        _ => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };
    Ok(text.parse()?)
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();
    init_logging(args.verbose);

    let initial = load(&args)?;
    let config = SolverConfig {
        max_expansions: args.max_expansions,
        closed_set: args.closed_set,
    };
    let solver = Solver::with_config(initial, config)?;

    print!("{}", render(&solver, args.moves_only));
    Ok(())
}

/// Report text for a finished search: the move count alone, or a heading
/// followed by every board of the solution.
fn render(solver: &Solver, moves_only: bool) -> String {
    if moves_only {
        return format!("{}\n", solver.moves());
    }

    let Some(boards) = solver.solution() else {
        return format!("{}\n", "No solution possible".red().bold());
    };

    let heading = format!("Minimum number of moves = {}", solver.moves());
    let mut lines = vec![heading.green().bold().to_string()];
    if let Some(directions) = solver.directions().filter(|d| !d.is_empty()) {
        let names: Vec<&str> = directions.iter().map(|d| d.name()).collect();
        lines.push(format!("Blank moves: {}", names.join(" ")).dim().to_string());
    }
    lines.extend(boards.iter().map(ToString::to_string));
    lines.join("\n") + "\n"
}
