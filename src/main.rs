use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::{Duration, Instant};

use crossfill::errors::LoadError;
use crossfill::render;
use crossfill::solver::{SolveOptions, SolveOutcome, Solver};
use crossfill::structure::Structure;
use crossfill::word_list::WordList;

/// Fill a crossword grid from a word list
#[derive(Parser, Debug)]
#[command(author, version = concat!(env!("CARGO_PKG_VERSION"), " (", env!("GIT_HASH"), ")"), about, long_about = None)]
struct Cli {
    /// Grid description: one line per row, '_' for fillable cells
    structure: PathBuf,

    /// Word list: one word per line
    words: PathBuf,

    /// Also write the filled grid to this file
    output: Option<PathBuf>,

    /// Give up after this many seconds
    #[arg(short = 't', long)]
    time_limit: Option<f64>,

    /// Re-run arc consistency after every assignment during the search
    #[arg(short = 'f', long)]
    forward_checking: bool,

    /// Enable debug logging (also enabled by the CROSSFILL_DEBUG environment variable)
    #[arg(short, long)]
    debug: bool,
}

/// Entry point of the crossfill CLI.
///
/// Delegates to [`try_main`], catching any errors and printing them
/// in a user-friendly way before exiting with code 1.
fn main() -> ExitCode {
    let cli = Cli::parse();

    // Set up logging
    let debug_enabled = cli.debug || std::env::var("CROSSFILL_DEBUG").is_ok();
    crossfill::log::init_logger(debug_enabled);

    if let Err(e) = try_main(&cli) {
        // Print the error message to stderr, with detailed formatting if it's a LoadError
        if let Some(load_err) = e.downcast_ref::<LoadError>() {
            eprintln!("Error: {}", load_err.display_detailed());
        } else {
            eprintln!("Error: {e}");
        }
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

/// Convert the `--time-limit` value (seconds) to a `Duration`.
///
/// Negative, NaN, infinite and out-of-range values are rejected.
fn parse_time_limit(secs: f64) -> Result<Duration, String> {
    Duration::try_from_secs_f64(secs).map_err(|e| format!("invalid time limit {secs}: {e}"))
}

/// Core application logic for the crossfill CLI.
///
/// Steps:
/// 1. Load the grid description and the word list.
/// 2. Solve.
/// 3. Print the filled grid on stdout (or "No solution."), and save it if asked.
/// 4. Print timings and search statistics on stderr.
fn try_main(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    // 1. Load inputs
    let t_load = Instant::now();
    let structure = Structure::load_from_path(&cli.structure)?;
    let word_list = WordList::load_from_path(&cli.words)?;
    let load_secs = t_load.elapsed().as_secs_f64();

    log::debug!("Grid {}x{}:\n{structure}", structure.width(), structure.height());

    let time_limit = cli.time_limit.map(parse_time_limit).transpose()?;
    let options = SolveOptions { forward_checking: cli.forward_checking, time_limit };

    // 2. Solve
    let t_solve = Instant::now();
    let report = Solver::new(&structure, word_list.words.iter().cloned())
        .with_options(options)
        .run();
    let solve_secs = t_solve.elapsed().as_secs_f64();

    // 3. Print the result
    match &report.outcome {
        SolveOutcome::Solved(assignment) => {
            print!("{}", render::render_grid(&structure, assignment));
            if let Some(output) = &cli.output {
                render::save_grid(&structure, assignment, output)?;
                eprintln!("Saved grid to {}", output.display());
            }
        }
        SolveOutcome::Unsatisfiable => println!("No solution."),
        SolveOutcome::TimedOut { elapsed } => {
            println!("No solution found.");
            eprintln!("⚠️  Timed out after {:.1}s", elapsed.as_secs_f64());
        }
    }

    // 4. Diagnostics
    eprintln!(
        "Loaded {} slots and {} words in {:.3}s; solved in {:.3}s ({} nodes, {} backtracks).",
        structure.slots().len(),
        word_list.len(),
        load_secs,
        solve_secs,
        report.stats.nodes,
        report.stats.backtracks
    );

    Ok(())
}
