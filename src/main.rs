use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::Instant;

use clap::Parser;

use ringbox::catalog::WordCatalog;
use ringbox::errors::PuzzleError;
use ringbox::puzzle::{Puzzle, PuzzleConfig};
use ringbox::solver::{self, Solution, SolverError};
use ringbox::word_list::WordList;

/// Ringbox letter-ring puzzle solver
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Puzzle letters, with each wall's letters typed consecutively
    /// (e.g. "abcdefghijkl" for four walls of three)
    letters: String,

    /// Number of words per solution
    #[arg(short, long)]
    num_words: usize,

    /// Path to the dictionary file (one word per line)
    #[arg(short, long, default_value = "dictionary.txt")]
    dictionary: String,

    /// Write solutions to this file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Number of walls the letters are split into
    #[arg(long, default_value_t = 4)]
    walls: usize,

    /// Shortest admissible word length
    #[arg(long, default_value_t = 3)]
    min_word_length: usize,
}

/// Entry point of the Ringbox CLI solver.
///
/// Delegates to [`try_main`], catching any errors and printing them
/// in a user-friendly way before exiting with code 1.
fn main() -> ExitCode {
    // Set up logging
    let debug_enabled = std::env::var("RINGBOX_DEBUG").is_ok();
    ringbox::log::init_logger(debug_enabled);

    if let Err(e) = try_main() {
        // Print the error message to stderr, with detailed formatting for
        // our own error types
        if let Some(solver_err) = e.downcast_ref::<SolverError>() {
            eprintln!("Error: {}", solver_err.display_detailed());
        } else if let Some(puzzle_err) = e.downcast_ref::<PuzzleError>() {
            eprintln!("Error: {}", puzzle_err.display_detailed());
        } else {
            eprintln!("Error: {e}");
        }
        // Exit explicitly with a nonzero code so scripts can detect failure
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

/// Core application logic for the Ringbox CLI solver.
///
/// Steps:
/// 1. Parse CLI arguments with Clap.
/// 2. Build the puzzle from the letter string.
/// 3. Load the dictionary from disk and filter it into the word catalog.
/// 4. Enumerate all solutions for the requested word count.
/// 5. Write solutions to the output file, or print them on stdout.
///
/// Returns `Ok(())` on success or an error (e.g., invalid letters, missing
/// dictionary file, out-of-range word count) which bubbles up to [`main`].
fn try_main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config = PuzzleConfig {
        wall_count: cli.walls,
        min_word_length: cli.min_word_length,
    };
    let puzzle = Puzzle::with_config(&cli.letters, config)?;

    let t_load = Instant::now();
    let word_list = WordList::load_from_path(&cli.dictionary)?;
    let catalog = WordCatalog::filter_and_group(word_list.words.iter().map(String::as_str), &puzzle);
    log::info!(
        "loaded {} dictionary words ({} admissible) in {:.2}s",
        word_list.words.len(),
        catalog.len(),
        t_load.elapsed().as_secs_f64()
    );

    let t_solve = Instant::now();
    let mut solutions = solver::solve_puzzle(&puzzle, &catalog, cli.num_words)?;
    let solve_secs = t_solve.elapsed().as_secs_f64();

    // Branches finish in no particular order; sort for stable output.
    solutions.sort_unstable();

    match &cli.output {
        Some(path) => write_solutions(path, &solutions)?,
        None => {
            for solution in &solutions {
                println!("{solution}");
            }
        }
    }

    eprintln!(
        "{} solution(s) found in {:.2}s",
        solutions.len(),
        solve_secs
    );

    Ok(())
}

/// Writes solutions to a file, one per line, words separated by spaces.
fn write_solutions(path: &Path, solutions: &[Solution]) -> std::io::Result<()> {
    let mut out = BufWriter::new(File::create(path)?);
    for solution in solutions {
        writeln!(out, "{solution}")?;
    }
    out.flush()
}
