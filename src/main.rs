//! Nonogram Solver
//!
//! Solves nonogram (picross) puzzles described in `.non` files: per-row and
//! per-column block lengths over a binary grid. Prints the solved grid, or
//! exits nonzero when the constraints admit no solution.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};

use crosshatch::{line, parser, solver};

/// Solves nonogram puzzles from `.non` files.
#[derive(Parser)]
#[command(name = "crosshatch")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Solve a puzzle and print the solved grid.
    Solve { file: PathBuf },
    /// Print puzzle dimensions and per-line candidate counts.
    Info { file: PathBuf },
}

fn main() -> ExitCode {
    match Cli::parse().command {
        Command::Solve { file } => run_solve(&file),
        Command::Info { file } => run_info(&file),
    }
}

/// Parses and solves a puzzle file, printing the grid.
fn run_solve(file: &Path) -> ExitCode {
    let puzzle = match parser::parse_file(file) {
        Ok(puzzle) => puzzle,
        Err(err) => {
            eprintln!("{}: {}", file.display(), err);
            return ExitCode::FAILURE;
        }
    };

    if let Some(title) = puzzle.title() {
        println!("{title}");
    }
    match solver::solve(&puzzle) {
        Some(grid) => {
            print!("{}", grid.render());
            ExitCode::SUCCESS
        }
        None => {
            eprintln!("No solution found");
            ExitCode::FAILURE
        }
    }
}

/// Prints how many candidate fillings each row and column starts with.
fn run_info(file: &Path) -> ExitCode {
    let puzzle = match parser::parse_file(file) {
        Ok(puzzle) => puzzle,
        Err(err) => {
            eprintln!("{}: {}", file.display(), err);
            return ExitCode::FAILURE;
        }
    };

    if let Some(title) = puzzle.title() {
        println!("{title}");
    }
    println!("{}x{}", puzzle.width(), puzzle.height());
    for (y, blocks) in puzzle.row_blocks().iter().enumerate() {
        let count = line::enumerate(blocks, puzzle.width()).len();
        println!("row {y:>2}: {count} candidates");
    }
    for (x, blocks) in puzzle.col_blocks().iter().enumerate() {
        let count = line::enumerate(blocks, puzzle.height()).len();
        println!("col {x:>2}: {count} candidates");
    }
    ExitCode::SUCCESS
}
