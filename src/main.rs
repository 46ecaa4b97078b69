//! Maze-robot simulator CLI.
//!
//! Reads a maze (header line `ROWS COLS` plus that many rows of tile
//! symbols), simulates the robot, and prints the move sequence or `LOOP`.

use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use blunder::core::driver::{DriverConfig, Outcome};
use blunder::io::parser;
use blunder::io::report;
use blunder::solve::solve_text;
use blunder::{exit_codes, logging};

#[derive(Parser)]
#[command(name = "blunder", version, about = "Deterministic maze-robot simulator")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Simulate the robot and print its moves, or `LOOP`.
    Solve {
        /// Maze file; reads stdin when omitted.
        file: Option<PathBuf>,
        /// Emit a JSON report instead of the line protocol.
        #[arg(long)]
        json: bool,
        /// Override the defensive step cap.
        #[arg(long)]
        max_steps: Option<usize>,
    },
    /// Parse and validate a maze without simulating it.
    Check {
        /// Maze file; reads stdin when omitted.
        file: Option<PathBuf>,
    },
}

fn main() {
    logging::init();
    match run() {
        Ok(code) => std::process::exit(code),
        Err(err) => {
            eprintln!("{:#}", err);
            std::process::exit(exit_codes::INVALID);
        }
    }
}

fn run() -> Result<i32> {
    let cli = Cli::parse();
    match cli.command {
        Command::Solve {
            file,
            json,
            max_steps,
        } => cmd_solve(file.as_deref(), json, max_steps),
        Command::Check { file } => cmd_check(file.as_deref()),
    }
}

fn cmd_solve(file: Option<&Path>, json: bool, max_steps: Option<usize>) -> Result<i32> {
    let input = read_input(file)?;
    let config = DriverConfig { max_steps };
    let outcome = solve_text(&input, &config)?;
    let rendered = if json {
        report::render_json(&outcome)?
    } else {
        report::render_text(&outcome)
    };
    print!("{rendered}");
    Ok(match outcome {
        Outcome::Finished(_) => exit_codes::OK,
        Outcome::LoopDetected => exit_codes::LOOP,
    })
}

fn cmd_check(file: Option<&Path>) -> Result<i32> {
    let input = read_input(file)?;
    let maze = parser::parse(&input)?;
    println!("ok: {} rows x {} cols", maze.grid.rows(), maze.grid.cols());
    Ok(exit_codes::OK)
}

fn read_input(file: Option<&Path>) -> Result<String> {
    match file {
        Some(path) => fs::read_to_string(path).with_context(|| format!("read {}", path.display())),
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("read stdin")?;
            Ok(buf)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_solve_defaults() {
        let cli = Cli::parse_from(["blunder", "solve"]);
        assert!(matches!(
            cli.command,
            Command::Solve {
                file: None,
                json: false,
                max_steps: None,
            }
        ));
    }

    #[test]
    fn parse_solve_with_flags() {
        let cli = Cli::parse_from(["blunder", "solve", "maze.txt", "--json", "--max-steps", "99"]);
        match cli.command {
            Command::Solve {
                file,
                json,
                max_steps,
            } => {
                assert_eq!(file, Some(PathBuf::from("maze.txt")));
                assert!(json);
                assert_eq!(max_steps, Some(99));
            }
            Command::Check { .. } => panic!("expected solve"),
        }
    }

    #[test]
    fn parse_check() {
        let cli = Cli::parse_from(["blunder", "check", "maze.txt"]);
        assert!(matches!(cli.command, Command::Check { file: Some(_) }));
    }
}
