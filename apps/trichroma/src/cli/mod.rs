//! # Trichroma CLI Module
//!
//! This module implements the CLI interface for Trichroma.
//!
//! ## Available Commands
//!
//! - `reduce` - Reduce a 3-SAT instance file to a 3-coloring graph file
//! - `solve` - Decide 3-colorability of a graph file
//! - `show` - Print a graph file

mod commands;

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use trichroma_core::TrichromaError;

pub use commands::*;

// =============================================================================
// CLI STRUCTURE
// =============================================================================

/// Trichroma - 3-SAT → 3-COLORING Toolbox
///
/// A deterministic reduction engine and 3-coloring solver.
/// Every run over the same input produces the same graph and the same answer.
#[derive(Parser, Debug)]
#[command(name = "trichroma")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress banner output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Output in JSON format (for programmatic access)
    #[arg(long, global = true)]
    pub json_mode: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Reduce a 3-SAT instance to a 3-coloring graph
    Reduce {
        /// Path to the 3-SAT instance file
        #[arg(short, long)]
        input: PathBuf,

        /// Output graph file path
        #[arg(short, long)]
        output: PathBuf,
    },

    /// Decide 3-colorability of a graph
    Solve {
        /// Path to the graph file
        #[arg(short, long)]
        input: PathBuf,

        /// Search strategy (generate-and-test, back-tracking, propagating)
        #[arg(short, long, default_value = "propagating")]
        strategy: String,

        /// Print the witness coloring vertex by vertex
        #[arg(long)]
        show: bool,
    },

    /// Print a graph file
    Show {
        /// Path to the graph file
        #[arg(short, long)]
        input: PathBuf,
    },
}

// =============================================================================
// COMMAND EXECUTION
// =============================================================================

/// Execute the CLI with parsed arguments.
pub fn execute(cli: Cli) -> Result<(), TrichromaError> {
    let json_mode = cli.json_mode;

    match cli.command {
        Commands::Reduce { input, output } => cmd_reduce(json_mode, &input, &output),
        Commands::Solve {
            input,
            strategy,
            show,
        } => cmd_solve(json_mode, &input, &strategy, show),
        Commands::Show { input } => cmd_show(json_mode, &input),
    }
}
