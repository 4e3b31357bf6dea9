//! CLI module - Command-line interface definitions and handlers
//!
//! Uses clap v4 with derive macros for argument parsing.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub mod commands;
pub mod output;
pub mod progress;

/// Scout - source and screen engineering candidates from a job description
#[derive(Parser, Debug)]
#[command(name = "scout")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable machine-readable JSON output.
    /// Ideal for AI agents and scripts that need structured output.
    #[arg(long, global = true)]
    pub robot: bool,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Config file path (default: ~/.config/scout/config.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Defaults to the interactive session when omitted
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the interactive candidate sourcing session (TUI)
    Session(commands::session::SessionArgs),

    /// Extract matching keywords from a job description
    Extract(commands::extract::ExtractArgs),

    /// Filter, sort, and display the candidate roster
    Candidates(commands::candidates::CandidatesArgs),
}
