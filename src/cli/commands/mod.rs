//! CLI command implementations
//!
//! Each subcommand has its own module with:
//! - Args struct for command-line arguments
//! - `run()` function to execute the command

use crate::app::AppContext;
use crate::cli::Commands;
use crate::error::Result;

pub mod candidates;
pub mod extract;
pub mod session;

/// Dispatch a command to its handler.
///
/// A missing subcommand starts the interactive session.
pub fn run(ctx: &AppContext, command: Option<&Commands>) -> Result<()> {
    match command {
        None => session::run(ctx, &session::SessionArgs::default()),
        Some(Commands::Session(args)) => session::run(ctx, args),
        Some(Commands::Extract(args)) => extract::run(ctx, args),
        Some(Commands::Candidates(args)) => candidates::run(ctx, args),
    }
}
