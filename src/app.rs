//! Shared application context for CLI commands.

use crate::cli::Cli;
use crate::config::Config;
use crate::error::Result;
use crate::roster::Roster;

/// Context threaded through every command handler.
///
/// Holds the resolved configuration, the candidate roster, and the output
/// mode flags parsed from the command line.
pub struct AppContext {
    pub config: Config,
    pub roster: Roster,
    pub robot_mode: bool,
    pub quiet: bool,
}

impl AppContext {
    /// Build the context from parsed CLI arguments.
    ///
    /// Loads configuration from `--config`, the `SCOUT_CONFIG` environment
    /// variable, or the global config file, in that order.
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let config = Config::load(cli.config.as_deref())?;

        Ok(Self {
            config,
            roster: Roster::builtin(),
            robot_mode: cli.robot,
            quiet: cli.quiet,
        })
    }

    /// Build a context with explicit parts (for testing).
    #[cfg(test)]
    pub fn for_tests(config: Config, roster: Roster) -> Self {
        Self {
            config,
            roster,
            robot_mode: false,
            quiet: true,
        }
    }
}
