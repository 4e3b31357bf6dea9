//! scout session - Interactive candidate sourcing session (TUI)

use clap::Args;

use crate::app::AppContext;
use crate::error::{Result, ScoutError};
use crate::tui;

#[derive(Args, Debug, Default)]
pub struct SessionArgs {
    /// Pre-fill the job description form with this text
    #[arg(long)]
    pub description: Option<String>,
}

pub fn run(ctx: &AppContext, args: &SessionArgs) -> Result<()> {
    if ctx.robot_mode {
        return Err(ScoutError::TerminalRequired(
            "session has no robot mode; use `scout extract` or `scout candidates`".to_string(),
        ));
    }

    tui::run_sourcing_tui(ctx, args.description.as_deref())
}
