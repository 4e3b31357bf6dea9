//! TUI components for scout.
//!
//! This module provides rich terminal user interfaces using ratatui.

pub mod sourcing;

pub use sourcing::{SourcingTui, run_sourcing_tui};
