pub mod app;
pub mod cli;
pub mod config;
pub mod contact;
pub mod error;
pub mod extract;
pub mod model;
pub mod pipeline;
pub mod roster;
pub mod session;
pub mod tui;
pub mod worker;

pub use error::{Result, ScoutError};

/// Package version from Cargo.toml.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
