//! Progress feedback for scout CLI commands.
//!
//! Extraction and matching run behind simulated latency, so commands show a
//! spinner while they wait. The spinner adapts to the output context:
//! - TTY mode: animated spinner on stderr
//! - Non-TTY mode: simple line-by-line output
//! - Robot mode: JSON progress events to stderr
//! - Quiet mode: no output

use chrono::Utc;
use indicatif::{ProgressBar, ProgressStyle};
use serde::Serialize;
use std::io::IsTerminal;
use std::time::Duration;

/// Progress output mode based on terminal capabilities and user preferences
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProgressMode {
    /// TTY mode: animated spinner
    Tty,
    /// Non-TTY mode: simple line-by-line output to stderr
    NonTty,
    /// Robot mode: JSON progress events to stderr
    Robot,
    /// Quiet mode: no progress output
    Quiet,
}

impl ProgressMode {
    /// Detect the appropriate progress mode based on environment
    #[must_use]
    pub fn detect(robot_mode: bool, quiet: bool) -> Self {
        if quiet {
            Self::Quiet
        } else if robot_mode {
            Self::Robot
        } else if std::io::stderr().is_terminal() {
            Self::Tty
        } else {
            Self::NonTty
        }
    }

    /// Check if this mode supports animated output
    #[must_use]
    pub const fn is_animated(&self) -> bool {
        matches!(self, Self::Tty)
    }

    /// Check if this mode produces output
    #[must_use]
    pub const fn has_output(&self) -> bool {
        !matches!(self, Self::Quiet)
    }
}

/// Progress event types for robot mode JSON output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ProgressEventType {
    SpinnerStart,
    SpinnerUpdate,
    SpinnerComplete,
    SpinnerError,
}

/// JSON progress event for robot mode
#[derive(Debug, Clone, Serialize)]
pub struct ProgressEvent {
    #[serde(rename = "type")]
    pub event_type: &'static str,
    pub event: ProgressEventType,
    pub operation: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub timestamp: String,
}

impl ProgressEvent {
    fn new(event: ProgressEventType, operation: &str) -> Self {
        Self {
            event_type: "progress",
            event,
            operation: operation.to_string(),
            message: None,
            timestamp: Utc::now().to_rfc3339(),
        }
    }

    fn with_message(mut self, message: &str) -> Self {
        self.message = Some(message.to_string());
        self
    }

    fn emit(&self) {
        if let Ok(json) = serde_json::to_string(self) {
            eprintln!("{}", json);
        }
    }
}

/// Spinner factory that adapts to the output context.
pub struct ProgressReporter {
    mode: ProgressMode,
}

impl ProgressReporter {
    /// Create a new progress reporter
    ///
    /// # Arguments
    ///
    /// * `robot_mode` - Whether robot (JSON) output is enabled
    /// * `quiet` - Whether quiet mode is enabled (suppresses all progress)
    #[must_use]
    pub fn new(robot_mode: bool, quiet: bool) -> Self {
        Self {
            mode: ProgressMode::detect(robot_mode, quiet),
        }
    }

    /// Create a progress reporter with explicit mode
    #[must_use]
    pub const fn with_mode(mode: ProgressMode) -> Self {
        Self { mode }
    }

    /// Get the current progress mode
    #[must_use]
    pub const fn mode(&self) -> ProgressMode {
        self.mode
    }

    /// Create a spinner for an operation with simulated latency
    pub fn spinner(&self, msg: &str) -> ProgressHandle {
        match self.mode {
            ProgressMode::Quiet => ProgressHandle::Noop,

            ProgressMode::Robot => {
                ProgressEvent::new(ProgressEventType::SpinnerStart, msg).emit();
                ProgressHandle::Robot {
                    operation: msg.to_string(),
                }
            }

            ProgressMode::NonTty => {
                eprintln!("[scout] {}...", msg);
                ProgressHandle::NonTty
            }

            ProgressMode::Tty => {
                let pb = ProgressBar::new_spinner();
                pb.set_style(
                    ProgressStyle::default_spinner()
                        .template("{spinner:.cyan} {msg}")
                        .expect("valid template")
                        .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"]),
                );
                pb.set_message(msg.to_string());
                pb.enable_steady_tick(Duration::from_millis(100));
                ProgressHandle::Tty(pb)
            }
        }
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new(false, false)
    }
}

/// Handle for updating or finishing a spinner
///
/// Different variants for different output modes ensure correct behavior
/// regardless of terminal capabilities.
pub enum ProgressHandle {
    /// TTY mode: wraps an indicatif ProgressBar
    Tty(ProgressBar),

    /// Non-TTY mode: line output already emitted at start
    NonTty,

    /// Robot mode: JSON events
    Robot { operation: String },

    /// Quiet mode: no-op
    Noop,
}

impl ProgressHandle {
    /// Update the message displayed
    pub fn set_message(&self, msg: &str) {
        match self {
            Self::Tty(pb) => pb.set_message(msg.to_string()),
            Self::Robot { operation } => {
                ProgressEvent::new(ProgressEventType::SpinnerUpdate, operation)
                    .with_message(msg)
                    .emit();
            }
            Self::NonTty => {
                eprintln!("[scout] {}...", msg);
            }
            Self::Noop => {}
        }
    }

    /// Finish with a success message
    pub fn finish_with_message(&self, msg: &str) {
        match self {
            Self::Tty(pb) => {
                pb.finish_with_message(format!("✓ {}", msg));
            }
            Self::Robot { operation } => {
                ProgressEvent::new(ProgressEventType::SpinnerComplete, operation)
                    .with_message(msg)
                    .emit();
            }
            Self::NonTty => {
                eprintln!("[scout] ✓ {}", msg);
            }
            Self::Noop => {}
        }
    }

    /// Finish without a message
    pub fn finish(&self) {
        match self {
            Self::Tty(pb) => pb.finish_and_clear(),
            Self::Robot { operation } => {
                ProgressEvent::new(ProgressEventType::SpinnerComplete, operation).emit();
            }
            Self::NonTty | Self::Noop => {}
        }
    }

    /// Abandon with an error message
    pub fn abandon_with_message(&self, msg: &str) {
        match self {
            Self::Tty(pb) => {
                pb.abandon_with_message(format!("✗ {}", msg));
            }
            Self::Robot { operation } => {
                ProgressEvent::new(ProgressEventType::SpinnerError, operation)
                    .with_message(msg)
                    .emit();
            }
            Self::NonTty => {
                eprintln!("[scout] ✗ ERROR: {}", msg);
            }
            Self::Noop => {}
        }
    }

    /// Check if this handle does nothing (quiet mode)
    #[must_use]
    pub const fn is_noop(&self) -> bool {
        matches!(self, Self::Noop)
    }
}
