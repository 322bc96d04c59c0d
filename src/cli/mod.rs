//! Interactive and script-driven shell over the tracker.

mod commands;
mod core;
mod output;
mod shell;

pub use self::core::{CliError, CliMode};
pub use shell::run_cli;
