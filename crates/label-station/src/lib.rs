//! Command-line front end for the label station
//!
//! Gathers the same plain values the operator form does and hands them to the
//! application layer.

pub mod cli;
pub mod output;
pub mod prompt;

pub use cli::{Cli, Command, SettingsCommand};
pub use prompt::LinePrompt;
