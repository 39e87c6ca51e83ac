//! Presentation layer for toolgate
//!
//! Terminal-facing adapters: the clap argument definitions, the interactive
//! operator prompt the approval gate suspends on, and output formatting for
//! the catalog and tool outcomes.

pub mod cli;
pub mod operator;
pub mod output;

pub use cli::{Cli, Command};
pub use operator::InteractiveOperatorPrompt;
pub use output::ConsoleFormatter;
