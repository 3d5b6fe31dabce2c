//! Command-line interface support
//!
//! Command handlers live under [`commands`]; the binary entry point is
//! `src/cli/main.rs` (built as `transana-archive-cli`).

pub mod commands;
pub mod error;

pub use error::CliError;
