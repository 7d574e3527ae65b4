//! CLI Adapter
//!
//! clap argument definitions for the bundle submitter binary.

mod commands;

pub use commands::{BuyCmd, CliApp, Command, QuoteCmd, StatusCmd};
