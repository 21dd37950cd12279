//! `storefront` CLI: run availability queries against a product JSON file.

pub mod commands;

pub use commands::{Cli, Command, Outcome, SelectionArgs, execute, load_product};
