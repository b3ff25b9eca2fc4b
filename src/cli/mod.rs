// src/cli/mod.rs
//! CLI argument parsing and the ranking command handler.

pub mod args;
pub mod handlers;

pub use args::Cli;
