//! agency-cli library
//!
//! This module exports the HTTP client for use in tests and other crates,
//! plus the command-line definitions the `agency` binary is built from.

pub mod cli;
pub(crate) mod client;
pub mod commands;
pub mod logger;
pub mod project_commands;

#[cfg(test)]
mod tests;

pub use client::{CliClientResult, Client, ClientError};
