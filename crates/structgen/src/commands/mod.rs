//! Subcommand implementations.
//!
//! Each command exposes an `Args` struct and a `run` function returning the
//! process exit code.

pub mod backends;
pub mod generate;
