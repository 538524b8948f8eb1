//! Command-line front end for `structgen-typegen`.

pub mod commands;
pub mod config;
