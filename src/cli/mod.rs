//! Command-line interface module.
//!
//! Provides argument parsing.

pub mod args;
