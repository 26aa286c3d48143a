//! Command-line interface module
//!
//! Provides argument parsing for the instrumenter front end.

pub mod args;

pub use args::{parse_args, try_parse_from, Args};
