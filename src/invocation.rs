//! Invocation model for the instrumenter CLI
//!
//! Centralizes the parsed request and keeps it separate from the raw
//! argument surface.

use crate::cli::Args;
use std::path::PathBuf;

/// One parsed command-line request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    /// Path to the C source file to instrument
    pub input_file: PathBuf,
    /// Path for the instrumented output; `None` means unset, with no
    /// default substituted
    pub output: Option<PathBuf>,
}

impl Invocation {
    /// Create an invocation from parsed command line arguments
    ///
    /// Performs no filesystem access: paths are carried verbatim and are
    /// not checked for existence or readability here.
    pub fn from_args(args: &Args) -> Self {
        Self {
            input_file: args.input_file.clone(),
            output: args.output.clone(),
        }
    }
}
