//! Command-line argument parsing and validation

use crate::error::{CliError, Result};
use clap::Parser;
use std::ffi::OsString;
use std::path::PathBuf;

/// Raw command-line surface of the instrumenter
#[derive(Parser, Debug)]
#[command(author, version, about = "Instrument C code for tracing.", long_about = None)]
#[command(name = "ctrace")]
pub struct Args {
    /// Path to the C source file
    pub input_file: PathBuf,

    /// Path to the output file
    #[arg(short = 'o', long = "output")]
    pub output: Option<PathBuf>,

    /// Enable debug output
    #[arg(long, global = true)]
    pub debug: bool,
}

/// Parse command line arguments
///
/// On a malformed invocation clap prints usage text to stderr and
/// terminates the process with exit status 2; `-h`/`--help` prints help
/// and exits 0.
pub fn parse_args() -> Args {
    Args::parse()
}

/// Parse an explicit token list without terminating the process
///
/// A malformed token list is reported as [`CliError::Usage`] instead of
/// being printed and turned into a process exit. The first token is the
/// program name, as in a raw argument vector.
pub fn try_parse_from<I, T>(tokens: I) -> Result<Args>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    Args::try_parse_from(tokens).map_err(CliError::from)
}
