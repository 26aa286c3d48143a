//! # ctrace
//!
//! Command-line front end for instrumenting C code for tracing.
//! This library provides the argument surface of the instrumenter:
//! parsing and validating the invocation, structured error handling,
//! and logging setup. The instrumentation passes themselves are not
//! implemented here.
//!
//! ## Example
//!
//! ```
//! use ctrace::{cli, invocation::Invocation};
//!
//! let args = cli::try_parse_from(["ctrace", "foo.c", "-o", "out.c"])?;
//! let invocation = Invocation::from_args(&args);
//! assert_eq!(invocation.output.as_deref(), Some(std::path::Path::new("out.c")));
//! # Ok::<(), ctrace::error::CliError>(())
//! ```

pub mod cli;
pub mod error;
pub mod invocation;

use anyhow::Result;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize logging with appropriate verbosity
///
/// `RUST_LOG` takes precedence over the `--debug` flag when set.
pub fn setup_logging(debug: bool) -> Result<()> {
    let default_level = if debug { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_level(true)
                .compact(),
        )
        .with(filter)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

    Ok(())
}
