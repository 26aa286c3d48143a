#![allow(clippy::cargo_common_metadata)]
use anyhow::Result;
use ctrace::{cli, invocation::Invocation, setup_logging};
use tracing::debug;

fn main() -> Result<()> {
    // Parse command line arguments
    let args = cli::parse_args();

    // Setup logging based on debug flag
    setup_logging(args.debug)?;

    // Build the invocation from the parsed surface
    let invocation = Invocation::from_args(&args);

    debug!(
        input_file = %invocation.input_file.display(),
        output = ?invocation.output,
        "parsed invocation"
    );

    // The instrumentation passes are not implemented; a successful parse
    // is the entire contract of this binary.
    Ok(())
}
