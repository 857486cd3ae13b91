use std::io::Write;

use clap::Args;

use crate::cli::{load_report, InputArgs};
use crate::parsing::loader::LoadOptions;

#[derive(Args)]
pub struct ContentArgs {
    #[command(flatten)]
    pub input: InputArgs,
}

/// Execute content subcommand
///
/// # Errors
///
/// Returns an error if the report cannot be loaded or stdout cannot be written.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: ContentArgs, options: &LoadOptions) -> anyhow::Result<()> {
    let report = load_report(&args.input.input, options)?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    report.write_content(&mut out)?;
    out.flush()?;

    Ok(())
}
