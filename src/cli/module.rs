use clap::Args;

use crate::cli::{load_report, InputArgs, OutputFormat};
use crate::parsing::loader::LoadOptions;

#[derive(Args)]
pub struct ModuleArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Module name as listed by `summary` (the first line containing it is used)
    #[arg(required = true)]
    pub module: String,
}

/// Execute raw subcommand
///
/// # Errors
///
/// Returns an error if the report cannot be loaded or the module is not found.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run_raw(args: ModuleArgs, format: OutputFormat, options: &LoadOptions) -> anyhow::Result<()> {
    let report = load_report(&args.input.input, options)?;
    let lines = report.raw_data(&args.module)?;

    match format {
        OutputFormat::Text | OutputFormat::Tsv => {
            for line in lines {
                println!("{line}");
            }
        }
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(lines)?),
    }

    Ok(())
}

/// Execute clean subcommand
///
/// # Errors
///
/// Returns an error if the report cannot be loaded, the module is not found,
/// or the module has no data.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run_clean(
    args: ModuleArgs,
    format: OutputFormat,
    options: &LoadOptions,
) -> anyhow::Result<()> {
    let report = load_report(&args.input.input, options)?;
    let rows = report.clean_data(&args.module)?;

    match format {
        OutputFormat::Text | OutputFormat::Tsv => {
            for row in &rows {
                println!("{}", row.join("\t"));
            }
        }
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&rows)?),
    }

    Ok(())
}
