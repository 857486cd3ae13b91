use clap::Args;

use crate::cli::{load_report, InputArgs, OutputFormat};
use crate::core::module::{ModuleStatus, SummaryRow};
use crate::parsing::loader::LoadOptions;

#[derive(Args)]
pub struct SummaryArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Only list modules with this status
    #[arg(long, value_enum)]
    pub status: Option<StatusFilter>,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum StatusFilter {
    Pass,
    Warn,
    Fail,
}

impl From<StatusFilter> for ModuleStatus {
    fn from(filter: StatusFilter) -> Self {
        match filter {
            StatusFilter::Pass => ModuleStatus::Pass,
            StatusFilter::Warn => ModuleStatus::Warn,
            StatusFilter::Fail => ModuleStatus::Fail,
        }
    }
}

/// Execute summary subcommand
///
/// # Errors
///
/// Returns an error if the report cannot be loaded.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: SummaryArgs, format: OutputFormat, options: &LoadOptions) -> anyhow::Result<()> {
    let report = load_report(&args.input.input, options)?;
    let rows = filter_rows(report.summary(), args.status.map(ModuleStatus::from));

    match format {
        OutputFormat::Text => print_text_summary(&rows),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&rows)?),
        OutputFormat::Tsv => {
            for row in &rows {
                println!("{}\t{}", row.module, row.status);
            }
        }
    }

    Ok(())
}

/// Keep the header row and the data rows matching `status`
fn filter_rows(rows: Vec<SummaryRow>, status: Option<ModuleStatus>) -> Vec<SummaryRow> {
    let Some(status) = status else {
        return rows;
    };

    rows.into_iter()
        .enumerate()
        .filter(|(i, row)| *i == 0 || row.status_kind() == status)
        .map(|(_, row)| row)
        .collect()
}

fn print_text_summary(rows: &[SummaryRow]) {
    let width = rows
        .iter()
        .map(|row| row.module.chars().count())
        .max()
        .unwrap_or(0);

    for row in rows {
        println!("{:<width$}  {}", row.module, row.status);
    }
}
