//! Command-line interface for fastqc-report.
//!
//! This module implements the CLI using clap. Available commands:
//!
//! - **summary**: List every module with its pass/warn/fail status
//! - **raw**: Print the raw lines of one module
//! - **clean**: Print one module's table with markers removed
//! - **content**: Print the whole report
//!
//! ## Usage
//!
//! ```text
//! # Module statuses from a FastQC archive
//! fastqc-report summary sample1_fastqc.zip
//!
//! # Only the failing modules
//! fastqc-report summary sample1_fastqc.zip --status fail
//!
//! # Per-base quality table as JSON
//! fastqc-report --format json clean sample1_fastqc.zip "Per base sequence quality"
//!
//! # Read the report from stdin
//! unzip -p sample1_fastqc.zip '*/fastqc_data.txt' | fastqc-report summary -
//! ```

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};

use crate::core::report::FastqcReport;
use crate::parsing::loader::{LoadOptions, ReportSource};

pub mod content;
pub mod module;
pub mod summary;

#[derive(Parser)]
#[command(name = "fastqc-report")]
#[command(author = "Fulcrum Genomics")]
#[command(version)]
#[command(about = "Query module summaries and tables from FastQC reports")]
#[command(
    long_about = "fastqc-report reads the fastqc_data.txt report produced by FastQC, either loose, gzip-compressed, or inside the *_fastqc.zip archive.\n\nIt can list module statuses, print the raw lines of a module, or print a module's table with the module markers removed."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format
    #[arg(short, long, global = true, default_value = "text")]
    pub format: OutputFormat,

    /// Text encoding of the report (e.g. latin1, utf-16le)
    #[arg(long, global = true)]
    pub encoding: Option<String>,

    /// Password for an encrypted FastQC archive
    #[arg(long, global = true)]
    pub password: Option<String>,
}

impl Cli {
    /// Options forwarded to the report loader
    #[must_use]
    pub fn load_options(&self) -> LoadOptions {
        LoadOptions {
            encoding: self.encoding.clone(),
            password: self.password.clone(),
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// List modules and their status
    Summary(summary::SummaryArgs),

    /// Print the raw lines of a module, markers included
    Raw(module::ModuleArgs),

    /// Print a module's table with markers and empty cells removed
    Clean(module::ModuleArgs),

    /// Print the whole report
    Content(content::ContentArgs),
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Tsv,
}

/// Load a report from a path, or from stdin when the path is `-`
///
/// # Errors
///
/// Returns an error if the path has an unsupported suffix or the report
/// cannot be read or decoded.
pub fn load_report(input: &Path, options: &LoadOptions) -> anyhow::Result<FastqcReport> {
    let report = if input == Path::new("-") {
        let stdin = std::io::stdin();
        let mut handle = stdin.lock();
        FastqcReport::load(ReportSource::Stream(&mut handle), options)?
    } else {
        FastqcReport::load(ReportSource::from_path(input)?, options)?
    };

    Ok(report)
}

/// Input argument shared by every subcommand
#[derive(clap::Args)]
pub struct InputArgs {
    /// FastQC report: *_fastqc.zip, fastqc_data.txt, fastqc_data.txt.gz, or '-' for stdin
    #[arg(required = true)]
    pub input: PathBuf,
}
