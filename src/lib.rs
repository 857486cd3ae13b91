//! # fastqc-report
//!
//! A library for reading the `fastqc_data.txt` report written by FastQC.
//!
//! FastQC writes one report per input, either loose or inside a `*_fastqc.zip`
//! archive. The report is a flat list of modules, each opened by a
//! `>>Module Name<TAB>status` line and closed by `>>END_MODULE`. This crate
//! loads that report into memory once and answers queries over it:
//!
//! - **Summary**: every module with its pass/warn/fail status
//! - **Raw data**: the lines of one module, markers included
//! - **Clean data**: one module's table as rows of cells
//! - **Content**: the report lines as written
//!
//! ## Example
//!
//! ```rust,no_run
//! use fastqc_report::FastqcReport;
//!
//! let report = FastqcReport::open("sample1_fastqc.zip").unwrap();
//!
//! for warning in report.warnings() {
//!     eprintln!("{warning}");
//! }
//!
//! for row in report.summary().iter().skip(1) {
//!     println!("{}: {}", row.module, row.status);
//! }
//!
//! let stats = report.clean_data("Basic Statistics").unwrap();
//! assert_eq!(stats[0][0], "Measure");
//! ```
//!
//! ## Modules
//!
//! - [`core`]: Report, summary row, and status types
//! - [`parsing`]: Report loading and module lookups
//! - [`cli`]: Command-line interface implementation

pub mod cli;
pub mod core;
pub mod parsing;

// Re-export commonly used types for convenience
pub use core::module::{ModuleStatus, SummaryRow};
pub use core::report::FastqcReport;
pub use core::{END_MODULE, START_MARK};
pub use parsing::loader::{LoadError, LoadOptions, LoadWarning, ReportSource};
pub use parsing::sections::SectionError;
