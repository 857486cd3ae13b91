//! Core data types for FastQC reports.
//!
//! - [`FastqcReport`]: The loaded report, an immutable sequence of text lines
//! - [`SummaryRow`]: One `(module name, status)` entry of the summary table
//! - [`ModuleStatus`]: Typed view of a module's pass/warn/fail status
//!
//! ## Report layout
//!
//! A `fastqc_data.txt` file is a flat list of modules, each bracketed by a
//! start line and an end line:
//!
//! ```text
//! >>Basic Statistics	pass
//! #Measure	Value
//! Filename	sample1.fastq
//! >>END_MODULE
//! ```

pub mod module;
pub mod report;

/// Prefix of every module start line (and of the end line).
pub const START_MARK: &str = ">>";

/// The literal line closing a module.
pub const END_MODULE: &str = ">>END_MODULE";
