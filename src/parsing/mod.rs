//! Loading and querying FastQC `fastqc_data.txt` reports.
//!
//! - [`loader`]: Resolve a `.zip`, `.txt`, `.txt.gz` or open reader into report lines
//! - [`sections`]: Summary table, raw module lines, and cleaned module tables
//!
//! ## Example
//!
//! ```rust,no_run
//! use fastqc_report::parsing::loader::{LoadOptions, ReportSource};
//! use fastqc_report::FastqcReport;
//! use std::path::Path;
//!
//! let source = ReportSource::from_path(Path::new("sample1_fastqc.zip")).unwrap();
//! let options = LoadOptions::default().with_encoding("latin1");
//! let report = FastqcReport::load(source, &options).unwrap();
//!
//! let table = report.clean_data("Per base sequence quality").unwrap();
//! ```

pub mod loader;
pub mod sections;
