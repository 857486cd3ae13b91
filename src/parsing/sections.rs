//! Module lookups over the lines of a FastQC report.
//!
//! Each query locates its own module boundaries from scratch; nothing is
//! cached between calls.
//!
//! ## Module lookup
//!
//! [`raw_data`] starts at the **first line containing the pattern as a
//! substring**, whether or not that line is a module start line, and ends at
//! the next `>>END_MODULE` at or after it. A pattern that also occurs in an
//! earlier data line (e.g. `"Sequence"` matching a `Sequence length` row of
//! Basic Statistics) therefore returns the tail of that earlier module. This
//! is long-standing behavior that existing callers depend on; pass full module
//! names to avoid it.

use thiserror::Error;

use crate::core::module::SummaryRow;
use crate::core::{END_MODULE, START_MARK};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SectionError {
    #[error("No line in report matches module '{pattern}'")]
    NoMatch { pattern: String },

    #[error("Module '{pattern}' starting at line {line} has no {END_MODULE} line")]
    Unterminated { pattern: String, line: usize },

    #[error("Module '{pattern}' has no data between its start and end lines")]
    EmptySection { pattern: String },
}

/// Module start lines contain `>>` but are not `>>END_MODULE`
fn is_module_start(line: &str) -> bool {
    line.contains(START_MARK) && !line.contains(END_MODULE)
}

/// Summary table in document order, headed by `("Module Name", "Status")`.
///
/// The module name is the first tab-separated field with its first two
/// characters (the start mark) dropped; the status is the second field, or
/// an empty string when the start line has no tab.
#[must_use]
pub fn summary(lines: &[String]) -> Vec<SummaryRow> {
    let mut rows = vec![SummaryRow::header()];

    for line in lines.iter().filter(|line| is_module_start(line)) {
        let mut fields = line.split('\t');
        let name = fields.next().unwrap_or_default();
        let status = fields.next().unwrap_or_default();

        let module: String = name.chars().skip(START_MARK.chars().count()).collect();
        rows.push(SummaryRow::new(module, status));
    }

    rows
}

/// Inclusive slice from the first line containing `module` through the next `>>END_MODULE`
///
/// # Errors
///
/// Returns `SectionError::NoMatch` if no line contains `module`, or
/// `SectionError::Unterminated` if no `>>END_MODULE` line follows the match.
pub fn raw_data<'a>(lines: &'a [String], module: &str) -> Result<&'a [String], SectionError> {
    let start = lines
        .iter()
        .position(|line| line.contains(module))
        .ok_or_else(|| SectionError::NoMatch {
            pattern: module.to_string(),
        })?;

    let end = lines[start..]
        .iter()
        .position(|line| line == END_MODULE)
        .map(|offset| start + offset)
        .ok_or_else(|| SectionError::Unterminated {
            pattern: module.to_string(),
            // 1-based for user friendliness
            line: start + 1,
        })?;

    Ok(&lines[start..=end])
}

/// Module body split into rows of non-empty tab-separated cells.
///
/// The start and end lines are dropped, and the leading `#` of the header
/// row's first cell is removed (`#Measure` becomes `Measure`).
///
/// # Errors
///
/// Returns the errors of [`raw_data`], or `SectionError::EmptySection` if the
/// module has no body or its first body line has no cells.
pub fn clean_data(lines: &[String], module: &str) -> Result<Vec<Vec<String>>, SectionError> {
    let raw = raw_data(lines, module)?;
    let body: &[String] = if raw.len() > 2 { &raw[1..raw.len() - 1] } else { &[] };

    let mut rows: Vec<Vec<String>> = body
        .iter()
        .map(|line| {
            line.split('\t')
                .filter(|cell| !cell.is_empty())
                .map(str::to_string)
                .collect()
        })
        .collect();

    let first_cell = rows
        .first_mut()
        .and_then(|row| row.first_mut())
        .ok_or_else(|| SectionError::EmptySection {
            pattern: module.to_string(),
        })?;
    first_cell.remove(0);

    Ok(rows)
}
