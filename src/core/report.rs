use std::io::{Read, Write};
use std::path::Path;

use crate::core::module::SummaryRow;
use crate::parsing::loader::{self, LoadError, LoadOptions, LoadWarning, ReportSource};
use crate::parsing::sections::{self, SectionError};

/// A loaded `fastqc_data.txt` report.
///
/// Holds the decoded report as an ordered list of lines. The lines are fixed
/// at construction; every query is a read-only pass over them, so a report
/// can be shared freely between threads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FastqcReport {
    source: Option<String>,
    lines: Vec<String>,
    warnings: Vec<LoadWarning>,
}

impl FastqcReport {
    /// Load a report from a `.zip`, `.txt` or `.txt.gz` path with default options
    ///
    /// # Errors
    ///
    /// Returns `LoadError::UnsupportedSource` for unrecognized suffixes, or any
    /// error produced while reading and decoding the file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let source = ReportSource::from_path(path.as_ref())?;
        Self::load(source, &LoadOptions::default())
    }

    /// Load a report from an open reader. The reader is not closed.
    ///
    /// # Errors
    ///
    /// Returns `LoadError::Io` if reading fails or `LoadError::Decode` if the
    /// content is not valid UTF-8.
    pub fn from_reader(reader: &mut dyn Read) -> Result<Self, LoadError> {
        Self::load(ReportSource::Stream(reader), &LoadOptions::default())
    }

    /// Load a report from any source, forwarding `options` to the decode step
    ///
    /// # Errors
    ///
    /// See [`loader::load`].
    pub fn load(source: ReportSource<'_>, options: &LoadOptions) -> Result<Self, LoadError> {
        loader::load(source, options)
    }

    /// Build a report from already decoded text
    #[must_use]
    pub fn from_text(text: &str) -> Self {
        Self::from_lines(loader::split_lines(text))
    }

    #[must_use]
    pub fn from_lines(lines: Vec<String>) -> Self {
        Self {
            source: None,
            lines,
            warnings: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    #[must_use]
    pub(crate) fn with_warnings(mut self, warnings: Vec<LoadWarning>) -> Self {
        self.warnings = warnings;
        self
    }

    /// Where the report was loaded from, if it came from a file
    #[must_use]
    pub fn source(&self) -> Option<&str> {
        self.source.as_deref()
    }

    #[must_use]
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Non-fatal diagnostics raised while loading
    #[must_use]
    pub fn warnings(&self) -> &[LoadWarning] {
        &self.warnings
    }

    /// Iterate over the report lines in order, for display
    pub fn content(&self) -> impl Iterator<Item = &str> + '_ {
        self.lines.iter().map(String::as_str)
    }

    /// Write every line of the report, one per line, unmodified
    ///
    /// # Errors
    ///
    /// Returns any error produced by the writer.
    pub fn write_content<W: Write>(&self, out: &mut W) -> std::io::Result<()> {
        for line in self.content() {
            writeln!(out, "{line}")?;
        }
        Ok(())
    }

    /// Module names and statuses in document order, headed by `("Module Name", "Status")`
    #[must_use]
    pub fn summary(&self) -> Vec<SummaryRow> {
        sections::summary(&self.lines)
    }

    /// Lines of the module matching `module`, from its start line through `>>END_MODULE`
    ///
    /// # Errors
    ///
    /// See [`sections::raw_data`].
    pub fn raw_data(&self, module: &str) -> Result<&[String], SectionError> {
        sections::raw_data(&self.lines, module)
    }

    /// Tab-split rows of the module matching `module`, markers removed
    ///
    /// # Errors
    ///
    /// See [`sections::clean_data`].
    pub fn clean_data(&self, module: &str) -> Result<Vec<Vec<String>>, SectionError> {
        sections::clean_data(&self.lines, module)
    }
}
