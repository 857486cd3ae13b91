//! Resolve a report source into decoded report lines.
//!
//! Accepted sources:
//!
//! - `.zip` archives as written by FastQC, containing a `*fastqc_data.txt` member
//! - plain `fastqc_data.txt` files
//! - gzip-compressed `.txt.gz` reports
//! - an already-open reader, borrowed from the caller
//!
//! Path suffixes are matched case-insensitively, so `SAMPLE_FASTQC.ZIP` and
//! `FASTQC_DATA.TXT` are accepted as well.
//!
//! Every file handle opened here is dropped before [`load`] returns, on success
//! and on error alike. Readers passed in by the caller are only read.

use std::fmt;
use std::fs::File;
use std::io::{BufReader, Read, Seek};
use std::path::{Path, PathBuf};

use encoding_rs::Encoding;
use flate2::read::MultiGzDecoder;
use thiserror::Error;
use tracing::{debug, warn};
use zip::ZipArchive;

use crate::core::report::FastqcReport;

/// Suffix identifying the report member inside a FastQC archive
pub const DATA_FILE_SUFFIX: &str = "fastqc_data.txt";

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Zip archive error: {0}")]
    Archive(#[from] zip::result::ZipError),

    #[error("No file matching *{DATA_FILE_SUFFIX} found in zip archive {archive}, aborting")]
    NoDataFile { archive: String },

    #[error("Unsupported report source: {0} (expected .zip, .txt or .txt.gz)")]
    UnsupportedSource(String),

    #[error("Unknown encoding label: {0}")]
    UnknownEncoding(String),

    #[error("Report content is not valid {encoding}")]
    Decode { encoding: String },
}

/// Non-fatal problems noticed while loading
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadWarning {
    /// More than one archive member ends in `fastqc_data.txt`; the first was used
    AmbiguousMember {
        candidates: Vec<String>,
        chosen: String,
    },
}

impl fmt::Display for LoadWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadWarning::AmbiguousMember { candidates, chosen } => write!(
                f,
                "Multiple files matching *{DATA_FILE_SUFFIX} found in zip archive:\n{}\nChoosing {chosen}",
                candidates.join("\n")
            ),
        }
    }
}

/// Where a report comes from
pub enum ReportSource<'a> {
    /// FastQC `.zip` output
    Archive(PathBuf),
    /// Plain `fastqc_data.txt`
    Text(PathBuf),
    /// Gzip-compressed `fastqc_data.txt.gz`
    GzipText(PathBuf),
    /// Reader owned by the caller, positioned at the start of the report
    Stream(&'a mut dyn Read),
}

impl ReportSource<'static> {
    /// Pick the source kind from the path suffix (case-insensitive)
    ///
    /// # Errors
    ///
    /// Returns `LoadError::UnsupportedSource` if the suffix is not `.zip`,
    /// `.txt` or `.txt.gz`.
    #[allow(clippy::case_sensitive_file_extension_comparisons)] // Already lowercased
    pub fn from_path(path: &Path) -> Result<Self, LoadError> {
        let lower = path.to_string_lossy().to_lowercase();

        if lower.ends_with(".zip") {
            Ok(ReportSource::Archive(path.to_path_buf()))
        } else if lower.ends_with(".txt.gz") {
            Ok(ReportSource::GzipText(path.to_path_buf()))
        } else if lower.ends_with(".txt") {
            Ok(ReportSource::Text(path.to_path_buf()))
        } else {
            Err(LoadError::UnsupportedSource(path.display().to_string()))
        }
    }
}

impl fmt::Debug for ReportSource<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReportSource::Archive(path) => f.debug_tuple("Archive").field(path).finish(),
            ReportSource::Text(path) => f.debug_tuple("Text").field(path).finish(),
            ReportSource::GzipText(path) => f.debug_tuple("GzipText").field(path).finish(),
            ReportSource::Stream(_) => f.write_str("Stream"),
        }
    }
}

/// Options handed through to the open/decode step
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadOptions {
    /// WHATWG encoding label (e.g. `latin1`, `utf-16le`). UTF-8 when unset.
    pub encoding: Option<String>,

    /// Password for an encrypted archive member. Ignored for other sources.
    pub password: Option<String>,
}

impl LoadOptions {
    #[must_use]
    pub fn with_encoding(mut self, label: impl Into<String>) -> Self {
        self.encoding = Some(label.into());
        self
    }

    #[must_use]
    pub fn with_password(mut self, password: impl Into<String>) -> Self {
        self.password = Some(password.into());
        self
    }

    fn resolve_encoding(&self) -> Result<&'static Encoding, LoadError> {
        match self.encoding.as_deref() {
            None => Ok(encoding_rs::UTF_8),
            Some(label) => Encoding::for_label(label.trim().as_bytes())
                .ok_or_else(|| LoadError::UnknownEncoding(label.to_string())),
        }
    }
}

/// Load and decode a report
///
/// # Errors
///
/// Returns `LoadError::NoDataFile` if an archive has no `*fastqc_data.txt`
/// member, `LoadError::UnknownEncoding` or `LoadError::Decode` if the content
/// cannot be decoded, and `LoadError::Io`/`LoadError::Archive` for read failures.
pub fn load(source: ReportSource<'_>, options: &LoadOptions) -> Result<FastqcReport, LoadError> {
    let encoding = options.resolve_encoding()?;
    debug!("Loading report from {source:?} as {}", encoding.name());

    let report = match source {
        ReportSource::Archive(path) => load_archive(&path, encoding, options)?,
        ReportSource::Text(path) => {
            let bytes = std::fs::read(&path)?;
            FastqcReport::from_lines(decode_lines(&bytes, encoding)?)
                .with_source(path.display().to_string())
        }
        ReportSource::GzipText(path) => {
            let file = File::open(&path)?;
            let mut bytes = Vec::new();
            MultiGzDecoder::new(BufReader::new(file)).read_to_end(&mut bytes)?;
            FastqcReport::from_lines(decode_lines(&bytes, encoding)?)
                .with_source(path.display().to_string())
        }
        ReportSource::Stream(reader) => {
            let mut bytes = Vec::new();
            reader.read_to_end(&mut bytes)?;
            FastqcReport::from_lines(decode_lines(&bytes, encoding)?)
        }
    };

    debug!("Loaded {} report lines", report.lines().len());
    Ok(report)
}

fn load_archive(
    path: &Path,
    encoding: &'static Encoding,
    options: &LoadOptions,
) -> Result<FastqcReport, LoadError> {
    let file = File::open(path)?;
    let mut archive = ZipArchive::new(BufReader::new(file))?;

    let members = find_data_members(&mut archive)?;
    let Some((index, chosen)) = members.first().cloned() else {
        return Err(LoadError::NoDataFile {
            archive: path.display().to_string(),
        });
    };

    let mut warnings = Vec::new();
    if members.len() > 1 {
        let warning = LoadWarning::AmbiguousMember {
            candidates: members.into_iter().map(|(_, name)| name).collect(),
            chosen: chosen.clone(),
        };
        warn!("{warning}");
        warnings.push(warning);
    }

    debug!("Reading archive member {chosen}");
    let bytes = read_member(&mut archive, index, options.password.as_deref())?;

    Ok(FastqcReport::from_lines(decode_lines(&bytes, encoding)?)
        .with_source(format!("{}:{chosen}", path.display()))
        .with_warnings(warnings))
}

/// Index and name of every member ending in `fastqc_data.txt`, in archive order
fn find_data_members<R: Read + Seek>(
    archive: &mut ZipArchive<R>,
) -> Result<Vec<(usize, String)>, LoadError> {
    let mut members = Vec::new();
    for index in 0..archive.len() {
        let name = archive.by_index_raw(index)?.name().to_string();
        if name.ends_with(DATA_FILE_SUFFIX) {
            members.push((index, name));
        }
    }
    Ok(members)
}

fn read_member<R: Read + Seek>(
    archive: &mut ZipArchive<R>,
    index: usize,
    password: Option<&str>,
) -> Result<Vec<u8>, LoadError> {
    let mut member = match password {
        Some(password) => archive.by_index_decrypt(index, password.as_bytes())?,
        None => archive.by_index(index)?,
    };

    let mut bytes = Vec::with_capacity(usize::try_from(member.size()).unwrap_or(0));
    member.read_to_end(&mut bytes)?;
    Ok(bytes)
}

/// Strictly decode `bytes` and split into lines
fn decode_lines(bytes: &[u8], encoding: &'static Encoding) -> Result<Vec<String>, LoadError> {
    let (text, had_errors) = encoding.decode_without_bom_handling(bytes);
    if had_errors {
        return Err(LoadError::Decode {
            encoding: encoding.name().to_string(),
        });
    }
    Ok(split_lines(&text))
}

/// Characters that end a line, in addition to `\r\n`
fn is_line_break(c: char) -> bool {
    matches!(
        c,
        '\n' | '\r'
            | '\x0b'
            | '\x0c'
            | '\x1c'
            | '\x1d'
            | '\x1e'
            | '\u{85}'
            | '\u{2028}'
            | '\u{2029}'
    )
}

/// Split text into lines on any line break.
///
/// Breaks are `\r\n`, `\n`, `\r`, vertical tab, form feed, the file/group/record
/// separators (`\x1c`-`\x1e`), NEL (`\u{85}`), and the Unicode line and
/// paragraph separators. A trailing break does not produce an extra empty line.
#[must_use]
pub fn split_lines(text: &str) -> Vec<String> {
    let mut lines = Vec::new();
    let mut rest = text;

    while !rest.is_empty() {
        match rest.char_indices().find(|(_, c)| is_line_break(*c)) {
            Some((pos, c)) => {
                lines.push(rest[..pos].to_string());
                let terminator = if rest[pos..].starts_with("\r\n") {
                    2
                } else {
                    c.len_utf8()
                };
                rest = &rest[pos + terminator..];
            }
            None => {
                lines.push(rest.to_string());
                break;
            }
        }
    }

    lines
}
