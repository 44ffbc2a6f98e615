//! High-level API for parsing LAMMPS log files.

use crate::directive::is_numeric_row;
use crate::error::{Error, ParseError, Result};
use crate::layout::{scan_layout, TableLayout};
use crate::record::{Columns, LogRecord};
use log::{debug, warn};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// A parser for LAMMPS log files that extracts the thermo table.
///
/// # Examples
///
/// ```no_run
/// use lammps_log_parser::LogParser;
///
/// let record = LogParser::from_file("log.lammps")?.parse()?;
/// println!("Logged properties: {:?}", record.properties());
/// # Ok::<(), lammps_log_parser::Error>(())
/// ```
pub struct LogParser {
    text: String,
    fallback_columns: Option<Vec<String>>,
    allow_truncated: bool,
}

impl LogParser {
    /// Read a log file with default options.
    ///
    /// # Errors
    ///
    /// Returns [`Error::FileNotFound`] if the file cannot be opened and
    /// [`Error::Io`] if it cannot be read as UTF-8 text.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        LogParserBuilder::new().from_file(path)
    }

    /// Use log text already in memory, with default options.
    pub fn from_text<S: Into<String>>(text: S) -> Self {
        LogParserBuilder::new().from_text(text)
    }

    /// Locate the thermo table without reading its values.
    pub fn layout(&self) -> Result<TableLayout> {
        Ok(scan_layout(&self.text, self.fallback_columns.as_deref())?)
    }

    /// Parse the thermo table into a [`LogRecord`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::Parse`] if a directive is missing, a row inside the
    /// table is malformed, or the file ends before the table does.
    pub fn parse(&self) -> Result<LogRecord> {
        self.parse_with_layout().map(|(record, _)| record)
    }

    /// Parse the thermo table and also return the layout it was read with.
    pub fn parse_with_layout(&self) -> Result<(LogRecord, TableLayout)> {
        let layout = self.layout()?;
        let rows = self.read_rows(&layout)?;

        let mut columns = Columns::new();
        for (idx, name) in layout.columns.iter().enumerate() {
            let values = rows.iter().map(|row| row[idx]).collect();
            if columns.insert(name.clone(), values).is_some() {
                warn!(
                    "property '{}' repeats in thermo_style; keeping the later column",
                    name
                );
            }
        }

        let record = LogRecord::new(columns)?;
        Ok((record, layout))
    }

    fn read_rows(&self, layout: &TableLayout) -> Result<Vec<Vec<f64>>> {
        let expected = layout.row_extent();
        let width = layout.columns.len();
        // The extent comes from the log text, so it is not trusted for allocation.
        let mut rows = Vec::new();

        let mut lines = self
            .text
            .lines()
            .enumerate()
            .skip(layout.header_lines)
            .filter(|(_, line)| !line.trim().is_empty());

        for (idx, line) in lines.by_ref() {
            match parse_row(line, idx + 1, width) {
                Ok(row) => rows.push(row),
                Err(err) if self.allow_truncated => {
                    debug!("table ends early at line {}: {}", idx + 1, err);
                    break;
                }
                Err(err) => return Err(err.into()),
            }
            if rows.len() == expected {
                break;
            }
        }

        if rows.len() < expected {
            if !self.allow_truncated || rows.is_empty() {
                return Err(ParseError::RowCountMismatch {
                    expected,
                    available: rows.len(),
                }
                .into());
            }
            warn!(
                "log is truncated: read {} of {} thermo rows",
                rows.len(),
                expected
            );
        } else if let Some((idx, line)) = lines.next() {
            if is_numeric_row(line) && line.split_whitespace().count() == width {
                warn!(
                    "line {} looks like another thermo row past the {} expected; check run/thermo",
                    idx + 1,
                    expected
                );
            }
        }

        Ok(rows)
    }
}

fn parse_row(
    line: &str,
    line_no: usize,
    width: usize,
) -> std::result::Result<Vec<f64>, ParseError> {
    let row = line
        .split_whitespace()
        .map(|token| {
            token.parse::<f64>().map_err(|_| ParseError::MalformedRow {
                line: line_no,
                token: token.to_string(),
            })
        })
        .collect::<std::result::Result<Vec<f64>, _>>()?;

    if row.len() != width {
        return Err(ParseError::ColumnCountMismatch {
            line: line_no,
            expected: width,
            found: row.len(),
        });
    }
    Ok(row)
}

/// Builder for configuring log parsing options.
///
/// # Examples
///
/// ```no_run
/// use lammps_log_parser::LogParserBuilder;
///
/// let record = LogParserBuilder::new()
///     .fallback_columns(["step", "temp", "epair", "emol", "etotal", "press"])
///     .allow_truncated(true)
///     .from_file("log.lammps")?
///     .parse()?;
/// # Ok::<(), lammps_log_parser::Error>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct LogParserBuilder {
    fallback_columns: Option<Vec<String>>,
    allow_truncated: bool,
}

impl LogParserBuilder {
    /// Create a new parser builder with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Column names to use when the log has no `thermo_style` directive.
    pub fn fallback_columns<I, S>(mut self, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.fallback_columns = Some(columns.into_iter().map(Into::into).collect());
        self
    }

    /// Accept a table that stops before `run / thermo + 1` rows.
    ///
    /// Useful for runs that were killed before completing. Reading stops at
    /// the first line inside the table that is not a full numeric row.
    /// Default is `false`.
    pub fn allow_truncated(mut self, allow: bool) -> Self {
        self.allow_truncated = allow;
        self
    }

    /// Build a parser from a file path.
    pub fn from_file<P: AsRef<Path>>(self, path: P) -> Result<LogParser> {
        let path = path.as_ref();
        let mut file = File::open(path).map_err(|source| Error::FileNotFound {
            path: path.to_path_buf(),
            source,
        })?;
        let mut text = String::new();
        file.read_to_string(&mut text)?;
        debug!("read {} bytes from {}", text.len(), path.display());

        Ok(self.from_text(text))
    }

    /// Build a parser from log text.
    pub fn from_text<S: Into<String>>(self, text: S) -> LogParser {
        LogParser {
            text: text.into(),
            fallback_columns: self.fallback_columns,
            allow_truncated: self.allow_truncated,
        }
    }
}

/// Parse a LAMMPS log file with default options.
pub fn parse<P: AsRef<Path>>(path: P) -> Result<LogRecord> {
    LogParser::from_file(path)?.parse()
}
