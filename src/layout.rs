//! Locating the thermo table inside a log: where it starts, how many rows it
//! has, and which columns it carries.

use crate::directive::{is_numeric_row, Directives};
use crate::error::ParseError;
use log::debug;
use serde::Serialize;

/// Where the thermo table sits in a log and how it is shaped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableLayout {
    /// Lines preceding the first data row.
    pub header_lines: usize,
    /// Blank lines anywhere after the first data row, inside the table or
    /// after it. Lines holding only whitespace count as blank.
    pub footer_lines: usize,
    pub run_length: u64,
    pub save_frequency: u64,
    /// Column names, in table order.
    pub columns: Vec<String>,
}

impl TableLayout {
    /// Number of rows in the table: one per sampling interval plus step 0.
    ///
    /// `None` when `save_frequency` is zero or the count does not fit in a `usize`.
    pub fn row_count(&self) -> Option<usize> {
        self.run_length
            .checked_div(self.save_frequency)?
            .checked_add(1)
            .and_then(|rows| usize::try_from(rows).ok())
    }

    /// Rows to read; an unrepresentable count saturates, which no log can satisfy.
    pub(crate) fn row_extent(&self) -> usize {
        self.row_count().unwrap_or(usize::MAX)
    }
}

/// Scan the log once, top to bottom, and resolve the table layout.
///
/// The first line that is entirely numeric after a `run` directive has been
/// seen is taken as the first data row. A numeric diagnostic line that
/// appears after `run` but before the real table (e.g. minimizer output from a
/// run-less input) will be taken as the table start.
///
/// `fallback_columns` is used only when no `thermo_style` directive precedes
/// the table.
pub fn scan_layout(
    text: &str,
    fallback_columns: Option<&[String]>,
) -> Result<TableLayout, ParseError> {
    let mut directives = Directives::new();
    let mut header = None;
    let mut lines = text.lines().enumerate();

    for (idx, line) in lines.by_ref() {
        directives.observe(line, idx + 1);
        if directives.has_run() && is_numeric_row(line) {
            header = Some(idx);
            break;
        }
    }

    let footer_lines = lines.filter(|(_, line)| line.trim().is_empty()).count();

    let run_length = directives
        .run_length
        .ok_or(ParseError::MissingRunLength)?;
    let save_frequency = directives
        .save_frequency
        .ok_or(ParseError::MissingSaveFrequency)?;
    if save_frequency == 0 {
        return Err(ParseError::ZeroSaveFrequency);
    }

    let columns = directives
        .columns
        .filter(|c| !c.is_empty())
        .or_else(|| fallback_columns.map(<[String]>::to_vec))
        .filter(|c| !c.is_empty())
        .ok_or(ParseError::MissingSchema)?;

    let layout = TableLayout {
        header_lines: header.unwrap_or(0),
        footer_lines,
        run_length,
        save_frequency,
        columns,
    };

    if header.is_none() {
        return Err(ParseError::RowCountMismatch {
            expected: layout.row_extent(),
            available: 0,
        });
    }

    debug!(
        "thermo table: {} header lines, {} rows x {} columns, {} blank footer lines",
        layout.header_lines,
        layout.row_extent(),
        layout.columns.len(),
        layout.footer_lines
    );

    Ok(layout)
}
