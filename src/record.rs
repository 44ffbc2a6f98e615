//! The parsed thermo output of one log: per-property samples and their means.

use crate::error::{Error, Result};
use crate::portable::PortableLog;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

/// Samples for each thermo property, keyed by property name.
pub type Columns = BTreeMap<String, Vec<f64>>;

/// Mean of each property, keyed by property name.
pub type Averages = BTreeMap<String, f64>;

/// Thermo output parsed from a LAMMPS log.
///
/// Every column has the same number of samples, and every averaged property
/// is also a column. A record is immutable once built.
///
/// # Examples
///
/// ```
/// use lammps_log_parser::LogRecord;
/// use std::collections::BTreeMap;
///
/// let mut columns = BTreeMap::new();
/// columns.insert("temp".to_string(), vec![300.0, 310.0, 320.0]);
///
/// let record = LogRecord::new(columns)?;
/// assert_eq!(record.average("temp"), Some(310.0));
/// # Ok::<(), lammps_log_parser::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(into = "PortableLog", try_from = "PortableLog")]
pub struct LogRecord {
    columns: Columns,
    averages: Averages,
}

impl LogRecord {
    /// Build a record from columns, deriving the average of every column.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidRecord`] if the columns differ in length and
    /// [`Error::EmptyColumn`] if a column has no samples.
    pub fn new(columns: Columns) -> Result<Self> {
        Self::with_averages(columns, None)
    }

    /// Build a record from columns and optionally pre-computed averages.
    ///
    /// Supplied averages are kept as given, without recomputation. `None` or
    /// an empty map means the averages are derived from the columns.
    pub fn with_averages(columns: Columns, averages: Option<Averages>) -> Result<Self> {
        check_rectangular(&columns)?;

        let averages = match averages {
            Some(averages) if !averages.is_empty() => {
                if let Some(name) = averages.keys().find(|k| !columns.contains_key(*k)) {
                    return Err(Error::InvalidRecord(format!(
                        "average given for '{}', which is not a column",
                        name
                    )));
                }
                averages
            }
            _ => compute_averages(&columns)?,
        };

        Ok(Self { columns, averages })
    }

    /// Parse a LAMMPS log file with default options.
    ///
    /// Shorthand for `LogParser::from_file(path)?.parse()`.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        crate::reader::LogParser::from_file(path)?.parse()
    }

    pub fn columns(&self) -> &Columns {
        &self.columns
    }

    pub fn averages(&self) -> &Averages {
        &self.averages
    }

    /// Samples of one property, if present.
    pub fn column(&self, name: &str) -> Option<&[f64]> {
        self.columns.get(name).map(Vec::as_slice)
    }

    pub fn average(&self, name: &str) -> Option<f64> {
        self.averages.get(name).copied()
    }

    /// Names of the logged properties.
    pub fn properties(&self) -> Vec<&str> {
        self.columns.keys().map(String::as_str).collect()
    }

    /// Number of samples per property.
    pub fn len(&self) -> usize {
        self.columns.values().next().map_or(0, Vec::len)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn into_parts(self) -> (Columns, Averages) {
        (self.columns, self.averages)
    }
}

fn check_rectangular(columns: &Columns) -> Result<()> {
    let mut lengths = columns.iter().map(|(name, values)| (name, values.len()));
    if let Some((first_name, expected)) = lengths.next() {
        if let Some((name, found)) = lengths.find(|(_, len)| *len != expected) {
            return Err(Error::InvalidRecord(format!(
                "column '{}' has {} samples but '{}' has {}",
                name, found, first_name, expected
            )));
        }
    }
    Ok(())
}

/// Arithmetic mean of a sample sequence, or `None` when it is empty.
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

/// Mean of every column.
///
/// # Errors
///
/// Returns [`Error::EmptyColumn`] naming the first column with no samples.
pub fn compute_averages(columns: &Columns) -> Result<Averages> {
    columns
        .iter()
        .map(|(name, values)| {
            mean(values)
                .map(|avg| (name.clone(), avg))
                .ok_or_else(|| Error::EmptyColumn(name.clone()))
        })
        .collect()
}
