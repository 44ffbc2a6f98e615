//! Plain serialisable form of a [`LogRecord`].
//!
//! The portable form carries `columns` and `averages` exactly as stored in
//! the record. Converting back trusts the averages and does not recompute
//! them, so a round trip reproduces the record bit for bit.

use crate::error::{Error, Result};
use crate::record::{Averages, Columns, LogRecord};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortableLog {
    pub columns: Columns,
    #[serde(default)]
    pub averages: Averages,
}

/// Copy a record into its portable form.
pub fn to_portable(record: &LogRecord) -> PortableLog {
    PortableLog {
        columns: record.columns().clone(),
        averages: record.averages().clone(),
    }
}

/// Rebuild a record from its portable form.
///
/// An empty `averages` map is treated as absent and the averages are derived.
pub fn from_portable(portable: PortableLog) -> Result<LogRecord> {
    LogRecord::with_averages(portable.columns, Some(portable.averages))
}

impl From<LogRecord> for PortableLog {
    fn from(record: LogRecord) -> Self {
        let (columns, averages) = record.into_parts();
        PortableLog { columns, averages }
    }
}

impl TryFrom<PortableLog> for LogRecord {
    type Error = Error;

    fn try_from(portable: PortableLog) -> Result<Self> {
        from_portable(portable)
    }
}

impl LogRecord {
    /// Serialise the record as JSON `{"columns": {...}, "averages": {...}}`.
    ///
    /// NaN and infinite samples have no JSON representation and are rejected.
    pub fn to_json(&self) -> Result<String> {
        // serde_json writes non-finite floats as null, which would not read back.
        if self
            .columns()
            .values()
            .flatten()
            .chain(self.averages().values())
            .any(|v| !v.is_finite())
        {
            return Err(Error::InvalidRecord(
                "non-finite values cannot be written as JSON".to_string(),
            ));
        }
        Ok(serde_json::to_string(&to_portable(self))?)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let portable: PortableLog = serde_json::from_str(json)?;
        from_portable(portable)
    }
}
