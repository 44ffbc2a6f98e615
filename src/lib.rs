//! # LAMMPS Log Parser
//!
//! A Rust library for extracting the thermodynamic output table from LAMMPS
//! log files and computing per-property averages.
//!
//! ## Features
//!
//! - **Directive-driven**: the table shape comes from the `run`, `thermo` and
//!   `thermo_style custom` commands echoed into the log
//! - **Typed columns**: every property becomes a `Vec<f64>` keyed by name
//! - **Averages**: the mean of every property is computed on construction
//! - **Serde support**: records serialise to `{"columns": ..., "averages": ...}`
//!
//! ## Quick Start
//!
//! ```no_run
//! use lammps_log_parser::LogParser;
//!
//! let record = LogParser::from_file("log.lammps")?.parse()?;
//!
//! println!("Read {} thermo rows", record.len());
//! if let Some(temp) = record.average("temp") {
//!     println!("Mean temperature: {:.2}", temp);
//! }
//! # Ok::<(), lammps_log_parser::Error>(())
//! ```
//!
//! ## Table Detection
//!
//! The log is scanned line by line. After a `run N` directive has been seen,
//! the first line made entirely of numbers starts the table. The table holds
//! `N / thermo + 1` rows, one per output interval plus step 0. Blank lines are
//! skipped, and anything after the last row is ignored.
//!
//! ```no_run
//! use lammps_log_parser::LogParser;
//!
//! let layout = LogParser::from_file("log.lammps")?.layout()?;
//! println!(
//!     "{} columns, {:?} rows, starting after {} header lines",
//!     layout.columns.len(),
//!     layout.row_count(),
//!     layout.header_lines
//! );
//! # Ok::<(), lammps_log_parser::Error>(())
//! ```
//!
//! ## Error Handling
//!
//! All operations return `Result<T, Error>`:
//!
//! ```no_run
//! use lammps_log_parser::{Error, LogParser, ParseError};
//!
//! match LogParser::from_file("log.lammps").and_then(|p| p.parse()) {
//!     Ok(record) => println!("{:?}", record.properties()),
//!     Err(Error::FileNotFound { path, .. }) => eprintln!("No such log: {}", path.display()),
//!     Err(Error::Parse(ParseError::MissingSchema)) => eprintln!("No thermo_style in log"),
//!     Err(err) => eprintln!("Error: {}", err),
//! }
//! ```

// Public API modules
pub mod error;
pub mod reader;
pub mod record;

// Re-export commonly used types
pub use error::{Error, ParseError, Result};
pub use layout::TableLayout;
pub use portable::{from_portable, to_portable, PortableLog};
pub use reader::{parse, LogParser, LogParserBuilder};
pub use record::{compute_averages, mean, Averages, Columns, LogRecord};

// Internal modules (public but not part of the high-level API)
pub mod directive;
pub mod layout;
pub mod portable;
