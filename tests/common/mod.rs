//! Test utilities for building LAMMPS log files
#![allow(dead_code)]

use std::fmt::Write as _;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Builder for creating LAMMPS log text
pub struct ThermoLogBuilder {
    text: String,
}

impl ThermoLogBuilder {
    /// Create a builder with a typical LAMMPS banner and setup commands
    pub fn new() -> Self {
        Self::empty()
            .line("LAMMPS (2 Aug 2023 - Update 1)")
            .line("  using 1 OpenMP thread(s) per MPI task")
            .line("units           lj")
            .line("atom_style      atomic")
            .line("lattice         fcc 0.8442")
            .line("region          box block 0 10 0 10 0 10")
            .line("create_box      1 box")
            .line("Created orthogonal box = (0 0 0) to (16.795962 16.795962 16.795962)")
            .line("mass            1 1.0")
            .line("velocity        all create 3.0 87287 loop geom")
            .line("fix             1 all nve")
    }

    /// Create a builder with no preamble
    pub fn empty() -> Self {
        Self {
            text: String::new(),
        }
    }

    /// Append a raw line
    pub fn line(mut self, line: &str) -> Self {
        self.text.push_str(line);
        self.text.push('\n');
        self
    }

    /// Append `count` empty lines
    pub fn blank(mut self, count: usize) -> Self {
        for _ in 0..count {
            self.text.push('\n');
        }
        self
    }

    /// Append a `thermo_style custom ...` directive
    pub fn thermo_style(self, columns: &[&str]) -> Self {
        self.line(&format!("thermo_style    custom {}", columns.join(" ")))
    }

    /// Append a `thermo N` directive
    pub fn thermo(self, every: u64) -> Self {
        self.line(&format!("thermo          {}", every))
    }

    /// Append a `run N` directive followed by the usual setup chatter
    pub fn run(self, steps: u64) -> Self {
        self.line(&format!("run             {}", steps))
            .line("Generated 0 of 0 mixed pair_coeff terms from geometric mixing rule")
            .line("Neighbor list info ...")
            .line("  update: every = 20 steps, delay = 0 steps, check = no")
            .line("Setting up Verlet run ...")
            .line("  Unit style    : lj")
            .line("Per MPI rank memory allocation (min/avg/max) = 2.706 | 2.706 | 2.706 Mbytes")
    }

    /// Append the column title line LAMMPS prints above the table
    pub fn titles(self, columns: &[&str]) -> Self {
        self.line(&columns.join(" "))
    }

    /// Append one data row
    pub fn row(mut self, values: &[f64]) -> Self {
        let mut line = String::new();
        for v in values {
            write!(line, " {:>14}", v).unwrap();
        }
        self.text.push_str(&line);
        self.text.push('\n');
        self
    }

    /// Append `count` rows of `width` columns; see [`sample_value`]
    pub fn rows(mut self, count: usize, every: u64, width: usize) -> Self {
        for i in 0..count {
            let values: Vec<f64> = (0..width).map(|c| sample_value(i, every, c)).collect();
            self = self.row(&values);
        }
        self
    }

    /// Append the timing summary LAMMPS prints after a run
    pub fn loop_summary(self, steps: u64) -> Self {
        self.line(&format!(
            "Loop time of 0.462 on 1 procs for {} steps with 4000 atoms",
            steps
        ))
        .blank(1)
        .line("Performance: 935064.935 tau/day, 2164.502 timesteps/s")
        .line("Total wall time: 0:00:00")
    }

    pub fn build(self) -> String {
        self.text
    }

    /// Write the log into a fresh temporary directory
    pub fn write(self) -> (TempDir, PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("log.lammps");
        fs::write(&path, self.text).unwrap();
        (dir, path)
    }
}

/// Value in row `row`, column `col` of a generated table.
///
/// Column 0 is the step number; other columns are simple functions of the row.
pub fn sample_value(row: usize, every: u64, col: usize) -> f64 {
    if col == 0 {
        (row as u64 * every) as f64
    } else {
        row as f64 * col as f64 + 0.5
    }
}

/// A complete well-formed log: `run 1000`, `thermo 100`, columns step/temp/press,
/// 11 rows, then two blank lines ending the file.
pub fn standard_log() -> ThermoLogBuilder {
    ThermoLogBuilder::new()
        .thermo_style(&["step", "temp", "press"])
        .thermo(100)
        .run(1000)
        .titles(&["Step", "Temp", "Press"])
        .rows(11, 100, 3)
        .blank(2)
}

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}
