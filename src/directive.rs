//! Recognition of the input-script directives LAMMPS echoes into its log.
//!
//! Matching is textual: each pattern is searched anywhere in the line, the
//! same way the echoed commands appear in a log. A later match overwrites an
//! earlier one, so the last directive seen before the thermo table governs.

use log::debug;
use regex::Regex;
use std::sync::OnceLock;

const RUN_PATTERN: &str = r"run\s+([0-9]+)";
const THERMO_PATTERN: &str = r"thermo\s+([0-9]+)";
const THERMO_STYLE_PATTERN: &str = r"thermo_style\s+(\S.*)";

struct Patterns {
    run: Regex,
    thermo: Regex,
    thermo_style: Regex,
}

fn patterns() -> &'static Patterns {
    static PATTERNS: OnceLock<Patterns> = OnceLock::new();
    PATTERNS.get_or_init(|| Patterns {
        run: Regex::new(RUN_PATTERN).expect("directive: invalid run regex"),
        thermo: Regex::new(THERMO_PATTERN).expect("directive: invalid thermo regex"),
        thermo_style: Regex::new(THERMO_STYLE_PATTERN)
            .expect("directive: invalid thermo_style regex"),
    })
}

/// Directive values accumulated while scanning the preamble of a log.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Directives {
    /// Number of MD steps from `run N`.
    pub run_length: Option<u64>,
    /// Sampling interval from `thermo N`.
    pub save_frequency: Option<u64>,
    /// Column names from `thermo_style <style> name...`.
    pub columns: Option<Vec<String>>,
}

impl Directives {
    pub fn new() -> Self {
        Self::default()
    }

    /// Check one line against every directive pattern, recording any matches.
    ///
    /// `line_no` is only used for logging.
    pub fn observe(&mut self, line: &str, line_no: usize) {
        let patterns = patterns();

        if let Some(steps) = capture_u64(&patterns.run, line) {
            debug!("line {}: run length {}", line_no, steps);
            self.run_length = Some(steps);
        }

        if let Some(freq) = capture_u64(&patterns.thermo, line) {
            debug!("line {}: thermo output every {} steps", line_no, freq);
            self.save_frequency = Some(freq);
        }

        if let Some(caps) = patterns.thermo_style.captures(line) {
            // First token is the style keyword ("custom"), the rest are column names.
            let columns: Vec<String> = caps[1]
                .split_whitespace()
                .skip(1)
                .map(str::to_string)
                .collect();
            debug!("line {}: thermo columns {:?}", line_no, columns);
            self.columns = Some(columns);
        }
    }

    /// True once a `run` directive has been seen, which arms data-row detection.
    pub fn has_run(&self) -> bool {
        self.run_length.is_some()
    }
}

fn capture_u64(re: &Regex, line: &str) -> Option<u64> {
    let caps = re.captures(line)?;
    match caps[1].parse() {
        Ok(v) => Some(v),
        Err(_) => {
            debug!("ignoring out-of-range directive value '{}'", &caps[1]);
            None
        }
    }
}

/// True when the line has at least one token and every token parses as `f64`.
pub fn is_numeric_row(line: &str) -> bool {
    let mut tokens = line.split_whitespace().peekable();
    tokens.peek().is_some() && tokens.all(|t| t.parse::<f64>().is_ok())
}
