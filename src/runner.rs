//! This module provides the `Runner`, the sequential driver that applies a
//! routine to a `Dial` and appends each resulting position to an output sink.

use crate::dial::Dial;
use crate::types::{DialError, Instruction, RunSummary};
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::Path;

/// Drives a `Dial` through a routine, one instruction at a time.
///
/// The runner owns both the dial and the sink, so position updates and log
/// appends happen from a single place, strictly in instruction order. The
/// sink receives one line per instruction: the decimal position the dial
/// landed on.
///
/// Write failures are reported to stderr and tallied in the summary but do
/// not interrupt the run; the dial's state never depends on the sink.
pub struct Runner<W: Write> {
    dial: Dial,
    sink: W,
}

impl<W: Write> Runner<W> {
    /// Creates a runner with a fresh dial writing to the given sink.
    pub fn new(sink: W) -> Self {
        Self {
            dial: Dial::new(),
            sink,
        }
    }

    /// Applies every instruction in order and returns a summary of the run.
    ///
    /// Each instruction fully updates the dial (crossings first, then the
    /// position) before its position line is written, and before the next
    /// instruction is considered.
    ///
    /// # Returns
    ///
    /// * `Ok(RunSummary)` once all instructions have been applied.
    /// * `Err(DialError)` if applying an instruction fails; the summary of a
    ///   partial run is not reported.
    pub fn run(&mut self, instructions: &[Instruction]) -> Result<RunSummary, DialError> {
        let mut write_failures = 0;

        for instruction in instructions {
            self.dial.apply(instruction)?;

            if let Err(e) = writeln!(self.sink, "{}", self.dial.position()) {
                eprintln!("Error writing position to output: {e}");
                write_failures += 1;
            }
        }

        if let Err(e) = self.sink.flush() {
            eprintln!("Error flushing output: {e}");
        }

        Ok(RunSummary {
            instructions: instructions.len(),
            final_position: self.dial.position(),
            zero_crossings: self.dial.zero_crossings(),
            write_failures,
        })
    }

    /// Returns the dial driven by this runner.
    pub fn dial(&self) -> &Dial {
        &self.dial
    }
}

/// Opens the output sink at `path` in append mode, creating it if missing.
///
/// The sink is never truncated: re-running a routine appends to whatever the
/// file already holds. Callers wanting a fresh log clear the file themselves.
pub fn append_sink(path: &Path) -> Result<File, DialError> {
    OpenOptions::new()
        .append(true)
        .create(true)
        .open(path)
        .map_err(|e| {
            DialError::FileError(format!(
                "Failed to open output file {}: {}",
                path.display(),
                e
            ))
        })
}
