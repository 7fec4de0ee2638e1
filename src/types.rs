//! This module defines the core data structures and types used throughout the dial
//! simulator, including instructions, run summaries, and error types.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

use crate::Rule;

/// The lowest position on the dial face.
pub const MIN_POINT: i64 = 0;
/// The highest position on the dial face.
pub const MAX_POINT: i64 = 99;
/// The number of discrete positions on the dial face.
pub const RANGE_SIZE: i64 = MAX_POINT - MIN_POINT + 1;
/// The position the dial points at before any rotation is applied.
pub const START_POINT: i64 = 50;
/// The largest rotation magnitude accepted from input. Crossing counting walks
/// every intermediate step, so unbounded amounts are rejected up front.
pub const MAX_ROTATION_AMOUNT: i64 = 1_000_000;

/// The direction a rotation instruction turns the dial in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    /// Turn the dial toward lower positions, wrapping past `0` to `99`.
    Left,
    /// Turn the dial toward higher positions, wrapping past `99` to `0`.
    Right,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Left => write!(f, "L"),
            Direction::Right => write!(f, "R"),
        }
    }
}

/// A single rotation instruction: a direction and a step magnitude.
///
/// Instructions are produced by the parser from lines such as `R10` or `L20`
/// and applied to a [`crate::Dial`] one at a time, in input order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Instruction {
    /// The direction of the rotation.
    pub direction: Direction,
    /// The number of steps to rotate. Non-negative by construction; the
    /// input grammar only admits unsigned decimal magnitudes.
    pub amount: i64,
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.direction, self.amount)
    }
}

/// The outcome of running a routine to completion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunSummary {
    /// Number of instructions applied.
    pub instructions: usize,
    /// The dial position after the final instruction.
    pub final_position: i64,
    /// Total number of times the pointer passed through position `0`.
    pub zero_crossings: u64,
    /// Number of position lines that could not be written to the output sink.
    /// Write failures are reported and skipped; they never abort the run.
    pub write_failures: usize,
}

/// Represents various errors that can occur during dial simulation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DialError {
    /// Indicates an error during the parsing of an instruction routine.
    #[error("Instruction parsing error: {0}")]
    ParseError(#[from] Box<pest::error::Error<Rule>>),
    /// Indicates an attempt to set the dial to a position outside its face.
    /// Rotations never produce this; it only fires on direct misuse.
    #[error("Point must be between {min} and {max}. Value is {value}.")]
    OutOfRange { value: i64, min: i64, max: i64 },
    /// Indicates an error during the validation of a routine or a lookup.
    #[error("Routine validation error: {0}")]
    ValidationError(String),
    /// Indicates an error related to file system operations, such as reading
    /// routine files or opening the output sink.
    #[error("File error: {0}")]
    FileError(String),
}
