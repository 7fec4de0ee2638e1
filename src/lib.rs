//! This crate provides the core logic for a circular dial simulator.
//! It includes modules for parsing rotation routines, applying them to the
//! dial state machine, logging resulting positions, and a set of bundled
//! demo routines.

pub mod demos;
pub mod dial;
pub mod loader;
pub mod parser;
pub mod runner;
pub mod types;

/// Re-exports the `Rule` enum from the parser module, used by the `pest` grammar.
pub use crate::parser::Rule;
/// Re-exports `Demo`, `DemoManager`, and `DEMOS` from the demos module.
pub use demos::{Demo, DemoManager, DEMOS};
/// Re-exports the `Dial` struct from the dial module.
pub use dial::Dial;
/// Re-exports the `InstructionLoader` struct from the loader module.
pub use loader::InstructionLoader;
/// Re-exports the `parse` function from the parser module.
pub use parser::parse;
/// Re-exports the `Runner` struct and the append-only sink constructor.
pub use runner::{append_sink, Runner};
/// Re-exports various types related to dial instructions and execution from the types module.
pub use types::{
    DialError, Direction, Instruction, RunSummary, MAX_POINT, MAX_ROTATION_AMOUNT, MIN_POINT,
    RANGE_SIZE, START_POINT,
};
