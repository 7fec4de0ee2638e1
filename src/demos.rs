//! Bundled demo routines, embedded at compile time and served through a
//! lazily initialized registry.

use crate::types::{DialError, Instruction};

use std::sync::RwLock;

// Default embedded routines
const DEMO_TEXTS: [(&str, &str); 3] = [
    ("warmup", include_str!("../demos/warmup.dial")),
    ("full-circle", include_str!("../demos/full-circle.dial")),
    ("zigzag", include_str!("../demos/zigzag.dial")),
];

lazy_static::lazy_static! {
    pub static ref DEMOS: RwLock<Vec<Demo>> = RwLock::new(Vec::new());
}

/// A named demo routine ready to run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Demo {
    pub name: String,
    pub instructions: Vec<Instruction>,
}

pub struct DemoManager;

impl DemoManager {
    /// Initialize the DemoManager with the embedded routines
    pub fn load() -> Result<(), DialError> {
        let mut demos = Vec::new();

        for (name, text) in DEMO_TEXTS {
            if let Ok(instructions) = crate::parser::parse(text) {
                demos.push(Demo {
                    name: name.to_string(),
                    instructions,
                });
            } else {
                eprintln!("Failed to parse demo routine {name}");
            }
        }

        // Store the loaded demos
        if let Ok(mut write_guard) = DEMOS.write() {
            *write_guard = demos;
        } else {
            return Err(DialError::FileError(
                "Failed to acquire write lock".to_string(),
            ));
        }

        Ok(())
    }

    /// Get the number of available demo routines
    pub fn count() -> usize {
        // Initialize with the embedded routines if not already initialized
        let _ = Self::load();

        DEMOS.read().map(|demos| demos.len()).unwrap_or(0)
    }

    /// Get the names of all available demo routines
    pub fn names() -> Vec<String> {
        // Initialize with the embedded routines if not already initialized
        let _ = Self::load();

        DEMOS
            .read()
            .map(|demos| demos.iter().map(|d| d.name.clone()).collect())
            .unwrap_or_default()
    }

    /// Get a demo routine by its name
    pub fn get(name: &str) -> Result<Demo, DialError> {
        // Initialize with the embedded routines if not already initialized
        let _ = Self::load();

        DEMOS
            .read()
            .map_err(|_| DialError::FileError("Failed to acquire read lock".to_string()))?
            .iter()
            .find(|d| d.name == name)
            .cloned()
            .ok_or_else(|| DialError::ValidationError(format!("Unknown demo routine: {name}")))
    }
}
