//! This module provides the `InstructionLoader` struct, responsible for loading
//! dial rotation routines from files and strings.

use crate::parser::parse;
use crate::types::{DialError, Instruction};
use std::fs;
use std::path::Path;

/// `InstructionLoader` is a utility struct for loading rotation routines.
/// It provides methods to load a routine from a file on disk or from string
/// content held in memory.
pub struct InstructionLoader;

impl InstructionLoader {
    /// Loads a rotation routine from the specified file path.
    ///
    /// # Arguments
    ///
    /// * `path` - A reference to the `Path` of the routine file to load.
    ///
    /// # Returns
    ///
    /// * `Ok(Vec<Instruction>)` if the file is successfully read and parsed.
    /// * `Err(DialError::FileError)` if the file cannot be read.
    /// * `Err(DialError::ParseError)` if the file content is not a valid routine.
    pub fn load(path: &Path) -> Result<Vec<Instruction>, DialError> {
        let content = fs::read_to_string(path).map_err(|e| {
            DialError::FileError(format!("Failed to read file {}: {}", path.display(), e))
        })?;

        parse(&content)
    }

    /// Loads a rotation routine from the provided string content.
    ///
    /// This is useful for routines that are not stored in files, e.g., from
    /// user input or embedded demos.
    ///
    /// # Arguments
    ///
    /// * `content` - A string slice containing the routine definition.
    ///
    /// # Returns
    ///
    /// * `Ok(Vec<Instruction>)` if the content is successfully parsed.
    /// * `Err(DialError::ParseError)` if the content is not a valid routine.
    pub fn load_from_string(content: &str) -> Result<Vec<Instruction>, DialError> {
        parse(content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Direction;
    use std::fs::File;
    use std::io::Write;
    use tempfile::tempdir;

    #[test]
    fn test_load_valid_routine() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("routine.dial");

        let mut file = File::create(&file_path).unwrap();
        file.write_all(b"R10\nL20\nR95\n").unwrap();

        let result = InstructionLoader::load(&file_path);
        assert!(result.is_ok());

        let instructions = result.unwrap();
        assert_eq!(instructions.len(), 3);
        assert_eq!(instructions[0].direction, Direction::Right);
        assert_eq!(instructions[0].amount, 10);
    }

    #[test]
    fn test_load_invalid_routine() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("invalid.dial");

        let mut file = File::create(&file_path).unwrap();
        file.write_all(b"This is not a valid routine").unwrap();

        let result = InstructionLoader::load(&file_path);
        assert!(matches!(result, Err(DialError::ParseError(_))));
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("does-not-exist.dial");

        let result = InstructionLoader::load(&file_path);
        assert!(matches!(result, Err(DialError::FileError(_))));
    }

    #[test]
    fn test_load_from_string() {
        let instructions = InstructionLoader::load_from_string("L5\nR5").unwrap();
        assert_eq!(instructions.len(), 2);
    }
}
