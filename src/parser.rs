//! This module provides the parser for dial rotation routines, utilizing the `pest` crate.
//! It defines the grammar for instruction lines and functions to parse input into
//! a sequence of `Instruction`s.

use crate::types::{DialError, Direction, Instruction, MAX_ROTATION_AMOUNT};
use pest::{
    error::{Error, ErrorVariant},
    iterators::Pair,
    Parser as PestParser, Span,
};
use pest_derive::Parser as PestParser;

/// Derives a `PestParser` for the routine grammar defined in `grammar.pest`.
#[derive(PestParser)]
#[grammar = "grammar.pest"]
pub struct RoutineParser;

/// Parses the given input string into a sequence of `Instruction`s.
///
/// This is the main entry point for parsing rotation routines. Surrounding
/// whitespace is trimmed from the whole input, then each line must match the
/// `([RL])(\d+)` instruction shape. Parsing is fail-fast: the first line that
/// does not match aborts with an error pointing at the offending spot, and a
/// routine must contain at least one instruction.
///
/// # Arguments
///
/// * `input` - A string slice containing the routine, one instruction per line.
///
/// # Returns
///
/// * `Ok(Vec<Instruction>)` if every line parses.
/// * `Err(DialError::ParseError)` on the first malformed line, or when an
///   amount cannot be represented or exceeds [`MAX_ROTATION_AMOUNT`].
pub fn parse(input: &str) -> Result<Vec<Instruction>, DialError> {
    let root = RoutineParser::parse(Rule::file, input.trim())
        .map_err(|e| DialError::ParseError(Box::new(e)))? //
        .next()
        .unwrap();

    root.into_inner()
        .filter(|p| p.as_rule() == Rule::instruction)
        .map(parse_instruction)
        .collect()
}

/// Parses a single instruction from a `Pair<Rule::instruction>`.
///
/// Extracts the direction letter and the decimal magnitude, and enforces the
/// rotation amount cap.
fn parse_instruction(pair: Pair<Rule>) -> Result<Instruction, DialError> {
    let mut pairs = pair.into_inner();

    let direction = parse_direction(pairs.next().unwrap())?;

    let amount_pair = pairs.next().unwrap();
    let span = amount_pair.as_span();
    let amount = amount_pair
        .as_str()
        .parse::<i64>()
        .map_err(|_| parse_error(&format!("Rotation amount too large: {}", span.as_str()), span))?;

    if amount > MAX_ROTATION_AMOUNT {
        return Err(parse_error(
            &format!("Rotation amount {amount} exceeds the maximum of {MAX_ROTATION_AMOUNT}"),
            span,
        ));
    }

    Ok(Instruction { direction, amount })
}

/// Parses a single direction from a `Pair<Rule::direction>`.
///
/// Supports 'R' for Right and 'L' for Left.
fn parse_direction(pair: Pair<Rule>) -> Result<Direction, DialError> {
    let span = pair.as_span();
    match pair.as_str() {
        "R" => Ok(Direction::Right),
        "L" => Ok(Direction::Left),
        _ => Err(parse_error(
            &format!("Invalid direction: {}", pair.as_str()),
            span,
        )),
    }
}

/// Creates a `DialError::ParseError` from a message and a `Span`.
fn parse_error(msg: &str, span: Span) -> DialError {
    DialError::ParseError(Box::new(Error::new_from_span(
        ErrorVariant::CustomError {
            message: msg.to_string(),
        },
        span,
    )))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_single_instruction() {
        let result = parse("R10");
        assert!(result.is_ok());

        let instructions = result.unwrap();
        assert_eq!(
            instructions,
            vec![Instruction {
                direction: Direction::Right,
                amount: 10,
            }]
        );
    }

    #[test]
    fn test_parse_routine() {
        let input = "R10\nL20\nR95";

        let instructions = parse(input).unwrap();
        assert_eq!(instructions.len(), 3);
        assert_eq!(
            instructions,
            vec![
                Instruction {
                    direction: Direction::Right,
                    amount: 10,
                },
                Instruction {
                    direction: Direction::Left,
                    amount: 20,
                },
                Instruction {
                    direction: Direction::Right,
                    amount: 95,
                },
            ]
        );
    }

    #[test]
    fn test_parse_trims_surrounding_whitespace() {
        let instructions = parse("\n\nR10\nL20\n\n").unwrap();
        assert_eq!(instructions.len(), 2);
    }

    #[test]
    fn test_parse_interior_whitespace_rejected() {
        // Only whitespace around the whole input is trimmed; indentation or
        // trailing spaces on a line are not part of the grammar.
        assert!(parse("R10\n  L20").is_err());
        assert!(parse("R10  \nL20").is_err());
        assert!(parse("R 10").is_err());
    }

    #[test]
    fn test_parse_invalid_direction() {
        let result = parse("X5");
        assert!(result.is_err());
        let error = result.unwrap_err();
        assert!(matches!(error, DialError::ParseError(_)));
    }

    #[test]
    fn test_parse_missing_amount() {
        let result = parse("R");
        assert!(result.is_err());
        assert!(matches!(result.unwrap_err(), DialError::ParseError(_)));
    }

    #[test]
    fn test_parse_amount_before_direction() {
        let result = parse("10R");
        assert!(result.is_err());
        assert!(matches!(result.unwrap_err(), DialError::ParseError(_)));
    }

    #[test]
    fn test_parse_negative_amount_rejected() {
        // The grammar admits no sign character; a negative magnitude is a
        // malformed line, not a reversed rotation.
        let result = parse("R-5");
        assert!(result.is_err());
        assert!(matches!(result.unwrap_err(), DialError::ParseError(_)));
    }

    #[test]
    fn test_parse_empty_input() {
        let result = parse("");
        assert!(result.is_err());
        assert!(matches!(result.unwrap_err(), DialError::ParseError(_)));
    }

    #[test]
    fn test_parse_blank_interior_line() {
        let result = parse("R10\n\nL20");
        assert!(result.is_err());
        assert!(matches!(result.unwrap_err(), DialError::ParseError(_)));
    }

    #[test]
    fn test_parse_zero_amount() {
        let instructions = parse("L0").unwrap();
        assert_eq!(
            instructions,
            vec![Instruction {
                direction: Direction::Left,
                amount: 0,
            }]
        );
    }

    #[test]
    fn test_parse_amount_over_cap() {
        let result = parse("R1000001");
        assert!(result.is_err());
        let error = result.unwrap_err();
        assert!(matches!(error, DialError::ParseError(_)));
        assert!(error.to_string().contains("exceeds the maximum"));

        let result = parse("R1000000");
        assert!(result.is_ok());
    }

    #[test]
    fn test_parse_amount_overflow() {
        let result = parse("R99999999999999999999");
        assert!(result.is_err());
        let error = result.unwrap_err();
        assert!(matches!(error, DialError::ParseError(_)));
        assert!(error.to_string().contains("too large"));
    }

    #[test]
    fn test_parse_error_points_at_offending_line() {
        let result = parse("R10\nL20\nQ7");
        assert!(result.is_err());
        let error = result.unwrap_err();
        // The pest error renders the line and column of the failure.
        assert!(error.to_string().contains("3"));
    }
}
