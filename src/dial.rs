//! This module defines the `Dial` struct, which simulates a circular position
//! indicator driven by directional rotation instructions. It handles position
//! updates with modular wraparound and counts pointer passes through zero.

use crate::types::{
    DialError, Direction, Instruction, MAX_POINT, MIN_POINT, RANGE_SIZE, START_POINT,
};

/// Represents the dial: 100 discrete positions arranged in a circle.
///
/// The dial owns its current position and the cumulative zero-crossing count.
/// Both are mutated together, exclusively through the two rotation operations,
/// so the position invariant `0 <= position <= 99` holds after every step.
pub struct Dial {
    position: i64,
    zero_crossings: u64,
}

impl Default for Dial {
    fn default() -> Self {
        Self::new()
    }
}

impl Dial {
    /// Creates a new `Dial` pointing at the start position with no crossings
    /// recorded.
    pub fn new() -> Self {
        Self {
            position: START_POINT,
            zero_crossings: 0,
        }
    }

    /// Returns the current dial position, always within `[0, 99]`.
    pub fn position(&self) -> i64 {
        self.position
    }

    /// Returns the total number of times the pointer has passed through
    /// position `0` across all rotations so far.
    pub fn zero_crossings(&self) -> u64 {
        self.zero_crossings
    }

    /// Sets the dial position directly.
    ///
    /// Rotations route their final position through this method, so the range
    /// invariant is enforced at the single mutation point. A valid rotation
    /// can never land outside the face; an out-of-range value here means the
    /// caller computed a position without wrapping it.
    ///
    /// # Returns
    ///
    /// * `Ok(())` if `value` lies within `[MIN_POINT, MAX_POINT]`.
    /// * `Err(DialError::OutOfRange)` naming the value and bounds otherwise.
    pub fn set_position(&mut self, value: i64) -> Result<(), DialError> {
        if !(MIN_POINT..=MAX_POINT).contains(&value) {
            return Err(DialError::OutOfRange {
                value,
                min: MIN_POINT,
                max: MAX_POINT,
            });
        }
        self.position = value;
        Ok(())
    }

    /// Counts how many intermediate steps of a rotation land exactly on `0`.
    ///
    /// Walks offsets `i = 1..amount`, computing the position reached after
    /// `i` steps from `from` in `direction`. The starting position itself and
    /// the final landing step (`i = amount`) are deliberately excluded: a
    /// crossing is a pass through `0` strictly between start and end. A full
    /// revolution (`amount == 100` from `0`) therefore counts zero crossings,
    /// while two revolutions count one.
    pub fn count_zero_crossings(from: i64, amount: i64, direction: Direction) -> u64 {
        let mut crossings = 0;
        for i in 1..amount {
            let current = match direction {
                Direction::Right => normalize(from + i),
                Direction::Left => normalize(from - i),
            };
            if current == MIN_POINT {
                crossings += 1;
            }
        }
        crossings
    }

    /// Rotates the dial `amount` steps toward higher positions, wrapping past
    /// `99` to `0`. Crossings are accumulated from the pre-rotation position
    /// before the position itself is updated.
    pub fn turn_right(&mut self, amount: i64) -> Result<(), DialError> {
        self.zero_crossings += Self::count_zero_crossings(self.position, amount, Direction::Right);
        self.set_position(normalize(self.position + amount))
    }

    /// Rotates the dial `amount` steps toward lower positions, wrapping past
    /// `0` to `99`. Mirror of [`Dial::turn_right`].
    pub fn turn_left(&mut self, amount: i64) -> Result<(), DialError> {
        self.zero_crossings += Self::count_zero_crossings(self.position, amount, Direction::Left);
        let target = (self.position - amount) % RANGE_SIZE;
        if target < MIN_POINT {
            self.set_position(RANGE_SIZE + target)
        } else {
            self.set_position(target)
        }
    }

    /// Applies a single parsed instruction to the dial.
    pub fn apply(&mut self, instruction: &Instruction) -> Result<(), DialError> {
        match instruction.direction {
            Direction::Right => self.turn_right(instruction.amount),
            Direction::Left => self.turn_left(instruction.amount),
        }
    }

    /// Resets the dial to its initial configuration: start position, zero
    /// crossings cleared.
    pub fn reset(&mut self) {
        self.position = START_POINT;
        self.zero_crossings = 0;
    }
}

/// Reduces a raw position into the canonical range `[0, RANGE_SIZE)`.
/// Written as `((x % m) + m) % m` so the result is non-negative regardless of
/// the sign of `value`.
fn normalize(value: i64) -> i64 {
    ((value % RANGE_SIZE) + RANGE_SIZE) % RANGE_SIZE
}
