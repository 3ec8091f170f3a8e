use serde::{Deserialize, Serialize};
use std::fmt;

/// Active motion rule for the airplane. Exactly one is active at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum FlightMode {
    /// Closed-form figure-eight driven by absolute time
    #[default]
    Scripted,
    /// Keyboard and mouse piloting
    Manual,
}

impl FlightMode {
    pub fn label(&self) -> &'static str {
        match self {
            FlightMode::Scripted => "Scripted",
            FlightMode::Manual => "Manual",
        }
    }
}

impl fmt::Display for FlightMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Discrete directional commands for manual flight
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Forward,
    Backward,
    Left,
    Right,
    Up,
}

/// Directions held during one frame
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Directions {
    pub forward: bool,
    pub backward: bool,
    pub left: bool,
    pub right: bool,
    pub up: bool,
}

impl Directions {
    pub fn only(direction: Direction) -> Self {
        let mut directions = Self::default();
        directions.set(direction, true);
        directions
    }

    pub fn set(&mut self, direction: Direction, held: bool) {
        match direction {
            Direction::Forward => self.forward = held,
            Direction::Backward => self.backward = held,
            Direction::Left => self.left = held,
            Direction::Right => self.right = held,
            Direction::Up => self.up = held,
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Held directions in a fixed order
    pub fn iter(&self) -> impl Iterator<Item = Direction> + '_ {
        [
            (self.forward, Direction::Forward),
            (self.backward, Direction::Backward),
            (self.left, Direction::Left),
            (self.right, Direction::Right),
            (self.up, Direction::Up),
        ]
        .into_iter()
        .filter_map(|(held, direction)| held.then_some(direction))
    }
}
