//! Position helpers for transformation parameters
//!
//! Focus and watermark placement parameters take either a single direction
//! (`"left"`, `"middle"`, ...) or a comma-joined pair mixing one horizontal
//! and one vertical direction, in either order.

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// One of the six placement directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Center,
    Right,
    Top,
    Middle,
    Bottom,
}

impl Direction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Left => "left",
            Direction::Center => "center",
            Direction::Right => "right",
            Direction::Top => "top",
            Direction::Middle => "middle",
            Direction::Bottom => "bottom",
        }
    }

    pub fn is_horizontal(&self) -> bool {
        matches!(self, Direction::Left | Direction::Center | Direction::Right)
    }

    pub fn is_vertical(&self) -> bool {
        !self.is_horizontal()
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Direction {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "left" => Ok(Direction::Left),
            "center" => Ok(Direction::Center),
            "right" => Ok(Direction::Right),
            "top" => Ok(Direction::Top),
            "middle" => Ok(Direction::Middle),
            "bottom" => Ok(Direction::Bottom),
            _ => Err(Error::InvalidPosition(format!("unknown direction: {}", s))),
        }
    }
}

/// Formats a single-direction position.
pub fn position(direction: Direction) -> String {
    direction.as_str().to_string()
}

/// Formats a two-direction position.
///
/// One direction must be horizontal and the other vertical; the pair keeps
/// the order it was given in.
///
/// # Example
/// ```
/// use picdn::position::{position_pair, Direction};
///
/// assert_eq!(position_pair(Direction::Left, Direction::Bottom).unwrap(), "left,bottom");
/// assert_eq!(position_pair(Direction::Bottom, Direction::Left).unwrap(), "bottom,left");
/// ```
pub fn position_pair(a: Direction, b: Direction) -> Result<String> {
    if a.is_horizontal() == b.is_horizontal() {
        return Err(Error::InvalidPosition(format!(
            "{} and {} are on the same axis",
            a, b
        )));
    }
    Ok(format!("{},{}", a, b))
}
