//! Hex coordinate system using axial coordinates (q, r).
//!
//! This module provides the coordinate types for the hexagonal word board:
//! - `HexCoord`: Identifies individual cells
//! - `Direction`: The six straight lines running through every cell
//!
//! Words are read along straight lines, and axial coordinates turn every line
//! into repeated addition of a fixed `(dq, dr)` step.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the six straight-line directions through a hex cell.
///
/// Opposite directions describe the same geometric line walked from either
/// end. Both are kept so that a line can be read starting from each endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// (1, 0)
    East,
    /// (-1, 0)
    West,
    /// (0, 1)
    SouthEast,
    /// (0, -1)
    NorthWest,
    /// (1, -1)
    NorthEast,
    /// (-1, 1)
    SouthWest,
}

impl Direction {
    /// All directions, in the order lines are scanned
    pub const ALL: [Direction; 6] = [
        Direction::East,
        Direction::West,
        Direction::SouthEast,
        Direction::NorthWest,
        Direction::NorthEast,
        Direction::SouthWest,
    ];

    /// Unit step `(dq, dr)` for this direction
    pub const fn delta(self) -> (i32, i32) {
        match self {
            Direction::East => (1, 0),
            Direction::West => (-1, 0),
            Direction::SouthEast => (0, 1),
            Direction::NorthWest => (0, -1),
            Direction::NorthEast => (1, -1),
            Direction::SouthWest => (-1, 1),
        }
    }
}

/// Axial coordinate for hex grid.
///
/// In axial coordinates:
/// - `q` increases going east (right)
/// - `r` increases going southeast
/// - The board rim is where |q|, |r| or |q + r| reaches the radius
///
/// Coordinates order by `q`, then `r`. The board iterates its cells in that
/// order.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default,
)]
pub struct HexCoord {
    /// Column (increases going east)
    pub q: i32,
    /// Row (increases going southeast)
    pub r: i32,
}

impl HexCoord {
    /// Create a new hex coordinate
    pub const fn new(q: i32, r: i32) -> Self {
        Self { q, r }
    }

    /// The cell `steps` cells away along `direction`
    pub fn offset(&self, direction: Direction, steps: i32) -> HexCoord {
        let (dq, dr) = direction.delta();
        HexCoord::new(self.q + dq * steps, self.r + dr * steps)
    }

    /// Whether this cell lies on a board of the given radius
    pub fn is_within(&self, radius: i32) -> bool {
        self.q.abs() <= radius && self.r.abs() <= radius && (self.q + self.r).abs() <= radius
    }

    /// Every cell of a board with the given radius, ordered by (q, r)
    pub fn all_within(radius: i32) -> Vec<HexCoord> {
        let radius = radius.max(0);
        (-radius..=radius)
            .flat_map(|q| (-radius..=radius).map(move |r| HexCoord::new(q, r)))
            .filter(|coord| coord.is_within(radius))
            .collect()
    }
}

impl fmt::Display for HexCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.q, self.r)
    }
}
