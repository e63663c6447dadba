//! Visiting order of the nine sub-cells for each orientation.
//!
//! Both tables start in the north-west corner and finish in the center. The
//! counter-clockwise table is the clockwise one reflected about the NW-SE
//! diagonal, with every child orientation flipped, which is what makes the two
//! traversals mirror images of each other at every depth.

use crate::core::data::orientation::Orientation;

/// One of the nine cells of a 3×3 subdivision, named by compass position
/// relative to the parent's center. North is towards negative y.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum SubCell {
    NorthWest,
    North,
    NorthEast,
    East,
    SouthEast,
    South,
    SouthWest,
    West,
    Center,
}

impl SubCell {
    /// Offset of this cell's center from the parent's center, in sub-cell
    /// widths.
    #[must_use]
    pub const fn offset(self) -> (f64, f64) {
        match self {
            Self::NorthWest => (-1.0, -1.0),
            Self::North => (0.0, -1.0),
            Self::NorthEast => (1.0, -1.0),
            Self::East => (1.0, 0.0),
            Self::SouthEast => (1.0, 1.0),
            Self::South => (0.0, 1.0),
            Self::SouthWest => (-1.0, 1.0),
            Self::West => (-1.0, 0.0),
            Self::Center => (0.0, 0.0),
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct TraversalStep {
    pub cell: SubCell,
    pub child: Orientation,
}

const fn step(cell: SubCell, child: Orientation) -> TraversalStep {
    TraversalStep { cell, child }
}

use Orientation::{Clockwise as CW, CounterClockwise as CCW};

const CLOCKWISE: [TraversalStep; 9] = [
    step(SubCell::NorthWest, CW),
    step(SubCell::North, CCW),
    step(SubCell::NorthEast, CW),
    step(SubCell::East, CCW),
    step(SubCell::SouthEast, CW),
    step(SubCell::South, CCW),
    step(SubCell::SouthWest, CW),
    step(SubCell::West, CCW),
    step(SubCell::Center, CW),
];

const COUNTER_CLOCKWISE: [TraversalStep; 9] = [
    step(SubCell::NorthWest, CCW),
    step(SubCell::West, CW),
    step(SubCell::SouthWest, CCW),
    step(SubCell::South, CW),
    step(SubCell::SouthEast, CCW),
    step(SubCell::East, CW),
    step(SubCell::NorthEast, CCW),
    step(SubCell::North, CW),
    step(SubCell::Center, CCW),
];

#[must_use]
pub const fn traversal(orientation: Orientation) -> &'static [TraversalStep; 9] {
    match orientation {
        Orientation::Clockwise => &CLOCKWISE,
        Orientation::CounterClockwise => &COUNTER_CLOCKWISE,
    }
}
