//! Ship shape and per-segment hit tracking.

use crate::battleship::common::Coord;

/// Orientation of a ship on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    Horizontal,
    Vertical,
}

/// A linear run of cells with one hit flag per segment.
///
/// The shape is fixed at construction; only the hit flags mutate
/// afterwards, via [`Ship::register_hit`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Ship {
    length: usize,
    origin: Coord,
    orientation: Orientation,
    hits: Vec<bool>,
}

impl Ship {
    /// Build a ship of `length` cells starting at `origin` and running
    /// right or down depending on `orientation`. `length` must be at
    /// least one.
    pub fn new(length: usize, origin: Coord, orientation: Orientation) -> Self {
        Ship {
            length,
            origin,
            orientation,
            hits: vec![false; length],
        }
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn origin(&self) -> Coord {
        self.origin
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Cells occupied by the ship, in order from the origin.
    pub fn cells(&self) -> impl Iterator<Item = Coord> + '_ {
        let (row, col) = self.origin;
        let orientation = self.orientation;
        (0..self.length).map(move |i| match orientation {
            Orientation::Horizontal => (row, col + i),
            Orientation::Vertical => (row + i, col),
        })
    }

    fn segment_at(&self, coord: Coord) -> Option<usize> {
        self.cells().position(|c| c == coord)
    }

    pub fn occupies(&self, coord: Coord) -> bool {
        self.segment_at(coord).is_some()
    }

    /// Mark the segment at `coord` as hit. Returns `true` when the
    /// coordinate belongs to this ship.
    pub fn register_hit(&mut self, coord: Coord) -> bool {
        match self.segment_at(coord) {
            Some(i) => {
                self.hits[i] = true;
                true
            }
            None => false,
        }
    }

    /// Whether the segment at `coord` has been hit.
    pub fn is_hit(&self, coord: Coord) -> bool {
        self.segment_at(coord)
            .map(|i| self.hits[i])
            .unwrap_or(false)
    }

    /// A ship is sunk exactly when every segment has been hit.
    pub fn is_sunk(&self) -> bool {
        self.hits.iter().all(|&hit| hit)
    }
}
