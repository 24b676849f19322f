//! Common battleship types: coordinates, shot outcomes and board errors.

use core::fmt;

/// A (row, col) pair addressing one board cell.
pub type Coord = (usize, usize);

/// Outcome of a shot fired at a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ShotResult {
    /// Shot landed on open water.
    Miss,
    /// Shot struck a ship segment that is still afloat.
    Hit,
    /// Shot struck the last intact segment of a ship.
    Sunk,
    /// Cell was already targeted earlier; nothing changed.
    AlreadyShot,
}

/// Errors returned by board operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardError {
    /// Coordinate lies outside the board.
    OutOfBounds { row: usize, col: usize },
    /// Ship placement extends past the board edge.
    ShipOutOfBounds,
    /// Ship placement touches another ship, diagonals included.
    ShipsTooClose,
    /// No valid position exists for the requested ship.
    UnableToPlaceShip,
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::OutOfBounds { row, col } => {
                write!(f, "coordinate ({}, {}) is outside the board", row, col)
            }
            BoardError::ShipOutOfBounds => write!(f, "ship placement is out of bounds"),
            BoardError::ShipsTooClose => {
                write!(f, "ship placement touches another ship")
            }
            BoardError::UnableToPlaceShip => write!(f, "unable to place ship"),
        }
    }
}

impl std::error::Error for BoardError {}
